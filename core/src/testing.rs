use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use tokio::sync::oneshot;

use crate::{
    domain::{
        capture::EncodedImage, common::entities::app_errors::CoreError,
        common::services::Service, recipe::ports::LLMClient,
    },
    infrastructure::{session::InMemorySessionRepository, speech::TracingSpeechOutput},
};

pub const TWO_RECIPES: &str = r#"[
    {
        "recipeName": "Veggie Stir Fry",
        "difficulty": "Easy",
        "prepTime": "20 mins",
        "calories": 380,
        "ingredients": [
            { "name": "broccoli", "quantity": "1 head", "status": "available" },
            { "name": "soy sauce", "quantity": "2 tbsp", "status": "missing" }
        ],
        "steps": ["Chop the vegetables.", "Stir fry on high heat.", "Season and serve."]
    },
    {
        "recipeName": "Cheese Omelette",
        "difficulty": "Medium",
        "prepTime": "10 mins",
        "calories": 450,
        "ingredients": [
            { "name": "eggs", "quantity": "3", "status": "available" },
            { "name": "butter", "quantity": "1 tbsp", "status": "missing" }
        ],
        "steps": ["Whisk the eggs.", "Fold in the cheese."]
    }
]"#;

pub fn single_recipe(name: &str) -> String {
    format!(
        r#"[{{ "recipeName": "{name}", "difficulty": "Hard", "prepTime": "1 hour",
            "calories": 700, "ingredients": [], "steps": ["Cook {name}."] }}]"#
    )
}

pub fn sample_image() -> EncodedImage {
    EncodedImage::from_bytes(b"\xFF\xD8\xFF\xE0fake-jpeg", "image/jpeg").unwrap()
}

struct ScriptedReply {
    prompt_needle: String,
    gate: Option<oneshot::Receiver<()>>,
    result: Result<String, CoreError>,
}

#[derive(Default)]
struct ScriptedState {
    replies: VecDeque<ScriptedReply>,
    prompts: Vec<String>,
    mime_types: Vec<String>,
}

/// LLM double answering from a script. A reply is consumed by the first call
/// whose prompt contains its needle; gated replies wait until released.
#[derive(Clone, Default)]
pub struct ScriptedLLMClient {
    state: Arc<Mutex<ScriptedState>>,
}

impl ScriptedLLMClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, prompt_needle: &str, result: Result<String, CoreError>) {
        self.push(prompt_needle, None, result);
    }

    pub fn gated_reply(
        &self,
        prompt_needle: &str,
        result: Result<String, CoreError>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(prompt_needle, Some(rx), result);
        tx
    }

    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().prompts.len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.state.lock().unwrap().prompts.clone()
    }

    pub fn mime_types(&self) -> Vec<String> {
        self.state.lock().unwrap().mime_types.clone()
    }

    fn push(
        &self,
        prompt_needle: &str,
        gate: Option<oneshot::Receiver<()>>,
        result: Result<String, CoreError>,
    ) {
        self.state.lock().unwrap().replies.push_back(ScriptedReply {
            prompt_needle: prompt_needle.to_string(),
            gate,
            result,
        });
    }
}

impl LLMClient for ScriptedLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: EncodedImage,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.prompts.push(prompt.clone());
            state.mime_types.push(image.mime_type().to_string());
            let position = state
                .replies
                .iter()
                .position(|reply| prompt.contains(&reply.prompt_needle));
            position.and_then(|p| state.replies.remove(p))
        };

        let Some(reply) = reply else {
            return Err(CoreError::ExternalServiceError(
                "no scripted reply".to_string(),
            ));
        };

        if let Some(gate) = reply.gate {
            let _ = gate.await;
        }

        reply.result
    }
}

pub type TestService = Service<ScriptedLLMClient, InMemorySessionRepository, TracingSpeechOutput>;

pub fn test_service(llm: &ScriptedLLMClient) -> TestService {
    Service::new(
        llm.clone(),
        InMemorySessionRepository::new(),
        TracingSpeechOutput::new(),
    )
}
