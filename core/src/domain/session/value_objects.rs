use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    capture::EncodedImage,
    common::entities::app_errors::CoreError,
    dietary::{ActiveFilters, DietaryFilterId},
    recipe::value_objects::RecipeView,
    session::entities::Stage,
};

/// Monotonic id of a generation request within one session. Only the response
/// carrying the latest token is ever applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub token: RequestToken,
    pub image: EncodedImage,
    pub filters: ActiveFilters,
}

/// User intents emitted by presenters.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    SubmitImage { image: EncodedImage },
    ToggleFilter { filter_id: DietaryFilterId },
    RetryGeneration,
    SelectRecipe { index: usize },
    ExitCooking,
    NextStep,
    PreviousStep,
    ReadAloud,
    StopReading,
    AddToShoppingList { name: String },
    RemoveFromShoppingList { name: String },
    OpenShoppingList,
    CloseShoppingList,
    StartOver,
}

/// Side effects requested by a transition, executed by the session service.
#[derive(Debug, Clone)]
pub enum SessionEffect {
    Generate(GenerationRequest),
    Speak { text: String },
    CancelSpeech,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CookingView {
    pub recipe_index: usize,
    pub step_index: usize,
    pub step_count: usize,
    pub current_step: String,
    /// Whether the last speech request was a read-aloud. Set by read-aloud and
    /// cleared by stop-reading, a step change or leaving cooking mode. Audio
    /// finishing on its own does not clear it, so clients send stop-reading
    /// when playback ends.
    pub speaking: bool,
}

/// Read-only copy of the session handed to presenters.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub stage: Stage,
    pub image_preview: Option<String>,
    pub recipes: Vec<RecipeView>,
    pub selected_recipe: Option<usize>,
    pub cooking: Option<CookingView>,
    pub shopping_list: Vec<String>,
    pub active_filters: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of dispatching an intent. `generation` is set when the intent
/// started a new generation request; it resolves to the snapshot taken once
/// the response was applied or discarded.
#[derive(Debug)]
pub struct Dispatch {
    pub snapshot: SessionSnapshot,
    pub generation: Option<JoinHandle<SessionSnapshot>>,
}

impl Dispatch {
    pub async fn settled(self) -> Result<SessionSnapshot, CoreError> {
        match self.generation {
            Some(handle) => handle.await.map_err(|e| {
                error!("Generation task failed: {}", e);
                CoreError::InternalServerError
            }),
            None => Ok(self.snapshot),
        }
    }
}
