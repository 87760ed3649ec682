use chrono::Utc;
use tracing::debug;

use crate::domain::{
    capture::EncodedImage,
    common::entities::app_errors::CoreError,
    dietary::DietaryFilterId,
    recipe::entities::Recipe,
    session::{
        entities::{CookingStepper, SessionState, Stage},
        value_objects::{GenerationRequest, RequestToken, SessionEffect, SessionIntent},
    },
};

/// Message shown to the user whenever generation fails, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Sorry, I couldn't come up with recipes. Please try another photo.";

impl SessionState {
    /// Applies one user intent and returns the effects the caller must run.
    ///
    /// A rejected intent leaves the state untouched.
    pub fn apply(&mut self, intent: SessionIntent) -> Result<Vec<SessionEffect>, CoreError> {
        let effects = match intent {
            SessionIntent::SubmitImage { image } => self.submit_image(image)?,
            SessionIntent::ToggleFilter { filter_id } => self.toggle_filter(filter_id),
            SessionIntent::RetryGeneration => self.retry_generation()?,
            SessionIntent::SelectRecipe { index } => self.select_recipe(index)?,
            SessionIntent::ExitCooking => self.exit_cooking()?,
            SessionIntent::NextStep => self.move_step(CookingStepper::next)?,
            SessionIntent::PreviousStep => self.move_step(CookingStepper::previous)?,
            SessionIntent::ReadAloud => self.read_aloud()?,
            SessionIntent::StopReading => self.stop_reading()?,
            SessionIntent::AddToShoppingList { name } => {
                let name = normalize_item(&name)?;
                self.shopping_list.add(name);
                Vec::new()
            }
            SessionIntent::RemoveFromShoppingList { name } => {
                let name = normalize_item(&name)?;
                self.shopping_list.remove(name);
                Vec::new()
            }
            SessionIntent::OpenShoppingList => self.open_shopping_list(),
            SessionIntent::CloseShoppingList => self.close_shopping_list()?,
            SessionIntent::StartOver => self.start_over(),
        };

        self.updated_at = Utc::now();
        Ok(effects)
    }

    /// Applies a generation outcome if `token` is still the latest request.
    /// Returns `false` when the response was superseded and discarded.
    pub fn resolve_generation(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<Recipe>, CoreError>,
    ) -> bool {
        if self.pending_token != Some(token) {
            debug!(
                token = token.value(),
                latest = self.latest_token.value(),
                "Discarding superseded generation response"
            );
            return false;
        }

        self.pending_token = None;
        match outcome {
            Ok(recipes) => {
                self.recipes = recipes;
                self.error = None;
            }
            Err(_) => {
                self.recipes.clear();
                self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
            }
        }

        self.updated_at = Utc::now();
        true
    }

    fn submit_image(&mut self, image: EncodedImage) -> Result<Vec<SessionEffect>, CoreError> {
        if self.stage != Stage::Upload {
            return Err(CoreError::InvalidTransition(
                "an image can only be submitted from the upload stage".to_string(),
            ));
        }

        self.image = Some(image);
        Ok(self.begin_generation())
    }

    fn toggle_filter(&mut self, filter_id: DietaryFilterId) -> Vec<SessionEffect> {
        self.active_filters.toggle(filter_id);
        debug!(
            filter = filter_id.label(),
            active = self.active_filters.contains(filter_id),
            "Dietary filter toggled"
        );

        if self.image.is_some() {
            self.begin_generation()
        } else {
            Vec::new()
        }
    }

    fn retry_generation(&mut self) -> Result<Vec<SessionEffect>, CoreError> {
        if self.image.is_none() {
            return Err(CoreError::InvalidTransition(
                "there is no image to generate recipes from".to_string(),
            ));
        }

        Ok(self.begin_generation())
    }

    fn begin_generation(&mut self) -> Vec<SessionEffect> {
        let Some(image) = self.image.clone() else {
            return Vec::new();
        };

        let mut effects = self.leave_cooking();
        self.shopping_return = None;
        self.stage = Stage::RecipeList;
        self.recipes.clear();
        self.error = None;

        self.latest_token = self.latest_token.next();
        self.pending_token = Some(self.latest_token);

        effects.push(SessionEffect::Generate(GenerationRequest {
            token: self.latest_token,
            image,
            filters: self.active_filters.clone(),
        }));
        effects
    }

    fn select_recipe(&mut self, index: usize) -> Result<Vec<SessionEffect>, CoreError> {
        if self.stage != Stage::RecipeList {
            return Err(CoreError::InvalidTransition(
                "recipes can only be selected from the recipe list".to_string(),
            ));
        }

        let recipe = self.recipes.get(index).ok_or(CoreError::RecipeNotFound)?;
        self.cooking = Some(CookingStepper::new(index, recipe.steps.len()));
        self.stage = Stage::Cooking;
        Ok(Vec::new())
    }

    fn exit_cooking(&mut self) -> Result<Vec<SessionEffect>, CoreError> {
        if self.stage != Stage::Cooking {
            return Err(CoreError::InvalidTransition(
                "not in cooking mode".to_string(),
            ));
        }

        let effects = self.leave_cooking();
        self.stage = Stage::RecipeList;
        Ok(effects)
    }

    fn move_step(
        &mut self,
        step: fn(&mut CookingStepper) -> bool,
    ) -> Result<Vec<SessionEffect>, CoreError> {
        let stepper = self.active_stepper()?;
        let effects = silence(stepper);
        step(stepper);
        Ok(effects)
    }

    fn read_aloud(&mut self) -> Result<Vec<SessionEffect>, CoreError> {
        let text = self
            .current_step()
            .map(str::to_string)
            .ok_or_else(|| CoreError::InvalidTransition("not in cooking mode".to_string()))?;

        let stepper = self.active_stepper()?;
        let mut effects = silence(stepper);
        stepper.set_speaking(true);
        effects.push(SessionEffect::Speak { text });
        Ok(effects)
    }

    fn stop_reading(&mut self) -> Result<Vec<SessionEffect>, CoreError> {
        let stepper = self.active_stepper()?;
        Ok(silence(stepper))
    }

    fn open_shopping_list(&mut self) -> Vec<SessionEffect> {
        if self.stage == Stage::Shopping {
            return Vec::new();
        }

        // Cooking mode is hidden behind the overlay, so its speech stops.
        let effects = self.cooking.as_mut().map(silence).unwrap_or_default();
        self.shopping_return = Some(self.stage);
        self.stage = Stage::Shopping;
        effects
    }

    fn close_shopping_list(&mut self) -> Result<Vec<SessionEffect>, CoreError> {
        if self.stage != Stage::Shopping {
            return Err(CoreError::InvalidTransition(
                "the shopping list is not open".to_string(),
            ));
        }

        self.stage = self.shopping_return.take().unwrap_or(Stage::Upload);
        Ok(Vec::new())
    }

    fn start_over(&mut self) -> Vec<SessionEffect> {
        let effects = self.leave_cooking();

        self.stage = Stage::Upload;
        self.shopping_return = None;
        self.image = None;
        self.recipes.clear();
        self.error = None;
        self.active_filters.clear();
        // latest_token is kept so a late response can never match again
        self.pending_token = None;

        effects
    }

    fn leave_cooking(&mut self) -> Vec<SessionEffect> {
        self.cooking
            .take()
            .map(|mut stepper| silence(&mut stepper))
            .unwrap_or_default()
    }

    fn active_stepper(&mut self) -> Result<&mut CookingStepper, CoreError> {
        if self.stage != Stage::Cooking {
            return Err(CoreError::InvalidTransition(
                "not in cooking mode".to_string(),
            ));
        }

        self.cooking
            .as_mut()
            .ok_or_else(|| CoreError::InvalidTransition("not in cooking mode".to_string()))
    }
}

fn silence(stepper: &mut CookingStepper) -> Vec<SessionEffect> {
    if stepper.is_speaking() {
        stepper.set_speaking(false);
        vec![SessionEffect::CancelSpeech]
    } else {
        Vec::new()
    }
}

fn normalize_item(name: &str) -> Result<&str, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Invalid);
    }
    Ok(name)
}
