use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    capture::EncodedImage,
    common::generate_uuid_v7,
    dietary::ActiveFilters,
    recipe::{entities::Recipe, value_objects::RecipeView},
    session::{
        entities::{CookingStepper, ShoppingList, Stage},
        value_objects::{CookingView, RequestToken, SessionSnapshot},
    },
};

/// Everything one user session holds. Only mutated through
/// [`SessionState::apply`] and [`SessionState::resolve_generation`].
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) id: Uuid,
    pub(crate) stage: Stage,
    pub(crate) shopping_return: Option<Stage>,
    pub(crate) image: Option<EncodedImage>,
    pub(crate) recipes: Vec<Recipe>,
    pub(crate) cooking: Option<CookingStepper>,
    pub(crate) shopping_list: ShoppingList,
    pub(crate) active_filters: ActiveFilters,
    pub(crate) latest_token: RequestToken,
    pub(crate) pending_token: Option<RequestToken>,
    pub(crate) error: Option<String>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new() -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            stage: Stage::Upload,
            shopping_return: None,
            image: None,
            recipes: Vec::new(),
            cooking: None,
            shopping_list: ShoppingList::new(),
            active_filters: ActiveFilters::new(),
            latest_token: RequestToken::default(),
            pending_token: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Time of the last applied intent or resolved generation.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn image(&self) -> Option<&EncodedImage> {
        self.image.as_ref()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.cooking
            .as_ref()
            .and_then(|cooking| self.recipes.get(cooking.recipe_index()))
    }

    pub fn cooking(&self) -> Option<&CookingStepper> {
        self.cooking.as_ref()
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping_list
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        &self.active_filters
    }

    pub fn is_loading(&self) -> bool {
        self.pending_token.is_some()
    }

    pub fn pending_token(&self) -> Option<RequestToken> {
        self.pending_token
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_step(&self) -> Option<&str> {
        let cooking = self.cooking.as_ref()?;
        self.selected_recipe()?
            .steps
            .get(cooking.step_index())
            .map(String::as_str)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let cooking = self.cooking.as_ref().map(|stepper| CookingView {
            recipe_index: stepper.recipe_index(),
            step_index: stepper.step_index(),
            step_count: stepper.step_count(),
            current_step: self.current_step().unwrap_or_default().to_string(),
            speaking: stepper.is_speaking(),
        });

        SessionSnapshot {
            id: self.id,
            stage: self.stage,
            image_preview: self.image.as_ref().map(EncodedImage::data_uri),
            recipes: self.recipes.iter().map(RecipeView::from).collect(),
            selected_recipe: self.cooking.as_ref().map(CookingStepper::recipe_index),
            cooking,
            shopping_list: self.shopping_list.items().to_vec(),
            active_filters: self
                .active_filters
                .ids()
                .into_iter()
                .map(str::to_string)
                .collect(),
            loading: self.is_loading(),
            error: self.error.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
