use utoipa::OpenApi;

use crate::application::http::{
    cooking::router::CookingApiDoc, dietary::router::DietaryApiDoc,
    health::router::HealthApiDoc, session::router::SessionApiDoc,
    shopping::router::ShoppingApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Culinary Assistant API",
        description = "Turns a photo of available ingredients into recipes, then guides cooking step by step"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/dietary-filters", api = DietaryApiDoc),
        (path = "/sessions", api = SessionApiDoc),
        (path = "/sessions", api = CookingApiDoc),
        (path = "/sessions", api = ShoppingApiDoc),
    )
)]
pub struct ApiDoc;
