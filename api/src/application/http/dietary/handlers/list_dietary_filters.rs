use culinary_core::domain::dietary::{DIETARY_OPTIONS, DietaryFilter};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct DietaryFilterDto {
    #[schema(example = "gluten-free")]
    pub id: String,
    #[schema(example = "Gluten-Free")]
    pub label: String,
}

impl From<&DietaryFilter> for DietaryFilterDto {
    fn from(filter: &DietaryFilter) -> Self {
        Self {
            id: filter.id.to_string(),
            label: filter.label.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct DietaryFiltersResponse {
    pub data: Vec<DietaryFilterDto>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "dietary",
    summary = "List dietary filters",
    description = "The dietary restrictions a session can toggle, in display order",
    responses(
        (status = 200, body = DietaryFiltersResponse)
    )
)]
pub async fn list_dietary_filters() -> Result<Response<DietaryFiltersResponse>, ApiError> {
    Ok(Response::OK(DietaryFiltersResponse {
        data: DIETARY_OPTIONS.iter().map(DietaryFilterDto::from).collect(),
    }))
}
