pub mod api_error;
pub mod response;
pub mod validate_json;
