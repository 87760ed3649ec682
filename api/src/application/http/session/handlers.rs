use culinary_core::domain::session::value_objects::{Dispatch, SessionSnapshot};

use crate::application::http::server::api_entities::api_error::ApiError;

pub mod create_session;
pub mod delete_session;
pub mod get_session;
pub mod retry_generation;
pub mod start_over;
pub mod toggle_filter;
pub mod upload_image;
pub mod upload_image_data_uri;

/// Snapshot to answer with: the immediate one, or the one taken after the
/// generation this dispatch started has been applied.
pub(crate) async fn settle(dispatch: Dispatch, wait: bool) -> Result<SessionSnapshot, ApiError> {
    if wait {
        Ok(dispatch.settled().await?)
    } else {
        Ok(dispatch.snapshot)
    }
}
