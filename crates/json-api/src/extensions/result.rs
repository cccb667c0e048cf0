//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map any error to a logged internal server error carrying `brief`.
pub(crate) trait ResultExt<T> {
    fn or_500(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{brief}: {error}");

            StatusError::internal_server_error().brief(brief)
        })
    }
}
