//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

pub(crate) trait ResultExt<T> {
    /// Log the error under `context` and replace it with a bare 500.
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|source| {
            error!(context, "internal error: {source}");

            StatusError::internal_server_error()
        })
    }
}
