//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

pub(crate) trait DepotExt {
    /// Fetch injected state, answering 500 when it was never injected.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!(state = type_name::<T>(), "state missing from depot");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_state_is_a_server_error() {
        let depot = Depot::new();

        let status = depot.obtain_or_500::<u32>().err().map(|error| error.code);

        assert_eq!(status, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn injected_state_is_returned() {
        let mut depot = Depot::new();

        depot.inject(42_u32);

        assert_eq!(depot.obtain_or_500::<u32>().ok(), Some(&42));
    }
}
