//! Sink for lookup failures swallowed by [`Client::get_address`](crate::Client::get_address).

use crate::Error;
use std::fmt::Debug;

/// Receives every failure that [`Client::get_address`](crate::Client::get_address)
/// turns into `None`.
///
/// Install a custom implementation with [`ClientBuilder::logger`](crate::ClientBuilder::logger)
/// to route failures elsewhere or to inspect them in tests.
pub trait LookupLogger: Send + Sync + Debug {
    /// Called once per failed lookup. `house_number` is empty when the lookup
    /// was made without one.
    fn lookup_failed(&self, postcode: &str, house_number: &str, error: &Error);
}

/// Default logger, emitting one `tracing` error event per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl LookupLogger for TracingLogger {
    fn lookup_failed(&self, postcode: &str, house_number: &str, error: &Error) {
        match error {
            Error::Api(api) => tracing::error!(
                postcode,
                house_number,
                code = api.code(),
                error = %api,
                "Error looking up address"
            ),
            other => tracing::error!(
                postcode,
                house_number,
                error = %other,
                "Unexpected failure looking up address"
            ),
        }
    }
}
