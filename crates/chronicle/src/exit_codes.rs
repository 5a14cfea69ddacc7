//! Exit codes for the CLI

use chronicle_core::{ChronicleError, ConfigError, NotesError};
use chronicle_releases::ReleaseError;

/// Success
#[allow(dead_code)]
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// No release exists for the requested version
pub const RELEASE_NOT_FOUND: i32 = 3;

/// Release notes contain an item that could not be parsed
pub const MALFORMED_NOTES: i32 = 4;

/// Map an error to its exit code by inspecting the cause chain
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<ChronicleError>() {
            match err {
                ChronicleError::Config(_) => return CONFIG_ERROR,
                ChronicleError::Notes(_) => return MALFORMED_NOTES,
                _ => {}
            }
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return CONFIG_ERROR;
        }
        if cause.downcast_ref::<NotesError>().is_some() {
            return MALFORMED_NOTES;
        }
        if let Some(ReleaseError::NotFound(_)) = cause.downcast_ref::<ReleaseError>() {
            return RELEASE_NOT_FOUND;
        }
        if let Some(ReleaseError::ConfigurationError(_)) = cause.downcast_ref::<ReleaseError>() {
            return CONFIG_ERROR;
        }
    }
    ERROR
}
