use hanzi_core::state::LoadStatus;
use hanzi_core::{LoadError, LookupError};

pub const EMPTY_QUERY: &str = "Please enter a Chinese character to search.";
pub const STILL_LOADING: &str =
    "The data has not finished loading yet. Try again in a few seconds.";
pub const LOAD_FAILED: &str =
    "The character data is unavailable. Restart to try loading it again.";
pub const NOT_FOUND: &str = "Character not found. Try another simplified Chinese character.";
pub const RESOURCE_UNREACHABLE: &str =
    "Could not load the dataset file. Make sure it is at the application root.";
pub const PARSE_FAILURE: &str = "Error while reading the dataset file.";

/// The engine reports an empty dataset the same way whether it is still
/// loading or failed; the load status tells them apart here.
pub fn lookup_error_message(error: &LookupError, status: &LoadStatus) -> &'static str {
    match error {
        LookupError::EmptyQuery => EMPTY_QUERY,
        LookupError::DatasetUnavailable => match status {
            LoadStatus::Loading => STILL_LOADING,
            LoadStatus::Ready { .. } | LoadStatus::Failed(_) => LOAD_FAILED,
        },
        LookupError::NotFound(_) => NOT_FOUND,
    }
}

pub fn load_error_message(error: &LoadError) -> &'static str {
    match error {
        LoadError::ResourceUnreachable { .. } => RESOURCE_UNREACHABLE,
        LoadError::ParseFailure(_) => PARSE_FAILURE,
    }
}
