pub mod dictionary;
pub mod error;
pub mod preprocess;
pub mod state;
pub mod types;

pub use error::{LoadError, LookupError, RowWarning};
pub use types::{AppEvent, COLUMN_TABLE, Column, HanziRecord, TextSource, UiEvent};
