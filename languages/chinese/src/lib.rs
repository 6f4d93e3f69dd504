pub mod dictionary;
pub mod hsk;
pub mod loader;
pub mod source;

pub use dictionary::{HanziDataset, SharedDataset};
pub use loader::{HanziLoader, ParsedDataset};
pub use source::{DatasetLocation, FileSource, HttpSource};

#[cfg(test)]
mod tests;
