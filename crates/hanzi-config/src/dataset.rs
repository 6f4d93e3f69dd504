use serde::{Deserialize, Serialize};

/// File name of the dataset, resolved against the application origin
pub const DATASET_FILE_NAME: &str = "hanzi_para_no_olvidar.csv";

fn default_origin() -> String {
    ".".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    /// Where the application is served from: an `http(s)://` base URL or a local directory
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl DatasetConfig {
    pub fn file_name(&self) -> &'static str {
        DATASET_FILE_NAME
    }
}
