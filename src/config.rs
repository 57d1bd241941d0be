use std::env;
use std::path::PathBuf;

use crate::{BASE_URL, FILE_PATH, START_PAGE};

const BASE_URL_VAR: &str = "UTP_BASE_URL";
const DATA_PATH_VAR: &str = "UTP_DATA_PATH";

/// Where to scrape from and where the records live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listing URL without the `page` query parameter.
    pub base_url: String,
    pub start_page: usize,
    /// JSON file holding the stored records, newest first.
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            start_page: START_PAGE,
            data_path: PathBuf::from(FILE_PATH),
        }
    }
}

impl Config {
    /// Defaults, overridden by `UTP_BASE_URL` and `UTP_DATA_PATH` when they are set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Ok(data_path) = env::var(DATA_PATH_VAR) {
            config.data_path = data_path.into();
        }
        config
    }
}
