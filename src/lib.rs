//! Incremental ISBN scraper for the UTP catalog.
//!
//! Every run walks the search listing from the first page, stops at the first
//! book it already knows about and prepends whatever is new to the JSON file.

mod config;
mod error;
mod macros;
pub mod parse;
pub mod process;
pub mod request;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use parse::Record;

const BASE_URL: &str = "http://www.utp.or.jp/search/index.php";
const START_PAGE: usize = 1;
const FILE_PATH: &str = "data/utp.json";
