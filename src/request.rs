use async_trait::async_trait;
use reqwest::Client;

use crate::{info_time, Config, Error, Result};

/// Anything that can hand out the HTML of listing page `page_num`.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page_num: usize) -> Result<String>;
}

/// Fetches listing pages over HTTP, reusing one `Client` for the whole run.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    base_url: String,
}

impl HttpPageSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Client::new(), config.base_url.clone())
    }

    fn page_url(&self, page_num: usize) -> String {
        format!("{}?page={page_num}", self.base_url)
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    /// Requests a page and returns a `Result<String>` containing the HTML.
    async fn fetch_page(&self, page_num: usize) -> Result<String> {
        info_time!("Requesting page: {page_num}");

        let res = self.client.get(self.page_url(page_num)).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                page: page_num,
                status,
            });
        }
        let html = res.text().await?;
        Ok(html)
    }
}
