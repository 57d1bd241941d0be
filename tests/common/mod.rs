use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use utp_scrap::{request::PageSource, Record, Result};

pub fn record(id: &str, isbn: &str) -> Record {
    Record {
        id: id.into(),
        isbn: isbn.into(),
    }
}

/// Builds a listing page holding `(id, isbn)` items.
/// The ISBN is hyphenated the way the site prints it.
pub fn listing(items: &[(&str, &str)]) -> String {
    let sections: String = items
        .iter()
        .map(|(id, isbn)| {
            let (prefix, rest) = isbn.split_at(3usize.min(isbn.len()));
            format!(
                r#"<div class="section">
                    <div class="ttl"><h2><a href="http://www.utp.or.jp/book/{id}.html">Book {id}</a></h2></div>
                    <div class="detail"><span>ISBN{prefix}-{rest}</span><span>A5判</span></div>
                </div>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div class="searchResultArea">{sections}</div></body></html>"#
    )
}

/// Listing pages served from memory; pages that were not given are empty.
pub struct CatalogPages {
    pages: HashMap<usize, String>,
    requested: Mutex<Vec<usize>>,
}

impl CatalogPages {
    pub fn new(pages: Vec<String>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .enumerate()
                .map(|(i, html)| (i + 1, html))
                .collect(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<usize> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for CatalogPages {
    async fn fetch_page(&self, page_num: usize) -> Result<String> {
        self.requested.lock().unwrap().push(page_num);
        Ok(self
            .pages
            .get(&page_num)
            .cloned()
            .unwrap_or_else(|| listing(&[])))
    }
}
