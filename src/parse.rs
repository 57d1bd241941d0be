use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tokio::task::spawn_blocking;

use crate::{warn_time, Error, Result};

const SECTION_SELECTOR: &str = ".searchResultArea > .section";
const LINK_SELECTOR: &str = ".ttl > h2 > a";
const DETAIL_SELECTOR: &str = ".detail";
const ISBN_SELECTOR: &str = "span:nth-child(1)";
const ISBN_LABEL: &str = "ISBN";

/// A single book found on a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    /// Digits only, hyphens already stripped.
    pub isbn: String,
}

struct ListingSelectors {
    section: Selector,
    link: Selector,
    detail: Selector,
    isbn: Selector,
}

impl ListingSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            section: create_selector(SECTION_SELECTOR)?,
            link: create_selector(LINK_SELECTOR)?,
            detail: create_selector(DETAIL_SELECTOR)?,
            isbn: create_selector(ISBN_SELECTOR)?,
        })
    }
}

/// Parses one listing page on the blocking pool and returns its records in page order.
/// Items without a detail link or without an ISBN are skipped.
pub async fn parse_page(html: String) -> Result<Vec<Record>> {
    let records = spawn_blocking(move || parse_html(&html)).await??;
    Ok(records)
}

/// Synchronous half of [`parse_page`].
pub fn parse_html(html: &str) -> Result<Vec<Record>> {
    let doc = Html::parse_document(html);
    let selectors = ListingSelectors::new()?;

    // A full listing page has 20 items.
    let mut records = Vec::with_capacity(20);
    for (index, section) in doc.select(&selectors.section).enumerate() {
        match parse_section(section, &selectors) {
            Some(record) => records.push(record),
            None => warn_time!("skipping listing item {}: missing id or ISBN", index),
        }
    }
    Ok(records)
}

fn parse_section(section: ElementRef, selectors: &ListingSelectors) -> Option<Record> {
    let id = section
        .select(&selectors.link)
        .next()
        .and_then(|link| link.value().attr("href"))
        .and_then(id_from_href)?;

    let isbn_raw: String = section
        .select(&selectors.detail)
        .next()?
        .select(&selectors.isbn)
        .next()?
        .text()
        .collect();
    let isbn = isbn_from_text(&isbn_raw)?;

    Some(Record { id, isbn })
}

/// `/book/123.html?from=search` -> `123`
fn id_from_href(href: &str) -> Option<String> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let stem = match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    };
    (!stem.is_empty()).then(|| stem.to_string())
}

/// `ISBN978-4-13-012345-6` -> `9784130123456`
///
/// Hyphens go first, then the value is the leading run of digits between the first
/// label and the next one. A trailing `X` is kept for ISBN-10 check digits.
fn isbn_from_text(text: &str) -> Option<String> {
    let stripped = text.replace('-', "");
    let value = stripped.split(ISBN_LABEL).nth(1)?;
    let value = value.trim().trim_start_matches([':', '：']).trim_start();

    let digits = value.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let mut isbn = value[..digits].to_string();
    if digits == 9 && value[digits..].starts_with(['X', 'x']) {
        isbn.push('X');
    }
    Some(isbn)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
