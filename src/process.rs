use std::collections::HashSet;

use chrono::Local;

use crate::parse::{parse_page, Record};
use crate::request::{HttpPageSource, PageSource};
use crate::store::{load_records, save_records};
use crate::{info_time, warn_time, Config, Result};

/// Outcome of scanning a single listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageScan {
    /// Records accepted from this page, in page order.
    pub results: Vec<Record>,
    /// Whether the next page should be requested.
    pub cont: bool,
}

/// Scrapes the site described by `config` and updates its records file.
pub async fn process_site(config: &Config) -> Result<()> {
    let source = HttpPageSource::from_config(config);
    update_records(&source, config).await?;
    Ok(())
}

/// Loads the stored records, scans `source` for everything newer than the stored head,
/// and writes the merged list back. Returns the list that was written.
///
/// Nothing is written if any page fails to load.
pub async fn update_records<S>(source: &S, config: &Config) -> Result<Vec<Record>>
where
    S: PageSource + ?Sized,
{
    let start_time = Local::now();
    info_time!("Started scraping");

    let stored: Vec<Record> = load_records(&config.data_path).await?;
    info_time!(
        "Loaded {} stored records from {}",
        stored.len(),
        config.data_path.display()
    );

    let new_records = scan_new_records(source, stored.first(), config.start_page).await?;
    info_time!(start_time, "Found {} new records.", new_records.len());

    let merged = merge_records(new_records, stored);
    let local_now = Local::now();
    save_records(&merged, &config.data_path).await?;
    info_time!(
        local_now,
        "Wrote {} records to file: {}",
        merged.len(),
        config.data_path.display()
    );

    Ok(merged)
}

/// Walks the listing from `start_page` until a page comes back empty or `head` shows up.
/// Returns the records seen before that, newest first.
pub async fn scan_new_records<S>(
    source: &S,
    head: Option<&Record>,
    start_page: usize,
) -> Result<Vec<Record>>
where
    S: PageSource + ?Sized,
{
    let mut new_records = Vec::new();

    for page_num in start_page.. {
        let html = source.fetch_page(page_num).await?;
        let records = parse_page(html).await?;
        info_time!("Parsed page {}: {} items", page_num, records.len());

        let PageScan { results, cont } = scan_page(records, head);
        new_records.extend(results);
        if !cont {
            break;
        }
    }

    Ok(new_records)
}

/// Accepts records up to, but not including, the first one matching `head`.
/// An empty page, or meeting `head`, ends the scan.
pub fn scan_page(records: Vec<Record>, head: Option<&Record>) -> PageScan {
    if records.is_empty() {
        info_time!("found EMPTY page");
        return PageScan {
            results: Vec::new(),
            cont: false,
        };
    }

    let mut results = Vec::with_capacity(records.len());
    for record in records {
        if head.is_some_and(|head| head.id == record.id) {
            info_time!("reached already recorded id {}", record.id);
            return PageScan {
                results,
                cont: false,
            };
        }
        results.push(record);
    }

    PageScan {
        results,
        cont: true,
    }
}

/// `new ++ stored`, dropping new records whose id is already stored or already taken
/// earlier in the batch.
pub fn merge_records(new_records: Vec<Record>, stored: Vec<Record>) -> Vec<Record> {
    let mut seen: HashSet<String> = stored.iter().map(|r| r.id.clone()).collect();

    let mut merged = Vec::with_capacity(new_records.len() + stored.len());
    for record in new_records {
        if seen.insert(record.id.clone()) {
            merged.push(record);
        } else {
            warn_time!("dropping duplicate id {}", record.id);
        }
    }
    merged.extend(stored);
    merged
}
