//! TSV parsing and manifest generation.
//!
//! Stage 1 of the toclink pipeline. Reads the tab-separated TOC export,
//! discards the header row, and produces a structured [`Manifest`] that the
//! annotate stage consumes.
//!
//! ## Input
//!
//! A TSV file exported from the songbook's TOC sheet, one song per line
//! after the header. The header row's column count selects the schema
//! (see [`Schema`](crate::parse::Schema)); blank lines are skipped, so a
//! trailing newline does not produce a phantom row.
//!
//! ## Output
//!
//! A [`Manifest`] containing:
//! - All entries in input order
//! - The formatted `title;pages` listing (via [`format_entry`])
//! - The page-link map (4-column exports only)
//!
//! ## Validation
//!
//! Wrong field counts and non-numeric page numbers are typed errors naming
//! the offending line or song. The one deliberate leniency: page fields in
//! the *listing* are passed through as raw text, so the sheet's own quirks
//! (leading zeros, say) survive the round trip.

use crate::config::LayoutConfig;
use crate::parse::{self, RowError, Schema};
use crate::types::{Entry, Manifest, PageLinkMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Row error: {0}")]
    Row(#[from] RowError),
    #[error("input file is empty (missing header row): {0}")]
    Empty(PathBuf),
    #[error("start page '{value}' for '{title}' is not a number")]
    BadStartPage { title: String, value: String },
}

/// Read and parse a TOC export into a manifest.
pub fn extract(source: &Path, config: &LayoutConfig) -> Result<Manifest, ExtractError> {
    let text = fs::read_to_string(source)?;
    let (schema, entries) = parse_entries(&text, source)?;
    let page_links = build_page_link_map(&entries)?;
    Ok(Manifest {
        schema,
        entries,
        page_links,
        config: config.clone(),
    })
}

/// Parse the full file text: header detection, then one entry per line.
///
/// `source` is only used in the empty-file error message.
fn parse_entries(text: &str, source: &Path) -> Result<(Schema, Vec<Entry>), ExtractError> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| ExtractError::Empty(source.to_path_buf()))?;
    let schema = Schema::detect(header)?;

    let mut entries = Vec::new();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        // Line numbers are 1-based and the header is line 1.
        entries.push(parse::parse_row(line, schema, index + 2)?);
    }
    Ok((schema, entries))
}

/// Format one entry for the listing: `title;start` when the song is one
/// page, `title;start-end` otherwise.
///
/// The comparison is on the raw field strings, matching the sheet's own
/// convention: `"5"` and `"05"` format as a range even though they parse
/// to the same number.
pub fn format_entry(entry: &Entry) -> String {
    if entry.start_page == entry.end_page {
        format!("{};{}", entry.title, entry.start_page)
    } else {
        format!("{};{}-{}", entry.title, entry.start_page, entry.end_page)
    }
}

/// Group entries by TOC page, appending each song's start page in row order.
///
/// TOC pages with no songs never appear as keys. Entries without a TOC page
/// (3-column exports) contribute nothing, so the map is empty for them.
pub fn build_page_link_map(entries: &[Entry]) -> Result<PageLinkMap, ExtractError> {
    let mut map = PageLinkMap::new();
    for entry in entries {
        let Some(toc_page) = entry.toc_page else {
            continue;
        };
        let start = entry
            .start_page
            .trim()
            .parse::<u32>()
            .map_err(|_| ExtractError::BadStartPage {
                title: entry.title.clone(),
                value: entry.start_page.clone(),
            })?;
        map.entry(toc_page).or_default().push(start);
    }
    Ok(map)
}
