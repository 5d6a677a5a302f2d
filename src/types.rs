//! Shared types serialized between the two pipeline stages.
//!
//! The extract stage writes these to `manifest.json`; the annotate stage
//! reads them back. Keys of [`PageLinkMap`] become strings in the JSON
//! representation, matching the hand-maintained map the tool replaces.

use crate::config::LayoutConfig;
use crate::parse::Schema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map from TOC page index (0-indexed) to destination pages (1-indexed).
///
/// A `BTreeMap` so the annotate stage visits TOC pages in ascending order;
/// the destination list preserves input row order, which fixes the vertical
/// stacking order of the links on the page.
pub type PageLinkMap = BTreeMap<u32, Vec<u32>>;

/// One song row from the TOC export.
///
/// Page fields stay raw strings: the formatted listing compares them as
/// strings (`"5"` and `"05"` are different pages as far as the sheet is
/// concerned), and only the page-link map needs them as integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Song title, verbatim from the sheet.
    pub title: String,
    /// First page of the song, raw field text.
    pub start_page: String,
    /// Last page of the song, raw field text.
    pub end_page: String,
    /// TOC page the song is listed on (0-indexed). Absent in 3-column exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_page: Option<u32>,
}

/// Manifest output from the extract stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// Which column layout the source file used.
    pub schema: Schema,
    /// All song rows in input order.
    pub entries: Vec<Entry>,
    /// TOC page → destination pages. Empty for 3-column exports.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub page_links: PageLinkMap,
    /// Layout geometry the annotate stage should use.
    pub config: LayoutConfig,
}
