//! CLI output formatting for both pipeline stages.
//!
//! # Listing vs. status output
//!
//! The extract stage's listing is a data product, not status chrome: it is
//! pasted back into the songbook's formatted TOC sheet, so it must be
//! exactly one `title;pages` line per input row, in input order, nothing
//! else. Status displays (`check`, `annotate`, `build` summaries) are
//! information-first: each TOC page leads with its index and link count,
//! with capacity warnings as indented context.
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::extract::format_entry;
use crate::geometry::PageGeometry;
use crate::parse::Schema;
use crate::types::{Entry, Manifest, PageLinkMap};

// ============================================================================
// Extract listing
// ============================================================================

/// The formatted TOC listing: one `title;pages` line per entry, input order.
pub fn format_listing(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(format_entry).collect()
}

/// Print the listing to stdout.
pub fn print_listing(entries: &[Entry]) {
    for line in format_listing(entries) {
        println!("{}", line);
    }
}

// ============================================================================
// Check / annotate summaries
// ============================================================================

fn schema_label(schema: Schema) -> &'static str {
    match schema {
        Schema::ThreeColumn => "3 columns (title, start, end)",
        Schema::FourColumn => "4 columns (TOC page, title, start, end)",
    }
}

/// One summary line per TOC page, with a capacity warning where the stacked
/// links would run off the bottom of the page.
fn page_lines(map: &PageLinkMap, geometry: &PageGeometry) -> Vec<String> {
    let capacity = geometry.capacity();
    let mut lines = Vec::new();
    for (toc_page, destinations) in map {
        let n = destinations.len();
        if n > capacity {
            lines.push(format!(
                "    TOC page {}: {} links (exceeds page capacity of {})",
                toc_page, n, capacity
            ));
        } else {
            lines.push(format!("    TOC page {}: {} links", toc_page, n));
        }
    }
    lines
}

/// Format check output: schema, song count, and the link plan.
pub fn format_check_output(manifest: &Manifest, geometry: &PageGeometry) -> Vec<String> {
    let mut lines = vec![format!(
        "Songs: {} ({})",
        manifest.entries.len(),
        schema_label(manifest.schema)
    )];

    if manifest.page_links.is_empty() {
        lines.push("No TOC page column; nothing to annotate".to_string());
    } else {
        lines.push("TOC pages".to_string());
        lines.extend(page_lines(&manifest.page_links, geometry));
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(manifest: &Manifest, geometry: &PageGeometry) {
    for line in format_check_output(manifest, geometry) {
        println!("{}", line);
    }
}

/// Format annotate output: per-page counts plus the registration total and
/// where the links went.
pub fn format_annotate_output(
    map: &PageLinkMap,
    geometry: &PageGeometry,
    registered: usize,
    target: &str,
) -> Vec<String> {
    let mut lines = page_lines(map, geometry);
    lines.push(format!(
        "Registered {} links \u{2192} {}",
        registered, target
    ));
    lines
}

/// Print annotate output to stdout.
pub fn print_annotate_output(
    map: &PageLinkMap,
    geometry: &PageGeometry,
    registered: usize,
    target: &str,
) {
    for line in format_annotate_output(map, geometry, registered, target) {
        println!("{}", line);
    }
}
