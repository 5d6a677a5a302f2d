//! # toclink
//!
//! Add clickable table-of-contents links to songbook PDFs. The TOC sheet
//! export is the data source: one tab-separated row per song, and the page
//! numbers in it say exactly where every link should go.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! toclink processes the export in two independent stages with a JSON
//! manifest between them:
//!
//! ```text
//! 1. Extract   toc.tsv   →  manifest.json   (TSV → entries + page-link map)
//! 2. Annotate  manifest  →  links           (rectangles → host registrations)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect
//!   before letting anything near the PDF.
//! - **No manual hand-off**: the workflow this tool replaces copied a
//!   hand-maintained page map between two scripts; `build` computes the map
//!   once and feeds it straight into annotation.
//! - **Testability**: each stage is a pure function from data to data, so
//!   unit tests never need a real document host.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`extract`] | Stage 1 — parses the TSV export, formats the listing, builds the page-link map |
//! | [`annotate`] | Stage 2 — [`NavigationHost`](annotate::NavigationHost) seam + ordered link registration |
//! | [`parse`] | Schema-detecting row parser for the 3- and 4-column export variants |
//! | [`geometry`] | Pure pixel math: link rectangles from ordinal position |
//! | [`host`] | Backends: Acrobat console script and real `/Link` annotations via lopdf |
//! | [`config`] | `toclink.toml` loading and validation — the layout constants, made configurable |
//! | [`types`] | Shared types serialized between stages (`Entry`, `Manifest`, `PageLinkMap`) |
//! | [`output`] | CLI output formatting — the listing and per-TOC-page summaries |
//!
//! # Design Decisions
//!
//! ## Host Behind a Trait
//!
//! The rectangle math never talks to a document directly. Everything that
//! creates a link implements `NavigationHost`, so the iteration order and
//! geometry are unit-tested against a recorder, and the same core drives
//! both the Acrobat-script emitter and the lopdf writer.
//!
//! ## Geometry as Configuration
//!
//! Page height, margins, link size, and leading were constants in the
//! original workflow's annotation script. They are a `LayoutConfig` here,
//! carried inside the manifest so the annotate stage always uses the values
//! the extract stage was run with. The defaults reproduce the original
//! songbook layout exactly.
//!
//! ## Raw Page Strings in the Listing
//!
//! The formatted listing compares start and end page as raw text, not
//! numbers — the sheet that consumes the listing does the same, so `"5"` to
//! `"05"` is a range. The page-link map, which genuinely needs integers,
//! parses them and fails loudly on garbage.

pub mod annotate;
pub mod config;
pub mod extract;
pub mod geometry;
pub mod host;
pub mod output;
pub mod parse;
pub mod types;
