//! Row parsing for the tab-separated TOC export.
//!
//! Two export variants exist in the wild, differing only in whether the
//! sheet carries a TOC-page column:
//!
//! ```text
//! title <TAB> startPage <TAB> endPage                     # 3 columns
//! tocPage <TAB> title <TAB> startPage <TAB> endPage       # 4 columns
//! ```
//!
//! Rather than two parsers, one schema-detecting parser handles both: the
//! header row's field count selects the variant for the whole file.

use crate::types::Entry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RowError {
    #[error("header row has {0} tab-separated columns, expected 3 or 4")]
    UnknownSchema(usize),
    #[error("line {line}: expected {expected} tab-separated fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: TOC page index '{value}' is not a number")]
    BadTocPage { line: usize, value: String },
}

/// Column layout of the export, detected from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    /// `title, startPage, endPage`
    ThreeColumn,
    /// `tocPage, title, startPage, endPage`
    FourColumn,
}

impl Schema {
    /// Detect the schema from the header row's field count.
    pub fn detect(header: &str) -> Result<Schema, RowError> {
        match header.trim().split('\t').count() {
            3 => Ok(Schema::ThreeColumn),
            4 => Ok(Schema::FourColumn),
            n => Err(RowError::UnknownSchema(n)),
        }
    }

    /// Number of tab-separated fields a data row must have.
    pub fn columns(&self) -> usize {
        match self {
            Schema::ThreeColumn => 3,
            Schema::FourColumn => 4,
        }
    }
}

/// Parse one data row into an [`Entry`].
///
/// `line_number` is 1-based and only used for error messages. The row is
/// trimmed before splitting, so trailing `\r` from CRLF exports is harmless.
pub fn parse_row(line: &str, schema: Schema, line_number: usize) -> Result<Entry, RowError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() != schema.columns() {
        return Err(RowError::FieldCount {
            line: line_number,
            expected: schema.columns(),
            found: fields.len(),
        });
    }

    match schema {
        Schema::ThreeColumn => Ok(Entry {
            title: fields[0].to_string(),
            start_page: fields[1].to_string(),
            end_page: fields[2].to_string(),
            toc_page: None,
        }),
        Schema::FourColumn => {
            let toc_page = fields[0].parse::<u32>().map_err(|_| RowError::BadTocPage {
                line: line_number,
                value: fields[0].to_string(),
            })?;
            Ok(Entry {
                title: fields[1].to_string(),
                start_page: fields[2].to_string(),
                end_page: fields[3].to_string(),
                toc_page: Some(toc_page),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_three_columns() {
        assert_eq!(
            Schema::detect("Title\tStart\tEnd").unwrap(),
            Schema::ThreeColumn
        );
    }

    #[test]
    fn detect_four_columns() {
        assert_eq!(
            Schema::detect("TOC Page\tTitle\tStart\tEnd").unwrap(),
            Schema::FourColumn
        );
    }

    #[test]
    fn detect_rejects_other_counts() {
        assert_eq!(Schema::detect("Title\tStart"), Err(RowError::UnknownSchema(2)));
        assert_eq!(
            Schema::detect("a\tb\tc\td\te"),
            Err(RowError::UnknownSchema(5))
        );
    }

    #[test]
    fn three_column_row() {
        let e = parse_row("Song A\t6\t6", Schema::ThreeColumn, 2).unwrap();
        assert_eq!(e.title, "Song A");
        assert_eq!(e.start_page, "6");
        assert_eq!(e.end_page, "6");
        assert_eq!(e.toc_page, None);
    }

    #[test]
    fn four_column_row() {
        let e = parse_row("1\tSong B\t7\t8", Schema::FourColumn, 3).unwrap();
        assert_eq!(e.title, "Song B");
        assert_eq!(e.start_page, "7");
        assert_eq!(e.end_page, "8");
        assert_eq!(e.toc_page, Some(1));
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let e = parse_row("Song A\t6\t6\r", Schema::ThreeColumn, 2).unwrap();
        assert_eq!(e.end_page, "6");
    }

    #[test]
    fn leading_zero_pages_stay_raw() {
        let e = parse_row("Song A\t05\t5", Schema::ThreeColumn, 2).unwrap();
        assert_eq!(e.start_page, "05");
        assert_eq!(e.end_page, "5");
    }

    #[test]
    fn wrong_field_count_names_the_line() {
        let err = parse_row("Song A\t6", Schema::ThreeColumn, 7).unwrap_err();
        assert_eq!(
            err,
            RowError::FieldCount {
                line: 7,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn non_numeric_toc_page_is_an_error() {
        let err = parse_row("one\tSong A\t6\t6", Schema::FourColumn, 2).unwrap_err();
        assert_eq!(
            err,
            RowError::BadTocPage {
                line: 2,
                value: "one".to_string()
            }
        );
    }

    #[test]
    fn title_may_contain_non_tab_whitespace() {
        let e = parse_row("Ode to Joy\t12\t13", Schema::ThreeColumn, 2).unwrap();
        assert_eq!(e.title, "Ode to Joy");
    }
}
