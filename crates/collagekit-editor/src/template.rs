//! Layout template identifiers.
//!
//! Templates are opaque to the viewport engine but the editor needs to know
//! how many clips a layout holds. Identifiers encode rows of tiles as
//! dash-separated column counts: `"2-1"` is a row of two tiles above a row
//! of one, three clips total. The selection UI lives in the host; this
//! module only parses the identifier it hands over.

use collagekit_core::error::TemplateError;
use serde::{Deserialize, Serialize};

/// A parsed layout template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    id: String,
    rows: Vec<usize>,
}

impl Template {
    /// Layout identifiers shipped with the legacy collage widget.
    pub const BUILT_IN: &'static [&'static str] = &[
        "1", "2", "3", "1-2", "2-1", "1-3", "3-1", "2-2", "1-2-1", "3-3",
    ];

    /// Parses a dash-separated row layout identifier.
    ///
    /// Each segment is the number of tiles in one row and must be a
    /// positive integer. Anything else is rejected as
    /// [`TemplateError::InvalidTemplate`].
    pub fn parse(id: &str) -> Result<Self, TemplateError> {
        let invalid = || TemplateError::InvalidTemplate { id: id.to_string() };

        if id.is_empty() {
            return Err(invalid());
        }

        let rows = id
            .split('-')
            .map(|part| match part.parse::<usize>() {
                Ok(columns) if columns > 0 => Ok(columns),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: id.to_string(),
            rows,
        })
    }

    /// The identifier this template was parsed from.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tiles per row, top to bottom.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Total number of clips this layout holds.
    pub fn clip_count(&self) -> usize {
        self.rows.iter().sum()
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_row() {
        let template = Template::parse("3").unwrap();
        assert_eq!(template.rows(), &[3]);
        assert_eq!(template.clip_count(), 3);
    }

    #[test]
    fn test_parse_multi_row() {
        let template = Template::parse("1-2-1").unwrap();
        assert_eq!(template.rows(), &[1, 2, 1]);
        assert_eq!(template.clip_count(), 4);
    }

    #[test]
    fn test_rejects_malformed_ids() {
        for id in ["", "0", "2-0", "a", "2-", "-1", "2--1", "1.5"] {
            assert!(
                Template::parse(id).is_err(),
                "expected {:?} to be rejected",
                id
            );
        }
    }

    #[test]
    fn test_built_in_catalog_parses() {
        for id in Template::BUILT_IN {
            let template = Template::parse(id).unwrap();
            assert!(template.clip_count() >= 1);
            assert_eq!(template.id(), *id);
        }
    }
}
