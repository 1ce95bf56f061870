//! Line grouping: partition the token stream into ordered visual rows.

use std::collections::BTreeMap;

use super::RecognizedToken;

/// Ordered mapping from line index to the tokens of that visual row.
///
/// Rows are ordered by ascending line index; tokens within a row by
/// ascending `x`, with ties keeping their original stream order. Grouping
/// is a pure function of the input stream.
#[derive(Debug, Clone, Default)]
pub struct LineMap {
    lines: BTreeMap<i64, Vec<RecognizedToken>>,
}

impl LineMap {
    /// Group a token stream into lines.
    ///
    /// Tokens whose trimmed text is empty are excluded; no token is dropped
    /// for any other reason at this stage.
    pub fn group(tokens: &[RecognizedToken]) -> Self {
        let mut lines: BTreeMap<i64, Vec<RecognizedToken>> = BTreeMap::new();

        for token in tokens {
            if token.text.trim().is_empty() {
                continue;
            }
            lines.entry(token.line_index).or_default().push(token.clone());
        }

        for row in lines.values_mut() {
            // Stable sort: equal-x tokens keep stream order.
            row.sort_by_key(|t| t.x);
        }

        Self { lines }
    }

    /// Number of non-empty lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line survived grouping.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate rows in ascending line-index order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[RecognizedToken])> {
        self.lines.iter().map(|(idx, row)| (*idx, row.as_slice()))
    }
}

/// Space-join the text of one row, left to right.
pub fn join_text(row: &[RecognizedToken]) -> String {
    row.iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
