//! Copyright © 2025-2026 Dunimd Team. All Rights Reserved.
//!
//! This file is part of Fex.
//! The Fex project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Sheet Cell Normalization
//!
//! Turns Excel-dialect CSV text into a cell grid for workbook assembly.
//! The pipeline applies two textual normalizations before parsing: all
//! double quotes are stripped, and whitespace sitting between two digits
//! is removed (locale-specific thousands separators). Per cell, a decimal
//! comma between digits is rewritten to a period, then numeric parsing is
//! attempted.
//!
//! The coercion is a documented, intentionally lossy heuristic: a value
//! that is simultaneously a formatted number and a meaningful string
//! (a zero-padded code, for instance) is silently coerced to a number.
//! Downstream consumers depend on this behavior; do not tighten it.

use serde::{Deserialize, Serialize};

/// One spreadsheet cell after coercion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FexCell {
    /// Cell whose normalized text parsed as a number.
    Number(f64),
    /// Cell kept as its original string.
    Text(String),
}

/// Strips double quotes and removes single whitespace characters that sit
/// between two digits.
///
/// Quote stripping runs first, so digits separated only by quotes become
/// adjacent before the whitespace pass. Adjacency is then judged against
/// that quote-stripped text, not against partially collapsed output:
/// `"1  2"` keeps both spaces (neither has digits on both sides) while
/// `"1 2 3"` collapses to `"123"`.
pub fn normalize_csv_text(text: &str) -> String {
    let chars: Vec<char> = text.chars().filter(|c| *c != '"').collect();
    let mut out = String::with_capacity(chars.len());
    for (i, c) in chars.iter().enumerate() {
        if c.is_whitespace() && *c != '\r' && *c != '\n' {
            let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if prev_digit && next_digit {
                continue;
            }
        }
        out.push(*c);
    }
    out
}

/// Rewrites a comma between two digits to a period (decimal-separator
/// normalization, `"3,14"` to `"3.14"`).
pub fn normalize_decimal_separator(cell: &str) -> String {
    let chars: Vec<char> = cell.chars().collect();
    let mut out = String::with_capacity(chars.len());
    for (i, c) in chars.iter().enumerate() {
        if *c == ','
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit())
        {
            out.push('.');
        } else {
            out.push(*c);
        }
    }
    out
}

/// Best-effort numeric coercion of a single cell.
///
/// The decimal separator is normalized first; if the result, ignoring
/// surrounding whitespace, parses as a finite float the cell becomes a
/// number, otherwise the original string is kept. An empty or
/// whitespace-only cell coerces to the number 0, the value the host
/// formatter's number conversion has always produced for blank cells
/// (null frame cells render as empty CSV cells, so this keeps their
/// type stable in the workbook). Never fails.
///
/// Unlike that conversion, non-finite spellings such as `"Infinity"`
/// stay text; a non-finite value has no numeric cell representation in
/// the workbook.
pub fn coerce_cell(cell: &str) -> FexCell {
    let normalized = normalize_decimal_separator(cell);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return FexCell::Number(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(num) if num.is_finite() => FexCell::Number(num),
        _ => FexCell::Text(cell.to_string()),
    }
}

/// Splits normalized Excel-dialect CSV text into a coerced cell grid.
///
/// Rows split on `\r\n`, cells on `;`. A trailing empty segment produced
/// by the final row terminator is dropped rather than parsed as a row.
pub fn csv_to_grid(text: &str) -> Vec<Vec<FexCell>> {
    let mut rows: Vec<&str> = text.split("\r\n").collect();
    if rows.last() == Some(&"") {
        rows.pop();
    }
    rows.iter()
        .map(|row| row.split(';').map(coerce_cell).collect())
        .collect()
}

/// Full normalization pipeline: CSV text to cell grid.
pub fn grid_from_csv(text: &str) -> Vec<Vec<FexCell>> {
    csv_to_grid(&normalize_csv_text(text))
}
