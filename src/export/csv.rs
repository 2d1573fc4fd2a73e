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

//! # CSV Text Serialization
//!
//! Renders a frame as CSV text: one header row of field names followed by
//! one line per data row, with `\r\n` terminators and a configurable
//! delimiter. The spreadsheet path reuses this with the Excel dialect
//! (semicolon delimiter) before structural parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{FexError, Result};
use crate::frame::FexFrame;

/// UTF-8 byte-order mark, prepended to CSV payloads when the Excel header
/// convention is requested.
pub const UTF8_BOM: char = '\u{feff}';

/// Settings bundle controlling CSV delimiter/header/encoding behavior.
///
/// Passed through unmodified to the underlying text serializer; the
/// `use_excel_header` flag additionally makes the CSV payload start with
/// the UTF-8 byte-order mark, a convention some spreadsheet locales need
/// to detect the encoding.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FexCsvConfig {
    /// Column delimiter byte.
    pub delimiter: u8,
    /// Whether to emit the header row of field names.
    pub headers: bool,
    /// Prefix the payload with a UTF-8 byte-order mark.
    pub use_excel_header: bool,
}

impl Default for FexCsvConfig {
    fn default() -> Self {
        FexCsvConfig {
            delimiter: b',',
            headers: true,
            use_excel_header: false,
        }
    }
}

impl FexCsvConfig {
    /// Excel dialect: semicolon delimiter with headers forced on.
    ///
    /// Used internally by the spreadsheet path, which splits the produced
    /// text on semicolons.
    pub fn excel() -> Self {
        FexCsvConfig {
            delimiter: b';',
            headers: true,
            use_excel_header: true,
        }
    }
}

/// Renders a single cell for CSV output.
///
/// Strings pass through verbatim; null and missing cells become the
/// empty string; other JSON values use their compact JSON rendering.
/// Cells can be missing when a frame arrives with ragged columns, e.g.
/// deserialized without going through [`FexFrame::new`] validation.
fn render_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Serializes a frame to CSV text honoring the given configuration.
///
/// Quoting follows the serializer's default rules, so cells containing the
/// delimiter, quotes, or line breaks come out quoted and the text re-parses
/// to the source frame's row and column counts.
pub fn frame_to_csv(frame: &FexFrame, config: &FexCsvConfig) -> Result<String> {
    if frame.fields.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    if config.headers {
        let names: Vec<&str> = frame.fields.iter().map(|f| f.name.as_str()).collect();
        writer.write_record(&names)?;
    }

    for row in 0..frame.row_count() {
        let cells: Vec<String> = frame
            .fields
            .iter()
            .map(|f| render_cell(f.values.get(row)))
            .collect();
        writer.write_record(&cells)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FexError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FexError::Csv(e.to_string()))
}
