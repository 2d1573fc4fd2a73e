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

//! # Export Encoder
//!
//! The [`FexExporter`] converts frames and log models into external
//! representations and computes deterministic suggested file names:
//!
//! - plain text with UTF-8 charset for log models
//! - CSV with an optional byte-order-mark prefix
//! - a single-sheet XLSX workbook with numeric cell coercion
//! - compact JSON
//! - trace JSON in the shape named by the frame's `traceFormat` metadata
//!
//! Each invocation is independent: the exporter holds no mutable state,
//! every payload is constructed per call and handed to the save
//! collaborator, and nothing awaits the collaborator's completion.
//!
//! File names follow `<title>-<kind>[-as-<transform>]-<timestamp><ext>`
//! with the timestamp rendered as local `%Y-%m-%d %H:%M:%S`.

use chrono::{Local, NaiveDateTime};
use serde_json::Value;

use crate::errors::Result;
use crate::export::csv::{frame_to_csv, FexCsvConfig, UTF8_BOM};
use crate::export::saver::FexFileSaver;
use crate::export::sheet::grid_from_csv;
use crate::export::trace::FexTraceFormat;
use crate::export::workbook::FexWorkbook;
use crate::frame::{FexFrame, FexMutableFrame};
use crate::logs::FexLogsModel;

/// MIME type of plain-text log exports.
pub const MIME_TEXT: &str = "text/plain;charset=utf-8";

/// MIME type of CSV exports.
///
/// The charset label is windows-1251 while the body is UTF-8 encoded.
/// Long-standing consumers expect that label; keep the mismatch until a
/// compatibility audit says otherwise.
pub const MIME_CSV: &str = "text/csv;charset=windows-1251";

/// MIME type of JSON exports.
pub const MIME_JSON: &str = "application/json";

/// Finished export artifact ready for hand-off to a download primitive.
#[derive(Clone, Debug)]
pub struct FexPayload {
    /// Encoded body bytes.
    pub body: Vec<u8>,
    /// MIME type string, charset label included.
    pub mime: String,
    /// Suggested file name.
    pub file_name: String,
}

impl FexPayload {
    /// Body decoded as UTF-8 text, lossily for non-text payloads.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Tabular export encoder.
///
/// Owns a save collaborator and, optionally, a fixed timestamp so tests
/// can pin file names. Construction is cheap; callers may build one per
/// export or share a single instance.
pub struct FexExporter {
    saver: Box<dyn FexFileSaver>,
    fixed_timestamp: Option<NaiveDateTime>,
}

impl FexExporter {
    pub fn new(saver: Box<dyn FexFileSaver>) -> Self {
        FexExporter {
            saver,
            fixed_timestamp: None,
        }
    }

    /// Pins the timestamp used in file names. Test hook.
    pub fn with_fixed_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.fixed_timestamp = Some(timestamp);
        self
    }

    fn timestamp(&self) -> String {
        let now = self
            .fixed_timestamp
            .unwrap_or_else(|| Local::now().naive_local());
        now.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// `<title>-data[-as-<transform>]-<timestamp><ext>`. The `-as-`
    /// segment is omitted for the no-op transformation (`None`).
    fn data_file_name(&self, title: &str, transform: Option<&str>, ext: &str) -> String {
        let transformation = transform
            .map(|t| format!("-as-{}", t.to_lowercase()))
            .unwrap_or_default();
        format!("{}-data{}-{}{}", title, transformation, self.timestamp(), ext)
    }

    /// Renders a log model as plain text.
    ///
    /// Metadata entries come first, one `<label>: <json value>` per line,
    /// then a separator, then one `<timestampMs>\t<entry>` line per row in
    /// original order. No failure modes; absent metadata is an empty list.
    pub fn logs_as_text(&self, logs: &FexLogsModel, title: &str) -> FexPayload {
        log::debug!("encoding {} log rows as text", logs.rows.len());

        let mut text = String::new();
        for item in &logs.meta {
            text.push_str(&format!("{}: {}\n", item.label, item.value));
        }
        text.push_str("\n\n");
        for row in &logs.rows {
            text.push_str(&format!("{}\t{}\n", row.time_epoch_ms, row.entry));
        }

        let payload = FexPayload {
            body: text.into_bytes(),
            mime: MIME_TEXT.to_string(),
            file_name: format!("{}-logs-{}.txt", title, self.timestamp()),
        };
        self.saver.save(&payload);
        payload
    }

    /// Serializes a frame as CSV.
    ///
    /// When the configuration requests the Excel header convention the
    /// payload starts with the UTF-8 byte-order mark. The transform
    /// identifier only affects the file name.
    pub fn frame_as_csv(
        &self,
        frame: &FexFrame,
        title: &str,
        config: Option<&FexCsvConfig>,
        transform: Option<&str>,
    ) -> Result<FexPayload> {
        log::debug!("encoding frame as csv: {} rows", frame.row_count());

        let cfg = config.cloned().unwrap_or_default();
        let csv_text = frame_to_csv(frame, &cfg)?;

        let mut body = String::with_capacity(csv_text.len() + 4);
        if cfg.use_excel_header {
            body.push(UTF8_BOM);
        }
        body.push_str(&csv_text);

        let payload = FexPayload {
            body: body.into_bytes(),
            mime: MIME_CSV.to_string(),
            file_name: self.data_file_name(title, transform, ".csv"),
        };
        self.saver.save(&payload);
        Ok(payload)
    }

    /// Encodes a frame as a single-sheet XLSX workbook.
    ///
    /// The frame is first rendered as Excel-dialect CSV (semicolon
    /// delimiter, headers on), normalized, and coerced cell by cell; the
    /// workbook writer then owns the final write, so this operation
    /// returns no payload. The constructed name already ends in `.xlsx`
    /// and the writer appends another; the doubled extension is kept for
    /// compatibility.
    pub fn frame_as_xlsx(
        &self,
        frame: &FexFrame,
        title: &str,
        config: Option<&FexCsvConfig>,
        transform: Option<&str>,
    ) -> Result<()> {
        log::debug!("encoding frame as xlsx: {} rows", frame.row_count());

        // Excel dialect forced on regardless of the caller's settings;
        // the grid split below relies on the semicolon delimiter.
        let mut cfg = config.cloned().unwrap_or_default();
        cfg.delimiter = b';';
        cfg.headers = true;

        let csv_text = frame_to_csv(frame, &cfg)?;
        let grid = grid_from_csv(&csv_text);
        let workbook = FexWorkbook::from_grid(grid);

        let file_name = self.data_file_name(title, transform, ".xlsx");
        workbook.save(&file_name, self.saver.as_ref())
    }

    /// Serializes any JSON value with no pretty-printing.
    ///
    /// Pure structural mirror: decoding the payload reproduces the input.
    pub fn as_json(&self, value: &Value, title: &str) -> Result<FexPayload> {
        let payload = FexPayload {
            body: serde_json::to_vec(value)?,
            mime: MIME_JSON.to_string(),
            file_name: format!("{}-{}.json", title, self.timestamp()),
        };
        self.saver.save(&payload);
        Ok(payload)
    }

    /// Encodes a trace frame as JSON in its source wire shape.
    ///
    /// Dispatches on the frame's `custom.traceFormat` metadata, wrapping
    /// the read-only frame in a mutable view for the transformer. The
    /// encoded file goes out through the save collaborator; the format
    /// actually used is returned for caller feedback.
    pub fn trace_as_json(&self, frame: &FexFrame, title: &str) -> Result<FexTraceFormat> {
        let format = FexTraceFormat::from_frame(frame);
        log::debug!("encoding trace frame as {}", format.label());

        let mut view = FexMutableFrame::from_frame(frame);
        let transformed = format.transformer().transform(&mut view);
        self.as_json(&transformed, title)?;
        Ok(format)
    }
}
