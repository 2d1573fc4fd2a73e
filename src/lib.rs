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

//! # Fex Core Library
//!
//! Fex is a tabular export encoder: it converts in-memory columnar frames
//! and log models into external interchange formats (CSV, XLSX, JSON,
//! plain text) and hands the encoded payload to a pluggable save-as-file
//! collaborator.
//!
//! ## Module Overview
//!
//! - **frame**: FexFrame columnar model and the mutable trace adapter
//! - **logs**: FexLogsModel log-record collection
//! - **export**: the encoder, per-format serializers, and save collaborators
//! - **errors**: FexError and the crate Result alias
//!
//! ## Quick Start
//!
//! ```rust
//! use fex::{FexDiskSaver, FexExporter, FexField, FexFrame};
//! use serde_json::json;
//!
//! let frame = FexFrame::new(vec![
//!     FexField::new("time", vec![json!(1)]),
//!     FexField::new("value", vec![json!(3.5)]),
//! ])?;
//!
//! let exporter = FexExporter::new(Box::new(FexDiskSaver::new("out")));
//! let payload = exporter.frame_as_csv(&frame, "Panel", None, None)?;
//! assert!(payload.file_name.ends_with(".csv"));
//! ```
//!
//! ## Error Handling
//!
//! Operations return `Result<T, FexError>`. The two lossy heuristics
//! (numeric cell coercion, trace-format defaulting) fall back to values
//! instead of failing; library-level serialization failures propagate.

pub mod errors;
pub mod export;
pub mod frame;
pub mod logs;

pub use errors::{FexError, Result};
pub use export::{
    coerce_cell, frame_to_csv, grid_from_csv, normalize_csv_text, FexCell, FexCsvConfig,
    FexDiskSaver, FexExporter, FexFileSaver, FexMemorySaver, FexPayload, FexTraceFormat,
    FexTraceTransformer, FexWorkbook, MIME_CSV, MIME_JSON, MIME_TEXT, TRACE_FORMAT_META_KEY,
    UTF8_BOM,
};
pub use frame::{FexField, FexFrame, FexMetadata, FexMutableFrame};
pub use logs::{FexLogRow, FexLogsMetaItem, FexLogsModel};
