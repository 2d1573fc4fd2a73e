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

//! # Data Export Module
//!
//! Export encoding for the Fex crate: frames and log models to CSV, XLSX,
//! JSON, and plain text, plus trace-shape dispatch and the save
//! collaborators that receive finished payloads.
//!
//! ## Module Components
//!
//! - **Encoder** ([encoder]): the five encode operations and file naming
//! - **Csv** ([csv]): CSV text serialization and configuration
//! - **Sheet** ([sheet]): cell normalization and numeric coercion
//! - **Workbook** ([workbook]): minimal single-sheet XLSX writer
//! - **Trace** ([trace]): trace-format dispatch and shape transformers
//! - **Saver** ([saver]): disk and in-memory save collaborators

pub mod csv;
pub mod encoder;
pub mod saver;
pub mod sheet;
pub mod trace;
pub mod workbook;

pub use self::csv::{frame_to_csv, FexCsvConfig, UTF8_BOM};
pub use self::encoder::{FexExporter, FexPayload, MIME_CSV, MIME_JSON, MIME_TEXT};
pub use self::saver::{FexDiskSaver, FexFileSaver, FexMemorySaver};
pub use self::sheet::{coerce_cell, grid_from_csv, normalize_csv_text, FexCell};
pub use self::trace::{
    FexJaegerTransformer, FexOtlpTransformer, FexTraceFormat, FexTraceTransformer,
    FexZipkinTransformer, TRACE_FORMAT_META_KEY,
};
pub use self::workbook::FexWorkbook;
