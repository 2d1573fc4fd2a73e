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

//! # Fex Frame Module
//!
//! This module provides the columnar data structures consumed by the Fex
//! export encoder. FexFrame is the fundamental input unit: an ordered set
//! of named columns sharing a single row count, plus optional free-form
//! metadata.
//!
//! ## Design Principles
//!
//! - **Flexibility**: Cell values use JSON (serde_json::Value), so frames
//!   can carry numbers, strings, booleans, and nested structures without a
//!   strict schema
//! - **Read-only inputs**: the encoder never mutates a source frame; code
//!   that needs a writable row-indexable shape wraps the frame in a
//!   [`FexMutableFrame`] built on demand
//! - **Aligned columns**: every field in a frame holds the same number of
//!   values, validated at construction
//!
//! ## Usage Example
//!
//! ```rust
//! use fex::frame::{FexField, FexFrame};
//! use serde_json::json;
//!
//! let frame = FexFrame::new(vec![
//!     FexField::new("time", vec![json!(1), json!(2)]),
//!     FexField::new("value", vec![json!(3.5), json!(4.5)]),
//! ])?;
//!
//! assert_eq!(frame.row_count(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{FexError, Result};

/// Generic metadata map that may accompany a frame.
///
/// Common entries include provenance information and the `custom` object,
/// which for trace frames carries the `traceFormat` key naming the wire
/// shape the frame was produced from.
pub type FexMetadata = Map<String, Value>;

/// A single named column of a frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FexField {
    /// Column name, used as the CSV header and for lookup by transformers.
    pub name: String,

    /// Cell values, aligned by row index across all fields of a frame.
    pub values: Vec<Value>,
}

impl FexField {
    /// Constructs a field with the given name and values.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        FexField {
            name: name.into(),
            values,
        }
    }
}

/// Columnar table consumed by the export encoder.
///
/// Frames are transient: constructed per export call, read, and discarded.
/// The struct derives Serialize/Deserialize so frames can be captured in
/// fixtures or logs, but the encoder itself only ever reads them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FexFrame {
    /// Ordered columns, all of equal length.
    pub fields: Vec<FexField>,

    /// Additional attributes such as provenance or the trace-format tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FexMetadata>,
}

impl FexFrame {
    /// Constructs a frame, validating that all fields share a row count.
    pub fn new(fields: Vec<FexField>) -> Result<Self> {
        if let Some(first) = fields.first() {
            let expected = first.values.len();
            for field in &fields {
                if field.values.len() != expected {
                    return Err(FexError::validation(format!(
                        "ragged frame: field '{}' has {} rows, expected {}",
                        field.name,
                        field.values.len(),
                        expected
                    )));
                }
            }
        }
        Ok(FexFrame { fields, meta: None })
    }

    /// Attaches metadata to the frame.
    pub fn with_meta(mut self, meta: FexMetadata) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Number of rows shared by every field; zero for an empty frame.
    pub fn row_count(&self) -> usize {
        self.fields.first().map(|f| f.values.len()).unwrap_or(0)
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FexField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Reads a nested custom-metadata entry, e.g. `custom.traceFormat`.
    pub fn custom_meta(&self, key: &str) -> Option<&Value> {
        self.meta.as_ref()?.get("custom")?.get(key)
    }
}

/// Row-indexable, mutable view over a frame.
///
/// Trace transformers require a writable container shape. The adapter is
/// built on demand from a borrowed frame and owns cloned column data, so
/// the source frame's read-only invariant holds regardless of what the
/// transformer does to the view.
#[derive(Clone, Debug)]
pub struct FexMutableFrame {
    fields: Vec<FexField>,
    meta: Option<FexMetadata>,
}

impl FexMutableFrame {
    /// Wraps a frame, cloning its columns into an owned, writable view.
    pub fn from_frame(frame: &FexFrame) -> Self {
        FexMutableFrame {
            fields: frame.fields.clone(),
            meta: frame.meta.clone(),
        }
    }

    /// Number of rows shared by every field.
    pub fn row_count(&self) -> usize {
        self.fields.first().map(|f| f.values.len()).unwrap_or(0)
    }

    /// Immutable cell access by field name and row index.
    pub fn value(&self, field: &str, row: usize) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name == field)?
            .values
            .get(row)
    }

    /// Mutable cell access by field name and row index.
    pub fn value_mut(&mut self, field: &str, row: usize) -> Option<&mut Value> {
        self.fields
            .iter_mut()
            .find(|f| f.name == field)?
            .values
            .get_mut(row)
    }

    /// Frame-level metadata carried over from the source frame.
    pub fn meta(&self) -> Option<&FexMetadata> {
        self.meta.as_ref()
    }

    /// Cell as a string, empty when absent or null.
    pub fn text(&self, field: &str, row: usize) -> String {
        match self.value(field, row) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Cell as a float, zero when absent or non-numeric.
    pub fn number(&self, field: &str, row: usize) -> f64 {
        self.value(field, row)
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    /// Cell as an owned JSON value, null when absent.
    pub fn json(&self, field: &str, row: usize) -> Value {
        self.value(field, row).cloned().unwrap_or(Value::Null)
    }
}
