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

//! # Fex Logs Module
//!
//! Simplified log-record collection consumed by the plain-text export:
//! timestamped entries plus label/value metadata describing the log
//! source. Immutable input, mirrored into text line by line.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One label/value pair describing the log source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FexLogsMetaItem {
    pub label: String,
    pub value: Value,
}

impl FexLogsMetaItem {
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        FexLogsMetaItem {
            label: label.into(),
            value,
        }
    }
}

/// One log row: a millisecond timestamp and its free-text entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FexLogRow {
    pub time_epoch_ms: i64,
    pub entry: String,
}

impl FexLogRow {
    pub fn new(time_epoch_ms: i64, entry: impl Into<String>) -> Self {
        FexLogRow {
            time_epoch_ms,
            entry: entry.into(),
        }
    }
}

/// Log-record collection handed to the text export.
///
/// `meta` may be empty; the text encoding treats absent metadata as an
/// empty list rather than an error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FexLogsModel {
    pub meta: Vec<FexLogsMetaItem>,
    pub rows: Vec<FexLogRow>,
}

impl FexLogsModel {
    pub fn new(meta: Vec<FexLogsMetaItem>, rows: Vec<FexLogRow>) -> Self {
        FexLogsModel { meta, rows }
    }
}
