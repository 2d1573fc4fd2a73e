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

//! # Fex Error Module
//!
//! This module defines the error types and utilities used throughout the
//! Fex export encoder for consistent error handling and reporting.
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors
//! - **Csv**: CSV serialization failures
//! - **Sheet**: Workbook assembly and container-writing failures
//! - **Validation**: Input validation failures (e.g. ragged frames)
//! - **Serde**: Serialization/deserialization errors
//! - **Internal**: Unexpected internal failures
//!
//! Underlying serialization library failures are wrapped and propagated
//! uncaught; the encoder performs no local recovery for them. The two
//! silent-fallback paths (numeric cell coercion, trace-format defaulting)
//! never surface here: both fall back to a value instead of an error.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zip::result::ZipError;

/// Convenience result type used throughout Fex.
pub type Result<T> = std::result::Result<T, FexError>;

/// Canonical error enumeration for Fex.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum FexError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Errors raised by the CSV serializer.
    #[error("csv error: {0}")]
    Csv(String),

    /// Errors raised while assembling or writing a workbook.
    #[error("sheet error: {0}")]
    Sheet(String),

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for FexError {
    fn from(err: io::Error) -> Self {
        FexError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FexError {
    fn from(err: serde_json::Error) -> Self {
        FexError::Serde(err.to_string())
    }
}

impl From<csv::Error> for FexError {
    fn from(err: csv::Error) -> Self {
        FexError::Csv(err.to_string())
    }
}

impl From<ZipError> for FexError {
    fn from(err: ZipError) -> Self {
        FexError::Sheet(err.to_string())
    }
}

impl FexError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        FexError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct sheet errors.
    pub fn sheet<T: Into<String>>(message: T) -> Self {
        FexError::Sheet(message.into())
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        FexError::Internal(message.into())
    }
}
