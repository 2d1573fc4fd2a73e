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

//! # Save Collaborators
//!
//! The encoder hands finished payloads to a [`FexFileSaver`]. The trait
//! mirrors the host-download contract: fire and forget, no return value,
//! no failure signal visible to the caller. The disk implementation logs
//! write failures instead of surfacing them.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::export::encoder::FexPayload;

/// Save-as-file collaborator receiving finished payloads.
pub trait FexFileSaver {
    /// Hands off a payload. No failure signal by contract.
    fn save(&self, payload: &FexPayload);
}

/// Writes payloads into a target directory.
#[derive(Clone, Debug)]
pub struct FexDiskSaver {
    dir: PathBuf,
}

impl FexDiskSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FexDiskSaver { dir: dir.into() }
    }
}

impl FexFileSaver for FexDiskSaver {
    fn save(&self, payload: &FexPayload) {
        let path = self.dir.join(&payload.file_name);
        let result = fs::create_dir_all(&self.dir).and_then(|_| fs::write(&path, &payload.body));
        match result {
            Ok(()) => log::debug!("saved {} ({} bytes)", path.display(), payload.body.len()),
            Err(err) => log::warn!("failed to save {}: {}", path.display(), err),
        }
    }
}

/// Captures payloads in memory; clones share the same storage.
///
/// Intended for tests and embedding hosts that deliver the payload
/// themselves.
#[derive(Clone, Debug, Default)]
pub struct FexMemorySaver {
    saved: Arc<Mutex<Vec<FexPayload>>>,
}

impl FexMemorySaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything saved so far.
    pub fn saved(&self) -> Vec<FexPayload> {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl FexFileSaver for FexMemorySaver {
    fn save(&self, payload: &FexPayload) {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(payload.clone());
    }
}
