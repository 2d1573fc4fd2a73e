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

use fex::frame::{FexField, FexFrame, FexMetadata, FexMutableFrame};
use serde_json::json;

fn sample_frame() -> FexFrame {
    FexFrame::new(vec![
        FexField::new("time", vec![json!(1000), json!(2000)]),
        FexField::new("value", vec![json!(3.5), json!("n/a")]),
    ])
    .unwrap()
}

#[test]
fn frame_new_accepts_aligned_columns() {
    let frame = sample_frame();
    assert_eq!(frame.row_count(), 2);
    assert_eq!(frame.fields.len(), 2);
}

#[test]
fn frame_new_rejects_ragged_columns() {
    let result = FexFrame::new(vec![
        FexField::new("a", vec![json!(1), json!(2)]),
        FexField::new("b", vec![json!(1)]),
    ]);
    assert!(result.is_err());
}

#[test]
fn empty_frame_has_zero_rows() {
    let frame = FexFrame::new(vec![]).unwrap();
    assert_eq!(frame.row_count(), 0);
}

#[test]
fn field_lookup_by_name() {
    let frame = sample_frame();
    assert_eq!(frame.field("value").unwrap().values[0], json!(3.5));
    assert!(frame.field("missing").is_none());
}

#[test]
fn custom_meta_reads_nested_entry() {
    let mut meta = FexMetadata::new();
    meta.insert("custom".to_string(), json!({"traceFormat": "zipkin"}));
    let frame = sample_frame().with_meta(meta);

    assert_eq!(frame.custom_meta("traceFormat"), Some(&json!("zipkin")));
    assert!(frame.custom_meta("other").is_none());
}

#[test]
fn custom_meta_absent_without_metadata() {
    assert!(sample_frame().custom_meta("traceFormat").is_none());
}

#[test]
fn mutable_frame_reads_cells() {
    let view = FexMutableFrame::from_frame(&sample_frame());
    assert_eq!(view.row_count(), 2);
    assert_eq!(view.value("time", 1), Some(&json!(2000)));
    assert_eq!(view.text("value", 1), "n/a");
    assert_eq!(view.number("value", 0), 3.5);
    assert!(view.value("missing", 0).is_none());
}

#[test]
fn mutable_frame_writes_do_not_touch_source() {
    let frame = sample_frame();
    let mut view = FexMutableFrame::from_frame(&frame);

    *view.value_mut("value", 0).unwrap() = json!(99);

    assert_eq!(view.value("value", 0), Some(&json!(99)));
    assert_eq!(frame.field("value").unwrap().values[0], json!(3.5));
}

#[test]
fn mutable_frame_text_renders_non_strings_as_json() {
    let view = FexMutableFrame::from_frame(&sample_frame());
    assert_eq!(view.text("time", 0), "1000");
}
