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

//! # Trace Format Dispatch
//!
//! Trace frames carry their source wire shape in the `custom.traceFormat`
//! metadata entry. This module models the closed set of shapes as
//! [`FexTraceFormat`] and ships one transformer per shape, each consuming
//! the row-indexable [`FexMutableFrame`] view and producing the target
//! JSON structure.
//!
//! Trace frames follow the usual column convention: `traceID`, `spanID`,
//! `parentSpanID`, `operationName`, `serviceName`, `startTime` (ms),
//! `duration` (ms), and optional `tags` / `serviceTags` columns. Missing
//! columns degrade to empty values; span extraction never panics.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::frame::{FexFrame, FexMutableFrame};

/// Metadata key naming a trace frame's source wire shape.
pub const TRACE_FORMAT_META_KEY: &str = "traceFormat";

/// Closed set of trace wire shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FexTraceFormat {
    Jaeger,
    Zipkin,
    Otlp,
}

impl FexTraceFormat {
    /// Reads the format tag from frame metadata.
    ///
    /// Policy: an absent or unrecognized `custom.traceFormat` value
    /// selects [`FexTraceFormat::Otlp`]. The default is deliberate and
    /// silent, never an error; new formats must be added here explicitly
    /// rather than relying on the fall-through.
    pub fn from_frame(frame: &FexFrame) -> Self {
        match frame
            .custom_meta(TRACE_FORMAT_META_KEY)
            .and_then(|v| v.as_str())
        {
            Some("jaeger") => FexTraceFormat::Jaeger,
            Some("zipkin") => FexTraceFormat::Zipkin,
            _ => FexTraceFormat::Otlp,
        }
    }

    /// Lowercase label reported back to the caller for UI feedback.
    pub fn label(&self) -> &'static str {
        match self {
            FexTraceFormat::Jaeger => "jaeger",
            FexTraceFormat::Zipkin => "zipkin",
            FexTraceFormat::Otlp => "otlp",
        }
    }

    /// Transformer producing this format's JSON shape.
    pub fn transformer(&self) -> Box<dyn FexTraceTransformer> {
        match self {
            FexTraceFormat::Jaeger => Box::new(FexJaegerTransformer),
            FexTraceFormat::Zipkin => Box::new(FexZipkinTransformer),
            FexTraceFormat::Otlp => Box::new(FexOtlpTransformer),
        }
    }
}

/// Seam for trace-shape transformers.
///
/// Transformers require a writable row-indexable container; callers wrap
/// the read-only source frame in a [`FexMutableFrame`] on demand.
pub trait FexTraceTransformer {
    fn transform(&self, frame: &mut FexMutableFrame) -> Value;
}

/// One span's worth of columns pulled out of the frame.
struct SpanRow {
    trace_id: String,
    span_id: String,
    parent_span_id: String,
    operation_name: String,
    service_name: String,
    start_time_ms: f64,
    duration_ms: f64,
    tags: Value,
    service_tags: Value,
}

fn collect_spans(frame: &FexMutableFrame) -> Vec<SpanRow> {
    (0..frame.row_count())
        .map(|row| SpanRow {
            trace_id: frame.text("traceID", row),
            span_id: frame.text("spanID", row),
            parent_span_id: frame.text("parentSpanID", row),
            operation_name: frame.text("operationName", row),
            service_name: frame.text("serviceName", row),
            start_time_ms: frame.number("startTime", row),
            duration_ms: frame.number("duration", row),
            tags: frame.json("tags", row),
            service_tags: frame.json("serviceTags", row),
        })
        .collect()
}

/// Renders a tag column as a `[{key, value}]` array.
///
/// Accepts either the array convention or a plain object, which is
/// unfolded into key/value entries.
fn tags_as_array(tags: &Value) -> Value {
    match tags {
        Value::Array(_) => tags.clone(),
        Value::Object(map) => Value::Array(
            map.iter()
                .map(|(k, v)| json!({"key": k, "value": v}))
                .collect(),
        ),
        _ => json!([]),
    }
}

/// Renders a tag column as a flat object, folding the `[{key, value}]`
/// array convention when present.
fn tags_as_object(tags: &Value) -> Value {
    match tags {
        Value::Object(_) => tags.clone(),
        Value::Array(entries) => {
            let mut map = Map::new();
            for entry in entries {
                if let (Some(key), Some(value)) = (
                    entry.get("key").and_then(|k| k.as_str()),
                    entry.get("value"),
                ) {
                    map.insert(key.to_string(), value.clone());
                }
            }
            Value::Object(map)
        }
        _ => json!({}),
    }
}

/// Jaeger UI shape: one trace object with a span list and a per-service
/// process table, wrapped in a `data` array.
pub struct FexJaegerTransformer;

impl FexTraceTransformer for FexJaegerTransformer {
    fn transform(&self, frame: &mut FexMutableFrame) -> Value {
        let spans = collect_spans(frame);
        let trace_id = spans
            .first()
            .map(|s| s.trace_id.clone())
            .unwrap_or_default();

        let mut processes = Map::new();
        for span in &spans {
            if !processes.contains_key(&span.service_name) {
                processes.insert(
                    span.service_name.clone(),
                    json!({
                        "serviceName": span.service_name,
                        "tags": tags_as_array(&span.service_tags),
                    }),
                );
            }
        }

        let jaeger_spans: Vec<Value> = spans
            .iter()
            .map(|span| {
                let references = if span.parent_span_id.is_empty() {
                    json!([])
                } else {
                    json!([{
                        "refType": "CHILD_OF",
                        "traceID": span.trace_id,
                        "spanID": span.parent_span_id,
                    }])
                };
                json!({
                    "traceID": span.trace_id,
                    "spanID": span.span_id,
                    "operationName": span.operation_name,
                    "processID": span.service_name,
                    "startTime": (span.start_time_ms * 1000.0) as i64,
                    "duration": (span.duration_ms * 1000.0) as i64,
                    "references": references,
                    "tags": tags_as_array(&span.tags),
                    "flags": 0,
                })
            })
            .collect();

        json!({
            "data": [{
                "traceID": trace_id,
                "spans": jaeger_spans,
                "processes": Value::Object(processes),
                "warnings": Value::Null,
            }]
        })
    }
}

/// Zipkin v2 shape: a flat span array with local endpoints.
pub struct FexZipkinTransformer;

impl FexTraceTransformer for FexZipkinTransformer {
    fn transform(&self, frame: &mut FexMutableFrame) -> Value {
        let spans: Vec<Value> = collect_spans(frame)
            .iter()
            .map(|span| {
                let mut zipkin_span = json!({
                    "traceId": span.trace_id,
                    "id": span.span_id,
                    "name": span.operation_name,
                    "timestamp": (span.start_time_ms * 1000.0) as i64,
                    "duration": (span.duration_ms * 1000.0) as i64,
                    "localEndpoint": {"serviceName": span.service_name},
                    "tags": tags_as_object(&span.tags),
                });
                if !span.parent_span_id.is_empty() {
                    zipkin_span["parentId"] = json!(span.parent_span_id);
                }
                zipkin_span
            })
            .collect();
        Value::Array(spans)
    }
}

/// OTLP JSON shape: one batch per service with resource attributes and
/// nanosecond span timestamps.
pub struct FexOtlpTransformer;

impl FexTraceTransformer for FexOtlpTransformer {
    fn transform(&self, frame: &mut FexMutableFrame) -> Value {
        let spans = collect_spans(frame);

        // Batches keyed by service name, in first-seen order.
        let mut order: Vec<String> = Vec::new();
        for span in &spans {
            if !order.contains(&span.service_name) {
                order.push(span.service_name.clone());
            }
        }

        let batches: Vec<Value> = order
            .iter()
            .map(|service| {
                let otlp_spans: Vec<Value> = spans
                    .iter()
                    .filter(|s| &s.service_name == service)
                    .map(|span| {
                        let start_nano = (span.start_time_ms * 1_000_000.0) as i64;
                        let end_nano = start_nano + (span.duration_ms * 1_000_000.0) as i64;
                        json!({
                            "traceId": span.trace_id,
                            "spanId": span.span_id,
                            "parentSpanId": span.parent_span_id,
                            "name": span.operation_name,
                            "startTimeUnixNano": start_nano,
                            "endTimeUnixNano": end_nano,
                            "attributes": tags_as_array(&span.tags),
                        })
                    })
                    .collect();
                json!({
                    "resource": {
                        "attributes": [{
                            "key": "service.name",
                            "value": {"stringValue": service},
                        }],
                    },
                    "scopeSpans": [{"spans": otlp_spans}],
                })
            })
            .collect();

        json!({"batches": batches})
    }
}
