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

use fex::export::trace::{FexTraceFormat, TRACE_FORMAT_META_KEY};
use fex::frame::{FexField, FexFrame, FexMetadata, FexMutableFrame};
use serde_json::json;

fn trace_frame(format: Option<&str>) -> FexFrame {
    let frame = FexFrame::new(vec![
        FexField::new("traceID", vec![json!("t1"), json!("t1")]),
        FexField::new("spanID", vec![json!("s1"), json!("s2")]),
        FexField::new("parentSpanID", vec![json!(""), json!("s1")]),
        FexField::new("operationName", vec![json!("root"), json!("child")]),
        FexField::new("serviceName", vec![json!("api"), json!("db")]),
        FexField::new("startTime", vec![json!(1000.0), json!(1001.0)]),
        FexField::new("duration", vec![json!(5.0), json!(2.0)]),
        FexField::new(
            "tags",
            vec![json!([{"key": "http.method", "value": "GET"}]), json!({})],
        ),
        FexField::new("serviceTags", vec![json!([]), json!([])]),
    ])
    .unwrap();

    match format {
        Some(name) => {
            let mut meta = FexMetadata::new();
            meta.insert(
                "custom".to_string(),
                json!({ (TRACE_FORMAT_META_KEY): name }),
            );
            frame.with_meta(meta)
        }
        None => frame,
    }
}

#[test]
fn format_dispatch_reads_trace_format_metadata() {
    assert_eq!(
        FexTraceFormat::from_frame(&trace_frame(Some("jaeger"))),
        FexTraceFormat::Jaeger
    );
    assert_eq!(
        FexTraceFormat::from_frame(&trace_frame(Some("zipkin"))),
        FexTraceFormat::Zipkin
    );
    assert_eq!(
        FexTraceFormat::from_frame(&trace_frame(Some("otlp"))),
        FexTraceFormat::Otlp
    );
}

#[test]
fn missing_format_defaults_to_otlp() {
    assert_eq!(
        FexTraceFormat::from_frame(&trace_frame(None)),
        FexTraceFormat::Otlp
    );
}

#[test]
fn unrecognized_format_defaults_to_otlp() {
    assert_eq!(
        FexTraceFormat::from_frame(&trace_frame(Some("x-trace"))),
        FexTraceFormat::Otlp
    );
}

#[test]
fn labels_are_lowercase_wire_names() {
    assert_eq!(FexTraceFormat::Jaeger.label(), "jaeger");
    assert_eq!(FexTraceFormat::Zipkin.label(), "zipkin");
    assert_eq!(FexTraceFormat::Otlp.label(), "otlp");
}

#[test]
fn zipkin_transform_emits_flat_span_array() {
    let frame = trace_frame(Some("zipkin"));
    let mut view = FexMutableFrame::from_frame(&frame);
    let out = FexTraceFormat::Zipkin.transformer().transform(&mut view);

    let spans = out.as_array().unwrap();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0]["traceId"], json!("t1"));
    assert_eq!(spans[0]["name"], json!("root"));
    assert_eq!(spans[0]["localEndpoint"]["serviceName"], json!("api"));
    // millisecond start becomes microseconds
    assert_eq!(spans[0]["timestamp"], json!(1_000_000));
    assert_eq!(spans[0]["duration"], json!(5000));
    // root span carries no parentId
    assert!(spans[0].get("parentId").is_none());
    assert_eq!(spans[1]["parentId"], json!("s1"));
    // array-convention tags fold into an object
    assert_eq!(spans[0]["tags"]["http.method"], json!("GET"));
}

#[test]
fn jaeger_transform_wraps_trace_in_data_array() {
    let frame = trace_frame(Some("jaeger"));
    let mut view = FexMutableFrame::from_frame(&frame);
    let out = FexTraceFormat::Jaeger.transformer().transform(&mut view);

    let trace = &out["data"][0];
    assert_eq!(trace["traceID"], json!("t1"));
    let spans = trace["spans"].as_array().unwrap();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0]["startTime"], json!(1_000_000));
    assert_eq!(spans[0]["references"], json!([]));
    assert_eq!(spans[1]["references"][0]["refType"], json!("CHILD_OF"));
    assert_eq!(spans[1]["references"][0]["spanID"], json!("s1"));
    // one process entry per service
    let processes = trace["processes"].as_object().unwrap();
    assert_eq!(processes.len(), 2);
    assert_eq!(processes["api"]["serviceName"], json!("api"));
}

#[test]
fn otlp_transform_groups_batches_by_service() {
    let frame = trace_frame(None);
    let mut view = FexMutableFrame::from_frame(&frame);
    let out = FexTraceFormat::Otlp.transformer().transform(&mut view);

    let batches = out["batches"].as_array().unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(
        batches[0]["resource"]["attributes"][0]["value"]["stringValue"],
        json!("api")
    );
    let span = &batches[0]["scopeSpans"][0]["spans"][0];
    assert_eq!(span["startTimeUnixNano"], json!(1_000_000_000i64));
    assert_eq!(span["endTimeUnixNano"], json!(1_005_000_000i64));
    assert_eq!(span["name"], json!("root"));
}

#[test]
fn transforms_tolerate_missing_columns() {
    let frame = FexFrame::new(vec![FexField::new("other", vec![json!(1)])]).unwrap();
    let mut view = FexMutableFrame::from_frame(&frame);

    let out = FexTraceFormat::Otlp.transformer().transform(&mut view);
    let spans = out["batches"][0]["scopeSpans"][0]["spans"].as_array().unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0]["name"], json!(""));
}
