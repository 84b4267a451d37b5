//! Tooling primitives for deterministic behavior tree runs.
//!
//! Trace events are recorded through the blackboard so instrumentation never
//! changes a node's signature.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{
    emit, NullTraceSink, TraceEvent, TraceLog, TraceSink, TracingSink, VecTraceSink, TRACE_LOG,
    TRACE_SINK,
};
