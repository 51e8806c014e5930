//! Logging facilities for Retouch.
//!
//! Retouch uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event emitted by the workspace carries one of the [`targets`] below,
//! so a filter such as `RUST_LOG=retouch::history=trace` isolates a single
//! subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Pixel buffer construction and conversion.
    pub const BUFFER: &str = "retouch_core::buffer";
    /// Image operation execution.
    pub const OPS: &str = "retouch_ops";
    /// Convolution engine.
    pub const CONVOLUTION: &str = "retouch_ops::convolution";
    /// Undo/redo history transitions.
    pub const HISTORY: &str = "retouch::history";
    /// History and configuration persistence.
    pub const PERSIST: &str = "retouch::persist";
    /// Timing spans around whole-image passes.
    pub const PERF: &str = "retouch::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Wrap a whole-image pass in one of these to measure it with a
/// span-timing subscriber.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(operation: &'static str, width: u32, height: u32) -> Self {
        let span = tracing::debug_span!(
            target: targets::PERF,
            "perf",
            operation,
            width,
            height
        );
        Self {
            span: span.entered(),
        }
    }
}
