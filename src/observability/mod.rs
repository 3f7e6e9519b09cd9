//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → access log lines ("<METHOD> <URL>") from the HTTP layer
//!
//! Consumers:
//!     → logging.rs (fmt subscriber on stdout, filtered by EnvFilter)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Filter defaults come from config; RUST_LOG overrides them

pub mod logging;

pub use logging::{default_filter, init_logging};
