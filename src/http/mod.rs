//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, "<METHOD> <URL>" access log)
//!     → payload.rs (typed body for create/update)
//!     → handlers.rs (registry reads and mutations)
//!     → error.rs ({ok:false, error} envelopes)
//!     → Send to client
//!
//! Paths the API does not own fall through to static files, then to 404.
//! ```

pub mod error;
pub mod handlers;
pub mod payload;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use payload::{CompletionMode, SubjectDraft, SubjectPayload};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
