//! Subject registry subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → parse_id (path token → SubjectId)
//!     → Registry (ordered Vec<Subject> + id counter)
//!     → Subject (serialized as {id, titulo, hecho})
//! ```
//!
//! # Design Decisions
//! - Insertion order is preserved; listing returns records as stored
//! - Ids come from a monotonic counter and are never reused after delete
//! - The registry is plain data; sharing and locking belong to the HTTP layer

pub mod store;
pub mod subject;

pub use store::Registry;
pub use subject::{parse_id, Subject, SubjectId, Title, TitleError};
