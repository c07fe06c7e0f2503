//! # Shape Service
//!
//! Turns a text or image request into a placeholder 3D model written as
//! OBJ, STL and a PNG preview.
//!
//! ## Request Flow
//!
//! ```text
//! {"type": "text", "data": "a small toy car"}
//!     → validate → Generator → Mesh
//!     → output/<uuid>.obj, output/<uuid>.stl, output/<uuid>_preview.png
//!     → {"status": "success", "obj_url": ..., "stl_url": ..., "preview_url": ...}
//! ```
//!
//! Failures come back as `{"status": "error", "error": ..., "kind": ...}`.

pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod logging;
pub mod request;
pub mod response;

pub use dispatcher::{handle, Dispatcher, DispatcherConfig};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use generator::Generator;
pub use request::{Request, RequestRecord};
pub use response::{OutputPaths, Response};
