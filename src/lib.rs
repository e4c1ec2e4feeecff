//! # Mojo Result
//!
//! Stable result codes for the Mojo IPC system, and the names used to log
//! them.
//!
//! ## Design Philosophy
//!
//! 1. **Values are a wire contract** shared with every other language binding
//! 2. **The set is closed** and fixed at compile time
//! 3. **Describing a code never fails**, whatever integer arrives
//! 4. **Subcodes keep their parent** in the low nibble, so old consumers still
//!    see the broad category
//!
//! ## Layout
//!
//! A result is a `u32` packing `code | subcode << 4 | space << 16`. See
//! [`codes`] for the field helpers and [`definitions`] for the named values.
//!
//! ## Quick Start
//!
//! ```rust
//! use mojo_result::{describe, get_code, ResultCode, BAD_HANDLE, INVALID_ARGUMENT};
//!
//! // Raw values at the boundary, names for diagnostics:
//! assert_eq!(describe(BAD_HANDLE), "BAD_HANDLE");
//! assert_eq!(describe(0xDEAD), "UNKNOWN");
//!
//! // Subcodes reduce to their primary:
//! assert_eq!(get_code(BAD_HANDLE), INVALID_ARGUMENT);
//!
//! // Typed view when matching on outcomes:
//! match ResultCode::from_raw(BAD_HANDLE) {
//!     Some(ResultCode::BadHandle) => {}
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! ## Logging
//!
//! ```rust
//! use mojo_result::{ResultLog, SHOULD_WAIT};
//!
//! let line = ResultLog::new(SHOULD_WAIT).with_operation("read_data").to_string();
//! assert!(line.starts_with("[SHOULD_WAIT]"));
//! ```
//!
//! ## Features
//!
//! None yet. The crate has no runtime configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod logging;
pub mod models;

pub use codes::*;
pub use definitions::*;
pub use logging::*;
pub use models::*;

/// Raw result code as carried across process and language boundaries.
///
/// Unsigned 32-bit, matching the C ABI. A signed `-1` from another binding
/// arrives as `0xFFFF_FFFF`.
pub type MojoResult = u32;
