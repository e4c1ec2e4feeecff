//! Typed view over the defined result codes.
//!
//! [`ResultCode`] is a closed sum type whose discriminants are the wire
//! values in [`definitions`](crate::definitions). It is the convenient form
//! for code that matches on outcomes; the raw [`MojoResult`] stays the type
//! at API boundaries, since peers may send values this build does not know.
//!
//! ```rust
//! use mojo_result::{ResultCode, ErrorCode, SHOULD_WAIT};
//!
//! let code = ResultCode::try_from(SHOULD_WAIT).unwrap();
//! assert_eq!(code, ResultCode::ShouldWait);
//! assert_eq!(code.category(), ErrorCode::Unavailable);
//! assert_eq!(code.parent(), Some(ResultCode::Unavailable));
//! assert_eq!(code.to_string(), "SHOULD_WAIT");
//!
//! assert!(ResultCode::from_raw(0x99).is_none());
//! ```

use crate::codes::{ErrorCode, SUBCODE_GENERIC, get_code, get_subcode};
use crate::{MojoResult, definitions};
use std::fmt;

/// A defined result code.
///
/// Discriminants are explicit and non-contiguous: subcoded variants sit
/// above `0xF` with their parent in the low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResultCode {
    /// Not an error.
    Ok = definitions::OK,
    /// Operation was cancelled.
    Cancelled = definitions::CANCELLED,
    /// Unknown error.
    Unknown = definitions::UNKNOWN,
    /// Invalid argument.
    InvalidArgument = definitions::INVALID_ARGUMENT,
    /// Invalid argument: bad handle.
    BadHandle = definitions::BAD_HANDLE,
    /// Invalid argument: handle of the wrong type.
    WrongType = definitions::WRONG_TYPE,
    /// Deadline exceeded.
    DeadlineExceeded = definitions::DEADLINE_EXCEEDED,
    /// Not found.
    NotFound = definitions::NOT_FOUND,
    /// Already exists.
    AlreadyExists = definitions::ALREADY_EXISTS,
    /// Permission denied.
    PermissionDenied = definitions::PERMISSION_DENIED,
    /// Resource exhausted.
    ResourceExhausted = definitions::RESOURCE_EXHAUSTED,
    /// Failed precondition.
    FailedPrecondition = definitions::FAILED_PRECONDITION,
    /// Failed precondition: resource busy.
    Busy = definitions::BUSY,
    /// Aborted.
    Aborted = definitions::ABORTED,
    /// Out of range.
    OutOfRange = definitions::OUT_OF_RANGE,
    /// Unimplemented.
    Unimplemented = definitions::UNIMPLEMENTED,
    /// Internal error.
    Internal = definitions::INTERNAL,
    /// Unavailable.
    Unavailable = definitions::UNAVAILABLE,
    /// Unavailable: should wait.
    ShouldWait = definitions::SHOULD_WAIT,
    /// Data loss.
    DataLoss = definitions::DATA_LOSS,
}

impl ResultCode {
    /// Every variant, in the order of the definitions table.
    pub const ALL: [ResultCode; 20] = [
        Self::Ok,
        Self::Cancelled,
        Self::Unknown,
        Self::InvalidArgument,
        Self::BadHandle,
        Self::WrongType,
        Self::DeadlineExceeded,
        Self::NotFound,
        Self::AlreadyExists,
        Self::PermissionDenied,
        Self::ResourceExhausted,
        Self::FailedPrecondition,
        Self::Busy,
        Self::Aborted,
        Self::OutOfRange,
        Self::Unimplemented,
        Self::Internal,
        Self::Unavailable,
        Self::ShouldWait,
        Self::DataLoss,
    ];

    /// Look up the variant for a raw value, if one is defined.
    pub const fn from_raw(result: MojoResult) -> Option<Self> {
        Some(match result {
            definitions::OK => Self::Ok,
            definitions::CANCELLED => Self::Cancelled,
            definitions::UNKNOWN => Self::Unknown,
            definitions::INVALID_ARGUMENT => Self::InvalidArgument,
            definitions::BAD_HANDLE => Self::BadHandle,
            definitions::WRONG_TYPE => Self::WrongType,
            definitions::DEADLINE_EXCEEDED => Self::DeadlineExceeded,
            definitions::NOT_FOUND => Self::NotFound,
            definitions::ALREADY_EXISTS => Self::AlreadyExists,
            definitions::PERMISSION_DENIED => Self::PermissionDenied,
            definitions::RESOURCE_EXHAUSTED => Self::ResourceExhausted,
            definitions::FAILED_PRECONDITION => Self::FailedPrecondition,
            definitions::BUSY => Self::Busy,
            definitions::ABORTED => Self::Aborted,
            definitions::OUT_OF_RANGE => Self::OutOfRange,
            definitions::UNIMPLEMENTED => Self::Unimplemented,
            definitions::INTERNAL => Self::Internal,
            definitions::UNAVAILABLE => Self::Unavailable,
            definitions::SHOULD_WAIT => Self::ShouldWait,
            definitions::DATA_LOSS => Self::DataLoss,
            _ => return None,
        })
    }

    /// Raw wire value.
    #[inline]
    pub const fn value(self) -> MojoResult {
        self as MojoResult
    }

    /// Canonical name, identical to [`describe`](crate::describe) of the value.
    #[inline]
    pub const fn name(self) -> &'static str {
        definitions::describe(self.value())
    }

    /// Primary category carried in the low nibble.
    #[inline]
    pub const fn category(self) -> ErrorCode {
        ErrorCode::from_bits(self.value())
    }

    /// Subcode field; `SUBCODE_GENERIC` for primaries.
    #[inline]
    pub const fn subcode(self) -> MojoResult {
        get_subcode(self.value())
    }

    /// Whether this is a subcoded refinement of a primary.
    #[inline]
    pub const fn is_subcoded(self) -> bool {
        self.subcode() != SUBCODE_GENERIC
    }

    /// The primary this code refines, or `None` for primaries.
    pub const fn parent(self) -> Option<Self> {
        if self.is_subcoded() {
            Self::from_raw(get_code(self.value()))
        } else {
            None
        }
    }

    /// Whether this is [`ResultCode::Ok`].
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ResultCode> for MojoResult {
    #[inline]
    fn from(code: ResultCode) -> Self {
        code.value()
    }
}

impl TryFrom<MojoResult> for ResultCode {
    type Error = UnrecognizedResult;

    fn try_from(value: MojoResult) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(UnrecognizedResult { value })
    }
}

/// A raw value that matches no defined result code.
///
/// Its primary category can still be read with [`UnrecognizedResult::category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnrecognizedResult {
    /// The raw value that was rejected.
    pub value: MojoResult,
}

impl UnrecognizedResult {
    /// Primary category from the low nibble.
    #[inline]
    pub const fn category(&self) -> ErrorCode {
        ErrorCode::from_bits(self.value)
    }
}

impl fmt::Display for UnrecognizedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognized result code {:#010x}", self.value)
    }
}

impl std::error::Error for UnrecognizedResult {}

// ============================================================================
// Tests
// ============================================================================
