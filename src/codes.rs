//! Result bit layout - how a 32-bit `MojoResult` is packed.
//!
//! A result carries three fields:
//!
//! ```text
//!  31              16 15            4 3      0
//! +------------------+---------------+--------+
//! |      space       |    subcode    |  code  |
//! +------------------+---------------+--------+
//! ```
//!
//! - **code** (4 bits): one of the sixteen primary [`ErrorCode`]s
//! - **subcode** (12 bits): refinement of the code, `0x000` is generic
//! - **space** (16 bits): the error space the subcode belongs to
//!
//! Because the code sits in the low nibble, a consumer that only understands
//! primary codes recovers the broad category with [`get_code`], whatever the
//! space and subcode are.
//!
//! # Error Spaces
//!
//! Spaces are a frozen identity, like the primaries. [`ErrorSpace`] has a
//! private field and only the const instances in [`spaces`] exist. The system
//! space is `0x0000`, so every system result with a generic subcode equals
//! its error code.
//!
//! # Example
//!
//! ```rust
//! use mojo_result::{ErrorCode, SUBCODE_SHOULD_WAIT, get_code, get_subcode, make, spaces};
//!
//! let should_wait = make(
//!     ErrorCode::Unavailable.value(),
//!     spaces::SYSTEM.value(),
//!     SUBCODE_SHOULD_WAIT,
//! );
//! assert_eq!(should_wait, 0x001E);
//! assert_eq!(get_code(should_wait), ErrorCode::Unavailable.value());
//! assert_eq!(get_subcode(should_wait), 0x001);
//! ```

use crate::MojoResult;
use std::fmt;

// ============================================================================
// Field Geometry
// ============================================================================

/// Mask of the error code field (bits 0..4).
pub const CODE_MASK: MojoResult = 0xF;

/// Mask of the subcode field once shifted down (bits 4..16).
pub const SUBCODE_MASK: MojoResult = 0xFFF;

/// Mask of the space field once shifted down (bits 16..32).
pub const SPACE_MASK: MojoResult = 0xFFFF;

/// Bit offset of the subcode field.
pub const SUBCODE_SHIFT: u32 = 4;

/// Bit offset of the space field.
pub const SPACE_SHIFT: u32 = 16;

// ============================================================================
// Subcodes
// ============================================================================

/// Subcode carried by every result that does not refine its code.
pub const SUBCODE_GENERIC: MojoResult = 0x000;

/// Subcode of [`ErrorCode::InvalidArgument`]: the handle is not valid.
pub const SUBCODE_BAD_HANDLE: MojoResult = 0x001;

/// Subcode of [`ErrorCode::InvalidArgument`]: the handle has the wrong type.
pub const SUBCODE_WRONG_TYPE: MojoResult = 0x002;

/// Subcode of [`ErrorCode::FailedPrecondition`]: a resource involved is in use
/// elsewhere, possibly on another thread.
pub const SUBCODE_BUSY: MojoResult = 0x001;

/// Subcode of [`ErrorCode::Unavailable`]: not feasible yet, wait and retry.
pub const SUBCODE_SHOULD_WAIT: MojoResult = 0x001;

// ============================================================================
// Packing
// ============================================================================

/// Pack a code, space and subcode into a result.
///
/// Each field is masked to its width, so oversized inputs are truncated
/// rather than bleeding into neighbouring fields. Use [`checked_make`] when
/// the fields come from untrusted input.
#[inline]
pub const fn make(code: MojoResult, space: MojoResult, subcode: MojoResult) -> MojoResult {
    (code & CODE_MASK)
        | ((subcode & SUBCODE_MASK) << SUBCODE_SHIFT)
        | ((space & SPACE_MASK) << SPACE_SHIFT)
}

/// Extract the error code (low nibble).
#[inline]
pub const fn get_code(result: MojoResult) -> MojoResult {
    result & CODE_MASK
}

/// Extract the error space.
#[inline]
pub const fn get_space(result: MojoResult) -> MojoResult {
    (result >> SPACE_SHIFT) & SPACE_MASK
}

/// Extract the subcode.
#[inline]
pub const fn get_subcode(result: MojoResult) -> MojoResult {
    (result >> SUBCODE_SHIFT) & SUBCODE_MASK
}

/// Pack a result, rejecting any field wider than its slot.
///
/// # Errors
///
/// Returns the first [`LayoutViolation`] found, checked in code, subcode,
/// space order.
pub fn checked_make(
    code: MojoResult,
    space: MojoResult,
    subcode: MojoResult,
) -> Result<MojoResult, LayoutViolation> {
    if code > CODE_MASK {
        return Err(LayoutViolation::CodeOutOfRange { value: code });
    }
    if subcode > SUBCODE_MASK {
        return Err(LayoutViolation::SubcodeOutOfRange { value: subcode });
    }
    if space > SPACE_MASK {
        return Err(LayoutViolation::SpaceOutOfRange { value: space });
    }
    Ok(make(code, space, subcode))
}

/// A field passed to [`checked_make`] does not fit its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutViolation {
    /// Code exceeds 0xF.
    CodeOutOfRange {
        /// The rejected field value.
        value: MojoResult,
    },
    /// Subcode exceeds 0xFFF.
    SubcodeOutOfRange {
        /// The rejected field value.
        value: MojoResult,
    },
    /// Space exceeds 0xFFFF.
    SpaceOutOfRange {
        /// The rejected field value.
        value: MojoResult,
    },
}

impl fmt::Display for LayoutViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeOutOfRange { value } => {
                write!(f, "Error code {:#x} does not fit in 4 bits", value)
            }
            Self::SubcodeOutOfRange { value } => {
                write!(f, "Subcode {:#x} does not fit in 12 bits", value)
            }
            Self::SpaceOutOfRange { value } => {
                write!(f, "Error space {:#x} does not fit in 16 bits", value)
            }
        }
    }
}

impl std::error::Error for LayoutViolation {}

// ============================================================================
// Primary Error Codes
// ============================================================================

/// The sixteen primary error codes, one per value of the low nibble.
///
/// This type is Copy: it is metadata derived from a result, not the result
/// identity itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    /// Not an error.
    Ok = 0x0,
    /// Operation was cancelled, typically by the caller.
    Cancelled = 0x1,
    /// Unknown error, e.g. a result from another error space.
    Unknown = 0x2,
    /// Caller specified an invalid argument.
    InvalidArgument = 0x3,
    /// Deadline expired before the operation could complete.
    DeadlineExceeded = 0x4,
    /// Some requested entity was not found.
    NotFound = 0x5,
    /// Some entity the caller attempted to create already exists.
    AlreadyExists = 0x6,
    /// Caller lacks permission for the operation.
    PermissionDenied = 0x7,
    /// Some resource required for the operation has been exhausted.
    ResourceExhausted = 0x8,
    /// The system is not in a state required for the operation.
    FailedPrecondition = 0x9,
    /// Operation was aborted, typically due to a concurrency issue.
    Aborted = 0xA,
    /// Operation was attempted past the valid range.
    OutOfRange = 0xB,
    /// Operation is not implemented, supported or enabled.
    Unimplemented = 0xC,
    /// Internal error: an invariant was broken.
    Internal = 0xD,
    /// The operation may succeed if retried later.
    Unavailable = 0xE,
    /// Unrecoverable data loss or corruption.
    DataLoss = 0xF,
}

impl ErrorCode {
    /// Decode the primary category of any result.
    ///
    /// Total: only the low nibble is read, and all sixteen values are named.
    #[inline]
    pub const fn from_bits(result: MojoResult) -> Self {
        match get_code(result) {
            0x0 => Self::Ok,
            0x1 => Self::Cancelled,
            0x2 => Self::Unknown,
            0x3 => Self::InvalidArgument,
            0x4 => Self::DeadlineExceeded,
            0x5 => Self::NotFound,
            0x6 => Self::AlreadyExists,
            0x7 => Self::PermissionDenied,
            0x8 => Self::ResourceExhausted,
            0x9 => Self::FailedPrecondition,
            0xA => Self::Aborted,
            0xB => Self::OutOfRange,
            0xC => Self::Unimplemented,
            0xD => Self::Internal,
            0xE => Self::Unavailable,
            _ => Self::DataLoss,
        }
    }

    /// Numeric value of the code.
    #[inline]
    pub const fn value(self) -> MojoResult {
        self as MojoResult
    }

    /// Canonical uppercase name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::Aborted => "ABORTED",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
            Self::DataLoss => "DATA_LOSS",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Error Space (Frozen Identity)
// ============================================================================

/// Error space identity.
///
/// Cannot be constructed outside this crate; the instances in [`spaces`] are
/// the only ones.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ErrorSpace {
    name: &'static str,
    value: MojoResult,
    _private: (),
}

impl ErrorSpace {
    const fn new(name: &'static str, value: MojoResult) -> Self {
        assert!(value <= SPACE_MASK, "Error space must fit in 16 bits");
        Self {
            name,
            value,
            _private: (),
        }
    }

    /// Name used in diagnostics.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.name
    }

    /// Numeric space value, unshifted.
    #[inline]
    pub const fn value(&self) -> MojoResult {
        self.value
    }

    /// Check whether a result belongs to this space.
    #[inline]
    pub const fn contains(&self, result: MojoResult) -> bool {
        get_space(result) == self.value
    }
}

/// Canonical error space instances.
pub mod spaces {
    use super::ErrorSpace;

    /// The system error space: handles, message pipes, data pipes.
    pub const SYSTEM: ErrorSpace = ErrorSpace::new("SYSTEM", 0x0000);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Layout Tests
    // ========================================================================

    #[test]
    fn make_packs_fields() {
        assert_eq!(make(0x8, 0x1234, 0x567), 0x1234_5678);
        assert_eq!(make(0xF, 0xFEDC, 0xFED), 0xFEDC_FEDF);
    }

    #[test]
    fn getters_unpack_fields() {
        assert_eq!(get_code(0x1234_5678), 0x8);
        assert_eq!(get_space(0x1234_5678), 0x1234);
        assert_eq!(get_subcode(0x1234_5678), 0x567);

        assert_eq!(get_code(0xFEDC_FEDF), 0xF);
        assert_eq!(get_space(0xFEDC_FEDF), 0xFEDC);
        assert_eq!(get_subcode(0xFEDC_FEDF), 0xFED);
    }

    #[test]
    fn make_masks_oversized_fields() {
        assert_eq!(make(0x13, 0, 0), 0x3);
        assert_eq!(make(0, 0, 0x1001), 0x0010);
        assert_eq!(make(0, 0x1_0002, 0), 0x0002_0000);
    }

    #[test]
    fn ok_is_all_zero() {
        assert_eq!(make(ErrorCode::Ok.value(), spaces::SYSTEM.value(), SUBCODE_GENERIC), 0);
    }

    #[test]
    fn checked_make_rejects_wide_fields() {
        assert_eq!(
            checked_make(0x10, 0, 0),
            Err(LayoutViolation::CodeOutOfRange { value: 0x10 })
        );
        assert_eq!(
            checked_make(0x3, 0, 0x1000),
            Err(LayoutViolation::SubcodeOutOfRange { value: 0x1000 })
        );
        assert_eq!(
            checked_make(0x3, 0x1_0000, 0x1),
            Err(LayoutViolation::SpaceOutOfRange { value: 0x1_0000 })
        );
        assert_eq!(checked_make(0x3, 0, 0x1), Ok(0x13));
    }

    #[test]
    fn violation_display_names_field() {
        let msg = LayoutViolation::SubcodeOutOfRange { value: 0x1000 }.to_string();
        assert!(msg.contains("Subcode"));
        assert!(msg.contains("0x1000"));
    }

    // ========================================================================
    // Primary Code Tests
    // ========================================================================

    #[test]
    fn from_bits_reads_low_nibble_only() {
        assert_eq!(ErrorCode::from_bits(0x0013), ErrorCode::InvalidArgument);
        assert_eq!(ErrorCode::from_bits(0x0019), ErrorCode::FailedPrecondition);
        assert_eq!(ErrorCode::from_bits(0x001E), ErrorCode::Unavailable);
        assert_eq!(ErrorCode::from_bits(0xFFFF_FFFF), ErrorCode::DataLoss);
    }

    #[test]
    fn from_bits_round_trips_every_primary() {
        for value in 0..=CODE_MASK {
            assert_eq!(ErrorCode::from_bits(value).value(), value);
        }
    }

    #[test]
    fn primary_display_matches_name() {
        assert_eq!(ErrorCode::DeadlineExceeded.to_string(), "DEADLINE_EXCEEDED");
        assert_eq!(ErrorCode::Ok.as_str(), "OK");
    }

    // ========================================================================
    // Space Tests
    // ========================================================================

    #[test]
    fn system_space_contains_legacy_values() {
        assert_eq!(spaces::SYSTEM.as_str(), "SYSTEM");
        assert!(spaces::SYSTEM.contains(0x001E));
        assert!(!spaces::SYSTEM.contains(0x0001_0003));
    }
}
