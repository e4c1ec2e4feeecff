//! Structured diagnostic entry for a raw result.
//!
//! `ResultLog` decodes a `MojoResult` into its name and layout fields and
//! writes them as a single line, so callers in handle, message pipe and data
//! pipe code can log outcomes uniformly:
//!
//! ```text
//! [SHOULD_WAIT] value=0x0000001e code=UNAVAILABLE space=0x0000 subcode=0x001 operation='read_data'
//! ```
//!
//! The entry borrows its context and never outlives the call that built it.
//! Nothing is allocated for the fixed fields. Context values have control
//! characters replaced with `'?'`, and values longer than
//! `MAX_FIELD_OUTPUT_LEN` are cut on a character boundary.
//!
//! ```rust
//! use mojo_result::{ResultLog, BUSY};
//!
//! let mut line = String::new();
//! ResultLog::new(BUSY)
//!     .with_operation("write_message")
//!     .with_field("handle", "7")
//!     .write_to(&mut line)
//!     .unwrap();
//!
//! assert!(line.starts_with("[BUSY] value=0x00000019 code=FAILED_PRECONDITION"));
//! assert!(line.ends_with("operation='write_message' handle='7'"));
//! ```

use crate::codes::{ErrorCode, get_space, get_subcode};
use crate::{MojoResult, describe};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any context field in formatted output.
pub const MAX_FIELD_OUTPUT_LEN: usize = 256;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// One-line diagnostic view of a result code.
#[derive(Debug, Clone)]
pub struct ResultLog<'a> {
    result: MojoResult,
    operation: Option<&'a str>,
    fields: SmallVec<[(&'static str, &'a str); 4]>,
}

impl<'a> ResultLog<'a> {
    /// Start an entry for a raw result.
    #[inline]
    pub fn new(result: MojoResult) -> Self {
        Self {
            result,
            operation: None,
            fields: SmallVec::new(),
        }
    }

    /// Name the operation that produced the result.
    #[inline]
    pub fn with_operation(mut self, operation: &'a str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Attach a key/value pair. Inline storage holds four before spilling.
    #[inline]
    pub fn with_field(mut self, key: &'static str, value: &'a str) -> Self {
        self.fields.push((key, value));
        self
    }

    /// Raw value being logged.
    #[inline]
    pub const fn result(&self) -> MojoResult {
        self.result
    }

    /// Canonical name, `"UNKNOWN"` for unrecognized values.
    #[inline]
    pub const fn name(&self) -> &'static str {
        describe(self.result)
    }

    /// Primary category from the low nibble.
    #[inline]
    pub const fn category(&self) -> ErrorCode {
        ErrorCode::from_bits(self.result)
    }

    /// Operation label, unsanitized.
    #[inline]
    pub const fn operation(&self) -> Option<&'a str> {
        self.operation
    }

    /// Attached key/value pairs, unsanitized.
    #[inline]
    pub fn fields(&self) -> &[(&'static str, &'a str)] {
        &self.fields
    }

    /// Write the entry to any formatter sink.
    ///
    /// Only fails if the sink does.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] value={:#010x} code={} space={:#06x} subcode={:#05x}",
            self.name(),
            self.result,
            self.category(),
            get_space(self.result),
            get_subcode(self.result),
        )?;

        if let Some(operation) = self.operation {
            write!(f, " operation='{}'", sanitize_field(operation))?;
        }

        for (key, value) in &self.fields {
            write!(f, " {}='{}'", key, sanitize_field(value))?;
        }

        Ok(())
    }
}

impl fmt::Display for ResultLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Make a context value safe for a single log line.
///
/// Control characters (newlines, tabs, escapes) become `'?'` so a value
/// cannot split the entry or forge a second record. Values longer than
/// `MAX_FIELD_OUTPUT_LEN` bytes keep as many whole characters as fit ahead of
/// `TRUNCATION_INDICATOR`. Borrows when the value is already clean and short.
fn sanitize_field(s: &str) -> Cow<'_, str> {
    let needs_cut = s.len() > MAX_FIELD_OUTPUT_LEN;
    if !needs_cut && !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }

    let budget = if needs_cut {
        MAX_FIELD_OUTPUT_LEN - TRUNCATION_INDICATOR.len()
    } else {
        MAX_FIELD_OUTPUT_LEN
    };

    let mut out = String::with_capacity(s.len().min(MAX_FIELD_OUTPUT_LEN));
    for c in s.chars() {
        let c = if c.is_control() { '?' } else { c };
        if out.len() + c.len_utf8() > budget {
            break;
        }
        out.push(c);
    }

    if needs_cut {
        out.push_str(TRUNCATION_INDICATOR);
    }
    Cow::Owned(out)
}
