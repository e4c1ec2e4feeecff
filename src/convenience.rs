//! Macros for declaring result code tables.

/// Define a closed table of named result codes.
///
/// Emits, in the calling module:
///
/// - one `pub const NAME: MojoResult` per entry;
/// - `RESULT_TABLE`, every `(value, name)` pair in declaration order;
/// - `describe`, an exact-match lookup from value to name that returns
///   `"UNKNOWN"` for anything not in the table.
///
/// Names are taken verbatim from the identifiers, so a constant and its
/// description can never drift apart. Values must be pairwise distinct; a
/// duplicate fails the build through a const assertion.
///
/// # Example
///
/// ```rust
/// mod pipe {
///     mojo_result::define_result_codes! {
///         /// Fine.
///         OK = 0x0,
///         /// Peer closed.
///         FAILED_PRECONDITION = 0x9,
///     }
/// }
///
/// assert_eq!(pipe::describe(pipe::FAILED_PRECONDITION), "FAILED_PRECONDITION");
/// assert_eq!(pipe::describe(0x42), "UNKNOWN");
/// assert_eq!(pipe::RESULT_TABLE.len(), 2);
/// ```
///
/// ```rust,compile_fail
/// // Two names for one value would make `describe` ambiguous.
/// mod clash {
///     mojo_result::define_result_codes! {
///         FIRST = 0x5,
///         SECOND = 0x5,
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_result_codes {
    ($( $(#[$meta:meta])* $name:ident = $value:expr ),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub const $name: $crate::MojoResult = $value;
        )+

        /// Every defined `(value, name)` pair, in declaration order.
        pub const RESULT_TABLE: &[($crate::MojoResult, &str)] = &[
            $( ($name, stringify!($name)), )+
        ];

        const _: () = {
            let table = RESULT_TABLE;
            let mut i = 0;
            while i < table.len() {
                let mut j = i + 1;
                while j < table.len() {
                    assert!(table[i].0 != table[j].0, "duplicate result code value");
                    j += 1;
                }
                i += 1;
            }
        };

        /// Describe a raw result code.
        ///
        /// Total over every 32-bit value: anything outside the table yields
        /// `"UNKNOWN"`, the same text as the `UNKNOWN` constant's name.
        pub const fn describe(result: $crate::MojoResult) -> &'static str {
            match result {
                $( $name => stringify!($name), )+
                _ => "UNKNOWN",
            }
        }
    };
}

// ============================================================================
// Tests
// ============================================================================
