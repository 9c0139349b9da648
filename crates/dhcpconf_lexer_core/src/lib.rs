//! Low-level byte scanner for the dhcpconf configuration language.
//!
//! The scanner is a finite-state machine that consumes one byte at a time and
//! reports a [`ScanCode`] describing whether that byte begins, ends, or
//! continues a lexical symbol. It never allocates tokens itself; assembling
//! bytes into tokens is the job of `dhcpconf_lexer`.
//!
//! Nested lexical contexts (a string opened from inside an identifier, a
//! comment opened from the outer context) are tracked with a state stack so
//! that leaving a context returns control to whatever context enclosed it.

mod scanner;

pub use scanner::{is_identifier_begin, is_whitespace, ScanCode, ScanError, ScanState, Scanner};
