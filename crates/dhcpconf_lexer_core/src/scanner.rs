//! State-stack scanner producing one [`ScanCode`] per input byte.
//!
//! # Design
//!
//! Transitions are keyed by `(active state, byte class)`. Byte classes are
//! explicit predicates dispatched through `match`; no pattern engine is
//! involved in classifying a single byte. A transition may leave the stack
//! untouched, push a nested state, pop back to the enclosing state, or pop
//! and then push (an identifier running straight into a quoted literal).
//!
//! The bottom of the stack is always [`ScanState::FindAnyBegin`]. A pop that
//! would remove it is reported as [`ScanError::StateStackUnderflow`] and
//! leaves the stack unchanged.

use std::fmt;

use thiserror::Error;

/// A lexical context the scanner can be in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Outer resting state: between tokens.
    FindAnyBegin,
    /// Inside an identifier (keyword, literal, operator glyph run).
    FindIdentifierEnd,
    /// Inside a double-quoted string.
    FindStringEnd,
    /// Inside a `#` comment.
    FindCommentEnd,
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanState::FindAnyBegin => "FindAnyBegin",
            ScanState::FindIdentifierEnd => "FindIdentifierEnd",
            ScanState::FindStringEnd => "FindStringEnd",
            ScanState::FindCommentEnd => "FindCommentEnd",
        };
        f.write_str(name)
    }
}

/// Event reported for a single byte.
///
/// `*Begin` codes and the single-byte punctuation codes mean the byte starts a
/// new symbol. `IdentifierEnd` and `CommentEnd` mean the previous symbol ended
/// *before* this byte (the byte itself is whitespace). `StringEnd` is the
/// exception: the closing quote belongs to the string it ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanCode {
    /// Append the byte to the symbol in progress.
    Continue,
    Whitespace,
    BlockBegin,
    BlockEnd,
    ParenOpen,
    ParenClose,
    StringBegin,
    StringEnd,
    IdentifierBegin,
    IdentifierEnd,
    CommentBegin,
    CommentEnd,
    Semicolon,
    Comma,
}

/// Malformed input detected by the scanner.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A transition tried to pop the outermost state.
    #[error("unbalanced lexical context: cannot leave {state}, state stack would be empty")]
    StateStackUnderflow { state: ScanState },
}

/// Stack operation attached to a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum StackOp {
    Stay,
    Push(ScanState),
    Pop,
    PopThenPush(ScanState),
}

/// Byte-at-a-time scanner with a lexical state stack.
#[derive(Clone, Debug)]
pub struct Scanner {
    /// Active state is the last element. Never empty.
    states: Vec<ScanState>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Create a scanner resting in [`ScanState::FindAnyBegin`].
    pub fn new() -> Self {
        Scanner {
            states: vec![ScanState::FindAnyBegin],
        }
    }

    /// The active (top-of-stack) state.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.states
            .last()
            .copied()
            .unwrap_or(ScanState::FindAnyBegin)
    }

    /// Number of states on the stack, including the outer resting state.
    #[inline]
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Classify `byte` in the active state and apply the resulting transition.
    pub fn step(&mut self, byte: u8) -> Result<ScanCode, ScanError> {
        let (code, op) = transition(self.state(), byte);
        self.apply(op)?;
        Ok(code)
    }

    fn apply(&mut self, op: StackOp) -> Result<(), ScanError> {
        match op {
            StackOp::Stay => {}
            StackOp::Push(state) => self.states.push(state),
            StackOp::Pop => self.pop()?,
            StackOp::PopThenPush(state) => {
                self.pop()?;
                self.states.push(state);
            }
        }
        Ok(())
    }

    fn pop(&mut self) -> Result<(), ScanError> {
        if self.states.len() <= 1 {
            return Err(ScanError::StateStackUnderflow {
                state: self.state(),
            });
        }
        self.states.pop();
        Ok(())
    }
}

/// ASCII whitespace as understood by the configuration grammar.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Bytes with a fixed structural meaning in the outer context.
#[inline]
fn is_structural(byte: u8) -> bool {
    matches!(
        byte,
        b'{' | b'}' | b'(' | b')' | b'"' | b'#' | b';' | b','
    )
}

/// Whether `byte` starts an identifier when seen between tokens.
///
/// Covers alphanumerics, the punctuation found inside address, network and
/// date literals (`. : / -`), the comparison glyphs `= ! ~`, and any non-ASCII
/// byte (part of a UTF-8 sequence).
#[inline]
pub fn is_identifier_begin(byte: u8) -> bool {
    (byte.is_ascii_graphic() && !is_structural(byte)) || byte >= 0x80
}

fn transition(state: ScanState, byte: u8) -> (ScanCode, StackOp) {
    match state {
        ScanState::FindAnyBegin => match byte {
            b'{' => (ScanCode::BlockBegin, StackOp::Stay),
            b'}' => (ScanCode::BlockEnd, StackOp::Stay),
            b'(' => (ScanCode::ParenOpen, StackOp::Stay),
            b')' => (ScanCode::ParenClose, StackOp::Stay),
            b'"' => (
                ScanCode::StringBegin,
                StackOp::Push(ScanState::FindStringEnd),
            ),
            b'#' => (
                ScanCode::CommentBegin,
                StackOp::Push(ScanState::FindCommentEnd),
            ),
            b';' => (ScanCode::Semicolon, StackOp::Stay),
            b',' => (ScanCode::Comma, StackOp::Stay),
            b if is_whitespace(b) => (ScanCode::Whitespace, StackOp::Stay),
            b if is_identifier_begin(b) => (
                ScanCode::IdentifierBegin,
                StackOp::Push(ScanState::FindIdentifierEnd),
            ),
            _ => (ScanCode::Continue, StackOp::Stay),
        },
        ScanState::FindIdentifierEnd => match byte {
            b'{' => (ScanCode::BlockBegin, StackOp::Pop),
            b'}' => (ScanCode::BlockEnd, StackOp::Pop),
            b'(' => (ScanCode::ParenOpen, StackOp::Pop),
            b')' => (ScanCode::ParenClose, StackOp::Pop),
            b'"' => (
                ScanCode::StringBegin,
                StackOp::PopThenPush(ScanState::FindStringEnd),
            ),
            b';' => (ScanCode::Semicolon, StackOp::Pop),
            b',' => (ScanCode::Comma, StackOp::Pop),
            b if is_whitespace(b) => (ScanCode::IdentifierEnd, StackOp::Pop),
            _ => (ScanCode::Continue, StackOp::Stay),
        },
        ScanState::FindStringEnd => match byte {
            b'"' => (ScanCode::StringEnd, StackOp::Pop),
            _ => (ScanCode::Continue, StackOp::Stay),
        },
        ScanState::FindCommentEnd => match byte {
            b'\n' => (ScanCode::CommentEnd, StackOp::Pop),
            _ => (ScanCode::Continue, StackOp::Stay),
        },
    }
}
