//! dhcpconf Renderer
//!
//! Canonical text for configuration trees. Rendering is total: every tree
//! value has exactly one canonical form, and decoding that form yields the
//! same tree back.
//!
//! # Layout
//!
//! - One statement per line, terminated by `;` or by a block.
//! - A block opens with ` {` on the statement's line, indents its contents by
//!   one unit, and closes with `}` on a line of its own at the statement's
//!   indentation. An empty block is `{` followed by a lone `}`.
//! - Branches of a conditional chain follow each other with no blank line.
//! - List values are joined with `, `.
//!
//! # Modules
//!
//! - [`emitter`]: string and streaming output sinks
//! - `render`: the [`Render`] impls for every statement kind

pub mod emitter;
mod render;

use std::io::{self, Write};

use dhcpconf_ir::Statement;

pub use emitter::{Emitter, StringEmitter, WriterEmitter};
pub use render::{expression, Render};

/// The indent unit of the canonical form.
pub const DEFAULT_INDENT: &str = "  ";

/// Rendering configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text added per nesting level.
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_owned(),
        }
    }
}

/// Render a top-level statement list.
pub fn render_block(block: &[Statement], options: &RenderOptions) -> String {
    let mut out = StringEmitter::with_options(options);
    block.render_to(&mut out, 0);
    out.output()
}

/// Render a top-level statement list straight into `writer`.
pub fn render_to_writer<W: Write>(
    block: &[Statement],
    options: &RenderOptions,
    writer: W,
) -> io::Result<W> {
    let mut out = WriterEmitter::new(writer, options);
    block.render_to(&mut out, 0);
    out.finish()
}
