//! Per-node rendering.

mod conditional;
mod parameter;

use dhcpconf_ir::Statement;

use crate::{Emitter, StringEmitter};

pub use conditional::expression;

/// Canonical rendering of a statement-level node.
pub trait Render {
    /// Write the node's lines at nesting `level`.
    fn render_to<E: Emitter>(&self, out: &mut E, level: usize);

    /// Canonical text with every line starting with `prefix`.
    ///
    /// Nested blocks add the default indent unit per level after the prefix.
    fn render(&self, prefix: &str) -> String {
        let mut out = StringEmitter::new().with_prefix(prefix);
        self.render_to(&mut out, 0);
        out.output()
    }
}

impl Render for [Statement] {
    fn render_to<E: Emitter>(&self, out: &mut E, level: usize) {
        for statement in self {
            statement.render_to(out, level);
        }
    }
}

impl Render for Statement {
    fn render_to<E: Emitter>(&self, out: &mut E, level: usize) {
        match self {
            Statement::Group { statements } => scope(out, level, "group", statements),
            Statement::Host { name, statements } => {
                scope(out, level, &format!("host {name}"), statements);
            }
            Statement::SharedNetwork { name, statements } => {
                scope(out, level, &format!("shared-network {name}"), statements);
            }
            Statement::Subnet {
                network,
                netmask,
                statements,
            } => scope(
                out,
                level,
                &format!("subnet {network} netmask {netmask}"),
                statements,
            ),
            Statement::Include { filename } => {
                line(out, level, &format!("include \"{filename}\";"));
            }
            Statement::Parameter(parameter) => parameter.render_to(out, level),
            Statement::Option(option) => option.render_to(out, level),
            Statement::Conditional(chain) => chain.render_to(out, level),
        }
    }
}

/// `head {`, the block one level deeper, then `}`.
pub(crate) fn scope<E: Emitter>(out: &mut E, level: usize, head: &str, block: &[Statement]) {
    out.emit_indent(level);
    out.emit(head);
    out.emit(" {");
    out.emit_newline();
    block.render_to(out, level + 1);
    out.emit_indent(level);
    out.emit("}");
    out.emit_newline();
}

pub(crate) fn line<E: Emitter>(out: &mut E, level: usize, text: &str) {
    out.emit_indent(level);
    out.emit(text);
    out.emit_newline();
}
