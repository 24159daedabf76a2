//! Dump entry points: annotated values to YAML text.

use std::io::Write;

use libyaml_safer::Emitter;

use crate::builder::StyledTreeBuilder;
use crate::visitor::StyledVisitor;
use crate::{Result, Value};

/// Options controlling text emission.
///
/// Forwarded to the engine emitter; they affect layout only, never the
/// styles resolved from annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Indentation increment in spaces. The engine clamps values outside
    /// `2..=9` back to 2.
    pub indent: i32,
    /// Preferred line width for wrapping; `-1` means unlimited.
    pub width: i32,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            width: -1,
        }
    }
}

/// Dump a value to YAML text.
///
/// Style annotations on the value (and on any values nested inside it) are
/// honored; everything unannotated gets the engine's default styling. Each
/// call builds its node tree from scratch, so dumping the same structure
/// twice yields identical text.
///
/// # Example
///
/// ```rust
/// use styled_yaml::{dump, inline, Value};
///
/// let data = Value::mapping(vec![("fruit", inline(vec!["apples", "bananas"]))]);
/// assert_eq!(dump(&data).unwrap(), "---\nfruit: [apples, bananas]\n");
/// ```
///
/// # Errors
///
/// Returns an error if the engine fails while emitting the node tree.
pub fn dump(value: &Value) -> Result<String> {
    dump_with(value, &DumpOptions::default())
}

/// Dump a value to YAML text with explicit emission options.
///
/// # Errors
///
/// Returns an error if the engine fails while emitting the node tree.
pub fn dump_with(value: &Value, options: &DumpOptions) -> Result<String> {
    let mut output = Vec::new();
    let mut emitter = Emitter::new();
    emitter.set_output_string(&mut output);
    emit(value, options, &mut emitter)?;
    Ok(String::from_utf8(output)?)
}

/// Dump a value as YAML text into a writer.
///
/// # Errors
///
/// Returns an error if the engine fails while emitting, or if writing to
/// the sink fails.
pub fn dump_to<W: Write>(value: &Value, writer: &mut W) -> Result<()> {
    dump_to_with(value, writer, &DumpOptions::default())
}

/// Dump a value into a writer with explicit emission options.
///
/// # Errors
///
/// Returns an error if the engine fails while emitting, or if writing to
/// the sink fails.
pub fn dump_to_with<W: Write>(value: &Value, writer: &mut W, options: &DumpOptions) -> Result<()> {
    let mut emitter = Emitter::new();
    emitter.set_output(writer);
    emit(value, options, &mut emitter)
}

fn emit(value: &Value, options: &DumpOptions, emitter: &mut Emitter) -> Result<()> {
    emitter.set_indent(options.indent);
    emitter.set_width(options.width);

    // A fresh builder/visitor pair per call: the pending-override slot must
    // never be shared across dumps.
    let mut builder = StyledTreeBuilder::new();
    let mut visitor = StyledVisitor::new(&mut builder);
    visitor.visit(value);

    let document = builder.into_document();
    document.dump(emitter)?;
    emitter.close()?;
    Ok(())
}
