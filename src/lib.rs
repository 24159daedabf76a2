//! # styled-yaml
//!
//! Choose YAML output styles for individual values.
//!
//! Annotate in-memory values (scalars, mappings, sequences) with a desired
//! presentation style (block literal, block folded, single-quoted,
//! double-quoted, or flow) and dump them to YAML text that honors those
//! annotations, overriding the emitter's own style heuristics. The output
//! is standard YAML; only presentation changes, never the value.
//!
//! ## Design
//!
//! The style annotation is carried by the value itself: each helper wraps a
//! [`Value`] in a styled layer that travels with it through moves, clones,
//! and repeated dumps. Serialization runs in two stages, both backed by
//! `libyaml-safer` (the safe Rust port of libyaml): a visitor walks the
//! annotated value and builds the engine's node tree, resolving each node's
//! style independently from its own annotation, then the engine emitter
//! renders the tree to text. Styles never leak onto sibling or child nodes,
//! and style is not preserved across a parse; only value equality is
//! guaranteed on re-reading the output.
//!
//! ## Example
//!
//! ```rust
//! use styled_yaml::{double_quoted, dump, inline, literal, Value};
//!
//! let recipe = Value::mapping(vec![
//!     ("name", double_quoted("Fruit Salad")),
//!     ("ingredients", inline(vec!["apple", "pear", "orange"])),
//!     ("steps", literal("1. Dice the fruit.\n2. Combine in a bowl.\n")),
//! ]);
//!
//! let text = dump(&recipe)?;
//! assert!(text.starts_with("---\n"));
//! assert!(text.contains("name: \"Fruit Salad\""));
//! assert!(text.contains("ingredients: [apple, pear, orange]"));
//! assert!(text.contains("steps: |"));
//! # Ok::<(), styled_yaml::Error>(())
//! ```

mod builder;
mod dumper;
mod error;
mod style;
mod value;
mod visitor;

pub use dumper::{DumpOptions, dump, dump_to, dump_to_with, dump_with};
pub use error::{Error, Result};
pub use style::Style;
pub use value::Value;

/// Annotate a value with an explicit style.
///
/// The style must fit the value's shape: scalar styles on scalars,
/// collection styles on mappings and sequences. A mismatched request is
/// non-fatal: it logs a warning and returns the value unannotated, so the
/// dump proceeds with default styling for that value.
pub fn styled(value: impl Into<Value>, style: Style) -> Value {
    let value = value.into();
    let fits = if style.is_scalar_style() {
        value.is_scalar()
    } else {
        value.is_mapping() || value.is_sequence()
    };
    if !fits {
        tracing::warn!(?style, "style does not fit the value's shape; leaving it unstyled");
        return value;
    }
    value.with_style(style)
}

/// Annotate a scalar to be output in literal block style (`|`).
pub fn literal(value: impl Into<Value>) -> Value {
    styled(value, Style::Literal)
}

/// Annotate a scalar to be output in folded block style (`>`).
pub fn folded(value: impl Into<Value>) -> Value {
    styled(value, Style::Folded)
}

/// Annotate a scalar to be output single-quoted.
pub fn single_quoted(value: impl Into<Value>) -> Value {
    styled(value, Style::SingleQuoted)
}

/// Annotate a scalar to be output double-quoted.
pub fn double_quoted(value: impl Into<Value>) -> Value {
    styled(value, Style::DoubleQuoted)
}

/// Annotate a mapping or sequence to be output on one line, in flow style.
///
/// The flow kind is resolved from the value's shape. Annotating a scalar is
/// non-fatal: it logs a warning and returns the value unannotated.
pub fn inline(value: impl Into<Value>) -> Value {
    let value = value.into();
    if value.is_mapping() {
        value.with_style(Style::FlowMapping)
    } else if value.is_sequence() {
        value.with_style(Style::FlowSequence)
    } else {
        tracing::warn!("inline: value is not a mapping or sequence; leaving it unstyled");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_set_matching_styles() {
        assert_eq!(literal("a\nb\n").style(), Some(Style::Literal));
        assert_eq!(folded("a\nb\n").style(), Some(Style::Folded));
        assert_eq!(single_quoted("a").style(), Some(Style::SingleQuoted));
        assert_eq!(double_quoted("a").style(), Some(Style::DoubleQuoted));
        assert_eq!(
            inline(Value::mapping(vec![("k", 1)])).style(),
            Some(Style::FlowMapping)
        );
        assert_eq!(inline(vec![1, 2]).style(), Some(Style::FlowSequence));
    }

    #[test]
    fn test_inline_on_scalar_is_non_fatal() {
        let value = inline("oops");
        assert_eq!(value.style(), None);
        assert_eq!(value, Value::String("oops".into()));

        // Dumping the rejected value proceeds with default styling.
        let data = Value::mapping(vec![("k", inline("oops"))]);
        assert_eq!(dump(&data).unwrap(), "---\nk: oops\n");
    }

    #[test]
    fn test_scalar_style_on_collection_is_non_fatal() {
        let value = styled(Value::sequence(vec![1, 2]), Style::Literal);
        assert_eq!(value.style(), None);
        assert!(value.is_sequence());
    }

    #[test]
    fn test_collection_style_on_scalar_is_non_fatal() {
        let value = styled(Value::from("text"), Style::FlowMapping);
        assert_eq!(value.style(), None);
    }

    #[test]
    fn test_reannotation_last_writer_wins() {
        let value = literal(folded("a\nb\n"));
        assert_eq!(value.style(), Some(Style::Literal));
    }
}
