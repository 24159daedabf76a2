//! Node construction with style overrides.

use libyaml_safer::{Document, MappingStyle, ScalarStyle, SequenceStyle};

use crate::{Style, Value};

/// Builds the engine's node tree while honoring style annotations.
///
/// Mirrors the node-construction surface of [`libyaml_safer::Document`]
/// (add scalar, add collection, append children), so the visitor drives it
/// exactly as it would drive the engine's own builder. Two interceptions
/// happen here:
///
/// - scalar construction reads the style annotation directly off the value
///   being converted;
/// - collection construction consumes the one-shot pending override armed
///   by the visitor immediately before the call.
///
/// Scalars are always added with the engine's default tag. During emission
/// that makes the scalar's tag implicit for quoted styles as well as plain,
/// which is what keeps a literal/folded request on plain-looking content
/// from being downgraded, and keeps quoted output free of a `!` tag.
pub(crate) struct StyledTreeBuilder {
    document: Document,
    next_collection_style: Option<Style>,
}

impl StyledTreeBuilder {
    pub(crate) fn new() -> Self {
        // Explicit document start (`---`), implicit end (no `...`).
        Self {
            document: Document::new(None, &[], false, true),
            next_collection_style: None,
        }
    }

    /// Arm the style for the next collection node constructed.
    ///
    /// One-shot: the next `add_sequence`/`add_mapping` call consumes the
    /// slot whether or not the style matches the collection kind. Arming
    /// while a previous override is still pending is a visitor/builder
    /// pairing bug.
    pub(crate) fn set_next_collection_style(&mut self, style: Style) {
        debug_assert!(
            self.next_collection_style.is_none(),
            "pending collection style was never consumed"
        );
        self.next_collection_style = Some(style);
    }

    pub(crate) fn pending_is_clear(&self) -> bool {
        self.next_collection_style.is_none()
    }

    /// Construct a scalar node, returning its id.
    pub(crate) fn add_scalar(&mut self, value: &Value) -> i32 {
        let requested = value.style().and_then(Style::scalar_style);
        let (text, auto) = render_scalar(value.unstyled());
        let style = requested.unwrap_or(auto);
        self.document.add_scalar(None, &text, style)
    }

    /// Construct a sequence node, returning its id.
    pub(crate) fn add_sequence(&mut self) -> i32 {
        let style = match self.next_collection_style.take() {
            Some(style) => style.sequence_style(),
            None => SequenceStyle::Any,
        };
        self.document.add_sequence(None, style)
    }

    /// Construct a mapping node, returning its id.
    pub(crate) fn add_mapping(&mut self) -> i32 {
        let style = match self.next_collection_style.take() {
            Some(style) => style.mapping_style(),
            None => MappingStyle::Any,
        };
        self.document.add_mapping(None, style)
    }

    pub(crate) fn append_sequence_item(&mut self, sequence: i32, item: i32) {
        self.document.append_sequence_item(sequence, item);
    }

    pub(crate) fn append_mapping_pair(&mut self, mapping: i32, key: i32, value: i32) {
        self.document.yaml_document_append_mapping_pair(mapping, key, value);
    }

    /// Finish building and hand the node tree to the caller.
    pub(crate) fn into_document(self) -> Document {
        self.document
    }
}

/// Render a scalar value to its YAML lexical form, plus the style to use
/// when the caller requested none.
fn render_scalar(value: &Value) -> (String, ScalarStyle) {
    match value {
        Value::Null => ("null".to_string(), ScalarStyle::Plain),
        Value::Bool(b) => (b.to_string(), ScalarStyle::Plain),
        Value::Int(i) => (i.to_string(), ScalarStyle::Plain),
        Value::Float(f) => (render_float(*f), ScalarStyle::Plain),
        Value::String(s) => {
            // A plain rendering of e.g. "24" or "null" would be re-read as
            // a different type; quote those so only the style changes, never
            // the value.
            let style = if plain_would_retype(s) {
                ScalarStyle::SingleQuoted
            } else {
                ScalarStyle::Any
            };
            (s.clone(), style)
        }
        Value::Sequence(_) | Value::Mapping(_) | Value::Styled(..) => {
            unreachable!("scalar construction called with a non-scalar value")
        }
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f == f64::INFINITY {
        ".inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-.inf".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e17 {
        // Keep a fractional part so the text re-reads as a float.
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

/// Whether a plain rendering of `s` would be re-read as a non-string type
/// by a YAML 1.1 parser.
fn plain_would_retype(s: &str) -> bool {
    if s.is_empty() || s.parse::<i64>().is_ok() || s.parse::<f64>().is_ok() {
        return true;
    }
    if is_radix_int(s) {
        return true;
    }
    matches!(
        s,
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON"
            | "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF"
            | "null" | "Null" | "NULL" | "~"
    )
}

/// YAML 1.2 core-schema hex/octal integer forms (`0x1A`, `0o17`), which
/// `parse::<i64>` does not accept.
fn is_radix_int(s: &str) -> bool {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (digits, radix) = if let Some(hex) = unsigned.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(octal) = unsigned.strip_prefix("0o") {
        (octal, 8)
    } else {
        return false;
    };
    i64::from_str_radix(digits, radix).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use libyaml_safer::NodeData;

    #[test]
    fn test_scalar_annotation_overrides_style() {
        let mut builder = StyledTreeBuilder::new();
        let value = crate::literal("line one\nline two\n");
        let id = builder.add_scalar(&value);

        let document = builder.into_document();
        match &document.get_node(id).unwrap().data {
            NodeData::Scalar { value, style } => {
                assert_eq!(value, "line one\nline two\n");
                assert_eq!(*style, ScalarStyle::Literal);
            }
            other => panic!("expected scalar node, got {other:?}"),
        }
    }

    #[test]
    fn test_unannotated_scalar_keeps_auto_style() {
        let mut builder = StyledTreeBuilder::new();
        let id = builder.add_scalar(&Value::from("hello"));

        let document = builder.into_document();
        match &document.get_node(id).unwrap().data {
            NodeData::Scalar { style, .. } => assert_eq!(*style, ScalarStyle::Any),
            other => panic!("expected scalar node, got {other:?}"),
        }
    }

    #[test]
    fn test_pending_override_is_one_shot() {
        let mut builder = StyledTreeBuilder::new();
        builder.set_next_collection_style(Style::FlowSequence);
        let first = builder.add_sequence();
        // The sibling constructed next must not inherit the override.
        let second = builder.add_sequence();

        let document = builder.into_document();
        match &document.get_node(first).unwrap().data {
            NodeData::Sequence { style, .. } => assert_eq!(*style, SequenceStyle::Flow),
            other => panic!("expected sequence node, got {other:?}"),
        }
        match &document.get_node(second).unwrap().data {
            NodeData::Sequence { style, .. } => assert_eq!(*style, SequenceStyle::Any),
            other => panic!("expected sequence node, got {other:?}"),
        }
    }

    #[test]
    fn test_pending_override_cleared_even_on_kind_mismatch() {
        let mut builder = StyledTreeBuilder::new();
        builder.set_next_collection_style(Style::FlowSequence);
        // Consumed by a mapping: still cleared, still rendered flow.
        let id = builder.add_mapping();
        assert!(builder.pending_is_clear());

        let document = builder.into_document();
        match &document.get_node(id).unwrap().data {
            NodeData::Mapping { style, .. } => assert_eq!(*style, MappingStyle::Flow),
            other => panic!("expected mapping node, got {other:?}"),
        }
    }

    #[test]
    fn test_render_scalar_primitives() {
        assert_eq!(
            render_scalar(&Value::Null),
            ("null".to_string(), ScalarStyle::Plain)
        );
        assert_eq!(
            render_scalar(&Value::Bool(true)),
            ("true".to_string(), ScalarStyle::Plain)
        );
        assert_eq!(
            render_scalar(&Value::Int(-7)),
            ("-7".to_string(), ScalarStyle::Plain)
        );
        assert_eq!(
            render_scalar(&Value::Float(1.0)),
            ("1.0".to_string(), ScalarStyle::Plain)
        );
        assert_eq!(
            render_scalar(&Value::Float(2.5)),
            ("2.5".to_string(), ScalarStyle::Plain)
        );
    }

    #[test]
    fn test_render_float_specials() {
        assert_eq!(render_float(f64::NAN), ".nan");
        assert_eq!(render_float(f64::INFINITY), ".inf");
        assert_eq!(render_float(f64::NEG_INFINITY), "-.inf");
    }

    #[test]
    fn test_ambiguous_strings_get_quoted() {
        for s in ["", "24", "2.5", "true", "null", "~", "no", "Off"] {
            assert!(plain_would_retype(s), "{s:?} should require quoting");
        }
        for s in ["hello", "Steve", "24 hours", "nullish"] {
            assert!(!plain_would_retype(s), "{s:?} should stay plain");
        }
    }

    #[test]
    fn test_radix_int_strings_get_quoted() {
        for s in ["0x1A", "0o17", "-0x1A", "+0o7"] {
            assert!(plain_would_retype(s), "{s:?} should require quoting");
        }
        for s in ["0xZZ", "0o9", "0x", "x1A", "0xcafeteria"] {
            assert!(!plain_would_retype(s), "{s:?} should stay plain");
        }
    }
}
