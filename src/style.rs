//! Presentation styles for YAML nodes.

use libyaml_safer::{MappingStyle, ScalarStyle, SequenceStyle};

/// A requested presentation style for a single YAML node.
///
/// The set is partitioned: `Plain`, `SingleQuoted`, `DoubleQuoted`,
/// `Literal`, and `Folded` apply to scalars only, while `FlowMapping` and
/// `FlowSequence` apply to collections only. The annotation helpers enforce
/// the partition against the value's shape; a mismatched request leaves the
/// value unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Unquoted scalar.
    Plain,
    /// `'single-quoted'` scalar.
    SingleQuoted,
    /// `"double-quoted"` scalar.
    DoubleQuoted,
    /// Block literal scalar (`|`).
    Literal,
    /// Block folded scalar (`>`).
    Folded,
    /// `{key: value, ...}` mapping.
    FlowMapping,
    /// `[a, b, ...]` sequence.
    FlowSequence,
}

impl Style {
    /// True for styles that apply to scalar values.
    pub fn is_scalar_style(self) -> bool {
        matches!(
            self,
            Style::Plain
                | Style::SingleQuoted
                | Style::DoubleQuoted
                | Style::Literal
                | Style::Folded
        )
    }

    /// True for styles that apply to mappings and sequences.
    pub fn is_collection_style(self) -> bool {
        !self.is_scalar_style()
    }

    /// The engine scalar style this request maps to, if it is scalar-shaped.
    pub(crate) fn scalar_style(self) -> Option<ScalarStyle> {
        match self {
            Style::Plain => Some(ScalarStyle::Plain),
            Style::SingleQuoted => Some(ScalarStyle::SingleQuoted),
            Style::DoubleQuoted => Some(ScalarStyle::DoubleQuoted),
            Style::Literal => Some(ScalarStyle::Literal),
            Style::Folded => Some(ScalarStyle::Folded),
            Style::FlowMapping | Style::FlowSequence => None,
        }
    }

    /// The engine sequence style this request maps to.
    ///
    /// Both flow styles collapse to `Flow`: requesting a flow-mapping style
    /// on a sequence is the caller's mix-up, and a flow rendering is still
    /// the closest honoring of it.
    pub(crate) fn sequence_style(self) -> SequenceStyle {
        if self.is_collection_style() {
            SequenceStyle::Flow
        } else {
            SequenceStyle::Any
        }
    }

    /// The engine mapping style this request maps to.
    pub(crate) fn mapping_style(self) -> MappingStyle {
        if self.is_collection_style() {
            MappingStyle::Flow
        } else {
            MappingStyle::Any
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_is_total() {
        let all = [
            Style::Plain,
            Style::SingleQuoted,
            Style::DoubleQuoted,
            Style::Literal,
            Style::Folded,
            Style::FlowMapping,
            Style::FlowSequence,
        ];
        for style in all {
            assert_ne!(style.is_scalar_style(), style.is_collection_style());
        }
    }

    #[test]
    fn test_scalar_style_conversion() {
        assert_eq!(Style::Literal.scalar_style(), Some(ScalarStyle::Literal));
        assert_eq!(Style::Folded.scalar_style(), Some(ScalarStyle::Folded));
        assert_eq!(
            Style::SingleQuoted.scalar_style(),
            Some(ScalarStyle::SingleQuoted)
        );
        assert_eq!(Style::FlowMapping.scalar_style(), None);
    }

    #[test]
    fn test_collection_style_conversion() {
        assert_eq!(Style::FlowSequence.sequence_style(), SequenceStyle::Flow);
        assert_eq!(Style::FlowMapping.mapping_style(), MappingStyle::Flow);
        // Mismatched flow kinds still render flow.
        assert_eq!(Style::FlowMapping.sequence_style(), SequenceStyle::Flow);
        assert_eq!(Style::FlowSequence.mapping_style(), MappingStyle::Flow);
    }
}
