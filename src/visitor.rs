//! Value traversal that arms style overrides.

use crate::Value;
use crate::builder::StyledTreeBuilder;

/// Walks a [`Value`] and drives the builder to construct its node tree.
///
/// Collection annotations are handled here: just before delegating to the
/// normal walk of an annotated mapping or sequence, the visitor arms the
/// builder's one-shot override so the very next collection node constructed
/// (the one for this value, not any nested one) takes the requested style.
/// Scalars need no handling at this level; the builder reads their
/// annotation directly, since scalar construction is a single call.
///
/// Styles never propagate: each node's style is resolved independently from
/// its own value's annotation at the moment it is constructed.
pub(crate) struct StyledVisitor<'a> {
    builder: &'a mut StyledTreeBuilder,
}

impl<'a> StyledVisitor<'a> {
    pub(crate) fn new(builder: &'a mut StyledTreeBuilder) -> Self {
        Self { builder }
    }

    /// Convert `value` into a node, returning its id in the document.
    ///
    /// The first node constructed becomes the document root.
    pub(crate) fn visit(&mut self, value: &Value) -> i32 {
        match value.unstyled() {
            Value::Sequence(items) => {
                self.arm_collection_style(value);
                let node = self.visit_sequence(items);
                debug_assert!(
                    self.builder.pending_is_clear(),
                    "collection style override was not consumed"
                );
                node
            }
            Value::Mapping(pairs) => {
                self.arm_collection_style(value);
                let node = self.visit_mapping(pairs);
                debug_assert!(
                    self.builder.pending_is_clear(),
                    "collection style override was not consumed"
                );
                node
            }
            _ => self.builder.add_scalar(value),
        }
    }

    fn arm_collection_style(&mut self, value: &Value) {
        if let Some(style) = value.style() {
            if style.is_collection_style() {
                self.builder.set_next_collection_style(style);
            }
        }
    }

    fn visit_sequence(&mut self, items: &[Value]) -> i32 {
        let node = self.builder.add_sequence();
        for item in items {
            let child = self.visit(item);
            self.builder.append_sequence_item(node, child);
        }
        node
    }

    fn visit_mapping(&mut self, pairs: &[(Value, Value)]) -> i32 {
        let node = self.builder.add_mapping();
        for (key, value) in pairs {
            let key_node = self.visit(key);
            let value_node = self.visit(value);
            self.builder.append_mapping_pair(node, key_node, value_node);
        }
        node
    }
}
