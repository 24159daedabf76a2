//! In-memory values and the style annotation mechanism.

use crate::Style;

/// An in-memory value to be dumped as YAML.
///
/// A value is either a scalar (`Null`, `Bool`, `Int`, `Float`, `String`),
/// a collection (`Sequence`, `Mapping`), or a `Styled` wrapper carrying a
/// requested output [`Style`] plus the wrapped payload. The wrapper is the
/// annotation mechanism: because the style is part of the value itself, it
/// travels through moves, clones, and repeated dumps, and it never leaks
/// onto sibling or child values.
///
/// Mappings preserve insertion order.
///
/// ## Example
///
/// ```rust
/// use styled_yaml::{literal, Style, Value};
///
/// let steps = literal("dice\ncombine\n");
/// assert_eq!(steps.style(), Some(Style::Literal));
/// assert_eq!(steps.as_str(), Some("dice\ncombine\n"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The YAML null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Sequence(Vec<Value>),
    /// An ordered list of key-value pairs.
    Mapping(Vec<(Value, Value)>),
    /// A value annotated with a requested output style.
    Styled(Style, Box<Value>),
}

impl Value {
    /// Build a mapping from key-value pairs, preserving their order.
    pub fn mapping<K, V>(pairs: Vec<(K, V)>) -> Value
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Build a sequence from items.
    pub fn sequence<T: Into<Value>>(items: Vec<T>) -> Value {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// The style annotation carried by this value, if any.
    pub fn style(&self) -> Option<Style> {
        match self {
            Value::Styled(style, _) => Some(*style),
            _ => None,
        }
    }

    /// The value with any style annotation peeled off.
    pub fn unstyled(&self) -> &Value {
        let mut value = self;
        while let Value::Styled(_, inner) = value {
            value = inner;
        }
        value
    }

    /// Consume the value, discarding any style annotation.
    pub fn into_unstyled(self) -> Value {
        match self {
            Value::Styled(_, inner) => inner.into_unstyled(),
            other => other,
        }
    }

    /// Annotate the value with `style`, replacing any existing annotation
    /// (last writer wins). Shape validation happens in the crate-level
    /// helpers; this is the raw association.
    pub(crate) fn with_style(self, style: Style) -> Value {
        Value::Styled(style, Box::new(self.into_unstyled()))
    }

    /// Check if this is a scalar (not a sequence or mapping).
    pub fn is_scalar(&self) -> bool {
        !matches!(self.unstyled(), Value::Sequence(_) | Value::Mapping(_))
    }

    /// Check if this is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self.unstyled(), Value::Sequence(_))
    }

    /// Check if this is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self.unstyled(), Value::Mapping(_))
    }

    /// Get the string content if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self.unstyled() {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer content if this is an integer scalar.
    pub fn as_i64(&self) -> Option<i64> {
        match self.unstyled() {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float content if this is a float scalar.
    pub fn as_f64(&self) -> Option<f64> {
        match self.unstyled() {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the boolean content if this is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self.unstyled() {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get a mapping value by string key.
    ///
    /// Returns `None` if this is not a mapping or the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.unstyled() {
            Value::Mapping(pairs) => pairs
                .iter()
                .find_map(|(k, v)| if k.as_str() == Some(key) { Some(v) } else { None }),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::sequence(items)
    }
}
