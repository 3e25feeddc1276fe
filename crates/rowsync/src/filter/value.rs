use super::CompareOp;
use rowsync_core::stmt::Value;

/// A field's input value: a scalar, or the element list of a multi-select
/// field.
///
/// The split is decided where form values enter the engine, so nothing
/// downstream inspects value shapes at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Single(Value),
    Many(Vec<Value>),
}

impl FieldValue {
    /// A field with no value contributes no condition.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Single(value) => value.is_null(),
            FieldValue::Many(values) => values.is_empty(),
        }
    }

    /// The value as an element sequence: a scalar is a one-element list.
    pub fn elements(&self) -> impl Iterator<Item = &Value> + '_ {
        match self {
            FieldValue::Single(value) => std::slice::from_ref(value).iter(),
            FieldValue::Many(values) => values.iter(),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Single(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Single(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Single(value.into())
    }
}

impl From<Vec<Value>> for FieldValue {
    fn from(values: Vec<Value>) -> Self {
        FieldValue::Many(values)
    }
}

/// One field's contribution to a built condition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub value: FieldValue,
    pub op: CompareOp,
}

impl FieldFilter {
    pub fn new(value: impl Into<FieldValue>, op: CompareOp) -> Self {
        FieldFilter {
            value: value.into(),
            op,
        }
    }
}
