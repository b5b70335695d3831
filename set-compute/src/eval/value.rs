use crate::element::{format_set, Element, ElementSet};
use std::fmt;

/// The result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single element.
    Element(Element),

    /// A set, produced by a set reference or an operation.
    Set(ElementSet),

    /// The elements of a range.
    Range(ElementSet),

    /// The elements of a list, in order.
    List(Vec<Element>),
}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Element(_) => "element",
            Value::Set(_) => "set",
            Value::Range(_) => "range",
            Value::List(_) => "list",
        }
    }

    /// Returns true if the value can be an operand of a set operator.
    pub fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    /// Returns the elements of this value, in order. A single element yields itself.
    pub fn into_elements(self) -> Vec<Element> {
        match self {
            Value::Element(element) => vec![element],
            Value::Set(set) | Value::Range(set) => set.into_iter().collect(),
            Value::List(elements) => elements,
        }
    }

    /// Returns the elements of this value as a set.
    pub fn into_set(self) -> ElementSet {
        match self {
            Value::Set(set) | Value::Range(set) => set,
            other => other.into_elements().into_iter().collect(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Element(element) => write!(f, "{}", element),
            Value::Set(set) | Value::Range(set) => write!(f, "{}", format_set(set)),
            Value::List(elements) => {
                let elements = elements.iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{}]", elements)
            },
        }
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Value::Element(element)
    }
}

impl From<ElementSet> for Value {
    fn from(set: ElementSet) -> Self {
        Value::Set(set)
    }
}
