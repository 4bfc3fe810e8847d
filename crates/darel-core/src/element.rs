use std::fmt;

use serde::{Deserialize, Serialize};

use crate::atom::Atom;

/// One member of a tuple: either a bare atom or a `(label, value)` pair.
///
/// The pair case simulates a named attribute in an otherwise schema-less
/// tuple. The variant is fixed at construction, so predicates never probe
/// an element's shape at runtime.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Bare(Atom),
    Labeled(Atom, Atom),
}

impl Element {
    pub fn bare(value: impl Into<Atom>) -> Self {
        Element::Bare(value.into())
    }

    pub fn labeled(label: impl Into<Atom>, value: impl Into<Atom>) -> Self {
        Element::Labeled(label.into(), value.into())
    }

    pub fn is_labeled(&self) -> bool {
        matches!(self, Element::Labeled(_, _))
    }

    /// The label, for labeled elements.
    pub fn label(&self) -> Option<&Atom> {
        match self {
            Element::Bare(_) => None,
            Element::Labeled(label, _) => Some(label),
        }
    }

    /// The comparison key of the element: the value component of a labeled
    /// element, the atom itself otherwise. Jaccard matching and value
    /// lookups operate on this.
    pub fn value(&self) -> &Atom {
        match self {
            Element::Bare(atom) => atom,
            Element::Labeled(_, value) => value,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Bare(atom) => write!(f, "{atom}"),
            Element::Labeled(label, value) => write!(f, "({label}, {value})"),
        }
    }
}

impl From<Atom> for Element {
    fn from(atom: Atom) -> Self {
        Element::Bare(atom)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Bare(Atom::from(s))
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Bare(Atom::from(s))
    }
}

impl From<i64> for Element {
    fn from(i: i64) -> Self {
        Element::Bare(Atom::from(i))
    }
}

impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Element::Bare(Atom::from(n))
    }
}

impl<L: Into<Atom>, V: Into<Atom>> From<(L, V)> for Element {
    fn from((label, value): (L, V)) -> Self {
        Element::Labeled(label.into(), value.into())
    }
}
