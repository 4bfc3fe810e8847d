use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// A dynamically-attributed tuple: a set of elements.
///
/// Membership is unique (structurally-equal elements collapse) and order is
/// irrelevant; iteration and rendering are nevertheless deterministic
/// because the backing store is ordered.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuple(BTreeSet<Element>);

impl Tuple {
    pub fn new() -> Self {
        Tuple(BTreeSet::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, elem: &Element) -> bool {
        self.0.contains(elem)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.0.iter()
    }

    /// Set union with another tuple; shared elements collapse.
    pub fn union(&self, other: &Tuple) -> Tuple {
        Tuple(self.0.union(&other.0).cloned().collect())
    }

    /// Copy of this tuple with one extra element.
    pub fn with(&self, elem: Element) -> Tuple {
        let mut set = self.0.clone();
        set.insert(elem);
        Tuple(set)
    }

    pub(crate) fn insert(&mut self, elem: Element) {
        self.0.insert(elem);
    }
}

impl FromIterator<Element> for Tuple {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Tuple(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Element;
    type IntoIter = std::collections::btree_set::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Tuple {
    type Item = Element;
    type IntoIter = std::collections::btree_set::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, "}}")
    }
}
