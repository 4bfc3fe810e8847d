use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{AlgebraError, Result};
use crate::predicate::Predicate;
use crate::tuple::Tuple;

/// A dynamically-attributed relation: an ordered sequence of tuples.
///
/// Tuple order is insertion order (reproducible output) and duplicate
/// tuples are permitted — multiset semantics at the relation level, set
/// semantics inside each tuple. Every operator is a pure transform
/// returning a fresh relation; no operator mutates its input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relation {
    tuples: Vec<Tuple>,
}

/// Attach the tuple under evaluation to a predicate failure, unless the
/// error already names one.
fn at_tuple(err: AlgebraError, tup: &Tuple) -> AlgebraError {
    match err {
        AlgebraError::Shape { .. } => err,
        other => AlgebraError::Shape {
            tuple: tup.to_string(),
            reason: other.to_string(),
        },
    }
}

impl Relation {
    /// Build a relation from any finite iterable-of-iterables; each inner
    /// iterable becomes one tuple (duplicates inside it collapse).
    pub fn new<I, T, E>(data: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Relation {
            tuples: data
                .into_iter()
                .map(|rec| rec.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Relation { tuples: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }

    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    /// Keep the tuples the tex accepts, in their current order.
    pub fn select<P: Predicate<Tuple>>(&self, tex: P) -> Result<Relation> {
        let mut kept = Vec::new();
        for tup in &self.tuples {
            if tex.eval(tup).map_err(|e| at_tuple(e, tup))? {
                kept.push(tup.clone());
            }
        }
        Ok(Relation { tuples: kept })
    }

    /// Restrict every tuple to the elements the aex accepts. A tuple with
    /// no surviving elements stays in the relation as the empty tuple. An
    /// aex failure surfaces as a shape error naming the tuple under
    /// evaluation. OR over a predicate set is expressed with
    /// [`crate::predicate::any_of`].
    pub fn project<P: Predicate<Element>>(&self, aex: P) -> Result<Relation> {
        let mut out = Vec::with_capacity(self.tuples.len());
        for tup in &self.tuples {
            let mut projected = Tuple::new();
            for elem in tup {
                if aex.eval(elem).map_err(|e| at_tuple(e, tup))? {
                    projected.insert(elem.clone());
                }
            }
            out.push(projected);
        }
        Ok(Relation { tuples: out })
    }

    /// All-pairs set union: one output tuple per `(t1, t2)` pair, swept
    /// self-major so output order follows the left operand. Cardinality is
    /// exactly `|self| * |other|`; shared elements collapse inside the
    /// unioned tuple, which is expected set behavior, not an error.
    pub fn product(&self, other: &Relation) -> Relation {
        let mut out = Vec::with_capacity(self.tuples.len() * other.tuples.len());
        for t1 in &self.tuples {
            for t2 in &other.tuples {
                out.push(t1.union(t2));
            }
        }
        Relation { tuples: out }
    }

    /// Inner join: materialize the product, then select on the tex. The
    /// matching combinators in [`crate::tex`] are built for this shape.
    pub fn join<P: Predicate<Tuple>>(&self, other: &Relation, tex: P) -> Result<Relation> {
        self.product(other).select(tex)
    }

    /// Hash-partition tuples by the set of elements the aex accepts — the
    /// grouping key is itself a mini-set, so tuples group together only
    /// when their qualifying sets are identical. Each output tuple is the
    /// key unioned with every member tuple's elements. Tuples with no
    /// qualifying element all merge under the empty key. Groups appear in
    /// first-seen order.
    pub fn group_by<P: Predicate<Element>>(&self, aex: P) -> Result<Relation> {
        let mut index: HashMap<Tuple, usize> = HashMap::new();
        let mut groups: Vec<Tuple> = Vec::new();

        for tup in &self.tuples {
            let mut key = Tuple::new();
            for elem in tup {
                if aex.eval(elem).map_err(|e| at_tuple(e, tup))? {
                    key.insert(elem.clone());
                }
            }

            let slot = match index.get(&key) {
                Some(&i) => i,
                None => {
                    groups.push(key.clone());
                    index.insert(key, groups.len() - 1);
                    groups.len() - 1
                }
            };

            for elem in tup {
                groups[slot].insert(elem.clone());
            }
        }

        Ok(Relation { tuples: groups })
    }

    /// Element-wise transform; duplicate post-transform elements collapse
    /// per set semantics.
    pub fn map(&self, f: impl Fn(&Element) -> Element) -> Relation {
        Relation {
            tuples: self
                .tuples
                .iter()
                .map(|tup| tup.iter().map(&f).collect())
                .collect(),
        }
    }

    /// Attach a `("id", i)` labeled element to the i-th tuple, 0-based by
    /// sequence position.
    pub fn enumerate(&self) -> Relation {
        Relation {
            tuples: self
                .tuples
                .iter()
                .enumerate()
                .map(|(i, tup)| tup.with(Element::labeled("id", i as i64)))
                .collect(),
        }
    }

    /// Sequence concatenation; no deduplication across relations.
    pub fn union(&self, other: &Relation) -> Relation {
        let mut tuples = self.tuples.clone();
        tuples.extend(other.tuples.iter().cloned());
        Relation { tuples }
    }

    /// Multiset difference: each tuple of `other` cancels at most one
    /// structurally-equal tuple of `self`; survivors keep their order.
    pub fn difference(&self, other: &Relation) -> Relation {
        let mut pending: HashMap<&Tuple, usize> = HashMap::new();
        for tup in &other.tuples {
            *pending.entry(tup).or_insert(0) += 1;
        }

        let mut kept = Vec::new();
        for tup in &self.tuples {
            match pending.get_mut(tup) {
                Some(n) if *n > 0 => *n -= 1,
                _ => kept.push(tup.clone()),
            }
        }
        Relation { tuples: kept }
    }
}

impl FromIterator<Tuple> for Relation {
    fn from_iter<I: IntoIterator<Item = Tuple>>(iter: I) -> Self {
        Relation {
            tuples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Relation {
    type Item = &'a Tuple;
    type IntoIter = std::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}

impl IntoIterator for Relation {
    type Item = Tuple;
    type IntoIter = std::vec::IntoIter<Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.into_iter()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tup) in self.tuples.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tup}")?;
        }
        write!(f, "]")
    }
}
