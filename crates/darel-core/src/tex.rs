//! Tuple-expression builders: membership predicates over a whole tuple,
//! and the matching combinators that compare two partitions of one tuple.
//!
//! The matchers assume the tuple under test is the already-materialized
//! union of two sides (a product row); each side is selected by an
//! attribute expression and compared by value component.

use std::collections::HashSet;

use crate::atom::Atom;
use crate::element::Element;
use crate::error::Result;
use crate::predicate::{Fallible, Predicate, fallible};
use crate::tuple::Tuple;

/// Literal element membership.
pub fn exists(elem: impl Into<Element>) -> impl Fn(&Tuple) -> bool + Clone {
    let elem = elem.into();
    move |tup: &Tuple| tup.contains(&elem)
}

/// Some labeled element carries this label. Bare elements are skipped.
pub fn exists_attribute(name: impl Into<Atom>) -> impl Fn(&Tuple) -> bool + Clone {
    let name = name.into();
    move |tup: &Tuple| tup.iter().any(|e| e.label() == Some(&name))
}

/// Some labeled element carries this value component. Bare elements are
/// skipped, even when they equal the value.
pub fn exists_value(value: impl Into<Atom>) -> impl Fn(&Tuple) -> bool + Clone {
    let value = value.into();
    move |tup: &Tuple| {
        tup.iter()
            .any(|e| matches!(e, Element::Labeled(_, v) if *v == value))
    }
}

/// Values of the elements one side's aex selects out of the tuple.
fn partition<'t>(tup: &'t Tuple, aex: &impl Predicate<Element>) -> Result<HashSet<&'t Atom>> {
    let mut side = HashSet::new();
    for elem in tup {
        if aex.eval(elem)? {
            side.insert(elem.value());
        }
    }
    Ok(side)
}

/// Jaccard-threshold match on two partitions of the tuple:
/// `|L ∩ R| / |L ∪ R| >= threshold`. An empty union yields false rather
/// than a division fault.
pub fn jaccard<A, B>(
    aex_left: A,
    aex_right: B,
    threshold: f64,
) -> Fallible<impl Fn(&Tuple) -> Result<bool>>
where
    A: Predicate<Element>,
    B: Predicate<Element>,
{
    fallible(move |tup: &Tuple| {
        let left = partition(tup, &aex_left)?;
        let right = partition(tup, &aex_right)?;

        let inter = left.intersection(&right).count();
        let union = left.len() + right.len() - inter;
        if union == 0 {
            return Ok(false);
        }

        Ok(inter as f64 / union as f64 >= threshold)
    })
}

/// Exact match: the two partitions select identical value sets.
pub fn exact_match<A, B>(aex_left: A, aex_right: B) -> Fallible<impl Fn(&Tuple) -> Result<bool>>
where
    A: Predicate<Element>,
    B: Predicate<Element>,
{
    jaccard(aex_left, aex_right, 1.0)
}

/// Existential overlap: the partitions share at least one value.
pub fn at_least_one<A, B>(aex_left: A, aex_right: B) -> Fallible<impl Fn(&Tuple) -> Result<bool>>
where
    A: Predicate<Element>,
    B: Predicate<Element>,
{
    fallible(move |tup: &Tuple| {
        let left = partition(tup, &aex_left)?;
        let right = partition(tup, &aex_right)?;
        Ok(left.intersection(&right).count() > 0)
    })
}
