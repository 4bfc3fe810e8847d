//! Attribute-expression builders: predicates over a single element.
//!
//! Fixed-shape checks are plain functions (a function item already is a
//! predicate); parameterized checks are builders returning closures. All of
//! them are total — an element of the "wrong" shape is rejected, never an
//! error.

use regex::Regex;

use crate::atom::Atom;
use crate::element::Element;
use crate::error::Result;

/// Bare numeral: an `Int`/`Num` atom, or text parsing as a float.
/// Labeled elements are rejected; see [`is_number_value`] for the
/// look-through variant.
pub fn is_number(elem: &Element) -> bool {
    match elem {
        Element::Bare(atom) => atom.parses_as_number(),
        Element::Labeled(_, _) => false,
    }
}

/// Numeral in value position: a bare numeral, or a labeled element whose
/// value component is numeric.
pub fn is_number_value(elem: &Element) -> bool {
    elem.value().parses_as_number()
}

/// Structurally a `(label, value)` pair.
pub fn is_labeled(elem: &Element) -> bool {
    elem.is_labeled()
}

/// Labeled elements whose label equals `name` exactly.
pub fn label(name: impl Into<Atom>) -> impl Fn(&Element) -> bool + Clone {
    let name = name.into();
    move |elem: &Element| elem.label() == Some(&name)
}

/// Labeled elements whose (text) label matches `pattern`, as a regex
/// search. An invalid pattern is a precondition failure at construction,
/// not a per-element error. Non-text labels are rejected.
pub fn label_regex(pattern: &str) -> Result<impl Fn(&Element) -> bool + Clone> {
    let re = Regex::new(pattern)?;
    Ok(move |elem: &Element| match elem.label() {
        Some(Atom::Text(s)) => re.is_match(s),
        _ => false,
    })
}

/// Labeled elements whose text label contains `fragment`.
pub fn label_contains(fragment: &str) -> impl Fn(&Element) -> bool + Clone {
    let fragment = fragment.to_string();
    move |elem: &Element| match elem.label() {
        Some(Atom::Text(s)) => s.contains(&fragment),
        _ => false,
    }
}

/// Map helper: wrap a bare element in a `(name, value)` pair when `cond`
/// accepts it, pass it through otherwise. Labels do not nest, so an
/// already-labeled element is always passed through.
pub fn label_if(
    name: impl Into<Atom>,
    cond: impl Fn(&Element) -> bool,
) -> impl Fn(&Element) -> Element {
    let name = name.into();
    move |elem: &Element| match elem {
        Element::Bare(atom) if cond(elem) => Element::Labeled(name.clone(), atom.clone()),
        _ => elem.clone(),
    }
}
