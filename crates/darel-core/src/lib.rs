//! Dynamically-attributed (DA) relation algebra.
//!
//! A DA tuple is a set of atomic or `(label, value)` elements with no
//! schema; a DA relation is an ordered multiset of such tuples. Operators
//! (select, project, product, group_by, map, enumerate) are driven by
//! predicate values — attribute expressions over single elements and tuple
//! expressions over whole tuples — rather than fixed column names, with
//! fuzzy joins via Jaccard overlap between two sides of a product row.
//!
//! Zero I/O — pure in-memory engine with no opinions about where values
//! come from or go. Loaders hand in iterables of elements (or the JSON
//! wire form in [`json`]); everything downstream is pure transforms over
//! immutable relations.

pub mod aex;
pub mod atom;
pub mod element;
pub mod error;
pub mod json;
pub mod predicate;
pub mod relation;
pub mod tex;
pub mod tuple;

pub use atom::Atom;
pub use element::Element;
pub use error::{AlgebraError, Result};
pub use json::{WIRE_VERSION, export_json, import_json};
pub use predicate::{
    Predicate, always, any_of, conj, disj, fallible, iff, implies, negate, never,
};
pub use relation::Relation;
pub use tuple::Tuple;
