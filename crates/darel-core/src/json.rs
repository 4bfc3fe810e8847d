//! JSON wire format for relations.
//!
//! The wire shape mirrors the surface syntax loaders and analyzers speak:
//! a tuple is an array, an element is a bare scalar or a `[label, value]`
//! 2-array. The 2-array is resolved into the tagged element representation
//! once, at this boundary — nothing past it inspects element shape.

use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::element::Element;
use crate::relation::Relation;
use crate::tuple::Tuple;

pub const WIRE_VERSION: &str = "1.0";

// --- Wire format types ---

#[derive(Serialize, Deserialize, Debug)]
pub struct WireRelation {
    #[serde(default)]
    pub version: String,
    pub tuples: Vec<Vec<WireElement>>,
}

/// Bare scalar, or `[label, value]` pair.
#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum WireElement {
    Labeled(WireAtom, WireAtom),
    Bare(WireAtom),
}

/// Variant order matters: untagged deserialization tries `Int` first so a
/// JSON integer stays integral.
#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum WireAtom {
    Int(i64),
    Num(f64),
    Text(String),
}

// --- Conversion: Wire <-> Domain ---

impl WireRelation {
    pub fn from_relation(relation: &Relation) -> Self {
        WireRelation {
            version: WIRE_VERSION.to_string(),
            tuples: relation
                .iter()
                .map(|tup| tup.iter().map(domain_element_to_wire).collect())
                .collect(),
        }
    }

    pub fn into_relation(self) -> Relation {
        self.tuples
            .into_iter()
            .map(|tup| tup.into_iter().map(wire_element_to_domain).collect::<Tuple>())
            .collect()
    }
}

fn wire_atom_to_domain(wire: WireAtom) -> Atom {
    match wire {
        WireAtom::Int(i) => Atom::Int(i),
        WireAtom::Num(n) => Atom::Num(n),
        WireAtom::Text(s) => Atom::Text(s),
    }
}

fn domain_atom_to_wire(atom: &Atom) -> WireAtom {
    match atom {
        Atom::Int(i) => WireAtom::Int(*i),
        Atom::Num(n) => WireAtom::Num(*n),
        Atom::Text(s) => WireAtom::Text(s.clone()),
    }
}

fn wire_element_to_domain(wire: WireElement) -> Element {
    match wire {
        WireElement::Bare(atom) => Element::Bare(wire_atom_to_domain(atom)),
        WireElement::Labeled(label, value) => {
            Element::Labeled(wire_atom_to_domain(label), wire_atom_to_domain(value))
        }
    }
}

fn domain_element_to_wire(elem: &Element) -> WireElement {
    match elem {
        Element::Bare(atom) => WireElement::Bare(domain_atom_to_wire(atom)),
        Element::Labeled(label, value) => {
            WireElement::Labeled(domain_atom_to_wire(label), domain_atom_to_wire(value))
        }
    }
}

/// Deserialize a wire JSON document into a relation.
pub fn import_json(json: &str) -> Result<Relation, serde_json::Error> {
    let wire: WireRelation = serde_json::from_str(json)?;
    Ok(wire.into_relation())
}

/// Serialize a relation to the wire JSON format.
pub fn export_json(relation: &Relation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&WireRelation::from_relation(relation))
}
