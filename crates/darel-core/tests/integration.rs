//! Integration tests exercising a full pipeline over one dataset:
//! build → tag → select → join → group_by → enumerate → JSON roundtrip.

use darel_core::aex::{is_number, label, label_if};
use darel_core::tex::{at_least_one, exact_match, exists, exists_attribute};
use darel_core::{Element, Relation, always, import_json, export_json};

/// Statements as a loader would hand them in: each tuple is the mention
/// set of one sentence, with an analyzer-attached sentiment score.
fn statements() -> Relation {
    Relation::new(vec![
        vec![
            Element::bare("turing"),
            Element::bare("machine"),
            Element::labeled("sentiment", 0.5),
        ],
        vec![
            Element::bare("lovelace"),
            Element::bare("engine"),
            Element::labeled("sentiment", 0.9),
        ],
        vec![
            Element::bare("turing"),
            Element::bare("enigma"),
            Element::labeled("sentiment", -0.25),
        ],
    ])
}

/// A small lookup relation mapping mention text to a canonical person.
fn people() -> Relation {
    Relation::new(vec![
        vec![
            Element::labeled("alias", "turing"),
            Element::labeled("person", "Alan Turing"),
        ],
        vec![
            Element::labeled("alias", "lovelace"),
            Element::labeled("person", "Ada Lovelace"),
        ],
    ])
}

#[test]
fn select_then_project_pipeline() {
    let stmts = statements();

    let about_turing = stmts.select(exists("turing")).unwrap();
    assert_eq!(about_turing.len(), 2);

    // Only the analyzer labels survive the projection.
    let scores = about_turing.project(label("sentiment")).unwrap();
    assert_eq!(scores.len(), 2, "projection keeps the relation cardinality");
    for tup in &scores {
        assert_eq!(tup.len(), 1);
        assert!(tup.iter().all(|e| e.label().is_some()));
    }
}

#[test]
fn tag_numbers_then_filter() {
    let r = Relation::new(vec![
        vec![Element::bare("revenue"), Element::bare("2019")],
        vec![Element::bare("no"), Element::bare("figures")],
    ]);

    let tagged = r.map(label_if("num", is_number));
    let with_numbers = tagged.select(exists_attribute("num")).unwrap();
    assert_eq!(with_numbers.len(), 1);
    assert!(with_numbers.tuples()[0].contains(&Element::labeled("num", "2019")));
}

#[test]
fn join_statements_to_people() {
    let stmts = statements().map(label_if("mention", |_: &Element| true));
    let joined = stmts
        .join(&people(), at_least_one(label("mention"), label("alias")))
        .unwrap();

    // turing appears twice, lovelace once; enigma/engine match nothing extra.
    assert_eq!(joined.len(), 3);
    let with_turing = joined
        .select(exists(("person", "Alan Turing")))
        .unwrap();
    assert_eq!(with_turing.len(), 2);
}

#[test]
fn exact_match_requires_identical_sides() {
    let left = Relation::new(vec![vec![
        Element::labeled("l", "x"),
        Element::labeled("l", "y"),
    ]]);
    let right = Relation::new(vec![
        vec![Element::labeled("r", "x"), Element::labeled("r", "y")],
        vec![Element::labeled("r", "x")],
    ]);

    let exact = left
        .join(&right, exact_match(label("l"), label("r")))
        .unwrap();
    assert_eq!(exact.len(), 1, "only the identical value set matches");

    let loose = left
        .join(&right, at_least_one(label("l"), label("r")))
        .unwrap();
    assert_eq!(loose.len(), 2);
}

#[test]
fn group_statements_by_score() {
    let grouped = statements().group_by(label("sentiment")).unwrap();
    // All three scores are distinct, so every statement is its own group.
    assert_eq!(grouped.len(), 3);

    let merged = statements()
        .project(|e: &Element| !e.is_labeled())
        .unwrap()
        .group_by(label("sentiment"))
        .unwrap();
    assert_eq!(merged.len(), 1, "score-less tuples merge under the empty key");
}

#[test]
fn enumerate_then_group_recovers_rows() {
    let stmts = statements().enumerate();
    // Grouping by id is a no-op partition: one group per tuple.
    let grouped = stmts.group_by(label("id")).unwrap();
    assert_eq!(grouped.len(), stmts.len());
}

#[test]
fn json_roundtrip_through_pipeline() {
    let stmts = statements().enumerate();
    let json = export_json(&stmts).unwrap();
    let back = import_json(&json).unwrap();
    assert_eq!(stmts, back);

    // The reloaded relation keeps working as input.
    let kept = back.select(always()).unwrap();
    assert_eq!(kept, stmts);
}

#[test]
fn pipelines_share_one_input() {
    // One relation value feeds two independent pipelines; neither sees
    // the other's output.
    let stmts = statements();
    let a = stmts.select(exists("turing")).unwrap();
    let b = stmts.project(label("sentiment")).unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 3);
    assert_eq!(stmts, statements());
}
