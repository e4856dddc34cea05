use super::common::*;
use crate::workflows::grading::domain::{AssignmentId, Document};
use crate::workflows::grading::rubric::catalog::RubricCatalog;

#[test]
fn every_builtin_rubric_declares_the_sum_of_its_criteria() {
    let catalog = RubricCatalog::builtin();
    for view in catalog.assignments() {
        let entry = catalog.get(&view.id).expect("registered assignment");
        let criterion_sum: u16 = entry
            .rubric()
            .criteria()
            .iter()
            .map(|criterion| criterion.max_points())
            .sum();
        assert_eq!(
            criterion_sum,
            entry.rubric().max_points(),
            "rubric {} drifted from its criterion sum",
            view.id.as_str()
        );
        assert_eq!(entry.rubric().max_points(), 100);
    }
}

#[test]
fn outline_document_scores_full_marks_on_the_introductory_rubric() {
    let engine = evaluation_engine();
    let outcome = engine.evaluate(
        &AssignmentId::new("practico-1"),
        &outline_full_marks_document(),
    );

    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.rubric_max, 100);
    assert_eq!(outcome.breakdown.len(), 5);
    for entry in &outcome.breakdown {
        assert_eq!(entry.points, entry.max);
        assert!(
            entry.explanation.starts_with("Incluye"),
            "expected a found-branch explanation, got '{}'",
            entry.explanation
        );
    }
}

#[test]
fn score_always_equals_the_capped_breakdown_sum() {
    let engine = evaluation_engine();
    let documents = [
        outline_full_marks_document(),
        empty_document(),
        Document::flat("un texto breve sobre encuestas y entrevistas con (García, 2019)"),
        styled_document(2, 1, 1),
    ];

    for view in engine.catalog().assignments() {
        for document in &documents {
            let outcome = engine.evaluate(&view.id, document);
            let sum: u16 = outcome.breakdown.iter().map(|entry| entry.points).sum();
            assert_eq!(outcome.score, sum.min(outcome.rubric_max));
            assert!(outcome.score <= outcome.rubric_max);
            for entry in &outcome.breakdown {
                assert!(entry.points <= entry.max);
            }
        }
    }
}

#[test]
fn unknown_assignment_fails_open_with_a_zero_result() {
    let engine = evaluation_engine();
    let outcome = engine.evaluate(
        &AssignmentId::new("not-a-real-id"),
        &outline_full_marks_document(),
    );

    assert_eq!(outcome.score, 0);
    assert!(outcome.breakdown.is_empty());
    assert!(outcome.summary.contains("No se encontró una rúbrica"));
}

#[test]
fn empty_document_scores_no_evidence_without_erroring() {
    let engine = evaluation_engine();
    for view in engine.catalog().assignments() {
        let outcome = engine.evaluate(&view.id, &empty_document());
        assert!(outcome.score <= 10, "empty document scored {}", outcome.score);
        for entry in &outcome.breakdown {
            assert!(entry.points <= entry.max);
            assert!(!entry.explanation.is_empty());
        }
    }
}

#[test]
fn assignment_variant_reuses_the_outline_rubric() {
    let engine = evaluation_engine();
    let document = outline_full_marks_document();
    let original = engine.evaluate(&AssignmentId::new("practico-1"), &document);
    let variant = engine.evaluate(&AssignmentId::new("practico-1-variante"), &document);

    assert_eq!(original.score, variant.score);
    assert_eq!(original.breakdown, variant.breakdown);
    assert_ne!(original.assignment_label, variant.assignment_label);
}

#[test]
fn heading_scenario_scores_the_middle_rung() {
    let engine = evaluation_engine();
    let outcome = engine.evaluate(&AssignmentId::new("modulo-6"), &styled_document(1, 1, 0));

    let hierarchy = &outcome.breakdown[0];
    assert_eq!(hierarchy.points, 35);
    assert_eq!(hierarchy.max, 50);
}

#[test]
fn three_heading_levels_reach_the_top_rung() {
    let engine = evaluation_engine();
    let outcome = engine.evaluate(&AssignmentId::new("modulo-6"), &styled_document(1, 1, 1));
    assert_eq!(outcome.breakdown[0].points, 50);
}

#[test]
fn citation_ladder_is_monotone_in_the_citation_count() {
    let engine = evaluation_engine();
    let assignment = AssignmentId::new("modulo-5");

    let mut previous = 0;
    for citations in 0..10 {
        let text = (0..citations)
            .map(|index| format!("(Autor, {})", 2000 + index))
            .collect::<Vec<_>>()
            .join(" y ");
        let outcome = engine.evaluate(&assignment, &Document::flat(text));
        let awarded = outcome.breakdown[0].points;
        assert!(
            awarded >= previous,
            "{citations} citations decreased the award"
        );
        previous = awarded;
    }
}

#[test]
fn quantitative_composite_distinguishes_its_tiers() {
    let engine = evaluation_engine();
    let assignment = AssignmentId::new("practico-7");

    let both = engine.evaluate(
        &assignment,
        &Document::flat("la media fue 3,75 según la prueba anova aplicada"),
    );
    let numbers_only = engine.evaluate(&assignment, &Document::flat("la media fue 3,75"));
    let test_only = engine.evaluate(&assignment, &Document::flat("se aplicó anova"));
    let neither = engine.evaluate(&assignment, &Document::flat("sin resultados"));

    assert_eq!(both.breakdown[0].points, 40);
    assert_eq!(numbers_only.breakdown[0].points, 25);
    assert_eq!(test_only.breakdown[0].points, 25);
    assert_eq!(neither.breakdown[0].points, 10);
}

#[test]
fn catalog_extensions_route_to_the_outline_rubric() {
    let mut catalog = RubricCatalog::builtin();
    let added = catalog
        .extend_from_json(r#"["Práctico N° 9 — Informe final", "Práctico N° 9 — Informe final"]"#)
        .expect("well-formed JSON");
    assert_eq!(added, 1, "duplicate labels must merge");

    let id = catalog
        .resolve("Práctico N° 9 — Informe final")
        .expect("extended label resolves");
    let entry = catalog.get(&id).expect("extended entry registered");
    assert_eq!(entry.rubric().max_points(), 100);
}

#[test]
fn catalog_csv_extension_reads_the_practico_column() {
    let mut catalog = RubricCatalog::builtin();
    let csv = "practico\nPráctico N° 10 — Defensa oral\n";
    let added = catalog
        .extend_from_csv(csv.as_bytes())
        .expect("well-formed CSV");
    assert_eq!(added, 1);
    assert!(catalog.resolve("Práctico N° 10 — Defensa oral").is_some());
}

#[test]
fn resolve_accepts_ids_and_exact_labels_only() {
    let catalog = RubricCatalog::builtin();
    assert!(catalog.resolve("modulo-5").is_some());
    assert!(catalog
        .resolve("Trabajo práctico Módulo 5 — Mendeley: citas en Word y bibliografía")
        .is_some());
    // Substring routing was legacy behavior and is intentionally gone.
    assert!(catalog.resolve("algo con mendeley adentro").is_none());
}
