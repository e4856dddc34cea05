use super::common::*;
use crate::workflows::grading::domain::AssignmentId;
use crate::workflows::grading::report::{feedback_download, render_feedback};

#[test]
fn renders_the_fixed_feedback_layout_byte_for_byte() {
    let engine = evaluation_engine();
    let outcome = engine.evaluate(
        &AssignmentId::new("practico-1"),
        &outline_full_marks_document(),
    );

    let report = render_feedback("Ana María Pérez", &outcome);

    let expected = "Resultado de la corrección automática:\n\
                    \n\
                    ALUMNO/A: Ana María Pérez\n\
                    Práctico N° 1 — IA en la escritura del proyecto\n\
                    Puntaje: 100/100\n\
                    \n\
                    Desglose por criterios:\n\
                    - Tema y Título: 20/20. Incluye tema y título.\n\
                    - Paradigma: 15/15. Incluye paradigma.\n\
                    - Pregunta de investigación: 20/20. Incluye pregunta de investigación.\n\
                    - Objetivos: 30/30. Incluye objetivo general y objetivos específicos.\n\
                    - Hipótesis (si corresponde): 15/15. Incluye hipótesis.\n\
                    \n\
                    Comentarios generales:\n\
                    Se evaluó la presencia de secciones fundamentales de un anteproyecto.\n";

    assert_eq!(report, expected);
}

#[test]
fn rendering_is_idempotent_for_identical_input() {
    let engine = evaluation_engine();
    let document = outline_full_marks_document();
    let assignment = AssignmentId::new("practico-4");

    let first = render_feedback("Ana", &engine.evaluate(&assignment, &document));
    let second = render_feedback("Ana", &engine.evaluate(&assignment, &document));

    assert_eq!(first, second);
}

#[test]
fn unknown_assignment_report_still_renders_the_layout() {
    let engine = evaluation_engine();
    let outcome = engine.evaluate(&AssignmentId::new("not-a-real-id"), &empty_document());

    let report = render_feedback("Ana", &outcome);

    assert!(report.starts_with("Resultado de la corrección automática:\n"));
    assert!(report.contains("Puntaje: 0/0\n"));
    assert!(report.contains("No se encontró una rúbrica"));
}

#[test]
fn download_payload_carries_an_underscored_file_name() {
    let download = feedback_download("Ana María Pérez", "cuerpo");
    assert_eq!(download.file_name, "Devolucion_Ana_María_Pérez.txt");
    assert_eq!(download.content_type, mime::TEXT_PLAIN_UTF_8);
    assert_eq!(download.body, "cuerpo");
}
