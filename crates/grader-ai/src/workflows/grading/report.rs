//! Feedback report rendering.
//!
//! The rendered text is the system's one external data contract for "what the
//! student sees": the same bytes go to the mail notifier and to the local
//! download. Field order and punctuation are part of the interface, and the
//! output carries no timestamps or randomness so identical input always
//! renders identically.

use super::rubric::EvaluationOutcome;

/// Render the fixed-format feedback text for one evaluation.
pub fn render_feedback(student_name: &str, outcome: &EvaluationOutcome) -> String {
    let breakdown = outcome
        .breakdown
        .iter()
        .map(|entry| {
            format!(
                "- {}: {}/{}. {}",
                entry.criterion, entry.points, entry.max, entry.explanation
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Resultado de la corrección automática:\n\
         \n\
         ALUMNO/A: {student}\n\
         {label}\n\
         Puntaje: {score}/{max}\n\
         \n\
         Desglose por criterios:\n\
         {breakdown}\n\
         \n\
         Comentarios generales:\n\
         {summary}\n",
        student = student_name,
        label = outcome.assignment_label,
        score = outcome.score,
        max = outcome.rubric_max,
        breakdown = breakdown,
        summary = outcome.summary,
    )
}

/// Payload offered to the presentation layer as a local download.
#[derive(Debug, Clone)]
pub struct FeedbackDownload {
    pub file_name: String,
    pub content_type: mime::Mime,
    pub body: String,
}

pub fn feedback_download(student_name: &str, rendered_report: &str) -> FeedbackDownload {
    FeedbackDownload {
        file_name: format!("Devolucion_{}.txt", student_name.replace(' ', "_")),
        content_type: mime::TEXT_PLAIN_UTF_8,
        body: rendered_report.to_string(),
    }
}
