use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::infra::{self, InMemorySubmissionRepository, MailAdapter};
use grader_ai::config::AppConfig;
use grader_ai::error::AppError;
use grader_ai::workflows::grading::{
    AssignmentId, Document, GradingService, GradingSubmission, StudentIdentity,
};

/// Built-in extracted text naming every section the introductory rubric
/// checks, so the default invocation shows a full-marks report.
const SAMPLE_SUBMISSION: &str = "\
El tema elegido y el título provisorio encabezan el anteproyecto. \
Se adopta el paradigma interpretativo para el abordaje. \
La pregunta de investigación delimita el problema. \
El objetivo general se desagrega en objetivos específicos. \
Se enuncia una hipótesis de trabajo preliminar.";

#[derive(Args, Debug)]
pub(crate) struct GradeArgs {
    /// Assignment identifier or exact catalog label
    #[arg(long, default_value = "practico-1")]
    pub(crate) assignment: String,
    /// Student name shown on the report
    #[arg(long, default_value = "Ana María Pérez")]
    pub(crate) student: String,
    /// Student e-mail for the delivery hand-off
    #[arg(long, default_value = "alumno@uccuyo.edu.ar")]
    pub(crate) email: String,
    /// Plain-text file with the extracted submission (defaults to a sample)
    #[arg(long)]
    pub(crate) text_file: Option<PathBuf>,
    /// Submission date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = infra::parse_date)]
    pub(crate) received_on: Option<NaiveDate>,
}

pub(crate) fn run_grade(args: GradeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = infra::build_engine(&config)?;

    // Accept either a canonical id or an exact catalog label; anything else
    // goes through as-is and grades fail-open.
    let assignment = engine
        .catalog()
        .resolve(&args.assignment)
        .unwrap_or_else(|| AssignmentId::new(args.assignment.clone()));

    let plain_text = match &args.text_file {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_SUBMISSION.to_string(),
    };

    let faculty_copy = config.smtp.as_ref().map(|smtp| smtp.faculty_copy.clone());
    let service = GradingService::new(
        Arc::new(InMemorySubmissionRepository::default()),
        Arc::new(MailAdapter::from_config(&config)),
        engine,
        faculty_copy,
    );

    let record = service.submit(GradingSubmission {
        student: StudentIdentity {
            full_name: args.student,
            email: args.email,
        },
        assignment,
        document: Document::flat(plain_text),
        received_on: args
            .received_on
            .unwrap_or_else(|| Local::now().date_naive()),
    })?;

    if let Some(report) = &record.rendered_report {
        println!("{report}");
    }
    println!(
        "[{} | {}]",
        record.submission_id.0,
        record.status.label()
    );

    Ok(())
}

pub(crate) fn run_assignments() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = infra::build_engine(&config)?;

    for view in engine.catalog().assignments() {
        println!(
            "{:<22} {} ({} pts)",
            view.id.as_str(),
            view.label,
            view.max_points
        );
    }

    Ok(())
}
