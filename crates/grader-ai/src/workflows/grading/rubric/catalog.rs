//! The rubric registry: assignment identifier → (display label, rubric).
//!
//! Adding an assignment means registering an entry here, not branching in the
//! dispatcher. The built-in catalog covers the course's nine assignments;
//! hosts may merge extra labels from a JSON array or a CSV export at startup,
//! which route to the generic project-outline rubric.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::super::domain::AssignmentId;
use super::scorers;
use super::{Criterion, Rubric};

/// Catalog row exposed to the presentation layer for its assignment picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentView {
    pub id: AssignmentId,
    pub label: String,
    pub max_points: u16,
}

pub(crate) struct CatalogEntry {
    id: AssignmentId,
    label: String,
    rubric: Rubric,
}

impl CatalogEntry {
    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn rubric(&self) -> &Rubric {
        &self.rubric
    }
}

/// Failure to read one of the optional catalog extension sources.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON must be an array of assignment labels: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog CSV is unreadable: {0}")]
    Csv(#[from] csv::Error),
}

/// Immutable after startup; looked up by canonical id only. Labels are
/// display-only and resolve solely via exact match.
pub struct RubricCatalog {
    entries: Vec<CatalogEntry>,
}

impl RubricCatalog {
    /// The course's built-in assignments. Each rubric totals 100 points.
    pub fn builtin() -> Self {
        let mut catalog = Self {
            entries: Vec::new(),
        };

        catalog.register(
            AssignmentId::new("practico-1"),
            "Práctico N° 1 — IA en la escritura del proyecto",
            project_outline_rubric(),
        );
        // Same rubric logic registered under a second identifier; the course
        // ran two variants of the first assignment.
        catalog.register(
            AssignmentId::new("practico-1-variante"),
            "Práctico N° 1 — IA en la escritura del proyecto (variante)",
            project_outline_rubric(),
        );
        catalog.register(
            AssignmentId::new("practico-2"),
            "Práctico N° 2 — Establecimiento de Métodos de Recolección de Datos y Tipos de Muestreos. Tamaño de muestra",
            methods_and_sampling_rubric(),
        );
        catalog.register(
            AssignmentId::new("practico-3"),
            "Práctico N° 3 — Operacionalización de Variables y Determinación de Métodos de Análisis de Datos",
            operationalization_rubric(),
        );
        catalog.register(
            AssignmentId::new("practico-4"),
            "Práctico N° 4 — Introducción + Marco teórico + Búsqueda (≈500 palabras en total)",
            introduction_and_theory_rubric(),
        );
        catalog.register(
            AssignmentId::new("modulo-5"),
            "Trabajo práctico Módulo 5 — Mendeley: citas en Word y bibliografía",
            citations_rubric(),
        );
        catalog.register(
            AssignmentId::new("modulo-6"),
            "Trabajo práctico Módulo 6 — Estilos de Word e índice automático",
            styles_and_index_rubric(),
        );
        catalog.register(
            AssignmentId::new("practico-7"),
            "Práctico N° 7 — Análisis cuantitativo",
            quantitative_rubric(),
        );
        catalog.register(
            AssignmentId::new("practico-8"),
            "Práctico N° 8 — Análisis cualitativo",
            qualitative_rubric(),
        );

        catalog
    }

    /// Register an assignment. First registration of an id wins; later
    /// duplicates are ignored so extension sources cannot shadow built-ins.
    pub fn register(&mut self, id: AssignmentId, label: impl Into<String>, rubric: Rubric) {
        let label = label.into();
        if self.get(&id).is_some() || self.entries.iter().any(|entry| entry.label == label) {
            return;
        }
        self.entries.push(CatalogEntry { id, label, rubric });
    }

    pub(crate) fn get(&self, id: &AssignmentId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Resolve either a canonical id or an exact display label.
    pub fn resolve(&self, raw: &str) -> Option<AssignmentId> {
        let trimmed = raw.trim();
        self.entries
            .iter()
            .find(|entry| entry.id.as_str() == trimmed || entry.label == trimmed)
            .map(|entry| entry.id.clone())
    }

    /// The enumeration offered upstream, in registration order.
    pub fn assignments(&self) -> Vec<AssignmentView> {
        self.entries
            .iter()
            .map(|entry| AssignmentView {
                id: entry.id.clone(),
                label: entry.label.clone(),
                max_points: entry.rubric.max_points(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge extra assignment labels, de-duplicated in order; each routes to
    /// the generic project-outline rubric. Returns how many were added.
    pub fn extend_with_labels<I, S>(&mut self, labels: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for label in labels {
            let label = label.as_ref().trim().to_string();
            if label.is_empty() {
                continue;
            }
            let before = self.entries.len();
            self.register(
                AssignmentId::from_label(&label),
                label,
                project_outline_rubric(),
            );
            if self.entries.len() > before {
                added += 1;
            }
        }
        added
    }

    /// Merge labels from a JSON array (the `GRADER_CATALOG_JSON` shape).
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, CatalogError> {
        let labels: Vec<String> = serde_json::from_str(json)?;
        Ok(self.extend_with_labels(labels))
    }

    /// Merge labels from a CSV export with a `practico` column.
    pub fn extend_from_csv<R: Read>(&mut self, reader: R) -> Result<usize, CatalogError> {
        #[derive(Debug, Deserialize)]
        struct CatalogRow {
            practico: String,
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut labels = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            labels.push(row?.practico);
        }
        Ok(self.extend_with_labels(labels))
    }
}

impl Default for RubricCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn project_outline_rubric() -> Rubric {
    Rubric::new(
        vec![
            Criterion::new("Tema y Título", 20, scorers::topic_and_title),
            Criterion::new("Paradigma", 15, scorers::paradigm),
            Criterion::new("Pregunta de investigación", 20, scorers::research_question),
            Criterion::new("Objetivos", 30, scorers::objectives),
            Criterion::new("Hipótesis (si corresponde)", 15, scorers::hypothesis),
        ],
        "Se evaluó la presencia de secciones fundamentales de un anteproyecto.",
    )
}

fn methods_and_sampling_rubric() -> Rubric {
    Rubric::new(
        vec![
            Criterion::new("Métodos de recolección de datos", 35, scorers::collection_methods),
            Criterion::new("Tipos de muestreo", 35, scorers::sampling_types),
            Criterion::new("Tamaño de muestra", 30, scorers::sample_size),
        ],
        "Se evaluó la definición de métodos de recolección, muestreo y tamaño de muestra.",
    )
}

fn operationalization_rubric() -> Rubric {
    Rubric::new(
        vec![
            Criterion::new("Identificación de variables", 25, scorers::variables),
            Criterion::new("Operacionalización", 40, scorers::operationalization),
            Criterion::new("Métodos de análisis de datos", 35, scorers::analysis_methods),
        ],
        "Se evaluó la operacionalización de variables y los métodos de análisis.",
    )
}

fn introduction_and_theory_rubric() -> Rubric {
    Rubric::new(
        vec![
            Criterion::new("Extensión del texto (≈500 palabras)", 30, scorers::text_length),
            Criterion::new("Introducción", 20, scorers::introduction),
            Criterion::new("Marco teórico", 25, scorers::theory_framework),
            Criterion::new("Búsqueda bibliográfica", 25, scorers::literature_search),
        ],
        "Se evaluó la extensión y la estructura de la introducción, el marco teórico y la búsqueda.",
    )
}

fn citations_rubric() -> Rubric {
    Rubric::new(
        vec![
            Criterion::new(
                "Citas en el texto (autor, año)",
                45,
                scorers::inline_citation_density,
            ),
            Criterion::new("Sección de bibliografía", 35, scorers::bibliography_section),
            Criterion::new("Uso del gestor Mendeley", 20, scorers::mendeley_usage),
        ],
        "Se evaluó el uso de citas con formato autor-año y la sección de bibliografía.",
    )
}

fn styles_and_index_rubric() -> Rubric {
    Rubric::new(
        vec![
            Criterion::new("Jerarquía de estilos de título", 50, scorers::heading_hierarchy),
            Criterion::new("Índice automático", 50, scorers::automatic_index),
        ],
        "Se evaluó la aplicación de estilos de título y la generación del índice automático.",
    )
}

fn quantitative_rubric() -> Rubric {
    Rubric::new(
        vec![
            Criterion::new("Pruebas estadísticas", 40, scorers::statistical_tests),
            Criterion::new("Presentación de resultados", 30, scorers::results_presentation),
            Criterion::new("Interpretación de resultados", 30, scorers::interpretation),
        ],
        "Se evaluó la presentación e interpretación del análisis cuantitativo.",
    )
}

fn qualitative_rubric() -> Rubric {
    Rubric::new(
        vec![
            Criterion::new("Enfoque y técnica cualitativa", 35, scorers::qualitative_approach),
            Criterion::new("Codificación y categorías", 40, scorers::coding_categories),
            Criterion::new("Rigor y triangulación", 25, scorers::rigor_triangulation),
        ],
        "Se evaluó el desarrollo del análisis cualitativo.",
    )
}
