//! Criterion scorers for the built-in rubric catalog.
//!
//! Every scorer is a pure function over the [`ScoringContext`]: binary
//! criteria award a fixed tier on a pattern match, graduated criteria walk a
//! declarative ladder over a signal count, and composite criteria weigh two
//! independent signals jointly. Absence of evidence always maps to a valid
//! floor tier; no scorer can fail for a well-typed document.

use std::sync::OnceLock;

use super::super::signals;
use super::super::text::PatternSet;
use super::ladder::{climb, composite, presence, CompositeTiers, Rung};
use super::{CriterionScore, ScoringContext};

/// Keyword family compiled once on first use.
struct LazyPatterns {
    patterns: &'static [&'static str],
    cell: OnceLock<PatternSet>,
}

impl LazyPatterns {
    const fn new(patterns: &'static [&'static str]) -> Self {
        Self {
            patterns,
            cell: OnceLock::new(),
        }
    }

    fn matches(&self, text: &str) -> bool {
        self.cell
            .get_or_init(|| PatternSet::compile(self.patterns))
            .matches_any(text)
    }

    fn count(&self, text: &str) -> usize {
        self.cell
            .get_or_init(|| PatternSet::compile(self.patterns))
            .count_present(text)
    }
}

// ---------------------------------------------------------------------------
// Práctico 1: project outline essentials
// ---------------------------------------------------------------------------

static TOPIC_TITLE: LazyPatterns = LazyPatterns::new(&[r"\btema\b", r"\bt[ií]tulo\b"]);

pub(crate) fn topic_and_title(cx: &ScoringContext<'_>) -> CriterionScore {
    presence(
        TOPIC_TITLE.matches(cx.text),
        20,
        "Incluye tema y título.",
        "No se identificó tema ni título.",
    )
}

static PARADIGM: LazyPatterns = LazyPatterns::new(&[r"\bparadigma\b"]);

pub(crate) fn paradigm(cx: &ScoringContext<'_>) -> CriterionScore {
    presence(
        PARADIGM.matches(cx.text),
        15,
        "Incluye paradigma.",
        "No se identificó paradigma.",
    )
}

static RESEARCH_QUESTION: LazyPatterns = LazyPatterns::new(&[
    r"\bpregunta de investigaci[oó]n\b",
    r"\bpregunta problema\b",
]);

pub(crate) fn research_question(cx: &ScoringContext<'_>) -> CriterionScore {
    presence(
        RESEARCH_QUESTION.matches(cx.text),
        20,
        "Incluye pregunta de investigación.",
        "No se identificó pregunta de investigación.",
    )
}

static GENERAL_OBJECTIVE: LazyPatterns = LazyPatterns::new(&[r"\bobjetivo general\b"]);
static SPECIFIC_OBJECTIVES: LazyPatterns =
    LazyPatterns::new(&[r"\bobjetivos? espec[íi]ficos?\b"]);
static ANY_OBJECTIVE: LazyPatterns = LazyPatterns::new(&[r"\bobjetivos?\b"]);

pub(crate) fn objectives(cx: &ScoringContext<'_>) -> CriterionScore {
    let general = GENERAL_OBJECTIVE.matches(cx.text);
    let specific = SPECIFIC_OBJECTIVES.matches(cx.text);

    match (general, specific) {
        (true, true) => {
            CriterionScore::new(30, "Incluye objetivo general y objetivos específicos.")
        }
        (true, false) => CriterionScore::new(
            18,
            "Incluye el objetivo general pero no los objetivos específicos.",
        ),
        (false, true) => CriterionScore::new(
            18,
            "Incluye objetivos específicos pero no el objetivo general.",
        ),
        (false, false) if ANY_OBJECTIVE.matches(cx.text) => CriterionScore::new(
            10,
            "Menciona objetivos sin distinguir el general de los específicos.",
        ),
        (false, false) => CriterionScore::new(0, "No se identificaron objetivos."),
    }
}

static HYPOTHESIS: LazyPatterns = LazyPatterns::new(&[r"\bhip[oó]tesis\b"]);

pub(crate) fn hypothesis(cx: &ScoringContext<'_>) -> CriterionScore {
    presence(
        HYPOTHESIS.matches(cx.text),
        15,
        "Incluye hipótesis.",
        "No se identificó hipótesis.",
    )
}

// ---------------------------------------------------------------------------
// Práctico 2: data collection, sampling, sample size
// ---------------------------------------------------------------------------

static COLLECTION_METHODS: LazyPatterns = LazyPatterns::new(&[
    r"\bencuestas?\b",
    r"\bentrevistas?\b",
    r"\bobservaci[oó]n\b",
    r"\bcuestionarios?\b",
    r"\bgrupos? focales?\b",
    r"\bregistros?\b",
]);

const COLLECTION_RUNGS: &[Rung] = &[
    Rung {
        min: 3,
        points: 35,
        explanation: "Describe varios métodos de recolección de datos.",
    },
    Rung {
        min: 2,
        points: 25,
        explanation: "Describe dos métodos de recolección de datos.",
    },
    Rung {
        min: 1,
        points: 15,
        explanation: "Describe un único método de recolección de datos.",
    },
];

pub(crate) fn collection_methods(cx: &ScoringContext<'_>) -> CriterionScore {
    climb(
        COLLECTION_METHODS.count(cx.text),
        COLLECTION_RUNGS,
        (0, "No se identificaron métodos de recolección de datos."),
    )
}

static SAMPLING_FAMILY: LazyPatterns = LazyPatterns::new(&[
    r"\bmuestreo probabil[íi]stico\b",
    r"\bmuestreo no probabil[íi]stico\b",
]);
static SAMPLING_SPECIFIC: LazyPatterns = LazyPatterns::new(&[
    r"\baleatorio simple\b",
    r"\bestratificado\b",
    r"\bpor conglomerados\b",
    r"\bsistem[áa]tico\b",
    r"\bpor conveniencia\b",
    r"\bbola de nieve\b",
    r"\bintencional\b",
]);
static SAMPLING_MENTION: LazyPatterns = LazyPatterns::new(&[r"\bmuestreos?\b"]);

pub(crate) fn sampling_types(cx: &ScoringContext<'_>) -> CriterionScore {
    let family = SAMPLING_FAMILY.matches(cx.text);
    let specific = SAMPLING_SPECIFIC.matches(cx.text);

    match (family, specific) {
        (true, true) => CriterionScore::new(
            35,
            "Clasifica el muestreo y nombra la técnica concreta utilizada.",
        ),
        (false, true) => CriterionScore::new(
            22,
            "Nombra una técnica de muestreo sin clasificarla como probabilística o no probabilística.",
        ),
        (true, false) => CriterionScore::new(
            15,
            "Clasifica el muestreo pero no nombra la técnica concreta.",
        ),
        (false, false) if SAMPLING_MENTION.matches(cx.text) => {
            CriterionScore::new(8, "Menciona el muestreo sin describirlo.")
        }
        (false, false) => CriterionScore::new(0, "No se identificó el tipo de muestreo."),
    }
}

static SAMPLE_SIZE_PHRASE: LazyPatterns = LazyPatterns::new(&[
    r"\btama[ñn]o de (?:la )?muestra\b",
    r"\btama[ñn]o muestral\b",
]);
static SAMPLE_SIZE_EVIDENCE: LazyPatterns = LazyPatterns::new(&[
    r"\b\d+\s*(?:participantes|casos|sujetos|encuestados|pacientes|estudiantes|personas)\b",
    r"\bnivel de confianza\b",
    r"\bmargen de error\b",
    r"\bf[óo]rmula\b",
]);

const SAMPLE_SIZE_TIERS: CompositeTiers = CompositeTiers {
    both: (30, "Define el tamaño de muestra y lo justifica con datos."),
    first_only: (18, "Define el tamaño de muestra sin justificarlo."),
    second_only: (
        12,
        "Aporta datos numéricos sin definir explícitamente el tamaño de muestra.",
    ),
    neither: (0, "No se identificó el tamaño de muestra."),
};

pub(crate) fn sample_size(cx: &ScoringContext<'_>) -> CriterionScore {
    composite(
        SAMPLE_SIZE_PHRASE.matches(cx.text),
        SAMPLE_SIZE_EVIDENCE.matches(cx.text),
        &SAMPLE_SIZE_TIERS,
    )
}

// ---------------------------------------------------------------------------
// Práctico 3: variables and analysis methods
// ---------------------------------------------------------------------------

static DEPENDENT_VARIABLE: LazyPatterns = LazyPatterns::new(&[r"\bvariables? dependientes?\b"]);
static INDEPENDENT_VARIABLE: LazyPatterns =
    LazyPatterns::new(&[r"\bvariables? independientes?\b"]);
static ANY_VARIABLE: LazyPatterns = LazyPatterns::new(&[r"\bvariables?\b"]);

pub(crate) fn variables(cx: &ScoringContext<'_>) -> CriterionScore {
    let dependent = DEPENDENT_VARIABLE.matches(cx.text);
    let independent = INDEPENDENT_VARIABLE.matches(cx.text);

    match (dependent, independent) {
        (true, true) => CriterionScore::new(
            25,
            "Identifica variables dependientes e independientes.",
        ),
        (true, false) | (false, true) => CriterionScore::new(
            15,
            "Identifica solo una de las variables (dependiente o independiente).",
        ),
        (false, false) if ANY_VARIABLE.matches(cx.text) => {
            CriterionScore::new(8, "Menciona variables sin clasificarlas.")
        }
        (false, false) => CriterionScore::new(0, "No se identificaron variables."),
    }
}

static OPERATIONALIZATION: LazyPatterns = LazyPatterns::new(&[
    r"\bdefinici[oó]n conceptual\b",
    r"\bdefinici[oó]n operacional\b",
    r"\bindicadore?s?\b",
    r"\bdimensi[oó]n(?:es)?\b",
    r"\bescalas? de medici[oó]n\b",
    r"\bunidad(?:es)? de an[áa]lisis\b",
]);

const OPERATIONALIZATION_RUNGS: &[Rung] = &[
    Rung {
        min: 4,
        points: 40,
        explanation: "Operacionaliza las variables con definiciones, dimensiones e indicadores.",
    },
    Rung {
        min: 2,
        points: 25,
        explanation: "Operacionaliza parcialmente las variables.",
    },
    Rung {
        min: 1,
        points: 12,
        explanation: "Aborda un único elemento de la operacionalización.",
    },
];

pub(crate) fn operationalization(cx: &ScoringContext<'_>) -> CriterionScore {
    climb(
        OPERATIONALIZATION.count(cx.text),
        OPERATIONALIZATION_RUNGS,
        (0, "No se identificó la operacionalización de variables."),
    )
}

static ANALYSIS_METHODS: LazyPatterns = LazyPatterns::new(&[
    r"\ban[áa]lisis estad[íi]stico\b",
    r"\bspss\b",
    r"\bestad[íi]stica descriptiva\b",
    r"\bestad[íi]stica inferencial\b",
    r"\ban[áa]lisis de contenido\b",
    r"\ban[áa]lisis tem[áa]tico\b",
    r"\bsoftware\b",
]);

const ANALYSIS_RUNGS: &[Rung] = &[
    Rung {
        min: 3,
        points: 35,
        explanation: "Determina métodos de análisis de datos con detalle.",
    },
    Rung {
        min: 2,
        points: 25,
        explanation: "Determina métodos de análisis de datos.",
    },
    Rung {
        min: 1,
        points: 15,
        explanation: "Menciona un método de análisis de datos.",
    },
];

pub(crate) fn analysis_methods(cx: &ScoringContext<'_>) -> CriterionScore {
    climb(
        ANALYSIS_METHODS.count(cx.text),
        ANALYSIS_RUNGS,
        (0, "No se identificaron métodos de análisis de datos."),
    )
}

// ---------------------------------------------------------------------------
// Práctico 4: introduction, theory, search (~500 words)
// ---------------------------------------------------------------------------

const INTRO_MARKER: &str = "introducci";
const INTRO_CONTINUATIONS: &[&str] = &[
    "introducci",
    "marco te",
    "antecedentes",
    "estado del arte",
    "bases te",
    "búsqueda",
    "busqueda",
];

pub(crate) fn text_length(cx: &ScoringContext<'_>) -> CriterionScore {
    let (min, max) = cx.config.intro_word_range;
    let widened = (min.saturating_sub(min / 4), max + max / 4);

    if let Some(words) =
        signals::section_word_count(cx.document, &cx.config.heading_aliases, INTRO_MARKER, INTRO_CONTINUATIONS)
    {
        return if words >= min && words <= max {
            CriterionScore::new(
                30,
                "La extensión de la introducción y el marco teórico está dentro del rango esperado.",
            )
        } else if words >= widened.0 && words <= widened.1 {
            CriterionScore::new(
                18,
                "La extensión de la introducción y el marco teórico está cerca del rango esperado.",
            )
        } else {
            CriterionScore::new(
                8,
                "La extensión de la introducción y el marco teórico está fuera del rango esperado.",
            )
        };
    }

    // No introduction heading to anchor on: fall back to the whole document
    // against the widened band and say so.
    let (words, in_band) = signals::word_count_in_range(cx.text, widened.0, widened.1);
    if words == 0 {
        CriterionScore::new(0, "El documento no contiene texto evaluable.")
    } else if in_band {
        CriterionScore::new(
            22,
            "No se identificó el encabezado de introducción; la extensión total del documento está dentro del rango tolerado.",
        )
    } else {
        CriterionScore::new(
            8,
            "No se identificó el encabezado de introducción; la extensión total del documento está fuera del rango tolerado.",
        )
    }
}

static INTRODUCTION: LazyPatterns = LazyPatterns::new(&[r"\bintroducci[oó]n\b"]);

pub(crate) fn introduction(cx: &ScoringContext<'_>) -> CriterionScore {
    presence(
        INTRODUCTION.matches(cx.text),
        20,
        "Incluye introducción.",
        "No se identificó la introducción.",
    )
}

static THEORY_FRAMEWORK: LazyPatterns = LazyPatterns::new(&[
    r"\bmarco te[óo]rico\b",
    r"\bantecedentes\b",
    r"\bestado del arte\b",
    r"\bbases te[óo]ricas\b",
]);

const THEORY_RUNGS: &[Rung] = &[
    Rung {
        min: 2,
        points: 25,
        explanation: "Desarrolla el marco teórico con antecedentes.",
    },
    Rung {
        min: 1,
        points: 15,
        explanation: "Incluye el marco teórico de forma acotada.",
    },
];

pub(crate) fn theory_framework(cx: &ScoringContext<'_>) -> CriterionScore {
    climb(
        THEORY_FRAMEWORK.count(cx.text),
        THEORY_RUNGS,
        (0, "No se identificó el marco teórico."),
    )
}

static DATABASES: LazyPatterns = LazyPatterns::new(&[
    r"\bscielo\b",
    r"\bpubmed\b",
    r"\bscopus\b",
    r"\bgoogle acad[ée]mico\b",
    r"\bredalyc\b",
    r"\bweb of science\b",
    r"\bbases? de datos\b",
]);

const LITERATURE_TIERS: CompositeTiers = CompositeTiers {
    both: (
        25,
        "Documenta la búsqueda bibliográfica con citas y bases de datos consultadas.",
    ),
    first_only: (
        15,
        "Incluye citas pero no documenta las bases de datos consultadas.",
    ),
    second_only: (
        12,
        "Nombra bases de datos pero no incluye citas en el texto.",
    ),
    neither: (0, "No se identificó la búsqueda bibliográfica."),
};

pub(crate) fn literature_search(cx: &ScoringContext<'_>) -> CriterionScore {
    composite(
        signals::inline_citations(cx.text) >= 1,
        DATABASES.matches(cx.text),
        &LITERATURE_TIERS,
    )
}

// ---------------------------------------------------------------------------
// Módulo 5: Mendeley citations and bibliography
// ---------------------------------------------------------------------------

const CITATION_RUNGS: &[Rung] = &[
    Rung {
        min: 7,
        points: 45,
        explanation: "Se identificaron siete o más citas con formato (autor, año).",
    },
    Rung {
        min: 4,
        points: 30,
        explanation: "Se identificaron al menos cuatro citas con formato (autor, año).",
    },
];

pub(crate) fn inline_citation_density(cx: &ScoringContext<'_>) -> CriterionScore {
    climb(
        signals::inline_citations(cx.text),
        CITATION_RUNGS,
        (10, "Se identificaron pocas citas con formato (autor, año)."),
    )
}

pub(crate) fn bibliography_section(cx: &ScoringContext<'_>) -> CriterionScore {
    if signals::has_bibliography_section(cx.text) {
        CriterionScore::new(35, "Incluye una sección de bibliografía o referencias.")
    } else if signals::inline_citations(cx.text) > 0 {
        CriterionScore::new(
            12,
            "Hay citas en el texto pero falta la sección de bibliografía.",
        )
    } else {
        CriterionScore::new(0, "No se identificó la sección de bibliografía.")
    }
}

static MENDELEY: LazyPatterns = LazyPatterns::new(&[r"\bmendeley\b"]);

pub(crate) fn mendeley_usage(cx: &ScoringContext<'_>) -> CriterionScore {
    presence(
        MENDELEY.matches(cx.text),
        20,
        "Menciona el uso de Mendeley como gestor de referencias.",
        "No se identificó el uso de Mendeley.",
    )
}

// ---------------------------------------------------------------------------
// Módulo 6: Word styles and automatic index
// ---------------------------------------------------------------------------

const HEADING_RUNGS: &[Rung] = &[
    Rung {
        min: 3,
        points: 50,
        explanation: "Aplica los tres niveles de título.",
    },
    Rung {
        min: 2,
        points: 35,
        explanation: "Aplica dos niveles de título.",
    },
    Rung {
        min: 1,
        points: 15,
        explanation: "Aplica un solo nivel de título.",
    },
];

pub(crate) fn heading_hierarchy(cx: &ScoringContext<'_>) -> CriterionScore {
    let tally = signals::heading_tally(cx.document, &cx.config.heading_aliases);
    climb(
        tally.levels_present(),
        HEADING_RUNGS,
        (0, "No se identificaron estilos de título."),
    )
}

pub(crate) fn automatic_index(cx: &ScoringContext<'_>) -> CriterionScore {
    if signals::has_table_of_contents(cx.document, cx.text) {
        return CriterionScore::new(50, "Incluye un índice o tabla de contenido.");
    }

    let tally = signals::heading_tally(cx.document, &cx.config.heading_aliases);
    if tally.total() > 0 {
        CriterionScore::new(
            15,
            "Aplica estilos de título pero no se identificó el índice.",
        )
    } else {
        CriterionScore::new(
            0,
            "No se identificó un índice ni estilos que permitan generarlo.",
        )
    }
}

// ---------------------------------------------------------------------------
// Práctico 7: quantitative analysis
// ---------------------------------------------------------------------------

static NUMERIC_RESULTS: LazyPatterns = LazyPatterns::new(&[
    r"\b\d+[.,]\d+\b",
    r"\b\d+\s*%",
    r"\bp\s*[<=>]",
]);
static NAMED_TESTS: LazyPatterns = LazyPatterns::new(&[
    r"\bt de student\b",
    r"\bchi[ -]cuadrado\b",
    r"\banova\b",
    r"\bcorrelaci[oó]n de pearson\b",
    r"\bregresi[oó]n\b",
    r"\bmann[- ]whitney\b",
    r"\bwilcoxon\b",
]);

const STATISTICAL_TIERS: CompositeTiers = CompositeTiers {
    both: (
        40,
        "Presenta resultados numéricos y menciona las pruebas estadísticas aplicadas.",
    ),
    first_only: (
        25,
        "Presenta resultados numéricos pero no menciona la prueba aplicada.",
    ),
    second_only: (
        25,
        "Menciona pruebas estadísticas pero no presenta los valores obtenidos.",
    ),
    neither: (
        10,
        "No se identificaron pruebas estadísticas ni resultados numéricos.",
    ),
};

pub(crate) fn statistical_tests(cx: &ScoringContext<'_>) -> CriterionScore {
    composite(
        NUMERIC_RESULTS.matches(cx.text),
        NAMED_TESTS.matches(cx.text),
        &STATISTICAL_TIERS,
    )
}

static RESULTS_PRESENTATION: LazyPatterns = LazyPatterns::new(&[
    r"\btablas?\b",
    r"\bgr[áa]ficos?\b",
    r"\bfiguras?\b",
    r"\bfrecuencias?\b",
    r"\bporcentajes?\b",
    r"\bmedia\b",
    r"\bdesviaci[oó]n\b",
]);

const PRESENTATION_RUNGS: &[Rung] = &[
    Rung {
        min: 4,
        points: 30,
        explanation: "Presenta los resultados con tablas, gráficos y estadísticos descriptivos.",
    },
    Rung {
        min: 2,
        points: 20,
        explanation: "Presenta los resultados con algunos recursos descriptivos.",
    },
    Rung {
        min: 1,
        points: 10,
        explanation: "La presentación de resultados es mínima.",
    },
];

pub(crate) fn results_presentation(cx: &ScoringContext<'_>) -> CriterionScore {
    climb(
        RESULTS_PRESENTATION.count(cx.text),
        PRESENTATION_RUNGS,
        (0, "No se identificó la presentación de resultados."),
    )
}

static INTERPRETATION: LazyPatterns = LazyPatterns::new(&[
    r"\binterpretaci[oó]n\b",
    r"\bsignificativ[oa]\b",
    r"\bsignificancia\b",
    r"\bse concluye\b",
    r"\blos resultados indican\b",
    r"\bevidencia\b",
]);

const INTERPRETATION_RUNGS: &[Rung] = &[
    Rung {
        min: 3,
        points: 30,
        explanation: "Interpreta los resultados y extrae conclusiones.",
    },
    Rung {
        min: 2,
        points: 20,
        explanation: "Interpreta los resultados de forma parcial.",
    },
    Rung {
        min: 1,
        points: 10,
        explanation: "La interpretación de los resultados es mínima.",
    },
];

pub(crate) fn interpretation(cx: &ScoringContext<'_>) -> CriterionScore {
    climb(
        INTERPRETATION.count(cx.text),
        INTERPRETATION_RUNGS,
        (0, "No se identificó la interpretación de resultados."),
    )
}

// ---------------------------------------------------------------------------
// Práctico 8: qualitative analysis
// ---------------------------------------------------------------------------

static QUALITATIVE_TECHNIQUES: LazyPatterns = LazyPatterns::new(&[
    r"\bentrevistas? en profundidad\b",
    r"\bgrupos? focales?\b",
    r"\bobservaci[oó]n participante\b",
    r"\betnograf[íi]a\b",
    r"\bfenomenolog[íi]a\b",
    r"\bteor[íi]a fundamentada\b",
    r"\bestudios? de caso\b",
]);
static QUALITATIVE_MENTION: LazyPatterns = LazyPatterns::new(&[r"\bcualitativ[oa]s?\b"]);

pub(crate) fn qualitative_approach(cx: &ScoringContext<'_>) -> CriterionScore {
    let named = QUALITATIVE_TECHNIQUES.count(cx.text);
    if named >= 2 {
        CriterionScore::new(35, "Fundamenta el enfoque con técnicas cualitativas concretas.")
    } else if named == 1 {
        CriterionScore::new(22, "Nombra una técnica cualitativa concreta.")
    } else if QUALITATIVE_MENTION.matches(cx.text) {
        CriterionScore::new(10, "Declara el enfoque cualitativo sin nombrar técnicas.")
    } else {
        CriterionScore::new(0, "No se identificó el enfoque cualitativo.")
    }
}

static CODING_CATEGORIES: LazyPatterns = LazyPatterns::new(&[
    r"\bcodificaci[oó]n\b",
    r"\bcategor[íi]as?\b",
    r"\bc[oó]digos?\b",
    r"\bmatriz\b",
    r"\batlas\.ti\b",
    r"\bnvivo\b",
    r"\bsaturaci[oó]n\b",
]);

const CODING_RUNGS: &[Rung] = &[
    Rung {
        min: 3,
        points: 40,
        explanation: "Describe la codificación y las categorías de análisis.",
    },
    Rung {
        min: 2,
        points: 25,
        explanation: "Describe parcialmente la codificación del material.",
    },
    Rung {
        min: 1,
        points: 12,
        explanation: "Menciona la codificación sin desarrollarla.",
    },
];

pub(crate) fn coding_categories(cx: &ScoringContext<'_>) -> CriterionScore {
    climb(
        CODING_CATEGORIES.count(cx.text),
        CODING_RUNGS,
        (0, "No se identificó la codificación del material."),
    )
}

static RIGOR: LazyPatterns = LazyPatterns::new(&[
    r"\btriangulaci[oó]n\b",
    r"\bcredibilidad\b",
    r"\btransferibilidad\b",
    r"\bconfirmabilidad\b",
    r"\bvalidaci[oó]n\b",
]);

const RIGOR_RUNGS: &[Rung] = &[
    Rung {
        min: 2,
        points: 25,
        explanation: "Atiende el rigor metodológico con triangulación u otros criterios.",
    },
    Rung {
        min: 1,
        points: 15,
        explanation: "Menciona un criterio de rigor metodológico.",
    },
];

pub(crate) fn rigor_triangulation(cx: &ScoringContext<'_>) -> CriterionScore {
    climb(
        RIGOR.count(cx.text),
        RIGOR_RUNGS,
        (0, "No se identificaron criterios de rigor metodológico."),
    )
}
