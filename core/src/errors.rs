use thiserror::Error;

/// Feil fra dispatcher og treningsmodellene.
///
/// `InvalidInput`, `Arity` og `InvalidValue` er inndatafeil som kalleren kan
/// rette opp. `NotImplemented` betyr en programmeringsfeil og skal aldri
/// fanges og skjules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("invalid input: unknown workout code {code:?}")]
    InvalidInput { code: String },

    #[error("invalid input: {code} expects {expected} values, got {got}")]
    Arity {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("invalid input: {field} must be {requirement}, got {value}")]
    InvalidValue {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl WorkoutError {
    /// true for feil kalleren kan rette (alt unntatt NotImplemented)
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, WorkoutError::NotImplemented(_))
    }

    /// Kort label for metrics (`reason`-label).
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::InvalidInput { .. } => "unknown_code",
            WorkoutError::Arity { .. } => "arity_mismatch",
            WorkoutError::InvalidValue { .. } => "invalid_value",
            WorkoutError::NotImplemented(_) => "not_implemented",
        }
    }
}

/// Feil ved innlesing av pakker (JSON fra fil eller streng).
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("failed to read packages from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error (packages) at {path}: {message}")]
    Parse { path: String, message: String },
}

/// Feil fra rapportkjøringen.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("package #{index} ({code}): {source}")]
    Package {
        index: usize,
        code: String,
        #[source]
        source: WorkoutError,
    },

    #[error(transparent)]
    Packages(#[from] PackageError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}
