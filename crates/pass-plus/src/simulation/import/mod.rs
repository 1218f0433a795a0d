mod parser;

use crate::simulation::domain::Child;
use crate::simulation::eligibility::EligibilityPolicy;
use crate::simulation::intake::{validate_child, IntakeViolation};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub use parser::CHILD_CSV_HEADERS;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
    Intake {
        row: usize,
        source: IntakeViolation,
    },
    TooManyChildren(usize),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read children CSV: {}", err),
            ImportError::Csv(err) => write!(f, "invalid children CSV data: {}", err),
            ImportError::InvalidValue { row, column, value } => write!(
                f,
                "row {}: column '{}' has an unsupported value '{}'",
                row, column, value
            ),
            ImportError::Intake { row, source } => write!(f, "row {}: {}", row, source),
            ImportError::TooManyChildren(count) => write!(
                f,
                "children CSV lists {} children; at most {} can be simulated",
                count,
                crate::simulation::session::MAX_CHILDREN
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::Intake { source, .. } => Some(source),
            ImportError::InvalidValue { .. } | ImportError::TooManyChildren(_) => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads child answers from a CSV export, one child per row.
pub struct ChildCsvImporter;

impl ChildCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        policy: &EligibilityPolicy,
    ) -> Result<Vec<Child>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, policy)
    }

    /// Children are numbered in row order and validated like wizard answers.
    pub fn from_reader<R: Read>(
        reader: R,
        policy: &EligibilityPolicy,
    ) -> Result<Vec<Child>, ImportError> {
        let rows = parser::parse_rows(reader)?;
        if rows.len() > usize::from(crate::simulation::session::MAX_CHILDREN) {
            return Err(ImportError::TooManyChildren(rows.len()));
        }

        let mut children = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let line = index + 1;
            let child = row.into_child(index as u8 + 1).map_err(|(column, value)| {
                ImportError::InvalidValue {
                    row: line,
                    column,
                    value,
                }
            })?;
            validate_child(&child, policy)
                .map_err(|source| ImportError::Intake { row: line, source })?;
            children.push(child);
        }

        debug!(children = children.len(), "imported children from CSV");
        Ok(children)
    }
}
