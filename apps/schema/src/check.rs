//! Batch validation of JSON inputs, used by the `schema-check` binary.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SchemaConfig;
use crate::errors::{Reason, ValidationError, Violation};
use crate::models::{Candidate, Company, CustomResume, JobApplication, JobPosting, SkillsMatrix};
use crate::validation::{FieldPath, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Company,
    JobPosting,
    Candidate,
    CustomResume,
    JobApplication,
    SkillsMatrix,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Company => Company::ENTITY,
            EntityKind::JobPosting => JobPosting::ENTITY,
            EntityKind::Candidate => Candidate::ENTITY,
            EntityKind::CustomResume => CustomResume::ENTITY,
            EntityKind::JobApplication => JobApplication::ENTITY,
            EntityKind::SkillsMatrix => SkillsMatrix::ENTITY,
        }
    }

    pub fn check(self, raw: &Value, config: &SchemaConfig) -> Result<(), ValidationError> {
        match self {
            EntityKind::Company => Company::validate_with(raw, config).map(drop),
            EntityKind::JobPosting => JobPosting::validate_with(raw, config).map(drop),
            EntityKind::Candidate => Candidate::validate_with(raw, config).map(drop),
            EntityKind::CustomResume => CustomResume::validate_with(raw, config).map(drop),
            EntityKind::JobApplication => JobApplication::validate_with(raw, config).map(drop),
            EntityKind::SkillsMatrix => SkillsMatrix::validate_with(raw, config).map(drop),
        }
    }
}

/// One violation, located by input source and document index.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub source: String,
    pub index: usize,
    pub violation: Violation,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}", self.source, self.index, self.violation)
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub documents: usize,
    pub invalid: usize,
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Validates every document in `text`: a single JSON object, or an array of them.
/// Text that is not JSON at all counts as one document with a root `wrong_type`.
pub fn check_source(
    kind: EntityKind,
    source: &str,
    text: &str,
    config: &SchemaConfig,
    report: &mut Report,
) {
    let documents = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items,
        Ok(other) => vec![other],
        Err(e) => {
            warn!("{source}: not valid JSON: {e}");
            report.documents += 1;
            report.invalid += 1;
            report.findings.push(Finding {
                source: source.to_string(),
                index: 0,
                violation: Violation {
                    path: FieldPath::root(),
                    reason: Reason::WrongType,
                },
            });
            return;
        }
    };

    debug!(
        "{source}: checking {} document(s) as {}",
        documents.len(),
        kind.name()
    );

    for (index, document) in documents.iter().enumerate() {
        report.documents += 1;
        if let Err(err) = kind.check(document, config) {
            report.invalid += 1;
            report
                .findings
                .extend(err.violations.into_iter().map(|violation| Finding {
                    source: source.to_string(),
                    index,
                    violation,
                }));
        }
    }
}

pub fn check_file(
    kind: EntityKind,
    path: &Path,
    config: &SchemaConfig,
    report: &mut Report,
) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    check_source(kind, &path.display().to_string(), &text, config, report);
    Ok(())
}
