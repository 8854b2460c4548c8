//! Finding and report types shared by all checkers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fatal,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Fatal => write!(f, "fatal"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Structural,
    Referential,
    Reachability,
    ProductionPattern,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Structural => write!(f, "structural"),
            Category::Referential => write!(f, "referential"),
            Category::Reachability => write!(f, "reachability"),
            Category::ProductionPattern => write!(f, "production-pattern"),
        }
    }
}

/// One validation result. Created by a checker, consumed by the aggregator,
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

impl Finding {
    pub fn fatal(category: Category, message: impl Into<String>, node_id: Option<String>) -> Self {
        Finding {
            severity: Severity::Fatal,
            category,
            message: message.into(),
            node_id,
        }
    }

    pub fn warning(category: Category, message: impl Into<String>, node_id: Option<String>) -> Self {
        Finding {
            severity: Severity::Warning,
            category,
            message: message.into(),
            node_id,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(
                f,
                "[{}:{}] {} (node '{}')",
                self.category, self.severity, self.message, id
            ),
            None => write!(f, "[{}:{}] {}", self.category, self.severity, self.message),
        }
    }
}

/// Aggregated result of validating one workflow document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Build a report from accumulated findings. Passes iff nothing is fatal.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let passed = !findings.iter().any(|f| f.severity == Severity::Fatal);
        ValidationReport { passed, findings }
    }

    pub fn fatal_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Fatal)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }
}
