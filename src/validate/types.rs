//! Violation records and the report produced by a validation run.

use serde::Serialize;

/// Where in a tasks document a violation was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// A header-convention task, by identifier (e.g. `T-101`).
    Task(String),
    /// A delimited-convention task block, by 1-based position.
    Block(usize),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Task(id) => write!(f, "{}", id),
            Location::Block(index) => write!(f, "task-block {}", index),
        }
    }
}

/// The rule a violation breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ViolationKind {
    /// A populated feature directory lacks required files.
    MissingFeatureFiles { missing: Vec<String> },
    /// A task declares no owner.
    MissingOwner,
    /// A task's owner is not in the agent registry.
    UnknownOwner { owner: String },
    /// A task block has no `acceptance:` line.
    MissingAcceptanceSection,
    /// A task block has no `validate:` line.
    MissingValidateSection,
    /// A tasks document contains no task blocks at all.
    NoTaskBlocks,
}

impl ViolationKind {
    /// Report category, printed as a `[category]` prefix.
    pub fn category(&self) -> &'static str {
        match self {
            ViolationKind::MissingFeatureFiles { .. } => "feature-structure",
            _ => "tasks",
        }
    }
}

/// A single rule violation, located precisely enough to act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Root-relative document or directory path (forward slashes).
    pub path: String,
    /// Task identifier or block index, when the violation is inside a task.
    ///
    /// Serialized as a top-level `task` or `block` key.
    #[serde(flatten)]
    pub location: Option<Location>,
    /// 1-based line where the offending task starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// The rule that was broken.
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    /// Create a violation for a whole document or directory.
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            location: None,
            line: None,
            kind,
        }
    }

    /// Create a violation inside a task.
    pub fn at(path: impl Into<String>, location: Location, line: usize, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            location: Some(location),
            line: Some(line),
            kind,
        }
    }

    /// Human-readable description of the broken rule, without the path.
    pub fn message(&self) -> String {
        match &self.kind {
            ViolationKind::MissingFeatureFiles { missing } => {
                format!("missing: {}", missing.join(", "))
            }
            ViolationKind::MissingOwner => "missing 'owner:'".to_string(),
            ViolationKind::UnknownOwner { owner } => {
                format!("owner '{}' not found in agent registry", owner)
            }
            ViolationKind::MissingAcceptanceSection => "missing 'acceptance:'".to_string(),
            ViolationKind::MissingValidateSection => "missing 'validate:'".to_string(),
            ViolationKind::NoTaskBlocks => "contains no task blocks".to_string(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind.category(), self.path)?;
        if let Some(location) = &self.location {
            write!(f, " {}", location)?;
        }
        write!(f, " {}", self.message())
    }
}

/// Outcome of a full validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Root-relative path of the registry that was used.
    pub registry: String,
    /// Number of agents in the registry.
    pub agents: usize,
    /// Feature directories that were checked.
    pub features_checked: usize,
    /// Feature directories skipped as placeholders or not yet populated.
    pub features_skipped: usize,
    /// Every violation, in discovery order.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Whether the run found no violations.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}
