//! Tasks document parsing and checking.
//!
//! A tasks document is split into task blocks by one of two conventions, each
//! implemented as a [`TaskDocumentParser`]:
//!
//! - [`HeaderParser`]: tasks start at `### T-ID: Title` headers
//! - [`DelimitedParser`]: tasks are separated by `---` lines and must carry
//!   `acceptance:` and `validate:` sections
//!
//! [`check_document`] cross-references every block's owner against the
//! [`AgentRegistry`] and returns the violations found.

mod delimited;
mod header;


pub use delimited::DelimitedParser;
pub use header::HeaderParser;

use crate::config::TaskConvention;
use crate::registry::AgentRegistry;
use crate::validate::{Location, Violation, ViolationKind};

/// One unit of work found in a tasks document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBlock {
    /// Task identifier or block index.
    pub location: Location,
    /// 1-based line the block starts on.
    pub line: usize,
    /// Title from the task header, when the convention has one.
    pub title: Option<String>,
    /// Declared owner, if an `owner:` line was recognized.
    pub owner: Option<String>,
    /// Whether an `acceptance:` line is present.
    pub has_acceptance: bool,
    /// Whether a `validate:` line is present.
    pub has_validate: bool,
}

/// A strategy for splitting a tasks document into task blocks.
pub trait TaskDocumentParser {
    /// The convention this parser implements.
    fn convention(&self) -> TaskConvention;

    /// Split `text` into task blocks, in document order.
    fn parse(&self, text: &str) -> Vec<TaskBlock>;

    /// Whether every block must carry `acceptance:` and `validate:` lines.
    fn requires_sections(&self) -> bool {
        false
    }

    /// Whether a document with zero task blocks is itself a violation.
    fn requires_tasks(&self) -> bool {
        false
    }
}

/// Pick the parser for a document.
///
/// `Auto` selects [`HeaderParser`] when the document contains at least one task
/// header and [`DelimitedParser`] otherwise.
pub fn parser_for(convention: TaskConvention, text: &str) -> Box<dyn TaskDocumentParser> {
    match convention {
        TaskConvention::Header => Box::new(HeaderParser),
        TaskConvention::Delimited => Box::new(DelimitedParser),
        TaskConvention::Auto => {
            if header::has_task_header(text) {
                Box::new(HeaderParser)
            } else {
                Box::new(DelimitedParser)
            }
        }
    }
}

/// Check a tasks document and return its violations.
///
/// `doc_path` is the path printed in reports. When the parser requires tasks, a
/// document without any task block yields a single `NoTaskBlocks` violation.
/// A block without an owner reports only `MissingOwner`.
pub fn check_document(
    parser: &dyn TaskDocumentParser,
    doc_path: &str,
    text: &str,
    registry: &AgentRegistry,
) -> Vec<Violation> {
    let blocks = parser.parse(text);
    tracing::debug!(
        path = doc_path,
        convention = %parser.convention(),
        blocks = blocks.len(),
        "parsed tasks document"
    );

    if blocks.is_empty() && parser.requires_tasks() {
        return vec![Violation::new(doc_path, ViolationKind::NoTaskBlocks)];
    }

    let mut violations = Vec::new();

    for block in &blocks {
        tracing::debug!(
            location = %block.location,
            line = block.line,
            title = block.title.as_deref().unwrap_or(""),
            owner = block.owner.as_deref().unwrap_or(""),
            "checking task block"
        );

        let mut push = |kind: ViolationKind| {
            violations.push(Violation::at(
                doc_path,
                block.location.clone(),
                block.line,
                kind,
            ));
        };

        let Some(owner) = &block.owner else {
            push(ViolationKind::MissingOwner);
            continue;
        };

        if !registry.contains(owner) {
            push(ViolationKind::UnknownOwner {
                owner: owner.clone(),
            });
        }

        if parser.requires_sections() {
            if !block.has_acceptance {
                push(ViolationKind::MissingAcceptanceSection);
            }
            if !block.has_validate {
                push(ViolationKind::MissingValidateSection);
            }
        }
    }

    violations
}
