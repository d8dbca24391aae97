//! Delimited convention: task blocks separated by horizontal rules.
//!
//! ```text
//! ## Write the login page
//! owner: alice
//! acceptance:
//!   - form renders
//! validate:
//!   - cargo test
//!
//! ---
//!
//! ## Next task
//! ...
//! ```
//!
//! Segments with neither an `owner:` line nor a `## ` heading are not tasks
//! (preambles, frontmatter) and are dropped before numbering.

use super::{TaskBlock, TaskDocumentParser};
use crate::config::TaskConvention;
use crate::validate::Location;
use regex::Regex;
use std::sync::LazyLock;

/// Horizontal rule: three or more hyphens alone on a line.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-{3,}\s*$").expect("Invalid separator regex"));

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*##\s+").expect("Invalid heading regex"));

static OWNER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*owner:\s*([A-Za-z0-9_-]+)\s*$").expect("Invalid owner regex")
});

static ACCEPTANCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*acceptance:\s*$").expect("Invalid acceptance regex"));

static VALIDATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*validate:\s*$").expect("Invalid validate regex"));

/// Parser for delimiter-separated tasks documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedParser;

impl TaskDocumentParser for DelimitedParser {
    fn convention(&self) -> TaskConvention {
        TaskConvention::Delimited
    }

    fn parse(&self, text: &str) -> Vec<TaskBlock> {
        split_segments(text)
            .into_iter()
            .filter(|segment| segment.is_task())
            .enumerate()
            .map(|(index, segment)| segment.into_block(index + 1))
            .collect()
    }

    fn requires_sections(&self) -> bool {
        true
    }

    fn requires_tasks(&self) -> bool {
        true
    }
}

/// Lines between two separators, with the line number of the first one.
struct Segment<'a> {
    first_line: usize,
    lines: Vec<&'a str>,
}

impl Segment<'_> {
    fn is_task(&self) -> bool {
        self.lines
            .iter()
            .any(|line| line.trim_start().starts_with("owner:") || HEADING_REGEX.is_match(line))
    }

    fn into_block(self, index: usize) -> TaskBlock {
        let owner = self
            .lines
            .iter()
            .find_map(|line| OWNER_REGEX.captures(line))
            .map(|caps| caps[1].to_string());

        // Report the first non-blank line so locations point at content.
        let line = self
            .lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .map_or(self.first_line, |offset| self.first_line + offset);

        TaskBlock {
            location: Location::Block(index),
            line,
            title: None,
            owner,
            has_acceptance: self.lines.iter().any(|l| ACCEPTANCE_REGEX.is_match(l)),
            has_validate: self.lines.iter().any(|l| VALIDATE_REGEX.is_match(l)),
        }
    }
}

fn split_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = vec![Segment {
        first_line: 1,
        lines: Vec::new(),
    }];

    for (index, line) in text.lines().enumerate() {
        if SEPARATOR_REGEX.is_match(line) {
            segments.push(Segment {
                first_line: index + 2,
                lines: Vec::new(),
            });
        } else if let Some(current) = segments.last_mut() {
            current.lines.push(line);
        }
    }

    segments
}
