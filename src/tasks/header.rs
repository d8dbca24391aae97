//! Header convention: tasks start at `### T-ID: Title`.
//!
//! ```text
//! ### T-100: Fix thing
//! owner: alice
//!
//! Details...
//!
//! ### T-101: Other thing
//! owner: bot-7
//! ```
//!
//! A task's body runs until the next task header. The first line of the body
//! that matches `owner: <id>` is the owner; later owner lines are ignored.

use super::{TaskBlock, TaskDocumentParser};
use crate::config::TaskConvention;
use crate::validate::Location;
use regex::Regex;
use std::sync::LazyLock;

/// Task header: `### T-<ID>: <title>`.
static TASK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^###\s+(T-[A-Z0-9\-]+)\s*:\s*(.+?)\s*$").expect("Invalid task header regex")
});

/// Owner line (matched against the trimmed line).
static OWNER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^owner:\s*([a-z0-9][a-z0-9\-]*)\s*$").expect("Invalid owner regex")
});

/// Whether any line of `text` is a task header.
pub(super) fn has_task_header(text: &str) -> bool {
    text.lines().any(|line| TASK_HEADER_REGEX.is_match(line))
}

/// Parser for header-delimited tasks documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderParser;

impl TaskDocumentParser for HeaderParser {
    fn convention(&self) -> TaskConvention {
        TaskConvention::Header
    }

    fn parse(&self, text: &str) -> Vec<TaskBlock> {
        let mut blocks: Vec<TaskBlock> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if let Some(caps) = TASK_HEADER_REGEX.captures(line) {
                blocks.push(TaskBlock {
                    location: Location::Task(caps[1].to_string()),
                    line: index + 1,
                    title: Some(caps[2].to_string()),
                    owner: None,
                    has_acceptance: false,
                    has_validate: false,
                });
                continue;
            }

            // Lines before the first header belong to no task.
            let Some(current) = blocks.last_mut() else {
                continue;
            };

            if current.owner.is_some() {
                continue;
            }
            if let Some(caps) = OWNER_REGEX.captures(line.trim()) {
                current.owner = Some(caps[1].to_string());
            }
        }

        blocks
    }
}
