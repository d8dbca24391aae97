use std::path::Path;
use tempfile::TempDir;

/// Registry used by fixtures: `alice` and `bot-7`.
pub(crate) const REGISTRY_YAML: &str = "agents:\n  - id: alice\n    role: author\n  - id: bot-7\n";

pub(crate) const ROUTING_YAML: &str = "rules:\n  - match: specs/**\n    agent: alice\n";

/// A throwaway repository tree rooted in a temp directory.
pub(crate) struct RepoFixture {
    dir: TempDir,
}

impl RepoFixture {
    /// An empty repository.
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A repository with the fixture registry and a valid routing file.
    pub(crate) fn governed() -> Self {
        let repo = Self::new();
        repo.write("agents/registry.yml", REGISTRY_YAML);
        repo.write("agents/routing.yml", ROUTING_YAML);
        repo
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the root, creating parent directories.
    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub(crate) fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.dir.path().join(relative)).unwrap();
    }

    pub(crate) fn remove(&self, relative: &str) {
        std::fs::remove_file(self.dir.path().join(relative)).unwrap();
    }

    /// Write a complete feature directory with the given tasks document.
    pub(crate) fn feature(&self, name: &str, tasks: &str) {
        self.write(&format!("specs/{}/spec.md", name), "# Spec\n");
        self.write(&format!("specs/{}/plan.md", name), "# Plan\n");
        self.write(&format!("specs/{}/tasks.md", name), tasks);
    }
}
