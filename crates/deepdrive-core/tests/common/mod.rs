//! Common test utilities.
//!
//! A scripted prompter and an isolated home directory for bootstrap tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use deepdrive_core::{DirectoryPrompter, PromptError};
use tempfile::TempDir;

/// Prompter that replays canned answers and records every question.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl DirectoryPrompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(PromptError::Closed)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// A throwaway machine: a home directory inside a temp dir.
pub struct TestMachine {
    pub temp: TempDir,
    pub home: PathBuf,
}

impl TestMachine {
    pub fn new() -> Self {
        Self::with_home_named("home")
    }

    /// A machine whose home directory has the given final component.
    pub fn with_home_named(name: impl AsRef<std::ffi::OsStr>) -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        let home = temp.path().join(name.as_ref());
        std::fs::create_dir_all(&home).expect("create home");
        Self { temp, home }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join(".deepdrive")
    }

    pub fn pointer_file(&self) -> PathBuf {
        self.config_dir().join("deepdrive_dir")
    }

    pub fn executable(&self) -> PathBuf {
        self.path().join("bin").join("deepdrive")
    }
}
