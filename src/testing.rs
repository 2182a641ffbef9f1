//! Test doubles for the storage and input seams

use crate::core::data::Catalog;
use crate::core::traits::{CatalogLoad, CatalogStorage, Prompter, SaveReport};
use crate::utils::error::{AppError, AppResult, IoAction};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Replays canned answers; running out of answers acts like an interrupt.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or(AppError::Interrupted)
    }
}

/// In-memory storage that records every save.
#[derive(Default)]
pub struct MemoryStorage {
    initial: Catalog,
    data_dir_exists: bool,
    fail_writes: bool,
    saves: Cell<usize>,
    last_saved: RefCell<Option<Catalog>>,
}

impl MemoryStorage {
    pub fn new(initial: Catalog) -> Self {
        Self {
            initial,
            data_dir_exists: true,
            ..Self::default()
        }
    }

    pub fn without_data_dir() -> Self {
        Self::default()
    }

    /// Every save reports a write failure for both documents.
    pub fn failing_writes(initial: Catalog) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(initial)
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn last_saved(&self) -> Option<Catalog> {
        self.last_saved.borrow().clone()
    }
}

impl CatalogStorage for MemoryStorage {
    fn ensure_storage_exists(&self) -> AppResult<()> {
        if self.data_dir_exists {
            Ok(())
        } else {
            Err(AppError::DataDirMissing(PathBuf::from("data")))
        }
    }

    fn load_catalog(&self) -> AppResult<CatalogLoad> {
        Ok(CatalogLoad {
            catalog: self.initial.clone(),
            missing: Vec::new(),
        })
    }

    fn save_catalog(&self, catalog: &Catalog) -> SaveReport {
        self.saves.set(self.saves.get() + 1);

        let paths = [
            PathBuf::from("data/tools_data.json"),
            PathBuf::from("data/tools_icons.json"),
        ];

        if self.fail_writes {
            let results = paths
                .into_iter()
                .map(|path| {
                    let err = AppError::PermissionDenied {
                        path: path.clone(),
                        action: IoAction::Write,
                    };
                    (path, Err(err))
                })
                .collect();
            return SaveReport { results };
        }

        *self.last_saved.borrow_mut() = Some(catalog.clone());
        SaveReport {
            results: paths.into_iter().map(|path| (path, Ok(()))).collect(),
        }
    }
}
