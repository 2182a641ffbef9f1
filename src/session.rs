//! Interactive session
//!
//! The session owns both in-memory documents for the lifetime of the
//! process and drives the menu as an explicit state machine. Every
//! successful mutation is followed by a full save of both documents.

use crate::commands::{handle_add_category, handle_add_tool};
use crate::core::data::Catalog;
use crate::core::traits::{CatalogStorage, Prompter};
use crate::utils::error::{AppError, AppResult, handle_flow, report_error};
use crate::utils::{FlowResult, OutputStyle, print_error, print_info, print_success, print_warning};

pub const TITLE: &str = "ASDK Toolkit Data Manager";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    AwaitingCategoryInput,
    AwaitingToolInput,
    Exit,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exited,
    Interrupted,
}

pub struct Session<S, P> {
    storage: S,
    prompter: P,
    catalog: Catalog,
    default_banner: String,
}

impl<S: CatalogStorage, P: Prompter> Session<S, P> {
    /// Check the data directory and load both documents.
    ///
    /// Any error here is fatal: continuing would risk saving an empty or
    /// partial catalog over the files on disk.
    pub fn start(storage: S, prompter: P, default_banner: impl Into<String>) -> AppResult<Self> {
        storage.ensure_storage_exists()?;

        print_info("Loading data files...");
        let load = storage.load_catalog()?;
        for path in &load.missing {
            print_warning(&format!(
                "'{}' not found. A new one will be created upon saving.",
                path.display()
            ));
        }
        print_success(&format!(
            "Data loaded successfully. {} categories, {} tools.",
            load.catalog.category_count(),
            load.catalog.tool_count()
        ));

        Ok(Self::with_catalog(storage, prompter, load.catalog, default_banner))
    }

    pub fn with_catalog(
        storage: S,
        prompter: P,
        catalog: Catalog,
        default_banner: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            prompter,
            catalog,
            default_banner: default_banner.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Run the menu until the operator exits or interrupts.
    pub fn run(&mut self) -> AppResult<SessionEnd> {
        println!();
        OutputStyle::print_banner(TITLE);

        let mut state = SessionState::MainMenu;
        while state != SessionState::Exit {
            state = match self.step(state) {
                Ok(next) => next,
                Err(AppError::Interrupted) => {
                    report_error(&AppError::Interrupted);
                    return Ok(SessionEnd::Interrupted);
                }
                Err(e) => return Err(e),
            };
        }

        Ok(SessionEnd::Exited)
    }

    /// Perform one transition.
    pub fn step(&mut self, state: SessionState) -> AppResult<SessionState> {
        tracing::trace!(?state, "session step");

        match state {
            SessionState::MainMenu => self.main_menu(),
            SessionState::AwaitingToolInput => {
                let flow = handle_add_tool(&mut self.prompter, &mut self.catalog, &self.default_banner)?;
                self.finish(flow);
                Ok(SessionState::MainMenu)
            }
            SessionState::AwaitingCategoryInput => {
                let flow = handle_add_category(&mut self.prompter, &mut self.catalog)?;
                self.finish(flow);
                Ok(SessionState::MainMenu)
            }
            SessionState::Exit => Ok(SessionState::Exit),
        }
    }

    fn main_menu(&mut self) -> AppResult<SessionState> {
        println!("\n{}", OutputStyle::header("Menu:"));
        println!("1. Add New Tool");
        println!("2. Add New Category");
        println!("3. Exit");

        let choice = self.prompter.read_line("Enter choice (1-3): ")?;
        match choice.as_str() {
            "1" => Ok(SessionState::AwaitingToolInput),
            "2" => Ok(SessionState::AwaitingCategoryInput),
            "3" => {
                println!("Bye!");
                Ok(SessionState::Exit)
            }
            _ => {
                print_error("Invalid choice.");
                Ok(SessionState::MainMenu)
            }
        }
    }

    fn finish(&self, flow: FlowResult) {
        let changed = flow.is_success();
        handle_flow(&flow);
        if changed {
            self.save_all();
        }
    }

    /// Write both documents and report each result; failures keep the session alive.
    fn save_all(&self) {
        let report = self.storage.save_catalog(&self.catalog);

        for (path, result) in &report.results {
            match result {
                Ok(()) => print_success(&format!("Successfully saved to '{}'.", path.display())),
                Err(e) => report_error(e),
            }
        }

        if !report.is_complete() {
            print_warning("The latest changes are only held in memory until a save succeeds.");
        }
    }
}
