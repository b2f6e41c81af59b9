// Controller: owns the roster and runs the menu loop, handing each
// choice to the console or to storage.

use crate::config::Config;
use crate::console::{Console, MenuChoice, Prompt};
use crate::model::Roster;
use crate::storage;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::io::Write;

pub const SAVED_NOTICE: &str = "INFO: Registrations have been saved.";
pub const EXIT_NOTICE: &str = "Program Ended.";

/// Whether the loop keeps going after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Application context: configuration, the in-memory roster and the
/// console it talks through.
pub struct App<P, W> {
    config: Config,
    roster: Roster,
    console: Console<P, W>,
}

impl<P: Prompt, W: Write> App<P, W> {
    /// Load the roster from the configured file. A missing or unreadable
    /// file is reported and the roster starts empty.
    pub fn start(config: Config, mut console: Console<P, W>) -> Result<Self> {
        let roster = storage::load(&config.data_file, Roster::new(), &mut console)
            .context("Failed to write to the console")?;
        Ok(App {
            config,
            roster,
            console,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_console(self) -> Console<P, W> {
        self.console
    }

    /// Show the menu and dispatch choices until the user exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.show_menu().context("Failed to show the menu")?;
            let choice = self
                .console
                .read_menu_choice()
                .context("Failed to read the menu choice")?;
            if self.dispatch(choice)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!("Menu choice {}", choice.as_token());
        match choice {
            MenuChoice::Register => {
                self.console
                    .read_student_record(&mut self.roster)
                    .context("Failed to read the registration")?;
            }
            MenuChoice::Show => {
                self.console
                    .show_roster(&self.roster)
                    .context("Failed to show the roster")?;
            }
            MenuChoice::Save => {
                let spinner = saving_spinner();
                let saved = storage::save(&self.config.data_file, &self.roster, &mut self.console);
                spinner.finish_and_clear();
                saved.context("Failed to write to the console")?;
                self.console.notice(SAVED_NOTICE)?;
            }
            MenuChoice::Exit => {
                self.console.notice(EXIT_NOTICE)?;
                return Ok(Flow::Exit);
            }
            MenuChoice::Invalid => {}
        }
        Ok(Flow::Continue)
    }
}

// Drawn on stderr; hidden automatically when stderr is not a terminal.
fn saving_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message("Saving registrations...");
    spinner
}
