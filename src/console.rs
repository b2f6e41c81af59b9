// Console layer: renders the menu, collects and validates input, and
// prints records and error reports.
//
// Input comes through the `Prompt` trait so the same console works with
// an interactive `dialoguer` prompt or any line-based reader (piped stdin,
// tests). Output goes to any `Write`.

use crate::model::{Record, Roster};
use crate::validate::{self, ValidationError};
use dialoguer::Input;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const MENU: &str = "
    ---- Course Registration Program ----
    Select from the following menu:
    1. Register a student for the course
    2. Show current data
    3. Save data to file
    4. Exit the program
    -------------------------------------
";

pub const INVALID_ENTRY: &str = "Invalid Entry.  See details below.";
pub const UNKNOWN_ERROR: &str = "Unknown Error. Please contact support.";

const RULE_WIDTH: usize = 50;

/// An error that can describe itself in the console's details block.
pub trait Diagnostic: std::error::Error {
    /// Short label naming the kind of error.
    fn category(&self) -> &'static str;
    /// What this kind of error means, independent of the instance.
    fn details(&self) -> &'static str;
}

/// Anything that can show an error message to the user.
pub trait Reporter {
    fn report_error(&mut self, message: &str, error: Option<&dyn Diagnostic>) -> io::Result<()>;
}

/// Source of one line of user input per call.
pub trait Prompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Interactive terminal prompt.
#[derive(Default)]
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        // Empty input must reach the validator.
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }
}

/// Line-based prompt over any reader. Used when stdin is not a terminal.
pub struct LinePrompt<R, W> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, echo: W) -> Self {
        LinePrompt { reader, echo }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.echo, "{}: ", prompt)?;
        self.echo.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// A menu selection. `Invalid` is the "0" sentinel: it matches no action,
/// so the loop just shows the menu again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Exact match on the four tokens; no trimming.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::Show),
            "3" => Some(MenuChoice::Save),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            MenuChoice::Register => "1",
            MenuChoice::Show => "2",
            MenuChoice::Save => "3",
            MenuChoice::Exit => "4",
            MenuChoice::Invalid => "0",
        }
    }
}

/// A line the prompt could not read, e.g. text that is not UTF-8.
#[derive(Debug, Error)]
#[error("Could not read input: {0}")]
pub struct InputError(#[source] io::Error);

impl Diagnostic for InputError {
    fn category(&self) -> &'static str {
        "InputError"
    }

    fn details(&self) -> &'static str {
        "The entered text could not be read and was ignored."
    }
}

enum Rejection {
    Invalid(ValidationError),
    Unreadable(InputError),
    Closed(io::Error),
}

impl From<ValidationError> for Rejection {
    fn from(e: ValidationError) -> Self {
        Rejection::Invalid(e)
    }
}

impl From<io::Error> for Rejection {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Rejection::Closed(e)
        } else {
            Rejection::Unreadable(InputError(e))
        }
    }
}

pub struct Console<P, W> {
    prompt: P,
    out: W,
}

impl<P: Prompt, W: Write> Console<P, W> {
    pub fn new(prompt: P, out: W) -> Self {
        Console { prompt, out }
    }

    /// Gives back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", MENU)?;
        writeln!(self.out)
    }

    /// Ask once for a menu option. Anything other than "1"-"4" is
    /// reported and comes back as `MenuChoice::Invalid`, and so does a
    /// line that could not be read.
    pub fn read_menu_choice(&mut self) -> io::Result<MenuChoice> {
        let token = match self.ask("Choose a menu option (1-4)") {
            Ok(token) => token,
            Err(rejection) => {
                self.reject(rejection)?;
                return Ok(MenuChoice::Invalid);
            }
        };
        match MenuChoice::parse(&token) {
            Some(choice) => Ok(choice),
            None => {
                debug!("Rejected menu input {:?}", token);
                self.reject(ValidationError::InvalidMenuChoice.into())?;
                Ok(MenuChoice::Invalid)
            }
        }
    }

    /// Prompt for the three fields, stopping at the first invalid or
    /// unreadable one. Returns `Ok(None)` when the entry was discarded
    /// (already reported).
    pub fn read_student_record(&mut self, roster: &mut Roster) -> io::Result<Option<Record>> {
        match self.prompt_record() {
            Ok(record) => {
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "You have registered {} {} for {}.",
                    record.first_name, record.last_name, record.course_name
                )?;
                roster.push(record.clone());
                Ok(Some(record))
            }
            Err(rejection) => {
                self.reject(rejection)?;
                Ok(None)
            }
        }
    }

    fn prompt_record(&mut self) -> Result<Record, Rejection> {
        let first_name = self.ask("Enter the student's first name")?;
        validate::validate_first_name(&first_name)?;
        let last_name = self.ask("Enter the student's last name")?;
        validate::validate_last_name(&last_name)?;
        let course_name = self.ask("Enter the course name")?;
        validate::validate_course_name(&course_name)?;
        Ok(Record {
            first_name,
            last_name,
            course_name,
        })
    }

    fn ask(&mut self, prompt: &str) -> Result<String, Rejection> {
        self.prompt.read_line(prompt).map_err(Rejection::from)
    }

    /// Report a rejected input. Only a closed input stream is passed back
    /// as an error.
    fn reject(&mut self, rejection: Rejection) -> io::Result<()> {
        match rejection {
            Rejection::Closed(e) => Err(e),
            Rejection::Invalid(e) => {
                debug!("Input rejected: {e}");
                self.report_error(INVALID_ENTRY, Some(&e))
            }
            Rejection::Unreadable(e) => {
                info!("Input unreadable: {e}");
                self.report_error(UNKNOWN_ERROR, Some(&e))
            }
        }
    }

    pub fn show_roster(&mut self, roster: &Roster) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "The current data is: ")?;
        for record in roster {
            writeln!(self.out, "{}", record)?;
        }
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out)
    }

    /// Print a one-line notice such as a save confirmation.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }
}

impl<P: Prompt, W: Write> Reporter for Console<P, W> {
    fn report_error(&mut self, message: &str, error: Option<&dyn Diagnostic>) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", message)?;
        writeln!(self.out)?;
        if let Some(e) = error {
            writeln!(self.out, "--- Error Details ---")?;
            writeln!(self.out, "{}", e)?;
            writeln!(self.out, "{}", e.details())?;
            writeln!(self.out, "{}", e.category())?;
        }
        Ok(())
    }
}
