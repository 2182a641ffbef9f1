use crate::core::traits::Prompter;
use crate::utils::error::{AppError, AppResult, report_error};
use crate::utils::output::print_error;
use crossterm::{
    cursor, execute, style,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{self, ClearType},
};
use std::io::{self, IsTerminal, Write};

/// Reads operator input from the process terminal.
///
/// On a TTY the line is read in raw mode so Ctrl+C and Ctrl+D arrive as key
/// events rather than signals. Otherwise stdin is read line by line and end
/// of input counts as an interrupt.
pub struct TerminalPrompter {
    raw: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            raw: io::stdin().is_terminal(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        if self.raw {
            read_line_raw(prompt)
        } else {
            read_line_plain(prompt)
        }
    }
}

/// Route SIGINT through the same farewell as an interrupt at a prompt.
///
/// Raw-mode reads see Ctrl+C as a key press, so this only fires for piped
/// input or a signal sent from outside.
pub fn install_interrupt_handler() -> AppResult<()> {
    ctrlc::set_handler(|| {
        let _ = terminal::disable_raw_mode();
        report_error(&AppError::Interrupted);
        let _ = io::stdout().flush();
        std::process::exit(0);
    })
    .map_err(|e| AppError::Terminal(format!("Failed to install interrupt handler: {}", e)))
}

fn read_line_plain(prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(AppError::Interrupted);
    }

    Ok(input.trim().to_string())
}

/// What a single key press did to the line being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Submit,
    Interrupt,
    Inserted(char),
    Erased,
    Ignored,
}

fn apply_key(input: &mut String, key: KeyEvent) -> KeyOutcome {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if control => KeyOutcome::Interrupt,
        KeyCode::Char('d') if control && input.is_empty() => KeyOutcome::Interrupt,
        // Other control chords (Ctrl+U, Ctrl+W, ...) are not line edits we support.
        KeyCode::Char(_) if control => KeyOutcome::Ignored,
        KeyCode::Char(c) => {
            input.push(c);
            KeyOutcome::Inserted(c)
        }
        KeyCode::Backspace => match input.pop() {
            Some(_) => KeyOutcome::Erased,
            None => KeyOutcome::Ignored,
        },
        KeyCode::Enter => KeyOutcome::Submit,
        _ => KeyOutcome::Ignored,
    }
}

fn read_line_raw(prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    terminal::enable_raw_mode()?;

    let result = (|| -> AppResult<String> {
        let mut stdout = io::stdout();
        let mut input = String::new();

        loop {
            let key = match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => key,
                _ => continue,
            };

            match apply_key(&mut input, key) {
                KeyOutcome::Submit => break,
                KeyOutcome::Interrupt => return Err(AppError::Interrupted),
                KeyOutcome::Inserted(c) => execute!(stdout, style::Print(c))?,
                KeyOutcome::Erased => execute!(
                    stdout,
                    cursor::MoveLeft(1),
                    terminal::Clear(ClearType::UntilNewLine)
                )?,
                KeyOutcome::Ignored => {}
            }
        }

        Ok(input.trim().to_string())
    })();

    let _ = terminal::disable_raw_mode();
    println!();
    result
}

/// Re-prompt until a non-empty value is entered.
pub fn prompt_required<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> AppResult<String> {
    loop {
        let value = prompter.read_line(prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        print_error("Error: This field cannot be empty.");
    }
}

/// A single read; empty input is allowed and means "use the default".
pub fn prompt_optional<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> AppResult<String> {
    prompter.read_line(prompt)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    NotANumber,
    OutOfRange,
}

/// Parse a 1-based selection among `count` items.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(SelectionError::NotANumber);
    }

    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        // Digits only, so a parse failure is an overflow.
        _ => Err(SelectionError::OutOfRange),
    }
}

/// Re-prompt until a valid 1-based selection among `count` items is entered.
pub fn prompt_selection<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    count: usize,
) -> AppResult<usize> {
    loop {
        let input = prompt_required(prompter, prompt)?;
        match parse_selection(&input, count) {
            Ok(position) => return Ok(position),
            Err(SelectionError::NotANumber) => print_error("Please enter a number."),
            Err(SelectionError::OutOfRange) => print_error("Invalid selection. Try again."),
        }
    }
}
