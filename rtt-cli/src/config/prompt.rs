//! First-run credential prompt.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::credentials::{CredentialStore, Credentials};
use super::error::ConfigError;

/// Where to register for an RTT API account.
const REGISTER_URL: &str = "https://api.rtt.io/";

/// Ask for a username and (hidden) password on the console, then save them.
pub fn prompt_for_credentials(store: &CredentialStore) -> Result<Credentials, ConfigError> {
    println!("RTT CLI Configuration");
    println!("Register for API credentials at: {REGISTER_URL}");
    println!();

    let username = read_line("Username: ").map_err(ConfigError::Prompt)?;

    print!("Password: ");
    io::stdout().flush().map_err(ConfigError::Prompt)?;
    let password = read_hidden().map_err(ConfigError::Prompt)?;
    // Raw mode swallowed the newline.
    println!();

    let credentials = Credentials::new(username.trim(), password);
    store.save(&credentials)?;

    println!("Credentials saved to {}", store.path().display());
    println!();

    Ok(credentials)
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
    }
    Ok(line)
}

/// Read a line with echo off. Raw mode is always restored.
fn read_hidden() -> io::Result<String> {
    terminal::enable_raw_mode()?;
    let result = read_hidden_raw();
    let restored = terminal::disable_raw_mode();
    let password = result?;
    restored?;
    Ok(password)
}

fn read_hidden_raw() -> io::Result<String> {
    let mut buffer = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match apply_key(&mut buffer, key) {
            HiddenInput::Pending => {}
            HiddenInput::Done => return Ok(buffer),
            HiddenInput::Cancelled => {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "cancelled"));
            }
        }
    }
}

/// State of hidden input after one key.
#[derive(Debug, PartialEq, Eq)]
enum HiddenInput {
    Pending,
    Done,
    Cancelled,
}

fn apply_key(buffer: &mut String, key: KeyEvent) -> HiddenInput {
    // Windows also reports key releases.
    if key.kind != KeyEventKind::Press {
        return HiddenInput::Pending;
    }

    match key.code {
        KeyCode::Enter => HiddenInput::Done,
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            HiddenInput::Cancelled
        }
        KeyCode::Esc => HiddenInput::Cancelled,
        KeyCode::Backspace => {
            buffer.pop();
            HiddenInput::Pending
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            HiddenInput::Pending
        }
        _ => HiddenInput::Pending,
    }
}
