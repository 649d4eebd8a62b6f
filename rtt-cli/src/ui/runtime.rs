//! Terminal setup and the message loop that drives a [`Model`].
//!
//! Input is read on a dedicated thread and forwarded over a channel, so the
//! loop only ever waits in one place. A `Search` command becomes a tokio
//! task that posts exactly one `SearchComplete` back into the same channel.

use std::io::{self, Stdout};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::Station;
use crate::rtt::{RttApi, fetch_departures};

use super::error::UiError;
use super::event::{Command, Message, Model};

/// How long the input thread blocks before checking whether to stop.
const INPUT_POLL: Duration = Duration::from_millis(250);

const CHANNEL_CAPACITY: usize = 64;

/// Puts the terminal back when dropped.
///
/// Created as soon as raw mode is on, so any later setup failure still
/// restores the terminal.
struct ScreenGuard {
    restore: fn(),
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Raw mode plus alternate screen for as long as it lives.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _screen: ScreenGuard,
}

impl TerminalSession {
    fn enter() -> Result<Self, UiError> {
        enable_raw_mode()?;
        let screen = ScreenGuard {
            restore: restore_screen,
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            _screen: screen,
        })
    }
}

/// Run `model` full-screen until it asks to quit.
pub async fn run<M, A>(mut model: M, api: Arc<A>) -> Result<(), UiError>
where
    M: Model,
    A: RttApi + Send + Sync + 'static,
{
    let mut session = TerminalSession::enter()?;

    let (tx, mut rx) = mpsc::channel(CHANNEL_CAPACITY);
    spawn_input_thread(tx.clone());

    let size = session.terminal.size()?;
    let mut pending = vec![Message::Resize {
        width: size.width,
        height: size.height,
    }];

    if let Some(command) = model.init() {
        if execute_command(command, &api, &tx).is_break() {
            return Ok(());
        }
    }

    loop {
        for message in pending.drain(..) {
            if let Some(command) = model.update(message) {
                if execute_command(command, &api, &tx).is_break() {
                    return Ok(());
                }
            }
        }

        session.terminal.draw(|frame| model.render(frame))?;

        match rx.recv().await {
            Some(message) => pending.push(message),
            None => {
                debug!("message channel closed");
                return Ok(());
            }
        }
    }
}

/// Carry out a command. `Break` means stop the loop.
fn execute_command<A>(
    command: Command,
    api: &Arc<A>,
    tx: &mpsc::Sender<Message>,
) -> ControlFlow<()>
where
    A: RttApi + Send + Sync + 'static,
{
    match command {
        Command::Quit => ControlFlow::Break(()),
        Command::Search { from, to } => {
            dispatch_search(Arc::clone(api), from, to, tx.clone());
            ControlFlow::Continue(())
        }
    }
}

/// Fetch departures in the background and post the outcome as one message.
pub fn dispatch_search<A>(
    api: Arc<A>,
    from: Station,
    to: Station,
    tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    A: RttApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let outcome = fetch_departures(api.as_ref(), from.code, to.code).await;
        if let Err(err) = &outcome {
            warn!(from = from.code, to = to.code, error = %err, "search failed");
        }
        if tx.send(Message::SearchComplete(outcome)).await.is_err() {
            debug!("search finished after the UI closed");
        }
    })
}

fn spawn_input_thread(tx: mpsc::Sender<Message>) {
    thread::spawn(move || {
        loop {
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) if tx.is_closed() => break,
                Ok(false) => continue,
                Err(err) => {
                    warn!(error = %err, "terminal input poll failed");
                    break;
                }
            }

            let message = match event::read() {
                Ok(Event::Key(key)) => Message::Key(key),
                Ok(Event::Resize(width, height)) => Message::Resize { width, height },
                Ok(_) => continue,
                Err(err) => {
                    warn!(error = %err, "terminal input read failed");
                    break;
                }
            };

            if tx.blocking_send(message).is_err() {
                break;
            }
        }
    });
}
