//! Full-screen terminal chat client.
//!
//! Each submission runs as its own task; its outcome comes back over a
//! channel and settles the [`ChatSession`] on the UI loop.

pub mod view;

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::application::{ChatBackend, ChatSession};
use crate::domain::DomainError;

/// Result of one background request to the proxy.
pub type Outcome = Result<Option<String>, DomainError>;

/// What a key press asks the loop to do.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    Send(String),
}

/// Applies `key` to the session's input line.
///
/// Typing is ignored while a request is in flight, matching the disabled
/// input box of a busy session.
pub fn handle_key(session: &mut ChatSession, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ if session.is_busy() => KeyAction::None,
        KeyCode::Enter => match session.submit_pending() {
            Some(message) => KeyAction::Send(message),
            None => KeyAction::None,
        },
        KeyCode::Backspace => {
            session.pop_input();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            session.push_input(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Chat session plus the means to issue requests in the background.
///
/// Outcomes of spawned requests arrive on the receiver paired with the
/// sender given to [`ChatApp::new`] and are applied with [`ChatApp::settle`].
pub struct ChatApp {
    session: ChatSession,
    backend: Arc<dyn ChatBackend>,
    outcomes: mpsc::UnboundedSender<Outcome>,
}

impl ChatApp {
    pub fn new(backend: Arc<dyn ChatBackend>, outcomes: mpsc::UnboundedSender<Outcome>) -> Self {
        Self {
            session: ChatSession::new(),
            backend,
            outcomes,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Handles one key press. Returns `false` when the user asked to quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match handle_key(&mut self.session, key) {
            KeyAction::Quit => false,
            KeyAction::Send(message) => {
                let backend = Arc::clone(&self.backend);
                let outcomes = self.outcomes.clone();
                tokio::spawn(async move {
                    let outcome = backend.send(&message).await;
                    let _ = outcomes.send(outcome);
                });
                true
            }
            KeyAction::None => true,
        }
    }

    pub fn settle(&mut self, outcome: Outcome) {
        self.session.resolve(outcome);
    }
}

/// Runs the chat UI until the user quits.
pub async fn run(backend: Arc<dyn ChatBackend>) -> Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, backend).await;
    ratatui::restore();
    result
}

async fn event_loop(terminal: &mut DefaultTerminal, backend: Arc<dyn ChatBackend>) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
    let mut app = ChatApp::new(backend, tx);
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| view::render(frame, &app.session().snapshot()))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if !app.on_key(key) {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(outcome) = rx.recv() => app.settle(outcome),
        }
    }

    Ok(())
}
