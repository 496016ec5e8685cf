// src/tui/runner.rs
// =============================================================================
// The dashboard's event loop.
//
// The loop owns `AppState`. Each iteration draws, then waits for either a
// terminal event or a message from a finished fetch task. Fetches run as
// spawned tasks and report back over an mpsc channel, so the UI never blocks
// on the network.
// =============================================================================

use anyhow::{Context, Result};
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::app::{update, AppState, Message, UpdateAction};
use crate::github::RepoFetcher;

use super::{event, render, terminal};

/// Run the interactive dashboard until the user quits
pub async fn run(mut state: AppState, fetcher: RepoFetcher, initial_user: Option<String>) -> Result<()> {
    let mut term = terminal::enter();

    let result = run_loop(&mut term, &mut state, fetcher, initial_user).await;

    terminal::leave();
    info!("dashboard closed");
    result
}

async fn run_loop(
    term: &mut DefaultTerminal,
    state: &mut AppState,
    fetcher: RepoFetcher,
    initial_user: Option<String>,
) -> Result<()> {
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(64);
    let mut events = EventStream::new();

    if let Some(user) = initial_user {
        process_message(state, Message::SetUsername(user), &fetcher, &msg_tx);
        process_message(state, Message::SubmitSearch, &fetcher, &msg_tx);
    }

    while !state.should_quit() {
        term.draw(|frame| render::view(frame, state))
            .context("Failed to draw dashboard")?;

        let message = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(ev)) => event::to_message(ev),
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            },
            Some(msg) = msg_rx.recv() => Some(msg),
        };

        if let Some(message) = message {
            process_message(state, message, &fetcher, &msg_tx);
        }
    }

    Ok(())
}

/// Runs `update` until no follow-up message remains, performing any
/// requested actions along the way
fn process_message(
    state: &mut AppState,
    message: Message,
    fetcher: &RepoFetcher,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, fetcher, msg_tx);
        }
        next = result.message;
    }
}

fn handle_action(action: UpdateAction, fetcher: &RepoFetcher, msg_tx: &mpsc::Sender<Message>) {
    match action {
        UpdateAction::Fetch(ticket) => {
            let fetcher = fetcher.clone();
            let msg_tx = msg_tx.clone();
            tokio::spawn(async move {
                debug!(ticket = ticket.id, user = %ticket.username, "fetch started");
                let result = fetcher.fetch_repositories(&ticket.username).await;
                // The receiver is gone only when the dashboard has exited
                let _ = msg_tx.send(Message::FetchCompleted { ticket, result }).await;
            });
        }
    }
}
