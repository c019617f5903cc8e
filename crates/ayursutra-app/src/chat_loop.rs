//! Terminal front-end for a chat session.
//!
//! Input lines are read on the main task; submissions run on their own
//! tasks so commands such as `/close` stay responsive while a reply is
//! outstanding. Bot messages are printed by a task subscribed to the
//! session's events. On exit the loop waits for outstanding submissions
//! and lets the printer drain before returning.

use ayursutra_ai::{ChatSession, IgnoredReason, SubmitOutcome};
use ayursutra_common::{AyurError, SessionEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};
use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, warn};

use crate::command::{Command, HELP};
use crate::render;

fn print_event(event: &SessionEvent, bot_name: &str) {
    match event {
        SessionEvent::MessageAppended(message) if message.is_bot() => {
            println!("{}", render::message_line(message, bot_name));
        }
        SessionEvent::Closed => println!("(assistant closed)"),
        _ => {}
    }
}

/// Print bot messages as they are appended, until `shutdown` fires. Events
/// already queued at shutdown are still printed.
fn spawn_printer(
    mut rx: broadcast::Receiver<SessionEvent>,
    bot_name: String,
    mut shutdown: oneshot::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                event = rx.recv() => match event {
                    Ok(event) => print_event(&event, &bot_name),
                    Err(RecvError::Lagged(skipped)) => debug!(skipped, "printer lagged"),
                    Err(RecvError::Closed) => return,
                },
                _ = &mut shutdown => break,
            }
        }
        loop {
            match rx.try_recv() {
                Ok(event) => print_event(&event, &bot_name),
                Err(TryRecvError::Lagged(skipped)) => debug!(skipped, "printer lagged"),
                Err(_) => break,
            }
        }
    })
}

/// Run the interactive loop over `input` until EOF or `/quit`.
///
/// Returns once every accepted submission has its reply appended and
/// printed.
pub async fn run<R>(session: ChatSession, input: R, bot_name: &str) -> Result<(), AyurError>
where
    R: AsyncBufRead + Unpin,
{
    let (stop_printer, printer_stop) = oneshot::channel();
    let printer = spawn_printer(session.subscribe(), bot_name.to_string(), printer_stop);
    let mut submissions = JoinSet::new();
    session.open();
    println!("Type /help for commands.");

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        while submissions.try_join_next().is_some() {}

        match Command::parse(&line) {
            Command::Say(text) => {
                if !session.is_open() {
                    println!("The assistant is closed. Type /open to start a conversation.");
                    continue;
                }
                let session = session.clone();
                submissions.spawn(async move {
                    let outcome = session.submit(&text).await;
                    if outcome == SubmitOutcome::Ignored(IgnoredReason::AwaitingResponse) {
                        println!("(still waiting for the previous reply)");
                    }
                });
            }
            Command::Open => session.open(),
            Command::Close => session.close(),
            Command::Toggle => session.toggle(),
            Command::Usage => println!("{}", render::usage_line(&session.usage())),
            Command::History => {
                for message in session.transcript() {
                    println!("{}", render::message_line(&message, bot_name));
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown(cmd) => println!("Unknown command {cmd}. Type /help."),
        }
    }

    if !submissions.is_empty() {
        debug!(outstanding = submissions.len(), "waiting for outstanding replies");
    }
    while let Some(joined) = submissions.join_next().await {
        if let Err(e) = joined {
            warn!("submission task failed: {e}");
        }
    }

    session.close();
    let _ = stop_printer.send(());
    if let Err(e) = printer.await {
        warn!("printer task failed: {e}");
    }
    Ok(())
}

/// Open the session, ask one question, and print the final bot message.
pub async fn ask_once(session: &ChatSession, question: &str) -> SubmitOutcome {
    session.open();
    let outcome = session.submit(question).await;
    if !matches!(outcome, SubmitOutcome::Ignored(_)) {
        if let Some(reply) = session.transcript().last() {
            println!("{}", reply.text);
        }
    }
    outcome
}
