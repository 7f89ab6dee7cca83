//! Terminal shell and entry point.
//!
//! This binary is the thin host around the eventscout library. It reads one
//! command per line from stdin, translates it into a library [`Event`], and
//! prints the re-rendered screen whenever the state changes.
//!
//! # Architecture
//!
//! The library never blocks; every side effect comes back as an [`Action`] that
//! the shell runs on the tokio runtime:
//!
//! ```text
//! ┌─────────────────────────┐
//! │  stdin lines            │──┐
//! └─────────────────────────┘  │   ┌──────────────┐   ┌────────────┐
//!                              ├──▶│ handle_event │──▶│ Actions    │
//! ┌─────────────────────────┐  │   └──────────────┘   └────────────┘
//! │  mpsc: timer, generator │──┘                            │
//! └─────────────────────────┘◀───── spawned tasks ──────────┘
//! ```
//!
//! # Action Execution
//!
//! - `ScheduleDrawerClear` → sleep, then `Event::DrawerClearElapsed`
//! - `GenerateDescription` → generator call, then `Event::DescriptionGenerated`
//! - `SubmitForModeration` → moderation queue, then `Event::SubmissionAccepted`
//!
//! # Commands
//!
//! - `search <q>`: Set the search query (`search` alone clears it)
//! - `category <name|All>`, `city <name|All>`, `clear`: Filters
//! - `home`, `mine`, `host`, `profile`: Navigation
//! - `open <id>`, `close`: Detail drawer
//! - `save [id]`, `rsvp [id]`: Toggles (default to the drawer's event)
//! - `set <field> <value>`, `generate`, `submit`, `cancel`: Organizer form
//! - `help`, `quit`

#![allow(clippy::multiple_crate_versions)]

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use eventscout::app::{AppState, DraftField};
use eventscout::domain::{CategoryFilter, CityFilter};
use eventscout::generator::GeminiClient;
use eventscout::submission::ModerationQueue;
use eventscout::{handle_event, Action, Config, Event, ViewMode};

const DEFAULT_COLUMNS: usize = 80;

const HELP: &str = "\
commands:
  search <q>            filter by title or city (empty clears)
  category <name|All>   filter by category
  city <name|All>       filter by city
  clear                 reset all filters
  home | mine | host    switch screens; profile toggles my events
  open <id> | close     event details
  save [id] | rsvp [id] toggle saved / going
  set <field> <value>   edit the organizer draft
  generate | submit     organizer actions; cancel leaves the form
  quit";

/// Parsed input line.
#[derive(Debug, PartialEq)]
enum Command {
    Dispatch(Event),
    Help,
    Quit,
}

/// Shell state wrapper.
///
/// Wraps the library's `AppState` with the host-side concerns: the generator
/// client, the moderation queue and the channel that spawned tasks report on.
struct Shell {
    app: AppState,
    generator: GeminiClient,
    queue: ModerationQueue,
    tx: UnboundedSender<Event>,
    columns: usize,
}

#[tokio::main]
async fn main() -> eventscout::Result<()> {
    let config = Config::load()?;
    eventscout::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let guard = span.enter();
    let app = eventscout::initialize(&config)?;
    let generator = GeminiClient::from_config(&config.generator)?;
    if !generator.has_api_key() {
        tracing::info!("no generator API key configured, descriptions will use a placeholder");
    }
    drop(guard);

    let (tx, rx) = mpsc::unbounded_channel();
    let mut shell = Shell {
        app,
        generator,
        queue: ModerationQueue::new(),
        tx,
        columns: terminal_columns(),
    };

    shell.print();
    shell.run(rx).await?;

    for submission in shell.queue.pending() {
        tracing::info!(ticket = submission.ticket, title = %submission.draft.title, "submission awaiting review");
    }
    tracing::debug!(pending_submissions = shell.queue.len(), "shutting down");
    Ok(())
}

impl Shell {
    async fn run(&mut self, mut rx: UnboundedReceiver<Event>) -> eventscout::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        return Ok(());
                    };
                    match parse_command(&line, &self.app) {
                        Ok(Some(Command::Dispatch(event))) => self.dispatch(&event),
                        Ok(Some(Command::Help)) => println!("{HELP}"),
                        Ok(Some(Command::Quit)) => return Ok(()),
                        Ok(None) => {}
                        Err(message) => println!("{message}"),
                    }
                }
                Some(event) = rx.recv() => self.dispatch(&event),
            }
        }
    }

    /// Handles one event, runs its actions and re-renders if needed.
    fn dispatch(&mut self, event: &Event) {
        let (should_render, actions) = handle_event(&mut self.app, event);
        tracing::debug!(
            action_count = actions.len(),
            should_render,
            "event handled"
        );

        for action in actions {
            self.execute_action(action);
        }

        if should_render {
            self.print();
        }
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::ScheduleDrawerClear { token, delay } => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Event::DrawerClearElapsed(token));
                });
            }
            Action::GenerateDescription {
                request,
                title,
                category,
                location,
            } => {
                let tx = self.tx.clone();
                let generator = self.generator.clone();
                tokio::spawn(async move {
                    let text = generator
                        .generate_description(&title, category, &location)
                        .await;
                    let _ = tx.send(Event::DescriptionGenerated { request, text });
                });
            }
            Action::SubmitForModeration(draft) => {
                let ticket = self.queue.submit(draft);
                let _ = self.tx.send(Event::SubmissionAccepted { ticket });
            }
        }
    }

    fn print(&self) {
        let screen = eventscout::ui::render(&self.app.compute_viewmodel(), self.columns);
        println!("{screen}");
    }
}

/// Width from `COLUMNS`, else 80.
fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&cols| cols > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}

/// Parses one input line. Blank lines yield `Ok(None)`; usage problems yield a
/// message for the user.
fn parse_command(line: &str, app: &AppState) -> Result<Option<Command>, String> {
    let line = line.trim_start();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line.trim_end(), ""), |(word, rest)| (word, rest));
    let arg = rest.trim();

    let event = match word {
        "" => return Ok(None),
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" | "q" => return Ok(Some(Command::Quit)),
        // Query text is kept as typed, spaces included.
        "search" => Event::SetSearchQuery(rest.trim_end_matches(['\r', '\n']).to_string()),
        "category" => match CategoryFilter::parse(arg) {
            Some(category) => Event::SelectCategory(category),
            None => return Err(format!("unknown category: {arg}")),
        },
        "city" if !arg.is_empty() => Event::SelectCity(CityFilter::parse(arg)),
        "clear" => Event::ClearFilters,
        "home" => Event::Navigate(ViewMode::Home),
        "mine" => Event::Navigate(ViewMode::MyEvents),
        "host" => Event::Navigate(ViewMode::Organizer),
        "profile" => Event::ToggleProfile,
        "open" if !arg.is_empty() => Event::ActivateEvent {
            event_id: arg.to_string(),
        },
        "close" => Event::CloseDrawer,
        "save" | "rsvp" => {
            let event_id = if arg.is_empty() {
                match app.selected_event() {
                    Some(event) => event.id.clone(),
                    None => return Err(format!("usage: {word} <id> (no event open)")),
                }
            } else {
                arg.to_string()
            };
            if word == "save" {
                Event::ToggleSaved { event_id }
            } else {
                Event::ToggleRsvp { event_id }
            }
        }
        "set" => {
            let (field, value) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
            let field = field.parse::<DraftField>()?;
            Event::UpdateDraft {
                field,
                value: value.trim().to_string(),
            }
        }
        "generate" => Event::RequestDescription,
        "submit" => Event::SubmitDraft,
        "cancel" => Event::CancelOrganizer,
        "city" | "open" => return Err(format!("usage: {word} <value>")),
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };

    Ok(Some(Command::Dispatch(event)))
}
