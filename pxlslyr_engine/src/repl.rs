//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that drive a [`QuestSession`] and fill the
//! [`View`] for each turn.

mod input;
pub mod movement;
pub mod system;

pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::quest::QuestSession;
use crate::style::GameStyle;
use crate::{View, ViewItem};

use anyhow::Result;
use colored::Colorize;
use log::info;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Prompt showing the current stage and health.
pub fn prompt_text(session: &QuestSession) -> String {
    let snap = session.snapshot();
    format!("\n[Stage: {}|HP: {}/{}]>> ", snap.stage, snap.health, snap.max_health)
}

/// Run the main read–eval–print loop until the user quits or input runs out.
///
/// # Errors
/// - Propagates failures from handlers.
pub fn run_repl(session: &mut QuestSession) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();

    look_handler(session, &mut view);
    view.push(ViewItem::EngineMessage(
        "Type `help` for commands. Move with the arrow words or w/a/s/d.".to_string(),
    ));
    view.flush();

    let mut turn = 0_u32;
    loop {
        let prompt = prompt_text(session).prompt_style().to_string();
        let input_event = if let Ok(event) = input_manager.read_line(&prompt) {
            event
        } else {
            view.push(ViewItem::Error("Failed to read input. Try again.".red().to_string()));
            view.flush();
            continue;
        };

        let input = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };
        if input.trim().is_empty() {
            continue;
        }

        turn += 1;
        info!("================> BEGIN TURN {turn} <================");
        let control = match parse_command(&input) {
            Command::Go(direction) => {
                move_handler(session, &mut view, direction);
                ReplControl::Continue
            },
            Command::Look => {
                look_handler(session, &mut view);
                ReplControl::Continue
            },
            Command::Status => {
                status_handler(session, &mut view);
                ReplControl::Continue
            },
            Command::Cast => {
                cast_handler(session, &mut view);
                ReplControl::Continue
            },
            Command::Quest => {
                quest_flow_handler(session, &mut view);
                ReplControl::Continue
            },
            Command::Help => {
                help_handler(&mut view);
                ReplControl::Continue
            },
            Command::Quit => quit_handler(session, &mut view),
            Command::Unknown(text) => {
                view.push(ViewItem::Error(format!("\"{text}\"? Didn't quite catch that. Try `help`.")));
                ReplControl::Continue
            },
        };
        view.flush();
        if let ReplControl::Quit = control {
            break;
        }
    }
    Ok(())
}
