//! Interactive operator console.
//!
//! Every input line is one press of the respawn button (or a move / quit
//! command). The display is written out after each command that succeeds.

use std::io::{BufRead, Write};

use thiserror::Error;

use radarscope_core::aircraft::AircraftId;
use radarscope_core::commands::DisplayCommand;
use radarscope_sim::{CommandOutcome, SpawnSettings, TrafficScope};
use radarscope_svg::SvgSurface;

use crate::outputs::OutputPaths;
use crate::AppError;

const USAGE: &str = "commands: <count> | respawn [count] | move <id> <x> <y> | help | quit";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("unknown command '{0}'; type 'help' for usage")]
    UnknownCommand(String),
    #[error("usage: move <id> <x> <y>")]
    InvalidMove,
}

/// What a console line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Command(DisplayCommand),
    Help,
}

/// Parse one console line. An empty line is a press with the default count.
pub fn parse_line(line: &str, settings: &SpawnSettings) -> Result<ConsoleInput, ConsoleError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(ConsoleInput::Command(DisplayCommand::Respawn {
            count: settings.default_count,
        }));
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => DisplayCommand::Quit,
        "help" | "?" => return Ok(ConsoleInput::Help),
        "respawn" | "spawn" => DisplayCommand::Respawn {
            count: words
                .next()
                .map_or(settings.default_count, |w| settings.parse_count(w)),
        },
        "move" => {
            let args: Vec<&str> = words.collect();
            let [id, x, y] = args.as_slice() else {
                return Err(ConsoleError::InvalidMove);
            };
            match (id.parse::<AircraftId>(), x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(id), Ok(x), Ok(y)) => DisplayCommand::MoveAircraft { id, x, y },
                _ => return Err(ConsoleError::InvalidMove),
            }
        }
        _ if first.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') => {
            DisplayCommand::Respawn {
                count: settings.parse_count(line),
            }
        }
        _ => return Err(ConsoleError::UnknownCommand(first.to_string())),
    };
    Ok(ConsoleInput::Command(command))
}

/// Run the console until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    scope: &mut TrafficScope<SvgSurface>,
    input: R,
    mut out: W,
    outputs: &OutputPaths,
) -> Result<(), AppError> {
    writeln!(out, "{USAGE}").map_err(AppError::Console)?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line.map_err(AppError::Console)?;
        match parse_line(&line, scope.settings()) {
            Ok(ConsoleInput::Help) => {
                writeln!(out, "{USAGE}").map_err(AppError::Console)?;
            }
            Ok(ConsoleInput::Command(command)) => match scope.apply(command) {
                Ok(CommandOutcome::Quit) => {
                    log::info!("Console: quit requested");
                    return Ok(());
                }
                Ok(CommandOutcome::Continue) => {
                    outputs.write(scope)?;
                    writeln!(out, "{} aircraft on display", scope.aircraft().len())
                        .map_err(AppError::Console)?;
                }
                Err(e) => log::warn!("Console: {e}"),
            },
            Err(e) => log::warn!("Console: {e}"),
        }
        prompt(&mut out)?;
    }

    log::info!("Console: end of input");
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<(), AppError> {
    write!(out, "> ").and_then(|_| out.flush()).map_err(AppError::Console)
}
