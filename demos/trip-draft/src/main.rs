//! Trip Draft Demo
//!
//! Plays a full draft from recommendations alone: each round the sending
//! side's suggested pairing is answered by the other side's suggested
//! counter, and the match locks in. Pass a config path to use your own
//! rosters; otherwise the built-in trip rosters are used.
//!
//! Run with: cargo run -p trip-draft [-- draft.toml]

use std::error::Error;
use std::process::ExitCode;

use owo_colors::OwoColorize;

use fairway::prelude::*;
use fairway::{cross_evenness, stroke_advantage, ConfigError};

fn main() -> ExitCode {
    fairway_console::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bright_red());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    let mut session = DraftSession::from_config(&config)?;
    let weight = config.weight()?;

    println!(
        "{} {} vs {} - {} draft, balance weight {}\n",
        "▸".bright_green(),
        config.team_a.name.bright_cyan(),
        config.team_b.name.bright_cyan(),
        session.format(),
        weight.value(),
    );

    while !session.round_state().complete {
        let sender = session.sending_side();
        let first = session.recommend_first(sender, weight)?;
        let second = session.recommend_counter(sender.opponent(), &first, weight)?;
        session.lock_in(sender, first, second)?;
    }

    print_card(&session, &config);
    Ok(())
}

fn load_config() -> Result<DraftConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => DraftConfig::load(path),
        None => Ok(DraftConfig::default()),
    }
}

fn print_card(session: &DraftSession, config: &DraftConfig) {
    println!("\n{}", "Final matchup card".bright_white().bold());
    for record in session.history() {
        println!(
            "  {} {} sent {} | {} countered {}",
            format!("[{}]", record.round).bright_green(),
            team_name(config, record.first_side).bright_cyan(),
            record.first,
            team_name(config, record.second_side).bright_cyan(),
            record.second,
        );
        if let (Ok(even), Ok(adv)) = (
            cross_evenness(record.first.players(), record.second.players()),
            stroke_advantage(record.second.players(), record.first.players()),
        ) {
            println!(
                "      evenness {:.3}, {:+.1} strokes to {}",
                even,
                adv,
                team_name(config, record.second_side),
            );
        }
    }
}

fn team_name(config: &DraftConfig, side: Side) -> &str {
    match side {
        Side::A => &config.team_a.name,
        Side::B => &config.team_b.name,
    }
}
