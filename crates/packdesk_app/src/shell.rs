//! Line-oriented front end: presentation plumbing around the core state
//! machine. All behavior lives in `packdesk_core`; this module only turns
//! typed commands into messages and prints the view model.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use packdesk_core::{update, AppState, AppViewModel, Msg, OperationStatus};

use crate::config::Config;
use crate::effects::EffectRunner;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(config.client_settings(), msg_tx)
        .map_err(|err| anyhow::anyhow!(err.message))?;

    // Blocking stdin reader on its own thread; EOF ends the session.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut state = AppState::new();

    println!("packdesk console - type 'help' for commands.");

    // The initial pack-size fetch runs exactly once, at startup.
    dispatch(&mut state, Msg::LoadRequested, &runner);

    loop {
        // Apply resolved remote results first so the next render is current.
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, &runner);
        }
        if state.consume_dirty() {
            render(&state.view());
        }

        match line_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(line) => {
                if !handle_line(line.trim(), &mut state, &runner) {
                    return Ok(());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
}

/// Returns false when the session should end.
fn handle_line(line: &str, state: &mut AppState, runner: &EffectRunner) -> bool {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return true;
    };

    match command {
        "help" => print_help(),
        "show" => render(&state.view()),
        "add" => dispatch(state, Msg::EntryAdded, runner),
        "edit" => match parse_position(words.next()) {
            Some(position) => {
                let text = words.next().unwrap_or("").to_string();
                dispatch(state, Msg::EntryEdited { position, text }, runner);
            }
            None => println!("usage: edit <slot> <value>"),
        },
        "del" => match parse_position(words.next()) {
            Some(position) => dispatch(state, Msg::EntryDeleted { position }, runner),
            None => println!("usage: del <slot>"),
        },
        "save" => {
            // Advisory gate: only one save may be in flight at a time.
            if state.save_status().is_in_flight() {
                println!("A save is already in flight.");
            } else {
                dispatch(state, Msg::SaveRequested, runner);
            }
        }
        "amount" => {
            let text = words.next().unwrap_or("").to_string();
            dispatch(state, Msg::AmountEdited(text), runner);
        }
        "calc" => {
            if state.calculate_status().is_in_flight() {
                println!("A calculation is already in flight.");
            } else {
                dispatch(state, Msg::CalculateRequested, runner);
            }
        }
        "quit" | "exit" => return false,
        other => println!("unknown command '{other}' - try 'help'"),
    }
    true
}

/// Slots are shown 1-based; messages use 0-based positions.
fn parse_position(word: Option<&str>) -> Option<usize> {
    word?.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
}

fn print_help() {
    println!("commands:");
    println!("  show              redraw the current view");
    println!("  add               append a blank pack-size slot");
    println!("  edit <slot> <v>   set pack-size slot (1-based) to value");
    println!("  del <slot>        delete a pack-size slot");
    println!("  save              save pack sizes to the optimizer");
    println!("  amount <v>        set the order amount");
    println!("  calc              request a breakdown for the amount");
    println!("  quit              leave the console");
}

fn render(view: &AppViewModel) {
    println!();
    println!("Pack sizes:");
    if view.loading() {
        println!("  (loading...)");
    } else if view.pack_entries.is_empty() {
        println!("  (none - 'add' to create one)");
    } else {
        for (index, entry) in view.pack_entries.iter().enumerate() {
            println!("  {:>2}. {}", index + 1, entry);
        }
    }
    if view.saving() {
        println!("  (saving...)");
    }
    // The save message, once present, supersedes the startup load message.
    if let Some(message) = status_line(&view.save).or_else(|| status_line(&view.load)) {
        println!("  {message}");
    }

    println!("Calculation:");
    println!("  amount: {}", view.amount_input);
    if view.calculating() {
        println!("  (calculating...)");
    }
    if view.breakdown.is_empty() {
        println!("  no breakdown yet");
    } else {
        println!("  {:>10} {:>8} {:>12}", "pack size", "count", "total units");
        for row in &view.breakdown {
            println!("  {:>10} {:>8} {:>12}", row.size, row.count, row.units);
        }
        println!(
            "  {:>10} {:>8} {:>12}",
            "total", view.totals.total_packs, view.totals.total_units_shipped
        );
    }
    if let Some(message) = status_line(&view.calculate) {
        println!("  {message}");
    }
}

fn status_line(status: &OperationStatus) -> Option<String> {
    match status {
        OperationStatus::Idle | OperationStatus::InFlight => None,
        OperationStatus::Succeeded(message) => Some(message.clone()),
        OperationStatus::Failed(message) => Some(format!("error: {message}")),
    }
}
