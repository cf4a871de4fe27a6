pub mod api;
pub mod claim;
pub mod config;
pub mod history;
pub mod leaderboard;
pub mod state;
pub mod ui;

use std::io;

use colored::*;
use rustyline::DefaultEditor;

use claim::{claim_flow, register_flow};
use history::show_history;
use leaderboard::show_leaderboard;
use state::*;
use ui::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());

    if let Err(e) = start_app(&config_path).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn start_app(config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = SessionState::new_with_config(config_path)?;

    loop {
        let outcome = match read_menu_choice()? {
            MenuChoice::Leaderboard => show_leaderboard(&session)
                .await
                .map_err(|e| format!("Error loading leaderboard: {e}")),
            MenuChoice::Register => register_flow(&mut session)
                .await
                .map_err(|e| format!("Could not add player: {e}")),
            MenuChoice::Claim => claim_flow(&mut session)
                .await
                .map_err(|e| format!("Could not claim points: {e}")),
            MenuChoice::History => show_history(&session)
                .await
                .map_err(|e| format!("Error loading history: {e}")),
            MenuChoice::Exit => {
                println!("\n{}", "Goodbye!".cyan());
                break;
            }
        };

        if let Err(message) = outcome {
            println!("{}", message.red());
        }
        println!("\nPress any key to return to menu...");
        wait_for_keypress()?;
    }

    Ok(())
}

enum MenuChoice {
    Leaderboard,
    Register,
    Claim,
    History,
    Exit,
}

fn display_menu(title: &str, items: &[(&str, &str)]) {
    clear_screen().ok();

    println!();
    println!("{}", "█▀▀ █   ▄▀█ █ █▀▄▀█ █▄▄ █▀█ ▄▀█ █▀█ █▀▄".bright_cyan());
    println!("{}", "█▄▄ █▄▄ █▀█ █ █ ▀ █ █▄█ █▄█ █▀█ █▀▄ █▄▀".bright_cyan());
    println!();
    println!("{}", title.dimmed());
    println!();

    for (num, text) in items {
        println!("  {}. {}", num.bright_yellow(), text);
    }

    println!();
}

fn read_menu_choice() -> io::Result<MenuChoice> {
    let menu_items = [
        ("1", "Leaderboard"),
        ("2", "Add Player"),
        ("3", "Claim Points"),
        ("4", "Award History"),
        ("5", "Exit"),
    ];

    display_menu(&format!("v{VERSION}"), &menu_items);

    let mut rl = DefaultEditor::new().map_err(io::Error::other)?;

    loop {
        match rl.readline("Select option: ") {
            Ok(line) => match line.trim() {
                "1" => return Ok(MenuChoice::Leaderboard),
                "2" => return Ok(MenuChoice::Register),
                "3" => return Ok(MenuChoice::Claim),
                "4" => return Ok(MenuChoice::History),
                "5" => return Ok(MenuChoice::Exit),
                _ => {
                    println!("{}", format!("Invalid choice. Please enter 1-{}.", menu_items.len()).red());
                }
            },
            Err(_) => return Ok(MenuChoice::Exit),
        }
    }
}
