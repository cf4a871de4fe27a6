use claimboard_common::Player;
use colored::*;

use crate::api;
use crate::state::*;
use crate::ui::*;

pub fn print_leaderboard(players: &[Player], highlight: Option<&str>) {
    println!();
    println!("{}", RULE.bright_cyan());
    println!("{}", "                           LEADERBOARD                             ".bright_cyan().bold());
    println!("{}", RULE.bright_cyan());
    println!();
    println!("{}", format!("Total players: {}", players.len()).bright_yellow());
    println!("{}", THIN_RULE.dimmed());
    println!("{:>4} {:30} {:>10}",
        "Rank".dimmed(), "Player".dimmed(), "Points".dimmed());
    println!("{}", THIN_RULE.dimmed());

    for (idx, player) in players.iter().enumerate() {
        let rank_str = format!("#{}", idx + 1);
        let line = format!("{:>4} {:30} {:>10}", rank_str, player.username, player.points);
        if highlight == Some(player.id.as_str()) {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{line}");
        }
    }

    println!();
    println!("{}", RULE.bright_cyan());
}

pub async fn show_leaderboard(session: &SessionState) -> Result<(), Box<dyn std::error::Error>> {
    clear_screen()?;
    println!("\n{}", "Loading leaderboard...".cyan());

    let players = api::fetch_players(session.server_url()?).await?;

    clear_screen()?;
    print_leaderboard(&players, session.config.player_id.as_deref());
    Ok(())
}
