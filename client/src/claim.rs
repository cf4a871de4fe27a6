use claimboard_common::Player;
use colored::*;
use rustyline::DefaultEditor;

use crate::api;
use crate::leaderboard::print_leaderboard;
use crate::state::*;
use crate::ui::*;

/// Resolves the user's answer to a player: a rank number from the listing,
/// or an empty answer to reuse the remembered player.
pub fn pick_player<'a>(players: &'a [Player], input: &str, remembered: Option<&str>) -> Option<&'a Player> {
    let input = input.trim();

    if input.is_empty() {
        let id = remembered?;
        return players.iter().find(|p| p.id == id);
    }

    let rank: usize = input.trim_start_matches('#').parse().ok()?;
    players.get(rank.checked_sub(1)?)
}

pub async fn claim_flow(session: &mut SessionState) -> Result<(), Box<dyn std::error::Error>> {
    clear_screen()?;
    let server_url = session.server_url()?.to_string();
    let players = api::fetch_players(&server_url).await?;

    if players.is_empty() {
        return Err("No players registered yet".into());
    }

    print_leaderboard(&players, session.config.player_id.as_deref());

    let remembered = session
        .config
        .player_id
        .as_deref()
        .and_then(|id| players.iter().find(|p| p.id == id));
    let prompt = match remembered {
        Some(player) => format!("Rank of player to claim for [{}]: ", player.username),
        None => "Rank of player to claim for: ".to_string(),
    };

    let mut rl = DefaultEditor::new()?;
    let line = rl.readline(&prompt)?;

    let player = pick_player(&players, &line, session.config.player_id.as_deref())
        .ok_or("No such player")?
        .clone();

    let claim = api::claim_points(&server_url, &player.id).await?;
    session.remember_player(&player.id)?;

    println!();
    println!("{}", format!("🎉 {} claimed {} points!", player.username, claim.points_awarded).bright_green().bold());
    println!("{}", format!("New total: {}", claim.total_points).bright_yellow());
    Ok(())
}

pub async fn register_flow(session: &mut SessionState) -> Result<(), Box<dyn std::error::Error>> {
    clear_screen()?;
    let mut rl = DefaultEditor::new()?;
    let username = rl.readline("New player name: ")?;

    if username.trim().is_empty() {
        return Err("Please enter a name".into());
    }

    let player = api::create_player(session.server_url()?, username.trim()).await?;
    session.remember_player(&player.id)?;

    println!("{}", format!("✓ Added {}", player.username).green());
    Ok(())
}
