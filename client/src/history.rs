use colored::*;

use crate::api;
use crate::state::*;
use crate::ui::*;

pub async fn show_history(session: &SessionState) -> Result<(), Box<dyn std::error::Error>> {
    clear_screen()?;
    println!("\n{}", "Loading award history...".cyan());

    let history = api::fetch_history(session.server_url()?).await?;

    clear_screen()?;
    println!();
    println!("{}", RULE.bright_cyan());
    println!("{}", "                          AWARD HISTORY                            ".bright_cyan().bold());
    println!("{}", RULE.bright_cyan());
    println!();

    if history.is_empty() {
        println!("{}", "No points have been claimed yet.".dimmed());
    } else {
        println!("{:20} {:30} {:>10}",
            "When".dimmed(), "Player".dimmed(), "Points".dimmed());
        println!("{}", THIN_RULE.dimmed());

        for record in &history {
            let when = record
                .timestamp
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            println!("{:20} {:30} {:>10}",
                when,
                record.player_id.display_name(),
                format!("+{}", record.points_awarded).bright_green());
        }
    }

    println!();
    println!("{}", RULE.bright_cyan());
    Ok(())
}
