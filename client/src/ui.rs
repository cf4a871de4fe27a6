use std::io::{self, Write};
use crossterm::{event::{self, Event}, terminal};

pub const RULE: &str = "═══════════════════════════════════════════════════════════════════";
pub const THIN_RULE: &str = "───────────────────────────────────────────────────────────────────";

pub fn clear_screen() -> io::Result<()> {
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush()?;
    Ok(())
}

pub fn wait_for_keypress() -> io::Result<()> {
    terminal::enable_raw_mode()?;

    // Discard anything typed before the prompt
    while event::poll(std::time::Duration::from_millis(10))? {
        event::read()?;
    }

    let result = loop {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(_) = event::read()? {
                break Ok(());
            }
        }
    };

    terminal::disable_raw_mode()?;
    result
}
