use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

pub fn run(dir: &Path, yes: bool) -> Result<(), String> {
    if !yes && !confirm()? {
        println!("  Reset cancelled.");
        return Ok(());
    }

    let mut session = super::open_session(dir, None);
    session.reset();
    println!("  Campaign reset to defaults.");

    Ok(())
}

fn confirm() -> Result<bool, String> {
    print!(
        "  {} This deletes the saved campaign. Continue? [y/N] ",
        "Warning:".yellow().bold()
    );
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    println!();

    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
