use std::path::Path;

use colored::Colorize;

use gb_oracle::Odds;

pub fn run(dir: &Path, seed: Option<u64>, odds: &str, question: &str) -> Result<(), String> {
    let odds = odds.parse::<Odds>().map_err(|e| format!("{e}"))?;
    let mut session = super::open_session(dir, seed);
    let r = session
        .resolve_question(question, odds)
        .map_err(|e| e.to_string())?;

    println!("  Q: {}", r.question);
    println!(
        "  {}  (odds {}, chaos {}, roll {} vs {}%)",
        super::paint_verdict(r.verdict),
        r.odds,
        r.chaos,
        r.roll,
        r.probability
    );
    if let Some(event) = &r.random_event {
        println!();
        println!("  {}", "RANDOM EVENT TRIGGERED!".red().bold());
        println!("  Focus: {} ({})", event.focus, event.focus_roll);
        println!("  Meaning: {}", event.meaning);
    }

    Ok(())
}
