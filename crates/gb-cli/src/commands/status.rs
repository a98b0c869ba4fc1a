use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gb_core::Category;

pub fn run(dir: &Path, recent: usize) -> Result<(), String> {
    let session = super::open_session(dir, None);
    let state = session.state();

    println!("  {} {}", "Scene:".bold(), state.scene);
    println!("  Chaos Factor: {}/9", state.chaos_factor);
    println!();

    if state.agents.is_empty() {
        println!("  No agents.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Agent", "Profession", "HP", "WP", "SAN", "Skills"]);
        for agent in &state.agents {
            table.add_row(vec![
                agent.name.clone(),
                agent.profession.clone(),
                agent.derived.hp.to_string(),
                agent.derived.wp.to_string(),
                agent.derived.san.to_string(),
                agent.skills.len().to_string(),
            ]);
        }
        println!("{table}");
    }
    println!();

    for category in Category::all() {
        let items = state.list(*category);
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        let listed = if titles.is_empty() {
            "-".to_string()
        } else {
            titles.join(", ")
        };
        println!("  {} ({}): {listed}", category.plural(), items.len());
    }
    println!();

    let tail = state.logs.tail(recent);
    println!("  Log: {} entries", state.logs.len());
    for entry in tail {
        println!(
            "  [{}] {} {}",
            entry.timestamp,
            entry.kind.tag().dimmed(),
            entry.content.lines().next().unwrap_or("")
        );
    }

    Ok(())
}
