use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

pub fn run(dir: &Path, seed: Option<u64>) -> Result<(), String> {
    let mut session = super::open_session(dir, seed);

    println!("  {} Operation Desk", "Greenbox".green().bold());
    println!(
        "  Scene: {} | Chaos: {}/9",
        session.state().scene.title,
        session.chaos()
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
