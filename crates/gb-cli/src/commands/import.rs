use std::path::Path;

pub fn run(dir: &Path, file: &Path) -> Result<(), String> {
    let bytes =
        std::fs::read(file).map_err(|e| format!("cannot read {}: {e}", file.display()))?;

    let mut session = super::open_session(dir, None);
    session.import(&bytes).map_err(|e| e.to_string())?;

    let state = session.state();
    println!("  Imported {}", file.display());
    println!(
        "  {} agents, {} threads, {} log entries",
        state.agents.len(),
        state.threads.len(),
        state.logs.len()
    );

    Ok(())
}
