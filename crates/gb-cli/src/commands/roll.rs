use std::path::Path;

use gb_oracle::Die;

pub fn run(dir: &Path, seed: Option<u64>, die: &str) -> Result<(), String> {
    let die = die.parse::<Die>().map_err(|e| format!("{e}"))?;
    let mut session = super::open_session(dir, seed);
    let result = session.roll_die(die);
    println!("  Rolled {die}: {result}");
    Ok(())
}
