use std::path::Path;

use gb_store::EXPORT_FILE_NAME;

pub fn run(dir: &Path, output: Option<&Path>) -> Result<(), String> {
    let session = super::open_session(dir, None);
    let bytes = session.export().map_err(|e| e.to_string())?;

    let path = output.unwrap_or(Path::new(EXPORT_FILE_NAME));
    std::fs::write(path, bytes).map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
    println!("  Exported to {}", path.display());

    Ok(())
}
