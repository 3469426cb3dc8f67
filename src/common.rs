use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `content` to `path` in one shot, replacing any existing file.
pub fn write_string_to_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
