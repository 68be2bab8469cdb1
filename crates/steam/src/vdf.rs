use std::fs;
use std::path::Path;

use crate::SteamError;

/// Key that names a library root inside `libraryfolders.vdf`.
const PATH_KEY: &str = "\"path\"";

/// Reads a `libraryfolders.vdf` file and returns the library roots it declares.
pub fn load_library_folders(path: &Path) -> Result<Vec<String>, SteamError> {
    let content = fs::read_to_string(path)
        .map_err(|e| SteamError::Io(format!("failed to read library folders file: {e}")))?;
    Ok(parse_library_folders(&content))
}

/// Extracts every `"path"` value from text VDF content, in source order.
///
/// Lines that look like a `"path"` entry but do not carry a non-empty quoted
/// value are skipped; this never fails, partial results are returned instead.
///
/// ```text
/// "0"
/// {
///     "path"      "C:\\Program Files (x86)\\Steam"
/// }
/// ```
pub fn parse_library_folders(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| starts_with_path_key(line))
        .filter_map(second_quoted_value)
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.replace("\\\\", "\\"))
        .collect()
}

fn starts_with_path_key(line: &str) -> bool {
    line.get(..PATH_KEY.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(PATH_KEY))
}

/// Returns the text between the third and fourth `"` on the line.
fn second_quoted_value(line: &str) -> Option<&str> {
    let mut quotes = line.match_indices('"').map(|(i, _)| i).skip(2);
    let open = quotes.next()?;
    let close = quotes.next()?;
    Some(&line[open + 1..close])
}
