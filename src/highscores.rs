//! High score persistence
//!
//! The record is a single text file holding the decimal score, with no
//! header, version or trailing newline.

use std::fs;
use std::io;
use std::path::Path;

/// Default high score file, relative to the working directory
pub const DEFAULT_HIGHSCORE_FILE: &str = "highscore.txt";

/// Parse the file contents. Surrounding whitespace is tolerated.
pub fn parse_highscore(contents: &str) -> Option<u64> {
    contents.trim().parse().ok()
}

/// Load the stored high score.
///
/// A missing file means no record yet. Unreadable or malformed files are
/// also treated as no record, with a warning.
pub fn load_highscore(path: &Path) -> u64 {
    match fs::read_to_string(path) {
        Ok(contents) => match parse_highscore(&contents) {
            Some(score) => {
                log::info!("Loaded high score {} from {}", score, path.display());
                score
            }
            None => {
                log::warn!("Ignoring malformed high score file {}", path.display());
                0
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No high score at {}, starting fresh", path.display());
            0
        }
        Err(e) => {
            log::warn!("Could not read high score file {}: {}", path.display(), e);
            0
        }
    }
}

/// Overwrite the stored high score
pub fn save_highscore(path: &Path, score: u64) -> io::Result<()> {
    fs::write(path, score.to_string())?;
    log::info!("High score {} saved to {}", score, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_highscore(&dir.path().join(DEFAULT_HIGHSCORE_FILE)), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_HIGHSCORE_FILE);
        save_highscore(&path, 4321).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "4321");
        assert_eq!(load_highscore(&path), 4321);

        save_highscore(&path, 7).unwrap();
        assert_eq!(load_highscore(&path), 7);
    }

    #[test]
    fn test_existing_file_with_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1500\n").unwrap();
        assert_eq!(load_highscore(file.path()), 1500);
    }

    #[test]
    fn test_malformed_file_is_zero() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"lots").unwrap();
        assert_eq!(load_highscore(file.path()), 0);
    }

    #[test]
    fn test_unreadable_path_is_zero() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_highscore(dir.path()), 0);
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(DEFAULT_HIGHSCORE_FILE);
        assert!(save_highscore(&path, 10).is_err());
    }

    #[test]
    fn test_parse_highscore() {
        assert_eq!(parse_highscore("120"), Some(120));
        assert_eq!(parse_highscore("  99\n"), Some(99));
        assert_eq!(parse_highscore(""), None);
        assert_eq!(parse_highscore("-4"), None);
    }
}
