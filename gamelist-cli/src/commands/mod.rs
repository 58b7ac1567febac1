pub(crate) mod dups;
pub(crate) mod hide;
pub(crate) mod hide_regions;
pub(crate) mod settings;
pub(crate) mod validate;

use std::io::{BufRead, Write};
use std::path::Path;

use gamelist_lib::Gamelist;

use crate::CliError;

/// Load a gamelist, reporting how many games it holds at debug level.
pub(crate) fn open_gamelist(path: &Path) -> Result<Gamelist, CliError> {
    let doc = Gamelist::open(path)?;
    log::debug!("Loaded {} games from {}", doc.len(), path.display());
    Ok(doc)
}

/// Print `prompt` and read one line. `None` at end of input.
pub(crate) fn read_answer<R: BufRead>(
    input: &mut R,
    prompt: &str,
) -> Result<Option<String>, CliError> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask a yes/no question. Only `y` (any case) confirms.
pub(crate) fn confirm<R: BufRead>(input: &mut R, question: &str) -> Result<bool, CliError> {
    let answer = read_answer(input, &format!("{question} "))?;
    Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("y")))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_confirm_accepts_only_y() {
        assert!(confirm(&mut Cursor::new("y\n"), "?").unwrap());
        assert!(confirm(&mut Cursor::new(" Y \n"), "?").unwrap());
        assert!(!confirm(&mut Cursor::new("yes\n"), "?").unwrap());
        assert!(!confirm(&mut Cursor::new("n\n"), "?").unwrap());
        assert!(!confirm(&mut Cursor::new(""), "?").unwrap());
    }

    #[test]
    fn test_read_answer_end_of_input() {
        let mut input = Cursor::new("2\n");
        assert_eq!(read_answer(&mut input, "> ").unwrap().as_deref(), Some("2"));
        assert_eq!(read_answer(&mut input, "> ").unwrap(), None);
    }

    #[test]
    fn test_open_missing_gamelist() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_gamelist(&dir.path().join("gamelist.xml")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Gamelist(gamelist_lib::GamelistError::NotFound(_))
        ));
    }
}
