use std::fs;
use std::io::Cursor;

use super::*;
use gamelist_lib::Gamelist;

const GAMELIST: &str = r#"<?xml version="1.0"?>
<gameList>
  <game>
    <path>./good.zip</path>
    <name>Good Game</name>
    <desc>Fun.</desc>
    <rating>0.8</rating>
    <image>./images/good.png</image>
  </game>
  <game>
    <path>./bad.zip</path>
    <name>Bad Game</name>
    <desc>Not fun.</desc>
    <rating>0.3</rating>
    <image>./images/bad.png</image>
  </game>
  <game>
    <path>./hidden.zip</path>
    <name>Hidden Bad Game</name>
    <rating>0.1</rating>
    <hidden>true</hidden>
  </game>
</gameList>
"#;

fn setup() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gamelist.xml");
    fs::write(&path, GAMELIST).unwrap();
    (dir, path)
}

fn by_rating(threshold: f32) -> HideCriteria {
    HideCriteria {
        rating_below: Some(threshold),
        ..Default::default()
    }
}

fn hidden_names(path: &Path) -> Vec<String> {
    Gamelist::open(path)
        .unwrap()
        .games()
        .filter(|(_, g)| g.is_hidden())
        .map(|(_, g)| g.display_name().to_string())
        .collect()
}

#[test]
fn test_confirmed_hide_writes_file() {
    let (_dir, path) = setup();
    run_hide(&path, by_rating(0.5), &mut Cursor::new("y\n")).unwrap();
    assert_eq!(hidden_names(&path), vec!["Bad Game", "Hidden Bad Game"]);
}

#[test]
fn test_declined_hide_leaves_file_alone() {
    let (_dir, path) = setup();
    run_hide(&path, by_rating(0.5), &mut Cursor::new("n\n")).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), GAMELIST);
}

#[test]
fn test_no_matches_does_not_prompt() {
    let (_dir, path) = setup();
    let criteria = HideCriteria {
        no_image: true,
        ..Default::default()
    };
    // The only game without an image is already hidden.
    let mut input = Cursor::new("y\n");
    run_hide(&path, criteria, &mut input).unwrap();
    assert_eq!(input.position(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), GAMELIST);
}

#[test]
fn test_bad_threshold_is_rejected_before_reading() {
    let (_dir, path) = setup();
    let err = run_hide(&path, by_rating(1.5), &mut Cursor::new("y\n")).unwrap_err();
    assert!(matches!(
        err,
        CliError::Gamelist(gamelist_lib::GamelistError::InvalidThreshold(_))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), GAMELIST);
}

#[test]
fn test_no_criteria_is_an_error() {
    let (_dir, path) = setup();
    assert!(run_hide(&path, HideCriteria::default(), &mut Cursor::new("y\n")).is_err());
}
