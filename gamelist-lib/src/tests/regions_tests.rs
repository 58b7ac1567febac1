use super::*;
use gamelist_core::tags;

fn game(region: Option<&str>, lang: Option<&str>) -> GameRecord {
    let mut game = GameRecord::new("./rom.zip", "Rom");
    if let Some(region) = region {
        game.set_field(tags::REGION, region);
    }
    if let Some(lang) = lang {
        game.set_field(tags::LANG, lang);
    }
    game
}

#[test]
fn test_default_allow_list() {
    let filter = RegionFilter::default();
    assert_eq!(filter.allowed(), &["en", "eu", "us", "wr"]);
}

#[test]
fn test_allowed_regions_stay_visible() {
    let filter = RegionFilter::default();
    assert!(!filter.should_hide(Some("us"), Some("en")));
    assert!(!filter.should_hide(Some("eu"), Some("de")));
    assert!(!filter.should_hide(Some("wr"), Some("en")));
}

#[test]
fn test_missing_codes_default_to_en() {
    let filter = RegionFilter::default();
    assert!(!filter.should_hide(None, None));
    assert!(!filter.should_hide(Some(""), None));
    assert!(!filter.should_hide(Some("wr"), None));

    // "en" must itself be allowed for the default to help
    let filter = RegionFilter::new(["us"]);
    assert!(filter.should_hide(None, None));
}

#[test]
fn test_disallowed_region_is_hidden() {
    let filter = RegionFilter::default();
    assert!(filter.should_hide(Some("jp"), Some("ja")));
    assert!(filter.should_hide(Some("jp"), None));
}

#[test]
fn test_world_release_in_other_language_is_hidden() {
    let filter = RegionFilter::default();
    assert!(filter.should_hide(Some("wr"), Some("fr")));
}

#[test]
fn test_codes_compare_case_insensitively() {
    let filter = RegionFilter::new(["US", " eu "]);
    assert!(!filter.should_hide(Some("us"), None));
    assert!(!filter.should_hide(Some("EU"), None));
}

#[test]
fn test_plan_skips_hidden_games() {
    let mut doc = Gamelist::new();
    let jp = doc.push(game(Some("jp"), Some("ja")));
    let _us = doc.push(game(Some("us"), Some("en")));
    let _hidden_jp = doc.push(game(Some("jp"), None).with_field(tags::HIDDEN, "true"));
    let wr_fr = doc.push(game(Some("wr"), Some("fr")));

    let planned = plan_region_hide(&doc, &RegionFilter::default());
    assert_eq!(planned, vec![jp, wr_fr]);
}

#[test]
fn test_plan_does_not_mutate() {
    let mut doc = Gamelist::new();
    doc.push(game(Some("jp"), None));
    let before = doc.clone();
    let _ = plan_region_hide(&doc, &RegionFilter::default());
    assert_eq!(doc, before);
}
