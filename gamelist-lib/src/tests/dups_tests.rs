use super::*;
use gamelist_core::tags;

fn game(path: &str, name: &str, region: Option<&str>, lang: Option<&str>, hidden: bool) -> GameRecord {
    let mut game = GameRecord::new(path, name);
    if let Some(region) = region {
        game.set_field(tags::REGION, region);
    }
    if let Some(lang) = lang {
        game.set_field(tags::LANG, lang);
    }
    if hidden {
        game.set_hidden(true);
    }
    game
}

#[test]
fn test_annotated_titles_form_one_group() {
    let mut doc = Gamelist::new();
    let a = doc.push(game("a.zip", "Foo (USA)", None, Some("en"), false));
    let b = doc.push(game("b.zip", "Foo v2", None, Some("en"), false));

    let report = find_duplicates(&doc);
    assert_eq!(report.groups.len(), 1);
    let group = &report.groups[0];
    assert_eq!(group.title, "Foo");
    assert_eq!(group.len(), 2);
    let ids: Vec<_> = group.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn test_singletons_are_not_reported() {
    let mut doc = Gamelist::new();
    doc.push(game("a.zip", "Foo", None, None, false));
    doc.push(game("b.zip", "Bar", None, None, false));
    doc.push(game("c.zip", "Bar (Europe)", None, None, false));

    let report = find_duplicates(&doc);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].title, "Bar");
    assert!(report.groups.iter().all(|g| g.len() >= 2));
}

#[test]
fn test_groups_iff_normalized_titles_equal() {
    let names = [
        "Foo (USA)",
        "Foo (Japan) v1.1",
        "Foo Bar",
        "Foo Bar (Europe)",
        "Baz",
        "Foo",
    ];
    let mut doc = Gamelist::new();
    for (i, name) in names.iter().enumerate() {
        doc.push(game(&format!("{i}.zip"), name, None, None, false));
    }

    let report = find_duplicates(&doc);
    for group in &report.groups {
        for entry in &group.entries {
            assert_eq!(normalize_title(&entry.name), group.title);
        }
    }
    let titles: Vec<_> = report.groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Foo", "Foo Bar"]);
    assert_eq!(report.groups[0].len(), 3);
}

#[test]
fn test_presentation_order() {
    let mut doc = Gamelist::new();
    let hidden_us = doc.push(game("1", "Foo (USA)", Some("us"), Some("en"), true));
    let jp = doc.push(game("2", "Foo (Japan)", Some("jp"), Some("ja"), false));
    let wr = doc.push(game("3", "Foo (World)", Some("wr"), Some("en"), false));
    let eu_fr = doc.push(game("4", "Foo (France)", Some("eu"), Some("fr"), false));
    let eu_en = doc.push(game("5", "Foo (Europe)", Some("eu"), Some("en"), false));
    let us = doc.push(game("6", "Foo (USA) (Rev 1)", Some("us"), None, false));

    let report = find_duplicates(&doc);
    let ids: Vec<_> = report.groups[0].entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![us, eu_en, eu_fr, wr, jp, hidden_us]);
}

#[test]
fn test_equal_keys_keep_document_order() {
    let mut doc = Gamelist::new();
    let first = doc.push(game("1", "Foo (Rev 1)", Some("us"), Some("en"), false));
    let second = doc.push(game("2", "Foo (Rev 2)", Some("us"), Some("en"), false));

    let report = find_duplicates(&doc);
    let ids: Vec<_> = report.groups[0].entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn test_ranks() {
    assert_eq!(region_rank(Some("us")), 0);
    assert_eq!(region_rank(Some("EU")), 1);
    assert_eq!(region_rank(Some("wr")), 2);
    assert_eq!(region_rank(Some("jp")), 3);
    assert_eq!(region_rank(None), 3);
    assert_eq!(lang_rank(Some("en")), 0);
    assert_eq!(lang_rank(Some("fr")), 1);
    assert_eq!(lang_rank(None), 1);
}

#[test]
fn test_summary_counts() {
    let mut doc = Gamelist::new();
    for name in ["A (USA)", "A (Europe)", "A (Japan)", "B", "B v2", "C"] {
        doc.push(game(name, name, None, None, false));
    }

    let report = find_duplicates(&doc);
    assert_eq!(report.total_games, 6);
    assert_eq!(report.duplicate_count(), 5);
    assert_eq!(report.hideable_count(), 3);
}

#[test]
fn test_games_without_name_are_skipped() {
    let mut doc = Gamelist::new();
    let mut nameless = GameRecord::new("x.zip", "");
    nameless.remove_field(tags::NAME);
    doc.push(nameless.clone());
    doc.push(nameless);

    let report = find_duplicates(&doc);
    assert!(report.groups.is_empty());
    assert_eq!(report.total_games, 2);
}

#[test]
fn test_unhide_all_preserves_groups() {
    let mut doc = Gamelist::new();
    doc.push(game("1", "Foo (USA)", Some("us"), None, false));
    doc.push(game("2", "Foo (Japan)", Some("jp"), None, true));
    doc.push(game("3", "Bar", None, None, true));
    doc.push(game("4", "Bar (Rev 1)", None, None, false));

    let titles = |doc: &Gamelist| -> Vec<(String, Vec<GameId>)> {
        let mut groups: Vec<_> = find_duplicates(doc)
            .groups
            .into_iter()
            .map(|g| {
                let mut ids: Vec<_> = g.entries.iter().map(|e| e.id).collect();
                ids.sort();
                (g.title, ids)
            })
            .collect();
        groups.sort();
        groups
    };

    let before = titles(&doc);
    crate::hide::unhide_all(&mut doc);
    assert_eq!(titles(&doc), before);
    assert!(doc.games().all(|(_, g)| !g.is_hidden()));
}
