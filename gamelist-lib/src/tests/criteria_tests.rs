use super::*;
use gamelist_core::tags;

fn rated(rating: &str) -> GameRecord {
    GameRecord::new("./rom.zip", "Rom")
        .with_field(tags::RATING, rating)
        .with_field(tags::DESC, "A game")
        .with_field(tags::IMAGE, "./images/rom.png")
}

#[test]
fn test_rating_below_threshold() {
    let criteria = HideCriteria {
        rating_below: Some(0.5),
        ..Default::default()
    };
    assert!(criteria.matches(&rated("0.3")));
    assert!(!criteria.matches(&rated("0.5")));
    assert!(!criteria.matches(&rated("0.8")));
    assert!(!criteria.matches(&rated("n/a")));
}

#[test]
fn test_hidden_games_are_excluded() {
    let criteria = HideCriteria {
        rating_below: Some(0.5),
        ..Default::default()
    };
    let hidden = rated("0.3").with_field(tags::HIDDEN, "true");
    assert!(!criteria.matches(&hidden));
}

#[test]
fn test_title_and_genre_substrings_ignore_case() {
    let game = GameRecord::new("./a.zip", "Super Mahjong Deluxe").with_field(tags::GENRE, "Board game / Mahjong");

    let by_title = HideCriteria {
        title: Some("mahjong".into()),
        ..Default::default()
    };
    assert!(by_title.matches(&game));

    let by_genre = HideCriteria {
        genre: Some("BOARD".into()),
        ..Default::default()
    };
    assert!(by_genre.matches(&game));

    let miss = HideCriteria {
        genre: Some("racing".into()),
        ..Default::default()
    };
    assert!(!miss.matches(&game));
    assert!(!miss.matches(&GameRecord::new("./b.zip", "No Genre")));
}

#[test]
fn test_empty_description() {
    let criteria = HideCriteria {
        empty_desc: true,
        ..Default::default()
    };
    assert!(criteria.matches(&GameRecord::new("a", "A")));
    assert!(criteria.matches(&GameRecord::new("a", "A").with_field(tags::DESC, "  \n ")));
    assert!(!criteria.matches(&GameRecord::new("a", "A").with_field(tags::DESC, "Fun")));
}

#[test]
fn test_missing_image() {
    let criteria = HideCriteria {
        no_image: true,
        ..Default::default()
    };
    assert!(criteria.matches(&GameRecord::new("a", "A")));
    assert!(criteria.matches(&GameRecord::new("a", "A").with_field(tags::IMAGE, "")));
    assert!(!criteria.matches(&GameRecord::new("a", "A").with_field(tags::IMAGE, "./a.png")));
}

#[test]
fn test_validate_threshold_range() {
    for bad in [-0.1, 1.5, f32::NAN] {
        let criteria = HideCriteria {
            rating_below: Some(bad),
            ..Default::default()
        };
        assert!(matches!(
            criteria.validate(),
            Err(GamelistError::InvalidThreshold(_))
        ));
    }
    for good in [0.0, 0.5, 1.0] {
        let criteria = HideCriteria {
            rating_below: Some(good),
            ..Default::default()
        };
        assert!(criteria.validate().is_ok());
    }
}

#[test]
fn test_validate_requires_a_predicate() {
    assert!(matches!(
        HideCriteria::default().validate(),
        Err(GamelistError::NoCriteria(_))
    ));
    let empty_title = HideCriteria {
        title: Some(String::new()),
        ..Default::default()
    };
    assert!(empty_title.is_empty());
}

#[test]
fn test_plan_is_a_union_in_document_order() {
    let mut doc = Gamelist::new();
    let both = doc.push(GameRecord::new("a", "Demo Disc").with_field(tags::RATING, "0.1"));
    let _fine = doc.push(rated("0.9"));
    let low = doc.push(rated("0.2"));
    let demo = doc.push(GameRecord::new("d", "Another Demo").with_field(tags::RATING, "0.7"));

    let criteria = HideCriteria {
        title: Some("demo".into()),
        rating_below: Some(0.5),
        ..Default::default()
    };
    let planned = plan_criteria_hide(&doc, &criteria).unwrap();
    assert_eq!(planned, vec![both, low, demo]);
}

#[test]
fn test_plan_rejects_bad_threshold_without_matching() {
    let mut doc = Gamelist::new();
    doc.push(rated("0.3"));
    let criteria = HideCriteria {
        rating_below: Some(2.0),
        no_image: true,
        ..Default::default()
    };
    assert!(plan_criteria_hide(&doc, &criteria).is_err());
}
