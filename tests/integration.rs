//! Integration tests for the recipe ranker.
//!
//! These tests verify end-to-end behavior using the fixture payloads.

mod common;

use common::{ids, load_mock_fixture, load_server_fixture, make_recipe};
use recipe_ranker::{
    find_by_recipe_id, load_records, rank, Authenticator, Credentials, FilterMode, LinkStyle,
    Listing, ProfileUpdate, RankError, Ranker, RankerConfig, Session, SessionError, User,
};

// ============================================================================
// FIXTURE-BASED TESTS
// ============================================================================

#[test]
fn test_fixture_loads_every_record() {
    let records = load_mock_fixture();
    assert_eq!(records.len(), 12);
    assert_eq!(ids(&records.iter().collect::<Vec<_>>()), (1..=12).collect::<Vec<_>>());
}

#[test]
fn test_fixture_all_is_source_order() {
    let records = load_mock_fixture();
    let ranked = rank(&records, "", FilterMode::All);
    assert_eq!(ranked.len(), records.len());
    for (r, src) in ranked.iter().zip(&records) {
        assert!(std::ptr::eq(*r, src));
    }
}

#[test]
fn test_fixture_popular() {
    let records = load_mock_fixture();
    let ranked = rank(&records, "", FilterMode::Popular);
    assert_eq!(ids(&ranked), vec![1, 2, 4, 7, 11, 8, 9, 3, 10, 12]);
}

#[test]
fn test_fixture_recent() {
    let records = load_mock_fixture();
    let ranked = rank(&records, "", FilterMode::Recent);
    assert_eq!(ids(&ranked), vec![12, 11, 10, 9, 8, 7, 6, 5, 4, 3]);
}

#[test]
fn test_fixture_trending() {
    let records = load_mock_fixture();
    // 0.7 * social_rank + 0.3 * id, descending
    let ranked = rank(&records, "", FilterMode::Trending);
    assert_eq!(ids(&ranked), vec![2, 1, 4, 7, 11, 8, 9, 3, 10, 12]);
}

#[test]
fn test_fixture_search_title_or_publisher() {
    let records = load_mock_fixture();
    // "Tomato Basil Soup" by title, "Roasted Tomato Bread" by both
    assert_eq!(ids(&rank(&records, "tomato", FilterMode::All)), vec![3, 6]);
    // publisher only
    assert_eq!(ids(&rank(&records, "CLOSET", FilterMode::All)), vec![1, 10]);
}

#[test]
fn test_fixture_search_then_mode() {
    let records = load_mock_fixture();
    assert_eq!(ids(&rank(&records, "pioneer", FilterMode::Popular)), vec![2, 4]);
    assert_eq!(ids(&rank(&records, "jalapeno", FilterMode::Recent)), vec![5, 1]);
}

#[test]
fn test_fixture_no_match_is_empty_listing() {
    let records = load_mock_fixture();
    for mode in FilterMode::ALL {
        let ranked = rank(&records, "sushi", mode);
        assert!(ranked.is_empty());
        assert_eq!(Listing::from_ranked(&ranked, LinkStyle::Static), Listing::Empty);
    }
}

#[test]
fn test_server_fixture_shape() {
    let records = load_server_fixture();
    assert_eq!(records[0].publisher, "101 Cookbooks");
    assert_eq!(records[0].cooking_time, Some(90));
    assert_eq!(records[2].cooking_time, None);

    let ranked = rank(&records, "", FilterMode::Popular);
    let listing = Listing::from_ranked(&ranked, LinkStyle::Server);
    let cards = listing.cards();
    assert_eq!(cards[0].title, "Stuffed Jalapeno Peppers");
    assert_eq!(cards[0].detail_href, "/recipe/2");
    assert_eq!(cards[2].rating, 73);
}

#[test]
fn test_detail_lookup() {
    let records = load_mock_fixture();
    let recipe = find_by_recipe_id(&records, "35382").unwrap();
    assert_eq!(recipe.title, "Perfect Iced Coffee");
    assert!(matches!(
        find_by_recipe_id(&records, "99999"),
        Err(RankError::RecipeNotFound(_))
    ));
}

// ============================================================================
// VALIDATION TESTS
// ============================================================================

#[test]
fn test_bad_score_fails_the_whole_payload() {
    let json = r#"[
        {"id": "1", "title": "Soup", "social_rank": 10},
        {"id": "2", "title": "Stew", "social_rank": "high"}
    ]"#;
    let err = load_records(json).unwrap_err();
    assert!(err.to_string().contains("record 1"));
    assert!(err.to_string().contains("social_rank"));
}

#[test]
fn test_missing_publisher_still_searchable_by_title() {
    let records = load_records(r#"[{"id": 1, "title": "Tomato Soup", "social_rank": 1}]"#).unwrap();
    assert_eq!(rank(&records, "tomato", FilterMode::All).len(), 1);
    assert!(rank(&records, "chef", FilterMode::All).is_empty());
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_config_file_drives_ranker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranker.json");
    std::fs::write(&path, r#"{"limit": 3, "trending": {"popularity": 0.0, "recency": 1.0}}"#)
        .unwrap();

    let config = RankerConfig::load(&path).unwrap();
    let ranker = Ranker::new(config);
    let records = load_mock_fixture();

    assert_eq!(ids(&ranker.rank(&records, "", FilterMode::Trending)), vec![12, 11, 10]);
    assert_eq!(ids(&ranker.rank(&records, "", FilterMode::Popular)), vec![1, 2, 4]);
}

// ============================================================================
// SESSION
// ============================================================================

/// Stands in for the user API.
struct Directory {
    users: Vec<(String, String, User)>,
}

impl Authenticator for Directory {
    fn authenticate(&self, credentials: &Credentials) -> Result<User, SessionError> {
        self.users
            .iter()
            .find(|(email, password, _)| email == credentials.email() && password == credentials.password())
            .map(|(_, _, user)| user.clone())
            .ok_or(SessionError::InvalidCredentials)
    }
}

fn directory() -> Directory {
    Directory {
        users: vec![(
            "ann@example.com".into(),
            "secret".into(),
            User::from_account("7", "ann@example.com", None, None),
        )],
    }
}

#[test]
fn test_session_lifecycle() {
    let auth = directory();
    let mut session = Session::new();
    assert!(!session.is_authenticated());

    let creds = Credentials::new(" ann@example.com ", "secret").unwrap();
    assert_eq!(session.login(&auth, &creds).unwrap().name, "ann");

    session
        .update_profile(&ProfileUpdate {
            email: Some("ann@cooking.example".into()),
            ..ProfileUpdate::default()
        })
        .unwrap();
    assert_eq!(session.require_user().unwrap().email, "ann@cooking.example");

    assert!(session.logout().is_some());
    assert_eq!(session.require_user().unwrap_err(), SessionError::NotAuthenticated);
}

#[test]
fn test_wrong_password_is_rejected() {
    let mut session = Session::new();
    let creds = Credentials::new("ann@example.com", "guess").unwrap();
    assert_eq!(
        session.login(&directory(), &creds).unwrap_err(),
        SessionError::InvalidCredentials
    );
    assert!(session.current_user().is_none());
}

#[test]
fn test_ranking_independent_of_session() {
    let records = vec![make_recipe(1, "Pie", 3.0), make_recipe(2, "Tart", 4.0)];
    let before = ids(&rank(&records, "", FilterMode::Popular));
    let mut session = Session::new();
    session
        .login(&directory(), &Credentials::new("ann@example.com", "secret").unwrap())
        .unwrap();
    assert_eq!(ids(&rank(&records, "", FilterMode::Popular)), before);
}

#[test]
fn test_short_new_password_leaves_user_unchanged() {
    let mut session = Session::new();
    session
        .login(&directory(), &Credentials::new("ann@example.com", "secret").unwrap())
        .unwrap();
    let before = session.clone();

    let update = ProfileUpdate {
        name: Some("Annie".into()),
        current_password: Some("secret".into()),
        new_password: Some("abc".into()),
        confirm_password: Some("abc".into()),
        ..ProfileUpdate::default()
    };
    assert_eq!(
        session.update_profile(&update).unwrap_err(),
        SessionError::PasswordTooShort
    );
    assert_eq!(session, before);
}
