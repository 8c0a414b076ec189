// Integration tests for ProConnect

use proconnect::core::{FilterSet, MatchEngine, Roster, ThreadStore};
use proconnect::models::{MatchingDomain, Notice, PresenceStatus, Profile, Rejection, SeedMessage, Sender, SessionState};
use proconnect::services::load_fixtures;
use std::path::Path;

fn create_test_profile(id: &str, profession: &str) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("User {}", id),
        age: 29,
        location: "Chicago, IL".to_string(),
        profession: profession.to_string(),
        organization: "Northwestern Memorial Hospital".to_string(),
        bio: "ER doctor who thrives under pressure.".to_string(),
        interests: vec!["Hiking".to_string(), "Tennis".to_string()],
        photos: vec!["photo-1472396961693-142e6e269027".to_string()],
        online_status: PresenceStatus::RecentlyActive,
        match_score: 88,
    }
}

fn create_engine(profiles: Vec<Profile>, seeds: Vec<SeedMessage>) -> MatchEngine {
    let roster = Roster::new(MatchingDomain::Doctor, profiles).unwrap();
    MatchEngine::new(roster, ThreadStore::new(seeds))
}

fn current_id(engine: &MatchEngine) -> Option<String> {
    engine.current().map(|p| p.id.clone())
}

#[test]
fn test_integration_like_pass_message_walkthrough() {
    let mut engine = create_engine(
        vec![
            create_test_profile("A", "Cardiologist"),
            create_test_profile("B", "Neurologist"),
            create_test_profile("C", "Pediatrician"),
        ],
        vec![SeedMessage {
            candidate_id: "C".to_string(),
            text: "Hi there!".to_string(),
        }],
    );

    assert_eq!(current_id(&engine).as_deref(), Some("A"));

    // Like A: one match, B presented
    let notices = engine.like("A").unwrap();
    let events: Vec<_> = notices
        .iter()
        .filter_map(|n| match n {
            Notice::Matched(event) => Some(event),
            _ => None,
        })
        .collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].candidate_id, "A");
    assert_eq!(current_id(&engine).as_deref(), Some("B"));

    // Pass B: no event, C presented
    let notices = engine.pass("B").unwrap();
    assert!(!notices.iter().any(|n| matches!(n, Notice::Matched(_))));
    assert_eq!(current_id(&engine).as_deref(), Some("C"));

    // Message C: thread exists, C still presented
    engine.message("C").unwrap();
    let thread = engine.thread("C").expect("thread for C");
    assert_eq!(thread.messages()[0].sender, Sender::Candidate);
    assert_eq!(current_id(&engine).as_deref(), Some("C"));
    assert_eq!(engine.state(), SessionState::Active);

    // Pass C: exhausted
    let notices = engine.pass("C").unwrap();
    assert_eq!(
        notices.last(),
        Some(&Notice::NoMoreCandidates { domain: MatchingDomain::Doctor })
    );
    assert_eq!(engine.state(), SessionState::Exhausted);
    assert!(engine.current().is_none());

    assert_eq!(engine.matches().len(), 1);
}

#[test]
fn test_integration_filter_selects_single_profession() {
    let mut engine = create_engine(
        vec![
            create_test_profile("A", "Cardiologist"),
            create_test_profile("B", "Radiologist"),
        ],
        vec![],
    );

    engine.apply_filters(FilterSet::new(["Radiologist"]));

    assert_eq!(engine.session().len(), 1);
    assert_eq!(current_id(&engine).as_deref(), Some("B"));
}

#[test]
fn test_integration_filter_resets_pointer_after_exhaustion() {
    let mut engine = create_engine(
        vec![
            create_test_profile("A", "Cardiologist"),
            create_test_profile("B", "Radiologist"),
        ],
        vec![],
    );

    engine.pass("A").unwrap();
    engine.pass("B").unwrap();
    assert_eq!(engine.state(), SessionState::Exhausted);

    let state = engine.apply_filters(FilterSet::default());
    assert_eq!(state, SessionState::Active);
    assert_eq!(engine.session().pointer(), 0);
    assert_eq!(current_id(&engine).as_deref(), Some("A"));
}

#[test]
fn test_integration_exhausted_actions_are_noops() {
    let mut engine = create_engine(vec![create_test_profile("A", "Cardiologist")], vec![]);
    engine.like("A").unwrap();

    for _ in 0..3 {
        let rejection = engine.like("A").unwrap_err();
        assert_eq!(rejection, Rejection::ExhaustedSession);
        assert_eq!(
            rejection.notice(engine.domain()),
            Some(Notice::NoMoreCandidates { domain: MatchingDomain::Doctor })
        );
    }

    assert_eq!(engine.pass("A"), Err(Rejection::ExhaustedSession));
    assert_eq!(engine.message("A"), Err(Rejection::ExhaustedSession));
    assert_eq!(engine.matches().len(), 1);
    assert_eq!(engine.session().pointer(), 1);
    assert!(engine.thread("A").is_none());
}

#[test]
fn test_integration_delayed_click_is_stale() {
    let mut engine = create_engine(
        vec![
            create_test_profile("A", "Cardiologist"),
            create_test_profile("B", "Radiologist"),
        ],
        vec![],
    );

    engine.like("A").unwrap();
    // Second click on the same card arrives after the pointer moved on
    let rejection = engine.like("A").unwrap_err();

    assert!(matches!(rejection, Rejection::StaleCandidate { ref requested, .. } if requested == "A"));
    assert_eq!(engine.matches().len(), 1);
    assert_eq!(current_id(&engine).as_deref(), Some("B"));
}

#[test]
fn test_integration_send_message_rules() {
    let mut engine = create_engine(vec![create_test_profile("A", "Cardiologist")], vec![]);

    assert!(matches!(
        engine.send_message("A", ""),
        Err(Rejection::EmptyMessageText { .. })
    ));
    assert!(matches!(
        engine.send_message("A", "   "),
        Err(Rejection::EmptyMessageText { .. })
    ));
    assert!(engine.thread("A").is_none());

    // Sending needs a thread opened by the message action
    assert_eq!(
        engine.send_message("A", "hi"),
        Err(Rejection::NoConversation { candidate_id: "A".to_string() })
    );
    assert!(engine.thread("A").is_none());

    engine.message("A").unwrap();
    engine.send_message("A", "hi").unwrap();

    let thread = engine.thread("A").unwrap();
    assert_eq!(thread.len(), 1);
    assert_eq!(thread.messages()[0].sender, Sender::Me);
    assert_eq!(thread.messages()[0].text, "hi");
    assert_eq!(engine.stats().conversations, 1);
    assert_eq!(engine.stats().messages_sent, 1);
}

#[test]
fn test_integration_send_to_unknown_candidate() {
    let mut engine = create_engine(vec![create_test_profile("A", "Cardiologist")], vec![]);

    let rejection = engine.send_message("ghost", "hi").unwrap_err();

    assert_eq!(rejection, Rejection::NoConversation { candidate_id: "ghost".to_string() });
    assert!(engine.thread("ghost").is_none());
    assert!(engine.threads().is_empty());
    assert_eq!(engine.stats().conversations as usize, engine.threads().len());
}

#[test]
fn test_integration_shipped_fixtures() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/roster.toml");
    let fixtures = load_fixtures(&path).unwrap();

    for domain in MatchingDomain::ALL {
        let roster = fixtures.roster(domain).unwrap();
        assert_eq!(roster.len(), 3, "{} roster size", domain);

        let mut engine = MatchEngine::new(roster, ThreadStore::new(fixtures.seeds(domain)));
        let mut seen = 0;
        while let Some(id) = current_id(&engine) {
            engine.pass(&id).unwrap();
            seen += 1;
        }
        assert_eq!(seen, 3);
        assert_eq!(engine.state(), SessionState::Exhausted);
    }

    let mut engine = MatchEngine::new(
        fixtures.roster(MatchingDomain::Developer).unwrap(),
        ThreadStore::new(fixtures.seeds(MatchingDomain::Developer)),
    );
    engine.message("dev-1").unwrap();
    assert_eq!(engine.thread("dev-1").unwrap().len(), 2);
}
