//! End-to-end flows for the draft engine: answers survive process
//! restarts, rapid writes never drop each other's keys, and the hub's
//! streak view behaves under partial backend failure.

use daybook_core::{
    DraftStore, DraftUpdate, EntrySession, JournalHub, PortalClient, SqliteBackend, StreakView,
};
use tempfile::TempDir;

#[test]
fn answers_from_before_a_reload_survive_alongside_new_ones() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("drafts.db");

    // First visit: answer question 1, then the process goes away.
    {
        let store = DraftStore::new(SqliteBackend::open_at(&db_path).unwrap());
        let mut session = EntrySession::begin(store, "2026-08-27");
        session.apply(&DraftUpdate::scale(1, 4));
    }

    // After the reload: answer question 2 in a fresh session.
    let store = DraftStore::new(SqliteBackend::open_at(&db_path).unwrap());
    let mut session = EntrySession::begin(store, "2026-08-27");
    assert!(!session.is_dirty());
    session.apply(&DraftUpdate::scale(2, 2));

    let answers = session.answers();
    assert_eq!(answers.scales.get(&1), Some(&4));
    assert_eq!(answers.scales.get(&2), Some(&2));
}

#[test]
fn rapid_saves_to_different_fields_both_land() {
    let temp_dir = TempDir::new().unwrap();
    let backend = SqliteBackend::open_at(temp_dir.path().join("drafts.db")).unwrap();
    let mut session = EntrySession::begin(DraftStore::new(backend), "2026-08-27");

    // Fired back-to-back from two different question widgets.
    session.apply(&DraftUpdate::select(0, vec!["a".into()]));
    session.apply(&DraftUpdate::scale(0, 5));

    let answers = session.answers();
    assert_eq!(answers.selected.get(&0), Some(&vec!["a".to_string()]));
    assert_eq!(answers.scales.get(&0), Some(&5));
}

#[test]
fn discard_clears_the_persisted_draft() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("drafts.db");

    {
        let store = DraftStore::new(SqliteBackend::open_at(&db_path).unwrap());
        let mut session = EntrySession::begin(store, "e");
        session.apply(&DraftUpdate::scale(1, 3));
        session.discard();
    }

    let store = DraftStore::new(SqliteBackend::open_at(&db_path).unwrap());
    assert!(store.load("e").is_empty());
}

#[tokio::test]
async fn hub_mount_reconciles_mixed_success_and_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/streaks/emotions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"current_streak": 3}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/streaks/self-care")
        .with_status(500)
        .create_async()
        .await;

    let hub = JournalHub::new(
        PortalClient::new(server.url()),
        vec!["emotions".into(), "self-care".into()],
    );

    let records = hub.mount().await;
    assert_eq!(records["emotions"].current_streak, 3);
    assert_eq!(records["self-care"].current_streak, 0);

    match hub.streaks() {
        StreakView::Ready(view) => assert_eq!(view, records),
        other => panic!("expected ready view, got {other:?}"),
    }
}
