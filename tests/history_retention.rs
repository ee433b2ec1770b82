use sofia_relay::history::{ HistoryStore, SqliteHistoryStore };
use sofia_relay::models::chat::Role;

// In-memory database just for tests; same schema as the file-backed store.
fn test_store(keep: usize) -> SqliteHistoryStore {
    SqliteHistoryStore::open_in_memory(keep).unwrap()
}

#[tokio::test]
async fn history_is_capped_at_the_retention_limit() {
    let store = test_store(20);

    for i in 0..25 {
        store.append(1, Role::User, &format!("message {}", i)).await.unwrap();
    }

    let history = store.history(1).await.unwrap();
    assert_eq!(history.len(), 20);

    // Only the most recent 20 survive, oldest first.
    for (idx, msg) in history.iter().enumerate() {
        assert_eq!(msg.content, format!("message {}", idx + 5));
        assert_eq!(msg.role, Role::User);
    }
}

#[tokio::test]
async fn twenty_first_append_evicts_the_oldest() {
    let store = test_store(20);

    for i in 0..20 {
        store.append(7, Role::User, &format!("message {}", i)).await.unwrap();
    }
    let history = store.history(7).await.unwrap();
    assert_eq!(history.len(), 20);
    assert_eq!(history[0].content, "message 0");

    store.append(7, Role::Assistant, "message 20").await.unwrap();

    let history = store.history(7).await.unwrap();
    assert_eq!(history.len(), 20);
    assert_eq!(history[0].content, "message 1");
    assert_eq!(history[19].content, "message 20");
    assert_eq!(history[19].role, Role::Assistant);
}

#[tokio::test]
async fn insertion_order_survives_same_second_timestamps() {
    // All appends land within the same wall-clock second, so ordering must
    // come from insertion sequence rather than the timestamp value.
    let store = test_store(20);

    for i in 0..10 {
        store.append(3, Role::User, &format!("burst {}", i)).await.unwrap();
    }

    let history = store.history(3).await.unwrap();
    let contents: Vec<_> = history
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    let expected: Vec<String> = (0..10).map(|i| format!("burst {}", i)).collect();
    assert_eq!(contents, expected.iter().map(|s| s.as_str()).collect::<Vec<_>>());
}

#[tokio::test]
async fn users_are_isolated_from_each_other() {
    let store = test_store(20);

    for i in 0..30 {
        store.append(1, Role::User, &format!("a {}", i)).await.unwrap();
    }
    store.append(2, Role::User, "b only").await.unwrap();

    let history_b = store.history(2).await.unwrap();
    assert_eq!(history_b.len(), 1);
    assert_eq!(history_b[0].content, "b only");

    let history_a = store.history(1).await.unwrap();
    assert_eq!(history_a.len(), 20);
    assert!(history_a.iter().all(|m| m.content.starts_with("a ")));
}

#[tokio::test]
async fn empty_history_for_unknown_user() {
    let store = test_store(20);
    let history = store.history(99).await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn roles_round_trip_through_the_store() {
    let store = test_store(20);

    store.append(5, Role::User, "hi").await.unwrap();
    store.append(5, Role::Assistant, "hello").await.unwrap();

    let history = store.history(5).await.unwrap();
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[1].role, Role::Assistant);
}
