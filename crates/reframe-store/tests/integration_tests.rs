//! Integration tests for reframe-store
//!
//! These tests verify the full create/list/delete cycle for saved reframes.

use reframe_domain::traits::{ReframeQuery, ReframeStore};
use reframe_domain::{reframe, ReframeId, SavedReframe};
use reframe_store::{SqliteStore, StoreError};
use tempfile::TempDir;

fn saved(text: &str, created_at: u64) -> SavedReframe {
    SavedReframe {
        id: ReframeId::new(),
        text: text.to_string(),
        created_at,
    }
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_save_and_get_reframe() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let text = reframe(["Sad"], "You are loved");
    let record = SavedReframe::new(text.clone());
    let id = store.save_reframe(record.clone()).unwrap();
    assert_eq!(id, record.id);

    let retrieved = store.get_reframe(id).unwrap().expect("Should retrieve the reframe");
    assert_eq!(retrieved, record);
    assert_eq!(retrieved.text, text);
}

#[test]
fn test_get_missing_reframe() {
    let store = SqliteStore::new(":memory:").unwrap();
    assert!(store.get_reframe(ReframeId::new()).unwrap().is_none());
}

#[test]
fn test_duplicate_text_rejected() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    store.save_reframe(saved("I matter", 1000)).unwrap();
    let result = store.save_reframe(saved("I matter", 2000));
    assert!(matches!(result, Err(StoreError::Duplicate)), "Should reject duplicate text");
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_list_in_creation_order() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    store.save_reframe(saved("third", 3000)).unwrap();
    store.save_reframe(saved("first", 1000)).unwrap();
    store.save_reframe(saved("second", 2000)).unwrap();

    let texts: Vec<String> = store
        .list_reframes(&ReframeQuery::default())
        .unwrap()
        .into_iter()
        .map(|r| r.text)
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[test]
fn test_list_with_filter_and_limit() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    for (i, text) in ["I am Safe", "I am strong", "I belong", "I am SAFE here"].iter().enumerate() {
        store.save_reframe(saved(text, 1000 + i as u64)).unwrap();
    }

    let query = ReframeQuery {
        contains: Some("safe".to_string()),
        ..Default::default()
    };
    assert_eq!(store.list_reframes(&query).unwrap().len(), 2);

    let query = ReframeQuery {
        limit: Some(3),
        ..Default::default()
    };
    let results = store.list_reframes(&query).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].text, "I am Safe");
}

#[test]
fn test_filter_folds_non_ascii_case() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.save_reframe(saved("I feel ÉPUISÉ, and that is fine", 1)).unwrap();
    store.save_reframe(saved("I feel calm", 2)).unwrap();

    let query = ReframeQuery {
        contains: Some("épuisé".to_string()),
        ..Default::default()
    };
    let results = store.list_reframes(&query).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].text.contains("ÉPUISÉ"));
}

#[test]
fn test_filter_then_limit() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    for (i, text) in ["I rest", "I am safe", "I grow", "I am SAFE now", "safe again"].iter().enumerate() {
        store.save_reframe(saved(text, 10 + i as u64)).unwrap();
    }

    let query = ReframeQuery {
        contains: Some("Safe".to_string()),
        limit: Some(2),
    };
    let texts: Vec<String> = store.list_reframes(&query).unwrap().into_iter().map(|r| r.text).collect();
    assert_eq!(texts, ["I am safe", "I am SAFE now"]);
}

#[test]
fn test_filter_treats_wildcards_literally() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.save_reframe(saved("I feel 100% okay", 1)).unwrap();
    store.save_reframe(saved("I feel okay", 2)).unwrap();

    let query = ReframeQuery {
        contains: Some("%".to_string()),
        ..Default::default()
    };
    assert_eq!(store.list_reframes(&query).unwrap().len(), 1);
}

#[test]
fn test_delete_reframe() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let id = store.save_reframe(saved("I got this", 1000)).unwrap();
    assert!(store.delete_reframe(id).unwrap());
    assert!(!store.delete_reframe(id).unwrap(), "Second delete finds nothing");
    assert!(store.get_reframe(id).unwrap().is_none());
}

#[test]
fn test_remove_missing_is_not_found() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let result = store.remove_reframe(ReframeId::new());
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_persists_across_connections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reframes.db");

    let id = {
        let mut store = SqliteStore::new(&path).unwrap();
        store.save_reframe(saved("I am enough", 42)).unwrap()
    };

    let store = SqliteStore::new(&path).unwrap();
    let reframe = store.get_reframe(id).unwrap().unwrap();
    assert_eq!(reframe.text, "I am enough");
    assert_eq!(reframe.created_at, 42);
}
