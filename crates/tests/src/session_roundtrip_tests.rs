use access::{KeyValueStore, MemoryStorage, SessionStore, LOGGED_IN_KEY, USER_INFO_KEY};
use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common::{customer, sales_manager};

#[test]
fn reload_restores_role_and_permissions() {
    let storage = MemoryStorage::new();
    let mut tab = SessionStore::new(storage.clone());
    let original = tab.login_with_record(sales_manager()).unwrap();

    let mut reloaded = SessionStore::new(storage);
    let restored = reloaded.restore().cloned().unwrap();
    assert_eq!(restored, original);
    assert!(reloaded.has_role(&Role::SalesManager));
    assert!(reloaded.has_permission("SaleTotal:view"));
    assert!(!reloaded.has_permission("TopCarModelList:view"));
}

#[test]
fn logout_survives_reload() {
    let storage = MemoryStorage::new();
    let mut tab = SessionStore::new(storage.clone());
    tab.login_with_record(customer()).unwrap();
    tab.logout();

    let mut reloaded = SessionStore::new(storage.clone());
    assert!(reloaded.restore().is_none());
    assert!(!reloaded.is_logged_in());
    assert!(storage.is_empty());
}

#[test]
fn second_login_replaces_first() {
    let storage = MemoryStorage::new();
    let mut tab = SessionStore::new(storage.clone());
    tab.login_with_record(sales_manager()).unwrap();
    tab.login_with_record(customer()).unwrap();

    let mut reloaded = SessionStore::new(storage);
    let session = reloaded.restore().unwrap();
    assert_eq!(session.username(), "LJJ");
    assert_eq!(session.role(), &Role::Customer);
    assert!(!session.has_permission("SaleTotal:view"));
}

#[test]
fn mirror_uses_the_browser_keys() {
    let storage = MemoryStorage::new();
    let mut tab = SessionStore::new(storage.clone());
    tab.login_with_record(customer()).unwrap();

    assert_eq!(storage.get(LOGGED_IN_KEY).as_deref(), Some("true"));
    let raw = storage.get(USER_INFO_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["user_id"], 2);
    assert_eq!(json["username"], "LJJ");
    assert_eq!(json["role"], "Customer");
    assert_eq!(
        json["permissions"],
        serde_json::json!(["Auth:view", "TopCarModelList:view"])
    );
    assert!(json["token"].as_str().unwrap().starts_with("mock-token-LJJ-"));
}

#[test]
fn corrupted_mirror_is_ignored_and_left_alone() {
    let mut storage = MemoryStorage::new();
    storage.set(LOGGED_IN_KEY, "true").unwrap();
    storage.set(USER_INFO_KEY, "{not json").unwrap();

    let mut store = SessionStore::new(storage.clone());
    assert!(store.restore().is_none());
    assert_eq!(storage.get(USER_INFO_KEY).as_deref(), Some("{not json"));
}

#[test]
fn legacy_roles_array_payload_restores() {
    let mut storage = MemoryStorage::new();
    storage.set(LOGGED_IN_KEY, "true").unwrap();
    storage
        .set(
            USER_INFO_KEY,
            r#"{"id":7,"username":"old","roles":["Customer"],"permissions":["FuelConsList:view"],"token":"t"}"#,
        )
        .unwrap();

    let mut store = SessionStore::new(storage);
    let session = store.restore().unwrap();
    assert_eq!(session.user_id(), 7);
    assert_eq!(session.role(), &Role::Customer);
    assert!(session.has_permission("FuelConsList:view"));
}

#[test]
fn flag_without_payload_means_logged_out() {
    let mut storage = MemoryStorage::new();
    storage.set(LOGGED_IN_KEY, "true").unwrap();
    let mut store = SessionStore::new(storage);
    assert!(store.restore().is_none());
}
