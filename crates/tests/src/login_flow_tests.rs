use std::time::Duration;

use access::guard::evaluate;
use access::{MemoryStorage, MockDirectory, SessionStore};
use pretty_assertions::assert_eq;
use server::login::{delayed_login, verify_login};
use shared_types::{AppErrorKind, AuthError, GuardDecision, LoginRequest, Role};

use crate::common::portal_resolver;

fn credentials(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn sales_manager_logs_in_and_lands_on_sales_overview() {
    let resolver = portal_resolver();
    let directory = MockDirectory::demo();
    let record = delayed_login(&credentials("DB", "123"), &directory, Duration::from_millis(5))
        .await
        .unwrap();

    let mut store = SessionStore::new(MemoryStorage::new());
    let session = store.login_with_record(record).unwrap();
    let landing = resolver.default_route_for(session.role());
    assert_eq!(landing, "/app/SaleTotal");
    assert!(evaluate(Some(&session), landing, &resolver).is_allowed());
    assert_eq!(
        evaluate(Some(&session), "/app/FuelConsList", &resolver),
        GuardDecision::RedirectDefault {
            to: "/app/SaleTotal".into()
        }
    );
}

#[tokio::test]
async fn customer_logs_in_and_lands_on_top_models() {
    let resolver = portal_resolver();
    let record = delayed_login(
        &credentials("LJJ", "1234"),
        &MockDirectory::demo(),
        Duration::ZERO,
    )
    .await
    .unwrap();
    assert_eq!(record.role, Some(Role::Customer));

    let mut store = SessionStore::new(MemoryStorage::new());
    let session = store.login_with_record(record).unwrap();
    assert_eq!(
        resolver.default_route_for(session.role()),
        "/app/TopCarModelList"
    );
    assert!(session.has_permission("TopCarModelList:view"));
}

#[test]
fn wrong_password_is_unauthorized() {
    let err = verify_login(&credentials("DB", "1234"), &MockDirectory::demo()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid username or password");
}

#[test]
fn blank_fields_fail_validation_before_lookup() {
    let err = verify_login(&credentials("", ""), &MockDirectory::demo()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("username"));
    assert!(err.field_errors.contains_key("password"));
}

#[test]
fn store_login_against_directory_persists_session() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    let session = store
        .login(&credentials("DB", "123"), &MockDirectory::demo())
        .unwrap();
    assert_eq!(session.username(), "DB");

    let mut reloaded = SessionStore::new(storage);
    assert_eq!(reloaded.restore(), Some(&session));
}

#[test]
fn rejected_login_leaves_store_untouched() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    let err = store
        .login(&credentials("LJJ", "nope"), &MockDirectory::demo())
        .unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(!store.is_logged_in());
    assert!(storage.is_empty());
}

#[test]
fn logout_sends_protected_navigation_back_to_login() {
    let resolver = portal_resolver();
    let mut store = SessionStore::new(MemoryStorage::new());
    store
        .login(&credentials("LJJ", "1234"), &MockDirectory::demo())
        .unwrap();
    store.logout();
    assert_eq!(
        evaluate(store.session(), "/app/TopCarModelList", &resolver),
        GuardDecision::RedirectLogin
    );
}
