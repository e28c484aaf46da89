use access::{catalog, MemoryStorage, PermissionResolver, SessionStore};
use shared_types::{PortalConfig, Role, Session, UserRecord};

/// Resolver over the shipped route catalog and default config.
pub fn portal_resolver() -> PermissionResolver {
    catalog::resolver(&PortalConfig::default()).expect("shipped route catalog must validate")
}

pub fn record(id: i64, username: &str, role: Role, permissions: &[&str]) -> UserRecord {
    UserRecord {
        id,
        username: username.to_string(),
        role: Some(role),
        roles: Vec::new(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn sales_manager() -> UserRecord {
    record(1, "DB", Role::SalesManager, &["Auth:view", "SaleTotal:view"])
}

pub fn customer() -> UserRecord {
    record(2, "LJJ", Role::Customer, &["Auth:view", "TopCarModelList:view"])
}

/// A logged-in session for `record`, via a throwaway store.
pub fn session_for(record: UserRecord) -> Session {
    SessionStore::new(MemoryStorage::new())
        .login_with_record(record)
        .expect("fixture record must produce a session")
}

/// Every full path in the catalog that is a page a user can open.
pub fn page_paths() -> Vec<String> {
    portal_resolver()
        .table()
        .routes()
        .filter(|r| !r.layout)
        .map(|r| r.path.clone())
        .collect()
}
