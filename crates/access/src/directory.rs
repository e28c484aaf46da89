use shared_types::{AuthError, LoginRequest, Role, UserRecord};

/// Something that can turn credentials into a user record.
pub trait Authenticator {
    fn authenticate(&self, credentials: &LoginRequest) -> Result<UserRecord, AuthError>;
}

/// One entry of the mock allow-list.
#[derive(Debug, Clone)]
pub struct MockAccount {
    pub password: String,
    pub record: UserRecord,
}

/// Fixed allow-list standing in for the real login backend.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    accounts: Vec<MockAccount>,
}

impl MockDirectory {
    pub fn new(accounts: Vec<MockAccount>) -> Self {
        Self { accounts }
    }

    /// The demo accounts: `DB`/`123` (SalesManager) and `LJJ`/`1234` (Customer).
    pub fn demo() -> Self {
        Self::new(vec![
            MockAccount {
                password: "123".into(),
                record: UserRecord {
                    id: 1,
                    username: "DB".into(),
                    role: Some(Role::SalesManager),
                    roles: Vec::new(),
                    permissions: vec!["Auth:view".into(), "SaleTotal:view".into()],
                },
            },
            MockAccount {
                password: "1234".into(),
                record: UserRecord {
                    id: 2,
                    username: "LJJ".into(),
                    role: Some(Role::Customer),
                    roles: Vec::new(),
                    permissions: vec!["Auth:view".into(), "TopCarModelList:view".into()],
                },
            },
        ])
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::demo()
    }
}

impl Authenticator for MockDirectory {
    fn authenticate(&self, credentials: &LoginRequest) -> Result<UserRecord, AuthError> {
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::InvalidRequest(
                "username and password are required".into(),
            ));
        }
        self.accounts
            .iter()
            .find(|a| a.record.username == credentials.username && a.password == credentials.password)
            .map(|a| a.record.clone())
            .ok_or(AuthError::InvalidCredentials)
    }
}
