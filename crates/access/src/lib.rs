pub mod catalog;
pub mod directory;
pub mod guard;
pub mod resolver;
pub mod storage;
pub mod store;
pub mod table;

pub use directory::{Authenticator, MockAccount, MockDirectory};
pub use resolver::PermissionResolver;
pub use storage::{KeyValueStore, MemoryStorage};
pub use store::{SessionStore, LOGGED_IN_KEY, USER_INFO_KEY};
pub use table::{ResolvedRoute, RouteTable};
