pub mod errors;
pub mod id;
pub mod identity;
pub mod notice;

pub use errors::{ConfigError, PlatformError, TituError};
pub use id::{new_correlation_id, new_id, SessionId};
pub use identity::{IdentityProvider, MemoryIdentityStore, SESSION_ID_KEY};
pub use notice::{Notice, NoticeLevel};
