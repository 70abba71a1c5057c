pub mod identity_store;
pub mod paths;

pub use identity_store::FileIdentityStore;
pub use paths::{config_dir, config_file, data_dir, ensure_dirs, identity_file};
