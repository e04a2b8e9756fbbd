//! Command implementations.

pub mod catalog;
pub mod compose;
pub mod configure;
pub mod delete;
pub mod list;
pub mod rewrite;
pub mod rules;

pub use self::catalog::execute_catalog;
pub use self::compose::execute_compose;
pub use self::configure::execute_config;
pub use self::delete::execute_delete;
pub use self::list::execute_list;
pub use self::rewrite::execute_rewrite;
pub use self::rules::execute_rules;

use crate::config::Config;
use crate::error::Result;
use reframe_store::SqliteStore;
use tracing::debug;

/// Open the saved-reframes store named by the configuration.
pub fn open_store(config: &Config) -> Result<SqliteStore> {
    let path = config.database_path()?;
    debug!("Using database {}", path.display());
    Ok(SqliteStore::new(path)?)
}
