pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, HomeDirError, choose_app_strategy};

use std::env;
use std::path::PathBuf;

pub fn create_strategy() -> Result<impl AppStrategy, HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Resolve a directory: the environment variable wins, then the platform
/// strategy when there is one, then `<temp>/corpus-view`.
pub fn resolve_dir<S, F>(env_key: &str, strategy: Option<&S>, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> PathBuf,
{
    env::var_os(env_key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| strategy.map(strategy_fn))
        .unwrap_or_else(fallback_dir)
}

pub fn fallback_dir() -> PathBuf {
    env::temp_dir().join(constants::APP_NAME)
}

/// `$CONFIG_DIRECTORY`, else the platform config dir. Never fails: without
/// a home directory the temp fallback is used.
pub fn config_dir() -> PathBuf {
    let strategy = create_strategy().ok();
    resolve_dir(constants::ENV_CONFIG_DIRECTORY, strategy.as_ref(), |s| s.config_dir())
}

/// `$DATA_DIRECTORY`, else the platform data dir.
pub fn data_dir() -> PathBuf {
    let strategy = create_strategy().ok();
    resolve_dir(constants::ENV_DATA_DIRECTORY, strategy.as_ref(), |s| s.data_dir())
}
