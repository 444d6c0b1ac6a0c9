pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::path::PathBuf;
use std::env;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| fallback_dir())
}

/// 默认文档目录
///
/// 顺序：环境变量 -> 平台数据目录 -> 临时目录
pub fn default_documents_dir() -> PathBuf {
    match create_strategy() {
        Ok(strategy) => resolve_dir(constants::DOCUMENTS_DIR_ENV, &strategy, |s| {
            Some(s.data_dir().join(constants::DOCUMENTS_DIR_NAME))
        }),
        Err(_) => env::var_os(constants::DOCUMENTS_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| fallback_dir().join(constants::DOCUMENTS_DIR_NAME)),
    }
}

/// 配置文件的默认位置，无法确定 HOME 时返回 None
pub fn default_config_path() -> Option<PathBuf> {
    let strategy = create_strategy().ok()?;
    Some(strategy.config_dir().join(constants::CONFIG_FILE_NAME))
}

fn fallback_dir() -> PathBuf {
    env::temp_dir().join(constants::APP_NAME)
}
