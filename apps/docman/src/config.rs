use crate::error::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use search_core::IndexConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// 文档所在目录
    pub documents_dir: PathBuf,
    /// 启动时是否创建缺失的示例文档
    pub seed_documents: bool,
    /// 额外的停用词
    pub extra_stop_words: Vec<String>,
}

fn default_config() -> Config {
    Config {
        documents_dir: config::default_documents_dir(),
        seed_documents: true,
        extra_stop_words: vec![],
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    /// 加载配置
    ///
    /// 未指定路径时使用平台配置目录；默认位置的配置文件不存在时写入示例配置。
    pub fn load(location: Option<&Path>) -> Result<Config> {
        if let Some(path) = location {
            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Cannot read config file {:?}", path))?;
            return Self::load_str(&content);
        }

        let Some(config_path) = config::default_config_path() else {
            tracing::warn!("无法确定配置目录，使用默认配置");
            return Self::load_str("");
        };

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn index_config(&self) -> IndexConfig {
        IndexConfig::with_extra_stop_words(self.extra_stop_words.iter().cloned())
    }

    fn create_example_config(config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# docman 配置文件
#
# 此文件在首次运行时自动创建

# 文档目录（也可用环境变量 DOCMAN_DOCUMENTS_DIR 覆盖默认值）
# documents-dir = "/home/yourname/Documents/docman"

# 启动时创建缺失的 document1.docx ~ document5.docx
seed-documents = true

# 额外的停用词，追加到内置英文停用词表
extra-stop-words = []
"#;

        std::fs::write(config_path, example_config)?;
        tracing::info!("已创建配置文件: {:?}", config_path);
        Ok(())
    }
}
