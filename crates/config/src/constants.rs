pub const TOP_LEVEL_DOMAIN: &str = "io";
pub const AUTHOR: &str = "docman";
pub const APP_NAME: &str = "docman";

/// 配置文件名（位于平台配置目录下）
pub const CONFIG_FILE_NAME: &str = "docman.toml";

/// 文档目录名（位于平台数据目录下）
pub const DOCUMENTS_DIR_NAME: &str = "documents";

/// 覆盖文档目录的环境变量
pub const DOCUMENTS_DIR_ENV: &str = "DOCMAN_DOCUMENTS_DIR";
