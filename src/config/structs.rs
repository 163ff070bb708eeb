use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// 静态配置，启动时加载一次
///
/// - storage: 链接存储后端及数据位置
/// - ids: 生成的 ID 与短码长度
/// - geoip: 请求上下文的国家查询来源
/// - logging: 日志级别、格式与输出
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ids: IdConfig,
    #[serde(default)]
    pub geoip: GeoIpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "LR";

impl StaticConfig {
    /// 从 `config.toml` 和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀 `LR`，分隔符 `__`，例如 `LR__STORAGE__BACKEND=memory`
    pub fn load() -> Self {
        match Self::load_from(CONFIG_FILE) {
            Ok(config) => {
                if std::path::Path::new(CONFIG_FILE).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", CONFIG_FILE);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// 从指定路径加载，环境变量仍然生效
    pub fn load_from(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// `file` 或 `memory`
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    #[serde(default = "default_links_file")]
    pub file_path: String,
    #[serde(default)]
    pub seed_demo_links: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdConfig {
    #[serde(default = "default_id_length")]
    pub id_length: usize,
    #[serde(default = "default_short_code_length")]
    pub short_code_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeoIpConfig {
    /// MaxMind GeoLite2 数据库（Country 或 City 版本）
    #[serde(default)]
    pub maxminddb_path: Option<String>,
    /// `start,end,country` 格式的 IPv4 区间 CSV，未配置 MaxMind 数据库时使用
    #[serde(default)]
    pub csv_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `text` 或 `json`
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default)]
    pub enable_rotation: bool,
}

fn default_storage_backend() -> String {
    "file".to_string()
}

fn default_links_file() -> String {
    "links.json".to_string()
}

fn default_id_length() -> usize {
    25
}

fn default_short_code_length() -> usize {
    8
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            file_path: default_links_file(),
            seed_demo_links: false,
        }
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            id_length: default_id_length(),
            short_code_length: default_short_code_length(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: false,
        }
    }
}
