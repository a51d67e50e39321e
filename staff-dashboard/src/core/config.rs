use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// 桌台视图来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableSource {
    /// Fixed 24-table floor plan with preset states
    #[default]
    Fixture,
    /// Same floor plan, state derived from today's bookings
    Bookings,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid TABLE_SOURCE: {0} (expected fixture | bookings)")]
    InvalidTableSource(String),
}

impl FromStr for TableSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixture" => Ok(TableSource::Fixture),
            "bookings" => Ok(TableSource::Bookings),
            other => Err(ConfigError::InvalidTableSource(other.to_string())),
        }
    }
}

/// 看板配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | STORE_FILE | dashboard.redb | redb 文件名 |
/// | LOG_LEVEL | info | 日志级别 |
/// | TABLE_SOURCE | fixture | 桌台视图来源: fixture / bookings |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/dashboard TABLE_SOURCE=bookings cargo test
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// redb 文件名 (相对 work_dir)
    pub store_file: String,
    pub log_level: String,
    pub table_source: TableSource,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 先读取 `.env` (如果存在)，未设置的项使用默认值。
    /// 无法识别的 `TABLE_SOURCE` 记录警告并回退到 fixture。
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        let table_source = match std::env::var("TABLE_SOURCE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e: ConfigError| {
                tracing::warn!("{}, falling back to fixture", e);
                TableSource::Fixture
            }),
            Err(_) => TableSource::default(),
        };

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            store_file: std::env::var("STORE_FILE").unwrap_or_else(|_| "dashboard.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            table_source,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, table_source: TableSource) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.table_source = table_source;
        config
    }

    /// redb 文件完整路径
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.store_file)
    }

    /// 日志目录
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
