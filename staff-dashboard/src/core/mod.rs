//! 核心模块 - 配置与状态
//!
//! - [`Config`] - 看板配置
//! - [`DashboardState`] - 存储、仓库与时钟的组合

pub mod config;
pub mod state;

pub use config::{Config, ConfigError, TableSource};
pub use state::DashboardState;
