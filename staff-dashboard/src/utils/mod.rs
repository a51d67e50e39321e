//! 工具模块 - 日志与时间
//!
//! - [`logger`] - tracing 初始化
//! - [`time`] - 时钟与表头格式化

pub mod logger;
pub mod time;

pub use time::{Clock, FixedClock, SystemClock};
