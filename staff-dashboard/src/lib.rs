//! Staff Dashboard - 餐厅前台看板核心
//!
//! # 架构概述
//!
//! 把预订集合转换成前台看板需要的数据，渲染由调用方负责：
//!
//! - **存储** (`store`): 字符串键值存储 (redb / 内存)
//! - **预订** (`bookings`): 读写、种子数据、筛选、状态流转、列表行
//! - **看板** (`dashboard`): 今日统计、即将到店、提醒
//! - **桌台** (`tables`): 24 桌平面图状态
//! - **员工** (`staff`): 问候信息与登出
//!
//! # 模块结构
//!
//! ```text
//! staff-dashboard/src/
//! ├── core/          # 配置、状态
//! ├── store/         # KeyValueStore + redb/内存实现
//! ├── bookings/      # 预订仓库与派生视图
//! ├── dashboard/     # 汇总与提醒
//! ├── tables/        # 桌台投影
//! ├── staff.rs       # 员工身份
//! └── utils/         # 日志、时钟
//! ```

pub mod bookings;
pub mod core;
pub mod dashboard;
pub mod staff;
pub mod store;
pub mod tables;
pub mod utils;

// Re-export 公共类型
pub use bookings::{BookingFilter, BookingRepository, StatusFilter, TransitionError, TransitionOutcome};
pub use core::{Config, DashboardState, TableSource};
pub use dashboard::aggregate;
pub use staff::StaffRepository;
pub use store::{KeyValueStore, MemoryStore, RedbStore, StoreError, StoreResult};
pub use utils::{Clock, FixedClock, SystemClock};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 按配置初始化环境: 日志目录 + tracing
pub fn setup_environment(config: &Config) -> std::io::Result<()> {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;
    init_logger_with_file(Some(config.log_level.as_str()), log_dir.to_str());
    Ok(())
}
