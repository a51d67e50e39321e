use std::sync::Arc;

use shared::models::{BookingRow, DashboardSnapshot, DiningTable, StaffGreeting};

use crate::bookings::{BookingFilter, BookingRepository, TransitionOutcome, TransitionResult};
use crate::core::Config;
use crate::core::config::TableSource;
use crate::staff::StaffRepository;
use crate::store::{KeyValueStore, RedbStore, StoreResult};
use crate::utils::{Clock, SystemClock};
use crate::{bookings, dashboard, tables};

/// 看板状态 - 持有存储、仓库与时钟
///
/// 每次查询都重新读取完整集合，不做缓存。
#[derive(Clone)]
pub struct DashboardState {
    table_source: TableSource,
    clock: Arc<dyn Clock>,
    bookings: BookingRepository,
    staff: StaffRepository,
}

impl DashboardState {
    /// 按配置打开 redb 存储并使用系统时钟
    pub fn initialize(config: &Config) -> StoreResult<Self> {
        let path = config.store_path();
        let store = RedbStore::open(&path)?;
        tracing::info!(path = %path.display(), "Dashboard store opened");
        Ok(Self::with_store(config, Arc::new(store), Arc::new(SystemClock)))
    }

    /// 注入存储与时钟 (测试用)
    pub fn with_store(
        config: &Config,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            table_source: config.table_source,
            bookings: BookingRepository::new(store.clone(), clock.clone()),
            staff: StaffRepository::new(store),
            clock,
        }
    }

    pub fn bookings(&self) -> &BookingRepository {
        &self.bookings
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        dashboard::aggregate(&self.bookings.load(), self.clock.now())
    }

    pub fn tables(&self) -> Vec<DiningTable> {
        match self.table_source {
            TableSource::Fixture => tables::project(),
            TableSource::Bookings => {
                tables::project_from_bookings(&self.bookings.load(), self.clock.now())
            }
        }
    }

    pub fn booking_rows(&self, filter: &BookingFilter) -> Vec<BookingRow> {
        bookings::booking_rows(&self.bookings.load(), filter)
    }

    pub fn complete_booking(&self, booking_id: &str) -> TransitionResult<TransitionOutcome> {
        self.bookings.complete_booking(booking_id)
    }

    pub fn greeting(&self) -> StaffGreeting {
        self.staff.greeting()
    }

    pub fn sign_out(&self) -> StoreResult<()> {
        self.staff.sign_out()
    }
}
