use std::sync::Arc;
use std::time::Instant;

use crate::core::config::LedgerBackend;
use crate::core::{Config, Result};
use crate::engine::{BookingEngine, MemoryCatalog, MemoryLedger, RedbLedger, ReservationLedger};
use crate::seed;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，作为 axum `State` 在处理器之间共享。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | engine | Arc<BookingEngine> | 订位引擎 |
/// | started_at | Instant | 启动时间 (health 运行时长) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub engine: Arc<BookingEngine>,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, engine: Arc<BookingEngine>) -> Self {
        Self {
            config,
            engine,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 打开账本 (memory / redb)
    /// 2. 加载演示桌台目录
    /// 3. 账本为空且启用时写入演示预订
    pub async fn initialize(config: &Config) -> Result<Self> {
        let ledger: Arc<dyn ReservationLedger> = match config.ledger_backend {
            LedgerBackend::Memory => Arc::new(MemoryLedger::new()),
            LedgerBackend::Redb => {
                std::fs::create_dir_all(&config.work_dir)?;
                let path = config.ledger_path();
                tracing::info!(path = %path.display(), "Opening redb ledger");
                Arc::new(RedbLedger::open(path)?)
            }
        };

        let catalog = Arc::new(MemoryCatalog::new(seed::demo_tables())?);
        tracing::info!(tables = catalog.len(), "Table catalog loaded");

        let engine = Arc::new(BookingEngine::new(catalog, ledger, config.engine()));

        if config.seed_demo_data {
            let existing = engine.reservation_count()?;
            if existing == 0 {
                let today = chrono::Local::now().date_naive();
                seed::seed_reservations(&engine, today, config.seed_days).await?;
            } else {
                tracing::info!(existing, "Ledger not empty, skipping demo reservations");
            }
        }

        Ok(Self::new(config.clone(), engine))
    }
}
