//! Reservation Server - 餐厅桌台可用性与推荐服务
//!
//! # 模块结构
//!
//! ```text
//! reservation-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── engine/        # 桌台目录、预订账本、可用性、推荐、准入控制
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、统一错误类型
//! └── seed.rs        # 演示数据
//! ```

pub mod api;
pub mod core;
pub mod engine;
pub mod seed;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use engine::{BookingEngine, EngineConfig, EngineError, EngineResult};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env, 读取配置, 创建工作目录, 初始化日志
pub fn setup_environment() -> std::io::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    init_logger_with_file(
        Some(config.log_level.as_str()),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____                                  __  _
   / __ \___  ________  ______   ______ _/ /_(_)___  ____
  / /_/ / _ \/ ___/ _ \/ ___/ | / / __ `/ __/ / __ \/ __ \
 / _, _/  __(__  )  __/ /   | |/ / /_/ / /_/ / /_/ / / / /
/_/ |_|\___/____/\___/_/    |___/\__,_/\__/_/\____/_/ /_/
    "#
    );
}
