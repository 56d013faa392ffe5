use std::path::PathBuf;

use crate::engine::{EngineConfig, ScoringWeights};

/// 账本后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerBackend {
    /// 内存账本，进程退出即丢失
    Memory,
    /// redb 持久化账本 (`{WORK_DIR}/reservations.redb`)
    Redb,
}

impl LedgerBackend {
    fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "redb" | "disk" => LedgerBackend::Redb,
            _ => LedgerBackend::Memory,
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (redb 文件、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按天滚动写文件 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LEDGER_BACKEND | memory | `memory` 或 `redb` |
/// | SEATING_DURATION_MINUTES | 120 | 每次用餐时长 (1..=1440，超出范围回落到 120) |
/// | TOP_CANDIDATES | 4 | 推荐之外返回的备选数量 |
/// | SCORE_BASE | 100 | 评分基准 |
/// | SCORE_CAPACITY_PENALTY | 10 | 每个空座扣分 |
/// | SCORE_FEATURE_WEIGHT | 20 | 每个匹配特征加分 |
/// | SCORE_ZONE_WEIGHT | 15 | 区域匹配加分 |
/// | SEED_DEMO_DATA | true | 启动时写入演示数据 |
/// | SEED_DAYS | 7 | 演示预订覆盖天数 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// LEDGER_BACKEND=redb HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    pub ledger_backend: LedgerBackend,
    pub seating_duration_minutes: i64,
    pub top_candidates: usize,
    pub score_base: i32,
    pub score_capacity_penalty: i32,
    pub score_feature_weight: i32,
    pub score_zone_weight: i32,
    pub seed_demo_data: bool,
    pub seed_days: u32,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

const DEFAULT_SEATING_MINUTES: i64 = 120;
/// 单次用餐不超过一天
const MAX_SEATING_MINUTES: i64 = 24 * 60;

/// 超出 `1..=MAX_SEATING_MINUTES` 的时长回落到默认值
fn seating_minutes(value: i64) -> i64 {
    if (1..=MAX_SEATING_MINUTES).contains(&value) {
        value
    } else {
        DEFAULT_SEATING_MINUTES
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析的变量使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: env_or("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            log_json: env_or("LOG_JSON", false),
            ledger_backend: std::env::var("LEDGER_BACKEND")
                .map(|v| LedgerBackend::from_env_value(&v))
                .unwrap_or(LedgerBackend::Memory),
            seating_duration_minutes: seating_minutes(env_or(
                "SEATING_DURATION_MINUTES",
                DEFAULT_SEATING_MINUTES,
            )),
            top_candidates: env_or("TOP_CANDIDATES", 4),
            score_base: env_or("SCORE_BASE", 100),
            score_capacity_penalty: env_or("SCORE_CAPACITY_PENALTY", 10),
            score_feature_weight: env_or("SCORE_FEATURE_WEIGHT", 20),
            score_zone_weight: env_or("SCORE_ZONE_WEIGHT", 15),
            seed_demo_data: env_or("SEED_DEMO_DATA", true),
            seed_days: env_or("SEED_DAYS", 7),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 引擎参数
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            // 字段是公开的，这里再校验一次
            seating_duration: chrono::Duration::try_minutes(seating_minutes(
                self.seating_duration_minutes,
            ))
            .unwrap_or(chrono::Duration::minutes(DEFAULT_SEATING_MINUTES)),
            top_candidates: self.top_candidates,
            weights: ScoringWeights {
                base: self.score_base,
                capacity_penalty: self.score_capacity_penalty,
                feature_weight: self.score_feature_weight,
                zone_weight: self.score_zone_weight,
            },
        }
    }

    /// redb 账本文件路径
    pub fn ledger_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("reservations.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_backend_parsing() {
        assert_eq!(LedgerBackend::from_env_value("redb"), LedgerBackend::Redb);
        assert_eq!(LedgerBackend::from_env_value(" REDB "), LedgerBackend::Redb);
        assert_eq!(LedgerBackend::from_env_value("memory"), LedgerBackend::Memory);
        assert_eq!(LedgerBackend::from_env_value("whatever"), LedgerBackend::Memory);
    }

    #[test]
    fn test_engine_config_mapping() {
        let mut config = Config::with_overrides("/tmp/reservations", 0);
        config.seating_duration_minutes = 90;
        config.top_candidates = 2;
        config.score_zone_weight = 30;

        let engine = config.engine();
        assert_eq!(engine.seating_duration, chrono::Duration::minutes(90));
        assert_eq!(engine.top_candidates, 2);
        assert_eq!(engine.weights.zone_weight, 30);
        assert_eq!(
            config.ledger_path(),
            PathBuf::from("/tmp/reservations/reservations.redb")
        );
    }

    #[test]
    fn test_out_of_range_seating_duration_falls_back() {
        let mut config = Config::with_overrides("/tmp/reservations", 0);
        for minutes in [0, -30, MAX_SEATING_MINUTES + 1, i64::MAX / 2, i64::MAX] {
            config.seating_duration_minutes = minutes;
            assert_eq!(
                config.engine().seating_duration,
                chrono::Duration::minutes(DEFAULT_SEATING_MINUTES),
                "{minutes}"
            );
        }
        config.seating_duration_minutes = MAX_SEATING_MINUTES;
        assert_eq!(config.engine().seating_duration, chrono::Duration::days(1));
    }
}
