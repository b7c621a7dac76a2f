//! 成就评估引擎
//!
//! 对用户的完整打卡历史做全量扫描式评估，推导当前应解锁的成就集合，支持：
//! - 封闭的饮酒状态枚举（非法取值在构造期报错）
//! - 连续清醒天数、月度打卡完整性、周末组合、距上次重度饮酒间隔等时间模式
//! - 纯函数评估：无跨调用状态，重复调用天然幂等

pub mod error;
pub mod evaluator;
pub mod keys;
pub mod models;

pub use error::{EngineError, Result};
pub use evaluator::AchievementEvaluator;
pub use models::{DayStatus, LogDay};
