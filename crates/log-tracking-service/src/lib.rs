//! 打卡与成就服务
//!
//! 提供打卡记录的写入/查询，以及打卡变更后的成就评估与对账。
//!
//! ## 核心功能
//!
//! - **按日打卡**：每用户每自然日一条记录，重复提交覆盖当日状态
//! - **打卡查询**：按自然月、按最近一年查询历史
//! - **成就评估**：打卡变更后全量重估应解锁的成就集合
//! - **成就对账**：把持久化的解锁记录收敛到评估结果（可新增、可撤销）
//! - **成就视图**：目录定义与用户解锁状态的合并展示
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `repository`: 数据库仓储层
//! - `service`: 业务服务层
//!
//! 对外传输层（HTTP 等）由上层接入方提供，本 crate 只暴露服务接口。

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{Result, TrackingError};
pub use models::{DrinkingLog, UserAchievement};
pub use repository::{DrinkingLogRepository, UserAchievementRepository};
pub use service::{AchievementService, LogChangeListener, LogService, dto};
