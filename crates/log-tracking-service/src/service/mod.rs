//! 服务层
//!
//! 实现打卡与成就的业务逻辑，协调仓储层与成就引擎。
//!
//! ## 模块结构
//!
//! - `dto`: 数据传输对象定义
//! - `log_service`: 打卡写入/查询服务
//! - `achievement_service`: 成就评估与对账服务

pub mod achievement_service;
pub mod dto;
pub mod log_service;

pub use achievement_service::AchievementService;
pub use dto::*;
pub use log_service::{LogChangeListener, LogService};
