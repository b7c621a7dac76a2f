//! 成就引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("无效的饮酒状态: {0}")]
    InvalidStatus(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
