//! 打卡服务错误类型
//!
//! 定义服务层的业务错误和系统错误

use thiserror::Error;

/// 打卡服务错误类型
#[derive(Debug, Error)]
pub enum TrackingError {
    // === 业务错误 ===
    #[error("参数校验失败: {0}")]
    Validation(String),

    #[error("无效的年月: year={year}, month={month}")]
    InvalidMonth { year: i32, month: u32 },

    // === 系统错误 ===
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("基础设施错误: {0}")]
    Shared(#[from] soberlog_shared::error::SharedError),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 打卡服务 Result 类型别名
pub type Result<T> = std::result::Result<T, TrackingError>;

impl TrackingError {
    /// 检查是否为可重试的错误
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// 检查是否为业务错误（非系统错误）
    pub fn is_business_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidMonth { .. })
    }

    /// 获取错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidMonth { .. } => "INVALID_MONTH",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Shared(_) => "SHARED_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_retryable() {
        assert!(TrackingError::Database(sqlx::Error::PoolTimedOut).is_retryable());
        assert!(!TrackingError::Validation("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_error_is_business_error() {
        assert!(TrackingError::Validation("bad".to_string()).is_business_error());
        assert!(
            TrackingError::InvalidMonth {
                year: 2024,
                month: 13
            }
            .is_business_error()
        );
        assert!(!TrackingError::Internal("boom".to_string()).is_business_error());
    }

    #[test]
    fn test_error_code() {
        assert_eq!(
            TrackingError::Validation("x".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            TrackingError::InvalidMonth {
                year: 2024,
                month: 0
            }
            .error_code(),
            "INVALID_MONTH"
        );
    }

    #[test]
    fn test_error_display() {
        let err = TrackingError::InvalidMonth {
            year: 2024,
            month: 13,
        };
        assert!(err.to_string().contains("2024"));
        assert!(err.to_string().contains("13"));
    }
}
