//! 打卡领域模型
//!
//! 枚举同时支持数据库（sqlx）和 JSON（serde）序列化

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// 单日饮酒状态
///
/// 封闭枚举：外部输入的未知取值在构造期（反序列化或 `FromStr`）即报错，
/// 评估逻辑内部不存在"无法识别的状态"分支。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum DayStatus {
    /// 滴酒未沾
    Sober,
    /// 适量饮酒
    Medium,
    /// 重度饮酒
    Heavy,
}

impl DayStatus {
    /// 清醒日判定：Sober 和 Medium 都计入连续清醒
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Sober | Self::Medium)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sober => "sober",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sober" => Ok(Self::Sober),
            "medium" => Ok(Self::Medium),
            "heavy" => Ok(Self::Heavy),
            other => Err(EngineError::InvalidStatus(other.to_string())),
        }
    }
}

/// 评估器的输入视图：某个自然日的一条打卡记录
///
/// 日期只承载"哪一天"的身份，不含时间信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogDay {
    pub date: NaiveDate,
    pub status: DayStatus,
}

impl LogDay {
    pub fn new(date: NaiveDate, status: DayStatus) -> Self {
        Self { date, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_status_is_clean() {
        assert!(DayStatus::Sober.is_clean());
        assert!(DayStatus::Medium.is_clean());
        assert!(!DayStatus::Heavy.is_clean());
    }

    #[test]
    fn test_day_status_from_str() {
        assert_eq!("sober".parse::<DayStatus>().unwrap(), DayStatus::Sober);
        assert_eq!("medium".parse::<DayStatus>().unwrap(), DayStatus::Medium);
        assert_eq!("heavy".parse::<DayStatus>().unwrap(), DayStatus::Heavy);

        let err = "drunk".parse::<DayStatus>().unwrap_err();
        assert!(err.to_string().contains("drunk"));
    }

    #[test]
    fn test_day_status_serde_roundtrip() {
        let json = serde_json::to_string(&DayStatus::Medium).unwrap();
        assert_eq!(json, "\"medium\"");

        let parsed: DayStatus = serde_json::from_str("\"heavy\"").unwrap();
        assert_eq!(parsed, DayStatus::Heavy);

        // 未知取值在反序列化时报错，而不是落入某个默认分支
        assert!(serde_json::from_str::<DayStatus>("\"wasted\"").is_err());
    }

    #[test]
    fn test_log_day_new() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let day = LogDay::new(date, DayStatus::Sober);
        assert_eq!(day.date, date);
        assert_eq!(day.status, DayStatus::Sober);
    }
}
