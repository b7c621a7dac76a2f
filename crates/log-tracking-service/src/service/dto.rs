//! 服务层数据传输对象

use achievement_engine::DayStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 打卡写入请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertLogRequest {
    pub user_id: String,
    pub date: NaiveDate,
    pub status: DayStatus,
}

impl UpsertLogRequest {
    pub fn new(user_id: impl Into<String>, date: NaiveDate, status: DayStatus) -> Self {
        Self {
            user_id: user_id.into(),
            date,
            status,
        }
    }
}

/// 一次成就评估与对账的结果汇总
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationOutcome {
    /// 本次评估得出的完整解锁集合（排序后）
    pub unlocked: Vec<String>,
    /// 相比持久化状态新增解锁的成就
    pub newly_unlocked: Vec<String>,
    /// 相比持久化状态被撤销的成就
    pub revoked: Vec<String>,
}

impl EvaluationOutcome {
    /// 本次对账是否改变了持久化状态
    pub fn changed(&self) -> bool {
        !self.newly_unlocked.is_empty() || !self.revoked.is_empty()
    }
}

/// 成就视图：目录定义与用户解锁状态的合并
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievementView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub points: i32,
    pub unlocked: bool,
    /// 首次解锁时间，未解锁时为 None
    pub unlocked_at: Option<DateTime<Utc>>,
}
