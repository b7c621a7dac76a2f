//! 领域模型定义
//!
//! 实体同时支持数据库（sqlx）和 JSON（serde）序列化；
//! 饮酒状态枚举由成就引擎 crate 提供，两侧共用同一封闭类型。

use achievement_engine::{DayStatus, LogDay};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 打卡记录
///
/// 每个用户每个自然日至多一行，由 (user_id, log_date) 唯一约束
/// 和仓储层的按日 upsert 共同保证。写入后对评估流程只读。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DrinkingLog {
    pub id: i64,
    /// 用户 ID
    pub user_id: String,
    /// 打卡日期（只承载"哪一天"的身份，无时间含义）
    pub log_date: NaiveDate,
    /// 当日饮酒状态
    pub status: DayStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DrinkingLog {
    /// 转成评估器的输入视图
    pub fn to_log_day(&self) -> LogDay {
        LogDay::new(self.log_date, self.status)
    }
}

/// 用户成就解锁记录
///
/// 表示"该用户当前持有该成就"这一事实；评估判定不再成立时整行删除，
/// 因此存在即有效，无需状态字段。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    pub id: i64,
    pub user_id: String,
    /// 成就 key，对应成就目录中的定义
    pub achievement_key: String,
    /// 首次解锁时间；重复对账不会刷新
    pub unlocked_at: DateTime<Utc>,
}
