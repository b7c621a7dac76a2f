//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;
use chrono::NaiveDate;

use achievement_engine::DayStatus;

use crate::error::Result;
use crate::models::{DrinkingLog, UserAchievement};

/// 打卡记录仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DrinkingLogRepositoryTrait: Send + Sync {
    /// 按日期升序返回用户的全部打卡记录
    ///
    /// 升序是评估器的输入约定，由 SQL 的 ORDER BY 保证。
    async fn list_logs(&self, user_id: &str) -> Result<Vec<DrinkingLog>>;

    /// 按日期升序返回闭区间 [from, to] 内的打卡记录
    async fn list_logs_in_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DrinkingLog>>;

    async fn get_log(&self, user_id: &str, date: NaiveDate) -> Result<Option<DrinkingLog>>;

    /// 按 (user, 日) upsert：当日已有记录则覆盖其状态
    async fn upsert_log(
        &self,
        user_id: &str,
        date: NaiveDate,
        status: DayStatus,
    ) -> Result<DrinkingLog>;
}

/// 成就解锁记录仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAchievementRepositoryTrait: Send + Sync {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<UserAchievement>>;

    /// 幂等写入：已存在时不重复插入，保留原 unlocked_at
    async fn upsert(&self, user_id: &str, achievement_key: &str) -> Result<()>;

    /// 幂等删除：不存在时为空操作
    async fn delete(&self, user_id: &str, achievement_key: &str) -> Result<()>;
}
