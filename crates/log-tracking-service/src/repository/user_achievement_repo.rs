//! 成就解锁记录仓储
//!
//! upsert 和 delete 都是幂等操作，依赖 (user_id, achievement_key)
//! 唯一约束，供评估对账重复执行。

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::UserAchievementRepositoryTrait;
use crate::error::Result;
use crate::models::UserAchievement;

/// 成就解锁记录仓储
pub struct UserAchievementRepository {
    pool: PgPool,
}

impl UserAchievementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 列出用户当前持有的全部成就
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<UserAchievement>> {
        let records = sqlx::query_as::<_, UserAchievement>(
            r#"
            SELECT id, user_id, achievement_key, unlocked_at
            FROM user_achievements
            WHERE user_id = $1
            ORDER BY unlocked_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// 幂等写入解锁记录
    ///
    /// 已存在时不做任何修改，保留首次解锁时间
    pub async fn upsert(&self, user_id: &str, achievement_key: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_achievements (user_id, achievement_key, unlocked_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id, achievement_key) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(achievement_key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 幂等删除解锁记录（撤销成就）
    pub async fn delete(&self, user_id: &str, achievement_key: &str) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM user_achievements
            WHERE user_id = $1 AND achievement_key = $2
            "#,
        )
        .bind(user_id)
        .bind(achievement_key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl UserAchievementRepositoryTrait for UserAchievementRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<UserAchievement>> {
        self.list_for_user(user_id).await
    }

    async fn upsert(&self, user_id: &str, achievement_key: &str) -> Result<()> {
        self.upsert(user_id, achievement_key).await
    }

    async fn delete(&self, user_id: &str, achievement_key: &str) -> Result<()> {
        self.delete(user_id, achievement_key).await
    }
}
