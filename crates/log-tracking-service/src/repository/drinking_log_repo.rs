//! 打卡记录仓储
//!
//! 提供打卡记录的数据访问；按日 upsert 保证每用户每自然日至多一行。

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use achievement_engine::DayStatus;

use super::traits::DrinkingLogRepositoryTrait;
use crate::error::Result;
use crate::models::DrinkingLog;

/// 打卡记录仓储
pub struct DrinkingLogRepository {
    pool: PgPool,
}

impl DrinkingLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ==================== 查询操作 ====================

    /// 按日期升序返回用户的全部打卡记录
    pub async fn list_logs(&self, user_id: &str) -> Result<Vec<DrinkingLog>> {
        let logs = sqlx::query_as::<_, DrinkingLog>(
            r#"
            SELECT id, user_id, log_date, status, created_at, updated_at
            FROM drinking_logs
            WHERE user_id = $1
            ORDER BY log_date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    /// 按日期升序返回闭区间内的打卡记录
    pub async fn list_logs_in_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DrinkingLog>> {
        let logs = sqlx::query_as::<_, DrinkingLog>(
            r#"
            SELECT id, user_id, log_date, status, created_at, updated_at
            FROM drinking_logs
            WHERE user_id = $1 AND log_date BETWEEN $2 AND $3
            ORDER BY log_date ASC
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    /// 获取用户某日的打卡记录
    pub async fn get_log(&self, user_id: &str, date: NaiveDate) -> Result<Option<DrinkingLog>> {
        let log = sqlx::query_as::<_, DrinkingLog>(
            r#"
            SELECT id, user_id, log_date, status, created_at, updated_at
            FROM drinking_logs
            WHERE user_id = $1 AND log_date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(log)
    }

    // ==================== 写入操作 ====================

    /// 按 (user, 日) upsert
    ///
    /// 当日已有记录时只覆盖状态并刷新 updated_at，created_at 保持首次写入值
    pub async fn upsert_log(
        &self,
        user_id: &str,
        date: NaiveDate,
        status: DayStatus,
    ) -> Result<DrinkingLog> {
        let log = sqlx::query_as::<_, DrinkingLog>(
            r#"
            INSERT INTO drinking_logs (user_id, log_date, status, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ON CONFLICT (user_id, log_date)
            DO UPDATE SET status = EXCLUDED.status, updated_at = NOW()
            RETURNING id, user_id, log_date, status, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }
}

#[async_trait]
impl DrinkingLogRepositoryTrait for DrinkingLogRepository {
    async fn list_logs(&self, user_id: &str) -> Result<Vec<DrinkingLog>> {
        self.list_logs(user_id).await
    }

    async fn list_logs_in_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DrinkingLog>> {
        self.list_logs_in_range(user_id, from, to).await
    }

    async fn get_log(&self, user_id: &str, date: NaiveDate) -> Result<Option<DrinkingLog>> {
        self.get_log(user_id, date).await
    }

    async fn upsert_log(
        &self,
        user_id: &str,
        date: NaiveDate,
        status: DayStatus,
    ) -> Result<DrinkingLog> {
        self.upsert_log(user_id, date, status).await
    }
}
