//! 打卡写入/查询服务
//!
//! 处理按日打卡的核心业务逻辑，包括：
//! - 参数校验
//! - 按 (user, 日) upsert 写入
//! - 写入成功后同步触发成就重估
//! - 按自然月 / 按最近一年的历史查询

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use tracing::{info, instrument};

use crate::error::{Result, TrackingError};
use crate::models::DrinkingLog;
use crate::repository::DrinkingLogRepositoryTrait;
use crate::service::dto::UpsertLogRequest;

/// 打卡变更监听器
///
/// 打卡写入成功后同步回调。成就侧实现此接口，使写入方无需感知
/// 成就模块的具体类型；回调在请求内完成，返回时解锁状态已收敛。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogChangeListener: Send + Sync {
    async fn log_changed(&self, user_id: &str) -> Result<()>;
}

/// 打卡服务
pub struct LogService<LR, L>
where
    LR: DrinkingLogRepositoryTrait,
    L: LogChangeListener,
{
    log_repo: Arc<LR>,
    listener: Arc<L>,
}

impl<LR, L> LogService<LR, L>
where
    LR: DrinkingLogRepositoryTrait,
    L: LogChangeListener,
{
    pub fn new(log_repo: Arc<LR>, listener: Arc<L>) -> Self {
        Self { log_repo, listener }
    }

    /// 写入/更新某日打卡，随后同步触发成就重估
    ///
    /// 重复提交同一天会覆盖当日状态（比如把 sober 修正为 heavy），
    /// 评估器会基于修正后的历史重新收敛解锁记录。
    #[instrument(skip(self), fields(user_id = %request.user_id, date = %request.date))]
    pub async fn upsert_day_log(&self, request: UpsertLogRequest) -> Result<DrinkingLog> {
        if request.user_id.trim().is_empty() {
            return Err(TrackingError::Validation("user_id 不能为空".to_string()));
        }

        let log = self
            .log_repo
            .upsert_log(&request.user_id, request.date, request.status)
            .await?;

        // 同步等待评估完成：请求返回时解锁状态已与最新历史一致
        self.listener.log_changed(&request.user_id).await?;

        info!(
            user_id = %request.user_id,
            date = %request.date,
            status = %request.status,
            "打卡已写入并完成成就重估"
        );

        Ok(log)
    }

    /// 查询某自然月的打卡记录（按日期升序）
    pub async fn logs_for_month(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<DrinkingLog>> {
        let (first, last) =
            month_bounds(year, month).ok_or(TrackingError::InvalidMonth { year, month })?;

        self.log_repo
            .list_logs_in_range(user_id, first, last)
            .await
    }

    /// 查询截至 today 往前一年（含当天）的打卡记录
    pub async fn logs_for_past_year(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<DrinkingLog>> {
        // 闰日（2/29）在前一年不存在时顺延到 3/1
        let from = today
            .with_year(today.year() - 1)
            .or_else(|| NaiveDate::from_ymd_opt(today.year() - 1, 3, 1))
            .unwrap_or(today);

        self.log_repo.list_logs_in_range(user_id, from, today).await
    }
}

/// 自然月的首末两天；非法年月返回 None
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((first, last))
}
