//! 成就评估与对账服务
//!
//! 打卡变更后的核心流程：
//! 1. 读取用户完整打卡历史（按日期升序）
//! 2. 成就引擎全量评估，得到应解锁的 key 集合
//! 3. 对目录中每个成就做幂等对账：应持有则 upsert，不应持有则删除
//!
//! 对账可以撤销成就：打卡被修正（比如连续清醒区间中的某天改成 heavy）后，
//! 历史不再支撑的成就会在下一次评估中被移除。整个流程幂等，重复执行
//! 不改变最终状态；个别写入失败时也无需回滚，下一次打卡变更会重新收敛。

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use achievement_engine::{AchievementEvaluator, LogDay, keys};
use soberlog_shared::catalog::AchievementCatalog;

use crate::error::Result;
use crate::models::DrinkingLog;
use crate::repository::{DrinkingLogRepositoryTrait, UserAchievementRepositoryTrait};
use crate::service::dto::{EvaluationOutcome, UserAchievementView};
use crate::service::log_service::LogChangeListener;

/// 成就评估与对账服务
///
/// 依赖通过构造函数显式注入：打卡仓储、解锁记录仓储，以及进程启动时
/// 加载好的只读成就目录。服务自身无状态，可被任意并发调用；同一用户的
/// 并发评估以"后完成者为准"，由于评估幂等，下一次变更会自动修正。
pub struct AchievementService<LR, UR>
where
    LR: DrinkingLogRepositoryTrait,
    UR: UserAchievementRepositoryTrait,
{
    log_repo: Arc<LR>,
    unlock_repo: Arc<UR>,
    catalog: Arc<AchievementCatalog>,
}

impl<LR, UR> AchievementService<LR, UR>
where
    LR: DrinkingLogRepositoryTrait,
    UR: UserAchievementRepositoryTrait,
{
    pub fn new(log_repo: Arc<LR>, unlock_repo: Arc<UR>, catalog: Arc<AchievementCatalog>) -> Self {
        Self {
            log_repo,
            unlock_repo,
            catalog,
        }
    }

    /// 打卡变更后的评估入口
    ///
    /// 同步完成：返回时解锁记录已与最新打卡历史一致。
    /// 返回值汇总本次评估的完整解锁集合与状态增量，供调用方记录或展示。
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn on_log_changed(&self, user_id: &str) -> Result<EvaluationOutcome> {
        // 1. 读取完整历史（仓储按日期升序返回，这是评估器的输入约定）
        let logs = self.log_repo.list_logs(user_id).await?;
        let days: Vec<LogDay> = logs.iter().map(DrinkingLog::to_log_day).collect();

        // 2. 全量评估
        let unlocked = AchievementEvaluator::evaluate(&days);

        // 引擎解锁了目录中不存在的 key，说明目录配置与规则代码发生漂移
        for key in &unlocked {
            if !self.catalog.contains_key(key) {
                warn!(key = %key, "评估结果包含目录中不存在的成就 key");
            }
        }

        // 3. 与持久化状态对账
        let existing: HashSet<String> = self
            .unlock_repo
            .list_for_user(user_id)
            .await?
            .into_iter()
            .map(|record| record.achievement_key)
            .collect();

        let mut newly_unlocked = Vec::new();
        let mut revoked = Vec::new();

        for def in self.catalog.iter() {
            if unlocked.contains(def.key.as_str()) {
                self.unlock_repo.upsert(user_id, &def.key).await?;
                if !existing.contains(&def.key) {
                    newly_unlocked.push(def.key.clone());
                }
            } else {
                self.unlock_repo.delete(user_id, &def.key).await?;
                if existing.contains(&def.key) {
                    revoked.push(def.key.clone());
                }
            }
        }

        if !newly_unlocked.is_empty() || !revoked.is_empty() {
            info!(
                user_id = %user_id,
                log_count = logs.len(),
                newly_unlocked = ?newly_unlocked,
                revoked = ?revoked,
                "成就对账完成"
            );
        }

        let mut unlocked: Vec<String> = unlocked.into_iter().map(String::from).collect();
        unlocked.sort_unstable();

        Ok(EvaluationOutcome {
            unlocked,
            newly_unlocked,
            revoked,
        })
    }

    /// 用户成就视图：目录全量定义 + 每项的解锁状态
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn user_achievements(&self, user_id: &str) -> Result<Vec<UserAchievementView>> {
        let records = self.unlock_repo.list_for_user(user_id).await?;
        let unlocked_at: HashMap<&str, DateTime<Utc>> = records
            .iter()
            .map(|record| (record.achievement_key.as_str(), record.unlocked_at))
            .collect();

        let views = self
            .catalog
            .iter()
            .map(|def| UserAchievementView {
                key: def.key.clone(),
                title: def.title.clone(),
                description: def.description.clone(),
                points: def.points,
                unlocked: unlocked_at.contains_key(def.key.as_str()),
                unlocked_at: unlocked_at.get(def.key.as_str()).copied(),
            })
            .collect();

        Ok(views)
    }
}

/// 打卡写入侧通过 LogChangeListener 触发评估，无需感知本服务的具体类型
#[async_trait]
impl<LR, UR> LogChangeListener for AchievementService<LR, UR>
where
    LR: DrinkingLogRepositoryTrait + 'static,
    UR: UserAchievementRepositoryTrait + 'static,
{
    async fn log_changed(&self, user_id: &str) -> Result<()> {
        self.on_log_changed(user_id).await.map(|_| ())
    }
}

/// 未在目录中登记但被引擎支持的 key 列表，用于启动期自检
///
/// 返回空列表说明目录覆盖了引擎的全部规则。
pub fn missing_catalog_keys(catalog: &AchievementCatalog) -> Vec<&'static str> {
    keys::ALL
        .iter()
        .copied()
        .filter(|key| !catalog.contains_key(key))
        .collect()
}
