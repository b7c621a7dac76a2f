//! 成就评估器
//!
//! 对单个用户的完整打卡历史做全量扫描，推导当前应解锁的成就集合。
//! 评估是纯函数：不持有跨调用状态，每次调用都从头重新推导所有规则，
//! 因此对同一份历史重复评估结果恒定，打卡被修正后重新评估即可自动收敛
//! （包括撤销已不再成立的成就）。历史规模以单用户每年约 365 条为界，
//! 全量扫描的开销可以忽略，不做增量优化。

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::keys;
use crate::models::{DayStatus, LogDay};

/// 连续清醒天数阈值与对应成就（低阈值不随高阈值解锁而失效，各自独立判定）
const STREAK_TIERS: [(u32, &str); 5] = [
    (5, keys::FIVE_DAYS_STRAIGHT_SOBER),
    (10, keys::TEN_DAYS_STRAIGHT_SOBER),
    (30, keys::ONE_MONTH_SOBER),
    (180, keys::HALF_YEAR_SOBER),
    (365, keys::YEAR_SOBER),
];

/// 单月打卡天数达到两位数的门槛
const DOUBLE_DIGIT_THRESHOLD: usize = 10;

/// 距上次重度饮酒的解锁间隔（天）
const CRASHOUT_GAP_DAYS: i64 = 30;

/// 成就评估器
///
/// 无状态，全部能力以关联函数提供。
pub struct AchievementEvaluator;

impl AchievementEvaluator {
    /// 评估完整历史，返回应解锁的成就 key 集合
    ///
    /// # 调用约定
    ///
    /// * `logs` 属于同一用户，且按日期升序排列。乱序输入会使连续天数
    ///   计算失真，由调用方（日志存储按 `ORDER BY log_date ASC` 返回）保证，
    ///   评估器不在内部排序。
    /// * 每个自然日至多一条记录，由日志存储的按日 upsert 保证。
    pub fn evaluate(logs: &[LogDay]) -> HashSet<&'static str> {
        let mut unlocked = HashSet::new();
        if logs.is_empty() {
            return unlocked;
        }

        unlocked.insert(keys::FIRST_LOG);

        if Self::has_double_digit_month(logs) {
            unlocked.insert(keys::DOUBLE_DIGIT_DAYS);
        }

        let max_streak = Self::longest_clean_streak(logs);
        for (threshold, key) in STREAK_TIERS {
            if max_streak >= threshold {
                unlocked.insert(key);
            }
        }

        if Self::has_fully_sober_month(logs) {
            unlocked.insert(keys::ONE_MONTH_DRY);
        }

        if Self::has_clean_weekend_pair(logs) {
            unlocked.insert(keys::WEEKEND_WARRIOR);
        }

        if Self::days_since_last_heavy(logs) >= CRASHOUT_GAP_DAYS {
            unlocked.insert(keys::ONE_MONTH_SINCE_LAST_CRASHOUT);
        }

        unlocked
    }

    /// 最长连续清醒天数
    ///
    /// 相邻两条记录"连续"当且仅当后者日期恰好是前者的次日且两者均为清醒日。
    /// 非清醒记录把当前连击清零；日期出现空档时，若当前记录本身清醒则
    /// 从 1 重新起算。
    pub fn longest_clean_streak(logs: &[LogDay]) -> u32 {
        let mut streak = 0u32;
        let mut max_streak = 0u32;
        let mut prev: Option<NaiveDate> = None;

        for log in logs {
            if log.status.is_clean() {
                streak = match prev {
                    Some(p) if (log.date - p).num_days() == 1 => streak + 1,
                    _ => 1,
                };
            } else {
                streak = 0;
            }
            max_streak = max_streak.max(streak);
            prev = Some(log.date);
        }

        max_streak
    }

    /// 是否存在打卡天数 >= 10 的自然月（按年+月分组，状态不限）
    fn has_double_digit_month(logs: &[LogDay]) -> bool {
        let mut counts: HashMap<(i32, u32), usize> = HashMap::new();
        for log in logs {
            *counts
                .entry((log.date.year(), log.date.month()))
                .or_insert(0) += 1;
        }
        counts.values().any(|&n| n >= DOUBLE_DIGIT_THRESHOLD)
    }

    /// 是否存在"整月全 sober"的自然月
    ///
    /// 要求该月每一天都有记录（打卡天数 == 当月天数），且每条记录都
    /// 严格为 Sober——Medium 不计入。缺天的月份无论已有记录多干净都不算。
    fn has_fully_sober_month(logs: &[LogDay]) -> bool {
        let mut months: HashMap<(i32, u32), HashMap<u32, DayStatus>> = HashMap::new();
        for log in logs {
            months
                .entry((log.date.year(), log.date.month()))
                .or_default()
                .insert(log.date.day(), log.status);
        }

        months.iter().any(|(&(year, month), days)| {
            days.len() as u32 == days_in_month(year, month)
                && days.values().all(|&s| s == DayStatus::Sober)
        })
    }

    /// 是否存在周五与其次日（周六）都为清醒日的组合
    ///
    /// 注意：规则检查的是周五 + 次日，而非周六 + 周日；
    /// 成就命名沿用产品历史叫法。
    fn has_clean_weekend_pair(logs: &[LogDay]) -> bool {
        let by_date: HashMap<NaiveDate, DayStatus> =
            logs.iter().map(|l| (l.date, l.status)).collect();

        by_date.iter().any(|(&date, status)| {
            date.weekday() == Weekday::Fri
                && status.is_clean()
                && date
                    .succ_opt()
                    .and_then(|next| by_date.get(&next))
                    .is_some_and(|s| s.is_clean())
        })
    }

    /// 距上次重度饮酒的自然日间隔
    ///
    /// 以最近一条记录的日期为终点：历史中存在 Heavy 记录时，起点取最近的
    /// Heavy 日期；从未重度饮酒时起点取最早一条记录的日期（即以整段打卡
    /// 历史的跨度作为间隔）。空历史返回 0。
    pub fn days_since_last_heavy(logs: &[LogDay]) -> i64 {
        let Some(last) = logs.last() else {
            return 0;
        };

        let anchor = logs
            .iter()
            .rev()
            .find(|l| l.status == DayStatus::Heavy)
            .map(|l| l.date)
            .or_else(|| logs.first().map(|l| l.date));

        match anchor {
            Some(start) => (last.date - start).num_days(),
            None => 0,
        }
    }
}

/// 某自然月的天数（下月首日的前一天）
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// 从某天起构造连续 n 天的同状态打卡
    fn run(start: NaiveDate, n: u64, status: DayStatus) -> Vec<LogDay> {
        (0..n)
            .map(|i| LogDay::new(start + chrono::Duration::days(i as i64), status))
            .collect()
    }

    #[test]
    fn test_empty_history_unlocks_nothing() {
        let unlocked = AchievementEvaluator::evaluate(&[]);
        assert!(unlocked.is_empty());
    }

    #[test]
    fn test_single_log_unlocks_first_log() {
        let logs = vec![LogDay::new(date(2024, 3, 1), DayStatus::Heavy)];
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(unlocked.contains(keys::FIRST_LOG));
        assert!(!unlocked.contains(keys::FIVE_DAYS_STRAIGHT_SOBER));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let mut logs = run(date(2024, 1, 1), 40, DayStatus::Sober);
        logs.push(LogDay::new(date(2024, 3, 15), DayStatus::Heavy));

        let first = AchievementEvaluator::evaluate(&logs);
        let second = AchievementEvaluator::evaluate(&logs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_five_day_streak_unlocks_only_first_tier() {
        let logs = run(date(2024, 6, 3), 5, DayStatus::Sober);
        let unlocked = AchievementEvaluator::evaluate(&logs);

        assert!(unlocked.contains(keys::FIVE_DAYS_STRAIGHT_SOBER));
        assert!(!unlocked.contains(keys::TEN_DAYS_STRAIGHT_SOBER));
    }

    #[test]
    fn test_streak_tiers_are_cumulative() {
        let logs = run(date(2024, 1, 1), 30, DayStatus::Sober);
        let unlocked = AchievementEvaluator::evaluate(&logs);

        assert!(unlocked.contains(keys::FIVE_DAYS_STRAIGHT_SOBER));
        assert!(unlocked.contains(keys::TEN_DAYS_STRAIGHT_SOBER));
        assert!(unlocked.contains(keys::ONE_MONTH_SOBER));
        assert!(!unlocked.contains(keys::HALF_YEAR_SOBER));
    }

    #[test]
    fn test_medium_counts_as_clean_for_streak() {
        let mut logs = run(date(2024, 6, 3), 3, DayStatus::Sober);
        logs.extend(run(date(2024, 6, 6), 2, DayStatus::Medium));

        assert_eq!(AchievementEvaluator::longest_clean_streak(&logs), 5);
    }

    #[test]
    fn test_heavy_entry_splits_streak() {
        // 4 天清醒 + 1 天 heavy + 4 天清醒：最长连击是 4，不解锁任何档位
        let mut logs = run(date(2024, 6, 3), 4, DayStatus::Sober);
        logs.push(LogDay::new(date(2024, 6, 7), DayStatus::Heavy));
        logs.extend(run(date(2024, 6, 8), 4, DayStatus::Sober));

        assert_eq!(AchievementEvaluator::longest_clean_streak(&logs), 4);

        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(!unlocked.contains(keys::FIVE_DAYS_STRAIGHT_SOBER));
    }

    #[test]
    fn test_date_gap_restarts_streak_at_one() {
        // 3 天清醒，隔 3 天空档，再 4 天清醒：空档后从 1 重新起算
        let mut logs = run(date(2024, 6, 3), 3, DayStatus::Sober);
        logs.extend(run(date(2024, 6, 9), 4, DayStatus::Sober));

        assert_eq!(AchievementEvaluator::longest_clean_streak(&logs), 4);
    }

    #[test]
    fn test_double_digit_days_requires_ten_in_one_month() {
        // 9 条同月记录：不解锁
        let logs = run(date(2024, 5, 1), 9, DayStatus::Heavy);
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(!unlocked.contains(keys::DOUBLE_DIGIT_DAYS));

        // 补上第 10 条后解锁（状态不限）
        let logs = run(date(2024, 5, 1), 10, DayStatus::Heavy);
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(unlocked.contains(keys::DOUBLE_DIGIT_DAYS));
    }

    #[test]
    fn test_double_digit_days_not_across_months() {
        // 跨月各 6 条，单月都不足 10，不解锁
        let mut logs = run(date(2024, 5, 26), 6, DayStatus::Sober);
        logs.extend(run(date(2024, 6, 1), 6, DayStatus::Sober));

        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(!unlocked.contains(keys::DOUBLE_DIGIT_DAYS));
    }

    #[test]
    fn test_full_sober_month_unlocks_month_dry() {
        // 2024 年 4 月共 30 天，每天打卡且全部 sober
        let logs = run(date(2024, 4, 1), 30, DayStatus::Sober);
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(unlocked.contains(keys::ONE_MONTH_DRY));
    }

    #[test]
    fn test_one_medium_day_breaks_month_dry() {
        let mut logs = run(date(2024, 4, 1), 30, DayStatus::Sober);
        logs[14].status = DayStatus::Medium;

        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(!unlocked.contains(keys::ONE_MONTH_DRY));
        // medium 不影响连续清醒档位
        assert!(unlocked.contains(keys::ONE_MONTH_SOBER));
    }

    #[test]
    fn test_partial_month_never_qualifies_as_dry() {
        // 4 月只打了 29 天，哪怕全 sober 也不算整月
        let logs = run(date(2024, 4, 1), 29, DayStatus::Sober);
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(!unlocked.contains(keys::ONE_MONTH_DRY));
    }

    #[test]
    fn test_february_leap_year_month_dry() {
        // 2024 年 2 月有 29 天
        let logs = run(date(2024, 2, 1), 29, DayStatus::Sober);
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(unlocked.contains(keys::ONE_MONTH_DRY));
    }

    #[test]
    fn test_weekend_pair_friday_and_saturday() {
        // 2024-06-07 是周五
        assert_eq!(date(2024, 6, 7).weekday(), Weekday::Fri);

        let logs = vec![
            LogDay::new(date(2024, 6, 7), DayStatus::Sober),
            LogDay::new(date(2024, 6, 8), DayStatus::Medium),
        ];
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(unlocked.contains(keys::WEEKEND_WARRIOR));
    }

    #[test]
    fn test_weekend_pair_requires_both_days_clean() {
        let logs = vec![
            LogDay::new(date(2024, 6, 7), DayStatus::Sober),
            LogDay::new(date(2024, 6, 8), DayStatus::Heavy),
        ];
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(!unlocked.contains(keys::WEEKEND_WARRIOR));

        // 只有周六没有周五同样不解锁
        let logs = vec![LogDay::new(date(2024, 6, 8), DayStatus::Sober)];
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(!unlocked.contains(keys::WEEKEND_WARRIOR));
    }

    #[test]
    fn test_saturday_sunday_pair_does_not_count() {
        // 周六 + 周日的组合不触发：锚点固定在周五
        let logs = vec![
            LogDay::new(date(2024, 6, 8), DayStatus::Sober),
            LogDay::new(date(2024, 6, 9), DayStatus::Sober),
        ];
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(!unlocked.contains(keys::WEEKEND_WARRIOR));
    }

    #[test]
    fn test_crashout_gap_with_heavy_history() {
        // heavy 之后继续打卡 30 天
        let mut logs = vec![LogDay::new(date(2024, 1, 1), DayStatus::Heavy)];
        logs.extend(run(date(2024, 1, 2), 30, DayStatus::Sober));

        assert_eq!(AchievementEvaluator::days_since_last_heavy(&logs), 30);
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(unlocked.contains(keys::ONE_MONTH_SINCE_LAST_CRASHOUT));
    }

    #[test]
    fn test_crashout_gap_resets_on_new_heavy() {
        let mut logs = vec![LogDay::new(date(2024, 1, 1), DayStatus::Heavy)];
        logs.extend(run(date(2024, 1, 2), 30, DayStatus::Sober));
        // 最近一条又是 heavy，间隔归零
        logs.push(LogDay::new(date(2024, 2, 5), DayStatus::Heavy));

        assert_eq!(AchievementEvaluator::days_since_last_heavy(&logs), 0);
        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(!unlocked.contains(keys::ONE_MONTH_SINCE_LAST_CRASHOUT));
    }

    #[test]
    fn test_crashout_gap_without_any_heavy() {
        // 从未 heavy：以历史跨度计算间隔
        let logs = run(date(2024, 3, 1), 31, DayStatus::Medium);
        assert_eq!(AchievementEvaluator::days_since_last_heavy(&logs), 30);

        let unlocked = AchievementEvaluator::evaluate(&logs);
        assert!(unlocked.contains(keys::ONE_MONTH_SINCE_LAST_CRASHOUT));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_year_long_history_unlocks_all_tiers() {
        // 2024-01-01 起连续 366 天（闰年）全 sober
        let logs = run(date(2024, 1, 1), 366, DayStatus::Sober);
        let unlocked = AchievementEvaluator::evaluate(&logs);

        for (_, key) in STREAK_TIERS {
            assert!(unlocked.contains(key), "missing {key}");
        }
        assert!(unlocked.contains(keys::ONE_MONTH_DRY));
        assert!(unlocked.contains(keys::DOUBLE_DIGIT_DAYS));
        assert!(unlocked.contains(keys::WEEKEND_WARRIOR));
        assert!(unlocked.contains(keys::ONE_MONTH_SINCE_LAST_CRASHOUT));
        assert_eq!(unlocked.len(), keys::ALL.len());
    }
}
