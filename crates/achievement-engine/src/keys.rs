//! 成就 key 常量
//!
//! key 是成就的稳定标识，与成就目录配置文件中的 `key` 字段一一对应。
//! 解锁规则由代码实现，标题、描述、积分等展示信息由目录配置承载。

/// 首次打卡
pub const FIRST_LOG: &str = "first_log";

/// 单月打卡天数达到两位数
pub const DOUBLE_DIGIT_DAYS: &str = "double_digit_days";

/// 连续 5 天清醒
pub const FIVE_DAYS_STRAIGHT_SOBER: &str = "5_days_straight_sober";

/// 连续 10 天清醒
pub const TEN_DAYS_STRAIGHT_SOBER: &str = "10_days_straight_sober";

/// 连续 30 天清醒
pub const ONE_MONTH_SOBER: &str = "1_month_sober";

/// 连续 180 天清醒
pub const HALF_YEAR_SOBER: &str = "half_year_sober";

/// 连续 365 天清醒
pub const YEAR_SOBER: &str = "year_sober";

/// 某个完整自然月每天都打卡且全部为 sober
pub const ONE_MONTH_DRY: &str = "1_month_dry";

/// 距上次重度饮酒已满 30 天
pub const ONE_MONTH_SINCE_LAST_CRASHOUT: &str = "1_month_since_last_crashout";

/// 周五与次日均为清醒日
pub const WEEKEND_WARRIOR: &str = "weekend_warrior";

/// 全部成就 key，按目录展示顺序排列
pub const ALL: [&str; 10] = [
    FIRST_LOG,
    DOUBLE_DIGIT_DAYS,
    FIVE_DAYS_STRAIGHT_SOBER,
    TEN_DAYS_STRAIGHT_SOBER,
    ONE_MONTH_SOBER,
    HALF_YEAR_SOBER,
    YEAR_SOBER,
    ONE_MONTH_DRY,
    ONE_MONTH_SINCE_LAST_CRASHOUT,
    WEEKEND_WARRIOR,
];

/// 判断 key 是否为引擎已知的成就
pub fn is_known(key: &str) -> bool {
    ALL.contains(&key)
}
