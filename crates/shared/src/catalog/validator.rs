//! 成就目录校验器
//!
//! 在进程启动时对目录配置做一次性校验，配置错误直接拒绝启动，
//! 避免带着坏目录运行到一半才暴露问题。

use std::collections::HashSet;

use crate::error::{Result, SharedError};

use super::models::AchievementDefinition;

/// 校验定义列表
///
/// 规则：
/// - 目录非空
/// - key 非空且全局唯一
/// - title 非空
/// - points 非负
pub fn validate(definitions: &[AchievementDefinition]) -> Result<()> {
    if definitions.is_empty() {
        return Err(SharedError::CatalogInvalid("成就目录为空".to_string()));
    }

    let mut seen: HashSet<&str> = HashSet::new();

    for def in definitions {
        if def.key.trim().is_empty() {
            return Err(SharedError::CatalogInvalid(format!(
                "存在空 key 的成就定义: title={}",
                def.title
            )));
        }

        if !seen.insert(def.key.as_str()) {
            return Err(SharedError::CatalogInvalid(format!(
                "重复的成就 key: {}",
                def.key
            )));
        }

        if def.title.trim().is_empty() {
            return Err(SharedError::CatalogInvalid(format!(
                "成就 {} 缺少标题",
                def.key
            )));
        }

        if def.points < 0 {
            return Err(SharedError::CatalogInvalid(format!(
                "成就 {} 的积分为负数: {}",
                def.key, def.points
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(key: &str, title: &str, points: i32) -> AchievementDefinition {
        AchievementDefinition {
            key: key.to_string(),
            title: title.to_string(),
            description: String::new(),
            points,
        }
    }

    #[test]
    fn test_valid_catalog_passes() {
        let defs = vec![def("a", "A", 1), def("b", "B", 5)];
        assert!(validate(&defs).is_ok());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = validate(&[]).unwrap_err();
        assert_eq!(err.code(), "CATALOG_INVALID");
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let defs = vec![def("a", "A", 1), def("a", "A again", 1)];
        let err = validate(&defs).unwrap_err();
        assert!(err.to_string().contains("重复"));
    }

    #[test]
    fn test_blank_key_rejected() {
        let defs = vec![def("  ", "A", 1)];
        assert!(validate(&defs).is_err());
    }

    #[test]
    fn test_blank_title_rejected() {
        let defs = vec![def("a", "", 1)];
        assert!(validate(&defs).is_err());
    }

    #[test]
    fn test_negative_points_rejected() {
        let defs = vec![def("a", "A", -1)];
        assert!(validate(&defs).is_err());
    }
}
