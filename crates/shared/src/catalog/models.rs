//! 成就目录数据模型

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 成就定义
///
/// key 是稳定标识，解锁记录和引擎规则都以它为准；
/// 标题、描述、积分只用于展示和排行榜计分。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub key: String,
    pub title: String,
    pub description: String,
    #[serde(default = "default_points")]
    pub points: i32,
}

fn default_points() -> i32 {
    1
}

/// 成就目录文件的顶层结构
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub achievements: Vec<AchievementDefinition>,
}

/// 成就目录
///
/// 校验后的只读定义集合，按文件顺序保留展示顺序，另建 key 索引。
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    definitions: Vec<AchievementDefinition>,
    index: HashMap<String, usize>,
}

impl AchievementCatalog {
    /// 从定义列表构建目录（内部会先校验）
    pub fn from_definitions(definitions: Vec<AchievementDefinition>) -> Result<Self> {
        super::validator::validate(&definitions)?;

        let index = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| (def.key.clone(), i))
            .collect();

        Ok(Self { definitions, index })
    }

    /// 按 key 查找定义
    pub fn get(&self, key: &str) -> Option<&AchievementDefinition> {
        self.index.get(key).map(|&i| &self.definitions[i])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// 按展示顺序遍历全部定义
    pub fn iter(&self) -> impl Iterator<Item = &AchievementDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
