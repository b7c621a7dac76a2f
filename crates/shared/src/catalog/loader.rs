//! 成就目录加载器
//!
//! 从 JSON 配置文件读取成就定义，构建校验后的只读目录。

use std::path::Path;

use tracing::info;

use crate::error::{Result, SharedError};

use super::models::{AchievementCatalog, CatalogFile};

/// 从文件加载成就目录
///
/// 读取 -> 解析 -> 校验，任何一步失败都返回错误；
/// 调用方（进程入口）应把错误当作启动失败处理。
pub fn load_from_file(path: impl AsRef<Path>) -> Result<AchievementCatalog> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|source| SharedError::CatalogRead {
        path: path.display().to_string(),
        source,
    })?;

    let file: CatalogFile = serde_json::from_str(&raw)?;
    let catalog = AchievementCatalog::from_definitions(file.achievements)?;

    info!(
        path = %path.display(),
        count = catalog.len(),
        "成就目录加载完成"
    );

    Ok(catalog)
}
