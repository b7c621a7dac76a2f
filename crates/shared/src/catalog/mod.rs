//! 成就目录模块
//!
//! 成就的展示信息（key、标题、描述、积分）以配置文件形式维护，
//! 进程启动时加载并校验一次，之后作为只读目录显式传入各服务，
//! 不依赖任何模块级全局状态。解锁规则本身由成就引擎的代码实现，
//! 目录只负责"有哪些成就、长什么样"。

pub mod loader;
pub mod models;
pub mod validator;

pub use loader::load_from_file;
pub use models::{AchievementCatalog, AchievementDefinition};
pub use validator::validate;
