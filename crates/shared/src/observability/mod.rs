//! 统一可观测性模块
//!
//! 提供日志订阅器的统一初始化，确保各服务输出一致的结构化日志。
//! 指标与分布式追踪导出不在本仓库范围内，需要时由部署侧接管 stdout。

pub mod tracing;

pub use tracing::init;
