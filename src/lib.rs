//! logx - 结构化日志门面
//!
//! 一个日志入口，把日志按级别过滤、格式化后分发到多个 transport。
//!
//! ## 模块
//!
//! - **cfg**: 组件配置（`{ type, options }` 与类型注册表）
//! - **log**: 日志模块（级别、格式化器、transport、路由表和日志句柄）

pub mod cfg;
pub mod log;

// 重新导出主要的公共 API
pub use cfg::{create_trait_from_type_options, register_trait, TypeOptions};

pub use log::{
    init, init_from_options, LogError, LogFormatter, LogLevel, LogRecord, LogTransport, Logger,
    LoggerConfig, LoggerConfigOptions,
};
