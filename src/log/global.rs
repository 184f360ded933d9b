use crate::log::error::LogError;
use crate::log::logger_config::{LoggerConfig, LoggerConfigOptions};
use anyhow::Result;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// 全局日志配置，只能初始化一次
static GLOBAL_CONFIG: OnceCell<Arc<LoggerConfig>> = OnceCell::new();

/// 初始化全局日志配置
///
/// 并发初始化时只有一个调用成功，其余返回 [`LogError::AlreadyInitialized`]。
///
/// # 示例
///
/// ```ignore
/// use logx::log::{init, LoggerConfig};
///
/// fn example() -> Result<(), logx::log::LogError> {
///     init(LoggerConfig::new(transports, categories))?;
///     Ok(())
/// }
/// ```
pub fn init(config: LoggerConfig) -> Result<Arc<LoggerConfig>, LogError> {
    let config = Arc::new(config);
    GLOBAL_CONFIG
        .set(Arc::clone(&config))
        .map_err(|_| LogError::AlreadyInitialized)?;

    tracing::debug!(
        transports = config.default_transports().len(),
        "global logger config initialized"
    );
    Ok(config)
}

/// 从声明式配置初始化全局日志配置
pub fn init_from_options(options: LoggerConfigOptions) -> Result<Arc<LoggerConfig>> {
    if GLOBAL_CONFIG.get().is_some() {
        return Err(LogError::AlreadyInitialized.into());
    }
    let config = LoggerConfig::from_options(options)?;
    Ok(init(config)?)
}

/// 获取全局日志配置
pub fn global_config() -> Result<Arc<LoggerConfig>, LogError> {
    GLOBAL_CONFIG.get().cloned().ok_or(LogError::NotInitialized)
}

/// 全局配置是否已经初始化
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
