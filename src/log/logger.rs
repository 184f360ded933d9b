use crate::log::error::{LogError, TransportFailure};
use crate::log::global::global_config;
use crate::log::level::LogLevel;
use crate::log::logger_config::LoggerConfig;
use crate::log::record::LogRecord;
use crate::log::timestamp;
use std::sync::Arc;

/// 日志句柄
///
/// 每个组件持有一个，绑定组件名（context）和共享的路由表。
/// `category()` 选择的分类只对紧接着的一次日志调用生效，调用后句柄回到默认状态。
///
/// # 示例
///
/// ```ignore
/// let mut logger = Logger::new("UserService", config);
/// logger.info("user created").await?;
/// logger.category("db").error("connection lost").await?;
/// ```
#[derive(Debug)]
pub struct Logger {
    context: String,
    config: Arc<LoggerConfig>,
    pending_category: Option<String>,
}

impl Logger {
    pub fn new(context: impl Into<String>, config: Arc<LoggerConfig>) -> Self {
        Self {
            context: context.into(),
            config,
            pending_category: None,
        }
    }

    /// 使用全局配置创建 Logger，全局配置未初始化时返回 [`LogError::NotInitialized`]
    pub fn global(context: impl Into<String>) -> Result<Self, LogError> {
        Ok(Self::new(context, global_config()?))
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn config(&self) -> &Arc<LoggerConfig> {
        &self.config
    }

    /// 为下一次日志调用选择分类，可以重复调用覆盖之前的选择
    pub fn category(&mut self, name: impl Into<String>) -> &mut Self {
        self.pending_category = Some(name.into());
        self
    }

    /// 记录日志，消费 `category()` 选择的分类
    pub async fn log(&mut self, level: LogLevel, message: impl AsRef<str>) -> Result<(), LogError> {
        let category = self.pending_category.take();
        self.log_to(category.as_deref(), level, message.as_ref()).await
    }

    /// 按指定分类记录日志，不修改句柄状态，可以在多个任务间共享
    ///
    /// 依次尝试分类对应的每个 transport：未启用或级别不足的跳过，其余的格式化后投递。
    /// 某个 transport 失败不影响后续 transport，全部尝试完后统一返回失败列表。
    pub async fn log_to(
        &self,
        category: Option<&str>,
        level: LogLevel,
        message: &str,
    ) -> Result<(), LogError> {
        let transports = self.config.resolve(category);
        let timestamp = timestamp::current_timestamp();
        let record = LogRecord::new(message, level, &self.context, &timestamp);

        let mut failures = Vec::new();
        for (index, transport) in transports.iter().enumerate() {
            if !transport.accepts(level) {
                continue;
            }

            let result = match transport.formatter().format(&record) {
                Ok(formatted) => transport.sink().send(&formatted).await,
                Err(err) => Err(err),
            };
            if let Err(error) = result {
                failures.push(TransportFailure { index, error });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LogError::Dispatch(failures))
        }
    }

    pub async fn debug(&mut self, message: impl AsRef<str>) -> Result<(), LogError> {
        self.log(LogLevel::Debug, message).await
    }

    pub async fn info(&mut self, message: impl AsRef<str>) -> Result<(), LogError> {
        self.log(LogLevel::Info, message).await
    }

    pub async fn warn(&mut self, message: impl AsRef<str>) -> Result<(), LogError> {
        self.log(LogLevel::Warn, message).await
    }

    pub async fn error(&mut self, message: impl AsRef<str>) -> Result<(), LogError> {
        self.log(LogLevel::Error, message).await
    }
}

// 克隆出的句柄处于默认状态
impl Clone for Logger {
    fn clone(&self) -> Self {
        Self::new(self.context.clone(), Arc::clone(&self.config))
    }
}
