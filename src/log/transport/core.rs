use crate::log::formatter::LogFormatter;
use crate::log::level::LogLevel;
use anyhow::Result;
use std::sync::Arc;

/// 日志传输 trait
///
/// 负责将格式化后的日志投递到目标介质（终端、文件、HTTP 接口）
#[async_trait::async_trait]
pub trait LogTransport: Send + Sync {
    /// 投递一条已格式化的日志
    async fn send(&self, formatted_message: &str) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// 已配置的 transport
///
/// 把投递目标和最低级别、formatter、启用标记绑定在一起。
/// formatter 通过 Arc 共享，多个 transport 可以使用同一个实例。
#[derive(Clone)]
pub struct Transport {
    level: LogLevel,
    formatter: Arc<dyn LogFormatter>,
    active: bool,
    sink: Arc<dyn LogTransport>,
}

impl Transport {
    pub fn new(
        level: LogLevel,
        formatter: Arc<dyn LogFormatter>,
        sink: Arc<dyn LogTransport>,
    ) -> Self {
        Self {
            level,
            formatter,
            active: true,
            sink,
        }
    }

    /// 设置启用标记，未启用的 transport 仍参与解析，但不会被投递
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn formatter(&self) -> &dyn LogFormatter {
        self.formatter.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn sink(&self) -> &dyn LogTransport {
        self.sink.as_ref()
    }

    /// 启用且级别满足时才接收该条日志
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.active && level.passes(self.level)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("level", &self.level)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
