use crate::log::record::LogRecord;
use anyhow::Result;

/// 日志格式化器 trait
///
/// 负责将 LogRecord 格式化为字符串。实现必须是纯函数：相同输入总是得到相同输出。
pub trait LogFormatter: Send + Sync {
    /// 格式化日志记录
    fn format(&self, record: &LogRecord<'_>) -> Result<String>;
}
