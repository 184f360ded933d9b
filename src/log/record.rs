use crate::log::level::LogLevel;
use serde::Serialize;

/// 日志记录
///
/// 一次日志调用中交给 formatter 的四个输入，借用自调用方，只在一次分发内有效。
/// 字段顺序即 JSON 输出的字段顺序，不可调整。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogRecord<'a> {
    /// ISO 8601 时间戳
    pub timestamp: &'a str,
    /// 所属组件
    pub context: &'a str,
    /// 日志级别
    pub level: LogLevel,
    /// 日志消息
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(message: &'a str, level: LogLevel, context: &'a str, timestamp: &'a str) -> Self {
        Self {
            timestamp,
            context,
            level,
            message,
        }
    }
}
