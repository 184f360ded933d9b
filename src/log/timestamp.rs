//! 时间戳工具

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// 当前时间的 ISO 8601 表示（UTC，毫秒精度）
///
/// 示例: 2025-01-26T12:34:56.789Z
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 可读的本地时间格式
///
/// 示例: 26/01/2025 15:30:45.123
pub fn readable_timestamp(time: DateTime<Local>) -> String {
    time.format("%d/%m/%Y %H:%M:%S%.3f").to_string()
}

/// 适合作为文件名的时间戳，`:` 和 `.` 替换为 `-`
pub fn file_safe(timestamp: &str) -> String {
    timestamp.replace([':', '.'], "-")
}
