//! 终端颜色

use crate::log::level::LogLevel;

const RESET: &str = "\x1b[0m";

/// 级别对应的 ANSI 颜色
pub fn level_color(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "\x1b[34m", // 蓝色
        LogLevel::Info => "\x1b[32m",  // 绿色
        LogLevel::Warn => "\x1b[33m",  // 黄色
        LogLevel::Error => "\x1b[31m", // 红色
    }
}

/// 用级别颜色包裹整行，不修改内容
pub fn apply_color(level: LogLevel, message: &str) -> String {
    let color = level_color(level);
    let mut result = String::with_capacity(color.len() + message.len() + RESET.len());
    result.push_str(color);
    result.push_str(message);
    result.push_str(RESET);
    result
}

/// 从消息中的 `[level]` 标记推断级别后着色，找不到时按 info 处理
pub fn apply_dynamic_color(message: &str) -> String {
    apply_color(extract_level(message).unwrap_or(LogLevel::Info), message)
}

/// 查找第一个 `[debug]`/`[info]`/`[warn]`/`[error]` 标记（忽略大小写）
fn extract_level(message: &str) -> Option<LogLevel> {
    message
        .split('[')
        .skip(1)
        .filter_map(|part| part.split_once(']'))
        .find_map(|(token, _)| token.parse::<LogLevel>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_color() {
        assert_eq!(apply_color(LogLevel::Debug, "msg"), "\x1b[34mmsg\x1b[0m");
        assert_eq!(apply_color(LogLevel::Info, "msg"), "\x1b[32mmsg\x1b[0m");
        assert_eq!(apply_color(LogLevel::Warn, "msg"), "\x1b[33mmsg\x1b[0m");
        assert_eq!(apply_color(LogLevel::Error, "msg"), "\x1b[31mmsg\x1b[0m");
    }

    #[test]
    fn test_apply_dynamic_color() {
        assert_eq!(
            apply_dynamic_color("[ts] [db] [ERROR] lost"),
            "\x1b[31m[ts] [db] [ERROR] lost\x1b[0m"
        );
        assert_eq!(
            apply_dynamic_color("[warn] disk"),
            "\x1b[33m[warn] disk\x1b[0m"
        );
        // 无级别标记时按 info 着色
        assert_eq!(apply_dynamic_color("plain"), "\x1b[32mplain\x1b[0m");
    }
}
