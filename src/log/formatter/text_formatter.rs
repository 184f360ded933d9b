use crate::log::colors;
use crate::log::formatter::LogFormatter;
use crate::log::record::LogRecord;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;

/// TextFormatter 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct TextFormatterConfig {
    /// 是否启用颜色输出
    #[default = false]
    pub colored: bool,
}

/// 文本格式化器
///
/// 输出 `[timestamp] [context] [LEVEL] message`。
/// 启用颜色时只在整行外层包裹级别颜色，不改动行内的任何内容。
pub struct TextFormatter {
    config: TextFormatterConfig,
}

impl TextFormatter {
    pub fn new(config: TextFormatterConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// 不带颜色的文本格式化器
    pub fn plain() -> Self {
        Self {
            config: TextFormatterConfig { colored: false },
        }
    }

    /// 带颜色的文本格式化器
    pub fn colored() -> Self {
        Self {
            config: TextFormatterConfig { colored: true },
        }
    }
}

impl LogFormatter for TextFormatter {
    fn format(&self, record: &LogRecord<'_>) -> Result<String> {
        // 预分配容量：方括号、空格和级别约 16 字节
        let mut line = String::with_capacity(
            16 + record.timestamp.len() + record.context.len() + record.message.len(),
        );
        line.push('[');
        line.push_str(record.timestamp);
        line.push_str("] [");
        line.push_str(record.context);
        line.push_str("] [");
        line.push_str(&record.level.to_string());
        line.push_str("] ");
        line.push_str(record.message);

        if self.config.colored {
            return Ok(colors::apply_color(record.level, &line));
        }
        Ok(line)
    }
}

// 使用宏实现 TryFrom trait
crate::impl_try_from!(TextFormatterConfig => TextFormatter);
crate::impl_box_from!(TextFormatter => dyn LogFormatter);
