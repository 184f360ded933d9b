use crate::log::formatter::LogFormatter;
use crate::log::record::LogRecord;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;

/// JsonFormatter 配置（保留扩展性）
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct JsonFormatterConfig {}

/// JSON 格式化器
///
/// 输出 `{"timestamp":..,"context":..,"level":..,"message":..}`，
/// 这是下游日志采集依赖的格式，字段名、顺序和级别小写都不能改变。
pub struct JsonFormatter {}

impl JsonFormatter {
    pub fn new(_: JsonFormatterConfig) -> Result<Self> {
        Ok(Self {})
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self {}
    }
}

impl LogFormatter for JsonFormatter {
    fn format(&self, record: &LogRecord<'_>) -> Result<String> {
        // 直接序列化 LogRecord，复用其 Serialize 实现
        Ok(serde_json::to_string(record)?)
    }
}

crate::impl_try_from!(JsonFormatterConfig => JsonFormatter);
crate::impl_box_from!(JsonFormatter => dyn LogFormatter);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::level::LogLevel;
    use serde_json::Value;

    const TS: &str = "2025-01-26T12:34:56.789Z";

    #[test]
    fn test_json_formatter_format() {
        let formatter = JsonFormatter::default();
        let record = LogRecord::new("test message", LogLevel::Info, "MyClass", TS);

        let formatted = formatter.format(&record).unwrap();
        assert_eq!(
            formatted,
            r#"{"timestamp":"2025-01-26T12:34:56.789Z","context":"MyClass","level":"info","message":"test message"}"#
        );
    }

    #[test]
    fn test_json_formatter_exact_keys() {
        let formatter = JsonFormatter::default();
        let formatted = formatter
            .format(&LogRecord::new("m", LogLevel::Warn, "c", TS))
            .unwrap();

        let value: Value = serde_json::from_str(&formatted).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["timestamp", "context", "level", "message"] {
            assert!(object[key].is_string(), "{} should be a string", key);
        }
    }

    #[test]
    fn test_json_formatter_round_trip() {
        let formatter = JsonFormatter::default();
        let messages = [
            "",
            "plain",
            "with \"quotes\" inside",
            "line1\nline2",
            "tab\tseparated",
            "back\\slash and unicode ✓",
        ];

        for level in LogLevel::ALL {
            for message in messages {
                let formatted = formatter
                    .format(&LogRecord::new(message, level, "ctx", TS))
                    .unwrap();
                let value: Value = serde_json::from_str(&formatted).unwrap();

                assert_eq!(value["timestamp"], TS);
                assert_eq!(value["context"], "ctx");
                assert_eq!(value["level"], level.as_str());
                assert_eq!(value["message"], message);
            }
        }
    }

    #[test]
    fn test_json_formatter_from_config() {
        let formatter = JsonFormatter::try_from(JsonFormatterConfig::default());
        assert!(formatter.is_ok());
    }
}
