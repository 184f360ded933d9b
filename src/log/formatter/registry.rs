use crate::cfg::{create_trait_from_type_options, register_trait, TypeOptions};
use crate::log::formatter::LogFormatter;
use crate::log::formatter::{
    json_formatter::{JsonFormatter, JsonFormatterConfig},
    text_formatter::{TextFormatter, TextFormatterConfig},
};
use anyhow::Result;

/// 注册所有 Formatter 实现
pub fn register_formatters() -> Result<()> {
    register_trait::<TextFormatter, dyn LogFormatter, TextFormatterConfig>("TextFormatter")?;
    register_trait::<JsonFormatter, dyn LogFormatter, JsonFormatterConfig>("JsonFormatter")?;
    Ok(())
}

/// 从 TypeOptions 创建 Formatter
pub fn create_formatter_from_options(options: &TypeOptions) -> Result<Box<dyn LogFormatter>> {
    create_trait_from_type_options(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{LogLevel, LogRecord};

    const TS: &str = "2025-01-26T12:34:56.789Z";

    #[test]
    fn test_create_text_formatter() -> Result<()> {
        register_formatters()?;

        let opts = TypeOptions::from_json(
            r#"
            {
                "type": "TextFormatter",
                "options": {
                    "colored": false
                }
            }
        "#,
        )?;

        let formatter = create_formatter_from_options(&opts)?;
        let formatted = formatter.format(&LogRecord::new("msg", LogLevel::Info, "ctx", TS))?;
        assert_eq!(formatted, format!("[{}] [ctx] [INFO] msg", TS));

        Ok(())
    }

    #[test]
    fn test_create_json_formatter() -> Result<()> {
        register_formatters()?;

        let opts = TypeOptions::from_json(r#"{ "type": "JsonFormatter" }"#)?;

        let formatter = create_formatter_from_options(&opts)?;
        let formatted = formatter.format(&LogRecord::new("msg", LogLevel::Error, "ctx", TS))?;
        let value: serde_json::Value = serde_json::from_str(&formatted)?;
        assert_eq!(value["level"], "error");

        Ok(())
    }

    #[test]
    fn test_create_unknown_formatter() -> Result<()> {
        register_formatters()?;

        let opts = TypeOptions::of("XmlFormatter");
        assert!(create_formatter_from_options(&opts).is_err());

        Ok(())
    }
}
