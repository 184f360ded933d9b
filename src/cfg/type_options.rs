// TypeOptions 序列化相关实现

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 类型选项结构
///
/// `type` 是注册表中的类型名称，`options` 是该类型的配置，原样交给对应的构造函数。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOptions {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default = "empty_options")]
    pub options: JsonValue,
}

fn empty_options() -> JsonValue {
    JsonValue::Object(Default::default())
}

impl TypeOptions {
    /// 直接构造，options 为空对象
    pub fn of(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            options: empty_options(),
        }
    }

    /// 构造带配置的 TypeOptions
    pub fn with_options(type_name: impl Into<String>, options: JsonValue) -> Self {
        Self {
            type_name: type_name.into(),
            options,
        }
    }

    /// 从 JSON 字符串创建 TypeOptions（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> Result<Self> {
        // json5 兼容注释、尾随逗号和未引用的键
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串创建 TypeOptions
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串创建 TypeOptions
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_options_from_json5() -> Result<()> {
        let opts = TypeOptions::from_json(
            r#"
            {
                // 注释和未引用的键
                type: "FileTransport",
                options: { file_path: "logs/app.log", max_size: 1024, },
            }
        "#,
        )?;

        assert_eq!(opts.type_name, "FileTransport");
        assert_eq!(opts.options["file_path"], "logs/app.log");
        assert_eq!(opts.options["max_size"], 1024);
        Ok(())
    }

    #[test]
    fn test_type_options_from_yaml() -> Result<()> {
        let opts = TypeOptions::from_yaml(
            r#"
type: TextFormatter
options:
  colored: true
"#,
        )?;

        assert_eq!(opts.type_name, "TextFormatter");
        assert_eq!(opts.options["colored"], true);
        Ok(())
    }

    #[test]
    fn test_type_options_from_toml() -> Result<()> {
        let opts = TypeOptions::from_toml(
            r#"
type = "ApiTransport"

[options]
endpoint = "http://localhost:8080/logs"
retries = 2
"#,
        )?;

        assert_eq!(opts.type_name, "ApiTransport");
        assert_eq!(opts.options["retries"], 2);
        Ok(())
    }

    #[test]
    fn test_type_options_missing_options_defaults_to_empty_object() -> Result<()> {
        let opts = TypeOptions::from_json(r#"{ "type": "ConsoleTransport" }"#)?;
        assert_eq!(opts, TypeOptions::of("ConsoleTransport"));
        assert!(opts.options.as_object().map_or(false, |o| o.is_empty()));
        Ok(())
    }

    #[test]
    fn test_type_options_json_roundtrip() -> Result<()> {
        let opts = TypeOptions::with_options(
            "TextFormatter",
            serde_json::json!({ "colored": false }),
        );
        let parsed = TypeOptions::from_json(&opts.to_json()?)?;
        assert_eq!(parsed, opts);
        Ok(())
    }
}
