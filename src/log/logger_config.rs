use crate::cfg::TypeOptions;
use crate::log::formatter::{create_formatter_from_options, register_formatters, LogFormatter};
use crate::log::level::LogLevel;
use crate::log::transport::{
    create_transport_from_options, register_transports, LogTransport, Transport,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::collections::HashMap;
use std::sync::{Arc, Once};

/// 单个 transport 的声明式配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct TransportConfig {
    /// 最低日志级别
    #[default(LogLevel::Info)]
    pub level: LogLevel,

    /// 是否启用
    #[default = true]
    pub active: bool,

    /// Formatter 配置
    #[default(TypeOptions::of("TextFormatter"))]
    pub formatter: TypeOptions,

    /// Transport 配置
    #[default(TypeOptions::of("ConsoleTransport"))]
    pub transport: TypeOptions,
}

/// 日志配置
///
/// ```json5
/// {
///     transports: [
///         { level: "debug", transport: { type: "ConsoleTransport" } },
///     ],
///     category_transports: {
///         db: [
///             {
///                 level: "error",
///                 formatter: { type: "JsonFormatter" },
///                 transport: { type: "ApiTransport", options: { endpoint: "https://..." } },
///             },
///         ],
///     },
/// }
/// ```
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerConfigOptions {
    /// 默认 transport 序列
    pub transports: Vec<TransportConfig>,

    /// 按分类覆盖的 transport 序列
    pub category_transports: HashMap<String, Vec<TransportConfig>>,
}

/// 注册所有日志组件（只执行一次）
static REGISTER_ONCE: Once = Once::new();

fn register_components() {
    REGISTER_ONCE.call_once(|| {
        if let Err(err) = register_formatters() {
            tracing::error!(error = %err, "failed to register log formatters");
        }
        if let Err(err) = register_transports() {
            tracing::error!(error = %err, "failed to register log transports");
        }
    });
}

impl TransportConfig {
    /// 按类型名称创建 formatter 和投递目标
    pub fn build(&self) -> Result<Transport> {
        register_components();

        let formatter: Arc<dyn LogFormatter> =
            Arc::from(create_formatter_from_options(&self.formatter)?);
        let sink: Arc<dyn LogTransport> =
            Arc::from(create_transport_from_options(&self.transport)?);

        Ok(Transport::new(self.level, formatter, sink).with_active(self.active))
    }
}

/// 日志路由表
///
/// 默认 transport 序列加上可选的分类覆盖。构造完成后不再修改，
/// 通过 `Arc` 在所有 Logger 之间共享。
#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    default_transports: Vec<Transport>,
    category_transports: HashMap<String, Vec<Transport>>,
}

impl LoggerConfig {
    pub fn new(
        default_transports: Vec<Transport>,
        category_transports: HashMap<String, Vec<Transport>>,
    ) -> Self {
        Self {
            default_transports,
            category_transports,
        }
    }

    /// 从声明式配置创建，任何一个组件创建失败都会返回错误
    pub fn from_options(options: LoggerConfigOptions) -> Result<Self> {
        let default_transports = build_all(&options.transports)
            .context("failed to build default transports")?;

        let mut category_transports = HashMap::with_capacity(options.category_transports.len());
        for (category, configs) in &options.category_transports {
            let transports = build_all(configs)
                .with_context(|| format!("failed to build transports for category '{}'", category))?;
            category_transports.insert(category.clone(), transports);
        }

        tracing::debug!(
            transports = default_transports.len(),
            categories = category_transports.len(),
            "logger config built"
        );

        Ok(Self::new(default_transports, category_transports))
    }

    /// 解析分类对应的 transport 序列
    ///
    /// 分类存在时返回分类的序列（即使为空），否则返回默认序列
    pub fn resolve(&self, category: Option<&str>) -> &[Transport] {
        category
            .and_then(|name| self.category_transports.get(name))
            .unwrap_or(&self.default_transports)
    }

    pub fn default_transports(&self) -> &[Transport] {
        &self.default_transports
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category_transports.keys().map(String::as_str)
    }
}

impl TryFrom<LoggerConfigOptions> for LoggerConfig {
    type Error = anyhow::Error;

    fn try_from(options: LoggerConfigOptions) -> Result<Self> {
        Self::from_options(options)
    }
}

fn build_all(configs: &[TransportConfig]) -> Result<Vec<Transport>> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| {
            config
                .build()
                .with_context(|| format!("transport #{}", index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::formatter::JsonFormatter;
    use crate::log::transport::ConsoleTransport;

    fn console(level: LogLevel) -> Transport {
        Transport::new(
            level,
            Arc::new(JsonFormatter::default()),
            Arc::new(ConsoleTransport::default()),
        )
    }

    #[test]
    fn test_transport_config_default() {
        let config: TransportConfig = json5::from_str("{}").unwrap();
        assert_eq!(config.level, LogLevel::Info);
        assert!(config.active);
        assert_eq!(config.formatter.type_name, "TextFormatter");
        assert_eq!(config.transport.type_name, "ConsoleTransport");
    }

    #[test]
    fn test_resolve_category_and_fallback() {
        let mut categories = HashMap::new();
        categories.insert("db".to_string(), vec![console(LogLevel::Error)]);
        categories.insert("muted".to_string(), vec![]);

        let config = LoggerConfig::new(
            vec![console(LogLevel::Debug), console(LogLevel::Info)],
            categories,
        );

        assert_eq!(config.resolve(None).len(), 2);
        assert_eq!(config.resolve(Some("db")).len(), 1);
        assert_eq!(config.resolve(Some("db"))[0].level(), LogLevel::Error);
        // 未知分类回退到默认序列
        assert_eq!(config.resolve(Some("cache")).len(), 2);
        // 已存在但为空的分类不回退
        assert!(config.resolve(Some("muted")).is_empty());

        let mut names: Vec<_> = config.categories().collect();
        names.sort();
        assert_eq!(names, ["db", "muted"]);
    }

    #[test]
    fn test_from_options() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let log_path = temp_dir.path().join("app.log");

        let options: LoggerConfigOptions = json5::from_str(&format!(
            r#"{{
                transports: [
                    {{
                        level: "debug",
                        formatter: {{ type: "TextFormatter", options: {{ colored: true }} }},
                        transport: {{ type: "ConsoleTransport" }},
                    }},
                    {{
                        level: "warn",
                        active: false,
                        formatter: {{ type: "JsonFormatter" }},
                        transport: {{ type: "FileTransport", options: {{ file_path: "{}" }} }},
                    }},
                ],
                category_transports: {{
                    db: [
                        {{
                            level: "error",
                            formatter: {{ type: "JsonFormatter" }},
                            transport: {{
                                type: "ApiTransport",
                                options: {{ endpoint: "http://127.0.0.1:1/logs", retries: 2, retry_delay: "10ms" }},
                            }},
                        }},
                    ],
                }},
            }}"#,
            log_path.to_string_lossy().replace('\\', "/")
        ))?;

        let config = LoggerConfig::from_options(options)?;

        let defaults = config.resolve(None);
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0].level(), LogLevel::Debug);
        assert!(defaults[0].is_active());
        assert_eq!(defaults[1].level(), LogLevel::Warn);
        assert!(!defaults[1].is_active());
        assert!(log_path.exists());

        let db = config.resolve(Some("db"));
        assert_eq!(db.len(), 1);
        assert_eq!(db[0].level(), LogLevel::Error);

        Ok(())
    }

    #[test]
    fn test_from_options_unknown_type() {
        let options: LoggerConfigOptions = json5::from_str(
            r#"{ transports: [ { transport: { type: "KafkaTransport" } } ] }"#,
        )
        .unwrap();

        let err = LoggerConfig::from_options(options).unwrap_err();
        assert!(format!("{:#}", err).contains("KafkaTransport"));
    }

    #[test]
    fn test_from_options_invalid_level() {
        let result: Result<LoggerConfigOptions, _> =
            json5::from_str(r#"{ transports: [ { level: "verbose" } ] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_options_empty() -> Result<()> {
        let config = LoggerConfig::try_from(LoggerConfigOptions::default())?;
        assert!(config.default_transports().is_empty());
        assert_eq!(config.categories().count(), 0);
        Ok(())
    }
}
