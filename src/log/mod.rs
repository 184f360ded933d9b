//! 日志模块
//!
//! 一个日志入口，按配置把每条日志分发到多个 transport。每个 transport 有自己的
//! 最低级别、formatter 和启用标记，可以按分类（category）覆盖默认的 transport 序列。
//!
//! # 特性
//!
//! - 日志级别：Debug < Info < Warn < Error
//! - 格式化器：TextFormatter（可着色）、JsonFormatter
//! - 输出目标：ConsoleTransport、FileTransport（按大小切分）、ApiTransport（HTTP，固定间隔重试）
//! - 基于 `{ type, options }` 配置的声明式创建
//! - 完全异步
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use logx::log::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let options: LoggerConfigOptions = json5::from_str(r#"
//!         {
//!             transports: [
//!                 {
//!                     level: "info",
//!                     formatter: { type: "TextFormatter", options: { colored: true } },
//!                     transport: { type: "ConsoleTransport" },
//!                 },
//!             ],
//!             category_transports: {
//!                 db: [
//!                     {
//!                         level: "error",
//!                         formatter: { type: "JsonFormatter" },
//!                         transport: { type: "FileTransport", options: { file_path: "logs/db.log" } },
//!                     },
//!                 ],
//!             },
//!         }
//!     "#)?;
//!
//!     // 组件在第一次声明式创建时自动注册
//!     init_from_options(options)?;
//!
//!     let mut logger = Logger::global("UserService")?;
//!     logger.info("Application started").await?;
//!     logger.category("db").error("Connection failed").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod colors;
pub mod error;
pub mod formatter;
pub mod global;
pub mod level;
pub mod logger;
pub mod logger_config;
pub mod record;
pub mod timestamp;
pub mod transport;

// 重新导出核心类型
pub use error::{LogError, TransportFailure};
pub use formatter::LogFormatter;
pub use global::{global_config, init, init_from_options, is_initialized};
pub use level::LogLevel;
pub use logger::Logger;
pub use logger_config::{LoggerConfig, LoggerConfigOptions, TransportConfig};
pub use record::LogRecord;
pub use transport::{LogTransport, Transport};

// 重新导出组件及注册函数
pub use formatter::{
    register_formatters, JsonFormatter, JsonFormatterConfig, TextFormatter, TextFormatterConfig,
};
pub use transport::{
    register_transports, ApiTransport, ApiTransportConfig, ConsoleTransport,
    ConsoleTransportConfig, DeliveryFailure, FileTransport, FileTransportConfig, HttpMethod,
};
