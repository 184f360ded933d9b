//! 日志门面使用示例
//!
//! 默认输出到终端和 logs/app.log，`db` 分类的 error 日志以 JSON 发送到 HTTP 接口。
//! 接口地址通过 LOGX_DEMO_ENDPOINT 指定，内部诊断信息通过 RUST_LOG 控制。

use anyhow::Result;
use logx::log::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let endpoint = std::env::var("LOGX_DEMO_ENDPOINT")
        .unwrap_or_else(|_| "http://127.0.0.1:8080/logs".to_string());

    let api = ApiTransport::new(ApiTransportConfig {
        endpoint,
        headers: HashMap::from([
            ("User-Agent".to_string(), "logx-demo".to_string()),
            ("Authorization".to_string(), "Bearer my_token".to_string()),
        ]),
        retries: 2,
        retry_delay: Duration::from_secs(1),
        ..Default::default()
    })?
    .with_failure_hook(|failure| {
        eprintln!(
            "db log dropped after {} attempts: {}",
            failure.attempts, failure.error
        );
    });

    let file = FileTransport::new(FileTransportConfig {
        file_path: "./logs/app.log".to_string(),
        max_size: 1024,
    })?;

    let config = LoggerConfig::new(
        vec![
            Transport::new(
                LogLevel::Debug,
                Arc::new(TextFormatter::colored()),
                Arc::new(ConsoleTransport::default()),
            ),
            Transport::new(
                LogLevel::Info,
                Arc::new(TextFormatter::plain()),
                Arc::new(file),
            ),
        ],
        HashMap::from([(
            "db".to_string(),
            vec![Transport::new(
                LogLevel::Error,
                Arc::new(JsonFormatter::default()),
                Arc::new(api),
            )],
        )]),
    );
    init(config)?;

    let mut logger = Logger::global("MyClass")?;

    logger.debug("This is a debug log.").await?;
    logger.info("This is an info log.").await?;
    logger.warn("This is a warning log.").await?;
    logger.error("This is an error log.").await?;

    // warn 低于 db 分类的最低级别，不会发送
    logger.category("db").warn("Database connection lost.").await?;
    logger.category("db").error("Database connection failed.").await?;

    Ok(())
}
