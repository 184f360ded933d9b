use crate::log::transport::LogTransport;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

/// ConsoleTransport 配置（保留扩展性）
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleTransportConfig {}

/// 终端输出
///
/// 将日志原样写到标准输出，不附加任何装饰
pub struct ConsoleTransport {}

impl ConsoleTransport {
    pub fn new(_: ConsoleTransportConfig) -> Result<Self> {
        Ok(Self {})
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl LogTransport for ConsoleTransport {
    async fn send(&self, formatted_message: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", formatted_message)?;
        stdout.flush()?;
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }
}

crate::impl_try_from!(ConsoleTransportConfig => ConsoleTransport);
crate::impl_box_from!(ConsoleTransport => dyn LogTransport);
