use crate::cfg::{create_trait_from_type_options, register_trait, TypeOptions};
use crate::log::transport::LogTransport;
use crate::log::transport::{
    api_transport::{ApiTransport, ApiTransportConfig},
    console_transport::{ConsoleTransport, ConsoleTransportConfig},
    file_transport::{FileTransport, FileTransportConfig},
};
use anyhow::Result;

/// 注册所有 Transport 实现
pub fn register_transports() -> Result<()> {
    register_trait::<ConsoleTransport, dyn LogTransport, ConsoleTransportConfig>(
        "ConsoleTransport",
    )?;
    register_trait::<FileTransport, dyn LogTransport, FileTransportConfig>("FileTransport")?;
    register_trait::<ApiTransport, dyn LogTransport, ApiTransportConfig>("ApiTransport")?;
    Ok(())
}

/// 从 TypeOptions 创建 Transport
pub fn create_transport_from_options(options: &TypeOptions) -> Result<Box<dyn LogTransport>> {
    create_trait_from_type_options(options)
}
