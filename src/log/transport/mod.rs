mod api_transport;
mod console_transport;
mod core;
mod file_transport;
mod registry;

pub use self::core::{LogTransport, Transport};
pub use api_transport::{
    ApiTransport, ApiTransportConfig, DeliveryFailure, DeliveryFailureHook, HttpMethod,
};
pub use console_transport::{ConsoleTransport, ConsoleTransportConfig};
pub use file_transport::{FileTransport, FileTransportConfig};
pub use registry::{create_transport_from_options, register_transports};
