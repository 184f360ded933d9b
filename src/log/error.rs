use thiserror::Error;

/// 日志模块错误类型
#[derive(Error, Debug)]
pub enum LogError {
    #[error("日志配置已经初始化")]
    AlreadyInitialized,

    #[error("日志配置尚未初始化")]
    NotInitialized,

    #[error("HTTP 错误: {status}")]
    HttpStatus { status: u16 },

    #[error("请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{} 个 transport 发送失败: {}", .0.len(), summarize(.0))]
    Dispatch(Vec<TransportFailure>),
}

/// 单个 transport 在一次分发中的失败
#[derive(Debug)]
pub struct TransportFailure {
    /// transport 在解析出的序列中的位置
    pub index: usize,
    pub error: anyhow::Error,
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}: {:#}", self.index, self.error)
    }
}

fn summarize(failures: &[TransportFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
