use crate::log::timestamp;
use crate::log::transport::LogTransport;
use anyhow::{Context, Result};
use garde::Validate;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// FileTransport 配置
#[derive(Debug, Clone, Deserialize, SmartDefault, Validate)]
#[serde(default)]
pub struct FileTransportConfig {
    /// 日志文件路径
    #[default("app.log".to_string())]
    #[garde(length(min = 1))]
    pub file_path: String,

    /// 切分阈值（字节），文件大小达到该值后，下一次写入前切分
    #[default(5 * 1024 * 1024)]
    #[garde(range(min = 1))]
    pub max_size: u64,
}

/// 文件输出
///
/// 每条日志追加一行。写入前检查文件大小，达到阈值时把当前文件重命名为
/// `<file_path>.<时间戳>`，并在原路径上重新创建空文件，然后再写入。
pub struct FileTransport {
    config: FileTransportConfig,
    path: PathBuf,
    file: Mutex<tokio::fs::File>,
}

impl FileTransport {
    /// 创建 FileTransport，父目录和空文件不存在时会被创建
    pub fn new(config: FileTransportConfig) -> Result<Self> {
        config.validate()?;

        let path = PathBuf::from(&config.file_path);
        let file = open_log_file(&path)?;

        Ok(Self {
            config,
            path,
            file: Mutex::new(tokio::fs::File::from_std(file)),
        })
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 切分阈值（字节）
    pub fn max_size(&self) -> u64 {
        self.config.max_size
    }

    /// 重命名当前文件并在原路径重新打开，调用方持有文件锁
    async fn rotate(&self, file: &mut tokio::fs::File) -> Result<PathBuf> {
        file.flush().await?;

        let rotated = rotated_path(&self.path, &timestamp::current_timestamp()).await?;
        tokio::fs::rename(&self.path, &rotated)
            .await
            .with_context(|| format!("failed to rotate {}", self.path.display()))?;

        *file = tokio::fs::File::from_std(open_log_file(&self.path)?);

        tracing::debug!(
            path = %self.path.display(),
            rotated = %rotated.display(),
            "log file rotated"
        );
        Ok(rotated)
    }
}

#[async_trait::async_trait]
impl LogTransport for FileTransport {
    async fn send(&self, formatted_message: &str) -> Result<()> {
        let mut file = self.file.lock().await;

        let size = tokio::fs::metadata(&self.path)
            .await
            .with_context(|| format!("failed to stat {}", self.path.display()))?
            .len();
        if size >= self.config.max_size {
            self.rotate(&mut file).await?;
        }

        let mut line = String::with_capacity(formatted_message.len() + 1);
        line.push_str(formatted_message);
        line.push('\n');
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        let mut file = self.file.lock().await;
        file.flush().await?;
        Ok(())
    }
}

/// 以追加模式打开日志文件，必要时创建父目录
fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// 生成切分后的文件名，同一毫秒内多次切分时追加序号避免覆盖
///
/// 无法确认候选文件是否存在时返回错误，不冒险覆盖
async fn rotated_path(path: &Path, timestamp: &str) -> Result<PathBuf> {
    let base = format!("{}.{}", path.display(), timestamp::file_safe(timestamp));
    let mut candidate = PathBuf::from(&base);
    let mut sequence = 1;
    while tokio::fs::try_exists(&candidate)
        .await
        .with_context(|| format!("failed to check {}", candidate.display()))?
    {
        candidate = PathBuf::from(format!("{}.{}", base, sequence));
        sequence += 1;
    }
    Ok(candidate)
}

crate::impl_try_from!(FileTransportConfig => FileTransport);
crate::impl_box_from!(FileTransport => dyn LogTransport);
