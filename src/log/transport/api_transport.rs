use crate::cfg::serde_duration::{serde_as, HumanDur};
use crate::log::error::LogError;
use crate::log::transport::LogTransport;
use anyhow::{Context, Result};
use backon::{ConstantBuilder, Retryable};
use garde::Validate;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// 请求方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    #[serde(alias = "post")]
    Post,
    #[serde(alias = "put")]
    Put,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
        }
    }
}

/// ApiTransport 配置
#[serde_as]
#[derive(Debug, Clone, Deserialize, SmartDefault, Validate)]
#[serde(default)]
pub struct ApiTransportConfig {
    /// 接收日志的 HTTP(S) 地址
    #[garde(pattern(r"^https?://"))]
    pub endpoint: String,

    /// 请求方法，默认 POST
    #[garde(skip)]
    pub method: HttpMethod,

    /// 额外的请求头，不能覆盖 Content-Type
    #[garde(skip)]
    pub headers: HashMap<String, String>,

    /// 最多尝试次数（包含第一次）
    #[default = 3]
    #[garde(range(min = 1, max = 100))]
    pub retries: usize,

    /// 两次尝试之间的固定间隔
    #[serde_as(as = "HumanDur")]
    #[default(Duration::from_secs(1))]
    #[garde(skip)]
    pub retry_delay: Duration,

    /// 单次请求超时
    #[serde_as(as = "HumanDur")]
    #[default(Duration::from_secs(10))]
    #[garde(skip)]
    pub request_timeout: Duration,
}

/// 重试耗尽后的投递失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub endpoint: String,
    /// 实际尝试次数
    pub attempts: usize,
    /// 最后一次尝试的错误
    pub error: String,
}

/// 投递失败回调
pub type DeliveryFailureHook = Arc<dyn Fn(&DeliveryFailure) + Send + Sync>;

/// HTTP 接口输出
///
/// 把格式化后的日志作为请求体发送到配置的地址。状态码 >= 400 或连接错误视为一次失败，
/// 按固定间隔重试；重试耗尽后只上报失败，不向调用方返回错误，日志失败不能影响业务。
pub struct ApiTransport {
    config: ApiTransportConfig,
    url: Url,
    headers: HeaderMap,
    client: reqwest::Client,
    failure_hook: Option<DeliveryFailureHook>,
    failed_deliveries: AtomicU64,
}

impl ApiTransport {
    pub fn new(config: ApiTransportConfig) -> Result<Self> {
        config.validate()?;

        let url = Url::parse(&config.endpoint)
            .with_context(|| format!("invalid endpoint: {}", config.endpoint))?;

        let mut headers = HeaderMap::with_capacity(config.headers.len() + 1);
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("invalid header name: {}", name))?;
            if name == CONTENT_TYPE {
                continue;
            }
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("invalid value for header {}", name))?;
            headers.insert(name, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            config,
            url,
            headers,
            client,
            failure_hook: None,
            failed_deliveries: AtomicU64::new(0),
        })
    }

    /// 设置重试耗尽后的回调，便于宿主程序监控日志链路的健康状况
    pub fn with_failure_hook(
        mut self,
        hook: impl Fn(&DeliveryFailure) + Send + Sync + 'static,
    ) -> Self {
        self.failure_hook = Some(Arc::new(hook));
        self
    }

    /// 重试耗尽而放弃的日志条数
    pub fn failed_deliveries(&self) -> u64 {
        self.failed_deliveries.load(Ordering::Relaxed)
    }

    /// 目标端口，未显式指定时按 scheme 取 443 或 80
    pub fn port(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }

    pub fn config(&self) -> &ApiTransportConfig {
        &self.config
    }

    async fn perform_request(&self, body: &str) -> Result<(), LogError> {
        let response = self
            .client
            .request(self.config.method.into(), self.url.clone())
            .headers(self.headers.clone())
            .body(body.to_string())
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(LogError::HttpStatus { status });
        }
        Ok(())
    }

    fn report_failure(&self, failure: DeliveryFailure) {
        self.failed_deliveries.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(
            endpoint = %failure.endpoint,
            attempts = failure.attempts,
            error = %failure.error,
            "log sending failed after retries"
        );
        if let Some(hook) = &self.failure_hook {
            hook(&failure);
        }
    }
}

#[async_trait::async_trait]
impl LogTransport for ApiTransport {
    async fn send(&self, formatted_message: &str) -> Result<()> {
        let attempts = AtomicUsize::new(0);
        let backoff = ConstantBuilder::default()
            .with_delay(self.config.retry_delay)
            .with_max_times(self.config.retries.saturating_sub(1));

        let result = (|| async {
            attempts.fetch_add(1, Ordering::SeqCst);
            self.perform_request(formatted_message).await
        })
        .retry(backoff)
        .notify(|err: &LogError, delay: Duration| {
            tracing::debug!(
                endpoint = %self.url,
                error = %err,
                delay_ms = delay.as_millis() as u64,
                "log sending failed, retrying"
            );
        })
        .await;

        if let Err(err) = result {
            self.report_failure(DeliveryFailure {
                endpoint: self.config.endpoint.clone(),
                attempts: attempts.load(Ordering::SeqCst),
                error: err.to_string(),
            });
        }
        Ok(())
    }
}

crate::impl_try_from!(ApiTransportConfig => ApiTransport);
crate::impl_box_from!(ApiTransport => dyn LogTransport);
