use anyhow::{anyhow, Result};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::time::Duration;

// 重新导出serde_with
pub use serde_with::{serde_as, DeserializeAs, SerializeAs};

/// Duration 的人性化格式化器
///
/// 支持格式: "250ms", "1s", "1.5s", "2m", "1h", "1m30s"，也接受表示毫秒的数字
pub struct HumanDur;

impl SerializeAs<Duration> for HumanDur {
    fn serialize_as<S>(source: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_duration(*source))
    }
}

impl<'de> DeserializeAs<'de, Duration> for HumanDur {
    fn deserialize_as<D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(HumanDurVisitor)
    }
}

// 字符串按 "1m30s" 解析，数字按毫秒处理
struct HumanDurVisitor;

impl<'de> Visitor<'de> for HumanDurVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a duration string like \"1s\" or a number of milliseconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Duration, E> {
        parse_duration(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Duration, E> {
        Ok(Duration::from_millis(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Duration, E> {
        u64::try_from(v)
            .map(Duration::from_millis)
            .map_err(|_| E::custom(format!("负数时长: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Duration, E> {
        if !v.is_finite() || v < 0.0 {
            return Err(E::custom(format!("无效时长: {}", v)));
        }
        Ok(Duration::from_nanos((v * 1e6).round() as u64))
    }
}

/// 解析时间字符串: "1m30s" -> Duration
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return Err(anyhow!("空字符串"));
    }

    let mut total = Duration::ZERO;
    let mut rest = s.as_str();
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_end == 0 {
            return Err(anyhow!("期望数字: {}", s));
        }
        let value: f64 = rest[..num_end]
            .parse()
            .map_err(|_| anyhow!("无效数字: {}", &rest[..num_end]))?;
        rest = &rest[num_end..];

        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_end];
        rest = &rest[unit_end..];

        let nanos_per_unit: f64 = match unit {
            "ns" => 1.0,
            "us" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 6e10,
            "h" => 3.6e12,
            "d" => 8.64e13,
            "" => return Err(anyhow!("缺少时间单位: {}", s)),
            _ => return Err(anyhow!("不支持的时间单位: {}", unit)),
        };
        total += Duration::from_nanos((value * nanos_per_unit).round() as u64);
    }

    Ok(total)
}

/// Duration 格式化为字符串: 整秒输出 "1m30s"，否则输出毫秒 "1500ms"
pub fn format_duration(duration: Duration) -> String {
    if duration.subsec_nanos() != 0 {
        return format!("{}ms", duration.as_millis());
    }

    let secs = duration.as_secs();
    if secs == 0 {
        return "0s".to_string();
    }

    let mut result = String::new();
    let (h, m, s) = (secs / 3600, secs % 3600 / 60, secs % 60);
    if h > 0 {
        result.push_str(&format!("{}h", h));
    }
    if m > 0 {
        result.push_str(&format!("{}m", m));
    }
    if s > 0 {
        result.push_str(&format!("{}s", s));
    }
    result
}
