//! 时间工具函数 — 宽松的 ISO-8601 日期解析
//!
//! 订单的起止日期在两个地方被解析：路由前的语义校验中间件
//! (原始 JSON) 和 handler 的 `Json` 提取器 (强类型 DTO)。
//! 两条路径都必须走同一个解析函数，否则校验结果会出现分歧。

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// 解析 ISO-8601 日期或日期时间字符串
///
/// 按顺序尝试：
/// 1. 无时区的日期时间 (`2025-08-01T10:30:00`)
/// 2. RFC 3339 (`2025-08-01T10:30:00Z`, 带偏移量) — 归一化为 UTC
/// 3. 纯日期 (`2025-08-01`) — 视为当天 00:00:00
pub fn parse_date_time_flexible(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// serde 适配器，用于 DTO 字段：`#[serde(deserialize_with = "...")]`
pub fn flexible_date_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date_time_flexible(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 date: {s}")))
}
