//! 路由前语义校验中间件
//!
//! 在请求进入路由之前拦截订单的写操作 (POST/PUT `/order*`)，
//! 从原始 JSON 中宽松解码起止日期并提前拒绝 `end < start` 的请求。
//!
//! # 行为
//!
//! - 只缓冲需要拦截的请求体，校验后原样还给下游提取器
//! - 解码失败 (非 JSON、字段缺失、日期不可解析) 一律放行，
//!   由 handler 层按解码错误处理
//! - 字段名大小写不敏感 (`startDate` / `STARTDATE` / `startdate`)
//! - 拒绝时的响应体固定为 `{"error": "EndDate must be after StartDate"}`，
//!   消息与 handler 层共用同一个常量

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use serde_json::{Value, json};

use crate::core::ServerError;
use crate::orders::validation::{DATE_RANGE_RULE, validate_date_range};
use crate::utils::time::parse_date_time_flexible;

/// 缓冲请求体的上限，与 axum `Json` 提取器的默认限制一致
const MAX_BUFFERED_BODY: usize = 2 * 1024 * 1024;

/// 语义校验中间件
pub async fn semantic_validation(req: Request, next: Next) -> Response {
    if !intercepts(req.method(), req.uri().path()) {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_BUFFERED_BODY).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return ServerError::validation("Request body too large").into_response();
        }
    };

    if body_violates_date_rule(&bytes) {
        tracing::warn!(path = %parts.uri.path(), "Rejected order with inverted date range");
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": DATE_RANGE_RULE })))
            .into_response();
    }

    // 把缓冲的请求体原样还给下游
    let req = Request::from_parts(parts, Body::from(bytes));
    next.run(req).await
}

/// 只拦截订单资源的创建和更新
fn intercepts(method: &Method, path: &str) -> bool {
    (*method == Method::POST || *method == Method::PUT) && path.starts_with("/order")
}

/// 宽松解码后应用日期规则
///
/// 解不出两个日期就返回 `false` (放行)，校验留给 handler。
fn body_violates_date_rule(bytes: &[u8]) -> bool {
    let Ok(value) = serde_json::from_slice::<Value>(bytes) else {
        return false;
    };
    let (Some(start), Some(end)) = (date_field(&value, "startdate"), date_field(&value, "enddate"))
    else {
        return false;
    };
    validate_date_range(start, end).is_err()
}

/// 大小写不敏感地取出一个日期字段
fn date_field(value: &Value, name: &str) -> Option<NaiveDateTime> {
    value
        .as_object()?
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, v)| v.as_str())
        .and_then(parse_date_time_flexible)
}
