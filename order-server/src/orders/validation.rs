//! Order validation rules
//!
//! 跨字段语义规则和字段级校验。语义规则只有一条：结束日期不能早于
//! 开始日期。它同时被两处调用：
//!
//! 1. 路由前的语义校验中间件 (原始 JSON，宽松解码)
//! 2. [`OrderService`](super::OrderService) (强类型请求体)
//!
//! 规则函数和错误消息常量必须保持唯一，两层才不会产生不同的结论。

use chrono::NaiveDateTime;

use crate::core::ServerError;
use crate::utils::validation::{
    MAX_PRODUCT_NAME_LEN, MAX_QUANTITY, MIN_QUANTITY, validate_int_range, validate_required_text,
};

/// 日期区间规则的固定错误消息，两个校验层共用
pub const DATE_RANGE_RULE: &str = "EndDate must be after StartDate";

/// 语义校验：结束日期不能早于开始日期
///
/// 纯函数。`end == start` 合法，仅 `end < start` 拒绝。
pub fn validate_date_range(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), ServerError> {
    if end < start {
        return Err(ServerError::validation(DATE_RANGE_RULE));
    }
    Ok(())
}

/// 字段级校验：商品名非空且不超长，数量在范围内
///
/// 在语义校验之前执行。
pub fn validate_order_fields(product_name: &str, quantity: i32) -> Result<(), ServerError> {
    validate_required_text(product_name, "productName", MAX_PRODUCT_NAME_LEN)?;
    validate_int_range(quantity, "quantity", MIN_QUANTITY, MAX_QUANTITY)
}
