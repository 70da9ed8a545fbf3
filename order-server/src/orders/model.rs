//! Order data model and request DTOs
//!
//! [`Order`] 是存储层的规范表示；[`CreateOrderRequest`] 和
//! [`UpdateOrderRequest`] 是未经校验的瞬态请求体，由 handler 解码、
//! 由 [`OrderService`](super::OrderService) 校验后使用。
//!
//! 模型本身只是数据容器，不变量 (`end >= start` 等) 由调用方保证。

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 订单记录
///
/// `id`、`created_at`、`updated_at` 由存储层生成，客户端不可提供。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// 创建时间，仅设置一次
    pub created_at: DateTime<Utc>,
    /// 最后更新时间，首次更新前为 null
    pub updated_at: Option<DateTime<Utc>>,
}

/// 创建订单请求体
///
/// `product_name` 和 `quantity` 缺省为零值，由字段校验统一拒绝，
/// 这样 "缺失" 和 "为空" 走同一条错误路径。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(deserialize_with = "crate::utils::time::flexible_date_time")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "crate::utils::time::flexible_date_time")]
    pub end_date: NaiveDateTime,
}

/// 更新订单请求体
///
/// 字段与 [`CreateOrderRequest`] 相同；更新会整体替换四个用户字段。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(deserialize_with = "crate::utils::time::flexible_date_time")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "crate::utils::time::flexible_date_time")]
    pub end_date: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_serializes_with_camel_case_fields() {
        let order = Order {
            id: Uuid::new_v4(),
            product_name: "Nike AF1".into(),
            quantity: 10,
            start_date: "2025-08-01T00:00:00".parse().unwrap(),
            end_date: "2025-08-10T00:00:00".parse().unwrap(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["productName"], "Nike AF1");
        assert_eq!(json["startDate"], "2025-08-01T00:00:00");
        assert_eq!(json["endDate"], "2025-08-10T00:00:00");
        // 首次更新前 updatedAt 序列化为 null
        assert!(json["updatedAt"].is_null());
    }

    #[test]
    fn create_request_accepts_plain_dates() {
        let req: CreateOrderRequest = serde_json::from_value(serde_json::json!({
            "productName": "Nike AF1",
            "quantity": 10,
            "startDate": "2025-08-01",
            "endDate": "2025-08-10"
        }))
        .unwrap();

        assert_eq!(req.start_date.to_string(), "2025-08-01 00:00:00");
        assert_eq!(req.end_date.to_string(), "2025-08-10 00:00:00");
    }

    #[test]
    fn create_request_defaults_missing_name_and_quantity() {
        // 缺失的字段落到零值，由字段校验拒绝，而不是解码错误
        let req: CreateOrderRequest = serde_json::from_value(serde_json::json!({
            "startDate": "2025-08-01",
            "endDate": "2025-08-10"
        }))
        .unwrap();

        assert_eq!(req.product_name, "");
        assert_eq!(req.quantity, 0);
    }

    #[test]
    fn create_request_rejects_invalid_date() {
        let result: std::result::Result<CreateOrderRequest, _> =
            serde_json::from_value(serde_json::json!({
                "productName": "Nike AF1",
                "quantity": 10,
                "startDate": "not a date",
                "endDate": "2025-08-10"
            }));

        assert!(result.is_err());
    }
}
