//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use crate::core::{Result, ServerState};
use crate::orders::service::{MSG_CREATED, MSG_DELETED, MSG_UPDATED};
use crate::orders::{CreateOrderRequest, Order, UpdateOrderRequest};

/// 带确认消息的订单响应
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub message: &'static str,
    pub order: Order,
}

/// 删除确认响应
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// POST /order - 创建订单
///
/// 请求体绑定为 `Option`，字面 `null` 走 "Order cannot be null." 而不是
/// 解码错误。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Option<CreateOrderRequest>>,
) -> Result<Json<OrderResponse>> {
    let order = state.orders.create(payload).await?;
    Ok(Json(OrderResponse {
        message: MSG_CREATED,
        order,
    }))
}

/// GET /orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Order>> {
    Json(state.orders.list().await)
}

/// GET /order/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>> {
    let order = state.orders.get(id).await?;
    Ok(Json(order))
}

/// PUT /order/:id - 更新订单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Option<UpdateOrderRequest>>,
) -> Result<Json<OrderResponse>> {
    let order = state.orders.update(id, payload).await?;
    Ok(Json(OrderResponse {
        message: MSG_UPDATED,
        order,
    }))
}

/// DELETE /order/:id - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    state.orders.delete(id).await?;
    Ok(Json(DeleteResponse {
        message: MSG_DELETED,
    }))
}
