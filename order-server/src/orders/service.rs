//! OrderService - Order CRUD orchestration
//!
//! 校验和存储之间的门面：字段校验 → 语义校验 → 存储操作，
//! 任何一步失败都不会触碰存储。确认消息常量也定义在这里，
//! handler 层直接引用。
//!
//! 方法是异步签名以贴合 handler 的调用习惯，内部全部是同步的
//! 内存操作，不会跨 await 持锁。

use uuid::Uuid;

use super::model::{CreateOrderRequest, Order, UpdateOrderRequest};
use super::store::OrderStore;
use super::validation::{validate_date_range, validate_order_fields};
use crate::core::{Result, ServerError};

/// 确认消息
pub const MSG_CREATED: &str = "Order created";
pub const MSG_UPDATED: &str = "Order updated";
pub const MSG_DELETED: &str = "Order deleted successfully";

/// 空请求体的拒绝消息
pub const MSG_NULL_ORDER: &str = "Order cannot be null.";

/// 订单服务
#[derive(Debug, Default)]
pub struct OrderService {
    store: OrderStore,
}

impl OrderService {
    pub fn new() -> Self {
        Self {
            store: OrderStore::new(),
        }
    }

    /// 创建订单
    pub async fn create(&self, request: Option<CreateOrderRequest>) -> Result<Order> {
        let request = request.ok_or_else(|| ServerError::validation(MSG_NULL_ORDER))?;

        validate_order_fields(&request.product_name, request.quantity)?;
        validate_date_range(request.start_date, request.end_date)?;

        Ok(self.store.create(
            request.product_name,
            request.quantity,
            request.start_date,
            request.end_date,
        ))
    }

    /// 按 ID 查询订单
    pub async fn get(&self, id: Uuid) -> Result<Order> {
        self.store.get(&id).ok_or_else(|| not_found(id))
    }

    /// 查询所有订单
    pub async fn list(&self) -> Vec<Order> {
        self.store.list()
    }

    /// 更新订单
    ///
    /// 校验与创建一致，并在校验全部通过之后才检查订单是否存在。
    pub async fn update(&self, id: Uuid, request: Option<UpdateOrderRequest>) -> Result<Order> {
        let request = request.ok_or_else(|| ServerError::validation(MSG_NULL_ORDER))?;

        validate_order_fields(&request.product_name, request.quantity)?;
        validate_date_range(request.start_date, request.end_date)?;

        self.store
            .replace(
                id,
                request.product_name,
                request.quantity,
                request.start_date,
                request.end_date,
            )
            .ok_or_else(|| not_found(id))
    }

    /// 删除订单
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.remove(&id) {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// 当前订单数量 (健康检查用)
    pub fn count(&self) -> usize {
        self.store.count()
    }
}

fn not_found(id: Uuid) -> ServerError {
    ServerError::not_found(format!("Order with ID {id} not found."))
}
