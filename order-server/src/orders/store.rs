//! In-memory order store
//!
//! `Uuid -> Order` 的并发安全映射，持有进程内唯一的一份订单数据。
//! 标识和时间戳都在这里生成，调用方只提供用户字段。
//!
//! # 并发模型
//!
//! 单把粗粒度 `RwLock` 覆盖整个映射。`replace` 的
//! 查找-构造-写回在一个写锁作用域内完成，两个并发更新同一订单
//! 不会交错出各取一半字段的记录。读操作返回克隆，锁外没有可变别名。

use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use super::model::Order;

/// 内存订单存储
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// 生成新订单并插入
    ///
    /// 标识为新的 v4 UUID，`created_at` 取当前时间，`updated_at` 为空。
    pub fn create(
        &self,
        product_name: String,
        quantity: i32,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Order {
        let order = Order {
            id: Uuid::new_v4(),
            product_name,
            quantity,
            start_date,
            end_date,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.orders.write().insert(order.id, order.clone());
        order
    }

    /// 按 ID 查找，返回克隆
    pub fn get(&self, id: &Uuid) -> Option<Order> {
        self.orders.read().get(id).cloned()
    }

    /// 返回所有订单 (顺序不保证)
    pub fn list(&self) -> Vec<Order> {
        self.orders.read().values().cloned().collect()
    }

    /// 替换订单的用户字段
    ///
    /// 保留原 `created_at`，`updated_at` 取当前时间。
    /// 整个读-改-写在同一个写锁内完成；订单不存在返回 `None`。
    pub fn replace(
        &self,
        id: Uuid,
        product_name: String,
        quantity: i32,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Option<Order> {
        let mut orders = self.orders.write();
        let existing = orders.get(&id)?;

        let updated = Order {
            id,
            product_name,
            quantity,
            start_date,
            end_date,
            created_at: existing.created_at,
            updated_at: Some(Utc::now()),
        };

        orders.insert(id, updated.clone());
        Some(updated)
    }

    /// 删除订单，返回是否存在
    pub fn remove(&self, id: &Uuid) -> bool {
        self.orders.write().remove(id).is_some()
    }

    /// 当前订单数量
    pub fn count(&self) -> usize {
        self.orders.read().len()
    }
}
