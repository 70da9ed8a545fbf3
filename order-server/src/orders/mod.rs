//! Orders domain - 模型、校验、存储和服务门面
//!
//! # 模块结构
//!
//! - [`model`] - 订单记录和请求 DTO
//! - [`validation`] - 字段级和跨字段语义校验
//! - [`store`] - 内存存储 (并发安全)
//! - [`service`] - CRUD 门面

pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use model::{CreateOrderRequest, Order, UpdateOrderRequest};
pub use service::OrderService;
pub use store::OrderStore;
