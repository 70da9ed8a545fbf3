use std::sync::Arc;

use crate::core::Config;
use crate::orders::OrderService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 handler 拿到的都是同一份服务实例。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | orders | Arc<OrderService> | 订单服务 (内存存储) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 订单服务
    pub orders: Arc<OrderService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 订单存储是纯内存的，进程退出即丢失。
    pub fn initialize(config: &Config) -> Self {
        tracing::info!(environment = %config.environment, "Initializing server state");
        Self {
            config: config.clone(),
            orders: Arc::new(OrderService::new()),
        }
    }
}
