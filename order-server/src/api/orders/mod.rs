//! Order API Module
//!
//! 订单 CRUD 接口。写操作 (POST/PUT) 在进入这里之前已经过
//! 路由前语义校验中间件。

mod handler;

pub use handler::{DeleteResponse, OrderResponse};

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/order", post(handler::create))
        .route("/orders", get(handler::list))
        .route(
            "/order/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
