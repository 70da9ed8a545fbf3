//! Router extension for in-process calls
//!
//! 让测试在不经过网络栈的情况下直接驱动完整组装的应用
//! (含路由前语义校验中间件)。

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use tower::ServiceExt;

use crate::core::ServerState;

/// Result type for in-process API calls
pub type OneshotResult = Result<Response<Body>>;

/// Extension trait that lets a stateless [`Router`] serve one request.
///
/// 路由器先绑定给定的 [`ServerState`]，再作为 tower `Service`
/// 处理单个请求。集成测试用它驱动
/// [`build_app`](crate::api::build_app) 的完整中间件栈。
///
/// # Example
///
/// ```ignore
/// use http::Request;
///
/// let state = ServerState::initialize(&config);
/// let request = Request::builder()
///     .uri("/health")
///     .body(Body::empty())?;
///
/// let response = api::build_app().oneshot(&state, request).await?;
/// ```
#[async_trait::async_trait]
pub trait OneshotRouter {
    /// Bind `state` and process `request` without a network socket
    async fn oneshot(self, state: &ServerState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<ServerState> {
    async fn oneshot(self, state: &ServerState, request: Request<Body>) -> OneshotResult {
        let response = ServiceExt::oneshot(self.with_state(state.clone()), request).await?;
        Ok(response)
    }
}
