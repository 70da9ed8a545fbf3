//! Order Server - 订单请求校验与资源管理服务
//!
//! # 架构概述
//!
//! 提供单一 "订单" 资源的 CRUD HTTP API，核心是双层日期语义校验：
//!
//! - **路由前中间件** (`middleware/semantic`): 缓冲原始请求体，
//!   宽松解码起止日期，提前拒绝 `end < start` 的写请求
//! - **服务门面** (`orders/service`): 字段校验 + 同一条语义规则，
//!   在模型绑定之后权威执行
//!
//! 两层共用同一个校验函数和错误消息常量，保证结论一致。
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志、语义校验
//! ├── orders/        # 订单领域：模型、校验、存储、服务
//! └── utils/         # 日志、时间解析、校验辅助
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use orders::{Order, OrderService, OrderStore};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境：.env、日志
pub fn setup_environment() -> anyhow::Result<()> {
    // 加载 .env (不存在则忽略)
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____          __
  / __ \_________/ /__  _____
 / / / / ___/ __  / _ \/ ___/
/ /_/ / /  / /_/ /  __/ /
\____/_/   \__,_/\___/_/
    _____
   / ___/___  ______   _____  _____
   \__ \/ _ \/ ___/ | / / _ \/ ___/
  ___/ /  __/ /   | |/ /  __/ /
 /____/\___/_/    |___/\___/_/
    "#
    );
}
