//! 工具模块 - 通用工具函数
//!
//! # 内容
//!
//! - [`logger`] - 日志初始化
//! - [`time`] - 宽松的 ISO-8601 日期解析
//! - [`validation`] - 字段级校验辅助函数

pub mod logger;
pub mod time;
pub mod validation;
