//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义入口层统一的 `AppError` 枚举，`main` 只需处理这一种错误。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `InvertError` 提供 `From` 转换，`?` 即可上转。

use crate::inverter::InvertError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 反色流水线错误（读取 / 解码 / 编码）
    #[error("{0}")]
    Invert(#[from] InvertError),
}
