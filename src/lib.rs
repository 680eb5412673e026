//! # 图标反色工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs  ── env_logger 初始化 + 固定根目录              │
//! │     │                                                    │
//! │     ↓                                                    │
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  │                                                       │
//! │  └─ inverter ─── 固定转换表逐条反色                       │
//! │      ├─ loader    读取 · 格式嗅探 · ICO 最大帧            │
//! │      ├─ pipeline  RGBA · 颜色取反 · Lanczos 重采样        │
//! │      └─ writer    PNG 直写 / ICO 六尺寸                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，`main` 的唯一错误出口 |
//! | [`inverter`] | 转换表、解码、取反、编码与批处理驱动 |

pub mod error;
pub mod inverter;

use std::path::Path;

use error::AppError;
use inverter::{BatchReport, CONVERSION_TABLE, InvertConfig, Inverter};

/// 以 `base_dir` 为根，按固定转换表执行整批反色。
pub fn run(base_dir: &Path) -> Result<BatchReport, AppError> {
    let inverter = Inverter::new(InvertConfig::default());
    log::debug!("⚙️ 反色配置：{:?}", inverter.config());

    let report = inverter::run_batch(&inverter, base_dir, &CONVERSION_TABLE)?;
    Ok(report)
}
