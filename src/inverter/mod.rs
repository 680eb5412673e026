//! # 反色模块（inverter）
//!
//! ## 设计思路
//!
//! 该模块将“转换表 → 加载解码 → 反色 → 编码写盘 → 批处理驱动”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `source`：固定转换表与中间数据模型
//! - `loader`：读取、格式嗅探、容器帧选择
//! - `pipeline`：RGBA 归一化、颜色取反、容器多尺寸重采样
//! - `writer`：按目标扩展名编码落盘
//! - `handler`：编排单条处理流水线
//! - `batch`：按表顺序驱动、缺失跳过、失败即停
//! - `config/error`：配置与错误
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! batch.rs（存在性检查 + 控制台输出）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（读取 + 最大帧选择）
//!    ├─ pipeline.rs（归一化 + 取反）
//!    └─ writer.rs（PNG 直写 / ICO 六尺寸重建）
//!    ↓
//! 返回 InvertError 给入口
//! ```

mod batch;
mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use batch::{BatchReport, run_batch};
pub use config::{CONTAINER_SIZES, InvertConfig};
pub use error::InvertError;
pub use handler::{InvertOutcome, Inverter};
pub use loader::select_largest_frame;
pub use pipeline::{invert_rgb, normalize};
pub use source::{CONVERSION_TABLE, ConversionEntry, IconFrame, ResolvedEntry, inverted_name};
