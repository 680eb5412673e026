//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `Inverter` 只负责流程编排，不关心转换表与控制台输出。
//! 处理链路固定为：
//! 1. 读取并解码源图片（容器时挑选最大帧）
//! 2. 统一为 RGBA 并对颜色通道取反
//! 3. 按目标扩展名编码写盘
//!
//! ## 实现思路
//!
//! - 解码结果只在单次调用内存活，函数返回即释放。
//! - 记录 `load/invert/encode/total` 阶段耗时，便于性能诊断。

use std::path::{Path, PathBuf};
use std::time::Instant;

use super::pipeline::{invert_rgb, normalize};
use super::source::IconFrame;
use super::{InvertConfig, InvertError};

/// 反色处理器。
pub struct Inverter {
    pub(super) config: InvertConfig,
}

/// 单次反色的结果摘要。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvertOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// 容器来源中被选中的帧。
    pub frame: Option<IconFrame>,
    /// 实际写入的各帧尺寸。
    pub written_sizes: Vec<(u32, u32)>,
}

impl Inverter {
    /// 根据配置创建处理器。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use icon_inverter::inverter::{InvertConfig, Inverter};
    ///
    /// let inverter = Inverter::new(InvertConfig::default());
    /// inverter.invert("icon.png".as_ref(), "icon_inverted.png".as_ref())?;
    /// # Ok::<(), icon_inverter::inverter::InvertError>(())
    /// ```
    pub fn new(config: InvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InvertConfig {
        &self.config
    }

    /// 处理主入口：读取 `source`，反色后写入 `destination`。
    ///
    /// 源文件是否存在由调用方负责检查；这里的任何失败都直接上抛。
    pub fn invert(&self, source: &Path, destination: &Path) -> Result<InvertOutcome, InvertError> {
        let config = &self.config;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let loaded = self.load_source(source, config)?;
        let load_elapsed = load_start.elapsed();

        let invert_start = Instant::now();
        let mut rgba = normalize(loaded.image);
        invert_rgb(&mut rgba);
        let invert_elapsed = invert_start.elapsed();

        let encode_start = Instant::now();
        let written_sizes = self.write_output(&rgba, destination, config)?;
        let encode_elapsed = encode_start.elapsed();

        log::debug!(
            "✅ 反色完成 - 来源: {} load={}ms invert={}ms encode={}ms total={}ms",
            loaded.source_hint,
            load_elapsed.as_millis(),
            invert_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(InvertOutcome {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            frame: loaded.frame,
            written_sizes,
        })
    }
}
