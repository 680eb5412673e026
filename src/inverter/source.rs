//! # 转换表与中间模型
//!
//! ## 设计思路
//!
//! 将“固定转换表”和“流水线中间结果”解耦：
//! - `ConversionEntry` 表示一条显式的（源，目标）配对，取代两个靠下标对齐的列表
//! - `IconFrame` 表示图标容器目录中的一帧元数据
//! - `LoadedImage` 表示已解码、尚未反色的位图

use std::path::{Path, PathBuf};

use image::DynamicImage;

/// 一条转换记录：源路径与目标路径均相对于工具所在目录。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionEntry {
    pub source: &'static str,
    pub destination: &'static str,
}

/// 固定转换表，顺序即处理顺序。
pub const CONVERSION_TABLE: [ConversionEntry; 8] = [
    ConversionEntry {
        source: "icon.png",
        destination: "icon_inverted.png",
    },
    ConversionEntry {
        source: "icon_outlined.png",
        destination: "icon_outlined_inverted.png",
    },
    ConversionEntry {
        source: "logo.png",
        destination: "logo_inverted.png",
    },
    ConversionEntry {
        source: "logo_outlined.png",
        destination: "logo_outlined_inverted.png",
    },
    ConversionEntry {
        source: "main/app_icon.png",
        destination: "main/app_icon_inverted.png",
    },
    ConversionEntry {
        source: "main/splash.png",
        destination: "main/splash_inverted.png",
    },
    ConversionEntry {
        source: "platform/windows/godot.ico",
        destination: "platform/windows/godot_inverted.ico",
    },
    ConversionEntry {
        source: "platform/windows/godot_console.ico",
        destination: "platform/windows/godot_console_inverted.ico",
    },
];

/// 解析到绝对路径后的转换记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ConversionEntry {
    /// 以 `base` 为根目录拼接源与目标路径。
    pub fn resolve(&self, base: &Path) -> ResolvedEntry {
        ResolvedEntry {
            source: base.join(self.source),
            destination: base.join(self.destination),
        }
    }
}

/// 在扩展名前插入 `_inverted` 后缀。
///
/// ```
/// use icon_inverter::inverter::inverted_name;
///
/// assert_eq!(inverted_name("main/splash.png"), "main/splash_inverted.png");
/// assert_eq!(inverted_name("README"), "README_inverted");
/// ```
pub fn inverted_name(source: &str) -> String {
    let file_start = source.rfind('/').map_or(0, |idx| idx + 1);
    match source[file_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let split = file_start + dot;
            format!("{}_inverted{}", &source[..split], &source[split..])
        }
        _ => format!("{source}_inverted"),
    }
}

/// 图标容器目录中一帧的元数据。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconFrame {
    /// 帧在容器目录中的下标。
    pub index: usize,
    pub width: u32,
    pub height: u32,
}

impl IconFrame {
    /// 帧面积（`width * height`），用 `u64` 避免溢出。
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// 加载阶段输出：解码后的位图与来源提示。
pub(crate) struct LoadedImage {
    pub(crate) image: DynamicImage,
    /// 被选中的容器帧；非容器来源为 `None`。
    pub(crate) frame: Option<IconFrame>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: &'static str,
}
