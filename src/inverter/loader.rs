//! # 加载与帧选择模块
//!
//! ## 设计思路
//!
//! 统一处理源文件的读取与解码，并在“尽可能早”的阶段执行体积与像素校验。
//! 对多分辨率图标容器，先显式确认“内容确实是容器”，再枚举帧并挑选面积最大的一帧；
//! 不做兜底式的错误吞没，真正的解码错误会原样上抛。
//!
//! ## 实现思路
//!
//! - 文件：metadata 体积限制 + 读取。
//! - 格式：按内容嗅探（`image::guess_format`），不信任扩展名。
//! - 容器：扩展名为容器 **且** 内容为 ICO 目录时才枚举帧；
//!   否则按单帧图片解码（例如以 `.ico` 命名的 PNG）。
//! - 帧选择：面积最大者胜出，并列时取目录中最先出现的一帧。

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};

use super::source::{IconFrame, LoadedImage};
use super::{InvertConfig, InvertError, Inverter};

/// 在帧列表中选出面积最大的一帧，返回其在切片中的位置。
///
/// 面积相同时保留最先遍历到的帧；空列表返回 `None`。
///
/// ```
/// use icon_inverter::inverter::{select_largest_frame, IconFrame};
///
/// let frames = [
///     IconFrame { index: 0, width: 16, height: 16 },
///     IconFrame { index: 1, width: 32, height: 32 },
///     IconFrame { index: 2, width: 256, height: 256 },
/// ];
/// assert_eq!(select_largest_frame(&frames), Some(2));
/// ```
pub fn select_largest_frame(frames: &[IconFrame]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (pos, frame) in frames.iter().enumerate() {
        let area = frame.area();
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((pos, area)),
        }
    }
    best.map(|(pos, _)| pos)
}

impl Inverter {
    /// 从本地路径读取并解码源图片。
    pub(super) fn load_source(
        &self,
        path: &Path,
        config: &InvertConfig,
    ) -> Result<LoadedImage, InvertError> {
        log::info!("📁 开始读取源图片 - 路径: {}", path.display());

        let metadata = std::fs::metadata(path)
            .map_err(|e| InvertError::FileSystem(format!("无法读取文件信息 {}：{}", path.display(), e)))?;

        if metadata.len() > config.max_file_size {
            return Err(InvertError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| InvertError::FileSystem(format!("无法读取图片文件 {}：{}", path.display(), e)))?;

        let format = image::guess_format(&bytes)
            .map_err(|e| InvertError::InvalidFormat(format!("不支持的图片格式 {}：{}", path.display(), e)))?;

        if config.is_container_path(path) {
            if format == ImageFormat::Ico {
                return Self::load_container(&bytes, config);
            }
            log::debug!(
                "容器扩展名但内容为 {:?}，按单帧图片处理 - 路径: {}",
                format,
                path.display()
            );
        }

        let image = image::load_from_memory_with_format(&bytes, format)
            .map_err(|e| InvertError::Decode(format!("图片解码失败 {}：{}", path.display(), e)))?;

        let (width, height) = image.dimensions();
        Self::validate_pixel_limits(config, width, height)?;

        log::debug!("✅ 源图片解码成功 - 格式: {:?} 尺寸: {}x{}", format, width, height);

        Ok(LoadedImage {
            image,
            frame: None,
            source_hint: "file",
        })
    }

    /// 枚举容器中的全部帧，只解码面积最大的那一帧。
    fn load_container(bytes: &[u8], config: &InvertConfig) -> Result<LoadedImage, InvertError> {
        let icon_dir = ico::IconDir::read(Cursor::new(bytes))
            .map_err(|e| InvertError::Decode(format!("图标容器目录解析失败：{}", e)))?;

        let frames = Self::enumerate_frames(&icon_dir);
        let selected = select_largest_frame(&frames)
            .ok_or_else(|| InvertError::Decode("图标容器中没有任何帧".to_string()))?;
        let frame = frames[selected];

        log::info!(
            "🔍 图标容器共 {} 帧，选中第 {} 帧（{}x{}）",
            frames.len(),
            frame.index,
            frame.width,
            frame.height
        );

        Self::validate_pixel_limits(config, frame.width, frame.height)?;

        let icon = icon_dir.entries()[selected]
            .decode()
            .map_err(|e| InvertError::Decode(format!("图标帧 {} 解码失败：{}", frame.index, e)))?;

        let rgba = RgbaImage::from_raw(icon.width(), icon.height(), icon.rgba_data().to_vec())
            .ok_or_else(|| InvertError::Decode("图标帧像素数据长度异常".to_string()))?;

        Ok(LoadedImage {
            image: DynamicImage::ImageRgba8(rgba),
            frame: Some(frame),
            source_hint: "container",
        })
    }

    fn enumerate_frames(icon_dir: &ico::IconDir) -> Vec<IconFrame> {
        icon_dir
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| IconFrame {
                index,
                width: entry.width(),
                height: entry.height(),
            })
            .collect()
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        config: &InvertConfig,
        width: u32,
        height: u32,
    ) -> Result<(), InvertError> {
        let pixels = u64::from(width) * u64::from(height);

        if pixels > config.max_decoded_pixels {
            return Err(InvertError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}
