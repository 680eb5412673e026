//! # 反色与重采样流水线模块
//!
//! ## 设计思路
//!
//! 将“任意解码结果 → RGBA → 反色 → 容器多尺寸”的过程集中管理。
//! 反色只作用于 R/G/B 三个通道，Alpha 原样透传。
//!
//! ## 实现思路
//!
//! 1. 统一转换为 RGBA8（无 Alpha 的来源补全为不透明）
//! 2. 逐像素对颜色通道执行 `255 - x`
//! 3. 容器输出时按固定边长列表重采样，优先 `fast_image_resize`，失败回退 `image`

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

use super::{InvertConfig, InvertError, Inverter};

/// 统一转换为四通道 RGBA8。
pub fn normalize(image: DynamicImage) -> RgbaImage {
    match image {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.to_rgba8(),
    }
}

/// 对 R/G/B 通道逐像素取反，Alpha 不变。
pub fn invert_rgb(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = [u8::MAX - r, u8::MAX - g, u8::MAX - b, a];
    }
}

impl Inverter {
    /// 为图标容器生成全部目标尺寸的副本，顺序与 `config.container_sizes` 一致。
    pub(super) fn build_container_frames(
        &self,
        image: &RgbaImage,
        config: &InvertConfig,
    ) -> Result<Vec<RgbaImage>, InvertError> {
        config
            .container_sizes
            .iter()
            .map(|&size| Self::resize_exact(image, size, size, config.resize_filter))
            .collect()
    }

    fn resize_exact(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, InvertError> {
        if target_width == 0 || target_height == 0 {
            return Err(InvertError::InvalidFormat(format!(
                "目标尺寸无效：{}x{}",
                target_width, target_height
            )));
        }

        log::debug!(
            "🧩 重采样：{}x{} -> {}x{}（filter={:?}）",
            image.width(),
            image.height(),
            target_width,
            target_height,
            filter
        );

        match Self::resize_with_fast_image_resize(image, target_width, target_height, filter) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 重采样失败，回退 image::imageops::resize：{}",
                    err
                );
                Ok(image::imageops::resize(image, target_width, target_height, filter))
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, InvertError> {
        let src_image = fr::images::Image::from_vec_u8(
            image.width(),
            image.height(),
            image.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| InvertError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| InvertError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| InvertError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}
