//! # 编码与落盘模块
//!
//! 按目标扩展名分支：图标容器写入多帧 ICO，其余格式交给 `image` 按扩展名推断编码器，
//! 不设置任何压缩/质量参数。

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbaImage;

use super::{InvertConfig, InvertError, Inverter};

impl Inverter {
    /// 将反色结果写入目标路径，返回写入的帧尺寸列表。
    pub(super) fn write_output(
        &self,
        image: &RgbaImage,
        destination: &Path,
        config: &InvertConfig,
    ) -> Result<Vec<(u32, u32)>, InvertError> {
        if config.is_container_path(destination) {
            let frames = self.build_container_frames(image, config)?;
            return Self::write_container(&frames, destination);
        }

        image
            .save(destination)
            .map_err(|e| InvertError::Encode(format!("写入图片失败 {}：{}", destination.display(), e)))?;

        Ok(vec![image.dimensions()])
    }

    /// 把全部帧写入同一个 ICO 容器。
    ///
    /// 目录中记录的尺寸取自每一帧自身的宽高。
    fn write_container(
        frames: &[RgbaImage],
        destination: &Path,
    ) -> Result<Vec<(u32, u32)>, InvertError> {
        let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
        let mut sizes = Vec::with_capacity(frames.len());

        for frame in frames {
            let (width, height) = frame.dimensions();
            let icon_image = ico::IconImage::from_rgba_data(width, height, frame.as_raw().clone());
            let entry = ico::IconDirEntry::encode(&icon_image).map_err(|e| {
                InvertError::Encode(format!("图标帧 {}x{} 编码失败：{}", width, height, e))
            })?;
            icon_dir.add_entry(entry);
            sizes.push((width, height));
        }

        let file = File::create(destination)
            .map_err(|e| InvertError::FileSystem(format!("无法创建文件 {}：{}", destination.display(), e)))?;
        icon_dir
            .write(BufWriter::new(file))
            .map_err(|e| InvertError::Encode(format!("写入图标容器失败 {}：{}", destination.display(), e)))?;

        log::debug!("🗂️ 图标容器写入完成 - 帧尺寸: {:?}", sizes);

        Ok(sizes)
    }
}
