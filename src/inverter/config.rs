//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `InvertConfig`，保证运行时行为可观测、可测试。
//! 工具本身不提供任何外部配置入口（无参数、无环境变量、无配置文件），
//! `Default` 即为唯一的生产配置；测试可以直接构造修改后的副本。

use image::imageops::FilterType;

/// 图标容器输出的固定分辨率列表（正方形边长）。
pub const CONTAINER_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// 反色处理配置。
///
/// 字段覆盖了读取、解码与容器重采样三个阶段。
#[derive(Debug, Clone)]
pub struct InvertConfig {
    /// 读取源文件时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 多分辨率图标容器的扩展名（小写，不含点）。
    pub container_extension: &'static str,
    /// 写入图标容器时重新生成的边长列表。
    pub container_sizes: Vec<u32>,
    /// 重采样滤镜。
    pub resize_filter: FilterType,
}

impl Default for InvertConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            container_extension: "ico",
            container_sizes: CONTAINER_SIZES.to_vec(),
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl InvertConfig {
    /// 判断路径扩展名是否指向多分辨率图标容器（大小写不敏感）。
    pub fn is_container_path(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.container_extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_container_sizes_are_the_standard_set() {
        let config = InvertConfig::default();
        assert_eq!(config.container_sizes, vec![16, 32, 48, 64, 128, 256]);
        assert_eq!(config.resize_filter, FilterType::Lanczos3);
    }

    #[test]
    fn container_path_detection_ignores_case() {
        let config = InvertConfig::default();
        assert!(config.is_container_path(Path::new("platform/windows/godot.ico")));
        assert!(config.is_container_path(Path::new("GODOT.ICO")));
        assert!(!config.is_container_path(Path::new("icon.png")));
        assert!(!config.is_container_path(Path::new("ico")));
    }
}
