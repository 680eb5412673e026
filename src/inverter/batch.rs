//! # 批处理驱动模块
//!
//! ## 设计思路
//!
//! 严格按转换表顺序逐条处理，单线程、无并发。
//! 只识别两种情况：
//! - 源文件不存在：打印提示并跳过，继续下一条
//! - 其他任何失败：立即上抛，剩余条目不再处理（fail-fast）
//!
//! 控制台两行固定输出（`Inverted:` / `File not found:`）走 stdout，
//! 诊断日志走 `log`。

use std::path::Path;

use super::source::ConversionEntry;
use super::{InvertError, Inverter};

/// 一次批处理的统计结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub inverted: usize,
    pub skipped: usize,
}

/// 以 `base_dir` 为根依次处理 `entries`。
pub fn run_batch(
    inverter: &Inverter,
    base_dir: &Path,
    entries: &[ConversionEntry],
) -> Result<BatchReport, InvertError> {
    let mut report = BatchReport::default();

    for entry in entries {
        let resolved = entry.resolve(base_dir);

        if !resolved.source.exists() {
            println!("File not found: {}", resolved.source.display());
            log::warn!("⚠️ 源文件不存在，跳过 - {}", entry.source);
            report.skipped += 1;
            continue;
        }

        inverter.invert(&resolved.source, &resolved.destination)?;
        println!(
            "Inverted: {} -> {}",
            resolved.source.display(),
            resolved.destination.display()
        );
        report.inverted += 1;
    }

    log::info!(
        "📊 批处理结束 - 已反色: {} 已跳过: {}",
        report.inverted,
        report.skipped
    );

    Ok(report)
}
