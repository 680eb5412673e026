//! # 图标反色工具 — 应用入口
//!
//! 本文件仅负责日志初始化与根目录定位。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 路径相对于工具源码所在目录，构建时固定
    let base_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    log::info!("start: base dir {}", base_dir.display());

    if let Err(err) = icon_inverter::run(base_dir) {
        log::error!("反色中止: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
