use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use bfind::cli::Cli;

fn main() -> Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    // 无效的模式在遍历开始前报错
    let finder = cli.build_finder().context("创建过滤条件失败")?;
    debug!("查找器配置: {:?}", finder);

    let start_time = Instant::now();
    let matches = finder
        .find()
        .with_context(|| format!("搜索 {} 失败", finder.root().display()))?;

    println!("{} matches", matches.len());
    println!("took {:.6} seconds", start_time.elapsed().as_secs_f64());

    Ok(())
}
