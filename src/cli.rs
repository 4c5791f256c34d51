//! bfind 的命令行接口
//!
//! 本模块提供了命令行参数解析，并把每个选项映射为一个过滤条件。
//! 未设置的选项不会附加任何过滤条件。

use std::path::PathBuf;

use clap::Parser;

use crate::errors::FindResult;
use crate::finder::{FindOptions, Finder};

/// 按层搜索文件系统中满足过滤条件的文件
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 搜索根目录
    pub root: PathBuf,

    /// 文件名包含的字符串
    #[arg(short = 'c', long)]
    pub contains: Option<String>,

    /// 路径包含的字符串（不区分大小写）
    #[arg(short = 'i', long = "icontains")]
    pub icontains: Option<String>,

    /// 最小文件大小（字节）
    #[arg(long, value_name = "BYTES")]
    pub size_at_least: Option<u64>,

    /// 最大文件大小（字节）
    #[arg(long, value_name = "BYTES")]
    pub size_at_most: Option<u64>,

    /// 最大搜索深度（0 表示只检查根目录的直接子项）
    #[arg(short = 'd', long, value_name = "NUM")]
    pub max_depth: Option<usize>,

    /// 文件扩展名
    #[arg(short = 'e', long = "ext")]
    pub ext: Option<String>,

    /// 文件名开头的字符串
    #[arg(long)]
    pub starts_with: Option<String>,

    /// 文件名结尾的字符串
    #[arg(long)]
    pub ends_with: Option<String>,

    /// 文件名匹配的正则表达式
    #[arg(short = 'r', long)]
    pub regex: Option<String>,

    /// 文件名匹配的通配符模式
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// 文件名不包含的字符串
    #[arg(long)]
    pub not_contains: Option<String>,

    /// 路径不包含的字符串（不区分大小写）
    #[arg(long = "inot-contains")]
    pub inot_contains: Option<String>,

    /// 不进入符号链接指向的目录
    #[arg(long)]
    pub no_follow_links: bool,

    /// 不逐条输出匹配，只输出统计
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// 启用调试日志
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// 构建查找选项
    pub fn build_options(&self) -> FindOptions {
        FindOptions::from_cli(self)
    }

    /// 按固定顺序附加过滤条件并构建查找器
    ///
    /// 无效的正则表达式或通配符模式会在这里直接返回错误。
    pub fn build_finder(&self) -> FindResult<Finder> {
        let mut finder = Finder::new(&self.root).with_options(self.build_options());

        if let Some(s) = &self.contains {
            finder = finder.name_contains(s.as_str());
        }
        if let Some(s) = &self.icontains {
            finder = finder.name_contains_ignore_case(s);
        }
        if let Some(n) = self.size_at_least {
            finder = finder.size_at_least(n);
        }
        if let Some(n) = self.size_at_most {
            finder = finder.size_at_most(n);
        }
        if let Some(ext) = &self.ext {
            finder = finder.name_ends_with(extension_suffix(ext));
        }
        if let Some(s) = &self.starts_with {
            finder = finder.name_starts_with(s.as_str());
        }
        if let Some(s) = &self.ends_with {
            finder = finder.name_ends_with(s.as_str());
        }
        if let Some(pattern) = &self.regex {
            finder = finder.name_matches_regex(pattern)?;
        }
        if let Some(pattern) = &self.name {
            finder = finder.name_matches_glob(pattern)?;
        }
        if let Some(s) = &self.not_contains {
            finder = finder.name_does_not_contain(s.as_str());
        }
        if let Some(s) = &self.inot_contains {
            finder = finder.name_does_not_contain_ignore_case(s);
        }

        Ok(finder)
    }
}

/// "rs" 和 ".rs" 都表示以 ".rs" 结尾
fn extension_suffix(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
