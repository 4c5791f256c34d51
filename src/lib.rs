//! 按层遍历目录树、查找文件的库
//!
//! 本库提供了可组合的文件查找功能，支持：
//! - 广度优先、按层计算深度的目录遍历
//! - 多种过滤条件（名称前后缀、包含、正则、通配符、大小及其取反）
//! - 跳过无法读取的目录而不中断搜索
//! - 可替换的文件系统实现
//!
//! # 示例
//!
//! 基本用法：
//! ```no_run
//! use bfind::Finder;
//!
//! // 查找根目录及其下一层子目录中不小于 1 KiB 的 Rust 源文件
//! let results = Finder::new(".")
//!     .name_ends_with(".rs")
//!     .size_at_least(1024)
//!     .max_depth(1)
//!     .find()
//!     .unwrap();
//!
//! for path in results {
//!     println!("找到文件: {}", path.display());
//! }
//! ```
//!
//! 更多用法请参考各模块文档。

pub mod cli;
pub mod errors;
pub mod finder;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::{Finder, FindOptions, Predicate};
