//! 文件查找模块
//!
//! 这个模块提供了按层遍历的文件搜索功能：
//! 先通过链式调用附加过滤条件和深度限制，
//! 再调用 [`Finder::find`] 执行搜索。

pub mod filter;
pub mod fs;
pub mod options;
mod walker;

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

pub use self::filter::{FileFilter, FnFilter, Predicate};
pub use self::fs::{FileSystem, OsFileSystem};
pub use self::options::FindOptions;
pub use self::walker::LayeredWalker;
use crate::errors::FindResult;

/// 文件查找器
///
/// 保存搜索根目录、按附加顺序排列的过滤条件和查找选项。
/// 所有过滤条件均以“与”的方式组合，遇到第一个不满足的条件即停止。
pub struct Finder {
    root: PathBuf,
    predicates: Vec<Predicate>,
    options: FindOptions,
    fs: Box<dyn FileSystem>,
}

impl Finder {
    /// 创建以 `root` 为搜索根目录的查找器
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            predicates: Vec::new(),
            options: FindOptions::default(),
            fs: Box::new(OsFileSystem),
        }
    }

    /// 替换查找选项
    pub fn with_options(mut self, options: FindOptions) -> Self {
        self.options = options;
        self
    }

    /// 使用其他文件系统实现
    pub fn with_file_system<F>(mut self, fs: F) -> Self
    where
        F: FileSystem + 'static,
    {
        self.fs = Box::new(fs);
        self
    }

    /// 附加一个过滤条件
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        debug!("添加过滤条件: {}", predicate.description());
        self.predicates.push(predicate);
        self
    }

    /// 附加自定义过滤器
    pub fn filter<F>(self, filter: F) -> Self
    where
        F: FileFilter + 'static,
    {
        self.with_predicate(Predicate::Custom(Box::new(filter)))
    }

    /// 设置最大搜索深度（0 表示只检查根目录的直接子项）
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }

    /// 设置是否进入符号链接指向的目录（默认进入）
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.options.follow_links = follow;
        self
    }

    /// 找到匹配时立即输出
    pub fn print_matches(mut self) -> Self {
        self.options.emit_on_match = true;
        self
    }

    pub fn name_starts_with(self, prefix: impl Into<String>) -> Self {
        self.with_predicate(Predicate::NameStartsWith(prefix.into()))
    }

    pub fn name_ends_with(self, suffix: impl Into<String>) -> Self {
        self.with_predicate(Predicate::NameEndsWith(suffix.into()))
    }

    pub fn name_contains(self, needle: impl Into<String>) -> Self {
        self.with_predicate(Predicate::NameContains(needle.into()))
    }

    pub fn name_does_not_contain(self, needle: impl Into<String>) -> Self {
        self.with_predicate(Predicate::NameDoesNotContain(needle.into()))
    }

    /// 不区分大小写的包含匹配，作用于完整路径而不仅是文件名
    pub fn name_contains_ignore_case(self, needle: &str) -> Self {
        self.with_predicate(Predicate::contains_ignore_case(needle))
    }

    /// 不区分大小写的不包含匹配，作用于完整路径
    pub fn name_does_not_contain_ignore_case(self, needle: &str) -> Self {
        self.with_predicate(Predicate::does_not_contain_ignore_case(needle))
    }

    /// 按正则表达式匹配文件名；模式在此处编译，无效时立即返回错误
    pub fn name_matches_regex(self, pattern: &str) -> FindResult<Self> {
        Ok(self.with_predicate(Predicate::regex(pattern)?))
    }

    /// 按通配符模式匹配文件名
    pub fn name_matches_glob(self, pattern: &str) -> FindResult<Self> {
        Ok(self.with_predicate(Predicate::glob(pattern)?))
    }

    pub fn size_at_least(self, bytes: u64) -> Self {
        self.with_predicate(Predicate::SizeAtLeast(bytes))
    }

    pub fn size_at_most(self, bytes: u64) -> Self {
        self.with_predicate(Predicate::SizeAtMost(bytes))
    }

    /// 搜索根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn options(&self) -> &FindOptions {
        &self.options
    }

    /// 检查单个文件是否满足全部过滤条件
    pub fn test_file(&self, path: &Path) -> bool {
        filter::matches_all(&self.predicates, path, self.fs.as_ref())
    }

    /// 执行搜索，启用输出时每个匹配打印到标准输出
    pub fn find(&self) -> FindResult<Vec<PathBuf>> {
        self.find_with(|path| println!("{}", path.display()))
    }

    /// 执行搜索，启用输出时每个匹配立即传给 `notify`
    pub fn find_with<N>(&self, notify: N) -> FindResult<Vec<PathBuf>>
    where
        N: FnMut(&Path),
    {
        info!(
            "开始在 {} 中搜索，共 {} 个过滤条件",
            self.root.display(),
            self.predicates.len()
        );
        let walker = LayeredWalker::new(self.fs.as_ref(), &self.options);
        walker.walk(&self.root, |path| self.test_file(path), notify)
    }
}

impl fmt::Debug for Finder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finder")
            .field("root", &self.root)
            .field("predicates", &self.predicates)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
