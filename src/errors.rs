//! bfind 的错误类型
//!
//! 只有无效的搜索根目录和无法编译的匹配模式会中断执行，
//! 文件系统错误由遍历引擎和过滤器就地吸收。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// bfind 的自定义错误类型
#[derive(Debug, Error)]
pub enum FindError {
    /// 搜索根目录不存在或不是目录
    #[error("无效的搜索根目录: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// 正则表达式无法编译
    #[error("无效的正则表达式 '{pattern}': {source}")]
    RegexError {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// 通配符模式无法编译
    #[error("无效的通配符模式 '{pattern}': {source}")]
    PatternError {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// 文件系统错误（权限不足、文件已删除等）
    #[error("文件系统错误 {}: {source}", .path.display())]
    FilesystemError {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
}

impl FindError {
    /// 构造带路径的文件系统错误
    pub fn filesystem<P: Into<PathBuf>>(source: io::Error, path: P) -> Self {
        FindError::FilesystemError {
            source,
            path: path.into(),
        }
    }
}

impl From<walkdir::Error> for FindError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        let source = match err.io_error() {
            Some(io_err) => io::Error::new(io_err.kind(), io_err.to_string()),
            None => io::Error::new(io::ErrorKind::Other, err.to_string()),
        };
        FindError::FilesystemError { source, path }
    }
}
