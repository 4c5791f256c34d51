//! 文件系统遍历功能
//!
//! 本模块按层进行广度优先遍历：根目录的直接子项构成第 0 层，
//! 每处理完一整层深度加一。超过最大深度的层不会被访问。

use std::mem;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::fs::FileSystem;
use super::options::FindOptions;
use crate::errors::{FindError, FindResult};

/// 按层遍历目录树并收集匹配的文件
pub struct LayeredWalker<'a> {
    fs: &'a dyn FileSystem,
    options: &'a FindOptions,
}

impl<'a> LayeredWalker<'a> {
    /// 使用给定的文件系统和选项创建新的 LayeredWalker
    pub fn new(fs: &'a dyn FileSystem, options: &'a FindOptions) -> Self {
        Self { fs, options }
    }

    /// 从根目录开始遍历，返回所有满足 `is_match` 的文件（按发现顺序）
    ///
    /// 启用 `emit_on_match` 时，每个匹配在加入结果前立即传给 `notify`。
    pub fn walk<M, N>(
        &self,
        root: &Path,
        mut is_match: M,
        mut notify: N,
    ) -> FindResult<Vec<PathBuf>>
    where
        M: FnMut(&Path) -> bool,
        N: FnMut(&Path),
    {
        if !self.fs.is_dir(root) {
            return Err(FindError::InvalidRoot(root.to_path_buf()));
        }

        let mut matches = Vec::new();
        let mut frontier = self.children_of(root);
        let mut depth = 0;

        while !frontier.is_empty() && self.options.allows_depth(depth) {
            let layer = mem::take(&mut frontier);
            let expand = self.options.allows_expansion(depth);
            debug!("处理第 {} 层，共 {} 个条目", depth, layer.len());

            for entry in layer {
                if self.fs.is_dir(&entry) {
                    if expand && self.should_descend(&entry) {
                        frontier.extend(self.children_of(&entry));
                    }
                } else if is_match(&entry) {
                    if self.options.emit_on_match {
                        notify(&entry);
                    }
                    matches.push(entry);
                }
            }

            depth += 1;
        }

        debug!("遍历结束于第 {} 层，找到 {} 个匹配", depth, matches.len());
        Ok(matches)
    }

    /// 列出目录的直接子项，读取失败视为没有子项
    fn children_of(&self, dir: &Path) -> Vec<PathBuf> {
        match self.fs.list_children(dir) {
            Ok(children) => children,
            Err(err) => {
                warn!("跳过无法读取的目录 {}: {}", dir.display(), err);
                Vec::new()
            }
        }
    }

    /// 关闭跟随符号链接时，不进入指向目录的符号链接
    fn should_descend(&self, dir: &Path) -> bool {
        if !self.options.follow_links && self.fs.is_symlink(dir) {
            debug!("跳过符号链接目录: {}", dir.display());
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::fs::memory::MemoryFileSystem;

    fn create_test_structure() -> MemoryFileSystem {
        MemoryFileSystem::new("root")
            .file("root/a.txt", 5)
            .dir("root/sub")
            .file("root/sub/b.txt", 20)
            .dir("root/sub/deep")
            .file("root/sub/deep/c.txt", 20)
    }

    fn walk_all(fs: &MemoryFileSystem, options: &FindOptions) -> FindResult<Vec<PathBuf>> {
        LayeredWalker::new(fs, options).walk(Path::new("root"), |_| true, |_| {})
    }

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_walk_unbounded_in_layer_order() -> Result<(), Box<dyn std::error::Error>> {
        let fs = create_test_structure();
        let found = walk_all(&fs, &FindOptions::new())?;

        assert_eq!(
            found,
            paths(&["root/a.txt", "root/sub/b.txt", "root/sub/deep/c.txt"])
        );
        Ok(())
    }

    #[test]
    fn test_walk_max_depth() -> Result<(), Box<dyn std::error::Error>> {
        let fs = create_test_structure();

        let found = walk_all(&fs, &FindOptions::new().with_max_depth(Some(1)))?;
        assert_eq!(found, paths(&["root/a.txt", "root/sub/b.txt"]));

        let found = walk_all(&fs, &FindOptions::new().with_max_depth(Some(0)))?;
        assert_eq!(found, paths(&["root/a.txt"]));
        Ok(())
    }

    #[test]
    fn test_max_depth_bounds_listings() -> Result<(), Box<dyn std::error::Error>> {
        let fs = create_test_structure();
        walk_all(&fs, &FindOptions::new().with_max_depth(Some(0)))?;
        assert_eq!(fs.listed(), paths(&["root"]));

        let fs = create_test_structure();
        walk_all(&fs, &FindOptions::new().with_max_depth(Some(1)))?;
        assert_eq!(fs.listed(), paths(&["root", "root/sub"]));
        Ok(())
    }

    #[test]
    fn test_depth_relaxation_only_adds() -> Result<(), Box<dyn std::error::Error>> {
        let fs = create_test_structure();
        let mut previous = Vec::new();

        for depth in 0..4 {
            let found = walk_all(&fs, &FindOptions::new().with_max_depth(Some(depth)))?;
            assert!(previous.iter().all(|p| found.contains(p)), "depth {}", depth);
            previous = found;
        }
        assert_eq!(previous.len(), 3);
        Ok(())
    }

    #[test]
    fn test_unreadable_directory_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
        let fs = MemoryFileSystem::new("root")
            .dir("root/locked")
            .file("root/locked/secret.txt", 1)
            .dir("root/open")
            .file("root/open/visible.txt", 1)
            .unreadable("root/locked");

        let found = walk_all(&fs, &FindOptions::new())?;
        assert_eq!(found, paths(&["root/open/visible.txt"]));
        Ok(())
    }

    #[test]
    fn test_unreadable_root_yields_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let fs = create_test_structure().unreadable("root");
        assert!(walk_all(&fs, &FindOptions::new())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_root() {
        let fs = create_test_structure();
        let options = FindOptions::new();
        let walker = LayeredWalker::new(&fs, &options);

        for root in ["missing", "root/a.txt"] {
            let result = walker.walk(Path::new(root), |_| true, |_| {});
            assert!(matches!(result, Err(FindError::InvalidRoot(ref p)) if p == Path::new(root)));
        }
        assert!(fs.listed().is_empty());
    }

    #[test]
    fn test_each_file_tested_once() -> Result<(), Box<dyn std::error::Error>> {
        let fs = create_test_structure();
        let options = FindOptions::new();
        let mut tested = Vec::new();

        LayeredWalker::new(&fs, &options).walk(
            Path::new("root"),
            |path| {
                tested.push(path.to_path_buf());
                false
            },
            |_| {},
        )?;

        assert_eq!(
            tested,
            paths(&["root/a.txt", "root/sub/b.txt", "root/sub/deep/c.txt"])
        );
        Ok(())
    }

    #[test]
    fn test_emit_on_match() -> Result<(), Box<dyn std::error::Error>> {
        let fs = create_test_structure();
        let is_match = |path: &Path| path.extension().map_or(false, |ext| ext == "txt");

        let mut emitted = Vec::new();
        let options = FindOptions::new().with_emit_on_match(true);
        let found = LayeredWalker::new(&fs, &options)
            .walk(Path::new("root"), is_match, |path| emitted.push(path.to_path_buf()))?;
        assert_eq!(emitted, found);

        let mut emitted = Vec::new();
        let options = FindOptions::new();
        LayeredWalker::new(&fs, &options)
            .walk(Path::new("root"), is_match, |path| emitted.push(path.to_path_buf()))?;
        assert!(emitted.is_empty());
        Ok(())
    }
}
