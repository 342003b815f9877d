use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::WalkerConfig;
use crate::constants::walker::ROOT_PATH;
use crate::types::{ConfscopeError, Result, TreeNode};

/// Recursively enumerates a directory into a nested [`TreeNode`] tree.
pub struct TreeWalker {
    root: PathBuf,
    skip_dirs: Vec<String>,
    include_hidden: bool,
    respect_gitignore: bool,
    max_depth: Option<usize>,
}

impl TreeWalker {
    pub fn new<P: AsRef<Path>>(root: P, config: &WalkerConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            skip_dirs: config.skip_dirs.clone(),
            include_hidden: config.include_hidden,
            respect_gitignore: config.respect_gitignore,
            max_depth: config.max_depth,
        }
    }

    pub fn with_skip_dirs(mut self, dirs: Vec<String>) -> Self {
        self.skip_dirs = dirs;
        self
    }

    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Walk the root and build the tree.
    ///
    /// Fails only when the root is missing or not a directory; unreadable
    /// entries below it are logged and left out.
    pub fn walk(&self) -> Result<TreeNode> {
        if !self.root.exists() {
            return Err(ConfscopeError::PathNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ConfscopeError::NotADirectory(self.root.clone()));
        }

        let mut stack: Vec<TreeNode> = vec![TreeNode::directory(self.root_name(), ROOT_PATH)];

        for result in self.builder().build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            let depth = entry.depth();
            if depth == 0 {
                continue;
            }

            // Close directories that the depth-first stream has left
            while stack.len() > depth {
                fold_top(&mut stack);
            }
            if stack.len() < depth {
                warn!("Orphaned entry without parent: {}", entry.path().display());
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let path = self.relative_path(entry.path());
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());

            if entry.path_is_symlink() {
                // Stat the target for its kind only; links are never descended
                let points_to_dir = fs::metadata(entry.path()).is_ok_and(|m| m.is_dir());
                debug!("Not following symlink: {}", entry.path().display());
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(TreeNode::symlink(name, path, points_to_dir));
                }
            } else if is_dir {
                stack.push(TreeNode::directory(name, path));
            } else {
                let size = entry.metadata().map(|m| m.len()).unwrap_or_else(|e| {
                    debug!("No metadata for {}: {}", entry.path().display(), e);
                    0
                });
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(TreeNode::file(name, path, size));
                }
            }
        }

        while stack.len() > 1 {
            fold_top(&mut stack);
        }

        let mut tree = stack
            .pop()
            .ok_or_else(|| ConfscopeError::Config("walker produced no root".to_string()))?;
        tree.sort_recursive();

        Ok(tree)
    }

    fn builder(&self) -> WalkBuilder {
        let gitignore = self.respect_gitignore;
        let skip_dirs = self.skip_dirs.clone();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .hidden(!self.include_hidden)
            .git_ignore(gitignore)
            .git_global(gitignore)
            .git_exclude(gitignore)
            .ignore(gitignore)
            .parents(gitignore)
            .require_git(false)
            .follow_links(false) // Security: prevent symlink traversal attacks
            .max_depth(self.max_depth)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                let skipped = entry.depth() > 0
                    && is_dir
                    && skip_dirs.iter().any(|d| entry.file_name() == d.as_str());
                if skipped {
                    debug!("Skipping dependency directory: {}", entry.path().display());
                }
                !skipped
            });

        builder
    }

    fn root_name(&self) -> String {
        self.root
            .canonicalize()
            .ok()
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    /// `/`-separated path relative to the root
    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Pop the innermost open directory into its parent
fn fold_top(stack: &mut Vec<TreeNode>) {
    if let Some(done) = stack.pop()
        && let Some(parent) = stack.last_mut()
    {
        parent.children.push(done);
    }
}
