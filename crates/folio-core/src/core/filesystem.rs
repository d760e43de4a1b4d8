use hashlink::LinkedHashMap;
use tracing::{debug, error, warn};

use crate::config::{FILESYSTEM_MANIFEST, ROOT_DIR};
use crate::core::error::ManifestError;
use crate::models::{is_valid_entry_name, FileEntry, FsEntry, Manifest};

/// Directory entry returned by `list_dir`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    /// Name as shown by `ls`: directories carry a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Read-only virtual filesystem.
///
/// # Path Convention
///
/// - Root: `"/"`
/// - Absolute paths: `"/home/aathish/about.txt"`
/// - Resolution never checks existence; lookups do.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory entry containing all files
    root: FsEntry,
}

impl VirtualFs {
    /// Build the portfolio filesystem from the embedded manifest.
    pub fn portfolio() -> Self {
        Self::from_manifest_or_empty(FILESYSTEM_MANIFEST)
    }

    /// Parse a JSON manifest, falling back to an empty root if it is rejected.
    pub fn from_manifest_or_empty(json: &str) -> Self {
        match Self::from_manifest_str(json) {
            Ok(fs) => fs,
            Err(err) => {
                error!(%err, "filesystem manifest rejected, using empty tree");
                Self::empty()
            }
        }
    }

    /// Parse a JSON manifest and build the filesystem from it.
    pub fn from_manifest_str(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Ok(Self::from_manifest(&manifest))
    }

    /// Create filesystem from manifest.
    ///
    /// Files are inserted first, in manifest order, creating parent
    /// directories on first mention. Listed directories are then ensured.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut tree: LinkedHashMap<String, FsEntry> = LinkedHashMap::new();

        for file in &manifest.files {
            Self::insert_file(&mut tree, file);
        }

        for dir in &manifest.directories {
            Self::ensure_directory(&mut tree, &dir.path);
        }

        debug!(
            files = manifest.files.len(),
            directories = manifest.directories.len(),
            "built virtual filesystem"
        );

        Self {
            root: FsEntry::Directory { children: tree },
        }
    }

    /// Create a filesystem holding only the root directory.
    pub fn empty() -> Self {
        Self {
            root: FsEntry::directory(),
        }
    }

    fn segments(path: &str) -> Option<Vec<&str>> {
        let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
        if parts.iter().all(|p| is_valid_entry_name(p)) {
            Some(parts)
        } else {
            None
        }
    }

    /// Insert a file, creating missing parents, using iteration instead of recursion.
    fn insert_file(tree: &mut LinkedHashMap<String, FsEntry>, file: &FileEntry) {
        let Some(parts) = Self::segments(&file.path) else {
            warn!(path = %file.path, "manifest entry has an invalid path, skipping");
            return;
        };
        let Some((name, parents)) = parts.split_last() else {
            return;
        };

        let mut current = tree;
        for part in parents {
            let entry = current
                .entry(part.to_string())
                .or_insert_with(FsEntry::directory);
            current = match entry {
                FsEntry::Directory { children } => children,
                FsEntry::File { .. } => {
                    warn!(path = %file.path, blocked_by = %part, "manifest conflict: file in the way");
                    return;
                }
            };
        }

        if current.contains_key(*name) {
            warn!(path = %file.path, "manifest conflict: duplicate entry");
            return;
        }
        current.insert(name.to_string(), FsEntry::file(&file.content));
    }

    /// Ensure a directory exists at the given path.
    fn ensure_directory(tree: &mut LinkedHashMap<String, FsEntry>, path: &str) {
        let Some(parts) = Self::segments(path) else {
            warn!(path = %path, "manifest directory has an invalid path, skipping");
            return;
        };

        let mut current = tree;
        for part in parts {
            let entry = current
                .entry(part.to_string())
                .or_insert_with(FsEntry::directory);
            current = match entry {
                FsEntry::Directory { children } => children,
                FsEntry::File { .. } => {
                    warn!(path = %path, blocked_by = %part, "manifest conflict: file in the way");
                    return;
                }
            };
        }
    }

    // =========================================================================
    // Path resolution
    // =========================================================================

    /// Resolve a user-typed path against the current directory.
    ///
    /// - Absolute input is returned verbatim
    /// - `..` is the parent of `current` (root stays root)
    /// - Anything else is appended to `current`, collapsing repeated `/`
    ///
    /// Existence is not checked.
    pub fn resolve(current: &str, input: &str) -> String {
        if input.starts_with('/') {
            return input.to_string();
        }

        if input == ".." {
            return Self::parent_of(current);
        }

        Self::collapse_separators(&format!("{}/{}", current, input))
    }

    fn collapse_separators(path: &str) -> String {
        let mut out = String::with_capacity(path.len());
        let mut prev_slash = false;
        for c in path.chars() {
            if c == '/' && prev_slash {
                continue;
            }
            prev_slash = c == '/';
            out.push(c);
        }
        out
    }

    /// Get the parent directory of a path.
    ///
    /// Returns `/` for the root and for single-segment paths.
    pub fn parent_of(path: &str) -> String {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match parts.split_last() {
            Some((_, rest)) if !rest.is_empty() => format!("/{}", rest.join("/")),
            _ => ROOT_DIR.to_string(),
        }
    }

    /// Last path segment, or `/` for the root.
    pub fn basename(path: &str) -> String {
        path.split('/')
            .filter(|s| !s.is_empty())
            .next_back()
            .unwrap_or(ROOT_DIR)
            .to_string()
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get an entry by absolute path.
    pub fn lookup(&self, path: &str) -> Option<&FsEntry> {
        if path == ROOT_DIR {
            return Some(&self.root);
        }

        let mut current = &self.root;
        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = current.children()?.get(part)?;
        }

        Some(current)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(FsEntry::is_directory)
    }

    /// Check if a path is a file.
    pub fn is_file(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(FsEntry::is_file)
    }

    /// Content lines of a file; `None` for directories and missing paths.
    pub fn file_content(&self, path: &str) -> Option<&[String]> {
        self.lookup(path)?.content()
    }

    /// List directory contents in insertion order.
    ///
    /// Returns `None` for files and missing paths.
    pub fn list_dir(&self, path: &str) -> Option<Vec<DirEntry>> {
        let children = self.lookup(path)?.children()?;
        Some(
            children
                .iter()
                .map(|(name, entry)| DirEntry {
                    name: name.clone(),
                    is_dir: entry.is_directory(),
                })
                .collect(),
        )
    }

    /// Child names for display, directories suffixed with `/`.
    ///
    /// Files and missing paths yield an empty list; callers tell those
    /// apart with [`exists`](Self::exists) and [`is_file`](Self::is_file).
    pub fn list_directory(&self, path: &str) -> Vec<String> {
        self.list_dir(path)
            .map(|entries| entries.iter().map(DirEntry::display_name).collect())
            .unwrap_or_default()
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HOME_DIR;
    use crate::models::DirectoryEntry;

    fn file(path: &str, content: &str) -> FileEntry {
        FileEntry {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    fn create_test_fs() -> VirtualFs {
        let manifest = Manifest {
            files: vec![
                file("blog/hello.md", "Hello\nWorld"),
                file("blog/empty.md", ""),
                file("projects/web/app.md", "Web App"),
            ],
            directories: vec![DirectoryEntry {
                path: "tmp".to_string(),
            }],
        };
        VirtualFs::from_manifest(&manifest)
    }

    #[test]
    fn test_empty_fs() {
        let fs = VirtualFs::empty();
        assert!(fs.is_directory("/"));
        assert!(fs.list_directory("/").is_empty());
    }

    #[test]
    fn test_from_manifest() {
        let fs = create_test_fs();

        assert!(fs.is_directory("/blog"));
        assert!(fs.is_file("/blog/hello.md"));
        assert!(fs.is_directory("/projects/web"));
        assert!(fs.is_directory("/tmp"));
        assert_eq!(
            fs.file_content("/blog/hello.md").unwrap(),
            &["Hello".to_string(), "World".to_string()]
        );
        assert!(fs.file_content("/blog/empty.md").unwrap().is_empty());
    }

    #[test]
    fn test_insertion_order() {
        let fs = create_test_fs();
        assert_eq!(fs.list_directory("/"), vec!["blog/", "projects/", "tmp/"]);
        assert_eq!(fs.list_directory("/blog"), vec!["hello.md", "empty.md"]);
    }

    #[test]
    fn test_manifest_conflicts_are_skipped() {
        let manifest = Manifest {
            files: vec![
                file("a.txt", "first"),
                file("a.txt", "second"),
                file("a.txt/nested.txt", "blocked"),
                file("bad/../escape.txt", "nope"),
                file("ok.txt", "fine"),
            ],
            directories: vec![],
        };
        let fs = VirtualFs::from_manifest(&manifest);

        assert_eq!(fs.list_directory("/"), vec!["a.txt", "ok.txt"]);
        assert_eq!(fs.file_content("/a.txt").unwrap(), &["first".to_string()]);
    }

    #[test]
    fn test_invalid_manifest_json() {
        assert!(VirtualFs::from_manifest_str("{not json").is_err());
    }

    #[test]
    fn test_portfolio_tree() {
        let fs = VirtualFs::portfolio();

        assert_eq!(fs.list_directory("/"), vec!["home/", "usr/"]);
        assert_eq!(
            fs.list_directory(HOME_DIR),
            vec!["projects/", "skills/", "about.txt", "contact.txt"]
        );
        assert_eq!(
            fs.list_directory("/home/aathish/projects"),
            vec!["portfolio.md", "ecommerce.md", "task-manager.md"]
        );
        assert!(fs.is_directory("/usr/bin"));
        assert!(fs.list_directory("/usr/bin").is_empty());
        assert_eq!(fs.file_content("/home/aathish/contact.txt").unwrap().len(), 2);
    }

    #[test]
    fn test_resolve() {
        // Absolute input is verbatim
        assert_eq!(VirtualFs::resolve("/home/aathish", "/usr/bin"), "/usr/bin");

        // Relative input
        assert_eq!(
            VirtualFs::resolve("/home/aathish", "projects"),
            "/home/aathish/projects"
        );
        assert_eq!(VirtualFs::resolve("/", "home"), "/home");
        assert_eq!(
            VirtualFs::resolve("/home/aathish/", "skills//frontend.txt"),
            "/home/aathish/skills/frontend.txt"
        );

        // Parent
        assert_eq!(VirtualFs::resolve("/home/aathish", ".."), "/home");
        assert_eq!(VirtualFs::resolve("/home", ".."), "/");
        assert_eq!(VirtualFs::resolve("/", ".."), "/");
    }

    #[test]
    fn test_resolve_parent_reaches_root() {
        let mut path = "/home/aathish/projects".to_string();
        for _ in 0..3 {
            path = VirtualFs::resolve(&path, "..");
        }
        assert_eq!(path, "/");
        assert_eq!(VirtualFs::resolve(&path, ".."), "/");
    }

    #[test]
    fn test_absolute_lookup_ignores_cwd() {
        let fs = VirtualFs::portfolio();
        for cwd in ["/", "/usr/bin", HOME_DIR, "/does/not/exist"] {
            let resolved = VirtualFs::resolve(cwd, "/home/aathish/about.txt");
            assert!(fs.is_file(&resolved));
        }
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(VirtualFs::parent_of("/home/aathish"), "/home");
        assert_eq!(VirtualFs::parent_of("/home"), "/");
        assert_eq!(VirtualFs::parent_of("/"), "/");
        assert_eq!(VirtualFs::parent_of("/home/aathish/"), "/home");
    }

    #[test]
    fn test_basename() {
        assert_eq!(VirtualFs::basename("/home/aathish/about.txt"), "about.txt");
        assert_eq!(VirtualFs::basename("/home/"), "home");
        assert_eq!(VirtualFs::basename("/"), "/");
    }

    #[test]
    fn test_lookup() {
        let fs = create_test_fs();

        assert!(fs.lookup("/").is_some_and(FsEntry::is_directory));
        assert!(fs.lookup("/blog/").is_some());
        assert!(fs.lookup("/nonexistent").is_none());
        assert!(fs.lookup("/blog/hello.md/deeper").is_none());
        assert!(!fs.exists("/blog/nonexistent.md"));
    }

    #[test]
    fn test_list_dir_on_file_or_missing() {
        let fs = create_test_fs();
        assert!(fs.list_dir("/blog/hello.md").is_none());
        assert!(fs.list_dir("/missing").is_none());
        assert!(fs.list_directory("/blog/hello.md").is_empty());
        assert!(fs.list_directory("/missing").is_empty());
    }

    #[test]
    fn test_rejected_manifest_falls_back_to_empty_root() {
        let fs = VirtualFs::from_manifest_or_empty("{ not json");
        assert!(fs.is_directory("/"));
        assert!(fs.list_directory("/").is_empty());
        assert!(!fs.exists(HOME_DIR));

        let fs = VirtualFs::from_manifest_or_empty(r#"{"files":[{"path":"a.txt","content":"x"}]}"#);
        assert_eq!(fs.list_directory("/"), vec!["a.txt"]);
    }

    #[test]
    fn test_list_dir_entries() {
        let fs = create_test_fs();
        let entries = fs.list_dir("/projects").unwrap();
        assert_eq!(
            entries,
            vec![DirEntry {
                name: "web".to_string(),
                is_dir: true,
            }]
        );
        assert_eq!(entries[0].display_name(), "web/");
    }
}
