use log::debug;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// A single item a template asks to be created, relative to the project root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Dir(PathBuf),
    File(PathBuf, String),
}

/// Work that a template hands off to the framework's own tooling instead
/// of describing it as files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delegate {
    /// `python -m django startproject <project_name> <target>`
    DjangoStartProject { project_name: String },
}

/// The ordered description of what a template produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    entries: Vec<Entry>,
    delegate: Option<Delegate>,
}

impl Layout {
    pub fn new() -> Self {
        Layout::default()
    }

    pub fn dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.entries.push(Entry::Dir(path.into()));
        self
    }

    pub fn file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> &mut Self {
        self.entries.push(Entry::File(path.into(), contents.into()));
        self
    }

    pub fn delegate(&mut self, delegate: Delegate) -> &mut Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn delegated(&self) -> Option<&Delegate> {
        self.delegate.as_ref()
    }

    /// Contents of the file at `path`, if the layout has one.
    #[cfg(test)]
    pub fn contents_of(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.entries.iter().find_map(|entry| match entry {
            Entry::File(p, contents) if p == path => Some(contents.as_str()),
            _ => None,
        })
    }

    /// Creates every entry under `root`, returning the relative paths of the
    /// files written. Files are always truncated, never appended to.
    pub fn write_into(&self, root: &Path) -> Result<Vec<PathBuf>, (PathBuf, io::Error)> {
        let mut written = Vec::new();
        for entry in &self.entries {
            match entry {
                Entry::Dir(rel) => {
                    let path = root.join(rel);
                    debug!("Creating directory {}", path.display());
                    fs::create_dir_all(&path).map_err(|e| (path, e))?;
                }
                Entry::File(rel, contents) => {
                    let path = root.join(rel);
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent).map_err(|e| (parent.to_path_buf(), e))?;
                    }
                    debug!("Writing {}", path.display());
                    fs::write(&path, contents).map_err(|e| (path, e))?;
                    written.push(rel.clone());
                }
            }
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_dirs_and_files_with_missing_parents() {
        let tmp = TempDir::new().unwrap();
        let mut layout = Layout::new();
        layout
            .dir("src/static/js")
            .file("src/templates/index.html", "<html></html>\n");

        let written = layout.write_into(tmp.path()).unwrap();

        assert!(tmp.path().join("src/static/js").is_dir());
        assert_eq!(written, vec![PathBuf::from("src/templates/index.html")]);
        assert_eq!(
            fs::read_to_string(tmp.path().join("src/templates/index.html")).unwrap(),
            "<html></html>\n"
        );
    }

    #[test]
    fn existing_files_are_truncated() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a much longer previous body").unwrap();
        let mut layout = Layout::new();
        layout.file("a.txt", "new");

        layout.write_into(tmp.path()).unwrap();

        assert_eq!(fs::read_to_string(tmp.path().join("a.txt")).unwrap(), "new");
    }

    #[test]
    fn reports_the_failing_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("src"), "not a directory").unwrap();
        let mut layout = Layout::new();
        layout.file("src/main.py", "print()\n");

        let (path, _) = layout.write_into(tmp.path()).unwrap_err();
        assert_eq!(path, tmp.path().join("src"));
    }
}
