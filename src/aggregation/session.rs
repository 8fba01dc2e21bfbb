use crate::Error;
use crate::tree::Node;
use std::path::Path;
use std::path::PathBuf;

/// What the host knows when a run starts: the selected node, if any, and
/// where the loaded tree came from, if known.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub selected: Option<Node>,
    pub file: Option<PathBuf>,
}

impl Session {
    pub fn new(selected: Option<Node>, file: Option<PathBuf>) -> Self {
        Self { selected, file }
    }
    pub fn selected(&self) -> Result<&Node, Error> {
        self.selected.as_ref().ok_or(Error::NoSelection)
    }
    pub fn file(&self) -> Result<&Path, Error> {
        self.file.as_deref().ok_or(Error::UnknownLocation)
    }
    /// Every file next to the loaded tree with extension `ext`, the loaded
    /// tree included, sorted by path.
    pub fn siblings(&self, ext: &str) -> Result<Vec<PathBuf>, Error> {
        let dir = match self.file()?.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut files = std::fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|e| e == ext))
            .collect::<Vec<_>>();
        files.sort();
        log::debug!("{} .{} files in {}", files.len(), ext, dir.display());
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preconditions() {
        let session = Session::default();
        assert!(matches!(session.selected(), Err(Error::NoSelection)));
        assert!(matches!(session.siblings("cfr"), Err(Error::UnknownLocation)));
    }

    #[test]
    fn lists_siblings_sorted() {
        let dir = std::env::temp_dir().join(format!("runouts-session-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("nested.cfr")).unwrap();
        for name in ["b.cfr", "a.cfr", "notes.txt", "c.cfr"] {
            std::fs::write(dir.join(name), "").unwrap();
        }
        let session = Session::new(None, Some(dir.join("b.cfr")));
        let files = session.siblings("cfr").unwrap();
        let names = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        assert!(names == vec!["a.cfr", "b.cfr", "c.cfr"]);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
