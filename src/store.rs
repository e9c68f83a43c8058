use std::{fs, io, path::PathBuf};

/// Filesystem capability for the image collections. The server only ever
/// lists and reads; nothing here writes to the images root.
pub trait ImageStore {
    /// Names of the immediate subdirectories of the images root, sorted
    /// ascending by byte order.
    fn categories(&self) -> io::Result<Vec<String>>;

    /// Whether `name` exists as a directory under the images root.
    fn is_category(&self, name: &str) -> bool;

    /// Names of the regular files in a category, sorted ascending.
    fn files(&self, category: &str) -> io::Result<Vec<String>>;

    /// Full contents of one file in a category.
    fn read(&self, category: &str, filename: &str) -> io::Result<Vec<u8>>;
}

pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn entry_names(&self, path: PathBuf, want_files: bool) -> io::Result<Vec<String>> {
        let mut names = vec![];

        for entry in fs::read_dir(path)? {
            let Ok(entry) = entry else { continue };
            let matches = entry.file_type().is_ok_and(|file_type| {
                if want_files {
                    file_type.is_file()
                } else {
                    file_type.is_dir()
                }
            });

            if matches {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        names.sort();

        Ok(names)
    }
}

impl ImageStore for DiskStore {
    fn categories(&self) -> io::Result<Vec<String>> {
        self.entry_names(self.root.clone(), false)
    }

    fn is_category(&self, name: &str) -> bool {
        self.root.join(name).is_dir()
    }

    fn files(&self, category: &str) -> io::Result<Vec<String>> {
        self.entry_names(self.root.join(category), true)
    }

    fn read(&self, category: &str, filename: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(category).join(filename))
    }
}
