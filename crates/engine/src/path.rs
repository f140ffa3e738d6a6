use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Join a directory and a child name into the child's full path.
pub fn join(dir: &Path, name: &OsStr) -> PathBuf {
    dir.join(name)
}

/// Extension of the final path component, leading dot included.
///
/// Returns an empty string when the name has no dot or when its only dot is
/// the leading one (`.bashrc`). A trailing dot yields `"."`. Case is kept.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    if name == ".." {
        return String::new();
    }
    match name.rfind('.') {
        Some(0) | None => String::new(),
        Some(dot) => name[dot..].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_appends_child_name() {
        assert_eq!(join(Path::new("/a/b"), OsStr::new("c.txt")), PathBuf::from("/a/b/c.txt"));
        assert_eq!(join(Path::new("rel"), OsStr::new("x")), PathBuf::from("rel/x"));
    }

    #[test]
    fn extension_cases() {
        let cases = [
            ("root/a.txt", ".txt"),
            ("root/d.TXT", ".TXT"),
            ("root/c", ""),
            ("root/.bashrc", ""),
            ("root/archive.tar.gz", ".gz"),
            ("root/name.", "."),
            ("root/..hidden", ".hidden"),
            ("root/...", "."),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(extension_of(Path::new(input)), expected, "input: {input}");
        }
    }
}
