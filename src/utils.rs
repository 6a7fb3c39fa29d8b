use std::path::Path;

/// Case-insensitive extension check
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Whether a path looks like an executable: a `.exe` extension on any
/// platform, or (on unix) a regular file with any execute bit set.
pub fn is_executable(path: &Path) -> bool {
    if has_extension(path, "exe") {
        return true;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        return match path.metadata() {
            Ok(md) => md.is_file() && md.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        };
    }

    #[cfg(not(unix))]
    false
}

/// Whether a path looks like a shared/dynamic library by extension
pub fn is_library(path: &Path) -> bool {
    has_extension(path, "dll") || has_extension(path, "so") || has_extension(path, "dylib")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn exe_extension_is_executable_regardless_of_case() {
        assert!(is_executable(Path::new("app.exe")));
        assert!(is_executable(Path::new("APP.EXE")));
    }

    #[test]
    fn library_extensions_match() {
        assert!(is_library(Path::new("lib.dll")));
        assert!(is_library(Path::new("lib.so")));
        assert!(is_library(Path::new("lib.dylib")));
        assert!(!is_library(Path::new("lib.a")));
        assert!(!is_library(Path::new("soso")));
    }

    #[cfg(unix)]
    #[test]
    fn execute_bit_marks_plain_files_executable() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let plain = tmp.path().join("plain");
        let exec = tmp.path().join("runner");
        fs::write(&plain, b"data").expect("write plain");
        fs::write(&exec, b"#!/bin/sh\n").expect("write runner");
        fs::set_permissions(&exec, fs::Permissions::from_mode(0o755)).expect("chmod");

        assert!(is_executable(&exec));
        assert!(!is_executable(&plain));
        assert!(!is_executable(&PathBuf::from(tmp.path())));
    }
}
