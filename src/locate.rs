use std::path::{Path, PathBuf};

/// Candidate build-output directories for a crate, in preference order:
/// musl release, generic release, the same pair relative to the workspace
/// root, then the debug builds as a last resort.
pub fn candidates(crate_dir: &Path) -> Vec<PathBuf> {
    vec![
        crate_dir.join("target/x86_64-unknown-linux-musl/release"),
        crate_dir.join("target/release"),
        PathBuf::from("target/x86_64-unknown-linux-musl/release"),
        PathBuf::from("target/release"),
        crate_dir.join("target/debug"),
        PathBuf::from("target/debug"),
    ]
}

/// First candidate that exists on the filesystem, if any.
pub fn find_first_existing(paths: &[PathBuf]) -> Option<&Path> {
    paths.iter().map(PathBuf::as_path).find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn candidates_prefer_release_over_debug() {
        let list = candidates(Path::new("crates/gui"));
        assert_eq!(
            list,
            vec![
                PathBuf::from("crates/gui/target/x86_64-unknown-linux-musl/release"),
                PathBuf::from("crates/gui/target/release"),
                PathBuf::from("target/x86_64-unknown-linux-musl/release"),
                PathBuf::from("target/release"),
                PathBuf::from("crates/gui/target/debug"),
                PathBuf::from("target/debug"),
            ]
        );
    }

    #[test]
    fn first_existing_candidate_wins() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let second = tmp.path().join("release");
        let third = tmp.path().join("debug");
        fs::create_dir_all(&second).expect("create release");
        fs::create_dir_all(&third).expect("create debug");

        let paths = vec![tmp.path().join("missing"), second.clone(), third];
        assert_eq!(find_first_existing(&paths), Some(second.as_path()));
    }

    #[test]
    fn no_existing_candidate_yields_none() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let paths = vec![tmp.path().join("a"), tmp.path().join("b")];
        assert_eq!(find_first_existing(&paths), None);
    }
}
