use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (print each file as it is added)
    pub verbose: bool,

    /// Crate directory the build-output candidates are derived from
    pub crate_dir: PathBuf,

    /// Static assets directory bundled in full mode
    pub assets_dir: PathBuf,
}

impl Context {
    pub fn new(crate_dir: PathBuf, assets_dir: PathBuf, verbose: bool) -> Self {
        Self {
            verbose,
            crate_dir,
            assets_dir,
        }
    }

    /// Path of the crate's Cargo.toml, consulted only for the binary name.
    pub fn manifest_path(&self) -> PathBuf {
        self.crate_dir.join("Cargo.toml")
    }
}
