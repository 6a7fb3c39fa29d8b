#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOS,
}

impl Platform {
    /// Get the current platform
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            panic!("Unsupported platform");
        }
    }

    /// Platform label, spelled the way GitHub Actions' RUNNER_OS spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOS => "macOS",
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// OS label used in the default archive name. RUNNER_OS wins when set so CI
/// artifacts keep their runner's spelling; otherwise the host platform.
pub fn runner_os() -> String {
    std::env::var("RUNNER_OS").unwrap_or_else(|_| Platform::current().to_string())
}
