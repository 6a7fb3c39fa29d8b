use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the packaging tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Crate directory used to derive build-output candidates and the manifest
    pub crate_dir: PathBuf,

    /// Directory of static assets to bundle (full mode only)
    pub assets: PathBuf,

    /// Output archive path (defaults to gui-<OS>.zip)
    pub out: Option<PathBuf>,

    /// Package only the main executable
    pub single: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("package-gui")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages GUI release artifacts and assets into a single zip archive")
            .arg(
                Arg::new("crate")
                    .long("crate")
                    .value_name("DIR")
                    .default_value("crates/preflop-trainer-gui")
                    .help("Crate directory used to locate build outputs and Cargo.toml")
            )
            .arg(
                Arg::new("assets")
                    .long("assets")
                    .value_name("DIR")
                    .default_value("assets")
                    .help("Directory of static assets to bundle")
            )
            .arg(
                Arg::new("out")
                    .short('o')
                    .long("out")
                    .value_name("FILE")
                    .help("Output archive path (defaults to gui-<OS>.zip)")
            )
            .arg(
                Arg::new("single")
                    .long("single")
                    .action(ArgAction::SetTrue)
                    .help("Package only the main executable")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            crate_dir: matches.get_one::<String>("crate").map(PathBuf::from).unwrap(),
            assets: matches.get_one::<String>("assets").map(PathBuf::from).unwrap(),
            out: matches.get_one::<String>("out").map(PathBuf::from),
            single: matches.get_flag("single"),
        }
    }
}
