mod archive;
mod args;
mod context;
mod error;
mod locate;
mod manifest;
mod platform;
mod result;
mod utils;

use args::Args;
use context::Context;
use error::Error;
use std::fs;
use std::path::PathBuf;

fn main() {
    match run() {
        Ok(out_path) => println!("{}", out_path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> result::Result<PathBuf> {
    // Parse command-line arguments
    let Args {
        verbose,
        crate_dir,
        assets,
        out,
        single,
    } = Args::parse();

    let ctx = Context::new(crate_dir, assets, verbose);

    cliclack::intro("package-gui")?;

    // Locate the build output directory
    let candidates = locate::candidates(&ctx.crate_dir);
    let spinner = cliclack::spinner();
    spinner.start("Locating build directory...");
    let build_dir = match locate::find_first_existing(&candidates) {
        Some(dir) => {
            spinner.stop(format!("Using build directory {}", dir.display()));
            dir.to_path_buf()
        }
        None => {
            spinner.error("No build directory found");
            let listed = candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(",");
            return Err(Error::BuildDirNotFound(listed));
        }
    };

    // Binary name from the crate's Cargo.toml, as a matching hint only
    let bin_name = manifest::binary_name(&ctx.manifest_path());
    if verbose {
        match &bin_name {
            Some(name) => println!("Binary name: {}", name),
            None => println!("Binary name not determined"),
        }
    }

    let out_path = out.unwrap_or_else(|| PathBuf::from(format!("gui-{}.zip", platform::runner_os())));

    // Build the archive in the requested mode
    let spinner = cliclack::spinner();
    spinner.start("Writing archive...");
    let files_added = if single {
        archive::write_single(&ctx, &build_dir, bin_name.as_deref(), &out_path)?
    } else {
        archive::write_full(&ctx, &build_dir, &out_path)?
    };

    if files_added == 0 {
        spinner.error("No files added");
        let _ = fs::remove_file(&out_path);
        return Err(Error::EmptyArchive(out_path));
    }
    spinner.stop(format!("Added {} file(s)", files_added));

    cliclack::outro(format!("Archive created: {}", out_path.display()))?;
    Ok(out_path)
}
