use crate::context::Context;
use crate::result::Result;
use crate::utils::{has_extension, is_executable, is_library};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Size cutoff for otherwise-unmatched build artifacts in full mode.
const SMALL_FILE_LIMIT: u64 = 5 * 1024 * 1024;

/// Extensions always bundled in full mode, alongside executables and libraries.
const BUNDLED_EXTENSIONS: [&str; 6] = ["json", "svg", "pak", "dat", "txt", "ini"];

/// Package only the main executable, stored under its bare file name.
///
/// Returns the number of entries written; zero when no executable could be
/// identified (reported to stderr, the caller deletes the empty archive).
pub fn write_single(
    ctx: &Context,
    build_dir: &Path,
    bin_name: Option<&str>,
    out_path: &Path,
) -> Result<usize> {
    let mut zip = ZipWriter::new(File::create(out_path)?);
    let mut files_added = 0;

    match find_main_executable(build_dir, bin_name)? {
        Some(exe) => {
            let arcname = exe
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            add_file(ctx, &mut zip, &exe, &arcname)?;
            files_added += 1;
        }
        None => eprintln!("No executable found in {}", build_dir.display()),
    }

    zip.finish()?;
    Ok(files_added)
}

/// Package the assets tree plus the filtered build artifacts.
///
/// Assets keep their relative path under an `assets/` prefix; build artifacts
/// keep their path relative to the build directory.
pub fn write_full(ctx: &Context, build_dir: &Path, out_path: &Path) -> Result<usize> {
    let mut zip = ZipWriter::new(File::create(out_path)?);
    let mut files_added = 0;

    if ctx.assets_dir.exists() {
        for entry in WalkDir::new(&ctx.assets_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry.path().strip_prefix(&ctx.assets_dir).unwrap();
            let arcname = format!("assets/{}", entry_name(rel));
            add_file(ctx, &mut zip, entry.path(), &arcname)?;
            files_added += 1;
        }
    }

    for entry in WalkDir::new(build_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if !should_include(entry.path()) {
            continue;
        }
        let rel = entry.path().strip_prefix(build_dir).unwrap();
        add_file(ctx, &mut zip, entry.path(), &entry_name(rel))?;
        files_added += 1;
    }

    zip.finish()?;
    Ok(files_added)
}

/// Main executable among the build directory's direct entries.
///
/// An exact `<bin_name>.exe`/`<bin_name>` match or a `.exe` entry wins
/// outright; otherwise the first entry passing the executable test is
/// remembered while the scan continues, so a later exact match still
/// overrides it. Directory iteration order decides ties.
fn find_main_executable(build_dir: &Path, bin_name: Option<&str>) -> Result<Option<PathBuf>> {
    let mut exe_found = None;

    for entry in fs::read_dir(build_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(bin) = bin_name {
            if name == format!("{bin}.exe") || name == bin {
                return Ok(Some(path));
            }
        }
        if has_extension(&path, "exe") {
            return Ok(Some(path));
        }
        if exe_found.is_none() && is_executable(&path) {
            exe_found = Some(path);
        }
    }

    Ok(exe_found)
}

/// Full-mode inclusion filter: executables, libraries, allow-listed
/// extensions, and any file under the size cutoff. Unreadable metadata
/// counts as small.
fn should_include(path: &Path) -> bool {
    if is_executable(path) || is_library(path) {
        return true;
    }
    if BUNDLED_EXTENSIONS.iter().any(|ext| has_extension(path, ext)) {
        return true;
    }
    match path.metadata() {
        Ok(md) => md.len() < SMALL_FILE_LIMIT,
        Err(_) => true,
    }
}

fn add_file(ctx: &Context, zip: &mut ZipWriter<File>, path: &Path, arcname: &str) -> Result<()> {
    if ctx.verbose {
        println!("Adding {}", arcname);
    }

    let mut options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    if is_executable(path) {
        options = options.unix_permissions(0o755);
    }

    zip.start_file(arcname, options)?;
    let mut f = File::open(path)?;
    let mut buffer = Vec::new();
    f.read_to_end(&mut buffer)?;
    zip.write_all(&buffer)?;
    Ok(())
}

/// Zip entry name for a relative path, `/`-separated on every host.
fn entry_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
