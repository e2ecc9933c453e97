//! Finding map scripts on disk and turning them into debug html files.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use tracing::{debug, info};

use crate::annotator::AnnotatedFile;
use crate::error::RmsError;
use crate::html_writer;
use crate::lexer;
use crate::source::SourceBuffer;
use crate::stream::TokenStream;

pub const MAP_EXTENSION: &str = "rms";

/// Lists the `.rms` files directly inside `maps_dir`, sorted by name. Subdirectories are not
/// searched.
pub fn get_rms_files(maps_dir: &Path) -> Result<Vec<PathBuf>, RmsError> {
    if !maps_dir.exists() {
        return Err(RmsError::FileNotFound(maps_dir.to_path_buf()));
    }
    if !maps_dir.is_dir() {
        return Err(RmsError::NotADirectory(maps_dir.to_path_buf()));
    }

    let mut found_maps = Vec::new();
    for entry in fs::read_dir(maps_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some(MAP_EXTENSION) {
            found_maps.push(path);
        }
    }
    if found_maps.is_empty() {
        return Err(RmsError::NoMaps(maps_dir.to_path_buf()));
    }
    found_maps.sort();
    Ok(found_maps)
}

/// Resolves a map name from the command line, with or without its extension.
pub fn find_map(maps_dir: &Path, name: &str) -> Result<PathBuf, RmsError> {
    let direct = maps_dir.join(name);
    if direct.is_file() {
        return Ok(direct);
    }
    let with_extension = direct.with_extension(MAP_EXTENSION);
    if with_extension.is_file() {
        return Ok(with_extension);
    }
    Err(RmsError::FileNotFound(direct))
}

/// Reads and tokenizes one script. The lexer logs unterminated comments.
pub fn tokenize_file(path: &Path) -> Result<TokenStream, RmsError> {
    let source = SourceBuffer::from_file(path)?;
    Ok(lexer::tokenize(&source))
}

/// Writes `out_dir/<map name>.html` for the map at `path` and returns the written path.
pub fn render_map(path: &Path, out_dir: &Path) -> Result<PathBuf, RmsError> {
    let stream = tokenize_file(path)?;
    let annotated = AnnotatedFile::annotate(&stream);
    let file_name = path
        .file_stem()
        .map(|stem| Path::new(stem).with_extension("html"))
        .unwrap_or_else(|| PathBuf::from("index.html"));
    let output = out_dir.join(file_name);
    html_writer::write_debug_path(&annotated, &output)?;
    info!(target: "rms::html", input = %path.display(), output = %output.display(), "Rendered map");
    Ok(output)
}

/// Renders every map into `out_dir` next to a copy of the style sheet.
///
/// The style sheet is checked before anything is written. Maps are scanned on separate
/// threads, at most one per available core at a time; results are returned in the order of
/// `maps`.
pub fn render_maps(
    maps: &[PathBuf],
    out_dir: &Path,
    style_path: &Path,
) -> Result<Vec<Result<PathBuf, RmsError>>, RmsError> {
    if !style_path.is_file() {
        return Err(RmsError::MissingStyle(style_path.to_path_buf()));
    }
    fs::create_dir_all(out_dir)?;
    fs::copy(style_path, out_dir.join("style.css"))?;

    let workers = worker_count();
    debug!(target: "rms::html", maps = maps.len(), workers, "Rendering maps");
    let mut results = Vec::with_capacity(maps.len());
    for chunk in maps.chunks(workers) {
        results.extend(render_chunk(chunk, out_dir));
    }
    Ok(results)
}

fn worker_count() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

fn render_chunk(maps: &[PathBuf], out_dir: &Path) -> Vec<Result<PathBuf, RmsError>> {
    thread::scope(|scope| {
        let handles: Vec<_> = maps
            .iter()
            .map(|path| scope.spawn(move || render_map(path, out_dir)))
            .collect();
        handles
            .into_iter()
            .zip(maps)
            .map(|(handle, path)| {
                handle.join().unwrap_or_else(|_| {
                    Err(RmsError::Io(std::io::Error::other(format!(
                        "rendering {} panicked",
                        path.display()
                    ))))
                })
            })
            .collect()
    })
}
