//! Builds a link graph from a directory of documents.
//!
//! Every regular file is a page named by its file name. A line containing the link marker links
//! its page to the first double-quoted string on that line, e.g. `<a href="contact.html">`.

use crate::error::{Error, Result};
use digraph::DiGraph;
use std::path::{Path, PathBuf};

/// Returns the link target on `line`, if the line carries `marker`.
///
/// The target is the text after the first `"` up to the next `"` (or the end of the line).
/// Lines whose target is empty yield `None`.
pub fn extract_link<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    if !line.contains(marker) {
        return None;
    }
    line.split('"').nth(1).filter(|target| !target.is_empty())
}

/// Loads every file directly inside `dir` (no recursion) into a link graph.
///
/// Files are read in file-name order. Pages without links still become vertices; link targets
/// need not exist as files. Symlinks to regular files count as pages.
pub fn load_site(dir: impl AsRef<Path>, marker: &str) -> Result<DiGraph<String>> {
    if marker.is_empty() {
        return Err(Error::EmptyLinkMarker);
    }
    let dir = dir.as_ref();
    let mut g = DiGraph::new();

    for path in site_files(dir)? {
        let Some(page) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let bytes = std::fs::read(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        g.add_vertex(page.clone());
        for (line_no, line) in text.lines().enumerate() {
            if !line.contains(marker) {
                continue;
            }
            match extract_link(line, marker) {
                Some(target) => {
                    g.add_edge(page.clone(), target.to_string());
                }
                None => tracing::warn!(
                    page = %page,
                    line = line_no + 1,
                    "link marker without a quoted target; skipped"
                ),
            }
        }
    }

    tracing::debug!(
        dir = %dir.display(),
        pages = g.number_of_vertices(),
        links = g.number_of_edges(),
        "site graph loaded"
    );
    Ok(g)
}

fn site_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let meta = std::fs::metadata(dir).map_err(io_err)?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let meta = match std::fs::metadata(&path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "dangling symlink; skipped");
                continue;
            }
            Err(source) => return Err(Error::Io { path, source }),
        };
        if meta.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
