// src/codegen/io.rs
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::{
    catalog::{Catalog, CategoryId, CategoryKind},
    error::GenError,
    tables::ReverseTables,
};

// -------------------- atomic writes --------------------

/// Writes `contents` to a sibling temp file and renames it over `path`, so readers never see
/// a half-written artifact. An existing file with identical contents is left untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), GenError> {
    write_all_atomic(&[(path, contents)])
}

/// Commits a set of artifacts together. Every temp file is staged before the first rename;
/// if staging fails nothing is renamed, and if a rename fails the targets already committed
/// are put back. Temp files never outlive the call.
pub fn write_all_atomic(files: &[(&Path, &str)]) -> Result<(), GenError> {
    let mut staged: Vec<Staged> = Vec::with_capacity(files.len());
    for &(path, contents) in files {
        match stage(path, contents) {
            Ok(Some(s)) => staged.push(s),
            Ok(None) => log::debug!("[codegen] {} unchanged", path.display()),
            Err(e) => {
                discard(&staged);
                return Err(e);
            }
        }
    }

    for (i, s) in staged.iter().enumerate() {
        if let Err(source) = fs::rename(&s.tmp, &s.path) {
            restore(&staged[..i]);
            discard(&staged[i..]);
            return Err(GenError::Io {
                path: s.path.clone(),
                source,
            });
        }
    }
    for s in &staged {
        log::info!("[codegen] wrote {} ({} bytes)", s.path.display(), s.len);
    }
    Ok(())
}

struct Staged {
    path: PathBuf,
    tmp: PathBuf,
    previous: Option<Vec<u8>>,
    len: usize,
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    path.with_file_name(tmp_name)
}

/// Writes the temp file for `path`; `None` when the target already holds `contents`.
fn stage(path: &Path, contents: &str) -> Result<Option<Staged>, GenError> {
    let io_err = |source: io::Error| GenError::Io {
        path: path.to_path_buf(),
        source,
    };

    if fs::metadata(path).is_ok_and(|m| m.is_dir()) {
        return Err(io_err(io::Error::new(
            io::ErrorKind::IsADirectory,
            "artifact target is a directory",
        )));
    }
    let previous = fs::read(path).ok();
    if previous.as_deref() == Some(contents.as_bytes()) {
        return Ok(None);
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    let tmp = tmp_path(path);
    let written = fs::File::create(&tmp).and_then(|f| {
        let mut w = BufWriter::new(f);
        w.write_all(contents.as_bytes())?;
        w.flush()
    });
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(source));
    }
    Ok(Some(Staged {
        path: path.to_path_buf(),
        tmp,
        previous,
        len: contents.len(),
    }))
}

fn discard(staged: &[Staged]) {
    for s in staged {
        let _ = fs::remove_file(&s.tmp);
    }
}

fn restore(committed: &[Staged]) {
    for s in committed {
        let undone = match &s.previous {
            Some(bytes) => fs::write(&s.path, bytes),
            None => fs::remove_file(&s.path),
        };
        if let Err(e) = undone {
            log::warn!("[codegen] could not restore {}: {e}", s.path.display());
        }
    }
}

// -------------------- catalog JSON --------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntryDisk {
    pub id: CategoryId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lexeme: Option<String>,
    pub kind: CategoryKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub base_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDisk {
    pub categories: Vec<CatalogEntryDisk>,
}

impl CatalogDisk {
    pub fn new(catalog: &Catalog, tables: &ReverseTables) -> Self {
        Self {
            categories: catalog
                .iter()
                .map(|c| CatalogEntryDisk {
                    id: c.id,
                    name: c.name.clone(),
                    lexeme: c.lexeme.clone(),
                    kind: c.kind,
                    base_type: tables.base_type(c.id).map(|b| b.display.clone()),
                })
                .collect(),
        }
    }
}

pub fn catalog_json(catalog: &Catalog, tables: &ReverseTables) -> Result<String, GenError> {
    let mut s = serde_json::to_string_pretty(&CatalogDisk::new(catalog, tables))?;
    s.push('\n');
    Ok(s)
}

pub fn save_catalog_json(
    path: &Path,
    catalog: &Catalog,
    tables: &ReverseTables,
) -> Result<(), GenError> {
    write_atomic(path, &catalog_json(catalog, tables)?)
}

pub fn load_catalog_json_bytes(data: &[u8]) -> Result<CatalogDisk, GenError> {
    Ok(serde_json::from_slice::<CatalogDisk>(data)?)
}
