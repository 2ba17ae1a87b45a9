use anyhow::Context;
use log::warn;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// One bundled airfoil file.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// Selection key: the file stem, or the full file name when an earlier
    /// file already took that stem.
    pub name: String,
    #[serde(skip)]
    pub file_name: String,
    #[serde(skip)]
    pub path: PathBuf,
}

/// Read-only listing of the airfoil directory, taken once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown airfoil '{0}'")]
pub struct UnknownAirfoil(pub String);

impl Catalog {
    pub fn scan<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("listing airfoil catalog {}", dir.display()))?
        {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut taken = HashSet::new();
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let (Some(stem), Some(file_name)) = (path.file_stem(), path.file_name()) else {
                continue;
            };
            let stem = stem.to_string_lossy().into_owned();
            let file_name = file_name.to_string_lossy().into_owned();

            let name = if !taken.contains(&stem) {
                stem
            } else if !taken.contains(&file_name) {
                warn!(
                    "catalog: '{}' shares its stem with another file, listed as '{}'",
                    stem, file_name
                );
                file_name.clone()
            } else {
                warn!("catalog: skipping {}, its name is already taken", path.display());
                continue;
            };
            taken.insert(name.clone());
            entries.push(CatalogEntry {
                name,
                file_name,
                path,
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Looks up every name, failing on the first one not in the catalog.
    pub fn resolve(&self, names: &[&str]) -> Result<Vec<&CatalogEntry>, UnknownAirfoil> {
        names
            .iter()
            .map(|name| self.get(name).ok_or_else(|| UnknownAirfoil(name.to_string())))
            .collect()
    }
}
