//! Loads known-answer suites from JSON files

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{KatError, Result};
use super::model::TestSuite;

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("kat")
}

/// Names of every suite on disk, sorted
pub fn available_suites() -> Result<Vec<String>> {
    let dir = vectors_dir();
    let entries = fs::read_dir(&dir).map_err(|source| KatError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    Ok(names)
}

/// Load `<name>.json` and push group defaults down into every case
pub fn load_suite(name: &str) -> Result<TestSuite> {
    let path = vectors_dir().join(format!("{name}.json"));
    let json = fs::read_to_string(&path).map_err(|source| KatError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut suite: TestSuite = serde_json::from_str(&json)?;
    for group in &mut suite.groups {
        for case in &mut group.tests {
            for (k, v) in &group.defaults {
                case.inputs.entry(k.clone()).or_insert_with(|| v.clone());
            }
        }
    }
    Ok(suite)
}
