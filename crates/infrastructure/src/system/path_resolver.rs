use arp_inspect_domain::DomainError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Expands a leading `~` or `~/` against `home`. `~user` forms are left alone.
pub fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    match (raw, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (_, Some(home)) if raw.starts_with("~/") || raw.starts_with("~\\") => {
            home.join(&raw[2..])
        }
        _ => PathBuf::from(raw),
    }
}

/// Resolves user input (absolute, relative, `..` or `~` paths) to an
/// existing regular file.
pub async fn resolve_input_path(raw: &str) -> Result<PathBuf, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::NoInputPath);
    }

    let expanded = expand_home(trimmed, home_dir().as_deref());
    let resolved = fs::canonicalize(&expanded).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::InputNotFound(trimmed.to_string()),
        _ => DomainError::IoError(format!("Failed to resolve '{}': {}", trimmed, e)),
    })?;

    let metadata = fs::metadata(&resolved)
        .await
        .map_err(|e| DomainError::IoError(e.to_string()))?;
    if !metadata.is_file() {
        return Err(DomainError::NotAFile(trimmed.to_string()));
    }

    debug!(path = %resolved.display(), "Input path resolved");
    Ok(resolved)
}

/// Names of the regular files in `dir`, sorted
pub async fn list_files(dir: &Path) -> Result<Vec<String>, DomainError> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to list {}: {}", dir.display(), e)))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| DomainError::IoError(e.to_string()))?
    {
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if is_file {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    files.sort();
    Ok(files)
}
