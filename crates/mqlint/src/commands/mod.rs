//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod check;
pub mod codes;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn reads_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("a.mq5")).unwrap();
        std::fs::write(&path, "int x;").unwrap();
        assert_eq!(read_input_file(&path, Some(64)).unwrap(), "int x;");
        assert_eq!(read_input_file(&path, None).unwrap(), "int x;");
    }

    #[test]
    fn rejects_oversized_file() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("a.mq5")).unwrap();
        std::fs::write(&path, "int x = 1;").unwrap();
        let err = read_input_file(&path, Some(3)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_has_context() {
        let err = read_input_file(Utf8Path::new("/no/such/file.mq4"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
