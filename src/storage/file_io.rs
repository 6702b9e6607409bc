//! File I/O utilities
//!
//! Reads whole files as raw octets. No header or framing is interpreted here.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::BudgeteerError;

/// Read every byte of the file at `path`, in file order
///
/// # Errors
///
/// Returns [`BudgeteerError::Io`] if the path is empty, missing, or cannot be
/// read.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, BudgeteerError> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(BudgeteerError::Io("Empty path".into()));
    }

    let file = File::open(path)
        .map_err(|e| BudgeteerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| BudgeteerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.bin");
        fs::write(&path, [0u8, 1, 254, 255]).unwrap();

        assert_eq!(read_bytes(&path).unwrap(), vec![0, 1, 254, 255]);
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.bin");
        fs::write(&path, []).unwrap();

        assert!(read_bytes(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_nonexistent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.bin");

        let err = read_bytes(&path).unwrap_err();
        assert!(matches!(err, BudgeteerError::Io(_)));
        assert!(err.to_string().contains("nonexistent.bin"));
    }

    #[test]
    fn test_read_empty_path_fails() {
        assert!(matches!(read_bytes(""), Err(BudgeteerError::Io(_))));
    }
}
