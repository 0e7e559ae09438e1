//! Host-list file reading.
//!
//! The CLI consumes host lists stored as JSON files, the same shape the
//! declarative layer records as state: `{"data": ["10.0.0.0/8", ...], "count": 2}`.

use serde::Deserialize;
use std::error::Error;
use std::path::Path;

/// A host list as stored on disk. This tool only reads lists; canonical
/// output is rendered from [`crate::models::HostSet`], not written back.
#[derive(Deserialize, Debug, Default)]
pub struct HostListFile {
    /// The raw host strings, in stored order.
    pub data: Vec<String>,
    /// Count of entries recorded by the writer (informational).
    #[serde(default)]
    pub count: usize,
}

/// Read a host list from a JSON file.
///
/// # Arguments
/// * `file` - Path to the host list file
///
/// # Returns
/// * `Ok(HostListFile)` - The parsed host list
/// * `Err` - If the file doesn't exist or isn't valid host-list JSON
pub fn read_host_list(file: &str) -> Result<HostListFile, Box<dyn Error>> {
    if !Path::new(file).exists() {
        return Err(format!("Host list file does not exist: {file}").into());
    }
    log::info!("Reading host list file: {file}");

    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("Error reading host list file {file}: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let list: HostListFile = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing {file}: path={} error={}", e.path(), e.inner()))?;

    if list.count != 0 && list.count != list.data.len() {
        log::warn!(
            "{file}: recorded count {} does not match {} entries",
            list.count,
            list.data.len()
        );
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_host_list() {
        let list = read_host_list("src/tests/test_data/host_test_cache_01.json")
            .expect("Error reading host list");
        assert!(!list.data.is_empty(), "Data should not be empty");
        assert_eq!(list.count, list.data.len());
        assert_eq!(list.data[0], "10.0.0.0/8", "Wrong first entry in test sample.");
    }

    #[test]
    fn test_read_host_list_missing_file() {
        let err = read_host_list("src/tests/test_data/no_such_file.json").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_read_host_list_bad_json() {
        let err = read_host_list("src/tests/test_data/host_test_cache_bad.json").unwrap_err();
        assert!(err.to_string().contains("path="));
    }
}
