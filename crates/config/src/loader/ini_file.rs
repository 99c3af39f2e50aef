//! INI file reading and writing.
//!
//! Responsibilities:
//! - Flatten an INI file into dotted `section.key` entries.
//! - Write dotted entries back out as INI sections.
//!
//! Invariants:
//! - Section names and keys are lower-cased on read.
//! - Keys outside any section keep their bare name.
//! - The text before the first `.` of an entry names its section on write.
//! - Values are taken verbatim: backslashes are neither unescaped on read
//!   nor escaped on write.

use std::collections::BTreeMap;
use std::path::Path;

use ini::{EscapePolicy, Ini, ParseOption};

use super::error::ConfigError;
use crate::constants::KEY_SEPARATOR;
use crate::schema::join_path;

/// Read `path` into a map of dotted keys to raw string values.
pub fn read_ini(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_file_opt(path, options).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = BTreeMap::new();
    for (section, properties) in ini.iter() {
        let prefix = section.map(str::to_lowercase).unwrap_or_default();
        for (key, value) in properties.iter() {
            entries.insert(join_path(&prefix, &key.to_lowercase()), value.to_string());
        }
    }
    Ok(entries)
}

/// Write `entries` to `path` as INI, one section per leading path segment.
pub fn write_ini(path: &Path, entries: &BTreeMap<String, String>) -> std::io::Result<()> {
    let mut ini = Ini::new();
    for (key, value) in entries {
        match key.split_once(KEY_SEPARATOR) {
            Some((section, field)) => {
                ini.with_section(Some(section)).set(field, value.as_str());
            }
            None => {
                ini.with_general_section().set(key.as_str(), value.as_str());
            }
        }
    }
    ini.write_to_file_policy(path, EscapePolicy::Nothing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_flattens_sections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");
        std::fs::write(
            &path,
            "[Server]\nIP = 10.0.0.1\nport = 9000\n\n[database]\npassword = secret\n",
        )
        .unwrap();

        let entries = read_ini(&path).unwrap();
        assert_eq!(entries["server.ip"], "10.0.0.1");
        assert_eq!(entries["server.port"], "9000");
        assert_eq!(entries["database.password"], "secret");
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_read_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.ini");

        let err = read_ini(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_read_malformed_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.ini");
        std::fs::write(&path, "[server\nip = 1\n").unwrap();

        assert!(matches!(read_ini(&path), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_write_then_read_keeps_sections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.ini");
        let entries = BTreeMap::from([
            ("server.ip".to_string(), "127.0.0.1".to_string()),
            ("logging.json".to_string(), "false".to_string()),
        ]);

        write_ini(&path, &entries).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[server]"));
        assert!(text.contains("[logging]"));
        assert_eq!(read_ini(&path).unwrap(), entries);
    }

    #[test]
    fn test_read_keeps_backslashes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");
        std::fs::write(
            &path,
            "[database]\npassword = pa\\ss\\word\nhost = C:\\db\\host\n",
        )
        .unwrap();

        let entries = read_ini(&path).unwrap();
        assert_eq!(entries["database.password"], r"pa\ss\word");
        assert_eq!(entries["database.host"], r"C:\db\host");
    }

    #[test]
    fn test_write_keeps_backslashes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.ini");
        let entries = BTreeMap::from([("database.host".to_string(), r"C:\db\host".to_string())]);

        write_ini(&path, &entries).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(r"C:\db\host"));
        assert_eq!(read_ini(&path).unwrap(), entries);
    }
}
