use std::path::Path;

use crate::domain::entities::EnvEntry;
use crate::domain::ports::{EnvSource, PropertySink};

// Env definition file name expected inside each candidate directory.
const ENV_FILE_NAME: &str = ".env";

// dotenvy-backed file source for env definition files.
#[derive(Clone)]
pub struct DotenvFileSource;

impl EnvSource for DotenvFileSource {
    fn load(&self, dir: &Path) -> Result<Option<Vec<EnvEntry>>, String> {
        let path = dir.join(ENV_FILE_NAME);
        let iter = match dotenvy::from_path_iter(&path) {
            Ok(iter) => iter,
            // A missing file is the one absorbed condition.
            Err(err) if err.not_found() => return Ok(None),
            Err(err) => return Err(err.to_string()),
        };

        let mut entries = Vec::new();
        for item in iter {
            let (key, value) = item.map_err(|err| err.to_string())?;
            entries.push(EnvEntry { key, value });
        }
        Ok(Some(entries))
    }
}

// Process environment adapter for property writes.
#[derive(Clone)]
pub struct ProcessPropertySink;

impl PropertySink for ProcessPropertySink {
    fn set(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use uuid::Uuid;

    // Fresh directory under the OS temp dir so parallel tests cannot collide.
    fn unique_temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vault-env-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("expected temp dir to be created");
        dir
    }

    fn entry(key: &str, value: &str) -> EnvEntry {
        EnvEntry {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn when_file_exists_then_entries_are_returned_in_file_order() {
        let dir = unique_temp_dir();
        fs::write(
            dir.join(".env"),
            "SPRING_DATASOURCE_URL=jdbc:test\nFOO=bar\n",
        )
        .expect("expected env file to be written");

        let loaded = DotenvFileSource
            .load(&dir)
            .expect("expected load to succeed")
            .expect("expected file to be found");

        assert_eq!(
            loaded,
            vec![entry("SPRING_DATASOURCE_URL", "jdbc:test"), entry("FOO", "bar")]
        );
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn when_file_is_missing_then_load_returns_none() {
        let dir = unique_temp_dir();

        let loaded = DotenvFileSource
            .load(&dir)
            .expect("expected missing file to be absorbed");

        assert!(loaded.is_none());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn when_file_has_malformed_line_then_load_returns_error() {
        let dir = unique_temp_dir();
        fs::write(dir.join(".env"), "THIS IS NOT A PAIR\n")
            .expect("expected env file to be written");

        let result = DotenvFileSource.load(&dir);

        assert!(result.is_err());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn when_file_has_comments_and_blank_lines_then_only_pairs_are_returned() {
        let dir = unique_temp_dir();
        fs::write(
            dir.join(".env"),
            "# service configuration\n\nFOO=bar\n",
        )
        .expect("expected env file to be written");

        let loaded = DotenvFileSource
            .load(&dir)
            .expect("expected load to succeed")
            .expect("expected file to be found");

        assert_eq!(loaded, vec![entry("FOO", "bar")]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn when_sink_sets_property_then_process_environment_exposes_latest_value() {
        // Key is unique per run so parallel tests cannot observe each other.
        let key = format!("VAULT_SINK_TEST_{}", Uuid::new_v4().simple());

        ProcessPropertySink.set(&key, "value-1");
        assert_eq!(std::env::var(&key).as_deref(), Ok("value-1"));

        ProcessPropertySink.set(&key, "value-2");
        assert_eq!(std::env::var(&key).as_deref(), Ok("value-2"));

        std::env::remove_var(&key);
    }
}
