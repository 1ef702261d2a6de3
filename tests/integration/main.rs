//! Integration tests for xedcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use xedcache::cache::KeyScheme;
    use xedcache::config::Config;

    const DESCRIPTOR_URL: &str = "file:///opt/app/META-INF/extension.xed";

    fn xedcache() -> Command {
        cargo_bin_cmd!("xedcache")
    }

    /// Write a config rooted in `temp` and return its path
    fn write_config(temp: &TempDir, enabled: bool, scheme: KeyScheme) -> PathBuf {
        let mut config = Config::default();
        config.environment.permanent_dir = Some(temp.path().join("permanent"));
        config.cache.enabled = enabled;
        config.cache.key_scheme = scheme;

        let path = temp.path().join("config.toml");
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
        path
    }

    fn write_descriptor(dir: &Path, id: &str, version: &str) -> PathBuf {
        let path = dir.join(format!("{}.json", version));
        std::fs::write(
            &path,
            format!(
                r#"{{"id": "{}", "version": "{}", "name": "Platform Core", "features": ["org.example:legacy"]}}"#,
                id, version
            ),
        )
        .unwrap();
        path
    }

    fn cache_file(config: &Path, url: &str) -> PathBuf {
        let output = xedcache()
            .arg("--config")
            .arg(config)
            .args(["path", url])
            .output()
            .unwrap();
        PathBuf::from(String::from_utf8(output.stdout).unwrap().trim())
    }

    #[test]
    fn help_displays() {
        xedcache()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("extension descriptor"));
    }

    #[test]
    fn version_displays() {
        xedcache()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("xedcache"));
    }

    #[test]
    fn path_is_inside_cache_folder() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, true, KeyScheme::Sha256);

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["path", DESCRIPTOR_URL])
            .assert()
            .success()
            .stdout(predicate::str::contains("extension"))
            .stdout(predicate::str::contains(".xed"));
    }

    #[test]
    fn put_then_get() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, true, KeyScheme::Sha256);
        let descriptor = write_descriptor(temp.path(), "org.example:platform-core", "16.4.0");

        xedcache()
            .arg("--config")
            .arg(&config)
            .arg("put")
            .arg(&descriptor)
            .args(["--url", DESCRIPTOR_URL])
            .assert()
            .success()
            .stdout(predicate::str::contains("Stored"));

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["get", DESCRIPTOR_URL])
            .assert()
            .success()
            .stdout(predicate::str::contains("org.example:platform-core"))
            .stdout(predicate::str::contains("cached"));

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["get", "--format", "plain", DESCRIPTOR_URL])
            .assert()
            .success()
            .stdout(predicate::str::contains("org.example:platform-core/16.4.0"));
    }

    #[test]
    fn second_put_replaces_first() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, true, KeyScheme::Sha256);

        for version in ["1.0", "2.0"] {
            let descriptor = write_descriptor(temp.path(), "org.example:core", version);
            xedcache()
                .arg("--config")
                .arg(&config)
                .arg("put")
                .arg(&descriptor)
                .args(["--url", DESCRIPTOR_URL])
                .assert()
                .success();
        }

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["get", "--format", "json", DESCRIPTOR_URL])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"2.0\""));
    }

    #[test]
    fn get_unknown_url_reports_miss() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, true, KeyScheme::Sha256);

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["get", "file:///never/stored.xed"])
            .assert()
            .success()
            .stdout(predicate::str::contains("not cached"));
    }

    #[test]
    fn corrupt_entry_reports_miss() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, true, KeyScheme::StringHash);
        let descriptor = write_descriptor(temp.path(), "org.example:core", "1.0");

        xedcache()
            .arg("--config")
            .arg(&config)
            .arg("put")
            .arg(&descriptor)
            .args(["--url", DESCRIPTOR_URL])
            .assert()
            .success();

        let entry = cache_file(&config, DESCRIPTOR_URL);
        std::fs::write(&entry, "{\"id\": \"org.exa").unwrap();

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["get", DESCRIPTOR_URL])
            .assert()
            .success()
            .stdout(predicate::str::contains("not cached"))
            .stderr(predicate::str::contains("Failed to parse cached core extension"));
    }

    #[test]
    fn disabled_cache() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, false, KeyScheme::Sha256);
        let descriptor = write_descriptor(temp.path(), "org.example:core", "1.0");

        xedcache()
            .arg("--config")
            .arg(&config)
            .arg("put")
            .arg(&descriptor)
            .args(["--url", DESCRIPTOR_URL])
            .assert()
            .failure()
            .stderr(predicate::str::contains("disabled"));

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["get", DESCRIPTOR_URL])
            .assert()
            .success()
            .stdout(predicate::str::contains("not cached"));

        xedcache()
            .arg("--config")
            .arg(&config)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Disabled"));

        assert!(!temp.path().join("permanent").exists());
    }

    #[test]
    fn status_counts_entries() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, true, KeyScheme::Sha256);
        let descriptor = write_descriptor(temp.path(), "org.example:core", "1.0");

        xedcache()
            .arg("--config")
            .arg(&config)
            .arg("put")
            .arg(&descriptor)
            .args(["--url", DESCRIPTOR_URL])
            .assert()
            .success();

        xedcache()
            .arg("--config")
            .arg(&config)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Enabled"))
            .stdout(predicate::str::contains("sha256"))
            .stdout(predicate::str::contains("1"));
    }

    #[test]
    fn put_missing_descriptor_fails() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, true, KeyScheme::Sha256);

        xedcache()
            .arg("--config")
            .arg(&config)
            .arg("put")
            .arg(temp.path().join("missing.json"))
            .args(["--url", DESCRIPTOR_URL])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn config_init_and_path() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("nested").join("config.toml");

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("initialized"));
        assert!(config.exists());

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));

        xedcache()
            .arg("--config")
            .arg(&config)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[cache]"));
    }
}
