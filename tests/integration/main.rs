//! Integration tests for snapsearch

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn snapsearch() -> Command {
        let mut cmd = cargo_bin_cmd!("snapsearch");
        cmd.env_remove("SNAPSEARCH_CLIENT_ID")
            .env_remove("SNAPSEARCH_CONFIG");
        cmd
    }

    fn write_config(dir: &Path, body: &str) -> String {
        let path = dir.join("config.toml");
        std::fs::write(&path, body).unwrap();
        path.display().to_string()
    }

    #[test]
    fn help_displays() {
        snapsearch()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Search images by keyword"));
    }

    #[test]
    fn version_displays() {
        snapsearch()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("snapsearch"));
    }

    #[test]
    fn config_path_honours_flag() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        snapsearch()
            .args(["--config", path.to_str().unwrap(), "config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("custom.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");
        snapsearch()
            .args(["--config", path.to_str().unwrap(), "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[api]"))
            .stdout(predicate::str::contains("api.unsplash.com"));
    }

    #[test]
    fn config_set_then_show() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let path = path.to_str().unwrap();

        snapsearch()
            .args(["--config", path, "config", "set", "cache.enabled", "false"])
            .assert()
            .success();

        snapsearch()
            .args(["--config", path, "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("enabled = false"));
    }

    #[test]
    fn config_set_unknown_key_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        snapsearch()
            .args(["--config", path.to_str().unwrap(), "config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn cache_path_uses_configured_dir() {
        let temp = TempDir::new().unwrap();
        let cache_dir = temp.path().join("thumbs");
        let config = write_config(
            temp.path(),
            &format!("[cache]\ndir = {:?}\n", cache_dir.display().to_string()),
        );

        snapsearch()
            .args(["--config", &config, "cache", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("thumbs"));
    }

    #[test]
    fn cache_check_reports_cached_entry() {
        let temp = TempDir::new().unwrap();
        let cache_dir = temp.path().join("thumbs");
        std::fs::create_dir_all(&cache_dir).unwrap();
        std::fs::write(cache_dir.join("a1.jpg"), b"jpeg").unwrap();
        let config = write_config(
            temp.path(),
            &format!("[cache]\ndir = {:?}\n", cache_dir.display().to_string()),
        );

        snapsearch()
            .args(["--config", &config, "cache", "check", "a1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("a1 is cached"));

        snapsearch()
            .args(["--config", &config, "cache", "check", "b2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("b2 is not cached"));
    }

    #[test]
    fn search_without_client_id_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");
        snapsearch()
            .args(["--config", path.to_str().unwrap(), "search", "cats"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No API client id configured"))
            .stderr(predicate::str::contains("SNAPSEARCH_CLIENT_ID"));
    }

    #[test]
    fn search_unreachable_endpoint_fails_cleanly() {
        let temp = TempDir::new().unwrap();
        let config = write_config(
            temp.path(),
            "[api]\nbase_url = \"http://127.0.0.1:9/search/photos\"\nclient_id = \"secret-key\"\n",
        );

        snapsearch()
            .args(["--config", &config, "search", "--format", "json", "cats"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("http://127.0.0.1:9/search/photos"))
            .stderr(predicate::str::contains("secret-key").not());
    }
}
