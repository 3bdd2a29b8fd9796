use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const HEADER: &str = "# Daily Quotes & Facts\n\nAutomatically generated daily content.\n\n---\n\n";

/// Runs in `dir` with a private home, so no user config file is picked up.
fn daily(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daily").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("DAILY_FILE")
        .env_remove("DAILY_DEBUG_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn workdir() -> TempDir {
    tempdir().unwrap()
}

mod run_tests {
    use super::*;

    #[test]
    fn offline_run_creates_log_with_one_entry() {
        let dir = workdir();
        daily(dir.path())
            .arg("--offline")
            .assert()
            .success()
            .stdout(predicate::str::contains("Daily content added successfully!"))
            .stdout(predicate::str::contains("Type: Fact"));

        let s = fs::read_to_string(dir.path().join("daily-content.md")).unwrap();
        assert!(s.starts_with(HEADER));
        assert_eq!(s.matches("### ").count(), 1);
        assert!(s.contains("**Fact of the Day:**"));
        assert!(s.ends_with("---\n\n"));
    }

    #[test]
    fn offline_run_reports_fallback() {
        let dir = workdir();
        daily(dir.path())
            .args(["--offline", "--kind", "quote"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Fetching random quote..."))
            .stdout(predicate::str::contains("using fallback fact"));
    }

    #[test]
    fn repeated_runs_keep_a_single_header() {
        let dir = workdir();
        for _ in 0..3 {
            daily(dir.path()).arg("--offline").assert().success();
        }
        let s = fs::read_to_string(dir.path().join("daily-content.md")).unwrap();
        assert!(s.starts_with(HEADER));
        assert_eq!(s.matches(HEADER).count(), 1);
        assert_eq!(s.matches("**Fact of the Day:**").count(), 3);
    }

    #[test]
    fn existing_entries_stay_below_the_new_one() {
        let dir = workdir();
        let old = "### 2025-08-14 at 09:00 AM UTC\n\n**Fact of the Day:**\nOld one.\n\n---\n\n";
        let path = dir.path().join("daily-content.md");
        fs::write(&path, format!("{HEADER}{old}")).unwrap();

        daily(dir.path())
            .arg("--offline")
            .assert()
            .success()
            .stdout(predicate::str::contains("(2 entries)"));

        let s = fs::read_to_string(&path).unwrap();
        assert!(s.starts_with(HEADER));
        assert!(s.ends_with(old));
        assert_eq!(s.matches("### ").count(), 2);
    }

    #[test]
    fn file_flag_picks_target() {
        let dir = workdir();
        daily(dir.path())
            .args(["--offline", "--file", "notes/facts.md"])
            .assert()
            .success();
        assert!(dir.path().join("notes").join("facts.md").is_file());
        assert!(!dir.path().join("daily-content.md").exists());
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn directory_as_target_fails_with_diagnostic() {
        let dir = workdir();
        fs::create_dir(dir.path().join("daily-content.md")).unwrap();
        daily(dir.path())
            .arg("--offline")
            .assert()
            .failure()
            .stderr(predicate::str::contains("daily: reading"));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let dir = workdir();
        daily(dir.path())
            .args(["--kind", "joke"])
            .assert()
            .failure();
    }
}

mod path_tests {
    use super::*;

    #[test]
    fn path_prints_default_log_file() {
        let dir = workdir();
        daily(dir.path())
            .arg("--path")
            .assert()
            .success()
            .stdout("daily-content.md\n");
    }

    #[test]
    fn path_honours_config_file() {
        let dir = workdir();
        let config_dir = dir.path().join(".config").join("daily");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("config.toml"), "log_file = \"journal/daily.md\"\n").unwrap();
        daily(dir.path())
            .arg("--path")
            .assert()
            .success()
            .stdout("journal/daily.md\n");
    }

    #[test]
    fn path_honours_daily_file_env() {
        let dir = workdir();
        daily(dir.path())
            .env("DAILY_FILE", "x.md")
            .arg("--path")
            .assert()
            .success()
            .stdout("x.md\n");
    }

    #[test]
    fn path_with_file_flag_prints_that_file() {
        let dir = workdir();
        daily(dir.path())
            .args(["--path", "--file", "notes/today.md"])
            .assert()
            .success()
            .stdout("notes/today.md\n");
    }

    #[test]
    fn path_with_offline_is_rejected() {
        let dir = workdir();
        daily(dir.path())
            .args(["--path", "--offline"])
            .assert()
            .failure();
        assert!(!dir.path().join("daily-content.md").exists());
    }
}
