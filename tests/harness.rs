//! Test harness for timeline-menu integration tests

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use timeline_menu::Site;
use timeline_menu::test_utils::{SiteBuilder, TestSite};

/// Timeline
/// ├── 1990s   (post: Launch)
/// │   └── 1999
/// └── 2000s
///     └── 2004 (post: Relaunch)
pub fn timeline() -> Site {
    SiteBuilder::new()
        .category(1, "Timeline", None)
        .category(2, "1990s", Some(1))
        .category(3, "1999", Some(2))
        .category(4, "2000s", Some(1))
        .category(5, "2004", Some(4))
        .post(10, "Launch", "https://example.com/launch", &[2])
        .post(11, "Relaunch", "https://example.com/relaunch", &[5])
        .build()
}

pub fn timeline_site() -> TestSite {
    TestSite::new(&timeline())
}

/// The CLI, run inside `dir`.
pub fn timeline_menu(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("timeline-menu").expect("binary should be built");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Run the CLI and return (stdout, stderr, success).
pub fn run_timeline_menu(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = timeline_menu(dir)
        .args(args)
        .output()
        .expect("Failed to run timeline-menu");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_writes_site() {
        let site = timeline_site();
        assert!(site.site_path().exists());
        assert!(!site.instances_path().exists());
    }

    #[test]
    fn test_harness_site_round_trips() {
        let site = timeline_site();
        let loaded = Site::load(&site.site_path()).unwrap();
        assert_eq!(loaded, timeline());
    }
}
