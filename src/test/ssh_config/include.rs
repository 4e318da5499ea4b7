use super::{expand_include_pattern, resolve_include_pattern};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn test_dir(name: &str) -> io::Result<PathBuf> {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock drift").as_nanos();
    let serial = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("sshconf_include_{name}_{nanos}_{serial}"));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[test]
fn relative_patterns_resolve_against_the_including_directory() {
    let resolved = resolve_include_pattern("conf.d/*.conf", Path::new("/etc/ssh"));
    assert_eq!(resolved, "/etc/ssh/conf.d/*.conf");
}

#[test]
fn absolute_patterns_are_left_alone() {
    let resolved = resolve_include_pattern("/etc/ssh/extra.conf", Path::new("/home/user/.ssh"));
    assert_eq!(resolved, "/etc/ssh/extra.conf");
}

#[test]
fn non_glob_pattern_expands_to_the_file_when_it_exists() {
    let dir = test_dir("plain").expect("temp dir");
    let file = dir.join("extra.conf");
    fs::write(&file, "Host extra\n").expect("write include");

    assert_eq!(expand_include_pattern(&file.to_string_lossy()), vec![file]);
    assert!(expand_include_pattern(&dir.join("missing.conf").to_string_lossy()).is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn glob_pattern_expands_to_matching_files_sorted_by_name() {
    let dir = test_dir("glob").expect("temp dir");
    fs::write(dir.join("20-b.conf"), "Host b\n").expect("write b");
    fs::write(dir.join("10-a.conf"), "Host a\n").expect("write a");
    fs::write(dir.join("ignore.txt"), "not a conf\n").expect("write txt");

    let expanded = expand_include_pattern(&dir.join("*.conf").to_string_lossy());
    let names: Vec<_> = expanded.iter().map(|path| path.file_name().and_then(|name| name.to_str()).unwrap_or_default()).collect();
    assert_eq!(names, vec!["10-a.conf", "20-b.conf"]);

    let _ = fs::remove_dir_all(dir);
}
