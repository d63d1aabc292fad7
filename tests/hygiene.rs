//! Hygiene — scans production sources for antipatterns at test time.
//!
//! The card list is library code that runs inside a host's render loop, so
//! panicking escape hatches and silently discarded errors are banned
//! outright. Test modules (`*_test.rs`) are exempt.

use std::fs;
use std::path::{Path, PathBuf};

const BANNED: &[&str] = &[
    ".unwrap()",
    ".expect(",
    "panic!(",
    "unreachable!(",
    "todo!(",
    "unimplemented!(",
    "let _ =",
    ".ok()",
    "#[allow(dead_code)]",
];

fn production_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            out.push(path);
        }
    }
}

#[test]
fn production_code_is_free_of_banned_patterns() {
    let mut sources = Vec::new();
    production_sources(Path::new("src"), &mut sources);
    assert!(!sources.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for path in &sources {
        let content = fs::read_to_string(path).unwrap_or_default();
        for (number, line) in content.lines().enumerate() {
            for pattern in BANNED {
                if line.contains(pattern) {
                    violations.push(format!("{}:{}: {pattern}", path.display(), number + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "banned patterns in production code:\n{}",
        violations.join("\n")
    );
}
