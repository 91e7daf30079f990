//! Before/after fixture pairs under `test-fixtures/reflow/`.
//!
//! A pair is `<name>.before.md` and `<name>.after.md`. Reflowing the before
//! file paragraph by paragraph must reproduce the after file line for line.
//! A before line of the form `` `{"settings":{...}}` `` changes the settings
//! for every paragraph from there on.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

/// Root of the shared fixture directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/reflow")
}

/// A loaded before/after pair.
#[derive(Debug, Clone)]
pub struct FixturePair {
    pub name: String,
    pub before: String,
    pub after: String,
}

impl FixturePair {
    /// Load `<name>.before.md` and `<name>.after.md`.
    ///
    /// # Panics
    /// Panics if either file cannot be read.
    pub fn load(name: &str) -> Self {
        let read = |suffix: &str| {
            let path = fixtures_dir().join(format!("{name}.{suffix}.md"));
            fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Could not read fixture {}: {e}", path.display()))
        };
        Self {
            name: name.to_string(),
            before: read("before"),
            after: read("after"),
        }
    }

    /// Names of every pair in the fixture directory, sorted.
    ///
    /// # Panics
    /// Panics if the fixture directory cannot be listed.
    pub fn all_names() -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(fixtures_dir())
            .expect("fixture directory should exist")
            .filter_map(|entry| {
                let file_name = entry.ok()?.file_name();
                file_name
                    .to_str()?
                    .strip_suffix(".before.md")
                    .map(str::to_string)
            })
            .collect();
        names.sort();
        names
    }

    /// Lines of the before file, split the way an editor would.
    pub fn before_lines(&self) -> Vec<&str> {
        split_lines(&self.before)
    }

    /// Lines of the after file, split the way an editor would.
    pub fn after_lines(&self) -> Vec<&str> {
        split_lines(&self.after)
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect()
}

/// The `settings` object of a `` `{"settings":{...}}` `` directive line.
pub fn settings_directive(line: &str) -> Option<Value> {
    if !line.starts_with("`{\"settings\":") {
        return None;
    }
    let json: Value = serde_json::from_str(&line.replace('`', "")).ok()?;
    json.get("settings").cloned()
}
