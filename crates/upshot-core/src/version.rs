//! Version-token parsing for session file names.
//!
//! A version token is a trailing `<sep>v<digits>` group in the file stem,
//! where `<sep>` is one of `.`, `_`, `-` and the `v` marker may be either
//! case: `scene_v001.hip`, `shot010-V12.hip`. The digits' zero-padding is
//! preserved when the number is rewritten.

use std::path::{Path, PathBuf};

use regex::Regex;

struct VersionToken<'a> {
    prefix: &'a str,
    separator: &'a str,
    marker: &'a str,
    digits: &'a str,
}

fn find_version_token(stem: &str) -> Option<VersionToken<'_>> {
    // Greedy prefix, so the last token in the stem wins.
    let pattern = Regex::new(r"^(?P<prefix>.+)(?P<sep>[._-])(?P<marker>[vV])(?P<digits>\d+)$")
        .expect("invalid regex");
    let caps = pattern.captures(stem)?;

    Some(VersionToken {
        prefix: caps.name("prefix")?.as_str(),
        separator: caps.name("sep")?.as_str(),
        marker: caps.name("marker")?.as_str(),
        digits: caps.name("digits")?.as_str(),
    })
}

/// Extracts the version number embedded in the file name, if any.
#[must_use]
pub fn get_version_number(path: &Path) -> Option<u32> {
    let stem = path.file_stem()?.to_str()?;
    let token = find_version_token(stem)?;
    token.digits.parse().ok()
}

/// Returns the path with its version token rewritten to `version`.
///
/// The token's zero-padding width is preserved; the width grows when the
/// number outgrows it (`v99` -> `v100`). Returns `None` when the file name
/// carries no version token.
#[must_use]
pub fn get_version_path(path: &Path, version: u32) -> Option<PathBuf> {
    let stem = path.file_stem()?.to_str()?;
    let token = find_version_token(stem)?;

    let prefix = token.prefix;
    let separator = token.separator;
    let marker = token.marker;
    let width = token.digits.len();
    let mut file_name = format!("{prefix}{separator}{marker}{version:0width$}");

    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        file_name.push('.');
        file_name.push_str(extension);
    }

    Some(path.with_file_name(file_name))
}

/// Computes the path one version past the one embedded in the file name.
#[must_use]
pub fn get_next_version_path(path: &Path) -> Option<PathBuf> {
    let version = get_version_number(path)?;
    get_version_path(path, version.checked_add(1)?)
}
