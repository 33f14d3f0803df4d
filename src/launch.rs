use anyhow::Context;
use std::path::Path;

use crate::state::AppEntry;

/// Splits an argument string the way a shell would.
///
/// Unbalanced quotes fall back to plain whitespace splitting.
pub fn split_args(args: Option<&str>) -> Vec<String> {
    let Some(arg_str) = args.map(str::trim).filter(|a| !a.is_empty()) else {
        return Vec::new();
    };
    shlex::split(arg_str)
        .unwrap_or_else(|| arg_str.split_whitespace().map(str::to_string).collect())
}

pub fn launch(path: &str, args: Option<&str>) -> anyhow::Result<()> {
    let target = Path::new(path);
    let is_exe = target
        .extension()
        .map(|e| e.eq_ignore_ascii_case("exe"))
        .unwrap_or(false);
    let args = split_args(args);

    if is_exe || !args.is_empty() {
        std::process::Command::new(target)
            .args(&args)
            .spawn()
            .map(|_| ())
            .with_context(|| format!("spawning {path}"))
    } else {
        open::that(target).with_context(|| format!("opening {path}"))
    }
}

pub fn launch_entry(entry: &AppEntry) -> anyhow::Result<()> {
    tracing::info!(id = %entry.id, path = %entry.path, "launching app entry");
    launch(&entry.path, entry.args.as_deref())
        .with_context(|| format!("failed to launch '{}'", entry.name))
}
