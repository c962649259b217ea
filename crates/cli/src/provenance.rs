use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sidecar written next to every report: where it came from and how.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub lib_version: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Provenance {
    #[track_caller]
    pub fn new(params: Value, outputs: Vec<String>) -> Self {
        let callsite = Location::caller();
        Self {
            code_rev: current_git_rev(),
            lib_version: simplicial::VERSION,
            callsite: Callsite {
                file: callsite.file(),
                line: callsite.line(),
            },
            params,
            outputs,
        }
    }
}

/// Write `report` to `out` (creating parent dirs) and `<stem>.provenance.json` beside it.
#[track_caller]
pub fn write_with_sidecar<P: AsRef<Path>>(out: P, report: &[u8], params: Value) -> Result<PathBuf> {
    let out = out.as_ref();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, report).with_context(|| format!("writing {}", out.display()))?;

    let doc = Provenance::new(params, vec![out.to_string_lossy().into_owned()]);
    let sidecar = provenance_path(out);
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/sphere.txt");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/sphere.provenance.json")
        );
    }

    #[test]
    fn report_and_sidecar_are_written() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("h.json");
        let sidecar = write_with_sidecar(&out, b"{}", json!({"input": "k.json"})).unwrap();
        assert_eq!(fs::read(&out).unwrap(), b"{}");
        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], out.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["input"], "k.json");
        assert_eq!(parsed["lib_version"], simplicial::VERSION);
    }
}
