//! Stub shell scripts used as target commands in process-level tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A temp directory holding an executable script.
pub struct StubScript {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl StubScript {
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Write `body` as an executable `/bin/sh` script.
#[cfg(unix)]
pub fn write_stub(name: &str, body: &str) -> anyhow::Result<StubScript> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    let mut perms = fs::metadata(&path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms)?;
    Ok(StubScript { dir, path })
}

/// Script that tracks concurrently running copies in `state_dir`.
///
/// Each run creates a marker file, records how many markers exist, sleeps
/// `sleep_secs`, then removes its marker. Observed counts are appended to
/// `state_dir/observed`.
#[cfg(unix)]
pub fn concurrency_probe(state_dir: &std::path::Path, sleep_secs: &str) -> anyhow::Result<StubScript> {
    let state = state_dir.to_string_lossy();
    write_stub(
        "probe.sh",
        &format!(
            r#"marker="{state}/active.$$"
touch "$marker"
ls "{state}" | grep -c '^active\.' >> "{state}/observed"
sleep {sleep_secs}
rm -f "$marker"
"#
        ),
    )
}
