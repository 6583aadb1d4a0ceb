//! Helpers to run the `fietsat` binary in integration tests.
#![allow(dead_code, reason = "not every test file uses every helper")]

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct Output {
    pub(crate) status: Option<i32>,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

pub(crate) fn instance(name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/instances/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
}

pub(crate) fn run_fietsat<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let scratch = tempfile::tempdir().expect("failed to create scratch directory");
    let stdout_path = scratch.path().join("stdout");
    let stderr_path = scratch.path().join("stderr");

    let mut child = Command::new(env!("CARGO_BIN_EXE_fietsat"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(std::fs::File::create(&stdout_path).expect("failed to create stdout file"))
        .stderr(std::fs::File::create(&stderr_path).expect("failed to create stderr file"))
        .stdin(Stdio::null())
        .spawn()
        .expect("failed to run fietsat");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("fietsat took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status.code(),
        Err(e) => panic!("error while waiting for fietsat: {e}"),
    };

    Output {
        status,
        stdout: read(&stdout_path),
        stderr: read(&stderr_path),
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("failed to read output file")
}
