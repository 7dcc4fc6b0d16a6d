#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::NamedTempFile;

/// Serializes tests that touch process-wide state (environment, cwd).
static PROCESS_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with the server environment variables set to `vars`.
///
/// `HOST`, `PORT` and `RUST_LOG` not listed in `vars` are cleared for the
/// duration of the call. Previous values are restored afterwards, even if `f`
/// panics.
pub fn with_server_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = PROCESS_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = EnvRestore::capture(&["HOST", "PORT", "RUST_LOG"]);

    for key in ["HOST", "PORT", "RUST_LOG"] {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    f()
}

/// Runs `f` with the working directory set to a fresh temporary directory
/// holding `server.toml` with `contents`.
///
/// The previous working directory is restored afterwards, even if `f` panics.
pub fn with_server_toml_in_cwd<F, R>(contents: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = PROCESS_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("server.toml"), contents).expect("write server.toml");

    let _restore = CwdRestore {
        previous: std::env::current_dir().expect("read current dir"),
    };
    std::env::set_current_dir(dir.path()).expect("enter temp dir");

    f()
}

/// Writes `contents` to a temporary `.toml` file that lives as long as the
/// returned handle.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

struct EnvRestore {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvRestore {
    fn capture(keys: &[&'static str]) -> Self {
        Self {
            saved: keys.iter().map(|k| (*k, std::env::var(k).ok())).collect(),
        }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

struct CwdRestore {
    previous: PathBuf,
}

impl Drop for CwdRestore {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}
