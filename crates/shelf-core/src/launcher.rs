//! Start applications as detached processes
//!
//! The executable is started directly with an explicit argument vector; no
//! shell ever sees the path or the arguments.
//!
//! On Unix the program runs as a grandchild: the forked child starts a new
//! session, forks again and exits at once. We reap that intermediate process
//! right away and the program itself is adopted by init, so nothing here
//! waits on or tracks it afterwards.

use crate::config::Application;
use crate::{Error, Result};
use std::io;
use std::process::{Child, Command, Stdio};
use tracing::{debug, info};

/// Launch `app` and return as soon as the process has been created.
///
/// # Errors
///
/// Returns [`Error::LaunchNotFound`] if `app.path` does not resolve to an
/// executable, or [`Error::Launch`] for any other spawn failure.
pub fn launch(app: &Application) -> Result<()> {
    let mut command = Command::new(&app.path);
    command
        .args(app.argv())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    detach(&mut command);

    let child = command.spawn().map_err(|e| classify(&app.path, e))?;

    info!("Launched '{}' ({})", app.name, app.path);
    reap_intermediate(child);
    Ok(())
}

fn classify(path: &str, error: io::Error) -> Error {
    if error.kind() == io::ErrorKind::NotFound {
        Error::LaunchNotFound {
            path: path.to_string(),
        }
    } else {
        Error::Launch {
            path: path.to_string(),
            source: error,
        }
    }
}

/// Start the program in its own session, one fork removed from us.
///
/// `spawn` only returns once the grandchild has exec'd (or failed to), since
/// it inherits the close-on-exec error pipe. Exec errors therefore still come
/// back through `spawn` with their original `io::ErrorKind`.
#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    // SAFETY: setsid, fork and _exit are async-signal-safe and the closure
    // touches no memory of the parent.
    unsafe {
        command.pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(io::Error::last_os_error());
            }
            match libc::fork() {
                -1 => Err(io::Error::last_os_error()),
                0 => Ok(()),
                _ => libc::_exit(0),
            }
        });
    }
}

#[cfg(not(unix))]
fn detach(_command: &mut Command) {}

/// The intermediate process has already exited, so this does not block.
#[cfg(unix)]
fn reap_intermediate(mut child: Child) {
    match child.wait() {
        Ok(status) => debug!("Intermediate process exited with {status}"),
        Err(e) => debug!("Failed to reap intermediate process: {e}"),
    }
}

#[cfg(not(unix))]
fn reap_intermediate(_child: Child) {}
