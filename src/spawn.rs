//! Forks and execs the initial tracee, handing control to the kernel's
//! trace-me facility before the target program's image is loaded.

use crate::error::{Result, TraceError};
use nix::fcntl::{open, OFlag};
use nix::sys::ptrace;
use nix::sys::signal::{raise, Signal};
use nix::sys::stat::Mode;
use nix::unistd::{self, Pid, SysconfVar};
use std::collections::HashMap;
use std::io;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolve `program` the way a shell would: absolute paths are used as-is,
/// paths containing a separator are resolved against the current
/// directory, and anything else is searched component-by-component over
/// `$PATH`. Each candidate must exist and have an executable bit set.
pub fn find_program(program: &str) -> Result<PathBuf> {
    let path = Path::new(program);

    if path.is_absolute() {
        return existing_executable(path).ok_or_else(|| TraceError::ProgramNotFound(program.to_string()));
    }

    if program.contains('/') {
        let cwd = std::env::current_dir().map_err(|_| TraceError::ProgramNotFound(program.to_string()))?;
        return existing_executable(&cwd.join(path))
            .ok_or_else(|| TraceError::ProgramNotFound(program.to_string()));
    }

    let path_var = std::env::var_os("PATH").unwrap_or_default();
    std::env::split_paths(&path_var)
        .find_map(|dir| existing_executable(&dir.join(path)))
        .ok_or_else(|| TraceError::ProgramNotFound(program.to_string()))
}

fn existing_executable(path: &Path) -> Option<PathBuf> {
    use std::os::unix::fs::PermissionsExt;
    let metadata = std::fs::metadata(path).ok()?;
    (metadata.is_file() && metadata.permissions().mode() & 0o111 != 0).then(|| path.to_path_buf())
}

/// Forks, requests trace-me, closes inherited descriptors, optionally
/// redirects stdout/stderr to the null device, stops itself, then execs
/// `argv[0]` (resolved via [`find_program`]) with `argv` as the argument
/// vector and `env` as the environment (inherited when absent). Returns
/// the child's pid to the caller once it has raised its own stop signal.
pub fn spawn(argv: &[String], env: Option<&HashMap<String, String>>, quiet: bool) -> Result<Pid> {
    let Some(program) = argv.first() else {
        return Err(TraceError::SpawnFailed("empty argument vector".to_string()));
    };
    let resolved = find_program(program)?;

    let mut cmd = Command::new(&resolved);
    cmd.arg0(program);
    cmd.args(&argv[1..]);
    if let Some(vars) = env {
        cmd.env_clear();
        cmd.envs(vars);
    }

    // Safety: the closure only calls async-signal-safe primitives (ptrace,
    // close, dup2, raise) between fork and exec, as pre_exec requires.
    unsafe {
        cmd.pre_exec(move || {
            ptrace::traceme().map_err(to_io_error)?;
            close_inherited_fds();
            if quiet {
                redirect_to_null();
            }
            raise(Signal::SIGSTOP).map_err(to_io_error)?;
            Ok(())
        });
    }

    let child = cmd.spawn().map_err(|e| TraceError::SpawnFailed(e.to_string()))?;
    let pid = Pid::from_raw(child.id() as i32);
    // We track this pid ourselves via the TracedProcessTable from here on;
    // drop the std::process::Child handle without letting it reap anything.
    std::mem::forget(child);
    Ok(pid)
}

fn close_inherited_fds() {
    let open_max = unistd::sysconf(SysconfVar::OPEN_MAX).ok().flatten().unwrap_or(256);
    for fd in 3..open_max {
        let _ = unistd::close(fd as i32);
    }
}

fn redirect_to_null() {
    match open("/dev/null", OFlag::O_RDWR, Mode::empty()) {
        Ok(null_fd) => {
            let _ = unistd::dup2(null_fd, 1);
            let _ = unistd::dup2(null_fd, 2);
            if null_fd > 2 {
                let _ = unistd::close(null_fd);
            }
        }
        Err(_) => {
            let _ = unistd::close(1);
            let _ = unistd::close(2);
        }
    }
}

fn to_io_error(e: nix::Error) -> io::Error {
    io::Error::from_raw_os_error(e as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_program_resolves_absolute_path() {
        assert_eq!(find_program("/bin/sh").unwrap(), PathBuf::from("/bin/sh"));
    }

    #[test]
    fn find_program_fails_on_nonexistent_absolute_path() {
        assert!(matches!(find_program("/no/such/binary"), Err(TraceError::ProgramNotFound(_))));
    }

    #[test]
    fn find_program_searches_path_for_bare_names() {
        let resolved = find_program("true").expect("true(1) should be on PATH in any POSIX test env");
        assert!(resolved.is_absolute());
        assert_eq!(resolved.file_name().unwrap(), "true");
    }

    #[test]
    fn find_program_resolves_relative_path_against_cwd() {
        let resolved = find_program("./true");
        // Only meaningful if ./true happens to exist in cwd; otherwise it
        // must fail closed rather than silently fall back to PATH search.
        if let Ok(path) = resolved {
            assert!(path.is_absolute());
        } else {
            assert!(matches!(resolved, Err(TraceError::ProgramNotFound(_))));
        }
    }

    #[test]
    fn find_program_fails_on_unknown_bare_name() {
        assert!(matches!(
            find_program("not-a-real-command-xyz"),
            Err(TraceError::ProgramNotFound(_))
        ));
    }
}
