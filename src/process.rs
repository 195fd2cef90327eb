//! A single traced process: kernel-facing attach/resume primitives plus
//! whatever syscall it is currently in the middle of.

use crate::error::{Result, TraceError};
use crate::syscall_record::SyscallRecord;
use nix::sys::ptrace;
pub use nix::sys::ptrace::Options as TraceOptions;
use nix::sys::signal::Signal;
use nix::unistd::Pid;

/// The trap signal ptrace delivers for syscall-stops and most ptrace-event
/// stops; resuming with this signal pending would just re-deliver a stop
/// the tracee never actually raised, so it is always substituted with 0.
const TRAP: i32 = Signal::SIGTRAP as i32;

/// One process the supervisor is watching: its kernel-side attach state,
/// its pending trace-option mask, and (if any) the syscall it is
/// currently between the ENTER and EXIT stops of.
#[derive(Debug)]
pub struct TracedProcess {
    pub pid: Pid,
    /// Weak back-reference: the parent may be removed from the table
    /// independently without invalidating this process.
    pub parent: Option<Pid>,
    attached: bool,
    pub stopped: bool,
    pub options: TraceOptions,
    syscall: Option<SyscallRecord>,
}

impl TracedProcess {
    /// A process the Spawner already put under trace-me; the supervisor
    /// only needs to track it, not attach to it.
    pub fn new_traced_me(pid: Pid, parent: Option<Pid>) -> Self {
        Self {
            pid,
            parent,
            attached: true,
            stopped: true,
            options: TraceOptions::empty(),
            syscall: None,
        }
    }

    /// A process the kernel has already started tracing on our behalf —
    /// a fork/vfork child of an existing tracee with `TRACEFORK`/`TRACEVFORK`
    /// set, which inherits the tracing relationship automatically.
    pub fn new_forked(pid: Pid, parent: Option<Pid>) -> Self {
        Self {
            pid,
            parent,
            attached: true,
            stopped: true,
            options: TraceOptions::empty(),
            syscall: None,
        }
    }

    /// A process discovered out-of-band (the attach-path), not yet
    /// confirmed attached from this side — `attach()` must be called
    /// before it can be resumed.
    pub fn new_unattached(pid: Pid, parent: Option<Pid>) -> Self {
        Self {
            pid,
            parent,
            attached: false,
            stopped: false,
            options: TraceOptions::empty(),
            syscall: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Idempotent against the attached flag: calls the kernel attach
    /// primitive only on the false-to-true edge.
    pub fn attach(&mut self) -> Result<()> {
        if !self.attached {
            ptrace::attach(self.pid).map_err(|source| TraceError::KernelOperationFailed {
                pid: self.pid,
                source,
            })?;
            self.attached = true;
            tracing::debug!(pid = %self.pid, "attached");
        }
        Ok(())
    }

    /// Idempotent against the attached flag: calls the kernel detach
    /// primitive only on the true-to-false edge.
    pub fn detach(&mut self) -> Result<()> {
        if self.attached {
            let _ = ptrace::detach(self.pid, None);
            self.attached = false;
            tracing::debug!(pid = %self.pid, "detached");
        }
        Ok(())
    }

    pub fn set_options(&mut self, mask: TraceOptions) -> Result<()> {
        self.options = mask;
        ptrace::setoptions(self.pid, mask)
            .map_err(|source| TraceError::KernelOperationFailed { pid: self.pid, source })
    }

    /// Resume until the next syscall stop. A pending trap signal is
    /// suppressed to 0 so it isn't spuriously re-delivered.
    pub fn syscall(&mut self, signum: Option<i32>) -> Result<()> {
        self.stopped = false;
        let signal = resolve_resume_signal(signum);
        ptrace::syscall(self.pid, signal)
            .map_err(|source| TraceError::KernelOperationFailed { pid: self.pid, source })
    }

    /// Resume without requesting syscall stops (used e.g. to let an
    /// exiting tracee actually exit).
    pub fn cont(&mut self, signum: Option<i32>) -> Result<()> {
        self.stopped = false;
        let signal = resolve_resume_signal(signum);
        ptrace::cont(self.pid, signal)
            .map_err(|source| TraceError::KernelOperationFailed { pid: self.pid, source })
    }

    /// Create and attach a new in-flight syscall record; the slot must be
    /// empty (ENTER only ever follows an EXIT or nothing at all).
    pub fn prepare_syscall_enter(&mut self) -> Result<&mut SyscallRecord> {
        assert!(self.syscall.is_none(), "syscall-enter observed while one is already in flight");
        let record = SyscallRecord::enter(self.pid)?;
        self.syscall = Some(record);
        Ok(self.syscall.as_mut().expect("just inserted"))
    }

    /// Detach and return the in-flight syscall record; the slot must be
    /// non-empty.
    pub fn prepare_syscall_exit(&mut self) -> SyscallRecord {
        self.syscall.take().expect("syscall-exit observed with no syscall in flight")
    }

    /// Drop whatever syscall record is in flight, if any, without
    /// requiring one to be present. Used when an execve invalidates the
    /// tracee's address space mid-syscall.
    pub fn prepare_syscall_exit_if_any(&mut self) -> Option<SyscallRecord> {
        self.syscall.take()
    }

    pub fn in_flight_syscall(&self) -> Option<&SyscallRecord> {
        self.syscall.as_ref()
    }
}

fn resolve_resume_signal(signum: Option<i32>) -> Option<Signal> {
    match signum {
        Some(s) if s == TRAP => None,
        Some(s) => Signal::try_from(s).ok(),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_resume_signal_suppresses_trap() {
        assert_eq!(resolve_resume_signal(Some(TRAP)), None);
    }

    #[test]
    fn resolve_resume_signal_passes_through_other_signals() {
        assert_eq!(resolve_resume_signal(Some(Signal::SIGUSR1 as i32)), Some(Signal::SIGUSR1));
    }

    #[test]
    fn resolve_resume_signal_none_stays_none() {
        assert_eq!(resolve_resume_signal(None), None);
    }

    #[test]
    fn new_traced_me_starts_attached_and_stopped() {
        let p = TracedProcess::new_traced_me(Pid::from_raw(123), None);
        assert!(p.is_attached());
        assert!(p.stopped);
        assert!(p.in_flight_syscall().is_none());
    }

    #[test]
    fn new_unattached_starts_unattached() {
        let p = TracedProcess::new_unattached(Pid::from_raw(123), Some(Pid::from_raw(1)));
        assert!(!p.is_attached());
        assert_eq!(p.parent, Some(Pid::from_raw(1)));
    }

    #[test]
    fn new_forked_starts_attached_and_stopped() {
        let p = TracedProcess::new_forked(Pid::from_raw(124), Some(Pid::from_raw(1)));
        assert!(p.is_attached());
        assert!(p.stopped);
    }
}
