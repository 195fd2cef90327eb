//! Interprets a raw wait-status into one semantically meaningful,
//! exhaustively-matched lifecycle event.

use crate::error::{Result, TraceError};
use nix::sys::ptrace;
use nix::sys::wait::WaitStatus;
use nix::unistd::Pid;

/// One observed lifecycle event for a single tracee. The taxonomy is
/// closed: every wait-status classifies into exactly one of these, or
/// fails with `UnknownEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessEvent {
    Execution(Pid),
    Fork(Pid, Pid),
    Signal {
        pid: Pid,
        /// The signal to resume with — a syscall-trap's sysgood bit is
        /// already stripped here, so this is safe to hand straight to
        /// `TracedProcess::syscall`/`cont`.
        signum: i32,
        /// The raw, unmasked signal number, for consumers that want to
        /// display "what actually arrived".
        raw_signum: i32,
        is_syscall_trap: bool,
    },
    Exiting(Pid, i32),
    Exited(Pid, i32),
    Killed(Pid, i32),
}

impl ProcessEvent {
    pub fn pid(&self) -> Pid {
        match *self {
            ProcessEvent::Execution(pid)
            | ProcessEvent::Fork(pid, _)
            | ProcessEvent::Signal { pid, .. }
            | ProcessEvent::Exiting(pid, _)
            | ProcessEvent::Exited(pid, _)
            | ProcessEvent::Killed(pid, _) => pid,
        }
    }
}

const SIGTRAP: i32 = libc::SIGTRAP;

pub fn classify(status: WaitStatus) -> Result<ProcessEvent> {
    match status {
        WaitStatus::Exited(pid, code) => Ok(ProcessEvent::Exited(pid, code)),

        WaitStatus::Signaled(pid, signal, _core_dumped) => Ok(ProcessEvent::Killed(pid, signal as i32)),

        WaitStatus::PtraceSyscall(pid) => Ok(ProcessEvent::Signal {
            pid,
            signum: SIGTRAP,
            raw_signum: SIGTRAP | 0x80,
            is_syscall_trap: true,
        }),

        WaitStatus::PtraceEvent(pid, signal, event) => classify_ptrace_event(pid, signal as i32, event),

        WaitStatus::Stopped(pid, signal) => Ok(ProcessEvent::Signal {
            pid,
            signum: signal as i32,
            raw_signum: signal as i32,
            is_syscall_trap: false,
        }),

        WaitStatus::Continued(pid) => Err(TraceError::UnknownEvent { pid, status: -1 }),
        WaitStatus::StillAlive => Err(TraceError::UnknownEvent { pid: Pid::from_raw(0), status: -1 }),
    }
}

fn classify_ptrace_event(pid: Pid, signum: i32, event: i32) -> Result<ProcessEvent> {
    match event {
        libc::PTRACE_EVENT_EXEC => Ok(ProcessEvent::Execution(pid)),
        libc::PTRACE_EVENT_FORK | libc::PTRACE_EVENT_VFORK => {
            let child_raw = ptrace::getevent(pid).map_err(|source| TraceError::KernelOperationFailed {
                pid,
                source,
            })?;
            Ok(ProcessEvent::Fork(pid, Pid::from_raw(child_raw as i32)))
        }
        libc::PTRACE_EVENT_EXIT => {
            let exit_status =
                ptrace::getevent(pid).map_err(|source| TraceError::KernelOperationFailed { pid, source })?;
            Ok(ProcessEvent::Exiting(pid, exit_status as i32))
        }
        _ => Ok(ProcessEvent::Signal { pid, signum, raw_signum: signum, is_syscall_trap: false }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::sys::signal::Signal;

    #[test]
    fn exited_classifies_directly() {
        let pid = Pid::from_raw(42);
        assert_eq!(classify(WaitStatus::Exited(pid, 0)).unwrap(), ProcessEvent::Exited(pid, 0));
    }

    #[test]
    fn signaled_classifies_as_killed() {
        let pid = Pid::from_raw(42);
        let event = classify(WaitStatus::Signaled(pid, Signal::SIGKILL, false)).unwrap();
        assert_eq!(event, ProcessEvent::Killed(pid, Signal::SIGKILL as i32));
    }

    #[test]
    fn ptrace_syscall_sets_is_syscall_trap_and_strips_sysgood() {
        let pid = Pid::from_raw(42);
        let event = classify(WaitStatus::PtraceSyscall(pid)).unwrap();
        match event {
            ProcessEvent::Signal { signum, raw_signum, is_syscall_trap, .. } => {
                assert!(is_syscall_trap);
                assert_eq!(signum, SIGTRAP);
                assert_eq!(raw_signum, SIGTRAP | 0x80);
            }
            other => panic!("expected Signal, got {other:?}"),
        }
    }

    #[test]
    fn plain_stop_is_not_a_syscall_trap() {
        let pid = Pid::from_raw(42);
        let event = classify(WaitStatus::Stopped(pid, Signal::SIGSTOP)).unwrap();
        match event {
            ProcessEvent::Signal { signum, is_syscall_trap, .. } => {
                assert!(!is_syscall_trap);
                assert_eq!(signum, Signal::SIGSTOP as i32);
            }
            other => panic!("expected Signal, got {other:?}"),
        }
    }

    #[test]
    fn ptrace_event_exec_classifies_as_execution() {
        let pid = Pid::from_raw(42);
        let event = classify_ptrace_event(pid, SIGTRAP, libc::PTRACE_EVENT_EXEC).unwrap();
        assert_eq!(event, ProcessEvent::Execution(pid));
    }

    #[test]
    fn pid_accessor_covers_every_variant() {
        let pid = Pid::from_raw(7);
        assert_eq!(ProcessEvent::Execution(pid).pid(), pid);
        assert_eq!(ProcessEvent::Fork(pid, Pid::from_raw(8)).pid(), pid);
        assert_eq!(ProcessEvent::Exited(pid, 0).pid(), pid);
        assert_eq!(ProcessEvent::Killed(pid, 9).pid(), pid);
        assert_eq!(ProcessEvent::Exiting(pid, 0).pid(), pid);
    }
}
