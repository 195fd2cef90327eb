//! The event pump: waits on any tracee, classifies the wait-status,
//! advances the per-process syscall state machine, and dispatches to the
//! consumer's hooks.

use crate::error::{Result, TraceError};
use crate::event::{self, ProcessEvent};
use crate::process::{TraceOptions, TracedProcess};
use crate::spawn;
use crate::syscall_record::SyscallRecord;
use crate::table::TracedProcessTable;
use nix::sys::signal::Signal;
use nix::sys::wait::waitpid;
use nix::unistd::Pid;
use std::collections::HashMap;

/// Everything the Supervisor needs at construction time. Mirrors
/// `spec.md`'s enumerated configuration surface exactly — there is no
/// file format behind this, just a plain struct.
#[derive(Debug, Clone)]
pub struct Config {
    /// The target argv; `arguments[0]` is resolved against `PATH`.
    pub arguments: Vec<String>,
    /// `None` means inherit the supervisor's own environment.
    pub environment: Option<HashMap<String, String>>,
    /// Redirect the target's stdout/stderr to the null device.
    pub quiet: bool,
    /// Trace fork/vfork children.
    pub fork_enabled: bool,
    /// Trace exec and process-exit events.
    pub exec_enabled: bool,
    /// Request the sysgood marker on syscall-trap signals.
    pub sysgood_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arguments: Vec::new(),
            environment: None,
            quiet: true,
            fork_enabled: true,
            exec_enabled: true,
            sysgood_enabled: true,
        }
    }
}

impl Config {
    fn trace_options(&self) -> TraceOptions {
        let mut options = TraceOptions::empty();
        if self.fork_enabled {
            options |= TraceOptions::PTRACE_O_TRACEFORK | TraceOptions::PTRACE_O_TRACEVFORK;
        }
        if self.exec_enabled {
            options |= TraceOptions::PTRACE_O_TRACEEXEC | TraceOptions::PTRACE_O_TRACEEXIT;
        }
        if self.sysgood_enabled {
            options |= TraceOptions::PTRACE_O_TRACESYSGOOD;
        }
        options
    }
}

/// The capability set a caller of [`Supervisor::run`] provides. Every
/// member defaults to a no-op, so a consumer only implements the hooks it
/// cares about.
pub trait Consumer {
    fn on_tracing_started(&mut self, _pid: Pid) {}
    fn on_event(&mut self, _event: &ProcessEvent) {}
    fn on_syscall_enter(&mut self, _pid: Pid, _record: &SyscallRecord) {}
    fn on_syscall_exit(&mut self, _pid: Pid, _record: &SyscallRecord) {}
    fn on_exiting(&mut self, _event: &ProcessEvent) {}
    fn on_exit(&mut self, _event: &ProcessEvent) {}
}

/// The event pump itself: owns the Traced-Process Table exclusively and
/// drives it to completion.
pub struct Supervisor {
    table: TracedProcessTable,
    config: Config,
}

impl Supervisor {
    pub fn new(config: Config) -> Self {
        Self { table: TracedProcessTable::new(), config }
    }

    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Spawns the configured target, seeds the Table with it, and runs
    /// the main loop until the Table empties.
    pub fn spawn_and_run(&mut self, consumer: &mut impl Consumer) -> Result<()> {
        let pid = spawn::spawn(&self.config.arguments, self.config.environment.as_ref(), self.config.quiet)?;

        // The child raised SIGSTOP on itself right before exec; this first
        // wait observes that stop and lets us attach options before it
        // ever reaches a syscall.
        waitpid(pid, None).map_err(|source| TraceError::KernelOperationFailed { pid, source })?;

        let mut process = TracedProcess::new_traced_me(pid, None);
        process.set_options(self.config.trace_options())?;
        process.syscall(None)?;
        self.table.insert(process);

        consumer.on_tracing_started(pid);
        self.run(consumer)
    }

    /// Drives the engine until the Traced-Process Table is empty. Any
    /// error — a failed wait, an unclassifiable status, or a failed
    /// dispatch — detaches every remaining tracee before propagating.
    pub fn run(&mut self, consumer: &mut impl Consumer) -> Result<()> {
        while !self.table.is_empty() {
            if let Err(err) = self.step(consumer) {
                self.table.quit();
                return Err(err);
            }
        }
        Ok(())
    }

    fn step(&mut self, consumer: &mut impl Consumer) -> Result<()> {
        let status = waitpid(None, None)
            .map_err(|source| TraceError::KernelOperationFailed { pid: Pid::from_raw(-1), source })?;
        let event = event::classify(status)?;
        consumer.on_event(&event);
        self.dispatch(&event, consumer)
    }

    /// Releases the kernel tracing relationship with every remaining
    /// tracee so they may be reaped or continued by their grandparent.
    pub fn quit(&mut self) {
        self.table.quit();
    }

    fn dispatch(&mut self, event: &ProcessEvent, consumer: &mut impl Consumer) -> Result<()> {
        match *event {
            ProcessEvent::Signal { pid, signum, is_syscall_trap, .. } => {
                self.dispatch_signal(pid, signum, is_syscall_trap, consumer)
            }
            ProcessEvent::Fork(parent_pid, child_pid) => self.dispatch_fork(parent_pid, child_pid),
            ProcessEvent::Execution(pid) => self.dispatch_execution(pid),
            ProcessEvent::Exiting(..) => self.dispatch_exiting(event, consumer),
            ProcessEvent::Exited(pid, _) => self.dispatch_exited(pid, event, consumer),
            ProcessEvent::Killed(pid, _) => self.table.remove(pid),
        }
    }

    fn dispatch_signal(
        &mut self,
        pid: Pid,
        signum: i32,
        is_syscall_trap: bool,
        consumer: &mut impl Consumer,
    ) -> Result<()> {
        // A fork child's own SIGSTOP always needs to be swallowed, never
        // forwarded as a resume signal — forwarding it would just re-stop
        // the tracee before it ever reaches a syscall. This holds
        // regardless of which order the Fork event and this SIGSTOP
        // arrive in: if the child isn't in the table yet, this is the
        // STOP-before-FORK race and we adopt it tentatively (a later Fork
        // event naming the same pid is then a no-op via Table::insert's
        // idempotency); if it's already in the table, `dispatch_fork` got
        // there first and this is just the ordinary confirming stop.
        if signum == Signal::SIGSTOP as i32 {
            if !self.table.contains(pid) {
                self.table.insert(TracedProcess::new_forked(pid, None));
            }
            return self.table.get_mut(pid).ok_or(TraceError::UnknownProcess(pid))?.syscall(None);
        }

        if is_syscall_trap {
            self.advance_syscall_state(pid, consumer)?;
        }

        self.table.get_mut(pid).ok_or(TraceError::UnknownProcess(pid))?.syscall(Some(signum))
    }

    fn advance_syscall_state(&mut self, pid: Pid, consumer: &mut impl Consumer) -> Result<()> {
        let process = self.table.get_mut(pid).ok_or(TraceError::UnknownProcess(pid))?;
        if process.in_flight_syscall().is_none() {
            let record = process.prepare_syscall_enter()?;
            record.collect_params(pid)?;
            consumer.on_syscall_enter(pid, record);
        } else {
            let mut record = process.prepare_syscall_exit();
            record.collect_result(pid)?;
            consumer.on_syscall_exit(pid, &record);
        }
        Ok(())
    }

    fn dispatch_fork(&mut self, parent_pid: Pid, child_pid: Pid) -> Result<()> {
        self.table.insert(TracedProcess::new_forked(child_pid, Some(parent_pid)));
        self.table.get_mut(parent_pid).ok_or(TraceError::UnknownProcess(parent_pid))?.syscall(None)
    }

    fn dispatch_execution(&mut self, pid: Pid) -> Result<()> {
        let process = self.table.get_mut(pid).ok_or(TraceError::UnknownProcess(pid))?;
        // An execve invalidates the address space of any in-flight
        // syscall; the ENTER stop for it (if any) never gets a matching
        // EXIT, so just drop it rather than leave it dangling.
        let _ = process.prepare_syscall_exit_if_any();
        process.syscall(None)
    }

    fn dispatch_exiting(&mut self, event: &ProcessEvent, consumer: &mut impl Consumer) -> Result<()> {
        consumer.on_exiting(event);
        self.table.get_mut(event.pid()).ok_or(TraceError::UnknownProcess(event.pid()))?.cont(None)
    }

    fn dispatch_exited(&mut self, pid: Pid, event: &ProcessEvent, consumer: &mut impl Consumer) -> Result<()> {
        consumer.on_exit(event);
        self.table.remove(pid)
    }
}
