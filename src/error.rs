//! Error taxonomy for the tracing engine.
//!
//! Mirrors the closed set of failure modes a ptrace supervisor can hit.
//! Most are fatal to the current loop iteration. A single syscall
//! parameter's string decode failing is not one of them: it is recovered
//! locally inside [`crate::syscall_record::SyscallRecord::collect_params`],
//! which stores the [`StringDecodeError`] on the offending
//! [`crate::syscall_record::SyscallParam`] instead of failing the whole
//! record, so no `TraceError` variant carries it.

use nix::unistd::Pid;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("program not found on PATH: {0}")]
    ProgramNotFound(String),

    #[error("failed to spawn traced child: {0}")]
    SpawnFailed(String),

    #[error("process {0} is already traced")]
    AlreadyTraced(Pid),

    #[error("unknown process {0}")]
    UnknownProcess(Pid),

    #[error("unrecognized wait status for {pid}: {status:#x}")]
    UnknownEvent { pid: Pid, status: i32 },

    #[error("ptrace operation failed for {pid}: {source}")]
    KernelOperationFailed {
        pid: Pid,
        #[source]
        source: nix::Error,
    },
}

/// Failure modes specific to reading a NUL-terminated string out of a
/// tracee's address space: the memory may simply be unreadable, or it may
/// be readable but not valid text.
#[derive(Error, Debug)]
pub enum StringDecodeError {
    #[error("could not read tracee memory at {addr:#x}: {source}")]
    ReadError {
        addr: u64,
        #[source]
        source: nix::Error,
    },

    #[error("tracee memory at {addr:#x} is not valid UTF-8: {source}")]
    DecodeError {
        addr: u64,
        #[source]
        source: std::str::Utf8Error,
    },
}

pub type Result<T> = std::result::Result<T, TraceError>;
