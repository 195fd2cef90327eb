//! A Linux ptrace-based system-call tracing engine.
//!
//! Spawns a target program, attaches to it and every descendant it
//! forks, and turns the kernel's wait-status stream into a sequence of
//! decoded syscall records and process lifecycle events. See
//! [`supervisor::Supervisor`] for the entry point.

pub mod arch;
pub mod error;
pub mod event;
pub mod process;
pub mod spawn;
pub mod supervisor;
pub mod syscall_record;
pub mod table;

pub use error::{Result, TraceError};
pub use event::ProcessEvent;
pub use supervisor::{Config, Consumer, Supervisor};
pub use syscall_record::{ParamKind, SyscallParam, SyscallRecord};
