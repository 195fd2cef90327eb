//! Register access and static tables for x86_64 Linux.

mod tables;

use crate::error::{Result, StringDecodeError, TraceError};
use nix::libc::user_regs_struct;
use nix::sys::ptrace;
use nix::unistd::Pid;

pub type Registers = user_regs_struct;

/// Number of argument registers a syscall ever has on this architecture.
pub const ARG_COUNT: usize = 6;

pub fn read_registers(pid: Pid) -> Result<Registers> {
    ptrace::getregs(pid).map_err(|source| TraceError::KernelOperationFailed { pid, source })
}

pub fn read_syscall_number(pid: Pid) -> Result<u64> {
    Ok(read_registers(pid)?.orig_rax)
}

pub fn arguments(regs: &Registers) -> [u64; ARG_COUNT] {
    [regs.rdi, regs.rsi, regs.rdx, regs.r10, regs.r8, regs.r9]
}

pub fn result(regs: &Registers) -> i64 {
    regs.rax as i64
}

pub fn name_of(num: u64) -> &'static str {
    tables::NAMES
        .iter()
        .find(|&&(n, _)| n == num)
        .map(|&(_, name)| name)
        .unwrap_or("unknown")
}

pub fn prototype_of(name: &str) -> &'static [(&'static str, &'static str)] {
    tables::PROTOTYPES
        .iter()
        .find(|&&(n, _)| n == name)
        .map(|&(_, proto)| proto)
        .unwrap_or(&[("?", "?")])
}

/// Read a NUL-terminated byte string out of the tracee's address space,
/// one word at a time, stopping at (but not including) the terminator.
pub fn read_cstring(pid: Pid, address: u64) -> std::result::Result<Vec<u8>, StringDecodeError> {
    let mut bytes = Vec::new();
    let mut addr = address;
    'outer: loop {
        let word = ptrace::read(pid, addr as *mut _).map_err(|source| StringDecodeError::ReadError {
            addr: address,
            source,
        })?;
        let word_bytes = word.to_ne_bytes();
        for &b in &word_bytes {
            if b == 0 {
                break 'outer;
            }
            bytes.push(b);
        }
        addr += word_bytes.len() as u64;
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_of_known_syscalls() {
        assert_eq!(name_of(0), "read");
        assert_eq!(name_of(1), "write");
        assert_eq!(name_of(59), "execve");
        assert_eq!(name_of(257), "openat");
    }

    #[test]
    fn name_of_unknown_falls_back() {
        assert_eq!(name_of(99_999), "unknown");
    }

    #[test]
    fn prototype_of_known_has_matching_arity_hints() {
        let proto = prototype_of("openat");
        assert_eq!(proto.len(), 4);
        assert_eq!(proto[1].1, "filename");
    }

    #[test]
    fn prototype_of_unknown_falls_back() {
        assert_eq!(prototype_of("not_a_syscall"), &[("?", "?")]);
    }

    #[test]
    fn arguments_reads_the_syscall_abi_registers() {
        let mut regs: Registers = unsafe { std::mem::zeroed() };
        regs.rdi = 1;
        regs.rsi = 2;
        regs.rdx = 3;
        regs.r10 = 4;
        regs.r8 = 5;
        regs.r9 = 6;
        assert_eq!(arguments(&regs), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn result_reads_rax() {
        let mut regs: Registers = unsafe { std::mem::zeroed() };
        regs.rax = (-22i64) as u64;
        assert_eq!(result(&regs), -22);
    }
}
