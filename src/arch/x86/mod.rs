//! Register access and static tables for 32-bit (i686) Linux.

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
    Ok(read_registers(pid)?.orig_eax as u32 as u64)
}

/// The six argument words come from (EBX, ECX, EDX, ESI, EDI, EBP), each
/// masked to 32 bits — the registers are 32-bit wide, but the kernel's
/// `user_regs_struct` stores them widened to `i32`/`u32` native words.
pub fn arguments(regs: &Registers) -> [u64; ARG_COUNT] {
    [
        regs.ebx as u32 as u64,
        regs.ecx as u32 as u64,
        regs.edx as u32 as u64,
        regs.esi as u32 as u64,
        regs.edi as u32 as u64,
        regs.ebp as u32 as u64,
    ]
}

pub fn result(regs: &Registers) -> i64 {
    regs.eax as i32 as i64
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
/// `ptrace::read` returns a `c_long`, 4 bytes wide on this architecture —
/// the word size is taken from the value itself rather than assumed, so
/// this doesn't silently skip half of every word like a hardcoded 8-byte
/// stride would.
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
        assert_eq!(name_of(3), "read");
        assert_eq!(name_of(4), "write");
        assert_eq!(name_of(11), "execve");
        assert_eq!(name_of(295), "openat");
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
    fn arguments_reads_and_masks_the_syscall_abi_registers() {
        let mut regs: Registers = unsafe { std::mem::zeroed() };
        regs.ebx = 1;
        regs.ecx = 2;
        regs.edx = 3;
        regs.esi = 4;
        regs.edi = 5;
        regs.ebp = 6;
        assert_eq!(arguments(&regs), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn result_reads_eax_sign_extended() {
        let mut regs: Registers = unsafe { std::mem::zeroed() };
        regs.eax = (-22i32) as u32;
        assert_eq!(result(&regs), -22);
    }
}
