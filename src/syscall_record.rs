//! A single in-flight syscall, tracked across its two observable stops.

use crate::arch;
use crate::error::{Result, StringDecodeError};
use nix::unistd::Pid;
use std::fmt;

/// How a [`SyscallParam`]'s raw word should be interpreted for display.
///
/// Decided once, statically, from the prototype entry — never from the
/// raw value itself, so we never speculatively dereference a word that
/// merely looks like a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Address,
    Number,
}

fn classify(type_string: &str, name: &str) -> ParamKind {
    const STRING_NAMES: &[&str] = &["filename", "pathname", "oldname", "newname"];
    if STRING_NAMES.contains(&name) {
        ParamKind::String
    } else if type_string.contains('*') {
        ParamKind::Address
    } else {
        ParamKind::Number
    }
}

/// One positional argument of an in-flight syscall.
#[derive(Debug, Clone)]
pub struct SyscallParam {
    pub type_string: &'static str,
    pub name: &'static str,
    pub raw: u64,
    pub kind: ParamKind,
    /// Only ever populated for [`ParamKind::String`]. `Some(Err(_))` means
    /// the tracee's memory was unreadable or not valid text — recovered
    /// locally, rendering falls back to the raw numeric form.
    pub decoded: Option<std::result::Result<String, StringDecodeError>>,
}

impl fmt::Display for SyscallParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.decoded) {
            (ParamKind::String, Some(Ok(s))) => {
                write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('\n', "\\n"))
            }
            (ParamKind::Address, _) | (ParamKind::String, _) => write!(f, "{:#x}", self.raw),
            (ParamKind::Number, _) => write!(f, "{}", self.raw),
        }
    }
}

/// Two-state machine a syscall passes through: collected on entry,
/// resolved on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyscallState {
    Enter,
    Exit,
}

/// A single syscall an observed process is (or was) in the middle of.
#[derive(Debug, Clone)]
pub struct SyscallRecord {
    pub number: u64,
    pub name: &'static str,
    pub prototype: &'static [(&'static str, &'static str)],
    pub params: Option<Vec<SyscallParam>>,
    pub result: Option<i64>,
    pub state: SyscallState,
}

impl SyscallRecord {
    /// Construct at syscall-enter: reads the call number and snapshots
    /// ENTER state. Arguments are left uncollected until
    /// [`collect_params`](Self::collect_params) is called.
    pub fn enter(pid: Pid) -> Result<Self> {
        let number = arch::read_syscall_number(pid)?;
        let name = arch::name_of(number);
        let prototype = arch::prototype_of(name);
        Ok(Self {
            number,
            name,
            prototype,
            params: None,
            result: None,
            state: SyscallState::Enter,
        })
    }

    /// Reads registers once, pairs the six raw argument words positionally
    /// with the prototype, and decodes STRING-kind parameters immediately.
    /// Safe to call more than once: later calls are no-ops returning the
    /// cached list.
    pub fn collect_params(&mut self, pid: Pid) -> Result<&[SyscallParam]> {
        if self.params.is_none() {
            let regs = arch::read_registers(pid)?;
            let raw_args = arch::arguments(&regs);

            let mut params = Vec::with_capacity(self.prototype.len());
            for (idx, &(type_string, name)) in self.prototype.iter().enumerate() {
                let raw = raw_args.get(idx).copied().unwrap_or(0);
                let kind = classify(type_string, name);
                let decoded = if kind == ParamKind::String {
                    Some(
                        arch::read_cstring(pid, raw).and_then(|bytes| {
                            String::from_utf8(bytes).map_err(|e| StringDecodeError::DecodeError {
                                addr: raw,
                                source: e.utf8_error(),
                            })
                        }),
                    )
                } else {
                    None
                };
                if let Some(Err(ref source)) = decoded {
                    tracing::debug!(
                        syscall = self.name,
                        param_type = type_string,
                        param = name,
                        error = %source,
                        "string parameter decode failed, falling back to raw value"
                    );
                }
                params.push(SyscallParam {
                    type_string,
                    name,
                    raw,
                    kind,
                    decoded,
                });
            }
            self.params = Some(params);
        }
        Ok(self.params.as_deref().unwrap_or(&[]))
    }

    /// Transitions to EXIT and records the return value. Must be called at
    /// most once; calling it twice is a programming error, not a recoverable
    /// one, since the kernel only reports a result once per syscall.
    pub fn collect_result(&mut self, pid: Pid) -> Result<i64> {
        assert_eq!(
            self.state,
            SyscallState::Enter,
            "collect_result called twice on the same syscall record"
        );
        let regs = arch::read_registers(pid)?;
        let result = arch::result(&regs);
        self.result = Some(result);
        self.state = SyscallState::Exit;
        Ok(result)
    }

}

impl fmt::Display for SyscallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if let Some(params) = &self.params {
            for (idx, param) in params.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{param}")?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(type_string: &'static str, name: &'static str, raw: u64) -> SyscallParam {
        let kind = classify(type_string, name);
        SyscallParam { type_string, name, raw, kind, decoded: None }
    }

    #[test]
    fn classify_matches_string_dereference_hints() {
        assert_eq!(classify("const char*", "filename"), ParamKind::String);
        assert_eq!(classify("const char*", "pathname"), ParamKind::String);
        assert_eq!(classify("const char*", "oldname"), ParamKind::String);
        assert_eq!(classify("const char*", "newname"), ParamKind::String);
    }

    #[test]
    fn classify_falls_back_to_address_for_other_pointers() {
        assert_eq!(classify("struct stat*", "statbuf"), ParamKind::Address);
    }

    #[test]
    fn classify_falls_back_to_number_otherwise() {
        assert_eq!(classify("int", "flags"), ParamKind::Number);
        assert_eq!(classify("umode_t", "mode"), ParamKind::Number);
    }

    #[test]
    fn number_param_renders_decimal() {
        assert_eq!(param("int", "flags", 42).to_string(), "42");
    }

    #[test]
    fn address_param_renders_hex() {
        assert_eq!(param("struct stat*", "statbuf", 0xdead).to_string(), "0xdead");
    }

    #[test]
    fn undecoded_string_param_falls_back_to_hex() {
        assert_eq!(param("const char*", "filename", 0x10).to_string(), "0x10");
    }

    #[test]
    fn decoded_string_param_renders_quoted_and_escapes_newline() {
        let mut p = param("const char*", "filename", 0x10);
        p.decoded = Some(Ok("line1\nline2".to_string()));
        assert_eq!(p.to_string(), "\"line1\\nline2\"");
    }

    #[test]
    fn record_renders_name_and_params_in_order() {
        let record = SyscallRecord {
            number: 2,
            name: "open",
            prototype: &[("const char*", "filename"), ("int", "flags")],
            params: Some(vec![
                {
                    let mut p = param("const char*", "filename", 1);
                    p.decoded = Some(Ok("/etc/hostname".to_string()));
                    p
                },
                param("int", "flags", 0),
            ]),
            result: Some(3),
            state: SyscallState::Exit,
        };
        assert_eq!(record.to_string(), "open(\"/etc/hostname\", 0)");
    }
}
