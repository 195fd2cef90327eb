//! Architecture-specific register access, dispatched at compile time.
//!
//! Everything a caller needs is re-exported uniformly from whichever
//! submodule matches the build target, so the rest of the crate never
//! writes a `cfg(target_arch = ...)` itself.

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use self::x86_64::*;

#[cfg(target_arch = "x86")]
mod x86;
#[cfg(target_arch = "x86")]
pub use self::x86::*;

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
compile_error!("tracewright only decodes syscall ABIs for x86_64 and x86 (i686) targets");
