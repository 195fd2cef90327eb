//! Insertion-ordered pid → [`TracedProcess`] table.

use crate::error::{Result, TraceError};
use crate::process::TracedProcess;
use indexmap::IndexMap;
use nix::unistd::Pid;

/// The supervisor's exclusive view of every process it currently has a
/// tracing relationship with.
#[derive(Debug, Default)]
pub struct TracedProcessTable {
    entries: IndexMap<Pid, TracedProcess>,
}

impl TracedProcessTable {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Idempotent: if `pid` is already present, returns the existing
    /// record unchanged and only emits a debug trace. Used for the
    /// trace-me / fork-adoption path, where seeing the same pid twice is
    /// expected (the STOP-before-FORK race).
    pub fn insert(&mut self, process: TracedProcess) -> &mut TracedProcess {
        let pid = process.pid;
        if self.entries.contains_key(&pid) {
            tracing::debug!(%pid, "insert: pid already present, ignoring");
        } else {
            tracing::debug!(%pid, "insert: new tracee");
            self.entries.insert(pid, process);
        }
        self.entries.get_mut(&pid).expect("just inserted or already present")
    }

    /// Non-idempotent variant for the attach path: fails with
    /// `AlreadyTraced` on collision instead of silently keeping the
    /// existing record.
    pub fn add(&mut self, process: TracedProcess) -> Result<&mut TracedProcess> {
        let pid = process.pid;
        if self.entries.contains_key(&pid) {
            return Err(TraceError::AlreadyTraced(pid));
        }
        self.entries.insert(pid, process);
        Ok(self.entries.get_mut(&pid).expect("just inserted"))
    }

    pub fn get(&self, pid: Pid) -> Option<&TracedProcess> {
        self.entries.get(&pid)
    }

    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut TracedProcess> {
        self.entries.get_mut(&pid)
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.entries.contains_key(&pid)
    }

    /// Detaches the kernel tracing relationship, then drops the record.
    /// Fails with `UnknownProcess` if `pid` isn't in the table.
    pub fn remove(&mut self, pid: Pid) -> Result<()> {
        let mut process = self.entries.shift_remove(&pid).ok_or(TraceError::UnknownProcess(pid))?;
        process.detach()?;
        tracing::debug!(%pid, "removed");
        Ok(())
    }

    /// Iterate in insertion order — also the order `quit()` tears tracees
    /// down in.
    pub fn iter(&self) -> impl Iterator<Item = &TracedProcess> {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TracedProcess> {
        self.entries.values_mut()
    }

    pub fn pop_any(&mut self) -> Option<TracedProcess> {
        self.entries.pop().map(|(_, process)| process)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Detach every remaining tracee and clear the table. Used both for
    /// ordinary shutdown and for scoped cleanup when a consumer hook
    /// panics or returns an error mid-loop. Iterates in reverse insertion
    /// order, so the most recently adopted tracee (typically the deepest
    /// descendant) is detached first.
    pub fn quit(&mut self) {
        for process in self.entries.values_mut().rev() {
            if let Err(source) = process.detach() {
                tracing::warn!(pid = %process.pid, %source, "detach during shutdown failed");
            }
        }
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traced(pid: i32) -> TracedProcess {
        TracedProcess::new_traced_me(Pid::from_raw(pid), None)
    }

    #[test]
    fn insert_is_idempotent_on_collision() {
        let mut table = TracedProcessTable::new();
        table.insert(traced(10));
        table.insert(traced(10));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn add_fails_on_collision() {
        let mut table = TracedProcessTable::new();
        table.add(traced(10)).unwrap();
        assert!(matches!(table.add(traced(10)), Err(TraceError::AlreadyTraced(_))));
    }

    #[test]
    fn remove_unknown_pid_fails() {
        let mut table = TracedProcessTable::new();
        assert!(matches!(table.remove(Pid::from_raw(999)), Err(TraceError::UnknownProcess(_))));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut table = TracedProcessTable::new();
        table.insert(traced(3));
        table.insert(traced(1));
        table.insert(traced(2));
        let pids: Vec<i32> = table.iter().map(|p| p.pid.as_raw()).collect();
        assert_eq!(pids, vec![3, 1, 2]);
    }

    #[test]
    fn is_empty_reflects_contents() {
        let mut table = TracedProcessTable::new();
        assert!(table.is_empty());
        table.insert(traced(1));
        assert!(!table.is_empty());
    }
}
