//! Property-based tests for the pure, process-independent invariants in
//! spec §8 — table bookkeeping doesn't need a live tracee to exercise.

use nix::unistd::Pid;
use proptest::prelude::*;
use std::collections::BTreeSet;
use tracewright::process::TracedProcess;
use tracewright::table::TracedProcessTable;

fn pid_strategy() -> impl Strategy<Value = i32> {
    1..2000i32
}

proptest! {
    /// Invariant: pid uniqueness — however many times a pid is inserted,
    /// it occupies exactly one slot in the table.
    #[test]
    fn insert_never_duplicates_a_pid(pids in prop::collection::vec(pid_strategy(), 0..50)) {
        let mut table = TracedProcessTable::new();
        for &raw in &pids {
            table.insert(TracedProcess::new_traced_me(Pid::from_raw(raw), None));
        }
        let distinct: BTreeSet<i32> = pids.into_iter().collect();
        prop_assert_eq!(table.len(), distinct.len());
    }

    /// Invariant: iteration order is stable across inserts — a pid's
    /// position is fixed by its *first* insertion, later idempotent
    /// re-inserts never move it.
    #[test]
    fn iteration_order_reflects_first_insertion(pids in prop::collection::vec(pid_strategy(), 0..50)) {
        let mut table = TracedProcessTable::new();
        let mut first_seen = Vec::new();
        for &raw in &pids {
            if !first_seen.contains(&raw) {
                first_seen.push(raw);
            }
            table.insert(TracedProcess::new_traced_me(Pid::from_raw(raw), None));
        }
        let observed: Vec<i32> = table.iter().map(|p| p.pid.as_raw()).collect();
        prop_assert_eq!(observed, first_seen);
    }

    /// Invariant: remove() only ever removes exactly the named pid, and a
    /// subsequent remove of the same pid fails with UnknownProcess.
    #[test]
    fn remove_is_precise_and_not_repeatable(pids in prop::collection::hash_set(pid_strategy(), 1..30)) {
        let mut table = TracedProcessTable::new();
        let pids: Vec<i32> = pids.into_iter().collect();
        for &raw in &pids {
            table.insert(TracedProcess::new_traced_me(Pid::from_raw(raw), None));
        }
        let target = pids[0];
        prop_assert!(table.remove(Pid::from_raw(target)).is_ok());
        prop_assert!(!table.contains(Pid::from_raw(target)));
        prop_assert_eq!(table.len(), pids.len() - 1);
        prop_assert!(table.remove(Pid::from_raw(target)).is_err());
    }
}
