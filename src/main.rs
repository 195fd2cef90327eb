use anyhow::{Context, Result};
use clap::Parser;
use nix::unistd::Pid;
use tracewright::{Config, Consumer, ProcessEvent, Supervisor, SyscallRecord};

mod cli;

use cli::Cli;

/// The demo binary's only consumer: print one line per completed syscall
/// and a couple of lifecycle breadcrumbs to stderr. No filtering, no
/// statistics, no alternate output formats — that's the CLI front-end
/// this crate deliberately doesn't build.
struct PrintingConsumer;

impl Consumer for PrintingConsumer {
    fn on_tracing_started(&mut self, pid: Pid) {
        eprintln!("tracewright: tracing pid {pid}");
    }

    fn on_syscall_exit(&mut self, pid: Pid, record: &SyscallRecord) {
        let result = record.result.unwrap_or_default();
        println!("[{pid}] {record} = {result}");
    }

    fn on_exit(&mut self, event: &ProcessEvent) {
        if let ProcessEvent::Exited(pid, code) = *event {
            eprintln!("tracewright: pid {pid} exited with status {code}");
        }
    }

    fn on_exiting(&mut self, event: &ProcessEvent) {
        if let ProcessEvent::Exiting(pid, code) = *event {
            tracing::debug!(%pid, code, "process is exiting");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Cli::parse();
    let arguments = args.command.context("usage: tracewright -- COMMAND [ARGS...]")?;

    let config = Config { arguments, ..Config::default() };
    let mut supervisor = Supervisor::new(config);
    let mut consumer = PrintingConsumer;

    supervisor.spawn_and_run(&mut consumer).context("tracing session failed")?;
    Ok(())
}
