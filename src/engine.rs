use crate::error::ProcessFault;
use crate::side::Identity;
use log::{error, trace};
use std::{
    env,
    io::Read,
    process::{Command, Stdio},
    thread,
    time::Duration,
};
use wait_timeout::ChildExt;

pub const DEFAULT_FLAG: &str = "-m";

/// How to start one engine build.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EngineOptions {
    pub dir: String,
    pub cmd: String,
    pub name: Option<String>,
    pub flag: String,
}

impl EngineOptions {
    pub fn new(cmd: &str) -> EngineOptions {
        EngineOptions {
            dir: String::new(),
            cmd: String::from(cmd),
            name: None,
            flag: String::from(DEFAULT_FLAG),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.cmd)
    }
}

/// Sends one textual command to an engine identity and returns its reply.
///
/// Every call is self-contained: the engine keeps the game state between
/// calls, the harness only orders them.
pub trait EngineAdapter {
    fn invoke(&mut self, identity: Identity, command: &str) -> Result<String, ProcessFault>;
}

/// Starts a fresh engine process for every command.
#[derive(Debug)]
pub struct ProcessAdapter {
    engines: [EngineOptions; 2],
    timeout: Option<Duration>,
}

impl ProcessAdapter {
    pub fn new(
        candidate: EngineOptions,
        baseline: EngineOptions,
        timeout: Option<Duration>,
    ) -> ProcessAdapter {
        ProcessAdapter {
            engines: [candidate, baseline],
            timeout,
        }
    }
}

impl EngineAdapter for ProcessAdapter {
    fn invoke(&mut self, identity: Identity, command: &str) -> Result<String, ProcessFault> {
        let options = &self.engines[identity.to_index()];
        let spawn_fault = |source| ProcessFault::Spawn {
            identity,
            cmd: options.cmd.clone(),
            command: String::from(command),
            source,
        };
        let output_fault = |source| ProcessFault::Output {
            identity,
            cmd: options.cmd.clone(),
            command: String::from(command),
            source,
        };

        trace!("{identity} < {command}");

        let working_directory = env::current_dir().map_err(spawn_fault)?.join(&options.dir);
        let mut child = Command::new(&options.cmd)
            .current_dir(working_directory)
            .arg(&options.flag)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_fault)?;

        // Drain stdout on its own thread so a chatty engine cannot block on a
        // full pipe while we wait for it to exit.
        let (send_output, recv_output) = crossbeam_channel::bounded(1);
        if let Some(mut stdout) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let result = stdout.read_to_end(&mut buf).map(|_| buf);
                send_output.send(result).ok();
            });
        } else {
            send_output.send(Ok(Vec::new())).ok();
        }

        let status = match self.timeout {
            None => child.wait().map_err(output_fault)?,
            Some(timeout) => match child.wait_timeout(timeout).map_err(output_fault)? {
                Some(status) => status,
                None => {
                    error!("{identity} (cmd={}) timed out on `{command}`", options.cmd);
                    child.kill().ok();
                    child.wait().ok();
                    return Err(ProcessFault::Timeout {
                        identity,
                        cmd: options.cmd.clone(),
                        command: String::from(command),
                        timeout,
                    });
                }
            },
        };

        let output = recv_output
            .recv()
            .map_err(|_| {
                output_fault(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "stdout reader vanished",
                ))
            })?
            .map_err(output_fault)?;
        let output = String::from_utf8_lossy(&output).into_owned();

        if !status.success() {
            error!(
                "{identity} (cmd={}) exited with {status} on `{command}`",
                options.cmd
            );
            return Err(ProcessFault::ExitStatus {
                identity,
                cmd: options.cmd.clone(),
                command: String::from(command),
                code: status.code(),
            });
        }

        trace!("{identity} > {}", output.trim());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(cmd: &str) -> ProcessAdapter {
        ProcessAdapter::new(EngineOptions::new(cmd), EngineOptions::new(cmd), None)
    }

    #[test]
    fn name_falls_back_to_cmd() {
        let mut options = EngineOptions::new("./chess");
        assert_eq!(options.name(), "./chess");
        assert_eq!(options.flag, "-m");
        options.name = Some(String::from("new"));
        assert_eq!(options.name(), "new");
    }

    #[test]
    fn missing_executable_is_a_spawn_fault() {
        let mut adapter = adapter("./definitely-not-an-engine-binary");
        match adapter.invoke(Identity::Baseline, "switch") {
            Err(ProcessFault::Spawn {
                identity, command, ..
            }) => {
                assert_eq!(identity, Identity::Baseline);
                assert_eq!(command, "switch");
            }
            other => panic!("expected spawn fault, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn passes_flag_and_command_and_captures_stdout() {
        let mut adapter = adapter("echo");
        let output = adapter.invoke(Identity::Candidate, "switch").unwrap();
        assert!(output.contains("switch"), "unexpected output {output:?}");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_an_exit_status_fault() {
        let mut adapter = adapter("false");
        match adapter.invoke(Identity::Candidate, "evaluate") {
            Err(ProcessFault::ExitStatus { code, .. }) => assert_eq!(code, Some(1)),
            other => panic!("expected exit status fault, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn timeout_allows_fast_engines() {
        let mut adapter = ProcessAdapter::new(
            EngineOptions::new("echo"),
            EngineOptions::new("echo"),
            Some(Duration::from_secs(30)),
        );
        assert!(adapter.invoke(Identity::Baseline, "black").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn hung_engine_is_killed_after_timeout() {
        let shell = EngineOptions {
            flag: String::from("-c"),
            ..EngineOptions::new("sh")
        };
        let mut adapter = ProcessAdapter::new(
            shell.clone(),
            shell,
            Some(Duration::from_millis(200)),
        );
        let started = std::time::Instant::now();
        match adapter.invoke(Identity::Candidate, "sleep 5") {
            Err(ProcessFault::Timeout {
                identity, timeout, ..
            }) => {
                assert_eq!(identity, Identity::Candidate);
                assert_eq!(timeout, Duration::from_millis(200));
            }
            other => panic!("expected timeout fault, got {other:?}"),
        }
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
