use crate::side::Identity;
use std::time::Duration;
use thiserror::Error;

/// An engine invocation that did not produce usable output. Never retried.
#[derive(Debug, Error)]
pub enum ProcessFault {
    #[error("could not start {identity} engine `{cmd}` for `{command}`: {source}")]
    Spawn {
        identity: Identity,
        cmd: String,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{identity} engine `{cmd}` failed on `{command}` ({})", exit_description(.code))]
    ExitStatus {
        identity: Identity,
        cmd: String,
        command: String,
        code: Option<i32>,
    },

    #[error("{identity} engine `{cmd}` did not answer `{command}` within {}s", .timeout.as_secs_f64())]
    Timeout {
        identity: Identity,
        cmd: String,
        command: String,
        timeout: Duration,
    },

    #[error("could not read output of {identity} engine `{cmd}` for `{command}`: {source}")]
    Output {
        identity: Identity,
        cmd: String,
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessFault {
    pub fn identity(&self) -> Identity {
        match self {
            ProcessFault::Spawn { identity, .. }
            | ProcessFault::ExitStatus { identity, .. }
            | ProcessFault::Timeout { identity, .. }
            | ProcessFault::Output { identity, .. } => *identity,
        }
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => String::from("terminated by signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_message_names_engine_and_code() {
        let fault = ProcessFault::ExitStatus {
            identity: Identity::Baseline,
            cmd: String::from("./chess"),
            command: String::from("switch"),
            code: Some(1),
        };
        assert_eq!(fault.identity(), Identity::Baseline);
        assert_eq!(
            fault.to_string(),
            "baseline engine `./chess` failed on `switch` (exit code 1)"
        );
    }

    #[test]
    fn signal_exit_has_no_code() {
        let fault = ProcessFault::ExitStatus {
            identity: Identity::Candidate,
            cmd: String::from("./chess"),
            command: String::from("evaluate"),
            code: None,
        };
        assert!(fault.to_string().ends_with("(terminated by signal)"));
    }
}
