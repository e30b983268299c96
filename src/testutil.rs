use crate::engine::EngineAdapter;
use crate::error::ProcessFault;
use crate::side::Identity;

type Reply = Box<dyn FnMut(Identity, &str) -> Result<String, ProcessFault>>;

/// Answers engine commands from a closure and keeps every call it saw.
pub struct ScriptedAdapter {
    reply: Reply,
    pub calls: Vec<(Identity, String)>,
}

impl ScriptedAdapter {
    pub fn new(reply: impl FnMut(Identity, &str) -> Result<String, ProcessFault> + 'static) -> Self {
        ScriptedAdapter {
            reply: Box::new(reply),
            calls: vec![],
        }
    }

    pub fn count(&self, command: &str) -> usize {
        self.calls.iter().filter(|(_, c)| c == command).count()
    }
}

impl EngineAdapter for ScriptedAdapter {
    fn invoke(&mut self, identity: Identity, command: &str) -> Result<String, ProcessFault> {
        self.calls.push((identity, command.to_string()));
        (self.reply)(identity, command)
    }
}

pub fn exit_fault(identity: Identity, command: &str) -> ProcessFault {
    ProcessFault::ExitStatus {
        identity,
        cmd: String::from("./chess"),
        command: command.to_string(),
        code: Some(1),
    }
}

pub fn spawn_fault(identity: Identity, command: &str) -> ProcessFault {
    ProcessFault::Spawn {
        identity,
        cmd: String::from("./chess"),
        command: command.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
    }
}
