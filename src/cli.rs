use std::time::Duration;

use crate::clock;
use crate::engine::EngineOptions;
use crate::protocol::Protocol;
use crate::side::{Color, Identity};

pub const DEFAULT_MAX_MOVES: u32 = 10;
pub const DEFAULT_MAX_GAMES: u64 = 10;

#[cfg(windows)]
const DEFAULT_ENGINES: [&str; 2] = ["./chess.exe", "./chess.0.1.2.exe"];
#[cfg(not(windows))]
const DEFAULT_ENGINES: [&str; 2] = ["./chess", "./chess"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutOptions {
    pub file: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub engines: [EngineOptions; 2],
    pub games: u64,
    pub max_moves: u32,
    pub timeout: Option<Duration>,
    pub protocol: Protocol,
    pub records: Option<RecordOutOptions>,
}

impl CliOptions {
    pub fn engine(&self, identity: Identity) -> &EngineOptions {
        &self.engines[identity.to_index()]
    }

    pub fn engine_names(&self) -> [String; 2] {
        Identity::ALL.map(|identity| self.engine(identity).name().to_string())
    }
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            engines: DEFAULT_ENGINES.map(EngineOptions::new),
            games: DEFAULT_MAX_GAMES,
            max_moves: DEFAULT_MAX_MOVES,
            timeout: None,
            protocol: Protocol::default(),
            records: None,
        }
    }
}

fn parse_engine_option(engine: &mut EngineOptions, name: &str, value: &str) -> Option<()> {
    match name {
        "name" => {
            engine.name = Some(String::from(value));
        }
        "dir" => {
            engine.dir = String::from(value);
        }
        "cmd" => {
            engine.cmd = String::from(value);
        }
        "flag" => {
            engine.flag = String::from(value);
        }
        _ => {
            eprintln!("Invalid engine option {name}={value}");
            return None;
        }
    }
    Some(())
}

fn usage_text() -> String {
    format!(
        "\
Usage: enginematch [options]

  -candidate cmd=<path> [name=<n>] [dir=<d>] [flag=<f>]   engine under test
  -baseline cmd=<path> [name=<n>] [dir=<d>] [flag=<f>]    reference engine
  -each key=value...            option applied to both engines
  -games <n>                    games to play (default {DEFAULT_MAX_GAMES})
  -maxmoves <n>                 moves per side per game (default {DEFAULT_MAX_MOVES})
  -timeout <dur>|inf            limit for each engine call, e.g. 500ms, 2s
  -marker <token>               token that ends a game (default #)
  -init white|black             command that starts a game (default black)
  -records file=<path>          write one record per game to a new file
  -version

Set RUST_LOG=info to also see move numbers and engine progress as games run."
    )
}

pub fn parse() -> Option<CliOptions> {
    parse_args(std::env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Option<CliOptions> {
    let args: Vec<String> = args.into_iter().collect();

    let mut options = CliOptions::default();
    let mut each_options = Vec::<(String, String)>::new();

    let mut it = args.iter().peekable();
    while let Some(flag) = it.next() {
        match flag.as_str() {
            "-version" | "--version" => {
                println!("enginematch version {}", env!("CARGO_PKG_VERSION"));
                return None;
            }

            "-help" | "--help" | "-h" => {
                println!("{}", usage_text());
                return None;
            }

            "-candidate" | "-baseline" => {
                let identity = if flag == "-candidate" {
                    Identity::Candidate
                } else {
                    Identity::Baseline
                };
                let engine = &mut options.engines[identity.to_index()];
                while let Some(option) = it.peek()
                    && !option.starts_with("-")
                    && let Some((name, value)) = option.split_once('=')
                {
                    it.next(); // consume token

                    parse_engine_option(engine, name, value)?;
                }
            }

            "-each" => {
                while let Some(option) = it.peek()
                    && !option.starts_with("-")
                    && let Some((name, value)) = option.split_once('=')
                {
                    it.next(); // consume token

                    each_options.push((name.to_string(), value.to_string()));
                }
            }

            "-games" => {
                let Some(option) = it.next() else { break };
                if let Ok(option) = option.parse::<u64>() {
                    if option == 0 {
                        eprintln!("invalid games value {option} (must be bigger than zero)");
                        return None;
                    }
                    options.games = option;
                } else {
                    eprintln!("invalid games value {option} (must be unsigned integer)");
                    return None;
                }
            }

            "-maxmoves" => {
                let Some(value) = it.next() else { break };
                match value.parse::<u32>() {
                    Ok(value) if value > 0 => options.max_moves = value,
                    _ => {
                        eprintln!(
                            "invalid maxmoves value {value} (must be non-zero unsigned integer)"
                        );
                        return None;
                    }
                }
            }

            "-timeout" => {
                let Some(value) = it.next() else { break };
                options.timeout = match value.to_lowercase().as_str() {
                    "inf" | "infinite" | "none" => None,
                    _ => match clock::parse_duration(value) {
                        Some(timeout) if !timeout.is_zero() => Some(timeout),
                        _ => {
                            eprintln!("invalid timeout {value} (expected e.g. 500ms, 2s or inf)");
                            return None;
                        }
                    },
                };
            }

            "-marker" => {
                let Some(value) = it.next() else { break };
                if value.is_empty() {
                    eprintln!("termination marker must not be empty");
                    return None;
                }
                options.protocol.marker = value.to_string();
            }

            "-init" => {
                let Some(value) = it.next() else { break };
                let Some(color) = Color::parse(value) else {
                    eprintln!("invalid init value {value} (expected white or black)");
                    return None;
                };
                options.protocol.init = color;
            }

            "-records" => {
                let mut records = RecordOutOptions {
                    file: String::new(),
                };
                while let Some(option) = it.peek()
                    && !option.starts_with("-")
                    && let Some((name, value)) = option.split_once('=')
                {
                    it.next(); // consume token

                    match name {
                        "file" => records.file = String::from(value),
                        _ => {
                            eprintln!("Invalid key {name} for -records");
                            return None;
                        }
                    }
                }
                if records.file.is_empty() {
                    eprintln!("output file required for -records option");
                    return None;
                }
                options.records = Some(records);
            }

            _ => {
                eprintln!("Unknown option {flag}");
                eprintln!("{}", usage_text());
                return None;
            }
        }
    }

    for (name, value) in each_options {
        for engine in &mut options.engines {
            parse_engine_option(engine, &name, &value)?;
        }
    }

    Some(options)
}
