use super::constants::{COMMAND_EXAMPLE, COMMAND_HELP, COMMAND_OPEN, COMMAND_QUIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the input with this text and submit it.
    Submit(String),
    /// Submit whatever is already in the input.
    SubmitCurrent,
    Example,
    /// 1-based position in the recent-courses list.
    Open(usize),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::SubmitCurrent;
    }
    if !trimmed.starts_with(':') {
        return Command::Submit(line.trim_end_matches(['\r', '\n']).to_string());
    }

    let mut parts = trimmed.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(COMMAND_EXAMPLE), None, None) => Command::Example,
        (Some(COMMAND_HELP), None, None) => Command::Help,
        (Some(COMMAND_QUIT), None, None) => Command::Quit,
        (Some(COMMAND_OPEN), Some(index), None) => match index.parse::<usize>() {
            Ok(position) if position > 0 => Command::Open(position),
            _ => Command::Unknown(trimmed.to_string()),
        },
        _ => Command::Unknown(trimmed.to_string()),
    }
}
