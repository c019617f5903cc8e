//! Parsing of lines typed into the terminal chat.

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Toggle,
    Usage,
    History,
    Help,
    Quit,
    /// Anything that is not a slash command is chat text.
    Say(String),
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(name) = trimmed.strip_prefix('/') else {
            return Command::Say(line.to_string());
        };
        match name.to_ascii_lowercase().as_str() {
            "open" => Command::Open,
            "close" => Command::Close,
            "toggle" => Command::Toggle,
            "usage" => Command::Usage,
            "history" => Command::History,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}

pub const HELP: &str = "\
/open     open the assistant (starts a fresh conversation)
/close    close the assistant
/toggle   open or close
/history  show the conversation so far
/usage    show request and token counts
/quit     leave
Anything else is sent to the assistant.";
