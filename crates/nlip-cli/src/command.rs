//! Input line parsing

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Say(String),
    Image { path: PathBuf, text: String },
    Files { paths: Vec<PathBuf>, text: String },
    Upload(PathBuf),
    Reset,
    Session,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    MissingArgument(&'static str),
    Unknown(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "nothing to send"),
            ParseError::MissingArgument(usage) => write!(f, "usage: {}", usage),
            ParseError::Unknown(cmd) => write!(f, "unknown command: {} (try /help)", cmd),
        }
    }
}

pub const HELP: &str = "\
/image <path> <text>        send text with an image
/files <p1>[,<p2>...] <text> send text with attachments
/upload <path>              upload a raw file
/reset                      start a new conversation
/session                    show the conversation token
/quit                       exit";

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim()),
        None => (s, ""),
    }
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    if !line.starts_with('/') {
        return Ok(Command::Say(line.to_string()));
    }

    let (cmd, rest) = split_word(line);
    match cmd {
        "/image" => {
            let (path, text) = split_word(rest);
            if path.is_empty() {
                return Err(ParseError::MissingArgument("/image <path> <text>"));
            }
            Ok(Command::Image {
                path: PathBuf::from(path),
                text: text.to_string(),
            })
        }
        "/files" => {
            let (list, text) = split_word(rest);
            let paths: Vec<PathBuf> = list
                .split(',')
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .collect();
            if paths.is_empty() {
                return Err(ParseError::MissingArgument("/files <p1>[,<p2>...] <text>"));
            }
            Ok(Command::Files {
                paths,
                text: text.to_string(),
            })
        }
        "/upload" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("/upload <path>"));
            }
            Ok(Command::Upload(PathBuf::from(rest)))
        }
        "/reset" => Ok(Command::Reset),
        "/session" => Ok(Command::Session),
        "/help" => Ok(Command::Help),
        "/quit" | "/exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}
