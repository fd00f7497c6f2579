use contacts_core::validation::ContactField;
use thiserror::Error;

/// A line typed into the terminal front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type into a required field and leave it
    Field(ContactField, String),
    Message(String),
    Blur(ContactField),
    Submit,
    /// 1-based table row
    Delete(usize),
    Refresh,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{0}' needs a field: name, email or phone")]
    MissingField(String),

    #[error("'delete' needs a row number, got '{0}'")]
    InvalidRow(String),
}

pub const HELP: &str = "commands: name <v> | email <v> | phone <v> | message <v> | blur <field> \
                        | submit | delete <row> | refresh | show | help | quit";

fn parse_field(word: &str) -> Option<ContactField> {
    match word {
        "name" => Some(ContactField::Name),
        "email" => Some(ContactField::Email),
        "phone" => Some(ContactField::Phone),
        _ => None,
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        if let Some(field) = parse_field(word) {
            return Ok(Command::Field(field, rest.to_owned()));
        }
        match word {
            "message" => Ok(Command::Message(rest.to_owned())),
            "blur" => parse_field(rest)
                .map(Command::Blur)
                .ok_or_else(|| CommandError::MissingField(word.to_owned())),
            "submit" => Ok(Command::Submit),
            "delete" => rest
                .parse()
                .map(Command::Delete)
                .map_err(|_| CommandError::InvalidRow(rest.to_owned())),
            "refresh" => Ok(Command::Refresh),
            "" | "show" => Ok(Command::Show),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}
