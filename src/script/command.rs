//! Script command language
//!
//! One command per line. Blank lines and `#` comments are skipped, keywords
//! are case-insensitive, and each [`Command`] remembers the 1-based line it
//! came from so the UI can highlight it.
//!
//! ```text
//! echo Appending 10, 20, 30:
//! append 10
//! insert 15 2     # value, then index
//! remove 2
//! print
//! ```
//!
//! Positional indices are parsed as signed integers: a negative index is
//! valid syntax and reaches the list as an out-of-range request. A `cycle`
//! target must be non-negative.

use super::constants::COMMENT_PREFIX;
use std::fmt;

/// Parse error with the offending line
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    Echo(String),
    Append(i64),
    Prepend(i64),
    Insert { value: i64, index: i64 },
    Remove(i64),
    Get(i64),
    Size,
    Print,
    Array,
    Reverse,
    Cycle(usize),
    Uncycle,
    HasCycle,
    Clear,
}

impl CommandKind {
    /// Keyword as written in scripts
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandKind::Echo(_) => "echo",
            CommandKind::Append(_) => "append",
            CommandKind::Prepend(_) => "prepend",
            CommandKind::Insert { .. } => "insert",
            CommandKind::Remove(_) => "remove",
            CommandKind::Get(_) => "get",
            CommandKind::Size => "size",
            CommandKind::Print => "print",
            CommandKind::Array => "array",
            CommandKind::Reverse => "reverse",
            CommandKind::Cycle(_) => "cycle",
            CommandKind::Uncycle => "uncycle",
            CommandKind::HasCycle => "has_cycle",
            CommandKind::Clear => "clear",
        }
    }
}

/// A parsed command and its source line
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub kind: CommandKind,
    pub line: usize,
}

/// A parsed script
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub commands: Vec<Command>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut commands = Vec::new();

        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            if let Some(kind) = parse_line(raw, line)? {
                commands.push(Command { kind, line });
            }
        }

        Ok(Script { commands })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn parse_line(raw: &str, line: usize) -> Result<Option<CommandKind>, ParseError> {
    let trimmed = raw.trim_start();

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (trimmed, ""),
    };

    // echo keeps its text verbatim, comment markers included
    if keyword.eq_ignore_ascii_case("echo") {
        return Ok(Some(CommandKind::Echo(rest.trim().to_string())));
    }

    let code = match trimmed.find(COMMENT_PREFIX) {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    };
    let mut words = code.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let kind = match keyword.to_ascii_lowercase().as_str() {
        "append" => CommandKind::Append(single_int(&args, "append", line)?),
        "prepend" => CommandKind::Prepend(single_int(&args, "prepend", line)?),
        "insert" => {
            expect_arity(&args, 2, "insert", line)?;
            CommandKind::Insert {
                value: parse_int(args[0], line)?,
                index: parse_int(args[1], line)?,
            }
        }
        "remove" => CommandKind::Remove(single_int(&args, "remove", line)?),
        "get" => CommandKind::Get(single_int(&args, "get", line)?),
        "cycle" => {
            expect_arity(&args, 1, "cycle", line)?;
            CommandKind::Cycle(parse_target(args[0], line)?)
        }
        "size" => no_args(&args, "size", line, CommandKind::Size)?,
        "print" => no_args(&args, "print", line, CommandKind::Print)?,
        "array" => no_args(&args, "array", line, CommandKind::Array)?,
        "reverse" => no_args(&args, "reverse", line, CommandKind::Reverse)?,
        "uncycle" => no_args(&args, "uncycle", line, CommandKind::Uncycle)?,
        "has_cycle" => no_args(&args, "has_cycle", line, CommandKind::HasCycle)?,
        "clear" => no_args(&args, "clear", line, CommandKind::Clear)?,
        other => {
            return Err(ParseError {
                message: format!("Unknown command '{}'", other),
                line,
            })
        }
    };

    Ok(Some(kind))
}

fn expect_arity(args: &[&str], expected: usize, name: &str, line: usize) -> Result<(), ParseError> {
    if args.len() != expected {
        return Err(ParseError {
            message: format!(
                "'{}' expects {} argument{}, got {}",
                name,
                expected,
                if expected == 1 { "" } else { "s" },
                args.len()
            ),
            line,
        });
    }
    Ok(())
}

fn single_int(args: &[&str], name: &str, line: usize) -> Result<i64, ParseError> {
    expect_arity(args, 1, name, line)?;
    parse_int(args[0], line)
}

fn no_args(
    args: &[&str],
    name: &str,
    line: usize,
    kind: CommandKind,
) -> Result<CommandKind, ParseError> {
    expect_arity(args, 0, name, line)?;
    Ok(kind)
}

fn parse_int(word: &str, line: usize) -> Result<i64, ParseError> {
    word.parse::<i64>().map_err(|_| ParseError {
        message: format!("Expected integer, got '{}'", word),
        line,
    })
}

/// `cycle` builds a fixture, so its target must name a real position
fn parse_target(word: &str, line: usize) -> Result<usize, ParseError> {
    word.parse::<usize>().map_err(|_| ParseError {
        message: format!("Cycle target must be a non-negative index, got '{}'", word),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        let script = Script::parse("append 10\nprepend -5\ninsert 15 2\nremove 0\nget 1").unwrap();

        let kinds: Vec<CommandKind> = script.commands.iter().map(|c| c.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                CommandKind::Append(10),
                CommandKind::Prepend(-5),
                CommandKind::Insert { value: 15, index: 2 },
                CommandKind::Remove(0),
                CommandKind::Get(1),
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let source = "# header\n\nappend 1   # trailing\n   \nPRINT\n";
        let script = Script::parse(source).unwrap();

        assert_eq!(script.len(), 2);
        assert_eq!(script.commands[0].line, 3);
        assert_eq!(script.commands[1].kind, CommandKind::Print);
        assert_eq!(script.commands[1].line, 5);
    }

    #[test]
    fn test_echo_keeps_text() {
        let script = Script::parse("echo === DETECT CYCLE (Floyd's) # not a comment").unwrap();

        match &script.commands[0].kind {
            CommandKind::Echo(text) => {
                assert_eq!(text, "=== DETECT CYCLE (Floyd's) # not a comment");
            }
            other => panic!("Expected echo, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_echo_is_empty_line() {
        let script = Script::parse("echo").unwrap();
        assert_eq!(script.commands[0].kind, CommandKind::Echo(String::new()));
    }

    #[test]
    fn test_unknown_command_reports_line() {
        let err = Script::parse("append 1\npush 2").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("push"));
    }

    #[test]
    fn test_wrong_arity() {
        let err = Script::parse("insert 5").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.message.contains("expects 2 arguments"));

        let err = Script::parse("size 3").unwrap_err();
        assert!(err.message.contains("expects 0 arguments"));
    }

    #[test]
    fn test_negative_cycle_target_is_rejected() {
        let err = Script::parse("cycle -1").unwrap_err();
        assert!(err.message.contains("non-negative"));

        let script = Script::parse("cycle 1\nremove -1").unwrap();
        assert_eq!(script.commands[0].kind, CommandKind::Cycle(1));
        assert_eq!(script.commands[1].kind, CommandKind::Remove(-1));
    }

    #[test]
    fn test_bad_integer() {
        let err = Script::parse("\n\nappend ten").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.to_string(), "Parse error at line 3: Expected integer, got 'ten'");
    }
}
