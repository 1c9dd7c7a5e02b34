use thiserror::Error;

/// One line of player input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Guess(usize, usize),
    Hint(usize),
    Peek(usize),
    Board,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("nothing to do -- type two positions, 'hint <n>', 'peek <n>', 'board', or 'quit'")]
    Empty,
    #[error("unknown command '{0}' -- type two positions, 'hint <n>', 'peek <n>', 'board', or 'quit'")]
    Unknown(String),
    #[error("'{0}' is not a board position")]
    BadPosition(String),
    #[error("'{command}' expects {expected}")]
    BadArity {
        command: &'static str,
        expected: &'static str,
    },
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Err(CommandError::Empty);
    };

    match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Ok(Command::Quit),
        "board" => Ok(Command::Board),
        "hint" => one_position("hint", rest).map(Command::Hint),
        "peek" | "flip" => one_position("peek", rest).map(Command::Peek),
        "guess" => two_positions("guess", rest),
        _ if head.bytes().all(|byte| byte.is_ascii_digit()) => two_positions("a guess", &tokens),
        _ => Err(CommandError::Unknown(head.to_string())),
    }
}

fn position(token: &str) -> Result<usize, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::BadPosition(token.to_string()))
}

fn one_position(command: &'static str, rest: &[&str]) -> Result<usize, CommandError> {
    match rest {
        [token] => position(token),
        _ => Err(CommandError::BadArity {
            command,
            expected: "one position",
        }),
    }
}

fn two_positions(command: &'static str, tokens: &[&str]) -> Result<Command, CommandError> {
    match tokens {
        [first, second] => Ok(Command::Guess(position(first)?, position(second)?)),
        _ => Err(CommandError::BadArity {
            command,
            expected: "two positions",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandError, parse};

    #[test]
    fn bare_pair_of_numbers_is_a_guess() {
        assert_eq!(parse("3 11"), Ok(Command::Guess(3, 11)));
        assert_eq!(parse("guess 0 5"), Ok(Command::Guess(0, 5)));
    }

    #[test]
    fn keywords_parse_case_insensitively() {
        assert_eq!(parse("QUIT"), Ok(Command::Quit));
        assert_eq!(parse("Board"), Ok(Command::Board));
        assert_eq!(parse("hint 4"), Ok(Command::Hint(4)));
        assert_eq!(parse("flip 2"), Ok(Command::Peek(2)));
    }

    #[test]
    fn blank_lines_are_empty_commands() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
    }

    #[test]
    fn stray_words_are_unknown() {
        assert_eq!(parse("restart"), Err(CommandError::Unknown("restart".to_string())));
    }

    #[test]
    fn arity_is_enforced() {
        assert_eq!(
            parse("hint"),
            Err(CommandError::BadArity {
                command: "hint",
                expected: "one position"
            })
        );
        assert_eq!(
            parse("7"),
            Err(CommandError::BadArity {
                command: "a guess",
                expected: "two positions"
            })
        );
        assert_eq!(
            parse("guess 1 2 3"),
            Err(CommandError::BadArity {
                command: "guess",
                expected: "two positions"
            })
        );
    }

    #[test]
    fn malformed_positions_are_rejected() {
        assert_eq!(
            parse("hint one"),
            Err(CommandError::BadPosition("one".to_string()))
        );
    }
}
