//! Interactive input for values not supplied on the command line.
//!
//! Abstracted behind a trait so dispatch can be exercised without a terminal.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, IsTerminal, Write};

#[cfg(test)]
use mockall::automock;

/// Source of interactively supplied values
#[cfg_attr(test, automock)]
pub trait Prompt: Send + Sync {
    /// Ask for a value, returning the trimmed answer
    fn ask(&self, label: &str) -> Result<String>;

    /// Ask for a sensitive value such as a password
    fn ask_secret(&self, label: &str) -> Result<String>;
}

/// Prompt reading answers line by line from stdin
#[derive(Debug, Clone, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }

    fn read_answer(&self, label: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}: ", label)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .with_context(|| format!("Failed to read {}", label))?;
        if read == 0 {
            bail!("No input provided for {}", label);
        }
        Ok(line.trim().to_string())
    }
}

impl Prompt for StdinPrompt {
    fn ask(&self, label: &str) -> Result<String> {
        self.read_answer(label)
    }

    fn ask_secret(&self, label: &str) -> Result<String> {
        let secret = if io::stdin().is_terminal() {
            rpassword::prompt_password(format!("{}: ", label))
                .with_context(|| format!("Failed to read {}", label))?
        } else {
            read_secret(&mut io::stdin().lock(), &mut io::stdout(), label)?
        };
        if secret.is_empty() {
            bail!("No input provided for {}", label);
        }
        Ok(secret)
    }
}

/// Read a secret line from a non-terminal reader, such as piped stdin
pub fn read_secret<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<String> {
    rpassword::prompt_password_from_bufread(reader, writer, format!("{}: ", label))
        .with_context(|| format!("No input provided for {}", label))
}

/// Ask until the answer is not blank, giving up after a few attempts.
pub fn ask_non_empty(prompt: &dyn Prompt, label: &str) -> Result<String> {
    const MAX_ATTEMPTS: usize = 3;

    for _ in 0..MAX_ATTEMPTS {
        let answer = prompt.ask(label)?;
        if !answer.trim().is_empty() {
            return Ok(answer.trim().to_string());
        }
        eprintln!("{} cannot be empty", label);
    }
    bail!("No {} after {} attempts", label, MAX_ATTEMPTS)
}

/// Ask until the answer parses, giving up after a few attempts.
pub fn ask_choice<T, F>(prompt: &dyn Prompt, label: &str, choices: &[&str], parse: F) -> Result<T>
where
    F: Fn(&str) -> Option<T>,
{
    const MAX_ATTEMPTS: usize = 3;

    let full_label = format!("{} [{}]", label, choices.join(", "));
    for _ in 0..MAX_ATTEMPTS {
        let answer = prompt.ask(&full_label)?;
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }
        eprintln!("'{}' is not one of: {}", answer, choices.join(", "));
    }
    bail!("No valid {} after {} attempts", label, MAX_ATTEMPTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    #[test]
    fn test_ask_choice_accepts_first_valid_answer() {
        let mut prompt = MockPrompt::new();
        prompt
            .expect_ask()
            .times(1)
            .returning(|_| Ok("two".to_string()));

        let value = ask_choice(&prompt, "Number", &["one", "two"], |s| match s {
            "one" => Some(1),
            "two" => Some(2),
            _ => None,
        })
        .unwrap();
        assert_eq!(value, 2);
    }

    #[test]
    fn test_ask_choice_retries_invalid_answer() {
        let mut prompt = MockPrompt::new();
        let mut seq = Sequence::new();
        prompt
            .expect_ask()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("three".to_string()));
        prompt
            .expect_ask()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("one".to_string()));

        let value = ask_choice(&prompt, "Number", &["one"], |s| (s == "one").then_some(1)).unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_ask_choice_gives_up() {
        let mut prompt = MockPrompt::new();
        prompt
            .expect_ask()
            .times(3)
            .returning(|_| Ok("nope".to_string()));

        let result: Result<u8> = ask_choice(&prompt, "Number", &["one"], |_| None);
        assert!(result.is_err());
    }

    #[test]
    fn test_ask_choice_label_lists_choices() {
        let mut prompt = MockPrompt::new();
        prompt
            .expect_ask()
            .withf(|label| label == "Source [a, b]")
            .returning(|_| Ok("a".to_string()));

        let value = ask_choice(&prompt, "Source", &["a", "b"], |s| Some(s.to_string())).unwrap();
        assert_eq!(value, "a");
    }

    #[test]
    fn test_ask_non_empty_reasks_blank_answer() {
        let mut prompt = MockPrompt::new();
        let mut seq = Sequence::new();
        prompt
            .expect_ask()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("   ".to_string()));
        prompt
            .expect_ask()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("admin".to_string()));

        assert_eq!(ask_non_empty(&prompt, "Username").unwrap(), "admin");
    }

    #[test]
    fn test_ask_non_empty_gives_up() {
        let mut prompt = MockPrompt::new();
        prompt
            .expect_ask()
            .times(3)
            .returning(|_| Ok(String::new()));

        assert!(ask_non_empty(&prompt, "Username").is_err());
    }

    #[test]
    fn test_read_secret_strips_newline() {
        let mut input = io::Cursor::new(b"hunter2\n".to_vec());
        let mut output = Vec::new();

        let secret = read_secret(&mut input, &mut output, "Password").unwrap();
        assert_eq!(secret, "hunter2");
        assert_eq!(String::from_utf8(output).unwrap(), "Password: ");
    }

    #[test]
    fn test_read_secret_keeps_surrounding_spaces() {
        let mut input = io::Cursor::new(b" pass word \n".to_vec());
        let mut output = Vec::new();

        let secret = read_secret(&mut input, &mut output, "Password").unwrap();
        assert_eq!(secret, " pass word ");
    }

    #[test]
    fn test_ask_choice_propagates_prompt_error() {
        let mut prompt = MockPrompt::new();
        prompt
            .expect_ask()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("No input provided")));

        let result: Result<u8> = ask_choice(&prompt, "Number", &["one"], |_| Some(1));
        assert!(result.is_err());
    }
}
