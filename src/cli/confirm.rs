//! Confirmation prompt for destructive commands

use std::io::{self, BufRead, Write};

use crate::error::GastosResult;

/// Ask `question` on stdout and read a yes/no answer from stdin
///
/// Returns `true` immediately when `assume_yes` is set.
pub fn confirm(question: &str, assume_yes: bool) -> GastosResult<bool> {
    if assume_yes {
        return Ok(true);
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    confirm_with(question, &mut stdin.lock(), &mut stdout.lock())
}

/// Ask `question` on `output` and read the answer from `input`
///
/// Only "y" or "yes" (any case) confirm; anything else, including end of
/// input, declines.
pub fn confirm_with<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> GastosResult<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> (bool, String) {
        let mut input = answer.as_bytes();
        let mut output = Vec::new();
        let confirmed = confirm_with("Delete?", &mut input, &mut output).unwrap();
        (confirmed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_answers() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("").0);
        assert!(!ask("sure\n").0);
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(ask("n\n").1, "Delete? [y/N] ");
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(confirm("Delete?", true).unwrap());
    }
}
