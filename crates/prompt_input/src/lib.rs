use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Entering this on its own line finishes description input.
pub const DONE_SENTINEL: &str = "DONE";

/// Prompts on `out` and reads description lines from `input` until the
/// sentinel (or end of input). Each entered line is one content entry; an
/// empty entered line is kept as a blank-line break.
pub fn read_content_lines<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        write!(out, "Description line (or '{}' to finish): ", DONE_SENTINEL)
            .context("Failed to write prompt")?;
        out.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let bytes_read = input
            .read_line(&mut line)
            .context("Failed to read description line")?;
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        if bytes_read == 0 || line == DONE_SENTINEL {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}

/// Prompts on `out` and reads the creator name from `input`. Blank input
/// yields `None`; the caller substitutes the fallback author.
pub fn read_creator<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<String>> {
    write!(out, "Project Creator: ").context("Failed to write prompt")?;
    out.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read creator name")?;
    let creator = line.trim();
    Ok(if creator.is_empty() {
        None
    } else {
        Some(creator.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_until_sentinel() {
        let mut input = Cursor::new("first line\nsecond line\nDONE\nleftover\n");
        let mut out = Vec::new();
        let lines = read_content_lines(&mut input, &mut out).unwrap();
        assert_eq!(lines, vec!["first line", "second line"]);
    }

    #[test]
    fn test_empty_entered_line_becomes_blank_break() {
        let mut input = Cursor::new("above\n\nbelow\nDONE\n");
        let mut out = Vec::new();
        let lines = read_content_lines(&mut input, &mut out).unwrap();
        assert_eq!(lines, vec!["above", "", "below"]);
    }

    #[test]
    fn test_end_of_input_finishes_without_sentinel() {
        let mut input = Cursor::new("only line\n");
        let mut out = Vec::new();
        let lines = read_content_lines(&mut input, &mut out).unwrap();
        assert_eq!(lines, vec!["only line"]);
    }

    #[test]
    fn test_prompt_is_written_for_each_line() {
        let mut input = Cursor::new("one\nDONE\n");
        let mut out = Vec::new();
        read_content_lines(&mut input, &mut out).unwrap();
        let prompts = String::from_utf8(out).unwrap();
        assert_eq!(prompts.matches("Description line").count(), 2);
    }

    #[test]
    fn test_read_creator_returns_entered_name() {
        let mut input = Cursor::new("JamesF\n");
        let mut out = Vec::new();
        assert_eq!(
            read_creator(&mut input, &mut out).unwrap(),
            Some("JamesF".to_string())
        );
    }

    #[test]
    fn test_blank_creator_returns_none() {
        let mut input = Cursor::new("\n");
        let mut out = Vec::new();
        assert_eq!(read_creator(&mut input, &mut out).unwrap(), None);

        let mut input = Cursor::new("   \n");
        let mut out = Vec::new();
        assert_eq!(read_creator(&mut input, &mut out).unwrap(), None);
    }
}
