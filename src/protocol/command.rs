//! Command line parsing

/// Trim a raw input line, ignoring blank ones
pub fn parse_command(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(input.to_string())
}

/// The text following the first `n` whitespace-separated tokens of `cmd`,
/// with its inner spacing preserved
pub fn remainder(cmd: &str, n: usize) -> &str {
    let mut rest = cmd.trim_start();
    for _ in 0..n {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = rest[end..].trim_start();
    }
    rest
}
