//! Shared utility functions.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character. Used to keep prompts and model output short in logs and errors.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_untouched() {
        assert_eq!(truncate_str("Paris", 10), "Paris");
        assert_eq!(truncate_str("", 10), "");
    }

    #[test]
    fn long_input_is_cut() {
        assert_eq!(truncate_str("What is the capital of France?", 7), "What is");
    }

    #[test]
    fn cut_backs_up_to_char_boundary() {
        // 'é' occupies bytes 5..7
        assert_eq!(truncate_str("Bogoté", 6), "Bogot");
        assert_eq!(truncate_str("Bogoté", 7), "Bogoté");
    }
}
