pub const BACKTICK: char = '`';

pub fn count_backticks(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'`').count()
}

/// Whether `text` leaves an inline-code span open (odd number of backticks).
pub fn is_unclosed(text: &str) -> bool {
    count_backticks(text) % 2 == 1
}
