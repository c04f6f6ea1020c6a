use crate::TtlError;

const MINUTE: u32 = 60;
const HOUR: u32 = 60 * MINUTE;
const DAY: u32 = 24 * HOUR;
const WEEK: u32 = 7 * DAY;

/// Parses a TTL literal: decimal seconds with an optional single unit suffix
/// (`S`, `M`, `H`, `D` or `W`, any case).
pub fn parse_ttl(input: &str) -> Result<u32, TtlError> {
    let (digits, multiplier) = match input.chars().last() {
        None => return Err(TtlError::Empty),
        Some(c) => match c.to_ascii_uppercase() {
            'S' => (&input[..input.len() - 1], 1),
            'M' => (&input[..input.len() - 1], MINUTE),
            'H' => (&input[..input.len() - 1], HOUR),
            'D' => (&input[..input.len() - 1], DAY),
            'W' => (&input[..input.len() - 1], WEEK),
            _ => (input, 1),
        },
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TtlError::Invalid(input.to_string()));
    }

    digits
        .parse::<u32>()
        .ok()
        .and_then(|v| v.checked_mul(multiplier))
        .ok_or_else(|| TtlError::Overflow(input.to_string()))
}
