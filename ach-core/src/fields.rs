//! Fixed-width field encoding
//!
//! Every field of every record line passes through [`encode_field`]. The
//! contract is deliberately lossy ("silent truncate"): a value that does not
//! fit its field is cut to the field width, and an empty value becomes a run
//! of blanks. Out-of-range input is never an error; receiving banks reject
//! malformed *widths*, not shortened names, so the encoder guarantees width
//! above all else.

use rust_decimal::Decimal;

/// Justification applied when a value is shorter than its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// Left-justify, pad the right with blanks.
    Left,
    /// Right-justify, pad the left with blanks.
    Right,
    /// Right-justify, pad the left with zeros.
    RightZero,
}

/// Character-set handling applied before measuring the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanitize {
    /// Drop every character that is not a letter or digit.
    Strip,
    /// Pass the value through unchanged.
    Keep,
}

/// Encode one logical value into a fixed-width field.
///
/// Always returns exactly `width` characters:
///
/// - with [`Sanitize::Strip`], non-alphanumeric characters (underscore
///   included) are removed first;
/// - a value that is empty, or whitespace-only, after sanitization becomes
///   `width` blanks regardless of the requested justification;
/// - a value longer than `width` is silently truncated to its first `width`
///   characters;
/// - anything else is padded per `justify`.
pub fn encode_field(value: &str, width: usize, justify: Justify, sanitize: Sanitize) -> String {
    let value = match sanitize {
        Sanitize::Strip => value
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>(),
        Sanitize::Keep => value.to_string(),
    };

    if value.trim().is_empty() {
        return " ".repeat(width);
    }

    let len = value.chars().count();
    if len > width {
        return value.chars().take(width).collect();
    }

    let pad = width - len;
    match justify {
        Justify::Left => format!("{}{}", value, " ".repeat(pad)),
        Justify::Right => format!("{}{}", " ".repeat(pad), value),
        Justify::RightZero => format!("{}{}", "0".repeat(pad), value),
    }
}

/// Encode a monetary amount into a zero-filled field.
///
/// The amount is rounded to two fractional digits (banker's rounding), the
/// decimal point is stripped, and the digits are right-justified with zero
/// fill. `$1234567.89` in a width-10 field becomes `0123456789`.
pub(crate) fn encode_amount(amount: Decimal, width: usize) -> String {
    let rounded = amount.round_dp(2);
    encode_field(
        &format!("{:.2}", rounded),
        width,
        Justify::RightZero,
        Sanitize::Strip,
    )
}
