pub const PLUS_SIGN: &'static str = "+";
// Plus characters accepted at the start of an externally supplied value.
// The full-width variant shows up when numbers are pasted from CJK input
// methods.
pub const PLUS_CHARS: &'static [char] = &['+', '\u{FF0B}'];

/// Placeholder for one digit inside a display mask such as `XXX-XXX-XXXX`.
pub const MASK_DIGIT: char = 'X';

// Countries without explicit formatting data accept this many national
// digits and are grouped with `FALLBACK_MASK`.
pub const FALLBACK_DIGIT_LIMIT: usize = 10;
pub const FALLBACK_MASK: &'static str = "XXX XXX XXXX";

pub const DEFAULT_PLACEHOLDER: &'static str = "Phone Number";
