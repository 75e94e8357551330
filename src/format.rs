use web_sys::HtmlInputElement;

pub const DEFAULT_SEPARATOR: char = ',';

/// Digits of `raw` in order, every other character dropped.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Longest amount the numeric fields accept, in significant digits. Extra
/// digits are dropped from the end, the way a `maxlength` input behaves.
pub const MAX_AMOUNT_DIGITS: usize = 15;

// Both the displayed text and the parsed amount are built from this, so the
// field never shows a number the calculator does not use.
fn significant_digits(raw: &str) -> String {
    digits(raw)
        .trim_start_matches('0')
        .chars()
        .take(MAX_AMOUNT_DIGITS)
        .collect()
}

/// Numeric value of the digits in `raw`, 0 when there are none.
pub fn to_amount(raw: &str) -> u64 {
    significant_digits(raw)
        .bytes()
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
}

pub fn group_digits(n: u64, separator: char) -> String {
    group_digit_str(&n.to_string(), separator)
}

fn group_digit_str(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub caret: usize,
}

/// Reformats numeric input while keeping the caret next to the digit the
/// user was editing.
///
/// The caret is anchored on the number of digits in front of it rather than
/// on a character offset, so separators appearing or disappearing elsewhere
/// in the value do not drag it around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericCaretFormatter {
    separator: char,
}

impl Default for NumericCaretFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl NumericCaretFormatter {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Grouped rendering of the amount in `raw`, empty when it is zero.
    pub fn format(&self, raw: &str) -> String {
        let significant = significant_digits(raw);
        if significant.is_empty() {
            return String::new();
        }
        group_digit_str(&significant, self.separator)
    }

    /// `caret` counts characters, not bytes. Offsets past the end are
    /// treated as the end of `raw`.
    pub fn format_with_caret(&self, raw: &str, caret: usize) -> Formatted {
        let digits_before_caret = raw
            .chars()
            .take(caret)
            .filter(|c| c.is_ascii_digit())
            .count();
        let text = self.format(raw);
        let caret = caret_after_digits(&text, digits_before_caret);
        Formatted { text, caret }
    }
}

fn caret_after_digits(text: &str, wanted: usize) -> usize {
    if wanted == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, c) in text.chars().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
        }
        if seen >= wanted {
            return i + 1;
        }
    }
    text.chars().count()
}

// selectionStart is a UTF-16 offset.
fn utf16_to_char_offset(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (i, c) in text.chars().enumerate() {
        if units >= offset {
            return i;
        }
        units += c.len_utf16();
    }
    text.chars().count()
}

fn char_to_utf16_offset(text: &str, offset: usize) -> usize {
    text.chars().take(offset).map(char::len_utf16).sum()
}

/// Rewrites the value of `input` in place and restores the caret.
/// Failing to move the selection never aborts the formatting.
pub fn format_input_keep_caret(input: &HtmlInputElement, formatter: &NumericCaretFormatter) {
    let raw = input.value();
    let caret = match input.selection_start() {
        Ok(Some(pos)) => utf16_to_char_offset(&raw, pos as usize),
        _ => raw.chars().count(),
    };

    let formatted = formatter.format_with_caret(&raw, caret);
    input.set_value(&formatted.text);

    let pos = char_to_utf16_offset(&formatted.text, formatted.caret) as u32;
    if let Err(e) = input.set_selection_range(pos, pos) {
        log::debug!("could not restore caret: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(raw: &str, caret: usize) -> Formatted {
        NumericCaretFormatter::default().format_with_caret(raw, caret)
    }

    fn format_amount(raw: &str) -> String {
        NumericCaretFormatter::default().format(raw)
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(NumericCaretFormatter::new('.').format("1234567"), "1.234.567");
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1000, ','), "1,000");
        assert_eq!(group_digits(1234567, ','), "1,234,567");
        assert_eq!(group_digits(100000, '.'), "100.000");
    }

    #[test]
    fn amount_ignores_noise() {
        assert_eq!(to_amount(""), 0);
        assert_eq!(to_amount("abc"), 0);
        assert_eq!(to_amount("₩ 1,200,000원"), 1_200_000);
        assert_eq!(to_amount("000123"), 123);
        assert_eq!(to_amount("99999999999999999999999"), 999_999_999_999_999);
    }

    #[test]
    fn zero_formats_as_empty() {
        assert_eq!(format_amount(""), "");
        assert_eq!(format_amount("0"), "");
        assert_eq!(format_amount("0,000"), "");
        assert_eq!(format_amount("x"), "");
    }

    #[test]
    fn leading_zeros_collapse() {
        assert_eq!(format_amount("000123"), "123");
        assert_eq!(format_amount("0001234"), "1,234");
    }

    #[test]
    fn caret_stays_after_third_digit() {
        let out = fmt("1234567", 3);
        assert_eq!(out.text, "1,234,567");
        assert_eq!(out.caret, 3);
    }

    #[test]
    fn caret_follows_inserted_separator() {
        // typing the fourth digit at the end of "123"
        let out = fmt("1234", 4);
        assert_eq!(out.text, "1,234");
        assert_eq!(out.caret, 5);

        // typing "9" between 1 and 2 of "1,234"
        let out = fmt("19,234", 2);
        assert_eq!(out.text, "19,234");
        assert_eq!(out.caret, 2);

        // deleting a digit drops a separator
        let out = fmt("1,34", 3);
        assert_eq!(out.text, "134");
        assert_eq!(out.caret, 2);
    }

    #[test]
    fn caret_at_start_stays_at_start() {
        let out = fmt("a1234", 1);
        assert_eq!(out.text, "1,234");
        assert_eq!(out.caret, 0);
    }

    #[test]
    fn caret_past_end_is_clamped() {
        let out = fmt("1234", 100);
        assert_eq!(out.caret, out.text.chars().count());
    }

    #[test]
    fn caret_falls_back_to_end_when_digits_collapse() {
        let out = fmt("000123", 4);
        assert_eq!(out.text, "123");
        assert_eq!(out.caret, 3);
    }

    #[test]
    fn formatting_is_a_fixed_point() {
        for raw in ["1234567", "12a34", "1,2,3,4", "987654321012", "5", "00042000"] {
            for caret in 0..=raw.chars().count() {
                let once = fmt(raw, caret);
                let twice = fmt(&once.text, once.caret);
                assert_eq!(once.text, twice.text, "raw={raw} caret={caret}");
                assert_eq!(once.caret, twice.caret, "raw={raw} caret={caret}");
            }
        }
    }

    #[test]
    fn digits_survive_formatting() {
        for raw in ["1234567", "1-2-3-4", "12,,34,5", "9 876 543 210 123"] {
            assert_eq!(digits(&format_amount(raw)), digits(raw));
        }
    }

    #[test]
    fn shown_text_matches_parsed_amount() {
        for raw in [
            "1",
            "0001234",
            "₩ 12,000원",
            "300000000000000",
            "1234567890123456789",
            "30000000000000000000000",
            "99999999999999999999999999999999",
        ] {
            assert_eq!(digits(&format_amount(raw)), to_amount(raw).to_string(), "raw={raw}");
        }
    }

    #[test]
    fn long_input_is_cut_to_max_digits() {
        let out = fmt("30000000000000000000000", 23);
        assert_eq!(out.text, "300,000,000,000,000");
        assert_eq!(out.caret, out.text.chars().count());
        assert_eq!(to_amount(&out.text), 300_000_000_000_000);
    }

    #[test]
    fn leading_zeros_still_count_toward_caret() {
        // "0001|234": four digits sit before the caret, but only "1,234" survives
        let out = fmt("0001234", 4);
        assert_eq!(out.text, "1,234");
        assert_eq!(out.caret, 5);
    }

    #[test]
    fn caret_moves_monotonically_with_digit_count() {
        let raw = "12x345,6789";
        let mut last = 0;
        for caret in 0..=raw.chars().count() {
            let out = fmt(raw, caret);
            assert!(out.caret >= last, "caret {caret} went backwards");
            last = out.caret;
        }
    }

    #[test]
    fn same_digits_format_identically() {
        assert_eq!(format_amount("1,234"), format_amount("12-34"));
    }

    #[test]
    fn utf16_offsets_map_to_chars() {
        assert_eq!(utf16_to_char_offset("₩1,000", 1), 1);
        assert_eq!(utf16_to_char_offset("😀12", 2), 1);
        assert_eq!(utf16_to_char_offset("12", 9), 2);
        assert_eq!(char_to_utf16_offset("1,000", 3), 3);
    }
}
