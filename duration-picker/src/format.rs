use crate::duration::Duration;
use crate::field::Field;

/// Display text for one field.
///
/// Values 1-9 are zero padded. Zero renders blank unless a more significant
/// field is non-zero, in which case it renders as "00" to keep the columns
/// aligned.
pub fn format_field(field: Field, value: &Duration) -> String {
    let (own, higher_nonzero) = match field {
        Field::Days => (value.days, false),
        Field::Hours => (value.hours, value.days > 0),
        Field::Minutes => (value.minutes, value.hours > 0 || value.days > 0),
    };

    match own {
        0 if higher_nonzero => "00".to_string(),
        0 => String::new(),
        1..=9 => format!("{:02}", own),
        _ => own.to_string(),
    }
}

/// Parse the leading digits of typed text. Text that does not start with a
/// digit parses as zero; oversized numbers saturate.
pub fn parse_leading_number(text: &str) -> u32 {
    text.chars()
        .map_while(|c| c.to_digit(10))
        .fold(0u32, |acc, digit| acc.saturating_mul(10).saturating_add(digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(field: Field, days: u32, hours: u32, minutes: u32) -> String {
        format_field(field, &Duration::new(days, hours, minutes))
    }

    #[test]
    fn pads_single_digits() {
        assert_eq!(fmt(Field::Days, 3, 0, 0), "03");
        assert_eq!(fmt(Field::Hours, 0, 7, 0), "07");
        assert_eq!(fmt(Field::Minutes, 0, 0, 9), "09");
    }

    #[test]
    fn zero_is_blank_without_higher_fields() {
        assert_eq!(fmt(Field::Days, 0, 5, 5), "");
        assert_eq!(fmt(Field::Hours, 0, 0, 5), "");
        assert_eq!(fmt(Field::Minutes, 0, 0, 0), "");
    }

    #[test]
    fn zero_renders_double_zero_under_nonzero_higher_field() {
        assert_eq!(fmt(Field::Hours, 1, 0, 0), "00");
        assert_eq!(fmt(Field::Minutes, 0, 1, 0), "00");
        assert_eq!(fmt(Field::Minutes, 2, 0, 0), "00");
    }

    #[test]
    fn large_values_are_plain() {
        assert_eq!(fmt(Field::Days, 365, 0, 0), "365");
        assert_eq!(fmt(Field::Hours, 0, 23, 0), "23");
        assert_eq!(fmt(Field::Minutes, 0, 0, 45), "45");
    }

    #[test]
    fn formatted_values_stay_in_the_display_alphabet() {
        for days in [0, 1, 9, 10, 99, 100, 365] {
            for hours in 0..24 {
                for minutes in 0..60 {
                    let d = Duration::new(days, hours, minutes);
                    let h = format_field(Field::Hours, &d);
                    let m = format_field(Field::Minutes, &d);
                    let dd = format_field(Field::Days, &d);

                    assert!(h.is_empty() || h.len() == 2, "hours {h:?}");
                    assert!(m.is_empty() || m.len() == 2, "minutes {m:?}");
                    assert!(dd.len() <= 3, "days {dd:?}");
                    if days > 0 {
                        assert!(!h.is_empty() && !m.is_empty());
                    }
                    if hours > 0 {
                        assert!(!m.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn parses_leading_digits_only() {
        assert_eq!(parse_leading_number("25"), 25);
        assert_eq!(parse_leading_number("12ab"), 12);
        assert_eq!(parse_leading_number("007"), 7);
    }

    #[test]
    fn non_numeric_start_parses_as_zero() {
        assert_eq!(parse_leading_number(""), 0);
        assert_eq!(parse_leading_number("x12"), 0);
        assert_eq!(parse_leading_number("-4"), 0);
    }

    #[test]
    fn huge_numbers_saturate() {
        assert_eq!(parse_leading_number("99999999999999999999"), u32::MAX);
    }
}
