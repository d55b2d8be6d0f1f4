//! Lenient numeric parsing for form fields.
//!
//! Entry forms never reject numeric text. The longest leading numeric
//! prefix is taken (`"10abc"` is 10, `"  2.5"` is 2.5, `"1e3"` is 1000) and
//! anything without one is zero. Magnitudes beyond [`MAX_INPUT_MAGNITUDE`]
//! are treated as unparsable, which keeps `price × qty` and
//! `mrp × qty` well inside the `Decimal` range.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Largest absolute value accepted from a form field.
pub const MAX_INPUT_MAGNITUDE: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 1e12

/// Parses a form field, falling back to zero.
#[must_use]
pub fn parse_amount(input: &str) -> Decimal {
    numeric_prefix(input.trim_start())
        .and_then(|prefix| prefix.to_decimal())
        .filter(|value| value.abs() <= MAX_INPUT_MAGNITUDE)
        .unwrap_or(Decimal::ZERO)
}

/// The pieces of a numeric prefix, already split for normalisation.
struct NumericPrefix<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: Option<&'a str>,
}

impl NumericPrefix<'_> {
    fn to_decimal(&self) -> Option<Decimal> {
        let integer = if self.integer.is_empty() { "0" } else { self.integer };
        let mut text = String::with_capacity(integer.len() + self.fraction.len() + 8);
        if self.negative {
            text.push('-');
        }
        text.push_str(integer);
        if !self.fraction.is_empty() {
            text.push('.');
            text.push_str(self.fraction);
        }

        match self.exponent {
            Some(exp) => {
                text.push('e');
                text.push_str(exp);
                Decimal::from_scientific(&text).ok()
            }
            None => Decimal::from_str(&text).ok(),
        }
    }
}

fn take_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

fn numeric_prefix(s: &str) -> Option<NumericPrefix<'_>> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let integer = take_digits(rest);
    let mut rest = &rest[integer.len()..];

    let mut fraction = "";
    if let Some(after_dot) = rest.strip_prefix('.') {
        fraction = take_digits(after_dot);
        if !integer.is_empty() || !fraction.is_empty() {
            rest = &after_dot[fraction.len()..];
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent = None;
    if let Some(after_e) = rest.strip_prefix(['e', 'E']) {
        let unsigned = after_e.strip_prefix(['+', '-']).unwrap_or(after_e);
        let digits = take_digits(unsigned);
        if !digits.is_empty() {
            let sign_len = after_e.len() - unsigned.len();
            exponent = Some(&after_e[..sign_len + digits.len()]);
        }
    }

    Some(NumericPrefix {
        negative,
        integer,
        fraction,
        exponent,
    })
}
