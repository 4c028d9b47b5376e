//! Natural-order comparison of table cells.
//!
//! Values fall in three bands: missing (`Null`) first, then anything that
//! reads as a plain decimal number, then other text. Numbers compare by
//! value, integers exactly; text compares chunk by chunk with embedded digit runs compared by
//! magnitude. Banding keeps the order total, which `slice::sort_by` needs.

use crate::CellValue;
use serde_json::Number;
use std::borrow::Cow;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder {
    pub case_insensitive: bool,
}

impl NaturalOrder {
    pub fn new(case_insensitive: bool) -> Self {
        Self { case_insensitive }
    }

    pub fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        match (a, b) {
            (CellValue::Null, CellValue::Null) => Ordering::Equal,
            (CellValue::Null, _) => Ordering::Less,
            (_, CellValue::Null) => Ordering::Greater,
            _ => match (as_number(a), as_number(b)) {
                (Some(x), Some(y)) => compare_numeric(x, y)
                    .then_with(|| self.compare_text(&as_text(a), &as_text(b))),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => self.compare_text(&as_text(a), &as_text(b)),
            },
        }
    }

    pub fn compare_text(&self, a: &str, b: &str) -> Ordering {
        let mut left = Chunks::new(a);
        let mut right = Chunks::new(b);
        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(x), Some(y)) => {
                    let ord = self.compare_chunk(x, y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
            }
        }
    }

    fn compare_chunk(&self, a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
        match (a, b) {
            (Chunk::Digits(x), Chunk::Digits(y)) => compare_digits(x, y),
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
            (Chunk::Text(x), Chunk::Text(y)) => {
                if self.case_insensitive {
                    x.to_lowercase().cmp(&y.to_lowercase())
                } else {
                    x.cmp(y)
                }
            }
        }
    }
}

/// Case-sensitive natural comparison.
pub fn natural_cmp(a: &CellValue, b: &CellValue) -> Ordering {
    NaturalOrder::default().compare(a, b)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Int(i128),
    Float(f64),
}

fn compare_numeric(a: Numeric, b: Numeric) -> Ordering {
    match (a, b) {
        (Numeric::Int(x), Numeric::Int(y)) => x.cmp(&y),
        (Numeric::Float(x), Numeric::Float(y)) => x.total_cmp(&y),
        (Numeric::Int(x), Numeric::Float(y)) => compare_int_float(x, y),
        (Numeric::Float(x), Numeric::Int(y)) => compare_int_float(y, x).reverse(),
    }
}

/// Rounding to `f64` is monotonic, so only a tie after rounding needs the
/// exact integer comparison. A tied float is always a whole number.
fn compare_int_float(int: i128, float: f64) -> Ordering {
    match (int as f64).total_cmp(&float) {
        Ordering::Equal => int.cmp(&(float as i128)),
        ord => ord,
    }
}

fn as_number(value: &CellValue) -> Option<Numeric> {
    match value {
        CellValue::Number(n) => from_json_number(n),
        CellValue::Text(text) => parse_decimal(text),
        CellValue::Bool(_) | CellValue::Null => None,
    }
}

fn from_json_number(number: &Number) -> Option<Numeric> {
    if let Some(value) = number.as_i64() {
        Some(Numeric::Int(i128::from(value)))
    } else if let Some(value) = number.as_u64() {
        Some(Numeric::Int(i128::from(value)))
    } else {
        number.as_f64().map(Numeric::Float)
    }
}

/// Accepts `[+-]digits[.digits]` only, no exponents or `inf`/`nan`.
/// Whole numbers that fit an `i128` stay exact.
fn parse_decimal(text: &str) -> Option<Numeric> {
    let text = text.trim();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let valid = all_digits(int)
        && frac.map_or(true, all_digits)
        && (!int.is_empty() || frac.is_some_and(|f| !f.is_empty()));
    if !valid {
        return None;
    }
    if frac.is_none() {
        if let Ok(value) = text.parse::<i128>() {
            return Some(Numeric::Int(value));
        }
    }
    text.parse::<f64>().ok().map(Numeric::Float)
}

fn as_text(value: &CellValue) -> Cow<'_, str> {
    match value {
        CellValue::Text(text) => Cow::Borrowed(text.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Digit runs of arbitrary length compared by magnitude, then by the
/// number of leading zeros so that `"2" < "02"` stays deterministic.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let x = a.trim_start_matches('0');
    let y = b.trim_start_matches('0');
    x.len()
        .cmp(&y.len())
        .then_with(|| x.cmp(y))
        .then_with(|| a.len().cmp(&b.len()))
}

#[derive(Debug, Clone, Copy)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(idx, _)| idx)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::from(value)
    }

    #[test]
    fn chunks_split_digit_runs() {
        let chunks: Vec<_> = Chunks::new("ch12b3")
            .map(|c| match c {
                Chunk::Digits(d) => format!("d:{d}"),
                Chunk::Text(t) => format!("t:{t}"),
            })
            .collect();
        assert_eq!(chunks, vec!["t:ch", "d:12", "t:b", "d:3"]);
    }

    #[test]
    fn leading_zeros_break_ties_deterministically() {
        assert_eq!(compare_digits("2", "02"), Ordering::Less);
        assert_eq!(compare_digits("007", "7"), Ordering::Greater);
        assert_eq!(compare_digits("10", "9"), Ordering::Greater);
    }

    #[test]
    fn decimal_parsing_rejects_exponents_and_words() {
        assert_eq!(parse_decimal(" 12.5 "), Some(Numeric::Float(12.5)));
        assert_eq!(parse_decimal("-.5"), Some(Numeric::Float(-0.5)));
        assert_eq!(parse_decimal("+42"), Some(Numeric::Int(42)));
        assert_eq!(parse_decimal("7."), Some(Numeric::Float(7.0)));
        assert_eq!(parse_decimal("1e3"), None);
        assert_eq!(parse_decimal("nan"), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("."), None);
    }

    #[test]
    fn numbers_sort_before_words() {
        assert_eq!(natural_cmp(&text("99"), &text("good")), Ordering::Less);
        assert_eq!(
            natural_cmp(&CellValue::from(3.0), &text("mua")),
            Ordering::Less
        );
    }

    #[test]
    fn numeric_text_compares_by_value() {
        assert_eq!(natural_cmp(&text("2"), &text("10")), Ordering::Less);
        assert_eq!(natural_cmp(&text("12.5"), &text("12.25")), Ordering::Greater);
        assert_eq!(natural_cmp(&text("-5"), &text("-20")), Ordering::Greater);
    }

    #[test]
    fn large_integers_compare_exactly() {
        let above = CellValue::from(9_007_199_254_740_993u64);
        let below = CellValue::from(9_007_199_254_740_992u64);
        assert_eq!(natural_cmp(&above, &below), Ordering::Greater);
        assert_eq!(
            natural_cmp(&text("9007199254740993"), &below),
            Ordering::Greater
        );
        assert_eq!(
            natural_cmp(&above, &CellValue::from(9_007_199_254_740_992.0)),
            Ordering::Greater
        );
        assert_eq!(
            natural_cmp(&CellValue::from(-1i64), &CellValue::from(u64::MAX)),
            Ordering::Less
        );
    }

    #[test]
    fn integers_and_floats_interleave_by_value() {
        assert_eq!(
            natural_cmp(&CellValue::from(2u64), &CellValue::from(2.5)),
            Ordering::Less
        );
        assert_eq!(
            natural_cmp(&CellValue::from(3.5), &CellValue::from(3i64)),
            Ordering::Greater
        );
        assert_eq!(compare_int_float(3, 3.0), Ordering::Equal);
    }
}
