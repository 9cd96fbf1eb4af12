use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

const CENTS_PER_UNIT: i64 = 100;

/// Currency amount stored as a whole number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Self { cents: units * CENTS_PER_UNIT }
    }

    #[inline]
    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Two decimal places, as shown in the grid: `1200.00`, `-1.50`
    pub fn to_fixed(self) -> String {
        let (sign, units, frac) = self.parts();
        format!("{sign}{units}.{frac:02}")
    }

    fn parts(self) -> (&'static str, u64, u64) {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        (sign, abs / CENTS_PER_UNIT as u64, abs % CENTS_PER_UNIT as u64)
    }
}

/// General form: whole amounts have no fraction (`800`), others keep two digits (`12.50`).
impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, units, frac) = self.parts();
        if frac == 0 { write!(f, "{sign}{units}") } else { write!(f, "{sign}{units}.{frac:02}") }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePriceError {
    Empty,
    InvalidChar(char),
    TooPrecise,
    Overflow,
}

impl Display for ParsePriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePriceError::Empty => f.write_str("price is empty"),
            ParsePriceError::InvalidChar(c) => write!(f, "unexpected character `{c}` in price"),
            ParsePriceError::TooPrecise => f.write_str("price has more than two decimal places"),
            ParsePriceError::Overflow => f.write_str("price is too large"),
        }
    }
}

impl Error for ParsePriceError {}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err(ParsePriceError::Empty),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(ParsePriceError::Empty);
        }
        if let Some(c) = whole.chars().chain(frac.chars()).find(|c| !c.is_ascii_digit()) {
            return Err(ParsePriceError::InvalidChar(c));
        }
        if frac.len() > 2 {
            return Err(ParsePriceError::TooPrecise);
        }

        let units = whole.bytes().try_fold(0i64, |acc, b| {
            acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
        });
        let cents = frac
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));
        let total = units
            .and_then(|u| u.checked_mul(CENTS_PER_UNIT))
            .and_then(|u| u.checked_add(cents))
            .ok_or(ParsePriceError::Overflow)?;

        Ok(Price::from_cents(if negative { -total } else { total }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Price::from_units(800).to_string(), "800");
        assert_eq!(Price::from_cents(1250).to_string(), "12.50");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(-150).to_string(), "-1.50");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(Price::from_units(1200).to_fixed(), "1200.00");
        assert_eq!(Price::from_cents(1205).to_fixed(), "12.05");
        assert_eq!(Price::from_cents(-150).to_fixed(), "-1.50");
        assert_eq!(Price::default().to_fixed(), "0.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!("12".parse(), Ok(Price::from_units(12)));
        assert_eq!("12.5".parse(), Ok(Price::from_cents(1250)));
        assert_eq!(" 1200.00 ".parse(), Ok(Price::from_units(1200)));
        assert_eq!("+0.05".parse(), Ok(Price::from_cents(5)));
        assert_eq!(".5".parse(), Ok(Price::from_cents(50)));
        assert_eq!("7.".parse(), Ok(Price::from_units(7)));
        assert_eq!("-3".parse(), Ok(Price::from_units(-3)));
    }

    #[test]
    fn test_parse_error() {
        assert_eq!("".parse::<Price>(), Err(ParsePriceError::Empty));
        assert_eq!("  ".parse::<Price>(), Err(ParsePriceError::Empty));
        assert_eq!("-".parse::<Price>(), Err(ParsePriceError::Empty));
        assert_eq!(".".parse::<Price>(), Err(ParsePriceError::Empty));
        assert_eq!("12a".parse::<Price>(), Err(ParsePriceError::InvalidChar('a')));
        assert_eq!("1,200".parse::<Price>(), Err(ParsePriceError::InvalidChar(',')));
        assert_eq!("1.2.3".parse::<Price>(), Err(ParsePriceError::InvalidChar('.')));
        assert_eq!("1.234".parse::<Price>(), Err(ParsePriceError::TooPrecise));
        assert_eq!("99999999999999999999".parse::<Price>(), Err(ParsePriceError::Overflow));
    }

    #[test]
    fn test_ordering_is_numeric() {
        let mut prices: Vec<Price> =
            ["1200", "800", "400.5", "400", "300"].iter().map(|s| s.parse().unwrap()).collect();
        prices.sort();
        let fixed: Vec<String> = prices.iter().map(|p| p.to_fixed()).collect();
        assert_eq!(fixed, vec!["300.00", "400.00", "400.50", "800.00", "1200.00"]);
    }
}
