use std::fmt;
use std::str::FromStr;

/// Lower bound of generated temperatures, inclusive.
pub const MIN_TEMP: i32 = -100;
/// Upper bound of generated temperatures, exclusive.
pub const MAX_TEMP: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Springfield,
    Hogwarts,
    Sodor,
    Whiterun,
    Falador,
}

impl Place {
    pub const ALL: [Place; 5] = [
        Place::Springfield,
        Place::Hogwarts,
        Place::Sodor,
        Place::Whiterun,
        Place::Falador,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Place::Springfield => "Springfield",
            Place::Hogwarts => "Hogwarts",
            Place::Sodor => "Sodor",
            Place::Whiterun => "Whiterun",
            Place::Falador => "Falador",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed row: {0}")]
pub struct ParseRowError(pub String);

impl FromStr for Place {
    type Err = ParseRowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Place::ALL
            .into_iter()
            .find(|place| place.as_str() == s)
            .ok_or_else(|| ParseRowError(format!("unknown place '{}'", s)))
    }
}

/// A reading in tenths of a degree, always within `[MIN_TEMP, MAX_TEMP)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Temperature(pub(crate) i32);

impl Temperature {
    pub const MIN_TENTHS: i32 = MIN_TEMP * 10;
    pub const MAX_TENTHS: i32 = MAX_TEMP * 10;

    pub fn from_tenths(tenths: i32) -> Option<Self> {
        (Self::MIN_TENTHS..Self::MAX_TENTHS)
            .contains(&tenths)
            .then_some(Temperature(tenths))
    }

    pub fn tenths(self) -> i32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

// Sign, whole degrees, one fractional digit: -5 tenths is "-0.5", 0 is "0.0".
impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{}", sign, abs / 10, abs % 10)
    }
}

impl FromStr for Temperature {
    type Err = ParseRowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseRowError(format!("bad temperature '{}'", s));

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = digits.split_once('.').ok_or_else(malformed)?;
        if whole.is_empty()
            || fraction.len() != 1
            || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let whole: i32 = whole.parse().map_err(|_| malformed())?;
        let fraction: i32 = fraction.parse().map_err(|_| malformed())?;
        let magnitude = whole
            .checked_mul(10)
            .and_then(|w| w.checked_add(fraction))
            .ok_or_else(malformed)?;
        let tenths = if negative { -magnitude } else { magnitude };

        Temperature::from_tenths(tenths).ok_or_else(malformed)
    }
}

/// One generated record. `Display` is the on-disk line format, without the newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub place_name: &'a str,
    pub temperature: Temperature,
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.place_name, self.temperature)
    }
}

/// Parses a generated line back; the place must be one of [`Place::ALL`].
impl FromStr for Row<'static> {
    type Err = ParseRowError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split(';');
        let (Some(place), Some(temperature), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(ParseRowError(format!("expected two fields in '{}'", line)));
        };
        Ok(Row {
            place_name: place.parse::<Place>()?.as_str(),
            temperature: temperature.parse()?,
        })
    }
}
