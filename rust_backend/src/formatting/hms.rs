use altaz_units::AngleValue;
use once_cell::sync::Lazy;
use regex::Regex;

use super::AngleFormatter;
use crate::error::{AltazError, AltazResult};

static HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^\s*
        (\d{1,2})                 # hours
        \s*(?:h|:)\s*
        (\d{1,2})                 # minutes
        \s*(?:m|:)\s*
        (\d{1,2}(?:\.\d*)?)       # seconds
        \s*s?\s*$
        "#,
    )
    .unwrap()
});

/// Formats a right ascension as `"<H>h<M>m<S.SS>s"`, two decimals, carrying rounded seconds.
///
/// ```
/// use altaz::formatting::format_as_hms;
/// use altaz_units::AngleValue;
///
/// assert_eq!(format_as_hms(AngleValue::degrees(101.287154).unwrap()), "6h45m8.92s");
/// ```
pub fn format_as_hms(ra: AngleValue) -> String {
    AngleFormatter::default().format_hms(ra)
}

/// Parses `6h45m8.92s`, `6h 45m 8.92s` or `6:45:8.92` into an hour-angle value.
///
/// Hours must be below 24 and minutes below 60. Seconds may be exactly 60 so that legacy output reads back.
pub fn parse_hms(s: &str) -> AltazResult<AngleValue> {
    let caps = HMS_REGEX
        .captures(s)
        .ok_or_else(|| AltazError::Parse(format!("Cannot parse '{}' as HMS", s)))?;

    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let hours: u32 = field(1)
        .parse()
        .map_err(|_| AltazError::Parse(format!("Invalid hours in '{}'", s)))?;
    let minutes: u32 = field(2)
        .parse()
        .map_err(|_| AltazError::Parse(format!("Invalid minutes in '{}'", s)))?;
    let seconds: f64 = field(3)
        .parse()
        .map_err(|_| AltazError::Parse(format!("Invalid seconds in '{}'", s)))?;

    if hours >= 24 {
        return Err(AltazError::Parse(format!("Hours must be below 24 in '{}'", s)));
    }
    if minutes >= 60 {
        return Err(AltazError::Parse(format!("Minutes must be below 60 in '{}'", s)));
    }
    if seconds > 60.0 {
        return Err(AltazError::Parse(format!("Seconds must not exceed 60 in '{}'", s)));
    }

    Ok(AngleValue::from_hms(hours as i32, minutes, seconds)?)
}
