use altaz_units::AngleValue;
use once_cell::sync::Lazy;
use regex::Regex;

use super::AngleFormatter;
use crate::error::{AltazError, AltazResult};

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^\s*
        ([+-])?\s*                # sign
        (\d{1,3})                 # degrees
        \s*(?:d|°|:)\s*
        (\d{1,2})                 # arcminutes
        \s*(?:m|'|:)\s*
        (\d{1,2}(?:\.\d*)?)       # arcseconds
        \s*(?:s|")?\s*$
        "#,
    )
    .unwrap()
});

/// Formats a declination as `"-16d42m58.02s"`, two decimals, carrying rounded seconds.
pub fn format_as_dms(dec: AngleValue) -> String {
    AngleFormatter::default().format_dms(dec)
}

/// Parses `-16d42m58.02s`, `-16° 42' 58.02"` or `-16:42:58.02` into degrees.
pub fn parse_dms(s: &str) -> AltazResult<AngleValue> {
    let caps = DMS_REGEX
        .captures(s)
        .ok_or_else(|| AltazError::Parse(format!("Cannot parse '{}' as DMS", s)))?;

    let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let degrees: u32 = field(2)
        .parse()
        .map_err(|_| AltazError::Parse(format!("Invalid degrees in '{}'", s)))?;
    let minutes: u32 = field(3)
        .parse()
        .map_err(|_| AltazError::Parse(format!("Invalid arcminutes in '{}'", s)))?;
    let seconds: f64 = field(4)
        .parse()
        .map_err(|_| AltazError::Parse(format!("Invalid arcseconds in '{}'", s)))?;

    if minutes >= 60 {
        return Err(AltazError::Parse(format!("Arcminutes must be below 60 in '{}'", s)));
    }
    if seconds > 60.0 {
        return Err(AltazError::Parse(format!("Arcseconds must not exceed 60 in '{}'", s)));
    }

    let sign = if negative { -1 } else { 1 };
    Ok(AngleValue::from_dms_sign(sign, degrees, minutes, seconds)?)
}
