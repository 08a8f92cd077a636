//! Serde support (feature `serde`).
//!
//! A [`Quantity`] serializes as `{"value": f64, "unit": "<symbol>"}`. On the way back the unit symbol is parsed
//! and the magnitude is checked for finiteness, so a payload can never smuggle in a NaN or a length where an angle
//! is expected.
//!
//! Record formats that carry bare numbers with an implied unit use [`serde_degrees`] or [`serde_meters`] through
//! `#[serde(with = "...")]`.

use crate::{Quantity, QuantityError, Unit};
use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.magnitude())?;
        state.serialize_field("unit", self.unit().symbol())?;
        state.end()
    }
}

impl<'de, U> Deserialize<'de> for Quantity<U>
where
    U: Unit + FromStr<Err = QuantityError>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U> Visitor<'de> for QuantityVisitor<U>
        where
            U: Unit + FromStr<Err = QuantityError>,
        {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let unit = unit.ok_or_else(|| de::Error::missing_field("unit"))?;
                let unit: U = unit.parse().map_err(de::Error::custom)?;
                Quantity::new(value, unit).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}

/// Reads and writes an [`AngleValue`](crate::AngleValue) as a bare number of degrees.
///
/// ```rust
/// use altaz_units::AngleValue;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Pointing {
///     #[serde(with = "altaz_units::serde_degrees")]
///     az: AngleValue,
/// }
///
/// let p: Pointing = serde_json::from_str(r#"{"az": 208.1663}"#).unwrap();
/// assert_eq!(p.az.magnitude(), 208.1663);
/// ```
pub mod serde_degrees {
    use crate::AngleValue;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes the angle in degrees.
    pub fn serialize<S>(angle: &AngleValue, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(angle.in_degrees())
    }

    /// Deserializes a finite number of degrees.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<AngleValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        AngleValue::degrees(value).map_err(de::Error::custom)
    }
}

/// Reads and writes a [`LengthValue`](crate::LengthValue) as a bare number of metres.
pub mod serde_meters {
    use crate::LengthValue;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes the length in metres.
    pub fn serialize<S>(length: &LengthValue, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(length.in_meters())
    }

    /// Deserializes a finite number of metres.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<LengthValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        LengthValue::meters(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AngleUnit, AngleValue, LengthValue};
    use serde::{Deserialize, Serialize};

    #[test]
    fn quantity_round_trips_with_unit() {
        let ra = AngleValue::new(6.752, AngleUnit::HourAngle).unwrap();
        let json = serde_json::to_string(&ra).unwrap();
        assert_eq!(json, r#"{"value":6.752,"unit":"hourangle"}"#);
        let back: AngleValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ra);
    }

    #[test]
    fn rejects_wrong_dimension_unit() {
        let err = serde_json::from_str::<AngleValue>(r#"{"value": 38.0, "unit": "m"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown unit"));
    }

    #[test]
    fn requires_unit_field() {
        assert!(serde_json::from_str::<LengthValue>(r#"{"value": 38.0}"#).is_err());
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Site {
        #[serde(with = "crate::serde_degrees")]
        lat: AngleValue,
        #[serde(with = "crate::serde_meters")]
        height: LengthValue,
    }

    #[test]
    fn bare_number_helpers() {
        let site: Site = serde_json::from_str(r#"{"lat": 48.86, "height": 38}"#).unwrap();
        assert_eq!(site.lat.unit(), AngleUnit::Degree);
        assert_eq!(site.height.in_meters(), 38.0);
        let json = serde_json::to_string(&site).unwrap();
        assert_eq!(json, r#"{"lat":48.86,"height":38.0}"#);
    }
}
