//! Conversion of the raw text of a field into a typed value
use crate::enums::*;
use crate::Error;
use chrono_tz::Tz;
use rgb::RGBA8;
use serde::Serialize;
use std::fmt;
use url::Url;

/// Language of an agency, as an IETF BCP 47 language code (`agency_lang`)
///
/// The code is kept as written in the feed, only trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Creates a locale from its language code
    pub fn new(code: impl Into<String>) -> Self {
        Locale(code.into())
    }

    /// The language code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The semantic type of a column
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Mandatory text, kept verbatim
    String,
    /// Text kept verbatim, absent when empty
    OptionalString,
    /// Mandatory non-negative integer
    UInt,
    /// Non-negative integer, absent when empty
    OptionalUInt,
    /// Mandatory absolute URL
    Url,
    /// Absolute URL, absent when empty
    OptionalUrl,
    /// Mandatory IANA time zone
    TimeZone,
    /// IANA time zone, absent when empty
    OptionalTimeZone,
    /// Language code, absent when empty
    Locale,
    /// `RRGGBB` or `RRGGBBAA` hexadecimal color, absent when empty
    Color,
    /// Latitude or longitude in decimal degrees, absent when empty
    Coordinate,
    /// `HH:MM:SS` service time, absent when empty
    Time,
    /// Non-negative distance, absent when empty
    Distance,
    /// Mandatory [RouteType]
    RouteType,
    /// [PickupDropOffType], absent when empty
    PickupDropOff,
    /// [LocationType], absent when empty
    LocationType,
    /// [Availability], absent when empty
    Availability,
    /// [DirectionType], absent when empty
    Direction,
    /// [TimepointType], absent when empty
    Timepoint,
}

/// A typed value, ready to be assigned to an entity
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// See [Kind::String]
    String(String),
    /// See [Kind::OptionalString]
    OptionalString(Option<String>),
    /// See [Kind::UInt]
    UInt(u32),
    /// See [Kind::OptionalUInt]
    OptionalUInt(Option<u32>),
    /// See [Kind::Url]
    Url(Url),
    /// See [Kind::OptionalUrl]
    OptionalUrl(Option<Url>),
    /// See [Kind::TimeZone]
    TimeZone(Tz),
    /// See [Kind::OptionalTimeZone]
    OptionalTimeZone(Option<Tz>),
    /// See [Kind::Locale]
    Locale(Option<Locale>),
    /// See [Kind::Color]
    Color(Option<RGBA8>),
    /// See [Kind::Coordinate]
    Coordinate(Option<f64>),
    /// See [Kind::Time], in seconds
    Time(Option<u32>),
    /// See [Kind::Distance]
    Distance(Option<f64>),
    /// See [Kind::RouteType]
    RouteType(RouteType),
    /// See [Kind::PickupDropOff]
    PickupDropOff(Option<PickupDropOffType>),
    /// See [Kind::LocationType]
    LocationType(Option<LocationType>),
    /// See [Kind::Availability]
    Availability(Option<Availability>),
    /// See [Kind::Direction]
    Direction(Option<DirectionType>),
    /// See [Kind::Timepoint]
    Timepoint(Option<TimepointType>),
}

impl Kind {
    /// Human readable name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::OptionalString => "optional string",
            Kind::UInt => "unsigned integer",
            Kind::OptionalUInt => "optional unsigned integer",
            Kind::Url => "url",
            Kind::OptionalUrl => "optional url",
            Kind::TimeZone => "time zone",
            Kind::OptionalTimeZone => "optional time zone",
            Kind::Locale => "locale",
            Kind::Color => "color",
            Kind::Coordinate => "coordinate",
            Kind::Time => "time",
            Kind::Distance => "distance",
            Kind::RouteType => "route type",
            Kind::PickupDropOff => "pickup/drop off policy",
            Kind::LocationType => "location type",
            Kind::Availability => "availability",
            Kind::Direction => "direction",
            Kind::Timepoint => "timepoint",
        }
    }

    /// Converts the raw text of the column `field` into a value of this kind
    ///
    /// Surrounding whitespace is ignored, except for strings that are kept as is.
    pub fn coerce(&self, field: &'static str, raw: &str) -> Result<Value, Error> {
        let invalid = || Error::InvalidValue {
            field,
            value: raw.to_owned(),
        };
        let text = raw.trim();
        let optional = (!text.is_empty()).then_some(text);
        let required = || optional.ok_or_else(invalid);

        Ok(match self {
            Kind::String => Value::String(raw.to_owned()),
            Kind::OptionalString => {
                Value::OptionalString((!raw.is_empty()).then(|| raw.to_owned()))
            }
            Kind::UInt => Value::UInt(required()?.parse().map_err(|_| invalid())?),
            Kind::OptionalUInt => Value::OptionalUInt(
                optional
                    .map(|s| s.parse().map_err(|_| invalid()))
                    .transpose()?,
            ),
            Kind::Url => Value::Url(Url::parse(required()?).map_err(|_| invalid())?),
            Kind::OptionalUrl => Value::OptionalUrl(
                optional
                    .map(|s| Url::parse(s).map_err(|_| invalid()))
                    .transpose()?,
            ),
            Kind::TimeZone => Value::TimeZone(required()?.parse().map_err(|_| invalid())?),
            Kind::OptionalTimeZone => Value::OptionalTimeZone(
                optional
                    .map(|s| s.parse::<Tz>().map_err(|_| invalid()))
                    .transpose()?,
            ),
            Kind::Locale => Value::Locale(optional.map(Locale::new)),
            Kind::Color => Value::Color(
                optional
                    .map(|s| parse_color(s).ok_or_else(invalid))
                    .transpose()?,
            ),
            Kind::Coordinate => Value::Coordinate(
                optional
                    .map(|s| parse_decimal(s).ok_or_else(invalid))
                    .transpose()?,
            ),
            Kind::Time => Value::Time(
                optional
                    .map(|s| parse_time(s).ok_or_else(invalid))
                    .transpose()?,
            ),
            Kind::Distance => Value::Distance(
                optional
                    .map(|s| {
                        parse_decimal(s)
                            .filter(|d| *d >= 0.0)
                            .ok_or_else(invalid)
                    })
                    .transpose()?,
            ),
            Kind::RouteType => Value::RouteType(parse_policy(required()?).ok_or_else(invalid)?),
            Kind::PickupDropOff => Value::PickupDropOff(optional_policy(optional, &invalid)?),
            Kind::LocationType => Value::LocationType(optional_policy(optional, &invalid)?),
            Kind::Availability => Value::Availability(optional_policy(optional, &invalid)?),
            Kind::Direction => Value::Direction(optional_policy(optional, &invalid)?),
            Kind::Timepoint => Value::Timepoint(optional_policy(optional, &invalid)?),
        })
    }
}

impl Value {
    /// The kind of the value
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::OptionalString(_) => Kind::OptionalString,
            Value::UInt(_) => Kind::UInt,
            Value::OptionalUInt(_) => Kind::OptionalUInt,
            Value::Url(_) => Kind::Url,
            Value::OptionalUrl(_) => Kind::OptionalUrl,
            Value::TimeZone(_) => Kind::TimeZone,
            Value::OptionalTimeZone(_) => Kind::OptionalTimeZone,
            Value::Locale(_) => Kind::Locale,
            Value::Color(_) => Kind::Color,
            Value::Coordinate(_) => Kind::Coordinate,
            Value::Time(_) => Kind::Time,
            Value::Distance(_) => Kind::Distance,
            Value::RouteType(_) => Kind::RouteType,
            Value::PickupDropOff(_) => Kind::PickupDropOff,
            Value::LocationType(_) => Kind::LocationType,
            Value::Availability(_) => Kind::Availability,
            Value::Direction(_) => Kind::Direction,
            Value::Timepoint(_) => Kind::Timepoint,
        }
    }
}

fn parse_policy<P: Policy>(s: &str) -> Option<P> {
    s.parse().ok().and_then(P::from_code)
}

fn optional_policy<P: Policy>(
    s: Option<&str>,
    invalid: impl Fn() -> Error,
) -> Result<Option<P>, Error> {
    s.map(|s| parse_policy(s).ok_or_else(&invalid)).transpose()
}

fn parse_decimal(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|d| d.is_finite())
}

/// Parses a `RRGGBB` or `RRGGBBAA` hexadecimal color, optionally preceded by `#`
///
/// Colors without an alpha channel are opaque.
pub fn parse_color(s: &str) -> Option<RGBA8> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        6 => Some(RGBA8::new(channel(0)?, channel(2)?, channel(4)?, u8::MAX)),
        8 => Some(RGBA8::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

/// Parses a `H:MM:SS` or `HH:MM:SS` time into a number of seconds
///
/// Hours can be greater than 23 for trips finishing after midnight.
pub fn parse_time(s: &str) -> Option<u32> {
    let mut parts = s.split(':');
    let (h, m, sec) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some()
        || !(1..=2).contains(&h.len())
        || m.len() != 2
        || sec.len() != 2
        || !s.bytes().all(|b| b.is_ascii_digit() || b == b':')
    {
        return None;
    }
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    let seconds: u32 = sec.parse().ok()?;
    if minutes > 59 || seconds > 59 {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: RGBA8 = RGBA8 {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    #[test]
    fn colors() {
        assert_eq!(Some(WHITE), parse_color("ffffffff"));
        assert_eq!(Some(WHITE), parse_color("#ffffffff"));
        assert_eq!(Some(WHITE), parse_color("#ffffff"));
        assert_eq!(
            Some(RGBA8::new(0x12, 0x34, 0x56, 0x78)),
            parse_color("12345678")
        );
        assert_eq!(None, parse_color("%ffffff"));
        assert_eq!(None, parse_color("%fffff"));
        assert_eq!(None, parse_color("uncool"));
        assert_eq!(None, parse_color("+fffff"));
        assert_eq!(None, parse_color("fffff"));
        assert_eq!(None, parse_color("ffé"));
    }

    #[test]
    fn color_kind() {
        assert_eq!(
            Value::Color(Some(WHITE)),
            Kind::Color.coerce("route_color", " #FFFFFF ").unwrap()
        );
        assert_eq!(Value::Color(None), Kind::Color.coerce("route_color", "").unwrap());
        assert!(matches!(
            Kind::Color.coerce("route_color", "%ffffff"),
            Err(Error::InvalidValue {
                field: "route_color",
                ..
            })
        ));
    }

    #[test]
    fn times() {
        assert_eq!(Some(3600 + 60 + 1), parse_time("01:01:01"));
        assert_eq!(Some(8 * 3600 + 30 * 60), parse_time("8:30:00"));
        assert_eq!(Some(25 * 3600), parse_time("25:00:00"));
        assert_eq!(None, parse_time("08:60:00"));
        assert_eq!(None, parse_time("08:00"));
        assert_eq!(None, parse_time("08:00:00:00"));
        assert_eq!(None, parse_time("+8:00:00"));
        assert_eq!(None, parse_time("é:00:00"));
    }

    #[test]
    fn strings_are_kept_verbatim() {
        assert_eq!(
            Value::String(" padded ".to_owned()),
            Kind::String.coerce("agency_name", " padded ").unwrap()
        );
        assert_eq!(
            Value::String(String::new()),
            Kind::String.coerce("agency_name", "").unwrap()
        );
        assert_eq!(
            Value::OptionalString(None),
            Kind::OptionalString.coerce("agency_phone", "").unwrap()
        );
        assert_eq!(
            Value::OptionalString(Some(" ".to_owned())),
            Kind::OptionalString.coerce("agency_phone", " ").unwrap()
        );
    }

    #[test]
    fn empty_optional_values_are_absent() {
        let optional_kinds = [
            (Kind::OptionalUInt, Value::OptionalUInt(None)),
            (Kind::OptionalUrl, Value::OptionalUrl(None)),
            (Kind::OptionalTimeZone, Value::OptionalTimeZone(None)),
            (Kind::Locale, Value::Locale(None)),
            (Kind::Color, Value::Color(None)),
            (Kind::Coordinate, Value::Coordinate(None)),
            (Kind::Time, Value::Time(None)),
            (Kind::Distance, Value::Distance(None)),
            (Kind::PickupDropOff, Value::PickupDropOff(None)),
            (Kind::LocationType, Value::LocationType(None)),
            (Kind::Availability, Value::Availability(None)),
            (Kind::Direction, Value::Direction(None)),
            (Kind::Timepoint, Value::Timepoint(None)),
        ];
        for (kind, expected) in optional_kinds {
            assert_eq!(expected, kind.coerce("field", "").unwrap());
            assert_eq!(expected, kind.coerce("field", "  ").unwrap());
        }
    }

    #[test]
    fn empty_required_values_fail() {
        for kind in [Kind::UInt, Kind::Url, Kind::TimeZone, Kind::RouteType] {
            assert!(matches!(
                kind.coerce("field", ""),
                Err(Error::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn integers() {
        assert_eq!(Value::UInt(12), Kind::UInt.coerce("stop_sequence", " 12 ").unwrap());
        assert!(Kind::UInt.coerce("stop_sequence", "-1").is_err());
        assert!(Kind::UInt.coerce("stop_sequence", "1.5").is_err());
        assert_eq!(
            Value::OptionalUInt(Some(3)),
            Kind::OptionalUInt.coerce("route_sort_order", "3").unwrap()
        );
    }

    #[test]
    fn time_zones_and_urls() {
        assert_eq!(
            Value::TimeZone(chrono_tz::America::Chicago),
            Kind::TimeZone
                .coerce("agency_timezone", "America/Chicago")
                .unwrap()
        );
        assert!(Kind::TimeZone.coerce("agency_timezone", "Mars/Olympus").is_err());
        assert!(Kind::OptionalUrl.coerce("stop_url", "not a url").is_err());
        assert!(Kind::OptionalUrl.coerce("agency_fare_url", "/fares").is_err());
        assert_eq!(
            "http://transitchicago.com/",
            match Kind::Url.coerce("agency_url", "http://transitchicago.com").unwrap() {
                Value::Url(url) => url.to_string(),
                other => panic!("unexpected value {:?}", other),
            }
        );
    }

    #[test]
    fn locales_never_fail() {
        assert_eq!(
            Value::Locale(Some(Locale::new("en"))),
            Kind::Locale.coerce("agency_lang", " en ").unwrap()
        );
        assert_eq!(
            Value::Locale(Some(Locale::new("not a language"))),
            Kind::Locale.coerce("agency_lang", "not a language").unwrap()
        );
    }

    #[test]
    fn coordinates_and_distances() {
        assert_eq!(
            Value::Coordinate(Some(41.878_1)),
            Kind::Coordinate.coerce("stop_lat", "41.8781").unwrap()
        );
        assert!(Kind::Coordinate.coerce("stop_lat", "north").is_err());
        assert!(Kind::Coordinate.coerce("stop_lat", "NaN").is_err());
        assert!(Kind::Distance.coerce("shape_dist_traveled", "-2").is_err());
    }

    #[test]
    fn policies() {
        assert_eq!(
            Value::RouteType(RouteType::Monorail),
            Kind::RouteType.coerce("route_type", "12").unwrap()
        );
        assert!(Kind::RouteType.coerce("route_type", "9").is_err());
        assert_eq!(
            Value::PickupDropOff(Some(PickupDropOffType::CoordinateWithDriver)),
            Kind::PickupDropOff.coerce("pickup_type", "3").unwrap()
        );
        assert!(Kind::PickupDropOff.coerce("pickup_type", "4").is_err());
        assert!(Kind::Direction.coerce("direction_id", "north").is_err());
    }
}
