use serde::ser::{Serialize, Serializer};

/// An enumeration stored in GTFS files as a small non-negative integer
///
/// Unlike the raw integer, only the values defined by the reference are accepted.
pub trait Policy: Sized + Copy {
    /// Value for the given code, `None` if the code is not part of the enumeration
    fn from_code(code: u32) -> Option<Self>;
    /// Code of the value in a GTFS file
    fn code(&self) -> u32;
}

macro_rules! impl_policy {
    ($policy:ident { $($variant:ident = $code:literal),+ $(,)? }) => {
        impl Policy for $policy {
            fn from_code(code: u32) -> Option<Self> {
                match code {
                    $($code => Some($policy::$variant),)+
                    _ => None,
                }
            }

            fn code(&self) -> u32 {
                match self {
                    $($policy::$variant => $code,)+
                }
            }
        }

        impl Serialize for $policy {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_u32(self.code())
            }
        }
    };
}

/// Describes the kind of [crate::Route]. See <https://gtfs.org/reference/static/#routestxt> `route_type`
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default(bound = ""))]
pub enum RouteType {
    /// Tram, Streetcar, Light rail. Any light rail or street level system within a metropolitan area
    Tramway,
    /// Any underground rail system within a metropolitan area
    Subway,
    /// Used for intercity or long-distance travel
    Rail,
    /// Used for short- and long-distance bus routes
    #[derivative(Default)]
    Bus,
    /// Used for short- and long-distance boat service
    Ferry,
    /// Used for street-level rail cars where the cable runs beneath the vehicle, e.g., cable car in San Francisco
    CableTram,
    /// Aerial lift, suspended cable car (e.g., gondola lift, aerial tramway)
    AerialLift,
    /// Any rail system designed for steep inclines
    Funicular,
    /// Electric buses that draw power from overhead wires using poles
    Trolleybus,
    /// Railway in which the track consists of a single rail or a beam
    Monorail,
}

impl_policy!(RouteType {
    Tramway = 0,
    Subway = 1,
    Rail = 2,
    Bus = 3,
    Ferry = 4,
    CableTram = 5,
    AerialLift = 6,
    Funicular = 7,
    Trolleybus = 11,
    Monorail = 12,
});

/// Describes if and how a traveller can board or alight the vehicle
///
/// Used by `pickup_type` and `drop_off_type` in [crate::StopTime], and by
/// `continuous_pickup` and `continuous_drop_off` in both [crate::Route] and [crate::StopTime].
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default(bound = ""))]
pub enum PickupDropOffType {
    /// Regularly scheduled (or continuous) pickup or drop off
    #[derivative(Default)]
    Regular,
    /// No pickup or drop off available
    NotAvailable,
    /// Must phone agency to arrange pickup or drop off
    ArrangeByPhone,
    /// Must coordinate with driver to arrange pickup or drop off
    CoordinateWithDriver,
}

impl_policy!(PickupDropOffType {
    Regular = 0,
    NotAvailable = 1,
    ArrangeByPhone = 2,
    CoordinateWithDriver = 3,
});

/// Describes the kind of [crate::Stop]. See <https://gtfs.org/reference/static/#stopstxt> `location_type`
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default(bound = ""))]
pub enum LocationType {
    /// Stop (or Platform). A location where passengers board or disembark from a transit vehicle
    #[derivative(Default)]
    StopPoint,
    /// Station. A physical structure or area that contains one or more platform
    StopArea,
    /// A location where passengers can enter or exit a station from the street
    StationEntrance,
    /// A location within a station, not matching any other location type
    GenericNode,
    /// A specific location on a platform, where passengers can board and/or alight vehicles
    BoardingArea,
}

impl_policy!(LocationType {
    StopPoint = 0,
    StopArea = 1,
    StationEntrance = 2,
    GenericNode = 3,
    BoardingArea = 4,
});

/// Generic enum to define if a service (like wheelchair access) is available
#[derive(Debug, Derivative, PartialEq, Eq, Hash, Clone, Copy)]
#[derivative(Default)]
pub enum Availability {
    /// No information if the service is available, or inherited from the parent station
    #[derivative(Default)]
    InformationNotAvailable,
    /// The service is available
    Available,
    /// The service is not available
    NotAvailable,
}

impl_policy!(Availability {
    InformationNotAvailable = 0,
    Available = 1,
    NotAvailable = 2,
});

/// Indicates the direction of travel for a [crate::Trip]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DirectionType {
    /// Travel in one direction (e.g. outbound travel)
    Outbound,
    /// Travel in the opposite direction (e.g. inbound travel)
    Inbound,
}

impl_policy!(DirectionType {
    Outbound = 0,
    Inbound = 1,
});

/// Defines if the [crate::StopTime] is exact or not
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default)]
pub enum TimepointType {
    /// Times are considered approximate
    Approximate,
    /// Times are considered exact
    #[derivative(Default)]
    Exact,
}

impl_policy!(TimepointType {
    Approximate = 0,
    Exact = 1,
});
