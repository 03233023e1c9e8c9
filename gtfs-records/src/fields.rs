//! Column identifiers of every GTFS file, with the kind of value each column holds
use crate::coerce::Kind;
use crate::header::FieldId;
use std::fmt;

macro_rules! fields {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$field_meta:meta])* $field:ident = $spelling:literal => $kind:ident,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$field_meta])* $field,)+
            /// A column that is not part of the reference. Its values are ignored
            Nonstandard,
        }

        impl FieldId for $name {
            const NONSTANDARD: Self = $name::Nonstandard;
            const ALL: &'static [Self] = &[$($name::$field),+];

            fn from_name(name: &str) -> Self {
                match name {
                    $($spelling => $name::$field,)+
                    _ => $name::Nonstandard,
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $($name::$field => $spelling,)+
                    $name::Nonstandard => "nonstandard column",
                }
            }

            fn kind(&self) -> Option<Kind> {
                match self {
                    $($name::$field => Some(Kind::$kind),)+
                    $name::Nonstandard => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

fields! {
    /// Columns of `agency.txt`
    pub enum AgencyField {
        /// `agency_id`
        Id = "agency_id" => OptionalString,
        /// `agency_name`
        Name = "agency_name" => String,
        /// `agency_url`
        Url = "agency_url" => Url,
        /// `agency_timezone`
        Timezone = "agency_timezone" => TimeZone,
        /// `agency_lang`
        Lang = "agency_lang" => Locale,
        /// `agency_phone`
        Phone = "agency_phone" => OptionalString,
        /// `agency_fare_url`
        FareUrl = "agency_fare_url" => OptionalUrl,
        /// `agency_email`
        Email = "agency_email" => OptionalString,
    }
}

fields! {
    /// Columns of `routes.txt`
    pub enum RouteField {
        /// `route_id`
        Id = "route_id" => String,
        /// `agency_id`
        AgencyId = "agency_id" => OptionalString,
        /// `route_short_name`
        ShortName = "route_short_name" => OptionalString,
        /// `route_long_name`
        LongName = "route_long_name" => OptionalString,
        /// `route_desc`
        Desc = "route_desc" => OptionalString,
        /// `route_type`
        RouteType = "route_type" => RouteType,
        /// `route_url`
        Url = "route_url" => OptionalUrl,
        /// `route_color`
        Color = "route_color" => Color,
        /// `route_text_color`
        TextColor = "route_text_color" => Color,
        /// `route_sort_order`
        SortOrder = "route_sort_order" => OptionalUInt,
        /// `continuous_pickup`
        ContinuousPickup = "continuous_pickup" => PickupDropOff,
        /// `continuous_drop_off`
        ContinuousDropOff = "continuous_drop_off" => PickupDropOff,
    }
}

fields! {
    /// Columns of `stops.txt`
    pub enum StopField {
        /// `stop_id`
        Id = "stop_id" => String,
        /// `stop_code`
        Code = "stop_code" => OptionalString,
        /// `stop_name`
        Name = "stop_name" => OptionalString,
        /// `stop_desc`
        Description = "stop_desc" => OptionalString,
        /// `stop_lat`
        Latitude = "stop_lat" => Coordinate,
        /// `stop_lon`
        Longitude = "stop_lon" => Coordinate,
        /// `zone_id`
        ZoneId = "zone_id" => OptionalString,
        /// `stop_url`
        Url = "stop_url" => OptionalUrl,
        /// `location_type`
        LocationType = "location_type" => LocationType,
        /// `parent_station`
        ParentStation = "parent_station" => OptionalString,
        /// `stop_timezone`
        Timezone = "stop_timezone" => OptionalTimeZone,
        /// `wheelchair_boarding`
        WheelchairBoarding = "wheelchair_boarding" => Availability,
        /// `level_id`
        LevelId = "level_id" => OptionalString,
        /// `platform_code`
        PlatformCode = "platform_code" => OptionalString,
    }
}

fields! {
    /// Columns of `trips.txt`
    pub enum TripField {
        /// `route_id`
        RouteId = "route_id" => String,
        /// `service_id`
        ServiceId = "service_id" => String,
        /// `trip_id`
        Id = "trip_id" => String,
        /// `trip_headsign`
        Headsign = "trip_headsign" => OptionalString,
        /// `trip_short_name`
        ShortName = "trip_short_name" => OptionalString,
        /// `direction_id`
        DirectionId = "direction_id" => Direction,
        /// `block_id`
        BlockId = "block_id" => OptionalString,
        /// `shape_id`
        ShapeId = "shape_id" => OptionalString,
        /// `wheelchair_accessible`
        WheelchairAccessible = "wheelchair_accessible" => Availability,
        /// `bikes_allowed`
        BikesAllowed = "bikes_allowed" => Availability,
    }
}

fields! {
    /// Columns of `stop_times.txt`
    pub enum StopTimeField {
        /// `trip_id`
        TripId = "trip_id" => String,
        /// `arrival_time`
        ArrivalTime = "arrival_time" => Time,
        /// `departure_time`
        DepartureTime = "departure_time" => Time,
        /// `stop_id`
        StopId = "stop_id" => String,
        /// `stop_sequence`
        StopSequence = "stop_sequence" => UInt,
        /// `stop_headsign`
        StopHeadsign = "stop_headsign" => OptionalString,
        /// `pickup_type`
        PickupType = "pickup_type" => PickupDropOff,
        /// `drop_off_type`
        DropOffType = "drop_off_type" => PickupDropOff,
        /// `continuous_pickup`
        ContinuousPickup = "continuous_pickup" => PickupDropOff,
        /// `continuous_drop_off`
        ContinuousDropOff = "continuous_drop_off" => PickupDropOff,
        /// `shape_dist_traveled`
        ShapeDistTraveled = "shape_dist_traveled" => Distance,
        /// `timepoint`
        Timepoint = "timepoint" => Timepoint,
    }
}
