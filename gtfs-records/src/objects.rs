pub use crate::coerce::Locale;
pub use crate::enums::*;
pub use crate::fields::*;
use crate::coerce::Value;
use crate::decode::{invalid_target, required, Entity, EntityBuilder};
use crate::Error;
use chrono_tz::Tz;
use rgb::RGBA8;
use serde::Serialize;
use std::fmt;
use url::Url;

/// Objects that have an identifier implement this trait
///
/// Those identifier are technical and should not be shown to travellers
pub trait Id {
    /// Identifier of the object
    fn id(&self) -> &str;
}

/// An organisation operating the transit services. See <https://gtfs.org/reference/static/#agencytxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Agency {
    /// Unique technical (not for the traveller) identifier for the Agency. Required when there are several agencies
    pub id: Option<String>,
    /// Full name of the transit agency
    pub name: String,
    /// Full url of the transit agency
    pub url: Url,
    /// Timezone where the transit agency is located
    pub timezone: Tz,
    /// Primary language used by this transit agency
    pub lang: Option<Locale>,
    /// A voice telephone number for the specified agency
    pub phone: Option<String>,
    /// URL of a web page that allows a rider to purchase tickets or other fare instruments for that agency online
    pub fare_url: Option<Url>,
    /// Email address actively monitored by the agency’s customer service department
    pub email: Option<String>,
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[doc(hidden)]
#[derive(Default)]
pub struct AgencyBuilder {
    id: Option<String>,
    name: Option<String>,
    url: Option<Url>,
    timezone: Option<Tz>,
    lang: Option<Locale>,
    phone: Option<String>,
    fare_url: Option<Url>,
    email: Option<String>,
}

impl EntityBuilder for AgencyBuilder {
    type Field = AgencyField;
    type Output = Agency;

    fn set(&mut self, field: AgencyField, value: Value) -> Result<(), Error> {
        match (field, value) {
            (AgencyField::Id, Value::OptionalString(v)) => self.id = v,
            (AgencyField::Name, Value::String(v)) => self.name = Some(v),
            (AgencyField::Url, Value::Url(v)) => self.url = Some(v),
            (AgencyField::Timezone, Value::TimeZone(v)) => self.timezone = Some(v),
            (AgencyField::Lang, Value::Locale(v)) => self.lang = v,
            (AgencyField::Phone, Value::OptionalString(v)) => self.phone = v,
            (AgencyField::FareUrl, Value::OptionalUrl(v)) => self.fare_url = v,
            (AgencyField::Email, Value::OptionalString(v)) => self.email = v,
            (field, value) => return Err(invalid_target(field, &value)),
        }
        Ok(())
    }

    fn build(self) -> Result<Agency, Error> {
        Ok(Agency {
            id: self.id,
            name: required(self.name, AgencyField::Name)?,
            url: required(self.url, AgencyField::Url)?,
            timezone: required(self.timezone, AgencyField::Timezone)?,
            lang: self.lang,
            phone: self.phone,
            fare_url: self.fare_url,
            email: self.email,
        })
    }
}

impl Entity for Agency {
    type Field = AgencyField;
    type Builder = AgencyBuilder;
    const FILE_NAME: &'static str = "agency.txt";
    const REQUIRED_FIELDS: &'static [AgencyField] =
        &[AgencyField::Name, AgencyField::Url, AgencyField::Timezone];
    const CONDITIONALLY_REQUIRED_FIELDS: &'static [AgencyField] = &[AgencyField::Id];
}

/// A route is a commercial line (there can be various stop sequences for a same line). See <https://gtfs.org/reference/static/#routestxt>
#[derive(Debug, Serialize, Default, Clone, PartialEq)]
pub struct Route {
    /// Unique technical (not for the traveller) identifier for the route
    pub id: String,
    /// Agency for the specified route
    pub agency_id: Option<String>,
    /// Short name of a route. This will often be a short, abstract identifier like "32", "100X", or "Green"
    pub short_name: Option<String>,
    /// Full name of a route. This name is generally more descriptive than the [Route::short_name]
    pub long_name: Option<String>,
    /// Description of a route that provides useful, quality information
    pub desc: Option<String>,
    /// Indicates the type of transportation used on a route
    pub route_type: RouteType,
    /// URL of a web page about the particular route
    pub url: Option<Url>,
    /// Route color designation that matches public facing material
    pub color: Option<RGBA8>,
    /// Legible color to use for text drawn against a background of [Route::color]
    pub text_color: Option<RGBA8>,
    /// Orders the routes in a way which is ideal for presentation to customers. Routes with smaller values should be displayed first
    pub sort_order: Option<u32>,
    /// Indicates whether a rider can board the transit vehicle anywhere along the vehicle’s travel path
    pub continuous_pickup: Option<PickupDropOffType>,
    /// Indicates whether a rider can alight from the transit vehicle at any point along the vehicle’s travel path
    pub continuous_drop_off: Option<PickupDropOffType>,
}

impl Id for Route {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.long_name, &self.short_name) {
            (Some(long_name), _) if !long_name.is_empty() => write!(f, "{}", long_name),
            (_, Some(short_name)) => write!(f, "{}", short_name),
            _ => write!(f, "{}", self.id),
        }
    }
}

#[doc(hidden)]
#[derive(Default)]
pub struct RouteBuilder {
    id: Option<String>,
    route_type: Option<RouteType>,
    route: Route,
}

impl EntityBuilder for RouteBuilder {
    type Field = RouteField;
    type Output = Route;

    fn set(&mut self, field: RouteField, value: Value) -> Result<(), Error> {
        let route = &mut self.route;
        match (field, value) {
            (RouteField::Id, Value::String(v)) => self.id = Some(v),
            (RouteField::AgencyId, Value::OptionalString(v)) => route.agency_id = v,
            (RouteField::ShortName, Value::OptionalString(v)) => route.short_name = v,
            (RouteField::LongName, Value::OptionalString(v)) => route.long_name = v,
            (RouteField::Desc, Value::OptionalString(v)) => route.desc = v,
            (RouteField::RouteType, Value::RouteType(v)) => self.route_type = Some(v),
            (RouteField::Url, Value::OptionalUrl(v)) => route.url = v,
            (RouteField::Color, Value::Color(v)) => route.color = v,
            (RouteField::TextColor, Value::Color(v)) => route.text_color = v,
            (RouteField::SortOrder, Value::OptionalUInt(v)) => route.sort_order = v,
            (RouteField::ContinuousPickup, Value::PickupDropOff(v)) => route.continuous_pickup = v,
            (RouteField::ContinuousDropOff, Value::PickupDropOff(v)) => {
                route.continuous_drop_off = v
            }
            (field, value) => return Err(invalid_target(field, &value)),
        }
        Ok(())
    }

    fn build(self) -> Result<Route, Error> {
        Ok(Route {
            id: required(self.id, RouteField::Id)?,
            route_type: required(self.route_type, RouteField::RouteType)?,
            ..self.route
        })
    }
}

impl Entity for Route {
    type Field = RouteField;
    type Builder = RouteBuilder;
    const FILE_NAME: &'static str = "routes.txt";
    const REQUIRED_FIELDS: &'static [RouteField] = &[RouteField::Id, RouteField::RouteType];
    const CONDITIONALLY_REQUIRED_FIELDS: &'static [RouteField] = &[
        RouteField::AgencyId,
        RouteField::ShortName,
        RouteField::LongName,
    ];
}

/// A physical stop, station or area. See <https://gtfs.org/reference/static/#stopstxt>
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct Stop {
    /// Unique technical identifier (not for the traveller) of the stop
    pub id: String,
    /// Short text or a number that identifies the location for riders
    pub code: Option<String>,
    /// Name of the location. Use a name that people will understand in the local and tourist vernacular
    pub name: Option<String>,
    /// Description of the location that provides useful, quality information
    pub description: Option<String>,
    /// Latitude of the stop
    pub latitude: Option<f64>,
    /// Longitude of the stop
    pub longitude: Option<f64>,
    /// Identifies the fare zone for a stop
    pub zone_id: Option<String>,
    /// URL of a web page about the location
    pub url: Option<Url>,
    /// Type of the location
    pub location_type: Option<LocationType>,
    /// Defines hierarchy between the different locations
    pub parent_station: Option<String>,
    /// Timezone of the location
    pub timezone: Option<Tz>,
    /// Indicates whether wheelchair boardings are possible from the location
    pub wheelchair_boarding: Option<Availability>,
    /// Level of the location. The same level can be used by multiple unlinked stations
    pub level_id: Option<String>,
    /// Platform identifier for a platform stop (a stop belonging to a station)
    pub platform_code: Option<String>,
}

impl Id for Stop {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or(&self.id))
    }
}

#[doc(hidden)]
#[derive(Default)]
pub struct StopBuilder {
    id: Option<String>,
    stop: Stop,
}

impl EntityBuilder for StopBuilder {
    type Field = StopField;
    type Output = Stop;

    fn set(&mut self, field: StopField, value: Value) -> Result<(), Error> {
        let stop = &mut self.stop;
        match (field, value) {
            (StopField::Id, Value::String(v)) => self.id = Some(v),
            (StopField::Code, Value::OptionalString(v)) => stop.code = v,
            (StopField::Name, Value::OptionalString(v)) => stop.name = v,
            (StopField::Description, Value::OptionalString(v)) => stop.description = v,
            (StopField::Latitude, Value::Coordinate(v)) => stop.latitude = v,
            (StopField::Longitude, Value::Coordinate(v)) => stop.longitude = v,
            (StopField::ZoneId, Value::OptionalString(v)) => stop.zone_id = v,
            (StopField::Url, Value::OptionalUrl(v)) => stop.url = v,
            (StopField::LocationType, Value::LocationType(v)) => stop.location_type = v,
            (StopField::ParentStation, Value::OptionalString(v)) => stop.parent_station = v,
            (StopField::Timezone, Value::OptionalTimeZone(v)) => stop.timezone = v,
            (StopField::WheelchairBoarding, Value::Availability(v)) => {
                stop.wheelchair_boarding = v
            }
            (StopField::LevelId, Value::OptionalString(v)) => stop.level_id = v,
            (StopField::PlatformCode, Value::OptionalString(v)) => stop.platform_code = v,
            (field, value) => return Err(invalid_target(field, &value)),
        }
        Ok(())
    }

    fn build(self) -> Result<Stop, Error> {
        Ok(Stop {
            id: required(self.id, StopField::Id)?,
            ..self.stop
        })
    }
}

impl Entity for Stop {
    type Field = StopField;
    type Builder = StopBuilder;
    const FILE_NAME: &'static str = "stops.txt";
    const REQUIRED_FIELDS: &'static [StopField] = &[StopField::Id];
}

/// A Trip is a vehicle that follows a sequence of [StopTime] on certain days. See <https://gtfs.org/reference/static/#tripstxt>
#[derive(Debug, Serialize, Default, Clone, PartialEq)]
pub struct Trip {
    /// Unique technical (not for the traveller) identifier for the Trip
    pub id: String,
    /// References the calendar on which this trip runs
    pub service_id: String,
    /// References along which [Route] this trip runs
    pub route_id: String,
    /// Text that appears on signage identifying the trip's destination to riders
    pub headsign: Option<String>,
    /// Public facing text used to identify the trip to riders, for instance, to identify train numbers for commuter rail trips
    pub short_name: Option<String>,
    /// Indicates the direction of travel for a trip. This field is not used in routing
    pub direction_id: Option<DirectionType>,
    /// Identifies the block to which the trip belongs. A block consists of a single trip or many sequential trips made using the same vehicle
    pub block_id: Option<String>,
    /// Shape of the trip
    pub shape_id: Option<String>,
    /// Indicates wheelchair accessibility
    pub wheelchair_accessible: Option<Availability>,
    /// Indicates whether bikes are allowed
    pub bikes_allowed: Option<Availability>,
}

impl Id for Trip {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "route id: {}, service id: {}",
            self.route_id, self.service_id
        )
    }
}

#[doc(hidden)]
#[derive(Default)]
pub struct TripBuilder {
    id: Option<String>,
    service_id: Option<String>,
    route_id: Option<String>,
    trip: Trip,
}

impl EntityBuilder for TripBuilder {
    type Field = TripField;
    type Output = Trip;

    fn set(&mut self, field: TripField, value: Value) -> Result<(), Error> {
        let trip = &mut self.trip;
        match (field, value) {
            (TripField::RouteId, Value::String(v)) => self.route_id = Some(v),
            (TripField::ServiceId, Value::String(v)) => self.service_id = Some(v),
            (TripField::Id, Value::String(v)) => self.id = Some(v),
            (TripField::Headsign, Value::OptionalString(v)) => trip.headsign = v,
            (TripField::ShortName, Value::OptionalString(v)) => trip.short_name = v,
            (TripField::DirectionId, Value::Direction(v)) => trip.direction_id = v,
            (TripField::BlockId, Value::OptionalString(v)) => trip.block_id = v,
            (TripField::ShapeId, Value::OptionalString(v)) => trip.shape_id = v,
            (TripField::WheelchairAccessible, Value::Availability(v)) => {
                trip.wheelchair_accessible = v
            }
            (TripField::BikesAllowed, Value::Availability(v)) => trip.bikes_allowed = v,
            (field, value) => return Err(invalid_target(field, &value)),
        }
        Ok(())
    }

    fn build(self) -> Result<Trip, Error> {
        Ok(Trip {
            id: required(self.id, TripField::Id)?,
            service_id: required(self.service_id, TripField::ServiceId)?,
            route_id: required(self.route_id, TripField::RouteId)?,
            ..self.trip
        })
    }
}

impl Entity for Trip {
    type Field = TripField;
    type Builder = TripBuilder;
    const FILE_NAME: &'static str = "trips.txt";
    const REQUIRED_FIELDS: &'static [TripField] =
        &[TripField::RouteId, TripField::ServiceId, TripField::Id];
}

/// The moment where a vehicle, running on [Trip] stops at a [Stop]. See <https://gtfs.org/reference/static/#stop_timestxt>
#[derive(Debug, Serialize, Default, Clone, PartialEq)]
pub struct StopTime {
    /// [Trip] to which this stop time belongs to
    pub trip_id: String,
    /// Arrival time of the stop time, in seconds since the start of the service day.
    /// It's an option since the intermediate stops can have have no arrival
    /// and this arrival needs to be interpolated
    pub arrival_time: Option<u32>,
    /// Departure time of the stop time, in seconds since the start of the service day
    pub departure_time: Option<u32>,
    /// Identifier of the [Stop] where the vehicle stops
    pub stop_id: String,
    /// Order of stops for a particular trip. The values must increase along the trip but do not need to be consecutive
    pub stop_sequence: u32,
    /// Text that appears on signage identifying the trip's destination to riders
    pub stop_headsign: Option<String>,
    /// Indicates pickup method
    pub pickup_type: Option<PickupDropOffType>,
    /// Indicates drop off method
    pub drop_off_type: Option<PickupDropOffType>,
    /// Indicates whether a rider can board the transit vehicle anywhere along the vehicle’s travel path
    pub continuous_pickup: Option<PickupDropOffType>,
    /// Indicates whether a rider can alight from the transit vehicle at any point along the vehicle’s travel path
    pub continuous_drop_off: Option<PickupDropOffType>,
    /// Actual distance traveled along the associated shape, from the first stop to the stop specified in this record
    pub shape_dist_traveled: Option<f64>,
    /// Indicates if arrival and departure times for a stop are strictly adhered to by the vehicle or if they are instead approximate and/or interpolated times
    pub timepoint: Option<TimepointType>,
}

impl fmt::Display for StopTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.trip_id, self.stop_id)
    }
}

#[doc(hidden)]
#[derive(Default)]
pub struct StopTimeBuilder {
    trip_id: Option<String>,
    stop_id: Option<String>,
    stop_sequence: Option<u32>,
    stop_time: StopTime,
}

impl EntityBuilder for StopTimeBuilder {
    type Field = StopTimeField;
    type Output = StopTime;

    fn set(&mut self, field: StopTimeField, value: Value) -> Result<(), Error> {
        let stop_time = &mut self.stop_time;
        match (field, value) {
            (StopTimeField::TripId, Value::String(v)) => self.trip_id = Some(v),
            (StopTimeField::ArrivalTime, Value::Time(v)) => stop_time.arrival_time = v,
            (StopTimeField::DepartureTime, Value::Time(v)) => stop_time.departure_time = v,
            (StopTimeField::StopId, Value::String(v)) => self.stop_id = Some(v),
            (StopTimeField::StopSequence, Value::UInt(v)) => self.stop_sequence = Some(v),
            (StopTimeField::StopHeadsign, Value::OptionalString(v)) => {
                stop_time.stop_headsign = v
            }
            (StopTimeField::PickupType, Value::PickupDropOff(v)) => stop_time.pickup_type = v,
            (StopTimeField::DropOffType, Value::PickupDropOff(v)) => stop_time.drop_off_type = v,
            (StopTimeField::ContinuousPickup, Value::PickupDropOff(v)) => {
                stop_time.continuous_pickup = v
            }
            (StopTimeField::ContinuousDropOff, Value::PickupDropOff(v)) => {
                stop_time.continuous_drop_off = v
            }
            (StopTimeField::ShapeDistTraveled, Value::Distance(v)) => {
                stop_time.shape_dist_traveled = v
            }
            (StopTimeField::Timepoint, Value::Timepoint(v)) => stop_time.timepoint = v,
            (field, value) => return Err(invalid_target(field, &value)),
        }
        Ok(())
    }

    fn build(self) -> Result<StopTime, Error> {
        Ok(StopTime {
            trip_id: required(self.trip_id, StopTimeField::TripId)?,
            stop_id: required(self.stop_id, StopTimeField::StopId)?,
            stop_sequence: required(self.stop_sequence, StopTimeField::StopSequence)?,
            ..self.stop_time
        })
    }
}

impl Entity for StopTime {
    type Field = StopTimeField;
    type Builder = StopTimeBuilder;
    const FILE_NAME: &'static str = "stop_times.txt";
    const REQUIRED_FIELDS: &'static [StopTimeField] = &[
        StopTimeField::TripId,
        StopTimeField::StopId,
        StopTimeField::StopSequence,
    ];
}
