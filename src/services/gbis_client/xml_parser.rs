//! Tolerant extraction of GBIS XML payloads.
//!
//! The provider answers errors as well-formed XML with an empty body, and
//! real payloads occasionally carry half-filled entries. Record-level
//! problems are dropped where they occur; only a document that cannot be
//! read at all becomes an `XmlParseError`.

use std::str::FromStr;

use quick_xml::{events::Event, Reader};
use tracing::warn;

use super::types::{
    gbis_service_error::XmlParseError,
    route_detail::{RouteDetail, RouteStopEntry},
    station_detail::{ServedRoute, StationDetail},
    station_record::StationRecord,
};

/// One `StationRecord` per `<busStationList>` element.
///
/// Entries without a `stationId` are dropped silently. Entries whose
/// numeric fields are present but unparsable are logged and dropped
/// without aborting the rest. Missing numerics default to zero.
pub fn parse_station_list(xml: &str) -> Result<Vec<StationRecord>, XmlParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stations = Vec::new();
    let mut buf = Vec::new();
    let mut current: Option<RawStation> = None;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"busStationList" {
                    current = Some(RawStation::default());
                    field = None;
                } else if current.is_some() {
                    field = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(station), Some(name)) = (current.as_mut(), field.as_deref()) {
                    if let Ok(text) = e.unescape() {
                        let slot = match name {
                            "stationId" => Some(&mut station.station_id),
                            "stationName" => Some(&mut station.station_name),
                            "latitude" => Some(&mut station.latitude),
                            "longitude" => Some(&mut station.longitude),
                            "busRouteCount" => Some(&mut station.route_count),
                            _ => None,
                        };
                        if let Some(slot) = slot {
                            slot.push_str(&text);
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"busStationList" {
                    if let Some(record) = current.take().and_then(RawStation::into_record) {
                        stations.push(record);
                    }
                } else {
                    field = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XmlParseError(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(stations)
}

/// Station detail: the first occurrence of each station field plus one
/// `ServedRoute` per `<busRouteList>`. Missing fields default to empty
/// string / zero; field-level problems never fail the parse.
pub fn parse_station_detail(xml: &str) -> Result<StationDetail, XmlParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut station_id = String::new();
    let mut station_name = String::new();
    let mut latitude = String::new();
    let mut longitude = String::new();
    let mut routes = Vec::new();

    let mut buf = Vec::new();
    let mut current_route: Option<ServedRoute> = None;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"busRouteList" {
                    current_route = Some(ServedRoute::default());
                    field = None;
                } else {
                    field = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(name), Ok(text)) = (field.as_deref(), e.unescape()) {
                    match current_route.as_mut() {
                        Some(route) => match name {
                            "routeId" => route.route_id.push_str(&text),
                            "routeName" => route.route_name.push_str(&text),
                            "routeTypeCd" => route.route_type.push_str(&text),
                            _ => {}
                        },
                        None => {
                            let slot = match name {
                                "stationId" => Some(&mut station_id),
                                "stationName" => Some(&mut station_name),
                                "latitude" => Some(&mut latitude),
                                "longitude" => Some(&mut longitude),
                                _ => None,
                            };
                            match slot {
                                Some(slot) if slot.is_empty() => slot.push_str(&text),
                                _ => {}
                            }
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"busRouteList" {
                    if let Some(route) = current_route.take() {
                        routes.push(route);
                    }
                }
                field = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XmlParseError(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(StationDetail {
        station_id,
        station_name,
        latitude: lenient_numeric(&latitude, "latitude"),
        longitude: lenient_numeric(&longitude, "longitude"),
        routes,
    })
}

/// Route detail: fixed fields plus one `RouteStopEntry` per
/// `<stationList>`, with the same tolerance as `parse_station_detail`.
pub fn parse_route_detail(xml: &str) -> Result<RouteDetail, XmlParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut route_id = String::new();
    let mut route_name = String::new();
    let mut route_type = String::new();
    let mut start_station_name = String::new();
    let mut end_station_name = String::new();
    let mut stations = Vec::new();

    let mut buf = Vec::new();
    let mut current_stop: Option<RawRouteStop> = None;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"stationList" {
                    current_stop = Some(RawRouteStop::default());
                    field = None;
                } else {
                    field = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(name), Ok(text)) = (field.as_deref(), e.unescape()) {
                    match current_stop.as_mut() {
                        Some(stop) => match name {
                            "stationId" => stop.station_id.push_str(&text),
                            "stationName" => stop.station_name.push_str(&text),
                            "sequence" => stop.sequence.push_str(&text),
                            _ => {}
                        },
                        None => {
                            let slot = match name {
                                "routeId" => Some(&mut route_id),
                                "routeName" => Some(&mut route_name),
                                "routeTypeCd" => Some(&mut route_type),
                                "startStationName" => Some(&mut start_station_name),
                                "endStationName" => Some(&mut end_station_name),
                                _ => None,
                            };
                            match slot {
                                Some(slot) if slot.is_empty() => slot.push_str(&text),
                                _ => {}
                            }
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"stationList" {
                    if let Some(stop) = current_stop.take() {
                        stations.push(RouteStopEntry {
                            sequence: lenient_numeric(&stop.sequence, "sequence"),
                            station_id: stop.station_id,
                            station_name: stop.station_name,
                        });
                    }
                }
                field = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XmlParseError(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(RouteDetail {
        route_id,
        route_name,
        route_type,
        start_station_name,
        end_station_name,
        stations,
    })
}

#[derive(Default)]
struct RawStation {
    station_id: String,
    station_name: String,
    latitude: String,
    longitude: String,
    route_count: String,
}

impl RawStation {
    fn into_record(self) -> Option<StationRecord> {
        if self.station_id.is_empty() {
            return None;
        }

        let latitude = parse_or_default::<f64>(&self.latitude);
        let longitude = parse_or_default::<f64>(&self.longitude);
        let route_count = parse_or_default::<i64>(&self.route_count);

        match (latitude, longitude, route_count) {
            (Ok(latitude), Ok(longitude), Ok(route_count)) => Some(StationRecord {
                station_id: self.station_id,
                station_name: self.station_name,
                latitude,
                longitude,
                route_count,
            }),
            _ => {
                warn!(
                    station_id = %self.station_id,
                    "dropping station entry with unparsable numeric field"
                );
                None
            }
        }
    }
}

#[derive(Default)]
struct RawRouteStop {
    station_id: String,
    station_name: String,
    sequence: String,
}

fn parse_or_default<T>(text: &str) -> Result<T, T::Err>
where
    T: FromStr + Default,
{
    if text.is_empty() {
        Ok(T::default())
    } else {
        text.parse()
    }
}

fn lenient_numeric<T>(text: &str, name: &str) -> T
where
    T: FromStr + Default,
{
    match parse_or_default(text) {
        Ok(value) => value,
        Err(_) => {
            warn!(field = name, value = text, "unparsable numeric field in detail response");
            T::default()
        }
    }
}
