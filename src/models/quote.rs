// Payload types for the quote and collection operations. Field names on the
// wire are the vendor's; the Rust names are ours.
use chrono::NaiveTime;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use serde_with::{BoolFromInt, serde_as};

use crate::error::{GatewayError, GatewayResult};

const TIME_FORMAT: &str = "%H:%M";

/// Contact and address block for one end of a shipment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Party {
    pub name: String,
    pub address: [String; 4],
    pub postcode: String,
    pub contact: String,
    pub phone: String,
    pub cell: String,
    pub email: String,
    pub place_id: i64,
    pub notify: bool,
}

/// Sender and recipient details for `requestQuote`, flattened the way the
/// vendor expects them (`origpers`, `destperadd1`, ...).
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteDetails {
    #[serde(rename = "origpers")]
    pub orig_name: String,
    #[serde(rename = "origperadd1")]
    pub orig_address1: String,
    #[serde(rename = "origperadd2")]
    pub orig_address2: String,
    #[serde(rename = "origperadd3")]
    pub orig_address3: String,
    #[serde(rename = "origperadd4")]
    pub orig_address4: String,
    #[serde(rename = "origperpcode")]
    pub orig_postcode: String,
    #[serde(rename = "origpercontact")]
    pub orig_contact: String,
    #[serde(rename = "origperphone")]
    pub orig_phone: String,
    #[serde(rename = "origplace")]
    pub orig_place: i64,
    #[serde(rename = "notifyorigpers")]
    #[serde_as(as = "BoolFromInt")]
    pub notify_orig: bool,
    #[serde(rename = "origpercell")]
    pub orig_cell: String,
    #[serde(rename = "origperemail")]
    pub orig_email: String,

    #[serde(rename = "destpers")]
    pub dest_name: String,
    #[serde(rename = "destperadd1")]
    pub dest_address1: String,
    #[serde(rename = "destperadd2")]
    pub dest_address2: String,
    #[serde(rename = "destperadd3")]
    pub dest_address3: String,
    #[serde(rename = "destperadd4")]
    pub dest_address4: String,
    #[serde(rename = "destperpcode")]
    pub dest_postcode: String,
    #[serde(rename = "destplace")]
    pub dest_place: i64,
    #[serde(rename = "destpercontact")]
    pub dest_contact: String,
    #[serde(rename = "destperphone")]
    pub dest_phone: String,
    #[serde(rename = "notifydestpers")]
    #[serde_as(as = "BoolFromInt")]
    pub notify_dest: bool,
    #[serde(rename = "destpercell")]
    pub dest_cell: String,
    #[serde(rename = "destperemail")]
    pub dest_email: String,

    /// Vendor fields this type does not model; forwarded as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuoteDetails {
    pub fn between(origin: Party, destination: Party) -> Self {
        let [orig_address1, orig_address2, orig_address3, orig_address4] = origin.address;
        let [dest_address1, dest_address2, dest_address3, dest_address4] = destination.address;
        Self {
            orig_name: origin.name,
            orig_address1,
            orig_address2,
            orig_address3,
            orig_address4,
            orig_postcode: origin.postcode,
            orig_contact: origin.contact,
            orig_phone: origin.phone,
            orig_place: origin.place_id,
            notify_orig: origin.notify,
            orig_cell: origin.cell,
            orig_email: origin.email,
            dest_name: destination.name,
            dest_address1,
            dest_address2,
            dest_address3,
            dest_address4,
            dest_postcode: destination.postcode,
            dest_place: destination.place_id,
            dest_contact: destination.contact,
            dest_phone: destination.phone,
            notify_dest: destination.notify,
            dest_cell: destination.cell,
            dest_email: destination.email,
            extra: Map::new(),
        }
    }
}

/// One parcel line. Dimensions in centimetres, mass in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentLine {
    pub item: u32,
    pub pieces: u32,
    pub dim1: u32,
    pub dim2: u32,
    pub dim3: u32,
    pub actmass: f64,
}

/// Pickup window for a collection booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionWindow {
    #[serde(rename = "starttime", serialize_with = "serialize_hhmm")]
    pub start: NaiveTime,
    #[serde(rename = "endtime", serialize_with = "serialize_hhmm")]
    pub end: NaiveTime,
}

fn serialize_hhmm<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
}

impl CollectionWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parses `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> GatewayResult<Self> {
        Ok(Self {
            start: parse_time("start", start)?,
            end: parse_time("end", end)?,
        })
    }
}

fn parse_time(label: &str, raw: &str) -> GatewayResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(|e| {
        GatewayError::InvalidArgument(format!(
            "Collection {} time must be HH:MM, got {:?}: {}",
            label, raw, e
        ))
    })
}

impl Default for CollectionWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrintOptions {
    #[serde(rename = "printLabels")]
    #[serde_as(as = "BoolFromInt")]
    pub print_labels: bool,
    #[serde(rename = "printWaybill")]
    #[serde_as(as = "BoolFromInt")]
    pub print_waybill: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            print_labels: true,
            print_waybill: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PlaceByNameParams<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PlaceByPostcodeParams<'a> {
    pub postcode: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestQuoteParams<'a> {
    pub details: &'a QuoteDetails,
    pub contents: &'a [ContentLine],
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateServiceParams<'a> {
    pub quoteno: &'a str,
    pub service: &'a str,
    pub reference: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuoteToCollectionParams<'a> {
    pub quoteno: &'a str,
    #[serde(flatten)]
    pub window: &'a CollectionWindow,
    #[serde(flatten)]
    pub print: &'a PrintOptions,
}
