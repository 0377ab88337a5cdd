// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire encodings used by the gateway.
//!
//! Scalar replies are plain text terminated by a newline. Each decoder
//! accepts exactly the documented wire domain of its value kind and reports
//! anything else as [`ParseError::UnrecognizedValue`] carrying the raw
//! string. Sensor readings use the literal `inval` for "no value"; those
//! decode to `Ok(None)`, never to an error.
//!
//! | Kind | Wire | Decoded |
//! |------|------|---------|
//! | boolean | `0` / `1` | `bool` |
//! | optional boolean | `0` / `1` / `inval` | `Option<bool>` |
//! | power, energy | milli-units or `inval` | `Option<f64>` (÷ 1000) |
//! | ambient temperature | 0.1 °C or `inval` | `Option<f64>` (÷ 10) |
//! | HKR temperature | 16-56, 253, 254 | [`HkrTemperature`] |
//! | timestamp | seconds since 1970, `0` = none | `Option<DateTime<Utc>>` |
//!
//! # Examples
//!
//! ```
//! use avm_homeauto::codec;
//! use avm_homeauto::types::HkrTemperature;
//!
//! assert_eq!(codec::decode_bool("1\n").unwrap(), true);
//! assert_eq!(codec::decode_power("inval\n").unwrap(), None);
//! assert_eq!(codec::decode_hkr_temperature("254").unwrap(), HkrTemperature::On);
//! assert_eq!(codec::encode_hkr_temperature(HkrTemperature::Celsius(21.5)).unwrap(), "43");
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ParseError, ValueError};
use crate::types::{BlindTarget, HkrTemperature, OnOff};

/// Marker the gateway sends for a reading it does not have.
pub const INVALID: &str = "inval";

const HKR_ON: i64 = 254;
const HKR_OFF: i64 = 253;
const HKR_MIN: i64 = 16;
const HKR_MAX: i64 = 56;

/// Strips the trailing newline (and any other trailing whitespace).
#[must_use]
pub fn decode_text(raw: &str) -> String {
    raw.trim_end().to_string()
}

/// Decodes `0` / `1`.
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` for anything else.
pub fn decode_bool(raw: &str) -> Result<bool, ParseError> {
    match raw.trim_end() {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ParseError::unrecognized("boolean", raw)),
    }
}

/// Encodes a boolean as `0` / `1`.
#[must_use]
pub const fn encode_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Decodes `0` / `1` / `inval`.
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` for anything else.
pub fn decode_optional_bool(raw: &str) -> Result<Option<bool>, ParseError> {
    match raw.trim_end() {
        INVALID => Ok(None),
        "0" => Ok(Some(false)),
        "1" => Ok(Some(true)),
        _ => Err(ParseError::unrecognized("optional boolean", raw)),
    }
}

/// Decodes a signed decimal integer.
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` if the text is not an integer.
pub fn decode_int(raw: &str) -> Result<i64, ParseError> {
    raw.trim_end()
        .parse()
        .map_err(|_| ParseError::unrecognized("integer", raw))
}

fn decode_scaled(raw: &str, kind: &'static str, divisor: f64) -> Result<Option<f64>, ParseError> {
    let trimmed = raw.trim_end();
    if trimmed == INVALID {
        return Ok(None);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ParseError::unrecognized(kind, raw))?;
    #[allow(clippy::cast_precision_loss)]
    let value = value as f64;
    Ok(Some(value / divisor))
}

/// Decodes a power or energy reading given in milli-units.
///
/// `"4500"` becomes `Some(4.5)`, `"inval"` becomes `None`.
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` if the text is neither an
/// integer nor `inval`.
pub fn decode_power(raw: &str) -> Result<Option<f64>, ParseError> {
    decode_scaled(raw, "power", 1000.0)
}

/// Decodes an ambient temperature given in 0.1 °C.
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` if the text is neither an
/// integer nor `inval`.
pub fn decode_temperature(raw: &str) -> Result<Option<f64>, ParseError> {
    decode_scaled(raw, "temperature", 10.0)
}

/// Decodes a measured radiator temperature given in 0.5 °C.
///
/// Unlike setpoints this is not limited to the regulated range.
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` if the text is neither an
/// integer nor `inval`.
pub fn decode_half_degrees(raw: &str) -> Result<Option<f64>, ParseError> {
    decode_scaled(raw, "HKR reading", 2.0)
}

/// Decodes an HKR temperature code.
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` for codes outside 16-56 that are
/// not one of the two sentinels.
pub fn decode_hkr_temperature(raw: &str) -> Result<HkrTemperature, ParseError> {
    let code = raw
        .trim_end()
        .parse::<i64>()
        .map_err(|_| ParseError::unrecognized("HKR temperature", raw))?;
    match code {
        HKR_ON => Ok(HkrTemperature::On),
        HKR_OFF => Ok(HkrTemperature::Off),
        HKR_MIN..=HKR_MAX => {
            #[allow(clippy::cast_precision_loss)]
            let celsius = code as f64 / 2.0;
            Ok(HkrTemperature::Celsius(celsius))
        }
        _ => Err(ParseError::unrecognized("HKR temperature", raw)),
    }
}

/// Encodes an HKR temperature as its wire code.
///
/// # Errors
///
/// Returns `ValueError::TemperatureOutOfRange` for a regulated value
/// outside 8-28 °C, so no value can land on a sentinel code.
pub fn encode_hkr_temperature(value: HkrTemperature) -> Result<String, ValueError> {
    value.validate()?;
    Ok(match value {
        HkrTemperature::On => HKR_ON.to_string(),
        HkrTemperature::Off => HKR_OFF.to_string(),
        #[allow(clippy::cast_possible_truncation)]
        HkrTemperature::Celsius(celsius) => ((celsius * 2.0).round() as i64).to_string(),
    })
}

/// Decodes the `setsimpleonoff` echo.
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` for anything but `0`, `1`, `2`.
pub fn decode_on_off(raw: &str) -> Result<OnOff, ParseError> {
    match raw.trim_end() {
        "0" => Ok(OnOff::Off),
        "1" => Ok(OnOff::On),
        "2" => Ok(OnOff::Toggle),
        _ => Err(ParseError::unrecognized("on/off", raw)),
    }
}

/// Decodes the `setblind` echo. Matching is case-sensitive.
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` for anything but `close`,
/// `open`, `stop`.
pub fn decode_blind_target(raw: &str) -> Result<BlindTarget, ParseError> {
    match raw.trim_end() {
        "close" => Ok(BlindTarget::Close),
        "open" => Ok(BlindTarget::Open),
        "stop" => Ok(BlindTarget::Stop),
        _ => Err(ParseError::unrecognized("blind target", raw)),
    }
}

/// Splits a comma separated identifier list.
///
/// An empty reply yields an empty list.
#[must_use]
pub fn decode_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim_end();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(',').map(str::to_string).collect()
}

/// Encodes a transition duration in tenths of a second.
///
/// Sub-decisecond remainders are dropped; no duration encodes as `0`.
#[must_use]
pub fn encode_deciseconds(duration: Option<Duration>) -> u128 {
    duration.map_or(0, |d| d.as_millis() / 100)
}

/// Decodes seconds since the Unix epoch; `0` means "no timestamp".
///
/// # Errors
///
/// Returns `ParseError::UnrecognizedValue` if the text is not an integer
/// or out of the representable range.
pub fn decode_timestamp(raw: &str) -> Result<Option<DateTime<Utc>>, ParseError> {
    let seconds = raw
        .trim_end()
        .parse::<i64>()
        .map_err(|_| ParseError::unrecognized("timestamp", raw))?;
    if seconds == 0 {
        return Ok(None);
    }
    DateTime::from_timestamp(seconds, 0)
        .map(Some)
        .ok_or_else(|| ParseError::unrecognized("timestamp", raw))
}

/// Encodes an instant as seconds since the Unix epoch; `None` is `0`.
#[must_use]
pub fn encode_timestamp(value: Option<DateTime<Utc>>) -> i64 {
    value.map_or(0, |instant| instant.timestamp())
}

/// Maps an XML reply onto a record type.
///
/// # Errors
///
/// Returns `ParseError::Xml` if the document does not fit the record.
pub fn decode_xml<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    quick_xml::de::from_str(raw).map_err(Into::into)
}

/// Parses an XML reply into a generic element tree.
///
/// # Errors
///
/// Returns `ParseError::XmlDocument` if the reply is not well-formed.
pub fn decode_xml_document(raw: &str) -> Result<xmltree::Element, ParseError> {
    xmltree::Element::parse(raw.as_bytes()).map_err(Into::into)
}

/// Maps a JSON document onto a record type.
///
/// # Errors
///
/// Returns `ParseError::Json` if the document does not fit the record.
pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    serde_json::from_str(raw).map_err(Into::into)
}

/// Serializes a record as JSON.
///
/// # Errors
///
/// Returns `ParseError::Json` if serialization fails.
pub fn encode_json<T: Serialize>(value: &T) -> Result<String, ParseError> {
    serde_json::to_string(value).map_err(Into::into)
}
