// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device list and device info records.
//!
//! `getdevicelistinfos` returns a `<devicelist>` with `<device>` and
//! `<group>` children; `getdeviceinfos` returns a single `<device>`.
//!
//! ```xml
//! <devicelist version="1" fwversion="7.57">
//!   <device identifier="08761 0500005" id="16" functionbitmask="35712"
//!           fwversion="04.25" manufacturer="AVM" productname="FRITZ!DECT 200">
//!     <present>1</present>
//!     <name>Bodhran</name>
//!     <switch><state>1</state><mode>manuell</mode><lock>0</lock><devicelock>0</devicelock></switch>
//!     <powermeter><voltage>229841</voltage><power>4500</power><energy>1234</energy></powermeter>
//!     <temperature><celsius>215</celsius><offset>0</offset></temperature>
//!   </device>
//! </devicelist>
//! ```
//!
//! Sub-element fields are kept as the raw wire strings; the accessor
//! methods decode them through [`crate::codec`]. An empty element means the
//! gateway does not know the value and decodes to `None`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{non_empty, optional_flag};
use crate::codec;
use crate::error::ParseError;
use crate::types::HkrTemperature;

/// Function classes of a device, decoded from `functionbitmask`.
///
/// # Examples
///
/// ```
/// use avm_homeauto::response::Functions;
///
/// let functions = Functions::from_bits(35712);
/// assert!(functions.contains(Functions::OUTLET));
/// assert!(functions.contains(Functions::ENERGY_METER));
/// assert!(!functions.contains(Functions::THERMOSTAT));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Functions(u32);

impl Functions {
    /// HAN-FUN device.
    pub const HAN_FUN_DEVICE: Self = Self(1 << 0);
    /// Light / lamp.
    pub const LIGHT: Self = Self(1 << 2);
    /// Alarm sensor.
    pub const ALARM: Self = Self(1 << 4);
    /// AVM button.
    pub const BUTTON: Self = Self(1 << 5);
    /// Radiator controller.
    pub const THERMOSTAT: Self = Self(1 << 6);
    /// Energy meter.
    pub const ENERGY_METER: Self = Self(1 << 7);
    /// Temperature sensor.
    pub const TEMPERATURE_SENSOR: Self = Self(1 << 8);
    /// Switchable outlet.
    pub const OUTLET: Self = Self(1 << 9);
    /// DECT repeater.
    pub const DECT_REPEATER: Self = Self(1 << 10);
    /// Microphone.
    pub const MICROPHONE: Self = Self(1 << 11);
    /// HAN-FUN unit.
    pub const HAN_FUN_UNIT: Self = Self(1 << 13);
    /// Simple on/off switchable.
    pub const ON_OFF: Self = Self(1 << 15);
    /// Dimmable.
    pub const LEVEL: Self = Self(1 << 16);
    /// Colour adjustable.
    pub const COLOR: Self = Self(1 << 17);
    /// Blind.
    pub const BLIND: Self = Self(1 << 18);
    /// Humidity sensor.
    pub const HUMIDITY_SENSOR: Self = Self(1 << 20);

    /// Wraps a raw bitmask.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Returns `true` if all bits of `other` are set.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Root of `getdevicelistinfos`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceList {
    /// Schema version.
    #[serde(rename = "@version", default)]
    pub version: String,
    /// Gateway firmware version.
    #[serde(rename = "@fwversion", default)]
    pub firmware_version: String,
    /// Known devices.
    #[serde(rename = "device", default)]
    pub devices: Vec<Device>,
    /// Known device groups.
    #[serde(rename = "group", default)]
    pub groups: Vec<Device>,
}

impl DeviceList {
    /// Looks up a device or group by AIN.
    #[must_use]
    pub fn find(&self, ain: &str) -> Option<&Device> {
        self.devices
            .iter()
            .chain(&self.groups)
            .find(|device| device.identifier == ain)
    }
}

/// A single device or group.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    /// AIN, MAC address or unique id.
    #[serde(rename = "@identifier")]
    pub identifier: String,
    /// Internal device id.
    #[serde(rename = "@id", default)]
    pub id: String,
    /// Raw function bitmask, see [`Device::functions`].
    #[serde(rename = "@functionbitmask", default)]
    pub function_bitmask: u32,
    /// Device firmware version.
    #[serde(rename = "@fwversion", default)]
    pub firmware_version: String,
    /// Manufacturer.
    #[serde(rename = "@manufacturer", default)]
    pub manufacturer: String,
    /// Product name, empty for unknown devices.
    #[serde(rename = "@productname", default)]
    pub product_name: String,
    /// `0` / `1`, see [`Device::is_present`].
    #[serde(default)]
    pub present: String,
    /// `0` / `1`: a command is still being transmitted.
    #[serde(default)]
    pub txbusy: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Battery charge in percent, empty without battery.
    #[serde(default)]
    pub battery: String,
    /// `0` / `1`, empty without battery.
    #[serde(default)]
    pub batterylow: String,
    /// Outlet state.
    pub switch: Option<Switch>,
    /// Energy meter.
    pub powermeter: Option<PowerMeter>,
    /// Temperature sensor.
    pub temperature: Option<Temperature>,
    /// Alarm sensor.
    pub alert: Option<Alert>,
    /// Buttons (one per key on multi-key devices).
    #[serde(rename = "button", default)]
    pub buttons: Vec<Button>,
    /// Radiator controller.
    pub hkr: Option<Hkr>,
    /// Simple on/off unit.
    pub simpleonoff: Option<SimpleOnOff>,
    /// Dimmer unit.
    pub levelcontrol: Option<LevelControl>,
    /// Colour unit.
    pub colorcontrol: Option<ColorControl>,
    /// HAN-FUN unit information.
    pub etsiunitinfo: Option<EtsiUnitInfo>,
    /// Group membership, only present on `<group>` entries.
    pub groupinfo: Option<GroupInfo>,
}

impl Device {
    /// Returns the decoded function bitmask.
    #[must_use]
    pub fn functions(&self) -> Functions {
        Functions::from_bits(self.function_bitmask)
    }

    /// Returns whether the device is connected.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` if `present` is not `0`/`1`.
    pub fn is_present(&self) -> Result<bool, ParseError> {
        codec::decode_bool(&self.present)
    }

    /// Returns the battery charge in percent, if the device has a battery.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn battery(&self) -> Result<Option<i64>, ParseError> {
        non_empty(&self.battery, codec::decode_int)
    }

    /// Returns whether the battery is low, if the device has a battery.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a value other than `0`/`1`.
    pub fn battery_low(&self) -> Result<Option<bool>, ParseError> {
        optional_flag(&self.batterylow)
    }
}

/// Outlet sub-element.
#[derive(Debug, Clone, Deserialize)]
pub struct Switch {
    /// `0` / `1`, empty if unknown.
    #[serde(default)]
    pub state: String,
    /// `auto` or `manuell`.
    #[serde(default)]
    pub mode: String,
    /// Switching via UI/API locked.
    #[serde(default)]
    pub lock: String,
    /// Switching on the device locked.
    #[serde(default)]
    pub devicelock: String,
}

impl Switch {
    /// Returns the switching state.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a value other than `0`/`1`.
    pub fn state(&self) -> Result<Option<bool>, ParseError> {
        optional_flag(&self.state)
    }

    /// Returns whether switching via UI/API is locked.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a value other than `0`/`1`.
    pub fn lock(&self) -> Result<Option<bool>, ParseError> {
        optional_flag(&self.lock)
    }

    /// Returns whether the key on the device is locked.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a value other than `0`/`1`.
    pub fn device_lock(&self) -> Result<Option<bool>, ParseError> {
        optional_flag(&self.devicelock)
    }
}

/// Energy meter sub-element.
#[derive(Debug, Clone, Deserialize)]
pub struct PowerMeter {
    /// Voltage in mV.
    #[serde(default)]
    pub voltage: String,
    /// Power in mW.
    #[serde(default)]
    pub power: String,
    /// Energy in Wh since commissioning.
    #[serde(default)]
    pub energy: String,
}

impl PowerMeter {
    /// Returns the voltage in V.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn voltage(&self) -> Result<Option<f64>, ParseError> {
        non_empty(&self.voltage, codec::decode_power).map(Option::flatten)
    }

    /// Returns the power in W.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn power(&self) -> Result<Option<f64>, ParseError> {
        non_empty(&self.power, codec::decode_power).map(Option::flatten)
    }

    /// Returns the energy in Wh.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn energy(&self) -> Result<Option<i64>, ParseError> {
        non_empty(&self.energy, codec::decode_int)
    }
}

/// Temperature sensor sub-element.
#[derive(Debug, Clone, Deserialize)]
pub struct Temperature {
    /// Temperature in 0.1 °C, offset already applied.
    #[serde(default)]
    pub celsius: String,
    /// Configured offset in 0.1 °C.
    #[serde(default)]
    pub offset: String,
}

impl Temperature {
    /// Returns the temperature in °C.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn celsius(&self) -> Result<Option<f64>, ParseError> {
        non_empty(&self.celsius, codec::decode_temperature).map(Option::flatten)
    }

    /// Returns the offset in °C.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn offset(&self) -> Result<Option<f64>, ParseError> {
        non_empty(&self.offset, codec::decode_temperature).map(Option::flatten)
    }
}

/// Alarm sensor sub-element.
#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    /// `0` / `1`, empty if unknown.
    #[serde(default)]
    pub state: String,
    /// Last change as Unix seconds.
    #[serde(default)]
    pub lastalertchgtimestamp: String,
}

impl Alert {
    /// Returns whether the alarm is raised.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a value other than `0`/`1`.
    pub fn state(&self) -> Result<Option<bool>, ParseError> {
        optional_flag(&self.state)
    }

    /// Returns the time of the last alarm change.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn last_change(&self) -> Result<Option<DateTime<Utc>>, ParseError> {
        non_empty(&self.lastalertchgtimestamp, codec::decode_timestamp).map(Option::flatten)
    }
}

/// A key of a button device.
#[derive(Debug, Clone, Deserialize)]
pub struct Button {
    /// AIN of the key.
    #[serde(rename = "@identifier", default)]
    pub identifier: String,
    /// Internal id.
    #[serde(rename = "@id", default)]
    pub id: String,
    /// Key name.
    #[serde(default)]
    pub name: String,
    /// Last key press as Unix seconds.
    #[serde(default)]
    pub lastpressedtimestamp: String,
}

impl Button {
    /// Returns the time of the last key press.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn last_pressed(&self) -> Result<Option<DateTime<Utc>>, ParseError> {
        non_empty(&self.lastpressedtimestamp, codec::decode_timestamp).map(Option::flatten)
    }
}

/// Radiator controller sub-element.
///
/// Temperatures use half-degree steps. Setpoints also carry the 253/254
/// sentinels; the measured value is a plain reading.
#[derive(Debug, Clone, Deserialize)]
pub struct Hkr {
    /// Measured temperature.
    #[serde(default)]
    pub tist: String,
    /// Target temperature.
    #[serde(default)]
    pub tsoll: String,
    /// Economy temperature.
    #[serde(default)]
    pub absenk: String,
    /// Comfort temperature.
    #[serde(default)]
    pub komfort: String,
    /// Keylock via UI/API.
    #[serde(default)]
    pub lock: String,
    /// Keylock on the device.
    #[serde(default)]
    pub devicelock: String,
    /// Installation error code, `0` for none.
    #[serde(default)]
    pub errorcode: String,
    /// `0` / `1`.
    #[serde(default)]
    pub batterylow: String,
    /// `0` / `1`.
    #[serde(default)]
    pub windowopenactiv: String,
    /// Window-open mode end as Unix seconds.
    #[serde(default)]
    pub windowopenactiveendtime: String,
    /// `0` / `1`.
    #[serde(default)]
    pub boostactive: String,
    /// Boost end as Unix seconds.
    #[serde(default)]
    pub boostactiveendtime: String,
    /// Next scheduled change.
    pub nextchange: Option<NextChange>,
}

impl Hkr {
    /// Returns the measured temperature in °C.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` if the value is not an integer.
    pub fn actual(&self) -> Result<Option<f64>, ParseError> {
        non_empty(&self.tist, codec::decode_half_degrees).map(Option::flatten)
    }

    /// Returns the target temperature.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` outside the HKR scale.
    pub fn target(&self) -> Result<HkrTemperature, ParseError> {
        codec::decode_hkr_temperature(&self.tsoll)
    }

    /// Returns the comfort temperature.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` outside the HKR scale.
    pub fn comfort(&self) -> Result<HkrTemperature, ParseError> {
        codec::decode_hkr_temperature(&self.komfort)
    }

    /// Returns the economy temperature.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` outside the HKR scale.
    pub fn economy(&self) -> Result<HkrTemperature, ParseError> {
        codec::decode_hkr_temperature(&self.absenk)
    }

    /// Returns the installation error code.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn error_code(&self) -> Result<Option<i64>, ParseError> {
        non_empty(&self.errorcode, codec::decode_int)
    }

    /// Returns whether an open window was detected.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a value other than `0`/`1`.
    pub fn window_open(&self) -> Result<Option<bool>, ParseError> {
        optional_flag(&self.windowopenactiv)
    }

    /// Returns whether boost mode is running.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a value other than `0`/`1`.
    pub fn boost_active(&self) -> Result<Option<bool>, ParseError> {
        optional_flag(&self.boostactive)
    }

    /// Returns the end of the boost period.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn boost_end(&self) -> Result<Option<DateTime<Utc>>, ParseError> {
        non_empty(&self.boostactiveendtime, codec::decode_timestamp).map(Option::flatten)
    }

    /// Returns the end of the window-open period.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn window_open_end(&self) -> Result<Option<DateTime<Utc>>, ParseError> {
        non_empty(&self.windowopenactiveendtime, codec::decode_timestamp).map(Option::flatten)
    }
}

/// Next scheduled temperature change of an HKR.
#[derive(Debug, Clone, Deserialize)]
pub struct NextChange {
    /// Change time as Unix seconds.
    #[serde(default)]
    pub endperiod: String,
    /// Temperature after the change.
    #[serde(default)]
    pub tchange: String,
}

impl NextChange {
    /// Returns the time of the change.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric value.
    pub fn at(&self) -> Result<Option<DateTime<Utc>>, ParseError> {
        non_empty(&self.endperiod, codec::decode_timestamp).map(Option::flatten)
    }

    /// Returns the temperature after the change.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` outside the HKR scale.
    pub fn temperature(&self) -> Result<HkrTemperature, ParseError> {
        codec::decode_hkr_temperature(&self.tchange)
    }
}

/// Simple on/off unit.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleOnOff {
    /// `0` / `1`.
    #[serde(default)]
    pub state: String,
}

/// Dimmer unit.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelControl {
    /// Level 0-255.
    #[serde(default)]
    pub level: String,
    /// Level 0-100.
    #[serde(default)]
    pub levelpercentage: String,
}

/// Colour unit.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorControl {
    /// Bitmask of supported colour modes.
    #[serde(rename = "@supported_modes", default)]
    pub supported_modes: String,
    /// Active colour mode.
    #[serde(rename = "@current_mode", default)]
    pub current_mode: String,
    /// Hue in degrees.
    #[serde(default)]
    pub hue: String,
    /// Saturation 0-255.
    #[serde(default)]
    pub saturation: String,
    /// White temperature in Kelvin.
    #[serde(default)]
    pub temperature: String,
}

/// HAN-FUN unit information.
#[derive(Debug, Clone, Deserialize)]
pub struct EtsiUnitInfo {
    /// Internal id of the owning device.
    #[serde(default)]
    pub etsideviceid: String,
    /// HAN-FUN unit type.
    #[serde(default)]
    pub unittype: String,
    /// Comma separated HAN-FUN interfaces.
    #[serde(default)]
    pub interfaces: String,
}

impl EtsiUnitInfo {
    /// Returns the supported interfaces.
    #[must_use]
    pub fn interfaces(&self) -> Vec<String> {
        codec::decode_list(&self.interfaces)
    }
}

/// Group membership.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupInfo {
    /// Internal id of the master device, `0` for none.
    #[serde(default)]
    pub masterdeviceid: String,
    /// Comma separated internal ids of the members.
    #[serde(default)]
    pub members: String,
}

impl GroupInfo {
    /// Returns the internal ids of the members.
    #[must_use]
    pub fn members(&self) -> Vec<String> {
        codec::decode_list(&self.members)
    }
}
