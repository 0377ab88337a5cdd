// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Basic device statistics (`getbasicdevicestats`).

use serde::Deserialize;

use crate::codec;
use crate::error::ParseError;

/// Statistics of a device, one series per measured quantity.
///
/// ```xml
/// <devicestats>
///   <temperature><stats count="4" grid="900">215,210,-,205</stats></temperature>
///   <energy>
///     <stats count="2" grid="2678400">1200,1350</stats>
///     <stats count="3" grid="86400">40,38,45</stats>
///   </energy>
/// </devicestats>
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceStats {
    /// Temperature in 0.1 °C.
    pub temperature: Option<StatsSeries>,
    /// Voltage in mV.
    pub voltage: Option<StatsSeries>,
    /// Power in 0.01 W.
    pub power: Option<StatsSeries>,
    /// Energy in Wh.
    pub energy: Option<StatsSeries>,
    /// Relative humidity in percent.
    pub humidity: Option<StatsSeries>,
}

/// All statistics blocks recorded for one quantity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsSeries {
    /// Blocks with different sample grids.
    #[serde(rename = "stats", default)]
    pub stats: Vec<Stats>,
}

/// One block of samples, newest first.
#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    /// Number of samples.
    #[serde(rename = "@count", default)]
    pub count: u32,
    /// Seconds between samples.
    #[serde(rename = "@grid", default)]
    pub grid: u32,
    /// Time of the newest sample as Unix seconds.
    #[serde(rename = "@datatime", default)]
    pub datatime: String,
    /// Comma separated samples, `-` for a missing one.
    #[serde(rename = "$text", default)]
    pub values: String,
}

impl Stats {
    /// Returns the samples in wire units, `None` for gaps.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a non-numeric sample.
    pub fn values(&self) -> Result<Vec<Option<i64>>, ParseError> {
        codec::decode_list(&self.values)
            .iter()
            .map(|sample| match sample.trim() {
                "-" => Ok(None),
                other => codec::decode_int(other).map(Some),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: &str = r#"<devicestats>
<temperature><stats count="4" grid="900" datatime="1705318200">215,210,-,205</stats></temperature>
<energy><stats count="2" grid="2678400">1200,1350</stats><stats count="3" grid="86400">40,38,45</stats></energy>
</devicestats>"#;

    #[test]
    fn parse_series() {
        let stats: DeviceStats = codec::decode_xml(STATS).unwrap();
        assert!(stats.voltage.is_none());

        let temperature = &stats.temperature.unwrap().stats[0];
        assert_eq!(temperature.count, 4);
        assert_eq!(temperature.grid, 900);
        assert_eq!(
            temperature.values().unwrap(),
            vec![Some(215), Some(210), None, Some(205)]
        );

        let energy = stats.energy.unwrap();
        assert_eq!(energy.stats.len(), 2);
        assert_eq!(energy.stats[1].values().unwrap().len(), 3);
    }

    #[test]
    fn garbage_sample_is_reported() {
        let stats: Stats = codec::decode_xml(r#"<stats count="1" grid="60">abc</stats>"#).unwrap();
        assert!(stats.values().is_err());
    }
}
