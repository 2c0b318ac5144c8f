//! The surface wind group (`dddffGggKT`) and its unit handling.

use std::fmt;
use std::fmt::{Display, Formatter};

const KNOTS_PER_MPS: f64 = 1.943_844;
const KNOTS_PER_KMH: f64 = 0.539_957;

/// Unit a wind speed is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
    KilometersPerHour,
}

impl SpeedUnit {
    /// Splits a unit suffix off a wind token. Tokens without a suffix are in knots.
    fn split_suffix(token: &str) -> (&str, SpeedUnit) {
        // Longest suffixes first, "KTS" would otherwise leave a trailing 'S'.
        for (suffix, unit) in [
            ("KMH", SpeedUnit::KilometersPerHour),
            ("MPS", SpeedUnit::MetersPerSecond),
            ("KTS", SpeedUnit::Knots),
            ("KT", SpeedUnit::Knots),
        ] {
            if let Some(body) = token.strip_suffix(suffix) {
                return (body, unit);
            }
        }
        (token, SpeedUnit::Knots)
    }

    fn to_knots(self, value: f64) -> f64 {
        match self {
            SpeedUnit::Knots => value,
            SpeedUnit::MetersPerSecond => value * KNOTS_PER_MPS,
            SpeedUnit::KilometersPerHour => value * KNOTS_PER_KMH,
        }
    }
}

impl Display for SpeedUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let unit = match self {
            SpeedUnit::Knots => "KT",
            SpeedUnit::MetersPerSecond => "MPS",
            SpeedUnit::KilometersPerHour => "KMH",
        };
        f.write_str(unit)
    }
}

/// A single reported speed, kept in the unit it was reported in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    pub value: f64,
    pub unit: SpeedUnit,
    /// Set for `P` prefixed values ("more than").
    pub greater_than: bool,
}

impl Speed {
    pub fn knots(&self) -> f64 {
        self.unit.to_knots(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirection {
    Degrees(u16),
    Variable,
    Missing,
}

impl WindDirection {
    fn parse(text: &str) -> Option<WindDirection> {
        match text {
            "VRB" => Some(WindDirection::Variable),
            "///" | "MMM" => Some(WindDirection::Missing),
            _ if text.bytes().all(|b| b.is_ascii_digit()) => {
                let degrees: u16 = text.parse().ok()?;
                (degrees <= 360).then_some(WindDirection::Degrees(degrees))
            }
            _ => None,
        }
    }
}

/// Decoded surface wind group.
///
/// `speed` is `None` when the group is present but the station reported the
/// speed as missing (`/////KT`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindGroup {
    pub direction: WindDirection,
    pub speed: Option<Speed>,
    pub gust: Option<Speed>,
}

impl WindGroup {
    /// Parses a wind token such as `09012KT`, `VRB03KT`, `27015G25KT`, `18008MPS`
    /// or `P99KT`-style speeds. Returns `None` if the token is not a wind group.
    pub fn parse(token: &str) -> Option<WindGroup> {
        if !token.is_ascii() {
            return None;
        }
        let (body, unit) = SpeedUnit::split_suffix(token);
        if body.len() < 5 {
            return None;
        }
        let (direction, rest) = body.split_at(3);
        let direction = WindDirection::parse(direction)?;

        let (speed_text, gust_text) = match rest.split_once('G') {
            Some((speed, gust)) => (speed, Some(gust)),
            None => (rest, None),
        };
        let speed = parse_speed(speed_text, 2, unit)?;
        let gust = match gust_text {
            Some(gust) => parse_speed(gust, 1, unit)?,
            None => None,
        };

        Some(WindGroup {
            direction,
            speed,
            gust,
        })
    }

    /// Sustained speed in knots, 0 when the speed is missing.
    pub fn speed_knots(&self) -> f64 {
        self.speed.map(|s| s.knots()).unwrap_or(0.0)
    }

    /// Gust speed in knots, if a usable gust was reported.
    pub fn gust_knots(&self) -> Option<f64> {
        self.gust.map(|g| g.knots())
    }
}

/// Outer `None`: not a speed. Inner `None`: speed reported as missing.
fn parse_speed(text: &str, min_digits: usize, unit: SpeedUnit) -> Option<Option<Speed>> {
    if (min_digits..=3).contains(&text.len()) && text.bytes().all(|b| b == b'/' || b == b'M') {
        return Some(None);
    }
    let (digits, greater_than) = match text.strip_prefix('P') {
        Some(digits) => (digits, true),
        None => (text, false),
    };
    if !(min_digits..=3).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: f64 = digits.parse().ok()?;
    Some(Some(Speed {
        value,
        unit,
        greater_than,
    }))
}

/// Parses the variable wind direction group, e.g. `240V300`.
pub(crate) fn parse_variation(token: &str) -> Option<(u16, u16)> {
    let (from, to) = token.split_once('V')?;
    if from.len() != 3 || to.len() != 3 {
        return None;
    }
    match (WindDirection::parse(from)?, WindDirection::parse(to)?) {
        (WindDirection::Degrees(from), WindDirection::Degrees(to)) => Some((from, to)),
        _ => None,
    }
}
