//! Decoding of METAR/SPECI aviation weather reports.

pub mod decoder;
pub mod error;
pub mod wind;
