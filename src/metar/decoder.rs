//! Grammar driven decoder for METAR/SPECI report bodies.
//!
//! Groups are recognised in the order the format prescribes. Decoding stops
//! cleanly at the remarks section or at a trend forecast; any other token that
//! no group claims makes the whole report fail.

use crate::metar::error::DecodeError;
use crate::metar::wind::{parse_variation, WindGroup};

const DESCRIPTORS: [&str; 8] = ["MI", "PR", "BC", "DR", "BL", "SH", "TS", "FZ"];
const PHENOMENA: [&str; 22] = [
    "DZ", "RA", "SN", "SG", "IC", "PL", "GR", "GS", "UP", "BR", "FG", "FU", "VA", "DU", "SA",
    "HZ", "PY", "PO", "SQ", "FC", "SS", "DS",
];
const COMPASS: [&str; 9] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW", "NDV"];
const STOP_WORDS: [&str; 4] = ["RMK", "NOSIG", "BECMG", "TEMPO"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Metar,
    Speci,
}

/// The parts of a decoded report this crate cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct MetarReport {
    pub kind: ReportKind,
    pub station: String,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub automated: bool,
    pub corrected: bool,
    pub wind: Option<WindGroup>,
    pub wind_variation: Option<(u16, u16)>,
    /// Everything from `RMK` or a trend keyword onwards.
    pub remarks: Option<String>,
}

impl MetarReport {
    /// Sustained wind in knots, 0 when the report carries no usable wind.
    pub fn wind_speed_knots(&self) -> f64 {
        self.wind.map(|w| w.speed_knots()).unwrap_or(0.0)
    }

    /// Gust in knots, falling back to the sustained speed when no gust was reported.
    pub fn wind_gust_knots(&self) -> f64 {
        self.wind
            .and_then(|w| w.gust_knots())
            .unwrap_or_else(|| self.wind_speed_knots())
    }
}

struct Tokens<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<&'a str> {
        self.tokens.get(self.pos + 1).copied()
    }

    fn take_if(&mut self, accept: impl Fn(&str) -> bool) -> Option<&'a str> {
        let token = self.peek().filter(|t| accept(*t))?;
        self.pos += 1;
        Some(token)
    }

    fn skip_while(&mut self, accept: impl Fn(&str) -> bool) {
        while self.take_if(&accept).is_some() {}
    }

    fn rest(&self) -> &[&'a str] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }
}

/// Decodes a raw report body into a [`MetarReport`].
///
/// # Errors
///
/// Returns a [`DecodeError`] when the station or time groups are missing, when the
/// report is `NIL`, or when tokens remain that no group recognises.
pub fn decode(raw: &str) -> Result<MetarReport, DecodeError> {
    let text = raw.trim().trim_end_matches('=');
    let mut tokens = Tokens::new(text);
    if tokens.peek().is_none() {
        return Err(DecodeError::Empty);
    }
    let foreign: Vec<String> = tokens
        .rest()
        .iter()
        .filter(|t| !t.is_ascii())
        .map(|t| t.to_string())
        .collect();
    if !foreign.is_empty() {
        return Err(DecodeError::UnparsedGroups(foreign));
    }

    let kind = match tokens.take_if(|t| t == "METAR" || t == "SPECI") {
        Some("SPECI") => ReportKind::Speci,
        _ => ReportKind::Metar,
    };
    let mut corrected = tokens.take_if(|t| t == "COR" || t == "AMD").is_some();

    let station = tokens
        .take_if(is_station)
        .ok_or_else(|| DecodeError::MissingStation(tokens.peek().unwrap_or_default().to_string()))?
        .to_string();

    if tokens.peek() == Some("NIL") {
        return Err(DecodeError::Nil(station));
    }

    let (day, hour, minute) = tokens
        .peek()
        .and_then(parse_time)
        .ok_or_else(|| DecodeError::MissingTime(tokens.peek().unwrap_or_default().to_string()))?;
    tokens.pos += 1;

    let mut automated = false;
    while let Some(modifier) = tokens.take_if(is_modifier) {
        match modifier {
            "AUTO" => automated = true,
            "NIL" => return Err(DecodeError::Nil(station)),
            _ => corrected = true,
        }
    }

    let wind = tokens.peek().and_then(WindGroup::parse);
    if wind.is_some() {
        tokens.pos += 1;
    }
    let wind_variation = tokens.peek().and_then(parse_variation);
    if wind_variation.is_some() {
        tokens.pos += 1;
    }

    skip_visibility(&mut tokens);
    tokens.skip_while(is_runway_range);
    tokens.skip_while(is_weather);
    tokens.skip_while(is_sky);
    tokens.take_if(is_temperature);
    tokens.skip_while(is_pressure);
    skip_supplementary(&mut tokens);

    let rest = tokens.rest();
    let remarks = match rest.first() {
        None => None,
        Some(first) if STOP_WORDS.contains(first) => Some(rest.join(" ")),
        Some(_) => {
            let unparsed = rest
                .iter()
                .take_while(|t| !STOP_WORDS.contains(t))
                .map(|t| t.to_string())
                .collect();
            return Err(DecodeError::UnparsedGroups(unparsed));
        }
    };

    Ok(MetarReport {
        kind,
        station,
        day,
        hour,
        minute,
        automated,
        corrected,
        wind,
        wind_variation,
        remarks,
    })
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_station(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 4
        && bytes[0].is_ascii_uppercase()
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn parse_time(token: &str) -> Option<(u32, u32, u32)> {
    let digits = token.strip_suffix('Z').unwrap_or(token);
    if digits.len() != 6 || !all_digits(digits) {
        return None;
    }
    let day: u32 = digits[0..2].parse().ok()?;
    let hour: u32 = digits[2..4].parse().ok()?;
    let minute: u32 = digits[4..6].parse().ok()?;
    ((1..=31).contains(&day) && hour <= 24 && minute <= 59).then_some((day, hour, minute))
}

fn is_modifier(token: &str) -> bool {
    matches!(token, "AUTO" | "COR" | "RTD" | "FINO" | "NIL")
        || (token.len() == 3
            && token.starts_with("CC")
            && token.as_bytes()[2].is_ascii_uppercase())
}

fn skip_visibility(tokens: &mut Tokens) {
    loop {
        let Some(token) = tokens.peek() else { return };
        // "1 1/2SM" is split over two tokens.
        let whole_then_fraction = token.len() <= 2
            && all_digits(token)
            && tokens
                .peek_next()
                .is_some_and(|next| next.contains('/') && is_statute_miles(next));
        if whole_then_fraction {
            tokens.pos += 2;
        } else if is_visibility(token) {
            tokens.pos += 1;
        } else {
            return;
        }
    }
}

fn is_visibility(token: &str) -> bool {
    if token == "CAVOK" || token == "////" {
        return true;
    }
    if is_statute_miles(token) {
        return true;
    }
    token.len() >= 4
        && all_digits(&token[..4])
        && (token.len() == 4 || COMPASS.contains(&&token[4..]))
}

fn is_statute_miles(token: &str) -> bool {
    let Some(body) = token.strip_suffix("SM") else {
        return false;
    };
    let body = body
        .strip_prefix('M')
        .or_else(|| body.strip_prefix('P'))
        .unwrap_or(body);
    if body == "////" {
        return true;
    }
    match body.split_once('/') {
        Some((numerator, denominator)) => all_digits(numerator) && all_digits(denominator),
        None => all_digits(body),
    }
}

fn is_runway_range(token: &str) -> bool {
    let Some((runway, _)) = token.strip_prefix('R').and_then(|t| t.split_once('/')) else {
        return false;
    };
    let bytes = runway.as_bytes();
    match bytes.len() {
        2 => all_digits(runway),
        3 => all_digits(&runway[..2]) && matches!(bytes[2], b'L' | b'R' | b'C'),
        _ => false,
    }
}

fn is_weather(token: &str) -> bool {
    if token == "//" || token == "NSW" {
        return true;
    }
    let body = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .or_else(|| token.strip_prefix("VC"))
        .unwrap_or(token);
    if body.is_empty() || body.len() % 2 != 0 || !body.is_ascii() {
        return false;
    }
    body.as_bytes().chunks(2).all(|chunk| {
        std::str::from_utf8(chunk)
            .map(|code| DESCRIPTORS.contains(&code) || PHENOMENA.contains(&code))
            .unwrap_or(false)
    })
}

fn is_sky(token: &str) -> bool {
    if matches!(token, "CLR" | "SKC" | "NSC" | "NCD") {
        return true;
    }
    let (height, cloud) = if let Some(rest) = token.strip_prefix("VV") {
        (rest, "")
    } else if token.len() >= 6 && matches!(&token[..3], "FEW" | "SCT" | "BKN" | "OVC" | "///") {
        token[3..].split_at(3)
    } else {
        return false;
    };
    ((all_digits(height) && height.len() == 3) || height == "///")
        && matches!(cloud, "" | "CB" | "TCU" | "///")
}

fn is_temperature(token: &str) -> bool {
    if token == "/////" {
        return true;
    }
    let Some((temperature, dew_point)) = token.split_once('/') else {
        return false;
    };
    let valid = |part: &str| {
        let digits = part.strip_prefix('M').unwrap_or(part);
        (digits.len() == 2 && all_digits(digits)) || part == "//"
    };
    valid(temperature) && (dew_point.is_empty() || valid(dew_point))
}

fn is_pressure(token: &str) -> bool {
    let Some(value) = token.strip_prefix('A').or_else(|| token.strip_prefix('Q')) else {
        return false;
    };
    value.len() == 4 && (all_digits(value) || value == "////")
}

fn skip_supplementary(tokens: &mut Tokens) {
    loop {
        match tokens.peek() {
            Some(token) if token.len() > 2 && token.starts_with("RE") && is_weather(&token[2..]) => {
                tokens.pos += 1;
            }
            Some("WS") => {
                tokens.pos += 1;
                tokens.skip_while(|t| t == "ALL" || t == "RWY" || is_runway_designator(t));
            }
            _ => return,
        }
    }
}

fn is_runway_designator(token: &str) -> bool {
    let runway = token.strip_prefix('R').unwrap_or(token);
    let runway = runway.strip_prefix("WY").unwrap_or(runway);
    runway.len() >= 2 && all_digits(&runway[..2]) && runway.len() <= 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metar::wind::WindDirection;

    #[test]
    fn test_decode_routine_report() -> Result<(), DecodeError> {
        let report = decode("KSQL 241355Z AUTO 32006KT 10SM CLR 18/11 A3002 RMK AO2")?;
        assert_eq!(report.kind, ReportKind::Metar);
        assert_eq!(report.station, "KSQL");
        assert_eq!((report.day, report.hour, report.minute), (24, 13, 55));
        assert!(report.automated);
        assert_eq!(report.wind_speed_knots(), 6.0);
        assert_eq!(report.wind_gust_knots(), 6.0);
        assert_eq!(report.remarks.as_deref(), Some("RMK AO2"));
        Ok(())
    }

    #[test]
    fn test_decode_gusty_report() -> Result<(), DecodeError> {
        let report =
            decode("METAR KSFO 011256Z 29025G35KT 260V320 1 1/2SM -RA BR FEW008 BKN015 OVC025 12/10 A2992")?;
        let wind = report.wind.expect("wind group should be decoded");
        assert_eq!(wind.direction, WindDirection::Degrees(290));
        assert_eq!(report.wind_speed_knots(), 25.0);
        assert_eq!(report.wind_gust_knots(), 35.0);
        assert_eq!(report.wind_variation, Some((260, 320)));
        assert_eq!(report.remarks, None);
        Ok(())
    }

    #[test]
    fn test_decode_icao_style_report() -> Result<(), DecodeError> {
        let report = decode("SPECI EHAM 121025Z 24012MPS 9999 SCT030CB M02/M05 Q1013 NOSIG=")?;
        assert_eq!(report.kind, ReportKind::Speci);
        assert!((report.wind_speed_knots() - 23.326128).abs() < 1e-9);
        assert_eq!(report.remarks.as_deref(), Some("NOSIG"));
        Ok(())
    }

    #[test]
    fn test_missing_wind_group_is_calm() -> Result<(), DecodeError> {
        let report = decode("KSQL 241355Z 10SM CLR 18/11 A3002")?;
        assert_eq!(report.wind, None);
        assert_eq!(report.wind_speed_knots(), 0.0);
        assert_eq!(report.wind_gust_knots(), 0.0);
        Ok(())
    }

    #[test]
    fn test_no_significant_weather() -> Result<(), DecodeError> {
        let report = decode("KSQL 051755Z 27012KT 10SM -RA NSW BKN020 12/10 A2992")?;
        assert_eq!(report.wind_speed_knots(), 12.0);

        let report = decode("EGLL 051750Z 24015KT 9999 NSW SCT030 14/08 Q1011 NOSIG")?;
        assert_eq!(report.wind_speed_knots(), 15.0);
        Ok(())
    }

    #[test]
    fn test_supplementary_groups() -> Result<(), DecodeError> {
        let report = decode(
            "KJFK 051751Z 31018G27KT 3/4SM R04R/2000V4000FT +TSRA VV005 22/21 A2990 RETS WS R04R RMK PK WND",
        )?;
        assert_eq!(report.wind_gust_knots(), 27.0);
        Ok(())
    }

    #[test]
    fn test_failures() {
        assert_eq!(decode("   "), Err(DecodeError::Empty));
        assert_eq!(
            decode("KSQL NIL"),
            Err(DecodeError::Nil("KSQL".to_string()))
        );
        assert!(matches!(
            decode("ksql 241355Z 32006KT"),
            Err(DecodeError::MissingStation(_))
        ));
        assert!(matches!(
            decode("KSQL 32006KT 10SM"),
            Err(DecodeError::MissingTime(_))
        ));
        assert_eq!(
            decode("KSQL 241355Z 32006KT 10SM GARBAGE CLR RMK AO2"),
            Err(DecodeError::UnparsedGroups(vec![
                "GARBAGE".to_string(),
                "CLR".to_string()
            ]))
        );
    }

    #[test]
    fn test_out_of_order_groups_fail() {
        // Sky condition may not precede visibility.
        assert!(matches!(
            decode("KSQL 241355Z 32006KT CLR 10SM A3002"),
            Err(DecodeError::UnparsedGroups(_))
        ));
    }

    #[test]
    fn test_decode_is_pure() {
        let raw = "KSQL 241355Z 09025G35KT 10SM CLR 18/11 A3002";
        assert_eq!(decode(raw), decode(raw));
    }
}
