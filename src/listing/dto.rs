use super::error::{DateError, EndDatePolicy, ParseError};
use super::lookup::{country_name, event_type_class, month_display};
use super::model::Event;
use super::path::PathGenerator;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d";
const APPROVED: &str = "yes";
const PLACEHOLDER: &str = "--";
const NO_COC: &str = "nococ";
const CFP_ALWAYS_OPEN: &str = "open";
const CFP_PLACEHOLDERS: [&str; 2] = [PLACEHOLDER, "nada"];
const FREE_ENTRANCE: &str = "0";
const NO_REGISTRATION: &str = "no";

/// One row of the events table, untouched.
///
/// Every column is optional; anything missing reads as an empty string.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub label: String,
    #[serde(rename = "Self-description")]
    pub description: String,
    pub datestart: String,
    pub dateend: String,
    pub homepage: String,
    pub venue: String,
    pub city: String,
    pub country: String,
    pub approved: String,
    #[serde(rename = "EntranceFee")]
    pub entrance_fee: String,
    #[serde(rename = "Registration")]
    pub registration: String,
    pub cfpdate: String,
    pub cfplink: String,
    pub coclink: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(rename = "ParticipantsLastTime")]
    pub participants: String,
    pub lat: String,
    pub lon: String,
    #[serde(rename = "OSM-Link")]
    pub osm_link: String,
}

impl RawRecord {
    pub fn is_approved(&self) -> bool {
        self.approved == APPROVED
    }

    /**
    Builds the listing entry for this row as seen at `now`.

    * `Ok(None)`: the start date is unusable and the row should be dropped
    * `Err(_)`: the end date is unusable and `end_date_policy` is `Abort`
    */
    #[tracing::instrument(skip_all, fields(label = %self.label))]
    pub fn to_model(
        &self,
        now: NaiveDateTime,
        end_date_policy: EndDatePolicy,
        paths: &dyn PathGenerator,
    ) -> Result<Option<Event>, ParseError> {
        let start_date = match parse_date(&self.datestart) {
            Ok(date) => date,
            Err(err) => {
                warn!(
                    "Failed to parse start date '{}' (skipping row). Err: {err}",
                    self.datestart
                );
                return Ok(None);
            }
        };

        let end_date = match parse_date(&self.dateend) {
            Ok(date) => date,
            Err(source) => match end_date_policy {
                EndDatePolicy::Abort => {
                    return Err(ParseError::InvalidEndDate {
                        label: self.label.to_string(),
                        value: self.dateend.to_string(),
                        source,
                    })
                }
                EndDatePolicy::Skip => {
                    warn!(
                        "Failed to parse end date '{}' (skipping row). Err: {source}",
                        self.dateend
                    );
                    return Ok(None);
                }
            },
        };

        let upcoming = start_date > start_of_month(now);
        let (cfp_date, cfp_link) = if upcoming {
            self.cfp_window(now.date())
        } else {
            (None, None)
        };
        let (reg, reg_link) = self.registration_details();
        let coordinates = self.coordinates();

        let start_month = start_date.format("%m").to_string();

        let mut event = Event {
            label: self.label.to_string(),
            description: self.description.to_string(),
            start_day: start_date.format("%d").to_string(),
            start_month_string: month_display(&start_month)
                .unwrap_or_default()
                .to_string(),
            start_month,
            start_year: start_date.format("%Y").to_string(),
            end_day: end_date.format("%d").to_string(),
            homepage: self.homepage.to_string(),
            fee: (self.entrance_fee != FREE_ENTRANCE).then(|| self.entrance_fee.to_string()),
            venue: self.venue.to_string(),
            city: self.city(),
            country: self.country(),
            osm_link: self.osm_link.to_string(),
            geo: coordinates.map(|(lat, lon)| {
                format!("geo:{},{}", format_coordinate(lat), format_coordinate(lon))
            }),
            cfp_date,
            cfp_link,
            coc_link: self.coc_link(),
            reg,
            reg_link,
            classes: event_type_class(&self.event_type).to_string(),
            event_type: self.event_type.to_string(),
            upcoming,
            participants: self.participants.to_string(),
            lat: coordinates.map(|(lat, _)| lat),
            lon: coordinates.map(|(_, lon)| lon),
            details_url: String::new(),
        };

        event.details_url = paths.details_url(&event);

        Ok(Some(event))
    }

    fn city(&self) -> String {
        if is_placeholder(&self.city) {
            String::new()
        } else {
            self.city.to_string()
        }
    }

    fn country(&self) -> String {
        if is_placeholder(&self.country) {
            String::new()
        } else {
            country_name(self.country.trim())
        }
    }

    fn coc_link(&self) -> Option<String> {
        if self.coclink.is_empty() || self.coclink == NO_COC {
            None
        } else {
            Some(self.coclink.to_string())
        }
    }

    /// Only meaningful for upcoming events.
    fn cfp_window(&self, today: NaiveDate) -> (Option<NaiveDate>, Option<String>) {
        if CFP_PLACEHOLDERS.contains(&self.cfplink.as_str()) {
            return (None, None);
        }

        let mut cfp_link = Some(self.cfplink.to_string());

        let cfp_date = match self.cfpdate.as_str() {
            "" | CFP_ALWAYS_OPEN => None,
            value => match parse_date(value) {
                // Deadline passed before the end of today: call is closed
                Ok(deadline) if deadline <= today => {
                    cfp_link = None;
                    None
                }
                Ok(deadline) => Some(deadline),
                Err(err) => {
                    debug!("Ignoring unparsable cfp date '{value}'. Err: {err}");
                    None
                }
            },
        };

        (cfp_date, cfp_link)
    }

    fn registration_details(&self) -> (bool, Option<String>) {
        if !self.registration.is_empty() && self.registration != NO_REGISTRATION {
            // Always true under the outer guard
            let reg_link = if self.registration != NO_REGISTRATION {
                Some(self.registration.to_string())
            } else {
                None
            };

            (true, reg_link)
        } else {
            (false, None)
        }
    }

    fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = parse_coordinate(&self.lat)?;
        let lon = parse_coordinate(&self.lon)?;

        Some((lat, lon))
    }
}

/// chrono alone would accept padded or single-digit fields, so the shape is checked first.
fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::NotEightDigits);
    }

    Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|coordinate| coordinate.is_finite())
}

/// Shortest round-trip form, with signed two-digit exponents (`1e-05`, `1e+16`).
fn format_coordinate(value: f64) -> String {
    let repr = format!("{value:?}");

    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };

            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

fn is_placeholder(value: &str) -> bool {
    value.is_empty() || value == PLACEHOLDER
}

/// Dates carry no time, so "after the first instant of the month" means
/// any day past the 1st.
fn start_of_month(now: NaiveDateTime) -> NaiveDate {
    now.date() - Days::new(u64::from(now.day0()))
}
