use super::lookup::MONTHS;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// A normalized listing entry, built once from a single table row.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub label: String,
    pub description: String,
    pub start_day: String,
    pub start_month: String,
    pub start_month_string: String,
    pub start_year: String,
    pub end_day: String,
    pub homepage: String,
    pub fee: Option<String>,
    pub venue: String,
    pub city: String,
    pub country: String,
    pub osm_link: String,
    pub geo: Option<String>,
    pub cfp_date: Option<NaiveDate>,
    pub cfp_link: Option<String>,
    pub coc_link: Option<String>,
    pub reg: bool,
    pub reg_link: Option<String>,
    pub classes: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub upcoming: bool,
    pub participants: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub details_url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub label: String,
    pub events: Vec<Event>,
}

impl MonthBucket {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            events: Vec::new(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EventCollection {
    pub all: Vec<Event>,
    pub upcoming: BTreeMap<String, MonthBucket>,
    pub prev: BTreeMap<String, MonthBucket>,
}

impl EventCollection {
    /// Both bucket maps start with every month present and empty.
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            upcoming: empty_buckets(),
            prev: empty_buckets(),
        }
    }

    pub fn push(&mut self, event: Event) {
        let buckets = if event.upcoming {
            &mut self.upcoming
        } else {
            &mut self.prev
        };

        if let Some(bucket) = buckets.get_mut(&event.start_month) {
            bucket.events.push(event.clone());
        }

        self.all.push(event);
    }

    /// Stable, so events on the same day keep their table order.
    pub fn sort_buckets(&mut self) {
        self.upcoming
            .values_mut()
            .chain(self.prev.values_mut())
            .for_each(|bucket| {
                bucket
                    .events
                    .sort_by(|a, b| a.start_day.cmp(&b.start_day))
            });
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.values().map(|bucket| bucket.events.len()).sum()
    }

    pub fn past_count(&self) -> usize {
        self.prev.values().map(|bucket| bucket.events.len()).sum()
    }
}

impl Default for EventCollection {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_buckets() -> BTreeMap<String, MonthBucket> {
    MONTHS
        .iter()
        .map(|(key, name)| (key.to_string(), MonthBucket::new(name)))
        .collect()
}
