use super::model::Event;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

pub const DEFAULT_PREFIX: &str = "/events";
const MAX_SLUG_LENGTH: usize = 50;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex =
        Regex::new("[^a-z0-9]+").expect("Failed to create slug regex");
}

/// Builds the link to an event's own page.
///
/// Called once per event after every other field is filled in, so
/// implementations may read anything except `details_url` itself.
pub trait PathGenerator {
    fn details_url(&self, event: &Event) -> String;
}

#[derive(Debug, Clone)]
pub struct SlugPathGenerator {
    pub prefix: String,
}

impl SlugPathGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for SlugPathGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl PathGenerator for SlugPathGenerator {
    fn details_url(&self, event: &Event) -> String {
        format!(
            "{}/{}/{}/{}-{}/",
            self.prefix,
            event.start_year,
            event.start_month,
            event.start_day,
            slugify(&event.label)
        )
    }
}

pub fn slugify(text: &str) -> String {
    let slug: String = NON_SLUG_CHARS
        .replace_all(&text.to_lowercase(), "-")
        .split('-')
        .filter(|part| !part.is_empty())
        .join("-")
        .chars()
        .take(MAX_SLUG_LENGTH)
        .collect();
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "event".to_string()
    } else {
        slug.to_string()
    }
}
