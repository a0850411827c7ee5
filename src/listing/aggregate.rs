use super::dto::RawRecord;
use super::error::{EndDatePolicy, ParseError};
use super::model::EventCollection;
use super::path::{PathGenerator, SlugPathGenerator};
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Copy, Clone)]
pub struct AggregateOptions {
    /// Also list rows whose `approved` column isn't `yes`.
    pub include_unapproved: bool,
    pub end_date_policy: EndDatePolicy,
}

/// Splits rows into upcoming and past events by month, as seen at `now`.
pub fn aggregate<'a, I>(
    rows: I,
    now: NaiveDateTime,
    include_unapproved: bool,
) -> Result<EventCollection, ParseError>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    aggregate_with(
        rows,
        now,
        &AggregateOptions {
            include_unapproved,
            ..Default::default()
        },
        &SlugPathGenerator::default(),
    )
}

#[tracing::instrument(skip(rows, paths))]
pub fn aggregate_with<'a, I>(
    rows: I,
    now: NaiveDateTime,
    options: &AggregateOptions,
    paths: &dyn PathGenerator,
) -> Result<EventCollection, ParseError>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut collection = EventCollection::new();
    let mut unapproved = 0;
    let mut skipped = 0;

    for row in rows {
        if !options.include_unapproved && !row.is_approved() {
            debug!("Ignoring unapproved event '{}'", row.label);
            unapproved += 1;
            continue;
        }

        match row.to_model(now, options.end_date_policy, paths)? {
            Some(event) => collection.push(event),
            None => {
                warn!("Skipping malformed row: {:?}", row);
                skipped += 1;
            }
        }
    }

    collection.sort_buckets();

    info!(
        "Listed {} events ({} upcoming, {} past), ignored {} unapproved, skipped {} malformed",
        collection.all.len(),
        collection.upcoming_count(),
        collection.past_count(),
        unapproved,
        skipped
    );

    Ok(collection)
}
