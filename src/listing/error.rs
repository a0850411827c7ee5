use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid end date '{value}' on event '{label}': {source}")]
    InvalidEndDate {
        label: String,
        value: String,
        #[source]
        source: DateError,
    },
}

#[derive(Error, Debug)]
pub enum DateError {
    #[error("expected exactly 8 digits (YYYYMMDD)")]
    NotEightDigits,

    #[error(transparent)]
    Invalid(#[from] chrono::ParseError),
}

/// What to do with a row whose start date parses but whose end date doesn't.
///
/// `Abort` fails the whole batch, which is how the listing has always behaved.
/// `Skip` drops the row the same way an unparsable start date does.
#[derive(
    strum::EnumString, strum::IntoStaticStr, Debug, Default, Copy, Clone, PartialEq, Eq,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EndDatePolicy {
    #[default]
    Abort,
    Skip,
}
