use crate::config::model::{Config, ConfigError};
use crate::listing::aggregate::AggregateOptions;
use crate::listing::error::EndDatePolicy;
use crate::listing::path::DEFAULT_PREFIX;
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(|name| env::var(name).ok())
}

/// Same as [`load_config`], reading values through `lookup` instead of the environment.
pub fn load_config_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let input_path = lookup("EVENTS_CSV")
        .map(PathBuf::from)
        .ok_or(ConfigError::Missing("EVENTS_CSV"))?;
    let output_path = lookup("EVENTS_JSON").map(PathBuf::from);

    let include_unapproved = load_bool_config(&lookup, "INCLUDE_UNAPPROVED", false)?;
    let end_date_policy = match lookup("END_DATE_POLICY") {
        Some(value) => EndDatePolicy::from_str(&value).map_err(|_| ConfigError::Invalid {
            name: "END_DATE_POLICY",
            expected: "either 'abort' or 'skip'",
        })?,
        None => EndDatePolicy::default(),
    };

    Ok(Config {
        input_path,
        output_path,
        reference_date: load_date_config(&lookup, "REFERENCE_DATE")?,
        csv_delimiter: load_delimiter_config(&lookup, "CSV_DELIMITER")?,
        details_path_prefix: lookup("DETAILS_PATH_PREFIX")
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
        pretty_json: load_bool_config(&lookup, "PRETTY_JSON", true)?,
        aggregate: AggregateOptions {
            include_unapproved,
            end_date_policy,
        },
    })
}

fn load_bool_config<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name,
            expected: "either 'true' or 'false'",
        }),
        None => Ok(default),
    }
}

fn load_date_config<F>(lookup: &F, name: &'static str) -> Result<Option<NaiveDate>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| {
            NaiveDate::parse_from_str(&value, "%Y%m%d").map_err(|_| ConfigError::Invalid {
                name,
                expected: "a date formatted as YYYYMMDD",
            })
        })
        .transpose()
}

fn load_delimiter_config<F>(lookup: &F, name: &'static str) -> Result<u8, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(b','),
        Some(value) => match value.as_bytes() {
            [delimiter] => Ok(*delimiter),
            _ => Err(ConfigError::Invalid {
                name,
                expected: "a single ASCII character",
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        load_config_from(|name| vars.get(name).cloned())
    }

    #[test_log::test]
    fn should_use_defaults_when_only_input_is_set() {
        let config = load(&[("EVENTS_CSV", "events.csv")]).unwrap();

        assert_eq!(config.input_path, PathBuf::from("events.csv"));
        assert_eq!(config.output_path, None);
        assert_eq!(config.reference_date, None);
        assert_eq!(config.csv_delimiter, b',');
        assert_eq!(config.details_path_prefix, "/events");
        assert!(config.pretty_json);
        assert!(!config.aggregate.include_unapproved);
        assert_eq!(config.aggregate.end_date_policy, EndDatePolicy::Abort);
    }

    #[test_log::test]
    fn when_input_is_missing_should_fail() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("EVENTS_CSV"));
    }

    #[test_log::test]
    fn should_read_every_setting() {
        let config = load(&[
            ("EVENTS_CSV", "in.csv"),
            ("EVENTS_JSON", "out.json"),
            ("INCLUDE_UNAPPROVED", "true"),
            ("END_DATE_POLICY", "skip"),
            ("REFERENCE_DATE", "20250110"),
            ("CSV_DELIMITER", ";"),
            ("DETAILS_PATH_PREFIX", "/conf"),
            ("PRETTY_JSON", "false"),
        ])
        .unwrap();

        assert_eq!(config.output_path, Some(PathBuf::from("out.json")));
        assert!(config.aggregate.include_unapproved);
        assert_eq!(config.aggregate.end_date_policy, EndDatePolicy::Skip);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2025, 1, 10));
        assert_eq!(config.csv_delimiter, b';');
        assert_eq!(config.details_path_prefix, "/conf");
        assert!(!config.pretty_json);
    }

    #[test_log::test]
    fn when_values_are_invalid_should_name_the_setting() {
        for (name, value) in [
            ("INCLUDE_UNAPPROVED", "yes"),
            ("END_DATE_POLICY", "ignore"),
            ("REFERENCE_DATE", "2025-01-10"),
            ("CSV_DELIMITER", ";;"),
        ] {
            let err = load(&[("EVENTS_CSV", "in.csv"), (name, value)]).unwrap_err();

            assert!(
                matches!(err, ConfigError::Invalid { name: invalid, .. } if invalid == name),
                "{name}: {err:?}"
            );
        }
    }
}
