use crate::listing::model::EventCollection;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

pub fn write_collection<W: Write>(
    writer: W,
    collection: &EventCollection,
    pretty: bool,
) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, collection)
    } else {
        serde_json::to_writer(writer, collection)
    }
}

#[instrument(skip(collection))]
pub fn write_collection_to_path(
    path: &Path,
    collection: &EventCollection,
    pretty: bool,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    write_collection(&mut writer, collection, pretty)?;
    writer.flush()?;

    info!("Wrote {} events", collection.all.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::aggregate::aggregate;
    use crate::listing::dto::RawRecord;
    use chrono::NaiveDate;
    use serde_json::Value;

    #[test_log::test]
    fn should_write_buckets_for_rendering() {
        let rows = vec![RawRecord {
            label: "RustFest".to_string(),
            datestart: "20250315".to_string(),
            dateend: "20250316".to_string(),
            approved: "yes".to_string(),
            entrance_fee: "0".to_string(),
            event_type: "Regional Day".to_string(),
            ..Default::default()
        }];
        let now = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let collection = aggregate(&rows, now, false).unwrap();
        let mut buffer = Vec::new();

        write_collection(&mut buffer, &collection, false).unwrap();

        let json: Value = serde_json::from_slice(&buffer).unwrap();
        let event = &json["upcoming"]["03"]["events"][0];
        assert_eq!(json["upcoming"]["03"]["label"], "March");
        assert_eq!(event["label"], "RustFest");
        assert_eq!(event["type"], "Regional Day");
        assert_eq!(event["classes"], "event--highlighted");
        assert_eq!(event["fee"], Value::Null);
        assert_eq!(event["upcoming"], true);
        assert_eq!(json["prev"]["03"]["events"], Value::Array(vec![]));
        assert_eq!(json["all"].as_array().unwrap().len(), 1);
    }
}
