use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::media::image_data_url;
use crate::domain::common::AggregateRoot;

crate::string_id!(
    /// Access log entry id
    AccessLogId
);

/// Direction of a recognised vehicle passing a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    In,
    Out,
}

/// Case-insensitive; anything other than `in` counts as an exit so one odd
/// record cannot fail a whole list.
impl<'de> Deserialize<'de> for EntryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EntryType::from_raw(&raw))
    }
}

impl EntryType {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in" => EntryType::In,
            "out" => EntryType::Out,
            other => {
                log::warn!("unknown entry type {:?}, shown as exit", other);
                EntryType::Out
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryType::In => "In",
            EntryType::Out => "Out",
        }
    }
}

/// Number plate recognition event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessLog {
    #[serde(rename = "_id")]
    pub id: AccessLogId,

    #[serde(rename = "cameraId")]
    pub camera_id: String,

    #[serde(rename = "cameraLocation", default)]
    pub camera_location: String,

    #[serde(rename = "entryType")]
    pub entry_type: EntryType,

    #[serde(rename = "numberPlate")]
    pub number_plate: String,

    /// ISO-8601 timestamp as sent by the server
    #[serde(rename = "createdDate")]
    pub created_date: String,

    /// Base64 encoded camera snapshots
    #[serde(rename = "cameraImage", default)]
    pub camera_image: Vec<String>,
}

pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

impl AccessLog {
    pub fn plate_display(&self) -> String {
        self.number_plate.to_uppercase()
    }

    pub fn created_at(&self) -> Option<DateTime<chrono::FixedOffset>> {
        DateTime::parse_from_rfc3339(self.created_date.trim()).ok()
    }

    /// `DD-MM-YYYY HH:MM:SS` in `tz`; the raw value when it does not parse
    pub fn created_display_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self.created_at() {
            Some(dt) => dt.with_timezone(tz).format(DISPLAY_DATE_FORMAT).to_string(),
            None => self.created_date.clone(),
        }
    }

    pub fn created_display(&self) -> String {
        self.created_display_in(&chrono::Local)
    }

    pub fn snapshot_url(&self) -> Option<String> {
        self.camera_image.first().map(|b64| image_data_url(b64))
    }
}

impl AggregateRoot for AccessLog {
    type Id = AccessLogId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.number_plate
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "logs"
    }

    fn element_name() -> &'static str {
        "Log"
    }

    fn list_name() -> &'static str {
        "Logs"
    }
}

/// Entries and exits recorded on one calendar day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSummary {
    pub entries: usize,
    pub exits: usize,
}

impl LogSummary {
    pub fn for_day<Tz: TimeZone>(logs: &[AccessLog], day: NaiveDate, tz: &Tz) -> Self {
        logs.iter()
            .filter(|log| {
                log.created_at()
                    .map(|dt| dt.with_timezone(tz).date_naive() == day)
                    .unwrap_or(false)
            })
            .fold(Self::default(), |mut acc, log| {
                match log.entry_type {
                    EntryType::In => acc.entries += 1,
                    EntryType::Out => acc.exits += 1,
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn log(id: &str, entry: &str, created: &str) -> AccessLog {
        serde_json::from_value(json!({
            "_id": id,
            "cameraId": "c1",
            "cameraLocation": "North gate",
            "entryType": entry,
            "numberPlate": "ka01mx0042",
            "createdDate": created,
            "cameraImage": []
        }))
        .unwrap()
    }

    #[test]
    fn test_display_helpers() {
        let entry = log("l1", "in", "2024-03-05T07:08:09.000Z");
        assert_eq!(entry.plate_display(), "KA01MX0042");
        assert_eq!(entry.entry_type.label(), "In");
        assert_eq!(entry.created_display_in(&Utc), "05-03-2024 07:08:09");
        assert!(entry.snapshot_url().is_none());
    }

    #[test]
    fn test_unparsable_date_is_shown_raw() {
        let entry = log("l1", "out", "yesterday");
        assert_eq!(entry.created_display_in(&Utc), "yesterday");
        assert_eq!(entry.entry_type, EntryType::Out);
    }

    #[test]
    fn test_entry_type_any_case() {
        let logs: Vec<AccessLog> = serde_json::from_value(json!([
            { "_id": "l1", "cameraId": "c1", "entryType": "in", "numberPlate": "a", "createdDate": "" },
            { "_id": "l2", "cameraId": "c1", "entryType": "IN", "numberPlate": "b", "createdDate": "" },
            { "_id": "l3", "cameraId": "c1", "entryType": "Out", "numberPlate": "c", "createdDate": "" },
            { "_id": "l4", "cameraId": "c1", "entryType": "exit", "numberPlate": "d", "createdDate": "" }
        ]))
        .unwrap();

        let types: Vec<EntryType> = logs.iter().map(|l| l.entry_type).collect();
        assert_eq!(types, vec![EntryType::In, EntryType::In, EntryType::Out, EntryType::Out]);
        assert_eq!(serde_json::to_value(EntryType::In).unwrap(), json!("in"));
    }

    #[test]
    fn test_summary_for_day() {
        let logs = vec![
            log("l1", "in", "2024-03-05T07:08:09Z"),
            log("l2", "out", "2024-03-05T18:00:00Z"),
            log("l3", "in", "2024-03-05T23:59:59Z"),
            log("l4", "in", "2024-03-04T12:00:00Z"),
            log("l5", "out", "not a date"),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let summary = LogSummary::for_day(&logs, day, &Utc);
        assert_eq!(summary, LogSummary { entries: 2, exits: 1 });
    }
}
