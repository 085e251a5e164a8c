use chrono::{NaiveDate, TimeZone};
use contracts::domain::a006_vehicle::Vehicle;
use contracts::domain::a007_camera::Camera;
use contracts::domain::a008_access_log::{AccessLog, LogSummary};
use contracts::domain::common::AggregateRoot;

use crate::shared::api;

/// Figures shown on the overview tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewStats {
    pub vehicles: usize,
    pub cameras: usize,
    pub today: LogSummary,
}

impl OverviewStats {
    pub fn build<Tz: TimeZone>(
        vehicles: &[Vehicle],
        cameras: &[Camera],
        logs: &[AccessLog],
        day: NaiveDate,
        tz: &Tz,
    ) -> Self {
        Self {
            vehicles: vehicles.len(),
            cameras: cameras.len(),
            today: LogSummary::for_day(logs, day, tz),
        }
    }
}

/// Fetch vehicles, cameras and logs in parallel and summarise them for `day`
pub async fn get_overview<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Result<OverviewStats, String> {
    let vehicle_path = Vehicle::collection_path();
    let camera_path = Camera::collection_path();
    let accesslog_path = AccessLog::collection_path();
    let (vehicles, cameras, logs) = futures::try_join!(
        api::get_list::<Vehicle>(&vehicle_path),
        api::get_list::<Camera>(&camera_path),
        api::get_list::<AccessLog>(&accesslog_path),
    )?;

    Ok(OverviewStats::build(&vehicles, &cameras, &logs, day, tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn log(entry: &str, created: &str) -> AccessLog {
        serde_json::from_value(serde_json::json!({
            "_id": created,
            "cameraId": "c1",
            "entryType": entry,
            "numberPlate": "mh12ab1234",
            "createdDate": created,
        }))
        .unwrap()
    }

    #[test]
    fn test_build_counts_today_only() {
        let logs = vec![
            log("in", "2024-05-01T08:00:00Z"),
            log("out", "2024-05-01T17:30:00Z"),
            log("in", "2024-05-01T19:00:00Z"),
            log("in", "2024-04-30T23:00:00Z"),
        ];
        let utc = FixedOffset::east_opt(0).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let stats = OverviewStats::build(&[], &[], &logs, day, &utc);

        assert_eq!(stats.vehicles, 0);
        assert_eq!(stats.cameras, 0);
        assert_eq!(stats.today, LogSummary { entries: 2, exits: 1 });
    }
}
