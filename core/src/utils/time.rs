use chrono::{DateTime, Utc};
use log::warn;

/// Convert Windows FILETIME values (100 nanosecond ticks since 1601-01-01) to UTC. Zero means not set
pub(crate) fn filetime_to_datetime(filetime: u64) -> Option<DateTime<Utc>> {
    if filetime == 0 {
        return None;
    }

    let windows_nano = 10000000;
    let seconds_to_unix: i64 = 11644473600;
    let nano_adjust = 100;

    // We should not overflow because of the division.
    let seconds = (filetime / windows_nano) as i64 - seconds_to_unix;
    let nanos = ((filetime % windows_nano) * nano_adjust) as u32;

    let timestamp = DateTime::from_timestamp(seconds, nanos);
    if timestamp.is_none() {
        warn!("[time] FILETIME {filetime} is outside the supported date range");
    }
    timestamp
}

#[cfg(test)]
mod tests {
    use super::filetime_to_datetime;

    #[test]
    fn test_filetime_to_datetime() {
        let test_data = 132244766418940254;
        let result = filetime_to_datetime(test_data).unwrap();
        assert_eq!(result.timestamp(), 1580003041);
        assert_eq!(result.timestamp_subsec_nanos(), 894025400);
        assert_eq!(
            result.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true),
            "2020-01-26T01:44:01.894025400Z"
        );
    }

    #[test]
    fn test_filetime_epoch() {
        let result = filetime_to_datetime(116444736000000000).unwrap();
        assert_eq!(result.timestamp(), 0);
    }

    #[test]
    fn test_filetime_before_unix() {
        let result = filetime_to_datetime(1).unwrap();
        assert_eq!(result.timestamp(), -11644473600);
        assert_eq!(result.timestamp_subsec_nanos(), 100);
    }

    #[test]
    fn test_filetime_zero() {
        assert!(filetime_to_datetime(0).is_none());
    }
}
