use chrono::{NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Asia::Kolkata;

use flexi_logger::{detailed_format, FlexiLoggerError, Logger, LoggerHandle};

// Timestamp layout used by the provider, naive and in UTC.
pub const FMP_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a provider timestamp in India Standard Time, same layout.
///
/// Anything that does not parse is handed back unchanged.
pub fn convert_utc_to_ist(utc_dt_str: &str) -> String {
    match NaiveDateTime::parse_from_str(utc_dt_str, FMP_DATE_FORMAT) {
        // chrono folds a :60 leap second into the nanoseconds.
        Ok(naive) if naive.nanosecond() >= 1_000_000_000 => utc_dt_str.to_string(),
        Ok(naive) => Utc
            .from_utc_datetime(&naive)
            .with_timezone(&Kolkata)
            .format(FMP_DATE_FORMAT)
            .to_string(),
        Err(_) => utc_dt_str.to_string(),
    }
}

// Logs go to stderr, stdout carries the bars.
pub fn init_logging(logspec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(logspec)?
        .log_to_stderr()
        .format(detailed_format)
        .start()
}
