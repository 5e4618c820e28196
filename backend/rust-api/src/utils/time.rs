use chrono::{DateTime, Local, NaiveDate, Utc};
use mongodb::bson::DateTime as BsonDateTime;

pub fn chrono_to_bson(dt: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(dt.timestamp_millis())
}

/// Server-local calendar date, the fallback when a client does not send
/// its own date. Streak math is calendar-day, not timestamp, based.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
