/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All audit timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date of a movement or loan event.
pub type EventDate = chrono::NaiveDate;

/// Wall-clock time of a movement or loan event.
pub type EventTime = chrono::NaiveTime;
