use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// The current time on the restaurant's wall clock.
pub fn local_now(timezone: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&timezone)
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse().map_err(|_| Error::Timezone(name.to_string()))
}
