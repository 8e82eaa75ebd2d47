use chrono::NaiveDate;

use crate::constants;

pub fn str2date(date_str: &str) -> anyhow::Result<NaiveDate> {
    match NaiveDate::parse_from_str(date_str.trim(), constants::DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(err) => Err(anyhow::anyhow!(
            "invalid date '{}', expected YYYY-mm-dd: {}",
            date_str,
            err
        )),
    }
}
