use chrono::NaiveDate;
use clap::Args;

use crate::utils::str2x;

#[derive(Debug, Args, Default)]
pub struct CmdDateRange {
    #[arg(long, value_parser = str2x::str2date)]
    /// first day of the usage window. format: YYYY-mm-dd
    pub start_date: Option<NaiveDate>,

    #[arg(long, value_parser = str2x::str2date)]
    /// last day of the usage window (inclusive). format: YYYY-mm-dd
    pub end_date: Option<NaiveDate>,
}

impl CmdDateRange {
    pub fn is_unset(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}
