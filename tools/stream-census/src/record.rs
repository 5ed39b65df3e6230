//! Census record persistence.
//!
//! One CSV line per run, appended to a caller-chosen file:
//!
//! ```text
//! <weekday>,<hour>,<minute>,<stream_count>,<total_viewers>,<gini:.3>
//! ```
//!
//! Weekday counts from Sunday = 0. Time fields use the local clock.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{Datelike, Timelike};

use crate::error::CensusError;
use crate::service::CensusSummary;

/// Unix permission bits for a newly created output file
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o660;

/// One persisted census line
#[derive(Debug, Clone, PartialEq)]
pub struct CensusRecord {
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub stream_count: usize,
    pub total_viewers: u64,
    pub gini: f64,
}

impl CensusRecord {
    /// Stamp a summary with the time it was taken.
    pub fn new<T>(summary: &CensusSummary, taken_at: &T) -> Self
    where
        T: Datelike + Timelike,
    {
        Self {
            weekday: taken_at.weekday().num_days_from_sunday(),
            hour: taken_at.hour(),
            minute: taken_at.minute(),
            stream_count: summary.stream_count,
            total_viewers: summary.total_viewers,
            gini: summary.gini.value(),
        }
    }

    /// Render the record, trailing newline included.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{:.3}\n",
            self.weekday, self.hour, self.minute, self.stream_count, self.total_viewers, self.gini
        )
    }

    /// Append the record to `path`, creating the file if needed.
    pub fn append_to(&self, path: &Path) -> Result<(), CensusError> {
        let io_err = |source| CensusError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(OUTPUT_MODE);
        }

        let mut file = options.open(path).map_err(io_err)?;
        file.write_all(self.to_csv_line().as_bytes()).map_err(io_err)?;
        file.flush().map_err(io_err)?;

        Ok(())
    }
}
