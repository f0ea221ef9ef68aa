//! Metrics reported by a populate operation.

use std::time::Duration;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written across all files.
    pub rows_written: u64,
    /// Number of files written.
    pub files_written: u64,
    /// Total size of the written files in bytes.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Account for one finished file.
    pub fn record_file(&mut self, rows: usize, bytes: u64) {
        self.rows_written += rows as u64;
        self.files_written += 1;
        self.bytes_written += bytes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            files_written: 3,
            bytes_written: 100000,
            total_duration: Duration::from_secs(10),
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(metrics.bytes_per_second(), 10000.0);
    }

    #[test]
    fn test_zero_duration() {
        let metrics = PopulateMetrics::default();
        assert_eq!(metrics.rows_per_second(), 0.0);
        assert_eq!(metrics.bytes_per_second(), 0.0);
    }

    #[test]
    fn test_record_file() {
        let mut metrics = PopulateMetrics::default();
        metrics.record_file(10, 512);
        metrics.record_file(0, 40);

        assert_eq!(metrics.rows_written, 10);
        assert_eq!(metrics.files_written, 2);
        assert_eq!(metrics.bytes_written, 552);
    }
}
