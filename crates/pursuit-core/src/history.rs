//! History Recorder
//!
//! Append-only time series of the mean pursuer resource, one record per tick.

use pursuit_events::HistoryRecord;

#[derive(Debug, Clone, Default)]
pub struct HistoryRecorder {
    records: Vec<HistoryRecord>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tick: u64, mean_resource: f64) {
        self.records.push(HistoryRecord {
            tick,
            mean_resource,
        });
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut history = HistoryRecorder::new();
        assert!(history.records().is_empty());

        history.record(0, 100.0);
        history.record(1, 99.7);

        assert_eq!(history.records().len(), 2);
        assert_eq!(history.records()[0].tick, 0);
        assert_eq!(history.records()[1].mean_resource, 99.7);
    }
}
