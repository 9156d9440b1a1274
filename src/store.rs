use chrono::{DateTime, Utc};

use crate::model::BenchmarkingResult;

/// The working set of records, in ingestion order.
///
/// Built once at startup and only read afterwards, so it is shared across
/// handlers behind a plain `Arc` with no lock.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: Vec<BenchmarkingResult>,
}

impl ResultStore {
    pub fn new(results: Vec<BenchmarkingResult>) -> Self {
        Self { results }
    }

    pub fn all(&self) -> &[BenchmarkingResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Records with `start <= timestamp <= end`. An inverted window is empty.
    pub fn in_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Iterator<Item = &BenchmarkingResult> {
        self.results
            .iter()
            .filter(move |r| start <= r.timestamp && r.timestamp <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, hour: u32) -> BenchmarkingResult {
        BenchmarkingResult {
            request_id: id.into(),
            prompt_text: String::new(),
            generated_text: String::new(),
            token_count: 1,
            time_to_first_token: 1,
            time_per_output_token: 1,
            total_generation_time: 1,
            timestamp: at(hour),
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn ids<'a>(it: impl Iterator<Item = &'a BenchmarkingResult>) -> Vec<&'a str> {
        it.map(|r| r.request_id.as_str()).collect()
    }

    #[test]
    fn window_is_inclusive_at_both_bounds() {
        let store = ResultStore::new(vec![
            record("a", 9),
            record("b", 10),
            record("c", 11),
            record("d", 12),
            record("e", 13),
        ]);
        assert_eq!(ids(store.in_window(at(10), at(12))), ["b", "c", "d"]);
        assert_eq!(ids(store.in_window(at(11), at(11))), ["c"]);
    }

    #[test]
    fn window_keeps_ingestion_order() {
        let store = ResultStore::new(vec![record("late", 12), record("early", 8), record("mid", 10)]);
        assert_eq!(ids(store.in_window(at(0), at(23))), ["late", "early", "mid"]);
    }

    #[test]
    fn inverted_or_disjoint_window_is_empty() {
        let store = ResultStore::new(vec![record("a", 10)]);
        assert_eq!(store.in_window(at(12), at(8)).count(), 0);
        assert_eq!(store.in_window(at(14), at(16)).count(), 0);
    }

    #[test]
    fn default_store_is_empty() {
        let store = ResultStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all().is_empty());
    }
}
