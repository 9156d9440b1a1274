use serde::Serialize;

use crate::model::BenchmarkingResult;

/// Arithmetic means of the four numeric fields of a record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub average_token_count: f64,
    pub average_time_to_first_token: f64,
    pub average_time_per_output_token: f64,
    pub average_total_generation_time: f64,
}

/// Running sums; `i128` so no realistic record set can overflow.
#[derive(Default)]
struct Totals {
    count: u64,
    token_count: i128,
    time_to_first_token: i128,
    time_per_output_token: i128,
    total_generation_time: i128,
}

impl Averages {
    /// Returns `None` for an empty input.
    pub fn compute<'a, I>(results: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a BenchmarkingResult>,
    {
        let totals = results.into_iter().fold(Totals::default(), |mut t, r| {
            t.count += 1;
            t.token_count += i128::from(r.token_count);
            t.time_to_first_token += i128::from(r.time_to_first_token);
            t.time_per_output_token += i128::from(r.time_per_output_token);
            t.total_generation_time += i128::from(r.total_generation_time);
            t
        });

        if totals.count == 0 {
            return None;
        }

        let n = totals.count as f64;
        Some(Self {
            average_token_count: totals.token_count as f64 / n,
            average_time_to_first_token: totals.time_to_first_token as f64 / n,
            average_time_per_output_token: totals.time_per_output_token as f64 / n,
            average_total_generation_time: totals.total_generation_time as f64 / n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::Rng;

    fn record(tokens: i64, ttft: i64, tpot: i64, total: i64) -> BenchmarkingResult {
        BenchmarkingResult {
            request_id: "r".into(),
            prompt_text: "p".into(),
            generated_text: "g".into(),
            token_count: tokens,
            time_to_first_token: ttft,
            time_per_output_token: tpot,
            total_generation_time: total,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_input_has_no_average() {
        assert_eq!(Averages::compute(&Vec::<BenchmarkingResult>::new()), None);
    }

    #[test]
    fn three_records_average() {
        let results = vec![
            record(10, 100, 5, 150),
            record(20, 200, 6, 320),
            record(30, 300, 10, 600),
        ];
        let avg = Averages::compute(&results).unwrap();
        assert_eq!(avg.average_token_count, 20.0);
        assert_eq!(avg.average_time_to_first_token, 200.0);
        assert_eq!(avg.average_time_per_output_token, 7.0);
        assert_eq!(avg.average_total_generation_time, 356.6666666666667);
    }

    #[test]
    fn single_record_is_its_own_average() {
        let results = [record(7, 11, 13, 17)];
        let avg = Averages::compute(&results).unwrap();
        assert_eq!(avg.average_token_count, 7.0);
        assert_eq!(avg.average_time_to_first_token, 11.0);
        assert_eq!(avg.average_time_per_output_token, 13.0);
        assert_eq!(avg.average_total_generation_time, 17.0);
    }

    #[test]
    fn huge_values_do_not_overflow() {
        let results = [record(i64::MAX, i64::MIN, 0, 0), record(i64::MAX, i64::MIN, 0, 0)];
        let avg = Averages::compute(&results).unwrap();
        assert_eq!(avg.average_token_count, i64::MAX as f64);
        assert_eq!(avg.average_time_to_first_token, i64::MIN as f64);
    }

    #[test]
    fn negative_values_are_averaged_as_is() {
        let results = [record(-10, -100, 4, 0), record(30, 50, -2, 0)];
        let avg = Averages::compute(&results).unwrap();
        assert_eq!(avg.average_token_count, 10.0);
        assert_eq!(avg.average_time_to_first_token, -25.0);
        assert_eq!(avg.average_time_per_output_token, 1.0);
        assert_eq!(avg.average_total_generation_time, 0.0);
    }

    #[test]
    fn matches_independent_mean_on_random_sets() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let n = rng.gen_range(1..200);
            let results: Vec<_> = (0..n)
                .map(|_| {
                    record(
                        rng.gen_range(-64..4096),
                        rng.gen_range(0..5_000),
                        rng.gen_range(-10..200),
                        rng.gen_range(0..120_000),
                    )
                })
                .collect();

            let mean = |f: fn(&BenchmarkingResult) -> i64| {
                results.iter().map(f).sum::<i64>() as f64 / results.len() as f64
            };

            let avg = Averages::compute(&results).unwrap();
            assert_eq!(avg.average_token_count, mean(|r| r.token_count));
            assert_eq!(avg.average_time_to_first_token, mean(|r| r.time_to_first_token));
            assert_eq!(avg.average_time_per_output_token, mean(|r| r.time_per_output_token));
            assert_eq!(avg.average_total_generation_time, mean(|r| r.total_generation_time));
        }
    }

    #[test]
    fn serializes_with_fixed_keys() {
        let avg = Averages::compute(&[record(1, 2, 3, 4)]).unwrap();
        let json = serde_json::to_value(avg).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            [
                "average_time_per_output_token",
                "average_time_to_first_token",
                "average_token_count",
                "average_total_generation_time",
            ]
        );
    }
}
