use std::cmp::Ordering;
use std::collections::HashMap;

use ordered_float::OrderedFloat;

use dimension::Metric;
use emitter::EmitIntermediate;
use errors::*;
use field::{parse_metric, MissingFieldPolicy};
use mapper::Map;
use record::BeerRecord;
use reducer::Reduce;

/// `ReviewMapper` emits `(name, Metric::Review(score))` for each record with a numeric
/// `review_overall`.
///
/// An empty score is handled by `on_missing_field`, which defaults to dropping the record.
#[derive(Clone, Copy, Debug)]
pub struct ReviewMapper {
    pub on_missing_field: MissingFieldPolicy,
}

impl ReviewMapper {
    pub fn new(on_missing_field: MissingFieldPolicy) -> Self {
        ReviewMapper { on_missing_field }
    }
}

impl Default for ReviewMapper {
    fn default() -> Self {
        ReviewMapper::new(MissingFieldPolicy::Drop)
    }
}

impl Map for ReviewMapper {
    type Key = String;
    type Value = Metric;

    fn map<E>(&self, input: &BeerRecord, mut emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>,
    {
        if let Some(score) = parse_metric(&input.review_overall, self.on_missing_field) {
            emitter
                .emit(input.name.clone(), Metric::Review(score))
                .chain_err(|| "Error emitting review pair.")?;
        }
        Ok(())
    }
}

/// Running sum and count of the review scores of one beer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReviewTotals {
    pub total: f64,
    pub count: u64,
}

impl ReviewTotals {
    pub fn add(&mut self, score: f64) {
        self.total += score;
        self.count += 1;
    }

    /// The mean score, or `0.0` if no score was added.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total / self.count as f64
    }
}

/// `ReviewReducer` averages the review scores of one beer. Values which are not
/// `Metric::Review` are ignored.
pub struct ReviewReducer;

impl Reduce<Metric> for ReviewReducer {
    type Accumulator = ReviewTotals;
    type Output = f64;

    fn fold(&self, mut acc: ReviewTotals, value: Metric) -> ReviewTotals {
        match value {
            Metric::Review(score) => acc.add(score),
            other => debug!("Ignoring {} value in review group", other.label()),
        }
        acc
    }

    fn finish(&self, acc: ReviewTotals) -> f64 {
        acc.average()
    }
}

/// Number of records sharing one `review_overall` value. `score` is `None` for records whose
/// score is empty or not numeric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreCount {
    pub score: Option<f64>,
    pub count: u64,
}

/// `count_by_score` counts the records of each distinct review score.
///
/// Records without a numeric score are counted together under `None`. The result is ordered by
/// count, highest first; equal counts keep the order in which the score was first seen.
pub fn count_by_score(records: &[BeerRecord]) -> Vec<ScoreCount> {
    let mut index: HashMap<Option<OrderedFloat<f64>>, usize> = HashMap::new();
    let mut counts: Vec<ScoreCount> = Vec::new();

    for record in records {
        let score = parse_metric(&record.review_overall, MissingFieldPolicy::Drop);
        let key = score.map(OrderedFloat);
        if let Some(&position) = index.get(&key) {
            counts[position].count += 1;
            continue;
        }
        index.insert(key, counts.len());
        counts.push(ScoreCount { score, count: 1 });
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// One beer in a ranking of review scores.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedReview {
    pub name: String,
    pub score: f64,
}

/// The records with the highest and the lowest review scores.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReviewExtremes {
    pub highest: Vec<RankedReview>,
    pub lowest: Vec<RankedReview>,
}

/// `review_extremes` picks the `limit` highest and `limit` lowest scored records.
///
/// Records without a numeric score are left out of both rankings, so unlike a SQL
/// `ORDER BY ... ASC` with nulls first they never show up among the lowest. Records with equal
/// scores keep their input order.
pub fn review_extremes(records: &[BeerRecord], limit: usize) -> ReviewExtremes {
    let mut ranked: Vec<RankedReview> = records
        .iter()
        .filter_map(|record| {
            parse_metric(&record.review_overall, MissingFieldPolicy::Drop).map(|score| {
                RankedReview {
                    name: record.name.clone(),
                    score,
                }
            })
        })
        .collect();

    ranked.sort_by(|a, b| compare_scores(b.score, a.score));
    let highest = ranked.iter().take(limit).cloned().collect();

    ranked.sort_by(|a, b| compare_scores(a.score, b.score));
    let lowest = ranked.into_iter().take(limit).collect();

    ReviewExtremes { highest, lowest }
}

fn compare_scores(a: f64, b: f64) -> Ordering {
    OrderedFloat(a).cmp(&OrderedFloat(b))
}
