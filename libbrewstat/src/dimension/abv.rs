use std::collections::btree_map;
use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::ser::{Serialize, SerializeMap, Serializer};

use combiner::Combine;
use dimension::Metric;
use emitter::EmitIntermediate;
use errors::*;
use field::{parse_metric, MissingFieldPolicy};
use mapper::Map;
use record::BeerRecord;
use reducer::Reduce;

/// `AbvHistogram` counts how often each distinct ABV value occurs.
///
/// Values are compared as floats, without binning or rounding. Iteration and serialisation go in
/// ascending ABV order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AbvHistogram {
    counts: BTreeMap<OrderedFloat<f64>, u64>,
}

impl AbvHistogram {
    pub fn new() -> Self {
        Default::default()
    }

    /// Records one occurrence of `abv`.
    pub fn record(&mut self, abv: f64) {
        self.add(abv, 1);
    }

    /// Adds `count` occurrences of `abv`.
    pub fn add(&mut self, abv: f64, count: u64) {
        *self.counts.entry(OrderedFloat(abv)).or_insert(0) += count;
    }

    /// Sums the counts of `other` into this histogram.
    pub fn merge(&mut self, other: &AbvHistogram) {
        for (abv, count) in &other.counts {
            *self.counts.entry(*abv).or_insert(0) += *count;
        }
    }

    pub fn get(&self, abv: f64) -> u64 {
        self.counts.get(&OrderedFloat(abv)).cloned().unwrap_or(0)
    }

    /// Number of distinct ABV values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> Iter {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

/// Iterator over `(abv, count)` in ascending ABV order.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, OrderedFloat<f64>, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (f64, u64);

    fn next(&mut self) -> Option<(f64, u64)> {
        self.inner.next().map(|(abv, count)| (abv.into_inner(), *count))
    }
}

/// Formats an ABV value as a JSON object key, e.g. `0.05` or `0.0`.
///
/// Very small or large values use Rust's exponent form (`1e-5`, `1e16`), which has no zero
/// padding or `+` sign.
pub fn abv_key(abv: f64) -> String {
    format!("{:?}", abv)
}

impl Serialize for AbvHistogram {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (abv, count) in self.iter() {
            map.serialize_entry(&abv_key(abv), &count)?;
        }
        map.end()
    }
}

/// `AbvMapper` emits `(name, Metric::Beer(abv))` for each record.
///
/// An empty ABV field is handled by `on_missing_field`, which defaults to substituting `0.0`.
#[derive(Clone, Copy, Debug)]
pub struct AbvMapper {
    pub on_missing_field: MissingFieldPolicy,
}

impl AbvMapper {
    pub fn new(on_missing_field: MissingFieldPolicy) -> Self {
        AbvMapper { on_missing_field }
    }
}

impl Default for AbvMapper {
    fn default() -> Self {
        AbvMapper::new(MissingFieldPolicy::DefaultZero)
    }
}

impl Map for AbvMapper {
    type Key = String;
    type Value = Metric;

    fn map<E>(&self, input: &BeerRecord, mut emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>,
    {
        if let Some(abv) = parse_metric(&input.abv, self.on_missing_field) {
            emitter
                .emit(input.name.clone(), Metric::Beer(abv))
                .chain_err(|| "Error emitting ABV pair.")?;
        }
        Ok(())
    }
}

/// `AbvReducer` builds the histogram of one beer. Values which are not `Metric::Beer` are
/// ignored.
pub struct AbvReducer;

impl Reduce<Metric> for AbvReducer {
    type Accumulator = AbvHistogram;
    type Output = AbvHistogram;

    fn fold(&self, mut acc: AbvHistogram, value: Metric) -> AbvHistogram {
        match value {
            Metric::Beer(abv) => acc.record(abv),
            other => debug!("Ignoring {} value in ABV group", other.label()),
        }
        acc
    }

    fn finish(&self, acc: AbvHistogram) -> AbvHistogram {
        acc
    }
}

/// `HistogramCombiner` merges per-beer histograms by summing counts of equal ABV values.
pub struct HistogramCombiner;

impl Combine<AbvHistogram> for HistogramCombiner {
    fn combine(&self, mut left: AbvHistogram, right: &AbvHistogram) -> Result<AbvHistogram> {
        left.merge(right);
        Ok(left)
    }
}

#[cfg(test)]
mod tests {
    use serde_json;
    use super::*;
    use dimension::taste::TastePair;
    use emitter::IntermediateVecEmitter;
    use intermediate::IntermediateInputKV;

    fn record(name: &str, abv: &str) -> BeerRecord {
        BeerRecord {
            name: name.to_owned(),
            abv: abv.to_owned(),
            ..Default::default()
        }
    }

    fn map_one(mapper: &AbvMapper, input: &BeerRecord) -> Vec<(String, Metric)> {
        let mut pairs = Vec::new();
        mapper
            .map(input, IntermediateVecEmitter::new(&mut pairs))
            .unwrap();
        pairs
    }

    fn histogram(entries: &[(f64, u64)]) -> AbvHistogram {
        let mut histogram = AbvHistogram::new();
        for &(abv, count) in entries {
            histogram.add(abv, count);
        }
        histogram
    }

    #[test]
    fn mapper_emits_parsed_abv() {
        let pairs = map_one(&AbvMapper::default(), &record("A", "0.05"));

        assert_eq!(vec![("A".to_owned(), Metric::Beer(0.05))], pairs);
    }

    #[test]
    fn mapper_defaults_empty_abv_to_zero() {
        let pairs = map_one(&AbvMapper::default(), &record("B", ""));

        assert_eq!(vec![("B".to_owned(), Metric::Beer(0.0))], pairs);
    }

    #[test]
    fn mapper_drops_empty_abv_when_configured() {
        let pairs = map_one(&AbvMapper::new(MissingFieldPolicy::Drop), &record("B", ""));

        assert!(pairs.is_empty());
    }

    #[test]
    fn mapper_drops_garbage_abv() {
        let pairs = map_one(&AbvMapper::default(), &record("C", "strong"));

        assert!(pairs.is_empty());
    }

    #[test]
    fn reducer_counts_distinct_values() {
        let mut sink = Vec::new();
        let input = IntermediateInputKV::new(
            "A".to_owned(),
            vec![Metric::Beer(0.05), Metric::Beer(0.06), Metric::Beer(0.05)],
        );

        AbvReducer
            .reduce(input, ::emitter::FinalVecEmitter::new(&mut sink))
            .unwrap();

        assert_eq!(vec![histogram(&[(0.05, 2), (0.06, 1)])], sink);
    }

    #[test]
    fn reducer_ignores_other_metrics() {
        let acc = AbvReducer.fold(AbvHistogram::new(), Metric::Review(4.0));
        let acc = AbvReducer.fold(
            acc,
            Metric::Taste(TastePair {
                alcohol: 0.05,
                bitterness: 40.0,
            }),
        );
        let acc = AbvReducer.fold(acc, Metric::Beer(0.07));

        assert_eq!(histogram(&[(0.07, 1)]), AbvReducer.finish(acc));
    }

    #[test]
    fn combiner_sums_counts_for_equal_values() {
        let combined = HistogramCombiner
            .combine(
                histogram(&[(0.05, 2), (0.06, 1)]),
                &histogram(&[(0.05, 1), (0.0, 3)]),
            )
            .unwrap();

        assert_eq!(3, combined.get(0.05));
        assert_eq!(1, combined.get(0.06));
        assert_eq!(3, combined.get(0.0));
        assert_eq!(7, combined.total());
    }

    #[test]
    fn combiner_is_order_independent() {
        let parts = vec![
            histogram(&[(0.05, 2)]),
            histogram(&[(0.06, 1), (0.05, 1)]),
            histogram(&[(0.0, 4)]),
        ];

        let forward = parts
            .iter()
            .cloned()
            .fold(AbvHistogram::new(), |acc, h| {
                HistogramCombiner.combine(acc, &h).unwrap()
            });
        let backward = parts
            .iter()
            .rev()
            .cloned()
            .fold(AbvHistogram::new(), |acc, h| {
                HistogramCombiner.combine(h, &acc).unwrap()
            });

        assert_eq!(forward, backward);
        assert_eq!(3, forward.get(0.05));
    }

    #[test]
    fn histogram_serialises_with_float_keys() {
        let json = serde_json::to_string(&histogram(&[(0.05, 1), (0.0, 1)])).unwrap();

        assert_eq!(r#"{"0.0":1,"0.05":1}"#, json);
    }

    #[test]
    fn abv_key_formats() {
        assert_eq!("0.05", abv_key(0.05));
        assert_eq!("8.0", abv_key(8.0));
        assert_eq!("1e-5", abv_key(0.00001));
        assert_eq!("1e16", abv_key(1e16));
    }

    #[test]
    fn histogram_iterates_in_ascending_order() {
        let entries: Vec<(f64, u64)> = histogram(&[(0.08, 1), (0.05, 2), (0.065, 3)])
            .iter()
            .collect();

        assert_eq!(vec![(0.05, 2), (0.065, 3), (0.08, 1)], entries);
    }
}
