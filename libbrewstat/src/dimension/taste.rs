use combiner::Combine;
use dimension::Metric;
use emitter::EmitIntermediate;
use errors::*;
use field::parse_strict;
use mapper::Map;
use record::BeerRecord;
use reducer::Reduce;

/// An alcohol and bitterness reading taken from one record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TastePair {
    pub alcohol: f64,
    pub bitterness: f64,
}

/// `TasteMapper` emits `((), Metric::Taste(pair))` for each record whose `Alcohol` and `Bitter`
/// fields are both sign-less decimal strings. If either field fails the check the record is
/// skipped entirely.
pub struct TasteMapper;

impl Map for TasteMapper {
    type Key = ();
    type Value = Metric;

    fn map<E>(&self, input: &BeerRecord, mut emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>,
    {
        let alcohol = parse_strict(&input.alcohol);
        let bitterness = parse_strict(&input.bitter);
        if let (Some(alcohol), Some(bitterness)) = (alcohol, bitterness) {
            emitter
                .emit((), Metric::Taste(TastePair { alcohol, bitterness }))
                .chain_err(|| "Error emitting taste pair.")?;
        }
        Ok(())
    }
}

/// Running totals of every taste pair seen so far.
///
/// A pair is always added as a whole, so the three counters never disagree about how many pairs
/// they have seen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TasteTotals {
    pub alcohol_total: f64,
    pub bitterness_total: f64,
    pub count: u64,
}

impl TasteTotals {
    pub fn add(&mut self, pair: TastePair) {
        self.alcohol_total += pair.alcohol;
        self.bitterness_total += pair.bitterness;
        self.count += 1;
    }

    pub fn merge(&mut self, other: &TasteTotals) {
        self.alcohol_total += other.alcohol_total;
        self.bitterness_total += other.bitterness_total;
        self.count += other.count;
    }

    /// Returns `(average alcohol, average bitterness)`, or `(0, 0)` if no pair was added.
    pub fn get_average(&self) -> (f64, f64) {
        if self.count == 0 {
            return (0.0, 0.0);
        }
        let count = self.count as f64;
        (self.alcohol_total / count, self.bitterness_total / count)
    }
}

/// `TasteReducer` folds taste pairs into `TasteTotals`. Values which are not `Metric::Taste`
/// are ignored.
pub struct TasteReducer;

impl Reduce<Metric> for TasteReducer {
    type Accumulator = TasteTotals;
    type Output = TasteTotals;

    fn fold(&self, mut acc: TasteTotals, value: Metric) -> TasteTotals {
        match value {
            Metric::Taste(pair) => acc.add(pair),
            other => debug!("Ignoring {} value in taste group", other.label()),
        }
        acc
    }

    fn finish(&self, acc: TasteTotals) -> TasteTotals {
        acc
    }
}

/// `TotalsCombiner` merges partial `TasteTotals`, e.g. from separately reduced chunks of input.
pub struct TotalsCombiner;

impl Combine<TasteTotals> for TotalsCombiner {
    fn combine(&self, mut left: TasteTotals, right: &TasteTotals) -> Result<TasteTotals> {
        left.merge(right);
        Ok(left)
    }
}

/// The final output document of the taste dimension.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TasteAverages {
    #[serde(rename = "Average Alcohol")]
    pub alcohol: f64,
    #[serde(rename = "Average Bitterness")]
    pub bitterness: f64,
}

impl From<TasteTotals> for TasteAverages {
    fn from(totals: TasteTotals) -> Self {
        let (alcohol, bitterness) = totals.get_average();
        TasteAverages {
            alcohol,
            bitterness,
        }
    }
}
