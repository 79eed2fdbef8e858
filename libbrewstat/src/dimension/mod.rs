//! The three summary statistics computed over a beer dataset.
//!
//! Each submodule provides the `Map`, `Reduce` and (where there is one) `Combine`
//! implementations for a single dimension. The ABV and review dimensions group by beer name; the
//! taste dimension folds every record into one global accumulator.

pub mod abv;
pub mod review;
pub mod taste;

use self::taste::TastePair;

/// `Metric` is the tagged value a mapper emits for a record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
    /// An ABV reading.
    Beer(f64),
    /// An overall review score.
    Review(f64),
    /// An alcohol and bitterness reading.
    Taste(TastePair),
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match *self {
            Metric::Beer(_) => "Beer",
            Metric::Review(_) => "Review",
            Metric::Taste(_) => "Taste",
        }
    }
}
