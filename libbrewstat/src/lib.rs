#![recursion_limit = "1024"]

extern crate csv;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate ordered_float;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

pub mod errors {
    error_chain! {
        foreign_links {
            Csv(::csv::Error);
            Io(::std::io::Error);
            Json(::serde_json::Error);
        }
    }
}

pub mod combiner;
pub mod dimension;
pub mod emitter;
pub mod field;
pub mod grouper;
pub mod intermediate;
pub mod mapper;
pub mod record;
pub mod reducer;
pub mod registry;
pub mod runner;
pub mod serialise;

pub use combiner::{Combine, NullCombiner};
pub use dimension::abv::{AbvHistogram, AbvMapper, AbvReducer, HistogramCombiner};
pub use dimension::review::{count_by_score, review_extremes, RankedReview, ReviewExtremes,
                            ReviewMapper, ReviewReducer, ReviewTotals, ScoreCount};
pub use dimension::taste::{TasteAverages, TasteMapper, TastePair, TasteReducer, TasteTotals,
                           TotalsCombiner};
pub use dimension::Metric;
pub use emitter::{EmitFinal, EmitIntermediate, FinalVecEmitter, IntermediateVecEmitter};
pub use errors::*;
pub use field::MissingFieldPolicy;
pub use grouper::{GlobalGrouper, Group, HashGrouper};
pub use intermediate::IntermediateInputKV;
pub use mapper::Map;
pub use record::{read_records, read_records_from_path, BeerRecord, REQUIRED_COLUMNS};
pub use reducer::Reduce;
pub use registry::{Dimension, DimensionBuilder};
pub use runner::{run_dimension, DimensionOutput};
pub use serialise::{write_json, write_json_file, JsonStyle};
