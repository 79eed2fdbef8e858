use std::fs;

use brewstat::{count_by_score, read_records_from_path, review_extremes, run_dimension,
               write_json_file, AbvHistogram, AbvMapper, AbvReducer, BeerRecord, DimensionBuilder,
               GlobalGrouper, HashGrouper, HistogramCombiner, JsonStyle, MissingFieldPolicy,
               ReviewMapper, ReviewReducer, TasteAverages, TasteMapper, TasteReducer,
               TotalsCombiner};
use chrono::Utc;

use config::{DimensionKind, DriverConfig};
use display;
use errors::*;

/// `run` reads the input once and computes every requested dimension over it, in order.
///
/// The first dimension to fail aborts the run. Results of dimensions that already finished stay
/// on disk.
pub fn run(config: &DriverConfig) -> Result<()> {
    let records = read_records_from_path(&config.input, config.delimiter)
        .chain_err(|| "Error reading input records.")?;
    info!("Read {} records from {:?}", records.len(), config.input);

    fs::create_dir_all(&config.output_dir).chain_err(|| {
        format!("Unable to create output directory {:?}", config.output_dir)
    })?;

    for kind in &config.dimensions {
        let started = Utc::now();
        let result = match *kind {
            DimensionKind::Abv => run_abv(&records, config),
            DimensionKind::Review => run_review(&records, config),
            DimensionKind::Taste => run_taste(&records, config),
        };
        result.chain_err(|| format!("Error computing {} dimension.", kind))?;

        let elapsed = Utc::now().signed_duration_since(started);
        info!(
            "Dimension {} written to {:?} in {}ms",
            kind,
            config.output_path(*kind),
            elapsed.num_milliseconds()
        );
    }

    Ok(())
}

/// Computes the global ABV histogram.
pub fn compute_abv(
    records: &[BeerRecord],
    on_missing_field: MissingFieldPolicy,
) -> Result<AbvHistogram> {
    let mapper = AbvMapper::new(on_missing_field);
    let dimension = DimensionBuilder::new()
        .name("abv")
        .mapper(&mapper)
        .grouper(&HashGrouper)
        .reducer(&AbvReducer)
        .combiner(&HistogramCombiner)
        .build()?;

    let output = run_dimension(records, &dimension)?;
    debug!("ABV histograms reduced for {} beers", output.groups.len());

    Ok(output.combined.unwrap_or_default())
}

/// Computes the average review score of every beer, in grouper order.
pub fn compute_review(
    records: &[BeerRecord],
    on_missing_field: MissingFieldPolicy,
) -> Result<Vec<(String, f64)>> {
    let mapper = ReviewMapper::new(on_missing_field);
    let dimension = DimensionBuilder::new_no_combiner()
        .name("review")
        .mapper(&mapper)
        .grouper(&HashGrouper)
        .reducer(&ReviewReducer)
        .build()?;

    let output = run_dimension(records, &dimension)?;
    Ok(output.groups)
}

/// Computes the global alcohol and bitterness averages.
pub fn compute_taste(records: &[BeerRecord]) -> Result<TasteAverages> {
    let dimension = DimensionBuilder::new()
        .name("taste")
        .mapper(&TasteMapper)
        .grouper(&GlobalGrouper)
        .reducer(&TasteReducer)
        .combiner(&TotalsCombiner)
        .build()?;

    let output = run_dimension(records, &dimension)?;
    let totals = output.combined.unwrap_or_default();
    debug!("Taste averages taken over {} records", totals.count);

    Ok(TasteAverages::from(totals))
}

fn run_abv(records: &[BeerRecord], config: &DriverConfig) -> Result<()> {
    let histogram = compute_abv(records, config.abv_on_missing)?;

    if config.show_tables {
        println!("Beer Dimension:");
        print!("{}", display::abv_table(&histogram));
    }

    write_json_file(
        config.output_path(DimensionKind::Abv),
        &histogram,
        JsonStyle::Pretty,
    )?;
    Ok(())
}

fn run_review(records: &[BeerRecord], config: &DriverConfig) -> Result<()> {
    let averages = compute_review(records, config.review_on_missing)?;

    if config.show_tables {
        println!("Review Dimension:");
        print!("{}", display::review_table(&averages));

        println!("\nBeer Count by Review Overall:");
        print!("{}", display::score_count_table(&count_by_score(records)));

        let extremes = review_extremes(records, config.extremes_limit);
        println!("\nTop {} Beers with Highest Reviews:", config.extremes_limit);
        print!("{}", display::ranked_table(&extremes.highest));
        println!("\nTop {} Beers with Lowest Reviews:", config.extremes_limit);
        print!("{}", display::ranked_table(&extremes.lowest));
    }

    write_json_file(
        config.output_path(DimensionKind::Review),
        &averages,
        JsonStyle::Pretty,
    )?;
    Ok(())
}

fn run_taste(records: &[BeerRecord], config: &DriverConfig) -> Result<()> {
    let averages = compute_taste(records)?;

    if config.show_tables {
        print!("{}", display::taste_table(&averages));
    }

    write_json_file(
        config.output_path(DimensionKind::Taste),
        &averages,
        JsonStyle::Compact,
    )?;
    Ok(())
}
