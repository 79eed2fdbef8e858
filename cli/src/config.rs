use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use brewstat::MissingFieldPolicy;
use clap::ArgMatches;

use errors::*;

/// One of the summary statistics the driver can compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionKind {
    Abv,
    Review,
    Taste,
}

pub const ALL_DIMENSIONS: [DimensionKind; 3] =
    [DimensionKind::Abv, DimensionKind::Review, DimensionKind::Taste];

impl DimensionKind {
    pub fn name(&self) -> &'static str {
        match *self {
            DimensionKind::Abv => "abv",
            DimensionKind::Review => "review",
            DimensionKind::Taste => "taste",
        }
    }

    /// Name of the JSON file the dimension is written to.
    pub fn file_name(&self) -> &'static str {
        match *self {
            DimensionKind::Abv => "abv_dimension.json",
            DimensionKind::Review => "review_dimension.json",
            DimensionKind::Taste => "taste_dimension.json",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DimensionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "abv" => Ok(DimensionKind::Abv),
            "review" => Ok(DimensionKind::Review),
            "taste" => Ok(DimensionKind::Taste),
            _ => Err(format!("Unknown dimension '{}'", s).into()),
        }
    }
}

/// `DriverConfig` is everything a run needs, taken from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Dimensions to compute, deduplicated and in abv, review, taste order.
    pub dimensions: Vec<DimensionKind>,
    pub abv_on_missing: MissingFieldPolicy,
    pub review_on_missing: MissingFieldPolicy,
    pub delimiter: u8,
    pub extremes_limit: usize,
    pub show_tables: bool,
}

impl DriverConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<DriverConfig> {
        let input = matches
            .value_of("input")
            .chain_err(|| "Input file must be specified")?;
        let output_dir = matches.value_of("output").unwrap_or(".");

        let requested: Vec<&str> = match matches.values_of("dimension") {
            Some(values) => values.collect(),
            None => vec!["all"],
        };
        let dimensions = parse_dimensions(&requested)?;

        let abv_on_missing = parse_policy(matches.value_of("abv-on-missing"), "default_zero")
            .chain_err(|| "Invalid value for --abv-on-missing")?;
        let review_on_missing = parse_policy(matches.value_of("review-on-missing"), "drop")
            .chain_err(|| "Invalid value for --review-on-missing")?;

        let delimiter = parse_delimiter(matches.value_of("delimiter").unwrap_or(","))?;

        let top_str = matches.value_of("top").unwrap_or("5");
        let extremes_limit: usize = match top_str.parse() {
            Ok(val) => val,
            Err(err) => {
                return Err(
                    format!(
                        "Error occured while converting '{}' to a number: {}",
                        top_str,
                        err
                    ).into(),
                );
            }
        };

        Ok(DriverConfig {
            input: PathBuf::from(input),
            output_dir: PathBuf::from(output_dir),
            dimensions,
            abv_on_missing,
            review_on_missing,
            delimiter,
            extremes_limit,
            show_tables: !matches.is_present("quiet"),
        })
    }

    /// Path of the JSON file for `kind` inside the output directory.
    pub fn output_path(&self, kind: DimensionKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }
}

fn parse_dimensions(requested: &[&str]) -> Result<Vec<DimensionKind>> {
    if requested.iter().any(|name| *name == "all") {
        return Ok(ALL_DIMENSIONS.to_vec());
    }

    let mut selected = Vec::new();
    for name in requested {
        selected.push(name.parse::<DimensionKind>()?);
    }

    Ok(ALL_DIMENSIONS
        .iter()
        .cloned()
        .filter(|kind| selected.contains(kind))
        .collect())
}

fn parse_policy(value: Option<&str>, default: &str) -> Result<MissingFieldPolicy> {
    let policy = value.unwrap_or(default).parse()?;
    Ok(policy)
}

fn parse_delimiter(value: &str) -> Result<u8> {
    if value == "tab" || value == "\\t" {
        return Ok(b'\t');
    }

    let bytes = value.as_bytes();
    if bytes.len() != 1 || !bytes[0].is_ascii() {
        return Err(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            value
        ).into());
    }
    Ok(bytes[0])
}
