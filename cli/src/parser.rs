use clap::{App, Arg, ArgMatches};

pub fn build_app<'a, 'b>() -> App<'a, 'b> {
    App::new("brewstat")
        .version(crate_version!())
        .author("Brewstat Authors <brewstat@cpssd.net>")
        .about("Compute ABV, review and taste statistics over a beer dataset")
        .arg(
            Arg::with_name("input")
                .long("input")
                .short("i")
                .help("Delimited input file with a header row")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .help("Directory the JSON result of each dimension is written to")
                .takes_value(true)
                .default_value("."),
        )
        .arg(
            Arg::with_name("dimension")
                .long("dimension")
                .short("d")
                .help("Dimension to compute. May be given more than once")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .possible_values(&["abv", "review", "taste", "all"])
                .default_value("all"),
        )
        .arg(
            Arg::with_name("abv-on-missing")
                .long("abv-on-missing")
                .help("What to do with a record whose ABV field is empty")
                .takes_value(true)
                .possible_values(&["drop", "default_zero", "default-zero"])
                .default_value("default_zero"),
        )
        .arg(
            Arg::with_name("review-on-missing")
                .long("review-on-missing")
                .help("What to do with a record whose review_overall field is empty")
                .takes_value(true)
                .possible_values(&["drop", "default_zero", "default-zero"])
                .default_value("drop"),
        )
        .arg(
            Arg::with_name("delimiter")
                .long("delimiter")
                .help("Field delimiter of the input file, a single character or 'tab'")
                .takes_value(true)
                .default_value(","),
        )
        .arg(
            Arg::with_name("top")
                .long("top")
                .help("Number of highest and lowest reviewed beers to show")
                .takes_value(true)
                .default_value("5"),
        )
        .arg(
            Arg::with_name("quiet")
                .long("quiet")
                .short("q")
                .help("Do not print result tables")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .help("Log at debug level unless RUST_LOG is set")
                .takes_value(false),
        )
}

pub fn parse_command_line<'a>() -> ArgMatches<'a> {
    build_app().get_matches()
}
