use prettytable::Table;

use brewstat::dimension::abv::abv_key;
use brewstat::{AbvHistogram, RankedReview, ScoreCount, TasteAverages};

pub fn abv_table(histogram: &AbvHistogram) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ABV", "Count"]);
    for (abv, count) in histogram.iter() {
        table.add_row(row![abv_key(abv), count]);
    }
    table
}

pub fn review_table(averages: &[(String, f64)]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Beer", "Average Overall Review"]);
    for &(ref name, average) in averages {
        table.add_row(row![name, average]);
    }
    table
}

pub fn score_count_table(counts: &[ScoreCount]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Review Overall", "Beer Count"]);
    for count in counts {
        let score = match count.score {
            Some(score) => score.to_string(),
            None => "null".to_owned(),
        };
        table.add_row(row![score, count.count]);
    }
    table
}

pub fn ranked_table(ranked: &[RankedReview]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Name", "review_overall"]);
    for review in ranked {
        table.add_row(row![review.name, review.score]);
    }
    table
}

pub fn taste_table(averages: &TasteAverages) -> Table {
    table!(
        ["Average Alcohol", averages.alcohol],
        ["Average Bitterness", averages.bitterness]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(table: &Table, row: usize, column: usize) -> String {
        table
            .get_row(row)
            .and_then(|r| r.get_cell(column))
            .map(|c| c.get_content())
            .unwrap()
    }

    #[test]
    fn abv_table_rows() {
        let mut histogram = AbvHistogram::new();
        histogram.record(0.05);
        histogram.record(0.05);
        histogram.record(0.0);

        let table = abv_table(&histogram);

        assert_eq!(2, table.len());
        assert_eq!("0.0", cell(&table, 0, 0));
        assert_eq!("0.05", cell(&table, 1, 0));
        assert_eq!("2", cell(&table, 1, 1));
    }

    #[test]
    fn score_count_table_shows_null_scores() {
        let counts = vec![
            ScoreCount {
                score: Some(4.5),
                count: 3,
            },
            ScoreCount {
                score: None,
                count: 1,
            },
        ];

        let table = score_count_table(&counts);

        assert_eq!("4.5", cell(&table, 0, 0));
        assert_eq!("null", cell(&table, 1, 0));
        assert_eq!("1", cell(&table, 1, 1));
    }

    #[test]
    fn taste_table_rows() {
        let table = taste_table(&TasteAverages {
            alcohol: 0.055,
            bitterness: 45.0,
        });

        assert_eq!("Average Alcohol", cell(&table, 0, 0));
        assert_eq!("0.055", cell(&table, 0, 1));
        assert_eq!("45", cell(&table, 1, 1));
    }

    #[test]
    fn review_and_ranked_tables_have_one_row_per_beer() {
        let averages = vec![("A".to_owned(), 4.0), ("B".to_owned(), 2.5)];
        let ranked = vec![
            RankedReview {
                name: "A".to_owned(),
                score: 4.0,
            },
        ];

        assert_eq!(2, review_table(&averages).len());
        assert_eq!("A", cell(&ranked_table(&ranked), 0, 0));
    }
}
