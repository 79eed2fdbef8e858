use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};

use errors::*;

/// Columns which every input file must carry in its header row.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Name", "ABV", "review_overall", "Bitter", "Alcohol"];

/// `BeerRecord` is one row of the input file.
///
/// Every field is kept as the raw string found in the file. Numeric parsing happens in the
/// mappers, which decide per dimension how malformed values are treated. A row that is shorter
/// than the header leaves the trailing fields empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BeerRecord {
    pub name: String,
    pub abv: String,
    pub review_overall: String,
    pub bitter: String,
    pub alcohol: String,
}

/// Positions of the required columns within a row.
struct ColumnIndex {
    name: usize,
    abv: usize,
    review_overall: usize,
    bitter: usize,
    alcohol: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &ByteRecord) -> Result<ColumnIndex> {
        let names: Vec<String> = headers.iter().map(decode_field).collect();
        let position = |column: &str| -> Result<usize> {
            names
                .iter()
                .position(|header| header == column)
                .chain_err(|| format!("Input is missing required column '{}'", column))
        };

        Ok(ColumnIndex {
            name: position(REQUIRED_COLUMNS[0])?,
            abv: position(REQUIRED_COLUMNS[1])?,
            review_overall: position(REQUIRED_COLUMNS[2])?,
            bitter: position(REQUIRED_COLUMNS[3])?,
            alcohol: position(REQUIRED_COLUMNS[4])?,
        })
    }

    fn record(&self, row: &ByteRecord) -> BeerRecord {
        let field = |position: usize| row.get(position).map(decode_field).unwrap_or_default();
        BeerRecord {
            name: field(self.name),
            abv: field(self.abv),
            review_overall: field(self.review_overall),
            bitter: field(self.bitter),
            alcohol: field(self.alcohol),
        }
    }
}

// Invalid UTF-8 is replaced with U+FFFD rather than failing the row.
fn decode_field(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// `read_records` reads every row of a delimited file with a header row.
///
/// Fails if the header does not contain all of `REQUIRED_COLUMNS` or if the source cannot be
/// read. Individual field values are never rejected here, including bytes which are not valid
/// UTF-8.
pub fn read_records<R: Read>(source: R, delimiter: u8) -> Result<Vec<BeerRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(source);

    let columns = {
        let headers = reader
            .byte_headers()
            .chain_err(|| "Error reading header row.")?;
        ColumnIndex::from_headers(headers)?
    };

    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    let mut index = 0;
    while reader
        .read_byte_record(&mut row)
        .chain_err(|| format!("Error reading record {}.", index + 1))?
    {
        records.push(columns.record(&row));
        index += 1;
    }

    if records.is_empty() {
        warn!("Input contained a header row but no records");
    }

    Ok(records)
}

/// `read_records_from_path` opens the file at `path` and reads it with `read_records`.
pub fn read_records_from_path<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Vec<BeerRecord>> {
    let path = path.as_ref();
    let file = File::open(path).chain_err(|| format!("Unable to open input file {:?}", path))?;
    read_records(file, delimiter).chain_err(|| format!("Unable to read input file {:?}", path))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use super::*;

    #[test]
    fn read_valid_records() {
        let input = "Name,ABV,review_overall,Bitter,Alcohol\n\
                     Pliny,8.0,4.5,90,8.0\n\
                     Heady,,bad,x,\n";

        let records = read_records(Cursor::new(input), b',').unwrap();

        assert_eq!(2, records.len());
        assert_eq!(
            BeerRecord {
                name: "Pliny".to_owned(),
                abv: "8.0".to_owned(),
                review_overall: "4.5".to_owned(),
                bitter: "90".to_owned(),
                alcohol: "8.0".to_owned(),
            },
            records[0]
        );
        assert_eq!("", records[1].abv);
        assert_eq!("bad", records[1].review_overall);
    }

    #[test]
    fn read_records_ignores_extra_columns_and_order() {
        let input = "Style,Alcohol,Name,Bitter,review_overall,ABV\n\
                     IPA,6.5,Torpedo,65,4.0,7.2\n";

        let records = read_records(Cursor::new(input), b',').unwrap();

        assert_eq!("Torpedo", records[0].name);
        assert_eq!("7.2", records[0].abv);
        assert_eq!("6.5", records[0].alcohol);
    }

    #[test]
    fn read_records_with_custom_delimiter() {
        let input = "Name;ABV;review_overall;Bitter;Alcohol\nA;0.05;4.0;40;0.05\n";

        let records = read_records(Cursor::new(input), b';').unwrap();

        assert_eq!("0.05", records[0].abv);
    }

    #[test]
    fn read_records_short_row_leaves_fields_empty() {
        let input = "Name,ABV,review_overall,Bitter,Alcohol\nA,0.05\n";

        let records = read_records(Cursor::new(input), b',').unwrap();

        assert_eq!("0.05", records[0].abv);
        assert_eq!("", records[0].alcohol);
    }

    #[test]
    fn read_records_replaces_invalid_utf8_in_used_column() {
        let input: &[u8] = b"Name,ABV,review_overall,Bitter,Alcohol\n\
                             K\xf6lsch,0.05,4.0,40,0.05\n\
                             Pliny,8.0,4.5,90,8.0\n";

        let records = read_records(Cursor::new(input), b',').unwrap();

        assert_eq!(2, records.len());
        assert_eq!("K\u{fffd}lsch", records[0].name);
        assert_eq!("0.05", records[0].abv);
        assert_eq!("Pliny", records[1].name);
    }

    #[test]
    fn read_records_ignores_invalid_utf8_in_unused_column() {
        let input: &[u8] = b"Name,Style,ABV,review_overall,Bitter,Alcohol\n\
                             A,M\xe4rzen,0.05,4.0,40,0.05\n";

        let records = read_records(Cursor::new(input), b',').unwrap();

        assert_eq!(
            BeerRecord {
                name: "A".to_owned(),
                abv: "0.05".to_owned(),
                review_overall: "4.0".to_owned(),
                bitter: "40".to_owned(),
                alcohol: "0.05".to_owned(),
            },
            records[0]
        );
    }

    #[test]
    fn read_records_missing_column() {
        let input = "Name,ABV,review_overall,Bitter\nA,0.05,4.0,40\n";

        let result = read_records(Cursor::new(input), b',');

        assert!(result.is_err());
    }

    #[test]
    fn read_records_from_missing_path() {
        let result = read_records_from_path("/nonexistent/brewstat/beers.csv", b',');

        assert!(result.is_err());
    }
}
