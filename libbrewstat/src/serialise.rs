use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json;

use errors::*;

/// Layout of a written JSON document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonStyle {
    Compact,
    Pretty,
}

/// `write_json` serialises `value` to `sink`.
///
/// Serialisation is deterministic for every output type in this crate, so writing the same value
/// twice produces identical bytes.
pub fn write_json<W, T>(sink: &mut W, value: &T, style: JsonStyle) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let written = match style {
        JsonStyle::Compact => serde_json::to_writer(&mut *sink, value),
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut *sink, value),
    };
    written.chain_err(|| "Error serialising output to JSON.")?;
    sink.flush().chain_err(|| "Error flushing JSON output.")?;
    Ok(())
}

/// `write_json_file` creates (or truncates) the file at `path` and writes `value` to it.
pub fn write_json_file<P, T>(path: P, value: &T, style: JsonStyle) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let file = File::create(path).chain_err(|| format!("Unable to create output file {:?}", path))?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, value, style)
        .chain_err(|| format!("Unable to write output file {:?}", path))
}
