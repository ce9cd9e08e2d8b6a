use std::io::{Error, Write};

/// Writes an `action, item` script, one row per pair.
pub fn write_script<W: Write>(sink: W, rows: &[(&str, &str)]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(sink);

    wtr.write_record(["action", "item"])?;
    for (action, item) in rows {
        wtr.write_record([action, item])?;
    }

    wtr.flush()?;
    Ok(())
}
