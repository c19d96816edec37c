// src/csv.rs
use std::io::{self, Write};

/// Write a single row to any writer.
///
/// Fields are joined as-is: no quoting, no escaping. TBA keys, numbers and
/// the breakdown labels never contain the separator.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        write!(w, "{}", cell)?;
    }
    writeln!(w)
}

/// Write every row; returns how many were written.
pub fn write_rows<W: Write>(mut w: W, rows: &[Vec<String>], sep: char) -> io::Result<usize> {
    for r in rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(rows.len())
}

/// Stringify rows as they would be written.
pub fn rows_to_string(rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_rows(&mut buf, rows, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
