// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufRead, BufWriter, Write},
    path::Path,
};

use crate::config::consts::DELIM;
use crate::config::options::Destination;
use crate::csv::write_rows;
use crate::error::{Result, TbaError};

/// Ask before clobbering an existing output file.
///
/// Prompts on stderr and reads the answer from stdin. Stdout stays untouched.
pub fn check_destination(dest: &Destination) -> Result<()> {
    let Destination::File(path) = dest else { return Ok(()) };
    if !path.exists() {
        return Ok(());
    }

    let stdin = io::stdin();
    if confirm_overwrite(path, stdin.lock(), io::stderr())? {
        logd!("Export: overwriting {}", path.display());
        Ok(())
    } else {
        Err(TbaError::OverwriteDeclined { path: path.to_path_buf() })
    }
}

/// `<path> already exists. Overwrite? [y/N]` → true only for `y`/`Y`.
pub fn confirm_overwrite<R: BufRead, W: Write>(path: &Path, mut input: R, mut prompt: W) -> io::Result<bool> {
    write!(prompt, "{} already exists. Overwrite? [y/N] ", path.display())?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Write all rows to the destination and flush. File output is created
/// (or truncated) here, after the data is already in hand.
pub fn emit(dest: &Destination, rows: &[Vec<String>]) -> Result<usize> {
    let written = match dest {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let n = write_rows(&mut out, rows, DELIM)?;
            out.flush()?;
            n
        }
        Destination::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
            let n = write_rows(&mut out, rows, DELIM)?;
            out.flush()?;
            n
        }
    };
    logf!("Export: {written} rows → {dest}");
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
