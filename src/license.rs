//! License template materialization with placeholder substitution.
//!
//! Copies a template file to a destination in a single pass, replacing the
//! `[[Name]]` and `[[Year]]` placeholders. A single `[` passes through
//! verbatim, so templates may contain ordinary bracketed text. On any
//! formatting error the partially written destination is removed before the
//! error is returned.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{Datelike, Local};
use log::debug;

use crate::error::{Error, Result};

/// Copies `source` to `dest`, substituting placeholders. `name` is written
/// in place of `[[Name]]`; the current four-digit year in place of
/// `[[Year]]`.
///
/// # Errors
/// * `Error::NotFoundError` if the template cannot be read
/// * `Error::PlaceholderError` on a malformed or unknown placeholder; the
///   destination file is removed before returning
pub fn render_license(source: &Path, dest: &Path, name: &str) -> Result<()> {
    let input = fs::read(source).map_err(|_| {
        Error::NotFoundError(format!(
            "Could not read license template `{}`.",
            source.display()
        ))
    })?;
    let year = Local::now().year().to_string();

    debug!("rendering license template {} -> {}", source.display(), dest.display());

    let file = fs::File::create(dest).map_err(Error::IoError)?;
    let mut writer = BufWriter::new(file);
    let result = substitute(&input, name, &year, &mut writer)
        .and_then(|()| writer.flush().map_err(Error::IoError));
    drop(writer);

    if let Err(err) = result {
        // Never leave a partially written artifact behind.
        let _ = fs::remove_file(dest);
        return Err(err);
    }
    Ok(())
}

/// Single-pass placeholder scanner over the template bytes.
pub fn substitute<W: Write>(input: &[u8], name: &str, year: &str, out: &mut W) -> Result<()> {
    let mut i = 0;
    while i < input.len() {
        if input[i] != b'[' {
            out.write_all(&input[i..i + 1])?;
            i += 1;
            continue;
        }

        if input.get(i + 1) != Some(&b'[') {
            // A lone `[` is copied through together with whatever follows.
            out.write_all(&[b'['])?;
            if let Some(&next) = input.get(i + 1) {
                out.write_all(&[next])?;
            }
            i += 2;
            continue;
        }

        i += 2;
        let start = i;
        while i < input.len() && input[i] != b']' && input[i] != b'\n' {
            i += 1;
        }
        if i >= input.len() || input[i] == b'\n' {
            return Err(Error::PlaceholderError(
                "incorrect placeholder formatting: reached end of line or end of file"
                    .to_string(),
            ));
        }
        let placeholder = &input[start..i];
        i += 1;
        if input.get(i) != Some(&b']') {
            return Err(Error::PlaceholderError(
                "placeholder closed with one `]`, expected two".to_string(),
            ));
        }
        i += 1;

        match placeholder {
            b"Name" => out.write_all(name.as_bytes())?,
            b"Year" => out.write_all(year.as_bytes())?,
            other => {
                return Err(Error::PlaceholderError(format!(
                    "unknown placeholder `{}`",
                    String::from_utf8_lossy(other)
                )));
            }
        }
    }
    Ok(())
}
