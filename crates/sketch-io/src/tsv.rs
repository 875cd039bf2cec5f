use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use sketch_model::{Color, Column, PenStyle, Rect, RectTable};
use thiserror::Error;

/// Errors raised while reading or writing the TSV representation.
///
/// Parse errors carry the 1-based physical line number (blank lines count
/// toward numbering even though they are skipped as records). `Display` is
/// the user-facing message.
#[derive(Debug, Error)]
pub enum TsvError {
    #[error("line {line}: expected {expected} tab-separated fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid {field} '{text}': {reason}")]
    Field {
        line: usize,
        /// Header label of the offending column.
        field: &'static str,
        text: String,
        reason: String,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Serialize rows to a TSV stream: one record per line, fields in
/// [`Column::ALL`] order, `\t` separated, `\n` terminated.
///
/// Fails only if the underlying stream cannot be written to.
pub fn write_tsv<W: Write>(rows: &[Rect], writer: &mut W) -> Result<(), TsvError> {
    for rect in rows {
        let fields: Vec<String> = Column::ALL.iter().map(|c| render_field(rect, *c)).collect();
        writeln!(writer, "{}", fields.join("\t"))?;
    }
    Ok(())
}

/// Parse a TSV stream into rows.
///
/// Strict and all-or-nothing: blank and whitespace-only lines are skipped
/// (but still advance the line numbers used in errors); every other line
/// must have exactly [`Column::COUNT`] tab-separated fields, each valid for
/// its column. The first failure aborts the whole parse.
pub fn read_tsv<R: BufRead>(reader: R) -> Result<Vec<Rect>, TsvError> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_record(&line, index + 1)?);
    }
    Ok(rows)
}

/// Parse a TSV stream and atomically replace the table's rows on success.
///
/// The parse target is a temporary buffer; on any error the table is left
/// byte-for-byte untouched. On success the swap is bracketed by the table's
/// reset events.
pub fn load_tsv_into<R: BufRead>(table: &mut RectTable, reader: R) -> Result<(), TsvError> {
    let rows = match read_tsv(reader) {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!(%err, "tsv load rejected");
            return Err(err);
        }
    };
    tracing::debug!(rows = rows.len(), "tsv load committed");
    table.replace_all(rows);
    Ok(())
}

/// Serialize rows to a file, creating or truncating it.
///
/// File-open and write failures surface as [`TsvError::Io`].
pub fn save_tsv_file<P: AsRef<Path>>(rows: &[Rect], path: P) -> Result<(), TsvError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), rows = rows.len(), "saving tsv file");
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_tsv(rows, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read rows from a TSV file.
pub fn load_tsv_file<P: AsRef<Path>>(path: P) -> Result<Vec<Rect>, TsvError> {
    let file = File::open(path.as_ref())?;
    read_tsv(BufReader::new(file))
}

/// Load a TSV file into a table, with the same atomicity as
/// [`load_tsv_into`]. File-open failures surface through the same error
/// channel as parse errors and leave the table untouched.
pub fn load_tsv_file_into<P: AsRef<Path>>(table: &mut RectTable, path: P) -> Result<(), TsvError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading tsv file");
    let file = File::open(path)?;
    load_tsv_into(table, BufReader::new(file))
}

fn render_field(rect: &Rect, column: Column) -> String {
    match column {
        Column::PenColor => rect.pen_color.to_string(),
        Column::PenStyle => rect.pen_style.to_string(),
        Column::PenWidth => rect.pen_width.to_string(),
        Column::Left => rect.left.to_string(),
        Column::Top => rect.top.to_string(),
        Column::Width => rect.width.to_string(),
        Column::Height => rect.height.to_string(),
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<Rect, TsvError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != Column::COUNT {
        return Err(TsvError::FieldCount {
            line: line_no,
            expected: Column::COUNT,
            found: fields.len(),
        });
    }

    let mut rect = Rect::default();
    for (column, raw) in Column::ALL.into_iter().zip(fields) {
        parse_field(&mut rect, column, raw.trim(), line_no)?;
    }
    Ok(rect)
}

fn parse_field(rect: &mut Rect, column: Column, text: &str, line: usize) -> Result<(), TsvError> {
    match column {
        Column::PenColor => {
            rect.pen_color = Color::parse(text).map_err(|e| TsvError::Field {
                line,
                field: column.header(),
                text: text.to_string(),
                reason: e.to_string(),
            })?;
        }
        Column::PenStyle => {
            rect.pen_style = PenStyle::parse(text).ok_or_else(|| TsvError::Field {
                line,
                field: column.header(),
                text: text.to_string(),
                reason: "unrecognized pen style".to_string(),
            })?;
        }
        Column::PenWidth => rect.pen_width = parse_int(text, column, line)?,
        Column::Left => rect.left = parse_int(text, column, line)?,
        Column::Top => rect.top = parse_int(text, column, line)?,
        Column::Width => rect.width = parse_int(text, column, line)?,
        Column::Height => rect.height = parse_int(text, column, line)?,
    }
    Ok(())
}

fn parse_int(text: &str, column: Column, line: usize) -> Result<i32, TsvError> {
    text.parse::<i32>().map_err(|_| TsvError::Field {
        line,
        field: column.header(),
        text: text.to_string(),
        reason: "not an integer".to_string(),
    })
}
