use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::error::{Result, ShelfError};
use bookshelf::model::{Book, Status};
use colored::Colorize;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

const MIN_ID_WIDTH: usize = 4;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, err: &ShelfError) -> Result<()> {
    writeln!(out, "{}", err.to_string().red())?;
    Ok(())
}

/// One aligned row per book: id, title, author, year, status. Each column is
/// as wide as its widest value in `books`, so nothing is cut off.
pub(super) fn print_books<W: Write>(out: &mut W, books: &[Book]) -> Result<()> {
    let rows: Vec<[String; 3]> = books
        .iter()
        .map(|b| [b.title.clone(), b.author.clone(), b.year.to_string()])
        .collect();
    let id_width = books
        .iter()
        .map(|b| b.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max(MIN_ID_WIDTH);
    let widths = column_widths(&rows);

    for (book, row) in books.iter().zip(&rows) {
        let id = format!("{:>width$}.", book.id, width = id_width);
        let status = match book.status {
            Status::Available => book.status.as_str().green(),
            Status::CheckedOut => book.status.as_str().yellow(),
        };
        writeln!(
            out,
            "{} {} {} {} {}",
            id.dimmed(),
            pad_to_width(&row[0], widths[0]),
            pad_to_width(&row[1], widths[1]),
            pad_to_width(&row[2], widths[2]),
            status
        )?;
    }
    Ok(())
}

fn column_widths(rows: &[[String; 3]]) -> [usize; 3] {
    let mut widths = [0; 3];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

/// Pad with spaces to `width` display columns; wider input is left whole.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut padded = s.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(s.width())));
    padded
}
