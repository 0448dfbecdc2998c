use colored::Colorize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::model::{Book, Locale, Status};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const ID_WIDTH: usize = 4;
const STATUS_WIDTH: usize = 12;
const BLOCK_SEPARATOR: &str = "---------------";

pub(super) fn write_messages<W: Write + ?Sized>(
    out: &mut W,
    messages: &[CmdMessage],
) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Full multi-line blocks, one per book.
pub(super) fn write_book_blocks<W: Write + ?Sized>(
    out: &mut W,
    books: &[Book],
    locale: Locale,
) -> io::Result<()> {
    for book in books {
        writeln!(out, "{}", book.render(locale))?;
        writeln!(out, "{}", BLOCK_SEPARATOR)?;
    }
    Ok(())
}

/// One line per book: id, "title, author (year)", status.
pub(super) fn write_book_table<W: Write + ?Sized>(
    out: &mut W,
    books: &[Book],
    locale: Locale,
) -> io::Result<()> {
    for book in books {
        let idx_str = format!("{:>width$}. ", book.id(), width = ID_WIDTH);
        let description = format!("{}, {} ({})", book.title(), book.author(), book.year());

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + STATUS_WIDTH);
        let description = truncate_to_width(&description, available);
        let padding = available.saturating_sub(description.width());

        let label = format!(
            "{:>width$}",
            book.status().label(locale),
            width = STATUS_WIDTH
        );
        let label = match book.status() {
            Status::InStock => label.green(),
            Status::Issued => label.yellow(),
        };

        writeln!(
            out,
            "{}{}{}{}",
            idx_str.dimmed(),
            description,
            " ".repeat(padding),
            label
        )?;
    }
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
