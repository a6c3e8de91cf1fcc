//! Text and JSON rendering of catalog data

use std::io::{self, Write};

use serde::Serialize;

use crate::{
    error::AppError,
    models::{
        item::{Catalogued, Item, COLUMNS},
        stats::CatalogStats,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print items as an aligned table, or as a JSON array
pub fn write_items<W: Write>(out: &mut W, items: &[Item], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &items),
        OutputFormat::Text => {
            let rows: Vec<Vec<String>> = items.iter().map(|i| i.display_row().to_vec()).collect();
            let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
            write_table(out, &header, &rows)?;
            writeln!(out, "({} елементів)", items.len())
        }
    }
}

/// Print one item with all of its fields
pub fn write_item<W: Write>(out: &mut W, item: &Item, format: OutputFormat) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, item);
    }

    let row = item.display_row();
    for (column, value) in COLUMNS.iter().zip(row.iter()) {
        writeln!(out, "{:<12}{}", format!("{}:", column), value)?;
    }
    if let Some(rental) = item.rental() {
        writeln!(out, "{:<12}{}", "Дата:", rental.rent_date.format("%Y-%m-%d"))?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &CatalogStats, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, stats),
        OutputFormat::Text => write!(out, "{}", stats),
    }
}

/// Print a confirmation line; JSON mode prints `payload` instead
pub fn write_message<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    message: &str,
    payload: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, payload),
        OutputFormat::Text => writeln!(out, "{}", message),
    }
}

pub fn write_error<W: Write>(out: &mut W, err: &AppError, format: OutputFormat) -> io::Result<()> {
    let body = err.to_response();
    match format {
        OutputFormat::Json => write_json(out, &body),
        OutputFormat::Text => writeln!(out, "Помилка: {}", body.message),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_table<W: Write>(out: &mut W, header: &[String], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "{}", line(header))?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in rows {
        writeln!(out, "{}", line(row.as_slice()))?;
    }
    Ok(())
}
