//! Terminal rendering of the board.
//!
//! `TerminalView` is the table, selector and alert collaborator for the board.
//! Alerts are written as soon as they are raised; rows and options are kept
//! (each redraw replaces the previous one) and written once at the end.

use std::io::{self, Write};

use jobboard_listings::{
    Alert, DisplayRow, FilterOptions, Notifier, OptionList, OptionsRenderer, TableRenderer,
};
use serde::Serialize;

use crate::config::OutputFormat;

pub struct TerminalView<E: Write> {
    format: OutputFormat,
    show_options: bool,
    alerts: E,
    options: Option<FilterOptions>,
    rows: Vec<DisplayRow>,
    drawn: bool,
}

impl<E: Write> TerminalView<E> {
    pub fn new(format: OutputFormat, show_options: bool, alerts: E) -> Self {
        Self {
            format,
            show_options,
            alerts,
            options: None,
            rows: Vec::new(),
            drawn: false,
        }
    }

    /// Write the last drawn table. Nothing is written if no load was applied.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.drawn {
            return Ok(());
        }

        let options = self.options.as_ref().filter(|_| self.show_options);
        match self.format {
            OutputFormat::Table => write_table(out, options, &self.rows),
            OutputFormat::Json => write_json(out, options, &self.rows),
            OutputFormat::Html => write_html(out, options, &self.rows),
        }
    }
}

impl<E: Write> Notifier for TerminalView<E> {
    fn alert(&mut self, alert: Alert) {
        let _ = writeln!(self.alerts, "{alert}");
    }
}

impl<E: Write> OptionsRenderer for TerminalView<E> {
    fn replace_options(&mut self, options: &FilterOptions) {
        self.options = Some(options.clone());
    }
}

impl<E: Write> TableRenderer for TerminalView<E> {
    fn replace_rows(&mut self, rows: &[DisplayRow]) {
        self.rows = rows.to_vec();
        self.drawn = true;
    }
}

fn write_table<W: Write>(
    out: &mut W,
    options: Option<&FilterOptions>,
    rows: &[DisplayRow],
) -> io::Result<()> {
    if let Some(options) = options {
        for list in options.iter() {
            writeln!(out, "{}: {}", list.category.label(), list.choices.join(", "))?;
        }
        writeln!(out)?;
    }

    let mut widths = DisplayRow::HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", table_line(&DisplayRow::HEADERS, &widths))?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in rows {
        writeln!(out, "{}", table_line(&row.cells(), &widths))?;
    }
    Ok(())
}

fn table_line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    options: [&'a OptionList; 3],
    rows: &'a [DisplayRow],
}

fn write_json<W: Write>(
    out: &mut W,
    options: Option<&FilterOptions>,
    rows: &[DisplayRow],
) -> io::Result<()> {
    let body = match options {
        Some(options) => serde_json::to_string_pretty(&JsonReport {
            options: [&options.level, &options.job_type, &options.skill],
            rows,
        }),
        None => serde_json::to_string_pretty(rows),
    }
    .map_err(io::Error::other)?;
    writeln!(out, "{body}")
}

fn write_html<W: Write>(
    out: &mut W,
    options: Option<&FilterOptions>,
    rows: &[DisplayRow],
) -> io::Result<()> {
    if let Some(options) = options {
        for list in options.iter() {
            let id = match list.category {
                jobboard_listings::Category::Level => "levels",
                jobboard_listings::Category::Type => "types",
                jobboard_listings::Category::Skill => "skills",
            };
            writeln!(out, "<select id=\"{id}\">")?;
            for choice in &list.choices {
                writeln!(
                    out,
                    "  <option value=\"{}\">{}</option>",
                    html_escape::encode_double_quoted_attribute(choice),
                    html_escape::encode_text(choice),
                )?;
            }
            writeln!(out, "</select>")?;
        }
    }

    writeln!(out, "<tbody>")?;
    for row in rows {
        let cells: String = row
            .cells()
            .iter()
            .map(|cell| format!("<td>{}</td>", html_escape::encode_text(cell)))
            .collect();
        writeln!(out, "  <tr>{cells}</tr>")?;
    }
    writeln!(out, "</tbody>")
}
