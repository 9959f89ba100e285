//! Console rendering.
//!
//! Each cycle redraws the whole screen: an exchange rate section followed
//! by the NYSE equity table. Inputs are already-clean result lists; this
//! module never fetches, retries, or filters out bad data.

pub mod format;
pub mod theme;

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::state::{DisplayTable, QuoteResult};
use chrono::{Local, NaiveDateTime};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use format::{format_amount, format_percent, format_signed, format_volume, pad, truncate_name};
use std::io::Write;
use theme::{Painter, change_color, market_color};

const FOREX_NAME_WIDTH: usize = 16;
const SYMBOL_WIDTH: usize = 10;

/// Full-screen table renderer over any writer.
pub struct Ui<W: Write> {
    out: W,
    painter: Painter,
    clear_screen: bool,
    name_width: usize,
}

impl<W: Write> Ui<W> {
    pub fn new(out: W, config: &DisplayConfig) -> Self {
        Self {
            out,
            painter: Painter::new(config.color),
            clear_screen: config.clear_screen,
            name_width: config.name_width,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Redraw the screen, stamped with the current local time.
    pub fn render(&mut self, table: &DisplayTable) -> Result<()> {
        self.render_at(table, Local::now().naive_local())
    }

    /// Redraw the screen with an explicit update time.
    pub fn render_at(&mut self, table: &DisplayTable, updated: NaiveDateTime) -> Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        self.render_forex(&table.forex, updated)?;
        self.render_equities(table)?;

        writeln!(
            self.out,
            "\n{}",
            self.painter.paint("Press Ctrl+C to stop", theme::NOTICE)
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Print a one-line informational message.
    pub fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    /// Print a one-line error message.
    pub fn error_notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", self.painter.paint(message, theme::ERROR))?;
        self.out.flush()?;
        Ok(())
    }

    fn render_forex(&mut self, rates: &[QuoteResult], updated: NaiveDateTime) -> Result<()> {
        writeln!(
            self.out,
            "\n{}",
            self.painter.paint("=== EXCHANGE RATES ===", theme::HEADER)
        )?;
        writeln!(self.out, "Updated: {}\n", updated.format("%Y-%m-%d %H:%M:%S"))?;

        if rates.is_empty() {
            writeln!(
                self.out,
                "{}",
                self.painter
                    .paint("No exchange rate data available", theme::ERROR)
            )?;
            return Ok(());
        }

        for rate in rates {
            let change = self.change_cell(rate);
            writeln!(
                self.out,
                "{}${} {}",
                pad(&rate.display_name, FOREX_NAME_WIDTH),
                format_amount(rate.price),
                change
            )?;
        }
        Ok(())
    }

    fn render_equities(&mut self, table: &DisplayTable) -> Result<()> {
        writeln!(
            self.out,
            "\n{}",
            self.painter
                .paint("=== ARGENTINE STOCK MARKET ===", theme::HEADER)
        )?;

        let rows = table.nyse_equities();
        if rows.is_empty() {
            writeln!(
                self.out,
                "\n{}",
                self.painter
                    .paint("No stock market data available", theme::ERROR)
            )?;
            return Ok(());
        }

        writeln!(
            self.out,
            "\n{}\n",
            self.painter
                .paint("Argentine equities on NYSE (in pesos)", theme::NOTICE)
        )?;
        writeln!(
            self.out,
            "{}\n",
            self.painter.paint("Organized by sector:", theme::SUBHEADING)
        )?;
        for row in rows {
            let line = self.equity_row(row);
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    /// One equity line: symbol, name, price, change, volume.
    fn equity_row(&self, quote: &QuoteResult) -> String {
        let symbol = self
            .painter
            .paint(pad(&quote.symbol, SYMBOL_WIDTH), market_color(quote.market));
        let name = pad(
            &truncate_name(&quote.display_name, self.name_width),
            self.name_width + 1,
        );
        let name = if quote.display_name.is_empty() {
            name
        } else {
            self.painter.paint(name, theme::NAME)
        };

        format!(
            "{}{}${} {} Vol: {}",
            symbol,
            name,
            format_amount(quote.price),
            self.change_cell(quote),
            format_volume(quote.volume)
        )
    }

    /// `+10.00 (+1.01%)`, colored by direction.
    fn change_cell(&self, quote: &QuoteResult) -> String {
        self.painter.paint(
            format!(
                "{} ({}%)",
                format_signed(quote.change),
                format_percent(quote.change_percent)
            ),
            change_color(quote.change),
        )
    }
}
