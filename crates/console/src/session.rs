//! Interactive session driving one matching engine

use std::io::{BufRead, Write};

use log::{debug, info};
use ordermatch_core::{Order, Side, Trade};
use ordermatch_matching::OrderMatcher;

use crate::command::{Command, CommandParser};
use crate::error::Result;

pub const WELCOME: &str = "Welcome to the order matcher. Type 'help' for a list of commands.";
pub const GOODBYE: &str = "Good bye!";
pub const HELP: &str = "Available commands:
  buy|sell <quantity>@<price> [#<id>]  - Enter an order.
  list                                 - List all remaining orders.
  quit                                 - Quit.
  help                                 - Show help (this message).
";

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Console adapter around an engine
pub struct Console<M: OrderMatcher> {
    engine: M,
    parser: CommandParser,
    json_trades: bool,
}

impl<M: OrderMatcher> Console<M> {
    pub fn new(engine: M) -> Self {
        Self {
            engine,
            parser: CommandParser::new(),
            json_trades: false,
        }
    }

    pub fn with_json_trades(mut self, enabled: bool) -> Self {
        self.json_trades = enabled;
        self
    }

    pub fn engine(&self) -> &M {
        &self.engine
    }

    /// Submit orders before the session starts; returns the trades produced
    pub fn seed(&mut self, orders: Vec<Order>) -> Result<Vec<Trade>> {
        let mut trades = Vec::new();
        for order in orders {
            debug!("Seeding {}", order);
            trades.extend(self.engine.submit(order)?);
        }
        info!(
            "Seeded book: {} bids, {} asks, {} trades",
            self.engine.query(Side::Buy).len(),
            self.engine.query(Side::Sell).len(),
            trades.len()
        );
        Ok(trades)
    }

    /// Read commands until `quit` or end of input
    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        writeln!(out, "{}", WELCOME)?;
        writeln!(out)?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, out, err)? == Flow::Quit {
                break;
            }
        }

        writeln!(out, "{}", GOODBYE)?;
        out.flush()?;
        Ok(())
    }

    /// Parse and execute one line
    ///
    /// Parse failures and rejected orders are reported on `err` and do not
    /// end the session.
    pub fn handle_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> Result<Flow> {
        match self.parser.parse(line) {
            Ok(command) => self.execute(command, out, err),
            Err(e) => {
                writeln!(err, "Bad input: {}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write, E: Write>(
        &mut self,
        command: Command,
        out: &mut W,
        err: &mut E,
    ) -> Result<Flow> {
        match command {
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Empty => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::List => self.list(out)?,
            Command::PlaceOrder(order) => match self.engine.submit(order) {
                Ok(trades) => self.print_trades(&trades, out)?,
                Err(e) => writeln!(err, "Rejected: {}", e)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        for side in [Side::Buy, Side::Sell] {
            writeln!(out, "{}:", side)?;
            for order in self.engine.query(side) {
                writeln!(out, "{}", order)?;
            }
        }
        Ok(())
    }

    fn print_trades<W: Write>(&self, trades: &[Trade], out: &mut W) -> Result<()> {
        for trade in trades {
            if self.json_trades {
                writeln!(out, "{}", serde_json::to_string(trade)?)?;
            } else {
                writeln!(out, "{}", trade)?;
            }
        }
        Ok(())
    }
}
