//! Console command grammar
//!
//! ```text
//! help | list | quit | <empty>
//! (buy|sell) <quantity>@<price> [#<id>]
//! ```

use ordermatch_core::{Order, Side};

use crate::error::ParseError;

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Quit,
    Empty,
    PlaceOrder(Order),
}

/// Turns text lines into commands, assigning ids to orders that omit one
#[derive(Debug)]
pub struct CommandParser {
    next_id: u64,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn parse(&mut self, line: &str) -> Result<Command, ParseError> {
        match line.trim() {
            "" => Ok(Command::Empty),
            "help" => Ok(Command::Help),
            "list" => Ok(Command::List),
            "quit" => Ok(Command::Quit),
            other => self.parse_order(other).map(Command::PlaceOrder),
        }
    }

    fn parse_order(&mut self, line: &str) -> Result<Order, ParseError> {
        let mut tokens = line.split_whitespace();

        let side: Side = tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| ParseError::UnknownCommand(line.to_string()))?;

        let terms = tokens.next().ok_or(ParseError::MissingTerms)?;
        let (quantity, price) = terms
            .split_once('@')
            .ok_or_else(|| ParseError::MissingPrice(terms.to_string()))?;
        let quantity =
            parse_amount(quantity).ok_or_else(|| ParseError::InvalidQuantity(quantity.to_string()))?;
        let price = parse_amount(price).ok_or_else(|| ParseError::InvalidPrice(price.to_string()))?;

        let id = match tokens.next() {
            Some(token) => match token.strip_prefix('#') {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => return Err(ParseError::InvalidId(token.to_string())),
            },
            None => self.assign_id(),
        };

        if let Some(extra) = tokens.next() {
            return Err(ParseError::TrailingInput(extra.to_string()));
        }

        Ok(Order::new(id, side, price, quantity))
    }

    fn assign_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }
}

/// Non-negative decimal integer; signs are not accepted
fn parse_amount(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        let mut parser = CommandParser::new();
        assert_eq!(parser.parse("help"), Ok(Command::Help));
        assert_eq!(parser.parse("  list "), Ok(Command::List));
        assert_eq!(parser.parse("quit"), Ok(Command::Quit));
        assert_eq!(parser.parse("   "), Ok(Command::Empty));
    }

    #[test]
    fn test_order_with_id() {
        let mut parser = CommandParser::new();
        assert_eq!(
            parser.parse("sell 10@100 #S1"),
            Ok(Command::PlaceOrder(Order::sell("S1", 100, 10)))
        );
        assert_eq!(
            parser.parse("buy   5@101   #B1"),
            Ok(Command::PlaceOrder(Order::buy("B1", 101, 5)))
        );
    }

    #[test]
    fn test_missing_id_is_assigned_sequentially() {
        let mut parser = CommandParser::new();
        let Ok(Command::PlaceOrder(first)) = parser.parse("buy 1@1") else {
            panic!("expected order");
        };
        parser.parse("buy 1@1 #X").unwrap();
        let Ok(Command::PlaceOrder(second)) = parser.parse("sell 2@3") else {
            panic!("expected order");
        };
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
    }

    #[test]
    fn test_rejects_malformed_orders() {
        let mut parser = CommandParser::new();
        assert_eq!(
            parser.parse("hold 1@1"),
            Err(ParseError::UnknownCommand("hold 1@1".to_string()))
        );
        assert_eq!(parser.parse("buy"), Err(ParseError::MissingTerms));
        assert_eq!(
            parser.parse("buy 10"),
            Err(ParseError::MissingPrice("10".to_string()))
        );
        assert_eq!(
            parser.parse("buy -1@100"),
            Err(ParseError::InvalidQuantity("-1".to_string()))
        );
        assert_eq!(
            parser.parse("sell 1@x"),
            Err(ParseError::InvalidPrice("x".to_string()))
        );
        assert_eq!(
            parser.parse("sell 1@1 S1"),
            Err(ParseError::InvalidId("S1".to_string()))
        );
        assert_eq!(
            parser.parse("sell 1@1 #"),
            Err(ParseError::InvalidId("#".to_string()))
        );
        assert_eq!(
            parser.parse("sell 1@1 #S1 now"),
            Err(ParseError::TrailingInput("now".to_string()))
        );
    }

    #[test]
    fn test_rejected_lines_do_not_consume_ids() {
        let mut parser = CommandParser::new();
        assert!(parser.parse("buy x@1").is_err());
        let Ok(Command::PlaceOrder(order)) = parser.parse("buy 1@1") else {
            panic!("expected order");
        };
        assert_eq!(order.id, "1");
    }

    #[test]
    fn test_amount_overflow_is_rejected() {
        let mut parser = CommandParser::new();
        assert!(matches!(
            parser.parse("buy 99999999999999999999@1"),
            Err(ParseError::InvalidQuantity(_))
        ));
    }
}
