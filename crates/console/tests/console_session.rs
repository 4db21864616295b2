//! Console Session Integration Test
//!
//! Drives a full session through `Console::run` with scripted input:
//! 1. Orders rest, match, and sweep levels
//! 2. `list` reflects live quantities in priority order
//! 3. Bad lines are reported without ending the session
//! 4. Both engine implementations print identical transcripts

use std::io::Cursor;

use ordermatch_console::{Console, ConsoleConfig};
use ordermatch_matching::{LinearMatchingEngine, OrderMatcher, PriceTimeMatchingEngine};

const SCRIPT: &str = "\
sell 10@100 #S1
buy 5@101 #B1
buy 5@99 #B2
sell 5@99 #S2
list
sell 5@101 #S3
buy 8@101 #B3
bogus
list
quit
buy 1@1000 #NEVER
";

fn transcript<M: OrderMatcher>(engine: M, script: &str) -> (String, String) {
    let mut console = Console::new(engine);
    let mut out = Vec::new();
    let mut err = Vec::new();
    console
        .run(Cursor::new(script.as_bytes()), &mut out, &mut err)
        .unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_full_session() {
    let _ = env_logger::try_init();

    let (out, err) = transcript(PriceTimeMatchingEngine::new(), SCRIPT);

    let expected = "\
Welcome to the order matcher. Type 'help' for a list of commands.

5@100 (#B1/#S1)
5@99 (#S2/#B2)
BUY:
SELL:
sell 5@100 #S1
5@100 (#B3/#S1)
3@101 (#B3/#S3)
BUY:
SELL:
sell 2@101 #S3
Good bye!
";
    assert_eq!(out, expected);
    assert_eq!(err, "Bad input: unknown command 'bogus'\n");
}

#[test]
fn test_engines_print_identical_transcripts() {
    let _ = env_logger::try_init();

    let indexed = transcript(PriceTimeMatchingEngine::new(), SCRIPT);
    let linear = transcript(LinearMatchingEngine::new(), SCRIPT);

    assert_eq!(indexed, linear);
}

#[test]
fn test_end_of_input_says_goodbye() {
    let (out, err) = transcript(PriceTimeMatchingEngine::new(), "buy 1@1 #B1\n");

    assert!(out.ends_with("Good bye!\n"));
    assert!(err.is_empty());
}

#[test]
fn test_help_lists_commands() {
    let (out, _) = transcript(PriceTimeMatchingEngine::new(), "help\n");

    assert!(out.contains("buy|sell <quantity>@<price> [#<id>]"));
    assert!(out.contains("list"));
    assert!(out.contains("quit"));
}

#[test]
fn test_seeded_session_from_config() {
    let _ = env_logger::try_init();

    let config = ConsoleConfig::from_json(
        r#"{
            "seed_orders": [
                {"side": "sell", "quantity": 10, "price": 100, "id": "S1"},
                {"side": "sell", "quantity": 10, "price": 102}
            ]
        }"#,
    )
    .unwrap();

    let mut console = Console::new(ordermatch_matching::create_matching_engine(&config.engine));
    let seed_trades = console.seed(config.seed_orders().unwrap()).unwrap();
    assert!(seed_trades.is_empty());

    let mut out = Vec::new();
    let mut err = Vec::new();
    console
        .run(Cursor::new("buy 15@102 #B1\nlist\n"), &mut out, &mut err)
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("10@100 (#B1/#S1)\n5@102 (#B1/#seed-2)\n"));
    assert!(out.contains("SELL:\nsell 5@102 #seed-2\n"));
}
