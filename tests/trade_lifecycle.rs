use line_chart_wasm::domain::errors::ChartError;
use line_chart_wasm::domain::trading::{Trade, TradeBook, TradeResult, TradeSide};

fn trade(id: &str) -> Trade {
    Trade {
        id: id.to_string(),
        open_time: 0.0,
        close_time: 30.0,
        price: 61101.0,
        side: TradeSide::Up,
        amount: 5.0,
    }
}

fn result(id: &str) -> TradeResult {
    TradeResult {
        id: id.to_string(),
        side: TradeSide::Up,
        reward: 9.0,
        time: 30.0,
        price: 61102.0,
        color: "green".to_string(),
    }
}

#[test]
fn a_result_replaces_its_trade_immediately() {
    let mut book = TradeBook::new(3000.0);
    book.add_trade(trade("a")).unwrap();
    book.add_trade(trade("b")).unwrap();

    book.add_result(result("a"), 1000.0);
    assert!(book.trade("a").is_none());
    assert!(book.trade("b").is_some());
    assert_eq!(book.results().count(), 1);
}

#[test]
fn results_expire_after_the_display_window() {
    let mut book = TradeBook::new(3000.0);
    book.add_result(result("a"), 1000.0);

    book.purge_expired(3999.0);
    assert_eq!(book.results().count(), 1);
    book.purge_expired(4000.0);
    assert_eq!(book.results().count(), 0);
}

#[test]
fn removing_an_unknown_trade_is_reported() {
    let mut book = TradeBook::new(3000.0);
    book.add_trade(trade("a")).unwrap();
    assert!(matches!(book.remove_trade("nope"), Err(ChartError::UnknownTrade(_))));
    let removed = book.remove_trade("a").unwrap();
    assert_eq!(removed.id, "a");
    assert!(book.trades().is_empty());
}

#[test]
fn a_repeated_result_does_not_duplicate() {
    let mut book = TradeBook::new(3000.0);
    book.add_result(result("a"), 1000.0);
    book.add_result(result("a"), 2000.0);
    assert_eq!(book.results().count(), 1);
    // The newer deadline wins.
    book.purge_expired(4500.0);
    assert_eq!(book.results().count(), 1);
}
