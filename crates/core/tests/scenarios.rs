//! Worked receipt scenarios, from wire format to points

use tally::prelude::*;
use testresult::TestResult;

fn item(short_description: &str, price: &str) -> RawItem {
    RawItem {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

fn target() -> RawReceipt {
    RawReceipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

fn corner_market() -> RawReceipt {
    RawReceipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![item("Gatorade", "2.25"); 4],
        total: "9.00".to_string(),
    }
}

#[test]
fn target_receipt_scores_28() -> TestResult {
    let receipt = normalize_receipt(target())?;

    assert_eq!(receipt.total(), 3535);
    assert_eq!(
        receipt.items().iter().map(Item::price).collect::<Vec<_>>(),
        [649, 1225, 126, 335, 1200]
    );
    assert_eq!(score(&receipt), 28);

    Ok(())
}

#[test]
fn corner_market_receipt_scores_109() -> TestResult {
    let receipt = normalize_receipt(corner_market())?;

    assert_eq!(receipt.total(), 900);
    assert_eq!(score(&receipt), 109);

    let breakdown = breakdown(&receipt);

    assert_eq!(breakdown.contribution(Rule::RetailerName), 14);
    assert_eq!(breakdown.contribution(Rule::RoundDollar), 50);
    assert_eq!(breakdown.contribution(Rule::QuarterMultiple), 25);
    assert_eq!(breakdown.contribution(Rule::ItemPairs), 10);
    assert_eq!(breakdown.contribution(Rule::ItemDescription), 0);
    assert_eq!(breakdown.contribution(Rule::OddDay), 0);
    assert_eq!(breakdown.contribution(Rule::AfternoonWindow), 10);

    Ok(())
}

#[test]
fn item_order_does_not_change_points() -> TestResult {
    let mut reversed = target();

    reversed.items.reverse();

    assert_eq!(
        score(&normalize_receipt(reversed)?),
        score(&normalize_receipt(target())?)
    );

    Ok(())
}

#[test]
fn empty_receipt_scores_only_non_item_rules() -> TestResult {
    let receipt = normalize_receipt(RawReceipt {
        retailer: String::new(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "09:00".to_string(),
        items: Vec::new(),
        total: "0.01".to_string(),
    })?;

    assert_eq!(score(&receipt), 0);

    Ok(())
}

#[test]
fn invalid_purchase_time_is_rejected() {
    let mut raw = target();

    raw.purchase_time = "invalid time".to_string();

    let result = normalize_receipt(raw);

    assert!(
        matches!(
            result,
            Err(NormalizeError::PurchaseTime {
                source: InvalidFormat::Time,
                ..
            })
        ),
        "expected purchase time failure, got {result:?}"
    );
}

#[test]
fn invalid_purchase_date_wins_over_other_failures() {
    let mut raw = corner_market();

    raw.purchase_date = "2022-02-30".to_string();
    raw.purchase_time = "25:00".to_string();
    raw.total = "nine".to_string();
    raw.items.push(item("Gum", "?"));

    let result = normalize_receipt(raw);

    assert!(
        matches!(result, Err(NormalizeError::PurchaseDate { .. })),
        "expected purchase date failure, got {result:?}"
    );
}
