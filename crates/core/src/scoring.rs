//! Scoring
//!
//! Points are the sum of seven independent rules. Every rule is evaluated for
//! every receipt; none of them can fail or short-circuit another.

use jiff::civil::{self, Time};

use crate::receipt::Receipt;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Minor units per point awarded by the item description rule (20%, rounded up).
const DESCRIPTION_MINOR_UNITS_PER_POINT: u64 = 500;

const AFTERNOON_START: Time = civil::time(14, 0, 0, 0);
const AFTERNOON_END: Time = civil::time(16, 0, 0, 0);

/// A single scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// One point per ASCII letter or digit in the retailer name.
    RetailerName,

    /// 50 points if the total is a whole currency amount.
    RoundDollar,

    /// 25 points if the total is a multiple of a quarter.
    QuarterMultiple,

    /// 5 points for every two items.
    ItemPairs,

    /// 20% of the price, rounded up, for every item whose trimmed description
    /// is a multiple of three bytes long.
    ItemDescription,

    /// 6 points if the day of the purchase date is odd.
    OddDay,

    /// 10 points if the purchase time is after 14:00 and before 16:00.
    AfternoonWindow,
}

impl Rule {
    /// All rules, in evaluation order.
    pub const ALL: [Rule; 7] = [
        Rule::RetailerName,
        Rule::RoundDollar,
        Rule::QuarterMultiple,
        Rule::ItemPairs,
        Rule::ItemDescription,
        Rule::OddDay,
        Rule::AfternoonWindow,
    ];

    /// Short, stable rule name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Rule::RetailerName => "retailer_name",
            Rule::RoundDollar => "round_dollar",
            Rule::QuarterMultiple => "quarter_multiple",
            Rule::ItemPairs => "item_pairs",
            Rule::ItemDescription => "item_description",
            Rule::OddDay => "odd_day",
            Rule::AfternoonWindow => "afternoon_window",
        }
    }

    /// Points this rule awards for the receipt.
    pub fn contribution(self, receipt: &Receipt) -> u64 {
        match self {
            Rule::RetailerName => count_as_points(
                receipt
                    .retailer()
                    .chars()
                    .filter(char::is_ascii_alphanumeric)
                    .count(),
            ),
            Rule::RoundDollar => award_if(receipt.total() % 100 == 0, ROUND_DOLLAR_POINTS),
            Rule::QuarterMultiple => award_if(receipt.total() % 25 == 0, QUARTER_MULTIPLE_POINTS),
            Rule::ItemPairs => {
                count_as_points(receipt.items().len() / 2).saturating_mul(ITEM_PAIR_POINTS)
            }
            Rule::ItemDescription => receipt
                .items()
                .iter()
                .filter(|item| item.short_description().trim().len() % 3 == 0)
                .map(|item| item.price().div_ceil(DESCRIPTION_MINOR_UNITS_PER_POINT))
                .fold(0, u64::saturating_add),
            Rule::OddDay => award_if(receipt.purchase_date().day() % 2 == 1, ODD_DAY_POINTS),
            Rule::AfternoonWindow => {
                let time = receipt.purchase_time();

                award_if(
                    time > AFTERNOON_START && time < AFTERNOON_END,
                    AFTERNOON_POINTS,
                )
            }
        }
    }
}

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    contributions: [(Rule, u64); 7],
}

impl ScoreBreakdown {
    /// Sum of all rule contributions.
    pub fn total(&self) -> u64 {
        self.contributions
            .iter()
            .map(|(_, points)| *points)
            .fold(0, u64::saturating_add)
    }

    /// Points awarded by a single rule.
    pub fn contribution(&self, rule: Rule) -> u64 {
        self.contributions
            .iter()
            .find(|(candidate, _)| *candidate == rule)
            .map_or(0, |(_, points)| *points)
    }

    /// Iterate over `(rule, points)` pairs in evaluation order.
    pub fn contributions(&self) -> impl Iterator<Item = (Rule, u64)> + '_ {
        self.contributions.iter().copied()
    }
}

/// Evaluate every rule against the receipt.
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        contributions: Rule::ALL.map(|rule| (rule, rule.contribution(receipt))),
    }
}

/// Total points for the receipt.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

fn award_if(condition: bool, points: u64) -> u64 {
    if condition { points } else { 0 }
}

fn count_as_points(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}
