use rust_decimal::Decimal;

use super::rules;
use crate::error::Result;
use crate::receipt::ValidReceipt;

/// The fixed set of scoring rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    RetailerName,
    RoundTotal,
    QuarterMultiple,
    ItemPairs,
    ItemDescriptions,
    OddDay,
    AfternoonPurchase,
}

impl Rule {
    pub fn label(&self) -> &'static str {
        match self {
            Rule::RetailerName => "Retailer name",
            Rule::RoundTotal => "Round total",
            Rule::QuarterMultiple => "Quarter multiple",
            Rule::ItemPairs => "Item pairs",
            Rule::ItemDescriptions => "Item descriptions",
            Rule::OddDay => "Odd day",
            Rule::AfternoonPurchase => "Afternoon purchase",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleContribution {
    pub rule: Rule,
    pub description: String, // e.g. "5 items (2 pairs)", "purchased at 15:01"
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointsResult {
    pub points: u64,
    pub breakdown: Vec<RuleContribution>,
}

/// Score a validated receipt.
///
/// Every value is parsed before any rule is applied, so a receipt either gets
/// a full score or an `InvalidField` error naming the first bad field in the
/// order `purchaseDate`, `purchaseTime`, `total`, item `price`s.
pub fn calculate_points(receipt: &ValidReceipt<'_>) -> Result<PointsResult> {
    let date = rules::parse_purchase_date(receipt.purchase_date)?;
    let time = rules::parse_purchase_time(receipt.purchase_time)?;
    let total = rules::parse_amount(receipt.total, "total")?;
    let prices = receipt
        .items
        .iter()
        .map(|item| rules::parse_amount(item.price, "price"))
        .collect::<Result<Vec<Decimal>>>()?;

    let mut breakdown = Vec::with_capacity(7);

    let letters = rules::retailer_name_points(receipt.retailer);
    breakdown.push(RuleContribution {
        rule: Rule::RetailerName,
        description: format!("{} alphanumeric characters in '{}'", letters, receipt.retailer),
        points: letters,
    });

    let round = rules::round_total_points(receipt.total);
    breakdown.push(RuleContribution {
        rule: Rule::RoundTotal,
        description: if round > 0 {
            format!("total {} has no cents", receipt.total)
        } else {
            format!("total {} has cents", receipt.total)
        },
        points: round,
    });

    let quarter = rules::quarter_multiple_points(total);
    breakdown.push(RuleContribution {
        rule: Rule::QuarterMultiple,
        description: if quarter > 0 {
            format!("total {} is a multiple of 0.25", total)
        } else {
            format!("total {} is not a multiple of 0.25", total)
        },
        points: quarter,
    });

    let pairs = rules::item_pair_points(receipt.items.len());
    breakdown.push(RuleContribution {
        rule: Rule::ItemPairs,
        description: format!(
            "{} items ({} pairs)",
            receipt.items.len(),
            receipt.items.len() / 2
        ),
        points: pairs,
    });

    // Matching descriptions compound into a single contribution
    let mut description_points = 0u64;
    let mut matched = 0usize;
    for (item, price) in receipt.items.iter().zip(&prices) {
        if rules::description_length_matches(item.short_description) {
            matched += 1;
        }
        let earned = rules::item_description_points(item.short_description, *price);
        description_points = description_points.saturating_add(earned);
    }
    breakdown.push(RuleContribution {
        rule: Rule::ItemDescriptions,
        description: format!(
            "{} of {} descriptions have a length divisible by 3",
            matched,
            prices.len()
        ),
        points: description_points,
    });

    let odd = rules::odd_day_points(date);
    breakdown.push(RuleContribution {
        rule: Rule::OddDay,
        description: format!("purchased on {}", date),
        points: odd,
    });

    let afternoon = rules::afternoon_points(time);
    breakdown.push(RuleContribution {
        rule: Rule::AfternoonPurchase,
        description: format!("purchased at {}", time.format("%H:%M")),
        points: afternoon,
    });

    let points = breakdown
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.points));

    Ok(PointsResult { points, breakdown })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReceiptError;
    use crate::receipt::ValidItem;

    fn item<'a>(short_description: &'a str, price: &'a str) -> ValidItem<'a> {
        ValidItem {
            short_description,
            price,
        }
    }

    fn target_receipt<'a>(purchase_time: &'a str) -> ValidReceipt<'a> {
        ValidReceipt {
            retailer: "Target",
            purchase_date: "2022-01-01",
            purchase_time,
            total: "35.35",
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        }
    }

    fn points_for(result: &PointsResult, rule: Rule) -> u64 {
        result
            .breakdown
            .iter()
            .find(|c| c.rule == rule)
            .map(|c| c.points)
            .unwrap()
    }

    #[test]
    fn test_target_receipt_morning() {
        let result = calculate_points(&target_receipt("13:01")).unwrap();
        assert_eq!(result.points, 28);
        assert_eq!(points_for(&result, Rule::RetailerName), 6);
        assert_eq!(points_for(&result, Rule::ItemPairs), 10);
        assert_eq!(points_for(&result, Rule::ItemDescriptions), 6);
        assert_eq!(points_for(&result, Rule::OddDay), 6);
        assert_eq!(points_for(&result, Rule::AfternoonPurchase), 0);
    }

    #[test]
    fn test_target_receipt_afternoon() {
        let result = calculate_points(&target_receipt("15:01")).unwrap();
        assert_eq!(result.points, 38);
        assert_eq!(points_for(&result, Rule::AfternoonPurchase), 10);
    }

    #[test]
    fn test_round_dollar_single_item() {
        let receipt = ValidReceipt {
            retailer: "Target",
            purchase_date: "2022-01-02",
            purchase_time: "13:01",
            total: "5.00",
            items: vec![item("Mountain Dew 12PK", "5.00")],
        };
        let result = calculate_points(&receipt).unwrap();
        // 6 retailer + 50 round + 25 quarter
        assert_eq!(result.points, 81);
        assert_eq!(points_for(&result, Rule::RoundTotal), 50);
        assert_eq!(points_for(&result, Rule::QuarterMultiple), 25);
        assert_eq!(points_for(&result, Rule::OddDay), 0);
    }

    #[test]
    fn test_corner_market_receipt() {
        let receipt = ValidReceipt {
            retailer: "M&M Corner Market",
            purchase_date: "2022-03-20",
            purchase_time: "14:33",
            total: "9.00",
            items: vec![
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
            ],
        };
        // 14 retailer + 50 round + 25 quarter + 10 pairs + 10 afternoon
        assert_eq!(calculate_points(&receipt).unwrap().points, 109);
    }

    #[test]
    fn test_breakdown_lists_every_rule_once() {
        let result = calculate_points(&target_receipt("13:01")).unwrap();
        let rules: Vec<Rule> = result.breakdown.iter().map(|c| c.rule).collect();
        assert_eq!(
            rules,
            vec![
                Rule::RetailerName,
                Rule::RoundTotal,
                Rule::QuarterMultiple,
                Rule::ItemPairs,
                Rule::ItemDescriptions,
                Rule::OddDay,
                Rule::AfternoonPurchase,
            ]
        );
        let sum: u64 = result.breakdown.iter().map(|c| c.points).sum();
        assert_eq!(sum, result.points);
    }

    #[test]
    fn test_empty_items() {
        let receipt = ValidReceipt {
            retailer: "Shop",
            purchase_date: "2022-01-02",
            purchase_time: "10:00",
            total: "0.00",
            items: vec![],
        };
        // 4 retailer + 50 round + 25 quarter
        assert_eq!(calculate_points(&receipt).unwrap().points, 79);
    }

    #[test]
    fn test_invalid_date_aborts() {
        let mut receipt = target_receipt("13:01");
        receipt.purchase_date = "2022-02-30";
        assert_eq!(
            calculate_points(&receipt),
            Err(ReceiptError::invalid("purchaseDate"))
        );
    }

    #[test]
    fn test_invalid_time_aborts() {
        let receipt = target_receipt("3pm");
        assert_eq!(
            calculate_points(&receipt),
            Err(ReceiptError::invalid("purchaseTime"))
        );
    }

    #[test]
    fn test_invalid_total_aborts() {
        let mut receipt = target_receipt("13:01");
        receipt.total = "thirty";
        assert_eq!(calculate_points(&receipt), Err(ReceiptError::invalid("total")));
    }

    #[test]
    fn test_invalid_price_aborts() {
        let mut receipt = target_receipt("13:01");
        receipt.items[2] = item("Knorr Creamy Chicken", "1,26");
        assert_eq!(calculate_points(&receipt), Err(ReceiptError::invalid("price")));
    }

    #[test]
    fn test_date_error_reported_before_time_error() {
        let mut receipt = target_receipt("25:00");
        receipt.purchase_date = "yesterday";
        assert_eq!(
            calculate_points(&receipt),
            Err(ReceiptError::invalid("purchaseDate"))
        );
    }

    #[test]
    fn test_bad_date_reported_before_bad_amounts() {
        let mut receipt = target_receipt("13:01");
        receipt.purchase_date = "yesterday";
        receipt.total = "35,35";
        receipt.items[0] = item("Mountain Dew 12PK", "six");
        assert_eq!(
            calculate_points(&receipt),
            Err(ReceiptError::invalid("purchaseDate"))
        );
    }

    #[test]
    fn test_bad_time_reported_before_bad_total() {
        let mut receipt = target_receipt("1:01 PM");
        receipt.total = "thirty";
        assert_eq!(
            calculate_points(&receipt),
            Err(ReceiptError::invalid("purchaseTime"))
        );
    }
}
