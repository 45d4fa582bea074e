use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::PointsResult;

const LABEL_WIDTH: usize = 20;
const POINTS_WIDTH: usize = 5;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score breakdown as one line per rule followed by the total.
/// Format: "{label}  {points}  {description}", label left-aligned, points right-aligned
pub fn format_breakdown(result: &PointsResult, use_colors: bool) -> String {
    let mut lines: Vec<String> = result
        .breakdown
        .iter()
        .map(|c| {
            let label = format!("{:<width$}", c.rule.label(), width = LABEL_WIDTH);
            let points = format!("{:>width$}", format!("+{}", c.points), width = POINTS_WIDTH);
            if use_colors {
                let points = if c.points > 0 {
                    points.green().to_string()
                } else {
                    points.dimmed().to_string()
                };
                format!("{} {}  {}", label, points, c.description.dimmed())
            } else {
                format!("{} {}  {}", label, points, c.description)
            }
        })
        .collect();

    lines.push(format_total(result.points, use_colors));
    lines.join("\n")
}

/// Format the total line
pub fn format_total(points: u64, use_colors: bool) -> String {
    let label = format!("{:<width$}", "Total", width = LABEL_WIDTH);
    let points = format!("{:>width$}", points, width = POINTS_WIDTH);
    if use_colors {
        format!("{} {}", label.bold(), points.bold())
    } else {
        format!("{} {}", label, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Rule, RuleContribution};

    fn sample_result() -> PointsResult {
        PointsResult {
            points: 56,
            breakdown: vec![
                RuleContribution {
                    rule: Rule::RetailerName,
                    description: "6 alphanumeric characters in 'Target'".to_string(),
                    points: 6,
                },
                RuleContribution {
                    rule: Rule::RoundTotal,
                    description: "total 5.00 has no cents".to_string(),
                    points: 50,
                },
                RuleContribution {
                    rule: Rule::OddDay,
                    description: "purchased on 2022-01-02".to_string(),
                    points: 0,
                },
            ],
        }
    }

    #[test]
    fn test_format_breakdown_lines() {
        let output = format_breakdown(&sample_result(), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Retailer name"));
        assert!(lines[0].contains("+6"));
        assert!(lines[0].ends_with("6 alphanumeric characters in 'Target'"));
        assert!(lines[1].contains("+50"));
        assert!(lines[2].contains("+0"));
        assert!(lines[3].starts_with("Total"));
        assert!(lines[3].ends_with("56"));
    }

    #[test]
    fn test_format_breakdown_alignment() {
        let output = format_breakdown(&sample_result(), false);
        let columns: Vec<usize> = output
            .lines()
            .take(3)
            .map(|line| {
                let plus = line.find('+').unwrap();
                plus + line[plus..].find(' ').unwrap()
            })
            .collect();
        // Points column ends at the same offset on every rule line
        assert!(columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_format_total_plain() {
        assert_eq!(format_total(28, false), format!("{:<20}    28", "Total"));
    }

    #[test]
    fn test_format_breakdown_colors() {
        let plain = format_breakdown(&sample_result(), false);
        let colored = format_breakdown(&sample_result(), true);
        assert!(colored.contains('\x1b'));
        assert!(!plain.contains('\x1b'));
    }
}
