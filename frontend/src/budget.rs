use crate::models::DashboardSnapshot;

/// Length of the half-circle gauge arc drawn on the home page.
pub const GAUGE_ARC: f64 = 251.2;

/// Values derived from a snapshot on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Totals {
    pub goal: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
}

impl Totals {
    pub fn new(goal: f64, total_spent: f64) -> Self {
        let percent_used = if goal > 0.0 {
            (total_spent / goal * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            goal,
            total_spent,
            remaining: (goal - total_spent).max(0.0),
            percent_used,
        }
    }

    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let total_spent = snapshot.expense_items.iter().map(|e| e.price).sum();
        Self::new(snapshot.monthly_budgeting_goal, total_spent)
    }

    /// `stroke-dasharray` for the filled part of the gauge.
    pub fn gauge_dash(&self) -> String {
        format!("{:.2} {}", self.percent_used / 100.0 * GAUGE_ARC, GAUGE_ARC)
    }
}

pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRef, ExpenseItem, RecordId};

    fn snapshot(goal: f64, prices: &[f64]) -> DashboardSnapshot {
        DashboardSnapshot {
            monthly_budgeting_goal: goal,
            categories: Vec::new(),
            expense_items: prices
                .iter()
                .enumerate()
                .map(|(i, price)| ExpenseItem {
                    id: Some(RecordId::Num(i as i64)),
                    item: format!("item {i}"),
                    price: *price,
                    category: CategoryRef {
                        category_name: "Misc".to_string(),
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn example_budget() {
        let totals = Totals::from_snapshot(&snapshot(200.0, &[50.0, 30.0]));
        assert_eq!(format_money(totals.total_spent), "$80.00");
        assert_eq!(format_money(totals.remaining), "$120.00");
        assert_eq!(totals.percent_used, 40.0);
        assert_eq!(totals.gauge_dash(), "100.48 251.2");
    }

    #[test]
    fn zero_goal_does_not_divide() {
        let totals = Totals::from_snapshot(&snapshot(0.0, &[10.0]));
        assert_eq!(totals.percent_used, 0.0);
        assert_eq!(totals.remaining, 0.0);
    }

    #[test]
    fn overspending_clamps() {
        let totals = Totals::new(100.0, 250.0);
        assert_eq!(totals.percent_used, 100.0);
        assert_eq!(totals.remaining, 0.0);
    }

    #[test]
    fn percent_stays_in_bounds() {
        for goal in [0.5, 1.0, 37.0, 200.0, 10_000.0] {
            for spent in [0.0, 0.25, 20.0, 199.99, 200.0, 5_000.0, 1e9] {
                let totals = Totals::new(goal, spent);
                assert!((0.0..=100.0).contains(&totals.percent_used));
                assert_eq!(totals.percent_used, (spent / goal * 100.0).min(100.0));
                assert_eq!(totals.remaining, (goal - spent).max(0.0));
            }
        }
    }

    #[test]
    fn empty_snapshot() {
        let totals = Totals::from_snapshot(&DashboardSnapshot::default());
        assert_eq!(totals.total_spent, 0.0);
        assert_eq!(format_money(totals.goal), "$0.00");
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(3.5), "$3.50");
        assert_eq!(format_money(1234.567), "$1234.57");
        assert_eq!(format_money(-2.0), "-$2.00");
    }
}
