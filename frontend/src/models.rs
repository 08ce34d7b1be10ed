use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Backend record id, sent either as a number or as a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// Everything the home page shows, replaced wholesale on every fetch.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub monthly_budgeting_goal: f64,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub expense_items: Vec<ExpenseItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub category_name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExpenseItem {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub item: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: f64,
    pub category: CategoryRef,
}

impl ExpenseItem {
    /// Stable identity used for deletion. Items the backend sent without an id
    /// cannot be deleted from the client.
    pub fn delete_key(&self) -> Option<RecordId> {
        self.id.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub category_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCategory {
    pub category_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub category: CategoryRef,
    pub expense_item: ExpenseLine,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpenseLine {
    pub item: String,
    pub category: CategoryRef,
    pub price: f64,
}

impl NewExpense {
    pub fn new(item: String, price: f64, category_name: String) -> Self {
        let category = CategoryRef { category_name };
        Self {
            category: category.clone(),
            expense_item: ExpenseLine {
                item,
                category,
                price,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

// The backend serialises decimals either as numbers or as strings.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|amount| amount.is_finite())
    .unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_backend_snapshot() {
        let raw = json!({
            "monthly_budgeting_goal": "200.00",
            "categories": [{"id": 1, "category_name": "Food"}],
            "expense_items": [
                {"id": 7, "item": "Lunch", "price": "12.50", "category": {"category_name": "Food"}},
                {"item": "Bus", "price": 2.5, "category": {"category_name": "Travel"}}
            ]
        });

        let snapshot: DashboardSnapshot = serde_json::from_value(raw).unwrap();
        assert_eq!(snapshot.monthly_budgeting_goal, 200.0);
        assert_eq!(snapshot.categories[0].category_name, "Food");
        assert_eq!(snapshot.expense_items[0].price, 12.5);
        assert_eq!(snapshot.expense_items[0].delete_key(), Some(RecordId::Num(7)));
        assert_eq!(snapshot.expense_items[1].delete_key(), None);
    }

    #[test]
    fn string_ids_are_accepted() {
        let raw = json!({
            "monthly_budgeting_goal": 100,
            "categories": [{"id": "c-1", "category_name": "Food"}],
            "expense_items": [
                {"id": "e-9", "item": "Lunch", "price": 8, "category": {"category_name": "Food"}}
            ]
        });

        let snapshot: DashboardSnapshot = serde_json::from_value(raw).unwrap();
        assert_eq!(snapshot.categories[0].id, Some(RecordId::Text("c-1".into())));

        let key = snapshot.expense_items[0].delete_key().unwrap();
        assert_eq!(key, RecordId::Text("e-9".into()));
        assert_eq!(key.to_string(), "e-9");
        assert_eq!(RecordId::Num(42).to_string(), "42");
    }

    #[test]
    fn non_finite_prices_count_as_zero() {
        let raw = json!({
            "monthly_budgeting_goal": "inf",
            "expense_items": [
                {"id": 1, "item": "A", "price": "NaN", "category": {"category_name": "X"}},
                {"id": 2, "item": "B", "price": "-inf", "category": {"category_name": "X"}},
                {"id": 3, "item": "C", "price": "4.5", "category": {"category_name": "X"}}
            ]
        });

        let snapshot: DashboardSnapshot = serde_json::from_value(raw).unwrap();
        assert_eq!(snapshot.monthly_budgeting_goal, 0.0);
        let prices: Vec<f64> = snapshot.expense_items.iter().map(|e| e.price).collect();
        assert_eq!(prices, vec![0.0, 0.0, 4.5]);
    }

    #[test]
    fn missing_goal_is_zero() {
        let snapshot: DashboardSnapshot =
            serde_json::from_value(json!({"monthly_budgeting_goal": null})).unwrap();
        assert_eq!(snapshot.monthly_budgeting_goal, 0.0);
        assert!(snapshot.expense_items.is_empty());
    }

    #[test]
    fn expense_payload_shape() {
        let payload = NewExpense::new("Coffee".into(), 3.75, "Food".into());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "category": {"category_name": "Food"},
                "expense_item": {
                    "item": "Coffee",
                    "category": {"category_name": "Food"},
                    "price": 3.75
                }
            })
        );
    }
}
