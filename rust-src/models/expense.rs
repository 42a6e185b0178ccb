//! Expense and monthly report models.

use chrono::Month;
use serde::{Deserialize, Serialize, Serializer};


/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Assigned by storage; ignored on insert.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    /// Canonical `YYYY-MM` or `YYYY-MM-DD` once stored.
    pub date: String,
    pub amount: f64,
    pub category: String,
}


impl Expense {
    /// Create an expense that has not been stored yet.
    pub fn new(name: impl Into<String>, date: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            date: date.into(),
            amount,
            category: category.into(),
        }
    }
}


/// Aggregated view of one month of expenses against its budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthData {
    pub year: i32,
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
    pub expenses: Vec<Expense>,
    pub budget: f64,
    pub total_spendings: f64,
    pub money_left: f64,
    pub mean_expense: f64,
    pub standard_deviation_expense: f64,
}


impl MonthData {
    /// Get the `YYYY-MM` key this report covers.
    pub fn year_month(&self) -> String {
        format!("{}-{:02}", self.year, self.month.number_from_month())
    }

    /// Check if spending has gone past the budget.
    pub fn is_over_budget(&self) -> bool {
        self.money_left < 0.0
    }
}


fn serialize_month<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(month.number_from_month())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn create_month_data(budget: f64, total: f64) -> MonthData {
        MonthData {
            year: 2023,
            month: Month::May,
            expenses: Vec::new(),
            budget,
            total_spendings: total,
            money_left: budget - total,
            mean_expense: 0.0,
            standard_deviation_expense: 0.0,
        }
    }

    #[test]
    fn test_new_expense_has_no_id() {
        let expense = Expense::new("Coffee", "2023-05-10", 3.5, "food");
        assert_eq!(expense.id, 0);
        assert_eq!(expense.category, "food");
    }

    #[test]
    fn test_year_month_is_zero_padded() {
        assert_eq!(create_month_data(0.0, 0.0).year_month(), "2023-05");
    }

    #[test]
    fn test_over_budget() {
        assert!(create_month_data(50.0, 60.0).is_over_budget());
        assert!(!create_month_data(50.0, 50.0).is_over_budget());
    }

    #[test]
    fn test_month_serializes_as_number() {
        let json = serde_json::to_value(create_month_data(100.0, 0.0)).unwrap();
        assert_eq!(json["month"], 5);
        assert_eq!(json["year"], 2023);
        assert_eq!(json["money_left"], 100.0);
    }
}
