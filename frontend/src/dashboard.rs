//! State of the home dashboard.
//!
//! Fetch results are tagged with tickets from a [`FetchSequence`]; a result is
//! applied only if it is newer than the last one applied, so overlapping
//! refreshes cannot roll the snapshot back.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;
use tracing::debug;
use yew::Reducible;

use crate::error::ApiError;
use crate::models::{DashboardSnapshot, NewExpense};

pub const UNAUTHORIZED: &str = "Unauthorized - please log in again";
pub const LOAD_FAILED: &str = "Failed to load data";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    AddCategory,
    AddExpense,
    DeleteExpense,
}

impl Mutation {
    fn failure(self) -> &'static str {
        match self {
            Mutation::AddCategory => "Failed to add category",
            Mutation::AddExpense => "Failed to add expense",
            Mutation::DeleteExpense => "Failed to delete expense",
        }
    }
}

pub fn mutation_message(mutation: Mutation, err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized { .. } => UNAUTHORIZED.to_string(),
        ApiError::Validation { body } => format!("Invalid data: {}", body),
        _ => mutation.failure().to_string(),
    }
}

/// Hands out increasing fetch tickets.
#[derive(Debug, Default)]
pub struct FetchSequence {
    last: Cell<u64>,
}

impl FetchSequence {
    pub fn issue(&self) -> u64 {
        let ticket = self.last.get() + 1;
        self.last.set(ticket);
        ticket
    }
}

pub enum DashboardAction {
    Loaded {
        ticket: u64,
        result: Result<DashboardSnapshot, ApiError>,
    },
    MutationFailed {
        mutation: Mutation,
        error: ApiError,
    },
    Notice(String),
    DismissNotice,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardModel {
    pub snapshot: Option<DashboardSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    applied: u64,
}

impl Default for DashboardModel {
    fn default() -> Self {
        Self {
            snapshot: None,
            loading: true,
            error: None,
            notice: None,
            applied: 0,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum DashboardView<'a> {
    Loading,
    Failed(&'a str),
    Ready(&'a DashboardSnapshot),
}

impl DashboardModel {
    pub fn view(&self) -> DashboardView<'_> {
        if self.loading {
            return DashboardView::Loading;
        }
        match (&self.error, &self.snapshot) {
            (Some(error), _) => DashboardView::Failed(error),
            (None, Some(snapshot)) => DashboardView::Ready(snapshot),
            (None, None) => DashboardView::Loading,
        }
    }

    fn apply(&mut self, ticket: u64, result: Result<DashboardSnapshot, ApiError>) {
        if ticket <= self.applied {
            debug!("discarding stale dashboard response {ticket} (applied {})", self.applied);
            return;
        }
        self.applied = ticket;
        self.loading = false;

        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.error = None;
                self.notice = None;
            }
            Err(err) => {
                let message = if err.is_unauthorized() {
                    UNAUTHORIZED
                } else {
                    LOAD_FAILED
                };
                self.error = Some(message.to_string());
            }
        }
    }
}

impl Reducible for DashboardModel {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::Loaded { ticket, result } => next.apply(ticket, result),
            DashboardAction::MutationFailed { mutation, error } => {
                next.notice = Some(mutation_message(mutation, &error));
            }
            DashboardAction::Notice(message) => next.notice = Some(message),
            DashboardAction::DismissNotice => next.notice = None,
        }
        next.into()
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ExpenseFormError {
    #[error("Please complete all fields.")]
    Incomplete,
    #[error("Price must be a number.")]
    InvalidPrice,
}

/// Pending "add expense" input, owned by the home page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub item: String,
    pub price: String,
    pub category: String,
}

impl ExpenseForm {
    /// Range checks are left to the server.
    pub fn submit(&self) -> Result<NewExpense, ExpenseFormError> {
        let item = self.item.trim();
        let price = self.price.trim();
        let category = self.category.trim();
        if item.is_empty() || price.is_empty() || category.is_empty() {
            return Err(ExpenseFormError::Incomplete);
        }

        let price = price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or(ExpenseFormError::InvalidPrice)?;

        Ok(NewExpense::new(
            item.to_string(),
            price,
            category.to_string(),
        ))
    }
}

/// Trimmed category name, `None` when there is nothing to add.
pub fn category_name(input: &str) -> Option<String> {
    let name = input.trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::models::{CategoryRef, ExpenseItem};

    fn snapshot(goal: f64) -> DashboardSnapshot {
        DashboardSnapshot {
            monthly_budgeting_goal: goal,
            ..DashboardSnapshot::default()
        }
    }

    fn reduce(model: DashboardModel, action: DashboardAction) -> DashboardModel {
        (*Rc::new(model).reduce(action)).clone()
    }

    #[test]
    fn starts_loading() {
        assert_eq!(DashboardModel::default().view(), DashboardView::Loading);
    }

    #[test]
    fn successful_fetch_is_ready() {
        let model = reduce(
            DashboardModel::default(),
            DashboardAction::Loaded {
                ticket: 1,
                result: Ok(snapshot(200.0)),
            },
        );
        assert_eq!(model.view(), DashboardView::Ready(&snapshot(200.0)));
    }

    #[test]
    fn unauthorized_fetch_has_its_own_message() {
        let model = reduce(
            DashboardModel::default(),
            DashboardAction::Loaded {
                ticket: 1,
                result: Err(ApiError::from_status(401, Value::Null)),
            },
        );
        assert_eq!(model.view(), DashboardView::Failed(UNAUTHORIZED));

        let model = reduce(
            DashboardModel::default(),
            DashboardAction::Loaded {
                ticket: 1,
                result: Err(ApiError::from_status(500, Value::Null)),
            },
        );
        assert_eq!(model.view(), DashboardView::Failed(LOAD_FAILED));
        assert_ne!(UNAUTHORIZED, LOAD_FAILED);
    }

    #[test]
    fn refetch_replaces_snapshot_and_clears_error() {
        let mut model = DashboardModel::default();
        model.apply(1, Err(ApiError::Unreachable("down".into())));
        model.apply(2, Ok(snapshot(50.0)));

        assert_eq!(model.error, None);
        assert_eq!(model.view(), DashboardView::Ready(&snapshot(50.0)));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let sequence = FetchSequence::default();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(second > first);

        let mut model = DashboardModel::default();
        model.apply(second, Ok(snapshot(2.0)));
        model.apply(first, Ok(snapshot(1.0)));

        assert_eq!(model.snapshot, Some(snapshot(2.0)));
    }

    #[test]
    fn validation_failure_embeds_payload() {
        let model = reduce(
            DashboardModel::default(),
            DashboardAction::MutationFailed {
                mutation: Mutation::AddExpense,
                error: ApiError::from_status(422, json!({"detail": "price must be >= 0"})),
            },
        );
        assert_eq!(
            model.notice.as_deref(),
            Some(r#"Invalid data: {"detail":"price must be >= 0"}"#)
        );
    }

    #[test]
    fn mutation_messages() {
        assert_eq!(
            mutation_message(Mutation::DeleteExpense, &ApiError::from_status(401, Value::Null)),
            UNAUTHORIZED
        );
        assert_eq!(
            mutation_message(Mutation::AddCategory, &ApiError::Unreachable("down".into())),
            "Failed to add category"
        );
    }

    #[test]
    fn notice_can_be_dismissed() {
        let model = reduce(
            DashboardModel::default(),
            DashboardAction::Notice("Please complete all fields.".into()),
        );
        let model = reduce(model, DashboardAction::DismissNotice);
        assert_eq!(model.notice, None);
    }

    #[test]
    fn expense_form_requires_every_field() {
        let form = ExpenseForm {
            item: "Lunch".into(),
            price: "".into(),
            category: "Food".into(),
        };
        assert_eq!(form.submit(), Err(ExpenseFormError::Incomplete));

        let form = ExpenseForm {
            price: "abc".into(),
            ..form
        };
        assert_eq!(form.submit(), Err(ExpenseFormError::InvalidPrice));
    }

    #[test]
    fn expense_form_builds_payload() {
        let form = ExpenseForm {
            item: " Lunch ".into(),
            price: "12.5".into(),
            category: "Food".into(),
        };
        let expense = form.submit().unwrap();
        assert_eq!(expense.expense_item.item, "Lunch");
        assert_eq!(expense.expense_item.price, 12.5);
        assert_eq!(expense.category.category_name, "Food");
    }

    #[test]
    fn category_names_are_trimmed() {
        assert_eq!(category_name("  Rent "), Some("Rent".to_string()));
        assert_eq!(category_name("   "), None);
    }

    #[test]
    fn items_without_id_cannot_be_deleted() {
        let item = ExpenseItem {
            id: None,
            item: "Bus".into(),
            price: 2.0,
            category: CategoryRef {
                category_name: "Travel".into(),
            },
        };
        assert_eq!(item.delete_key(), None);
    }
}
