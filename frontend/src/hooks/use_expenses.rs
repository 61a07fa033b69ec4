use shared::{next_expense_id, remove_expense, Expense, NewExpense};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Snapshot of the parent-owned collection for the current render.
#[derive(Clone, PartialEq)]
pub struct ExpensesState {
    pub expenses: Vec<Expense>,
}

/// Callbacks children use to request mutations. The collection itself is
/// never handed out mutably.
#[derive(Clone)]
pub struct UseExpensesActions {
    pub add_expense: Callback<NewExpense>,
    pub delete_expense: Callback<u64>,
}

pub struct UseExpensesResult {
    pub state: ExpensesState,
    pub actions: UseExpensesActions,
}

/// Owns the expense collection and id assignment. Children receive records
/// as plain data and report add/delete intents through the action
/// callbacks; no child ever keeps its own copy of the collection.
#[hook]
pub fn use_expenses(initial: Vec<Expense>) -> UseExpensesResult {
    let start_id = next_expense_id(&initial);
    let expenses = use_state(move || initial);
    let next_id = use_state(move || start_id);

    let add_expense = {
        let expenses = expenses.clone();
        let next_id = next_id.clone();

        Callback::from(move |payload: NewExpense| {
            let id = *next_id;
            let mut updated = (*expenses).clone();
            updated.push(Expense::from_new(id, payload));
            expenses.set(updated);
            next_id.set(id + 1);
            Logger::info_with_component("use-expenses", &format!("Added expense {}", id));
        })
    };

    let delete_expense = {
        let expenses = expenses.clone();

        Callback::from(move |id: u64| {
            expenses.set(remove_expense(&expenses, id));
            Logger::info_with_component("use-expenses", &format!("Deleted expense {}", id));
        })
    };

    UseExpensesResult {
        state: ExpensesState {
            expenses: (*expenses).clone(),
        },
        actions: UseExpensesActions {
            add_expense,
            delete_expense,
        },
    }
}
