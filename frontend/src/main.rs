use shared::{total_amount, Category, Expense};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ExpenseForm, ExpenseList};
use hooks::use_expenses;
use services::logging::Logger;

/// Starting collection for a fresh session. The parent owns these records
/// and assigned every id; nothing below the App ever holds its own copy.
fn seed_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: 1,
            description: "Groceries".to_string(),
            amount: 54.30,
            category: Category::Food,
            date: "2024-01-12".to_string(),
        },
        Expense {
            id: 2,
            description: "Bus pass".to_string(),
            amount: 25.00,
            category: Category::Transportation,
            date: "2024-01-13".to_string(),
        },
        Expense {
            id: 3,
            description: "Movie night".to_string(),
            amount: 18.50,
            category: Category::Entertainment,
            date: "2024-01-14".to_string(),
        },
    ]
}

#[function_component(App)]
fn app() -> Html {
    let expenses = use_expenses(seed_expenses());

    use_effect_with((), |_| {
        Logger::info_with_component("app", "Expense tracker mounted");
        || ()
    });

    let count = expenses.state.expenses.len();
    let overall_total = total_amount(&expenses.state.expenses);

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Expense Tracker"}</h1>
                    <div class="balance-display">
                        <span class="balance-label">
                            {format!("{} expenses", count)}
                        </span>
                        <span class="balance-amount">
                            {format!("${:.2}", overall_total)}
                        </span>
                    </div>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <ExpenseForm on_submit={expenses.actions.add_expense.clone()} />
                    <ExpenseList
                        expenses={expenses.state.expenses.clone()}
                        on_delete_expense={expenses.actions.delete_expense.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
