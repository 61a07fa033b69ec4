use shared::Expense;
use yew::prelude::*;

use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct ExpenseCardProps {
    pub expense: Expense,
    /// When absent, the card renders no delete affordance at all.
    #[prop_or_default]
    pub on_delete: Option<Callback<u64>>,
    #[prop_or_default]
    pub highlighted: bool,
    #[prop_or(true)]
    pub show_category: bool,
}

/// Read-only view of a single expense record. Deletion is entirely
/// delegated: clicking the button emits the record's id once and mutates
/// nothing here. Malformed record content is rendered as given.
#[function_component(ExpenseCard)]
pub fn expense_card(props: &ExpenseCardProps) -> Html {
    let expense = &props.expense;

    let delete_button = props.on_delete.clone().map(|on_delete| {
        let id = expense.id;
        let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(id));
        html! {
            <button class="btn btn-danger delete-btn" onclick={onclick}>
                {"Delete"}
            </button>
        }
    });

    html! {
        <div class={classes!("expense-card",
            if props.highlighted { Some("highlighted") } else { None })}>
            <div class="expense-info">
                <span class="expense-description">{&expense.description}</span>
                {if props.show_category {
                    html! { <span class="expense-category">{expense.category.name()}</span> }
                } else { html! {} }}
                <span class="expense-date">{format_date_for_display(&expense.date)}</span>
            </div>
            <div class="expense-actions">
                <span class="expense-amount">{format!("${:.2}", expense.amount)}</span>
                {delete_button.unwrap_or_default()}
            </div>
        </div>
    }
}
