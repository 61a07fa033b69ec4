use shared::{filter_expenses, total_amount, Category, CategoryFilter, Expense};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::expense_card::ExpenseCard;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    /// The full parent-owned collection, in parent order.
    pub expenses: Vec<Expense>,
    #[prop_or_default]
    pub on_delete_expense: Option<Callback<u64>>,
}

/// Filtered, aggregated view over the parent's collection. The filter is
/// the only state this component owns; the view and total are derived from
/// props on every render, so there is no snapshot to go stale.
#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let filter = use_state(|| CategoryFilter::All);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(select.value().parse().unwrap_or(CategoryFilter::All));
        })
    };

    let view = filter_expenses(&props.expenses, &filter);
    let total = total_amount(&view);
    // The category chip is redundant while a single category is selected.
    let show_category = *filter == CategoryFilter::All;

    html! {
        <section class="expenses-section">
            <div class="expenses-header">
                <h2>{"Expenses"}</h2>
                <div class="filter-group">
                    <label for="category-filter">{"Category:"}</label>
                    <select
                        id="category-filter"
                        value={filter.label()}
                        onchange={on_filter_change}
                    >
                        <option value="All" selected={*filter == CategoryFilter::All}>
                            {"All"}
                        </option>
                        {for Category::ALL.iter().map(|category| {
                            let selected = *filter == CategoryFilter::Category(category.clone());
                            html! {
                                <option value={category.name()} selected={selected}>
                                    {category.name()}
                                </option>
                            }
                        })}
                    </select>
                </div>
            </div>

            <div class="expenses-summary">
                <span class="expense-count">
                    {format!("Showing {} of {}", view.len(), props.expenses.len())}
                </span>
                <span class="expense-total">{format!("Total: ${:.2}", total)}</span>
            </div>

            {if view.is_empty() {
                html! { <div class="empty-message">{"No expenses to show."}</div> }
            } else {
                html! {
                    <div class="expense-cards">
                        {for view.iter().map(|expense| {
                            html! {
                                <ExpenseCard
                                    key={expense.id}
                                    expense={expense.clone()}
                                    on_delete={props.on_delete_expense.clone()}
                                    highlighted={expense.is_large()}
                                    show_category={show_category}
                                />
                            }
                        })}
                    </div>
                }
            }}
        </section>
    }
}
