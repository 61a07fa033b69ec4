use shared::{
    validate_draft, Category, ExpenseDraft, ExpenseField, FieldErrors, NewExpense,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::date_utils::get_current_date;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// Receives the normalized payload of each accepted submit. Id
    /// assignment is the receiver's job.
    pub on_submit: Callback<NewExpense>,
}

/// Expense entry form. Holds the draft and its per-field error messages;
/// submit either reports every failing field inline or emits the payload
/// exactly once and resets the draft. Editing a field clears only that
/// field's error, so the user can correct incrementally.
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let draft = use_state(ExpenseDraft::default);
    let errors = use_state(FieldErrors::default);
    let submitted = use_state(|| false);

    // Each edit handler updates one draft field and clears that field's
    // stored error; the rest stay until the next submit attempt.
    let edit_field = |apply: fn(&mut ExpenseDraft, String), field: ExpenseField| {
        let draft = draft.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        move |value: String| {
            let mut updated = (*draft).clone();
            apply(&mut updated, value);
            draft.set(updated);

            let mut cleared = (*errors).clone();
            cleared.clear(field);
            errors.set(cleared);
            submitted.set(false);
        }
    };

    let on_description_input = {
        let edit = edit_field(|d, v| d.description = v, ExpenseField::Description);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };

    let on_amount_input = {
        let edit = edit_field(|d, v| d.amount = v, ExpenseField::Amount);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };

    let on_category_change = {
        let edit = edit_field(|d, v| d.category = v, ExpenseField::Category);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit(select.value());
        })
    };

    let on_date_change = {
        let edit = edit_field(|d, v| d.date = v, ExpenseField::Date);
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let result = validate_draft(&draft);
            match result.payload {
                Some(payload) => {
                    Logger::info_with_component(
                        "expense-form",
                        &format!("Submitting expense '{}'", payload.description),
                    );
                    on_submit.emit(payload);
                    draft.set(ExpenseDraft::default());
                    errors.set(FieldErrors::default());
                    submitted.set(true);
                }
                None => {
                    Logger::warn_with_component(
                        "expense-form",
                        &format!("Draft rejected with {} invalid fields", result.errors.len()),
                    );
                    errors.set(FieldErrors::from_errors(&result.errors));
                    submitted.set(false);
                }
            }
        })
    };

    let field_error = |field: ExpenseField| -> Html {
        match errors.get(field) {
            Some(message) => html! { <div class="field-error">{message}</div> },
            None => html! {},
        }
    };

    html! {
        <section class="add-expense-section">
            <h2>{"Add Expense"}</h2>

            {if *submitted {
                html! { <div class="form-message success">{"Expense added."}</div> }
            } else { html! {} }}

            <form class="expense-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <input
                        type="text"
                        id="description"
                        placeholder="What was it for?"
                        value={draft.description.clone()}
                        oninput={on_description_input}
                    />
                    {field_error(ExpenseField::Description)}
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount (dollars)"}</label>
                    <input
                        type="number"
                        id="amount"
                        placeholder="0.00"
                        step="0.01"
                        min="0.01"
                        value={draft.amount.clone()}
                        oninput={on_amount_input}
                    />
                    {field_error(ExpenseField::Amount)}
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select
                        id="category"
                        value={draft.category.clone()}
                        onchange={on_category_change}
                    >
                        {for Category::ALL.iter().map(|category| {
                            html! {
                                <option
                                    value={category.name()}
                                    selected={draft.category == category.name()}
                                >
                                    {category.name()}
                                </option>
                            }
                        })}
                    </select>
                    {field_error(ExpenseField::Category)}
                </div>

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        type="date"
                        id="date"
                        value={draft.date.clone()}
                        max={get_current_date()}
                        onchange={on_date_change}
                    />
                    {field_error(ExpenseField::Date)}
                </div>

                <button type="submit" class="btn btn-primary add-expense-btn">
                    {"Add Expense"}
                </button>
            </form>
        </section>
    }
}
