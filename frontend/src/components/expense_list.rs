use yew::prelude::*;

use crate::budget::format_money;
use crate::models::{ExpenseItem, RecordId};

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub items: Vec<ExpenseItem>,
    pub on_delete: Callback<RecordId>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    if props.items.is_empty() {
        return html! {
            <div class="expenses-list">
                <div class="empty-state">{"No expenses yet. Add your first expense above!"}</div>
            </div>
        };
    }

    html! {
        <div class="expenses-list">
            { for props.items.iter().enumerate().map(|(idx, exp)| {
                // position is only a render key, never a delete target
                let key = match &exp.id {
                    Some(id) => format!("id-{}", id),
                    None => format!("pos-{}", idx),
                };
                let delete = exp.delete_key().map(|id| {
                    let on_delete = props.on_delete.clone();
                    html! {
                        <button class="delete-btn" title="Delete expense"
                            onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))}>
                            {"×"}
                        </button>
                    }
                });

                html! {
                    <div key={key} class="expense-item">
                        <div class="expense-info">
                            <div class="expense-name">{ &exp.item }</div>
                            <div class="expense-meta">
                                <span class="expense-category">{ &exp.category.category_name }</span>
                            </div>
                        </div>
                        <div class="expense-actions">
                            <div class="expense-price">{ format_money(exp.price) }</div>
                            { delete.unwrap_or_default() }
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
