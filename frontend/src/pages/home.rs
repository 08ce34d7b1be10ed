//! Dashboard: spending gauge, add-expense form and the expense list.

use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{ApiHandle, Route};
use crate::budget::Totals;
use crate::components::{ExpenseList, Gauge, ProfileMenu};
use crate::dashboard::{
    category_name, DashboardAction, DashboardModel, DashboardView, ExpenseForm, FetchSequence,
    Mutation, UNAUTHORIZED,
};
use crate::models::RecordId;
use crate::session;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let api = use_context::<ApiHandle>().unwrap_or_default();
    let model = use_reducer(DashboardModel::default);
    let sequence = use_mut_ref(FetchSequence::default);
    let form = use_state(ExpenseForm::default);
    let show_add_category = use_state(|| false);
    let new_category = use_state(String::new);

    // every mutation funnels back through here once it has resolved
    let refresh = {
        let api = api.clone();
        let model = model.clone();
        Callback::from(move |_: ()| {
            let ticket = sequence.borrow().issue();
            let api = api.clone();
            let model = model.clone();
            spawn_local(async move {
                let result = api.fetch_dashboard().await;
                model.dispatch(DashboardAction::Loaded { ticket, result });
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |_| {
                refresh.emit(());
                || ()
            },
            (),
        );
    }

    let on_add_category = {
        let api = api.clone();
        let model = model.clone();
        let refresh = refresh.clone();
        let show_add_category = show_add_category.clone();
        let new_category = new_category.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(name) = category_name(&new_category) else {
                return;
            };
            let api = api.clone();
            let model = model.clone();
            let refresh = refresh.clone();
            let show_add_category = show_add_category.clone();
            let new_category = new_category.clone();
            spawn_local(async move {
                match api.add_category(&name).await {
                    Ok(_) => {
                        new_category.set(String::new());
                        show_add_category.set(false);
                        refresh.emit(());
                    }
                    Err(error) => model.dispatch(DashboardAction::MutationFailed {
                        mutation: Mutation::AddCategory,
                        error,
                    }),
                }
            });
        })
    };

    let on_add_expense = {
        let api = api.clone();
        let model = model.clone();
        let refresh = refresh.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let expense = match form.submit() {
                Ok(expense) => expense,
                Err(err) => {
                    model.dispatch(DashboardAction::Notice(err.to_string()));
                    return;
                }
            };
            let api = api.clone();
            let model = model.clone();
            let refresh = refresh.clone();
            let form = form.clone();
            spawn_local(async move {
                match api.add_expense(&expense).await {
                    Ok(_) => {
                        form.set(ExpenseForm::default());
                        refresh.emit(());
                    }
                    Err(error) => model.dispatch(DashboardAction::MutationFailed {
                        mutation: Mutation::AddExpense,
                        error,
                    }),
                }
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let model = model.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: RecordId| {
            let api = api.clone();
            let model = model.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api.delete_expense(&id).await {
                    Ok(()) => refresh.emit(()),
                    Err(error) => model.dispatch(DashboardAction::MutationFailed {
                        mutation: Mutation::DeleteExpense,
                        error,
                    }),
                }
            });
        })
    };

    let on_logout = {
        let api = api.clone();
        Callback::from(move |_: ()| {
            session::logout(api.tokens());
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href("/login") {
                    warn!("failed to navigate to login: {err:?}");
                }
            }
        })
    };

    let snapshot = match model.view() {
        DashboardView::Loading => {
            return html! {
                <div class="page-container">
                    <div class="loading-message">{"Loading..."}</div>
                </div>
            };
        }
        DashboardView::Failed(error) => {
            return html! {
                <div class="page-container">
                    <div class="error-message">
                        { error.to_string() }
                        if error == UNAUTHORIZED {
                            {" "}
                            <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                        }
                    </div>
                </div>
            };
        }
        DashboardView::Ready(snapshot) => snapshot.clone(),
    };

    let totals = Totals::from_snapshot(&snapshot);

    let on_item = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ExpenseForm {
                item: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_price = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ExpenseForm {
                price: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ExpenseForm {
                category: select.value(),
                ..(*form).clone()
            });
        })
    };

    let toggle_add_category = {
        let show_add_category = show_add_category.clone();
        Callback::from(move |_: MouseEvent| show_add_category.set(!*show_add_category))
    };

    let on_new_category = {
        let new_category = new_category.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_category.set(input.value());
        })
    };

    let dismiss_notice = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(DashboardAction::DismissNotice))
    };

    html! {
        <div class="page-container">
            <ProfileMenu on_logout={on_logout} />

            <div class="content-wrapper">
                <div class="main-card">
                    <Gauge totals={totals} />

                    if let Some(notice) = &model.notice {
                        <div class="notice-banner">
                            <span>{ notice.clone() }</span>
                            <button class="notice-dismiss" onclick={dismiss_notice}>{"×"}</button>
                        </div>
                    }

                    <div class="add-expense-section">
                        <h2 class="section-title">{"Add New Expense"}</h2>
                        <div class="expense-form">
                            <div class="form-row">
                                <input type="text" class="form-input" placeholder="Item name"
                                    value={form.item.clone()} oninput={on_item} />
                                <input type="number" step="0.01" class="form-input" placeholder="Price"
                                    value={form.price.clone()} oninput={on_price} />
                            </div>

                            <div class="form-row">
                                <select class="form-select" onchange={on_category}>
                                    <option value="" selected={form.category.is_empty()}>{"Select category"}</option>
                                    { for snapshot.categories.iter().map(|cat| html! {
                                        <option key={cat.category_name.clone()}
                                            value={cat.category_name.clone()}
                                            selected={form.category == cat.category_name}>
                                            { &cat.category_name }
                                        </option>
                                    }) }
                                </select>
                                <button type="button" class="category-btn" onclick={toggle_add_category}>
                                    {"+ Category"}
                                </button>
                            </div>

                            if *show_add_category {
                                <div class="category-popup">
                                    <input type="text" class="category-input" placeholder="New category name"
                                        value={(*new_category).clone()} oninput={on_new_category} />
                                    <button class="category-save-btn" onclick={on_add_category}>{"Save"}</button>
                                </div>
                            }

                            <button class="add-btn" onclick={on_add_expense}>{"Add Expense"}</button>
                        </div>
                    </div>

                    <div class="expenses-section">
                        <h2 class="section-title">{"Recent Expenses"}</h2>
                        <ExpenseList items={snapshot.expense_items.clone()} on_delete={on_delete} />
                    </div>
                </div>
            </div>
        </div>
    }
}
