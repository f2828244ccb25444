use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::filter_bar::FilterBar;
use crate::components::pagination_strip::PaginationStrip;
use crate::components::user_cards::UserCards;
use crate::components::users_table::UsersTable;
use crate::format;
use crate::query::{PAGE_SIZES, QueryState};
use crate::state::AppState;

/// Один запрос на одно значение `QueryState`. Ответ применяется, только если
/// за время полёта не был выдан более новый номер запроса.
fn load_users(state: AppState, query: QueryState) {
    let request_id = state.begin_request();
    state.loading.set(true);
    state.clear_error();

    spawn_local(async move {
        let result = api::fetch_users(&query).await;
        if !state.is_latest(request_id) {
            // Устаревший ответ: экраном уже владеет более новый запрос.
            return;
        }
        match result {
            Ok(page) => {
                state.users.set(page.data);
                state.total.set(page.total);
                state.pages_count.set(page.pages_count);
            }
            Err(err) => {
                web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!(
                    "users request failed: {err}"
                )));
                state.set_error(err.to_string());
            }
        }
        state.loading.set(false);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    // Перезапрос на каждое изменение query, включая первый рендер.
    Effect::new({
        let state = state.clone();
        move |_| {
            let query = state.query.get();
            load_users(state.clone(), query);
        }
    });

    let query = state.query;
    let total = state.total;
    let error = state.error;

    let range_text = move || {
        let q = query.get();
        let (from, to) = format::showing_range(q.page, q.page_size, total.get());
        format!("Showing {from}\u{2013}{to} of {}", total.get())
    };

    let error_text = move || error.get().unwrap_or_default();

    let on_retry = Callback::new({
        let state = state.clone();
        move |_| load_users(state.clone(), state.query.get_untracked())
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-screen-xl mx-auto px-4 py-8">
                <h1 class="text-center text-2xl font-bold mb-6">"User List"</h1>

                <FilterBar state=state.clone() />

                <Show when=move || error.get().is_some()>
                    <div class="flex items-center gap-3 mb-4 px-4 py-3 bg-red-50 border border-red-200 rounded-lg text-sm text-red-700">
                        <span>"Yuklab bo'lmadi: " {error_text}</span>
                        <button
                            class="ml-auto px-3 py-1 bg-red-600 text-white text-xs font-semibold rounded-lg hover:bg-red-500 cursor-pointer"
                            on:click=move |_| on_retry.run(())
                        >
                            "Qayta urinish"
                        </button>
                    </div>
                </Show>

                <UsersTable state=state.clone() />
                <UserCards state=state.clone() />

                <div class="flex flex-wrap items-center gap-4 mt-5">
                    <span class="text-sm text-gray-500">{range_text}</span>

                    <PaginationStrip state=state.clone() />

                    <div class="flex items-center gap-2 text-sm text-gray-500 ml-auto">
                        <span>"Per page:"</span>
                        <select
                            class="border border-gray-300 rounded-lg px-2 py-1 bg-white focus:outline-none"
                            prop:value=move || query.get().page_size.to_string()
                            on:change=move |ev| {
                                if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                                    query.update(|q| *q = q.with_page_size(size));
                                }
                            }
                        >
                            {PAGE_SIZES
                                .into_iter()
                                .map(|n| view! { <option value=n.to_string()>{n}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
            </div>
        </div>
    }
}
