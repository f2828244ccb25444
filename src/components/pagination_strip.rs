use leptos::prelude::*;

use crate::pagination::{PageItem, page_items};
use crate::state::AppState;

fn edge_button_class(disabled: bool) -> String {
    let tone = if disabled {
        "text-gray-300 border-gray-200"
    } else {
        "bg-white border-gray-300 hover:border-blue-400"
    };
    format!("min-w-[34px] h-[34px] px-2 text-sm rounded-lg border cursor-pointer {tone}")
}

fn page_button_class(active: bool) -> String {
    let tone = if active {
        "bg-blue-500 border-blue-500 text-white font-bold"
    } else {
        "bg-white border-gray-300 hover:border-blue-400"
    };
    format!("min-w-[34px] h-[34px] px-2 text-sm rounded-lg border cursor-pointer {tone}")
}

/// Полоса страниц с многоточиями. При одной странице (или без страниц)
/// не рендерится вовсе.
#[component]
pub(crate) fn PaginationStrip(state: AppState) -> impl IntoView {
    let query = state.query;
    let pages_count = state.pages_count;

    let go_to = move |page: u32| {
        let count = pages_count.get_untracked();
        query.update(|q| *q = q.with_page(page, count));
    };

    let strip = move || {
        let page = query.get().page;
        page_items(page, pages_count.get())
            .into_iter()
            .map(|item| match item {
                PageItem::Ellipsis => {
                    view! { <span class="px-1 text-gray-400">"..."</span> }.into_any()
                }
                PageItem::Page(n) => {
                    let active = n == page;
                    view! {
                        <button class=page_button_class(active) on:click=move |_| go_to(n)>
                            {n}
                        </button>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || pages_count.get() > 1>
            <div class="mx-auto flex items-center gap-1">
                <button
                    class=move || edge_button_class(query.get().page == 1)
                    disabled=move || query.get().page == 1
                    on:click=move |_| {
                        let page = query.get_untracked().page;
                        go_to(page.saturating_sub(1));
                    }
                >
                    "Prev"
                </button>
                {strip}
                <button
                    class=move || edge_button_class(query.get().page == pages_count.get())
                    disabled=move || query.get().page == pages_count.get()
                    on:click=move |_| {
                        let page = query.get_untracked().page;
                        go_to(page + 1);
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
