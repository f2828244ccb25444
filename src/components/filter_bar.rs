use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::format;
use crate::query::DraftFilter;
use crate::state::AppState;

const COUNTRIES: [(&str, &str); 8] = [
    ("UZ", "Uzbekistan"),
    ("RU", "Russia"),
    ("KZ", "Kazakhstan"),
    ("KG", "Kyrgyzstan"),
    ("US", "USA"),
    ("DE", "Germany"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
];

const INPUT_CLASS: &str =
    "border border-gray-300 rounded-lg px-3 py-2 text-sm bg-white focus:outline-none focus:border-blue-400";

/// Форма фильтров. Инпуты редактируют черновик; в активный запрос он
/// попадает только по сабмиту (кнопка или Enter в поле поиска).
#[component]
pub(crate) fn FilterBar(state: AppState) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let age_min = RwSignal::new(String::new());
    let age_max = RwSignal::new(String::new());

    let query = state.query;
    let loading = state.loading;

    let on_filter = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = DraftFilter {
            search: search.get(),
            country: country.get(),
            age_min: age_min.get(),
            age_max: age_max.get(),
        };
        query.update(|q| *q = q.commit_filter(&draft));
    };

    view! {
        <form class="flex flex-wrap items-center gap-3 mb-5" on:submit=on_filter>
            <input
                type="text"
                placeholder="search username or name"
                class=format!("{INPUT_CLASS} min-w-[200px]")
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <div class="flex flex-wrap items-center gap-3 ml-auto">
                <select
                    class=INPUT_CLASS
                    prop:value=move || country.get()
                    on:change=move |ev| country.set(event_target_value(&ev))
                >
                    <option value="">"All countries"</option>
                    {COUNTRIES
                        .into_iter()
                        .map(|(code, label)| {
                            view! {
                                <option value=code>
                                    {format!("{} {label}", format::country_flag(code))}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <div class="flex items-center gap-2">
                    <input
                        type="number"
                        placeholder="start age"
                        class=format!("{INPUT_CLASS} w-24")
                        prop:value=move || age_min.get()
                        on:input=move |ev| age_min.set(event_target_value(&ev))
                    />
                    <span class="text-gray-400">"-"</span>
                    <input
                        type="number"
                        placeholder="end age"
                        class=format!("{INPUT_CLASS} w-24")
                        prop:value=move || age_max.get()
                        on:input=move |ev| age_max.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="px-5 py-2 bg-gray-900 text-white text-sm font-semibold rounded-lg hover:bg-gray-700 cursor-pointer"
                    disabled=move || loading.get()
                >
                    "Filter"
                </button>
            </div>
        </form>
    }
}
