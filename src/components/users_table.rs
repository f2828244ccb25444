use leptos::prelude::*;

use crate::format;
use crate::models::UserRecord;
use crate::state::AppState;

/// Колонки таблицы; `Some(field)` — колонка сортируемая.
const COLUMNS: [(&str, Option<&str>); 11] = [
    ("Foydalanuvchi", None),
    ("Nomi", None),
    ("Davlat", None),
    ("Yosh", None),
    ("Ko'nikmalar", Some("skills_rating")),
    ("Faollik", Some("activity_rating")),
    ("Kontestlar", None),
    ("Bellashuvlar", None),
    ("Streak", None),
    ("Kepcoin", Some("kepcoin")),
    ("Oxirgi kirish", None),
];

const TH_CLASS: &str =
    "px-4 py-3 text-left text-xs font-semibold text-gray-500 uppercase whitespace-nowrap select-none";

fn skeleton_rows(count: u32) -> AnyView {
    (0..count)
        .map(|_| {
            view! {
                <tr class="border-b border-gray-100">
                    <td class="px-4 py-3">
                        <div class="flex gap-3 items-center">
                            <div class="w-10 h-10 rounded-full bg-gray-200 animate-pulse shrink-0"></div>
                            <div class="h-3 w-24 bg-gray-200 animate-pulse rounded"></div>
                        </div>
                    </td>
                    {(0..10)
                        .map(|_| {
                            view! {
                                <td class="px-4 py-3">
                                    <div class="h-3 w-16 bg-gray-200 animate-pulse rounded"></div>
                                </td>
                            }
                        })
                        .collect_view()}
                </tr>
            }
        })
        .collect_view()
        .into_any()
}

fn user_row(user: UserRecord) -> AnyView {
    let name = format::full_name(user.first_name.as_deref(), user.last_name.as_deref());
    let avatar = user
        .avatar
        .clone()
        .unwrap_or_else(|| "/default-avatar.png".to_string());
    let flag = format::country_flag(user.country.as_deref().unwrap_or_default());

    view! {
        <tr class="border-b border-gray-100 hover:bg-blue-50/40 transition-colors">
            <td class="px-4 py-3">
                <div class="flex items-center gap-3 min-w-[160px]">
                    <img src=avatar class="w-10 h-10 rounded-full object-cover shrink-0" />
                    <div>
                        <div class="font-semibold text-sm">
                            {format::text_or_dash(user.username.as_deref())}
                        </div>
                        <div class="text-xs text-gray-400">{name.clone()}</div>
                    </div>
                </div>
            </td>
            <td class="px-4 py-3 text-sm whitespace-nowrap">{name}</td>
            <td class="px-4 py-3 text-lg">{flag}</td>
            <td class="px-4 py-3 text-sm">{format::number_or_dash(user.age.map(i64::from))}</td>
            <td class="px-4 py-3">
                <span class="bg-blue-500 text-white text-xs font-bold px-3 py-1 rounded-full">
                    {format::number_or_dash(user.skills_rating)}
                </span>
            </td>
            <td class="px-4 py-3">
                <span class="bg-orange-400 text-white text-xs font-bold px-3 py-1 rounded-full">
                    {format::number_or_dash(user.activity_rating)}
                </span>
            </td>
            <td class="px-4 py-3 text-sm">
                {format!("🏆 {}", format::count_or_zero(user.contests_count))}
            </td>
            <td class="px-4 py-3 text-sm">
                {format!("⚔️ {}", format::count_or_zero(user.bellashuvlar_count))}
            </td>
            <td class="px-4 py-3 text-sm">
                {format!("🔥 {}", format::count_or_zero(user.streak))}
            </td>
            <td class="px-4 py-3 text-sm font-semibold">
                {format!("⭐ {}", format::count_or_zero(user.kepcoin))}
            </td>
            <td class="px-4 py-3 text-xs text-gray-400 whitespace-nowrap">
                {format::text_or_dash(user.last_seen.as_deref())}
            </td>
        </tr>
    }
    .into_any()
}

/// Десктопная таблица; на мобильной ширине скрыта, там карточки.
#[component]
pub(crate) fn UsersTable(state: AppState) -> impl IntoView {
    let query = state.query;
    let users = state.users;
    let loading = state.loading;

    let header_cells = move || {
        let q = query.get();
        COLUMNS
            .iter()
            .map(|&(label, field)| match field {
                Some(field) => {
                    let marker = q.sort_marker(field);
                    view! {
                        <th
                            class=format!("{TH_CLASS} cursor-pointer hover:text-gray-800")
                            on:click=move |_| query.update(|q| *q = q.toggle_sort(field))
                        >
                            {label}
                            <span class="ml-1 text-gray-400">{marker}</span>
                        </th>
                    }
                    .into_any()
                }
                None => view! { <th class=TH_CLASS>{label}</th> }.into_any(),
            })
            .collect_view()
    };

    let body = move || {
        if loading.get() {
            skeleton_rows(query.get().page_size)
        } else if users.get().is_empty() {
            view! {
                <tr>
                    <td colspan="11" class="text-center py-16 text-gray-400">
                        "🔍 Hech narsa topilmadi"
                    </td>
                </tr>
            }
            .into_any()
        } else {
            users.get().into_iter().map(user_row).collect_view().into_any()
        }
    };

    view! {
        <div class="hidden md:block overflow-x-auto rounded-xl shadow-sm bg-white">
            <table class="w-full border-collapse">
                <thead>
                    <tr class="border-b border-gray-200 bg-gray-50">{header_cells}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
