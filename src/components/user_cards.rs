use leptos::prelude::*;

use crate::format;
use crate::models::UserRecord;
use crate::state::AppState;

fn user_card(user: UserRecord) -> AnyView {
    let name = format::full_name(user.first_name.as_deref(), user.last_name.as_deref());
    let avatar = user
        .avatar
        .clone()
        .unwrap_or_else(|| "/default-avatar.png".to_string());
    let flag = format::country_flag(user.country.as_deref().unwrap_or_default());

    view! {
        <div class="bg-white rounded-xl p-4 shadow-sm border border-gray-100">
            <div class="flex items-center gap-3 mb-3">
                <img src=avatar class="w-12 h-12 rounded-full object-cover shrink-0" />
                <div>
                    <div class="font-bold">{format::text_or_dash(user.username.as_deref())}</div>
                    <div class="text-xs text-gray-400">{name}</div>
                    <div class="text-lg">{flag}</div>
                </div>
            </div>
            <div class="grid grid-cols-2 gap-2 mb-3">
                <div>
                    <div class="text-xs text-gray-400">"Ko'nikmalar"</div>
                    <span class="bg-blue-500 text-white text-xs font-bold px-2.5 py-0.5 rounded-full">
                        {format::number_or_dash(user.skills_rating)}
                    </span>
                </div>
                <div>
                    <div class="text-xs text-gray-400">"Faollik"</div>
                    <span class="bg-orange-400 text-white text-xs font-bold px-2.5 py-0.5 rounded-full">
                        {format::number_or_dash(user.activity_rating)}
                    </span>
                </div>
                <div>
                    <div class="text-xs text-gray-400">"Kepcoin"</div>
                    <div class="text-sm font-semibold">
                        {format!("⭐ {}", format::count_or_zero(user.kepcoin))}
                    </div>
                </div>
                <div>
                    <div class="text-xs text-gray-400">"Streak"</div>
                    <div class="text-sm">
                        {format!("🔥 {}", format::count_or_zero(user.streak))}
                    </div>
                </div>
            </div>
            <div class="text-xs text-gray-400 border-t pt-2">
                {format::text_or_dash(user.last_seen.as_deref())}
            </div>
        </div>
    }
    .into_any()
}

/// Мобильный список карточек: те же данные и плейсхолдеры, что в таблице.
#[component]
pub(crate) fn UserCards(state: AppState) -> impl IntoView {
    let users = state.users;
    let loading = state.loading;

    let body = move || {
        if loading.get() {
            view! { <p class="text-center text-gray-400 py-10">"Yuklanmoqda..."</p> }.into_any()
        } else if users.get().is_empty() {
            view! {
                <p class="text-center text-gray-400 py-10">"🔍 Hech narsa topilmadi"</p>
            }
            .into_any()
        } else {
            users.get().into_iter().map(user_card).collect_view().into_any()
        }
    };

    view! { <div class="md:hidden space-y-3">{body}</div> }
}
