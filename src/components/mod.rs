pub(crate) mod filter_bar;
pub(crate) mod pagination_strip;
pub(crate) mod user_cards;
pub(crate) mod users_table;
