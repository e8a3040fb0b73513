use serde::{Deserialize, Serialize};

/// Parsed body of one event query. Deserialization is the shape check: a body
/// that is valid JSON but missing these fields is rejected at parse time.
#[derive(Deserialize, Debug, Clone)]
pub struct EventsResponse {
    pub data: EventsData,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EventsData {
    pub events: Vec<Event>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Event {
    pub id: String,
    pub tokens: Vec<Token>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    pub mint_order: i64,
    pub transfer_count: i64,
    // Aliased in the query; empty and absent mean the same thing.
    #[serde(default)]
    pub first_transfer: Vec<Transfer>,
    pub owner: Account,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Transfer {
    pub id: String,
    pub timestamp: String,
    pub from: Account,
    pub to: Account,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Account {
    pub id: String,
}

/// Column order of the output file.
pub const CSV_HEADER: [&str; 9] = [
    "event_id",
    "token_id",
    "mint_order",
    "transfer_count",
    "first_transfer_id",
    "first_transfer_timestamp",
    "first_transfer_from",
    "first_transfer_to",
    "current_owner",
];

/// One output record, one per token. A token without a first transfer gets
/// empty strings in the four transfer columns, never an omitted field.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct FlatRow {
    pub event_id: String,
    pub token_id: String,
    pub mint_order: i64,
    pub transfer_count: i64,
    pub first_transfer_id: String,
    pub first_transfer_timestamp: String,
    pub first_transfer_from: String,
    pub first_transfer_to: String,
    pub current_owner: String,
}
