use crate::models::{EventsResponse, FlatRow};

/// Flatten one event query response into rows, one per token, in event then
/// token order. Total over parsed input: shape errors were already rejected
/// during deserialization.
pub fn flatten(response: &EventsResponse) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    for event in &response.data.events {
        for token in &event.tokens {
            let first_transfer = token.first_transfer.first();
            rows.push(FlatRow {
                event_id: event.id.clone(),
                token_id: token.id.clone(),
                mint_order: token.mint_order,
                transfer_count: token.transfer_count,
                first_transfer_id: first_transfer.map_or(String::new(), |t| t.id.clone()),
                first_transfer_timestamp: first_transfer
                    .map_or(String::new(), |t| t.timestamp.clone()),
                first_transfer_from: first_transfer.map_or(String::new(), |t| t.from.id.clone()),
                first_transfer_to: first_transfer.map_or(String::new(), |t| t.to.id.clone()),
                current_owner: token.owner.id.clone(),
            });
        }
    }
    rows
}
