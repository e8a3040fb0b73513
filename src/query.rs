/// Build the GraphQL query for a single event: the event's tokens with their
/// mint order, transfer count, current owner and earliest transfer (ascending
/// by transfer id, limited to one result).
pub fn build_query(event_id: i64) -> String {
    format!(
        r#"
    {{
      events(where: {{ id: "{}" }}) {{
        id
        tokens {{
          id
          mintOrder
          transferCount
          firstTransfer: transfers(
            first: 1,
            orderBy: id,
            orderDirection: asc
          ) {{
            id
            timestamp
            from {{
              id
            }}
            to {{
              id
            }}
          }}
          owner {{
            id
          }}
        }}
      }}
    }}
    "#,
        event_id
    )
}
