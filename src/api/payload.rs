use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pull the data array out of a `{ "data": ... }` response body.
///
/// Some deployments wrap it twice (`{ "data": { "data": [...] } }`); the inner
/// value wins in that case. A body without `data` yields `Null`.
pub fn unwrap_data(body: Value) -> Value {
    let mut data = match body {
        Value::Object(mut obj) => obj.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    };

    if let Value::Object(obj) = &mut data {
        if let Some(inner) = obj.remove("data") {
            return inner;
        }
    }
    data
}

/// Entry of the users sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub email: String,
    pub name: String,
}

/// Users come either as objects or as raw sheet rows (`[email, name]` after a header row)
pub fn parse_users(data: &Value) -> Vec<UserEntry> {
    let Some(items) = data.as_array() else {
        tracing::error!(payload = %data, "users payload is not an array");
        return Vec::new();
    };

    let rows_with_header = items.first().map(Value::is_array).unwrap_or(false);
    let skip = usize::from(rows_with_header);

    items
        .iter()
        .skip(skip)
        .filter_map(|item| match item {
            Value::Object(_) => serde_json::from_value::<UserEntry>(item.clone()).ok(),
            Value::Array(cells) => {
                let text = |i: usize| cells.get(i).and_then(Value::as_str).unwrap_or_default().trim().to_string();
                Some(UserEntry { email: text(0), name: text(1) })
            }
            _ => None,
        })
        .filter(|u| !u.email.is_empty())
        .collect()
}

/// Case-insensitive email lookup
pub fn find_user<'a>(users: &'a [UserEntry], email: &str) -> Option<&'a UserEntry> {
    let email = email.trim();
    users.iter().find(|u| u.email.trim().eq_ignore_ascii_case(email))
}
