//! Wire model for the POS assistant backend and response classification.
//!
//! This crate owns the request/response shapes of the `/agent` and `/health`
//! endpoints and is shared by the browser `client` and the host binary.
//! Response bodies are polymorphic and told apart only by field presence, so
//! they stay as `serde_json::Value` on the wire and are folded into the
//! [`Reply`] union by [`classify`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Action name the backend reports after creating a menu item.
pub const ADD_MENU_ITEM: &str = "add_menu_item";

/// Status string reported by a healthy backend.
pub const HEALTHY_STATUS: &str = "healthy";

/// Fallback shown when a non-2xx body carries no `error` field.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A single tabular record; key order is preserved from the wire.
pub type Record = Map<String, Value>;

/// Body of `POST /agent`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub query: String,
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Body of `GET /health`.
///
/// A missing, `null` or non-string `status` still decodes; it just is not
/// healthy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default, deserialize_with = "optional_text")]
    pub status: Option<String>,
}

impl HealthResponse {
    #[must_use]
    pub fn new(status: &str) -> Self {
        Self {
            status: Some(status.to_owned()),
        }
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some(HEALTHY_STATUS)
    }
}

/// Raw result of one `/agent` round trip: the HTTP success flag and the
/// decoded JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentOutcome {
    pub ok: bool,
    pub body: Value,
}

/// Conversation context carried between queries.
///
/// The identifier is handed out by the backend and lives for as long as the
/// page does. It is never mutated in place: [`Session::absorb`] returns the
/// session to use for the next request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    id: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Build the request body for a query, attaching the session id only once
    /// one has been obtained.
    #[must_use]
    pub fn request(&self, query: &str, merchant_id: &str) -> AgentRequest {
        AgentRequest {
            query: query.to_owned(),
            merchant_id: merchant_id.to_owned(),
            session_id: self.id.clone(),
        }
    }

    /// Return the session that follows `body`: the body's `session_id` when it
    /// carries a non-empty one, otherwise `self` unchanged.
    #[must_use]
    pub fn absorb(self, body: &Value) -> Self {
        match present(body.get("session_id")).and_then(Value::as_str) {
            Some(id) => Self {
                id: Some(id.to_owned()),
            },
            None => self,
        }
    }
}

/// A menu item created by the `add_menu_item` action.
///
/// Decoding is lenient: `null` text fields read as empty and the
/// availability flags follow the same truthiness rules as field presence.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MenuItem {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "truthy")]
    pub available_for_takeaway: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub available_for_delivery: bool,
}

impl MenuItem {
    #[must_use]
    pub fn availability(&self) -> &'static str {
        availability_label(self.available_for_takeaway, self.available_for_delivery)
    }
}

/// Human label for a menu item's fulfilment options.
#[must_use]
pub fn availability_label(takeaway: bool, delivery: bool) -> &'static str {
    match (takeaway, delivery) {
        (true, true) => "Takeaway, Delivery",
        (true, false) => "Takeaway",
        (false, true) => "Delivery",
        (false, false) => "Dine-in only",
    }
}

/// Structured action result attached to a successful agent reply.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentAction {
    pub name: String,
    pub menu_item: Option<MenuItem>,
}

impl AgentAction {
    /// The created menu item, when this is an `add_menu_item` action that
    /// carried one.
    #[must_use]
    pub fn added_menu_item(&self) -> Option<&MenuItem> {
        if self.name == ADD_MENU_ITEM {
            self.menu_item.as_ref()
        } else {
            None
        }
    }
}

/// Natural-language reply from the agent endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentReply {
    pub message: String,
    pub action: Option<AgentAction>,
}

/// Base64-encoded chart image from the legacy insights format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartImage {
    pub base64_png: String,
    pub chart_type: Option<String>,
}

/// Legacy insights/visualization reply. Every section is optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualizationReply {
    pub insights: String,
    pub chart: Option<ChartImage>,
    pub sql: Option<String>,
    pub data: Vec<Record>,
}

/// A classified `/agent` response body.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// Backend-reported failure, shown verbatim.
    Error(String),
    /// Agent reply with an optional action result.
    Agent(AgentReply),
    /// Legacy insights reply; also the fallback for unrecognised shapes.
    Visualization(VisualizationReply),
}

/// Classify a 2xx response body.
///
/// Precedence is fixed: `error` wins over `message`, and a body with neither
/// (including a non-object body) is treated as a visualization reply whose
/// absent sections are simply left empty.
#[must_use]
pub fn classify(body: &Value) -> Reply {
    if let Some(error) = present(body.get("error")) {
        return Reply::Error(value_text(error));
    }

    if let Some(message) = present(body.get("message")) {
        let succeeded = present(body.get("success")).is_some();
        let action = present(body.get("action_taken"))
            .filter(|_| succeeded)
            .map(|name| AgentAction {
                name: value_text(name),
                menu_item: present(body.get("menu_item"))
                    .and_then(|item| serde_json::from_value(item.clone()).ok()),
            });
        return Reply::Agent(AgentReply {
            message: value_text(message),
            action,
        });
    }

    Reply::Visualization(VisualizationReply {
        insights: present(body.get("insights")).map(value_text).unwrap_or_default(),
        chart: present(body.get("chartImage")).map(|image| ChartImage {
            base64_png: value_text(image),
            chart_type: present(body.get("chartType")).map(value_text),
        }),
        sql: present(body.get("sql")).map(value_text),
        data: body
            .get("data")
            .and_then(Value::as_array)
            .map(|rows| rows.iter().filter_map(|row| row.as_object().cloned()).collect())
            .unwrap_or_default(),
    })
}

/// Text shown for a non-2xx response: the body's `error` when present,
/// otherwise [`UNKNOWN_ERROR`].
#[must_use]
pub fn status_error_message(body: &Value) -> String {
    let detail = present(body.get("error")).map_or_else(|| UNKNOWN_ERROR.to_owned(), value_text);
    format!("An error occurred: {detail}")
}

/// Field presence with the backend's truthiness rules: `null`, `false`, `0`
/// and `""` count as absent.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| is_truthy(v))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => String::new(),
        Some(value) => value_text(&value),
    })
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.as_str().map(str::to_owned)))
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().is_some_and(is_truthy))
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
