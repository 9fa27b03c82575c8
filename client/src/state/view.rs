//! Renderable message descriptions for the chat transcript.
//!
//! Components match on [`MessageView`] exhaustively; nothing here touches the
//! document, so rendering decisions are unit-tested directly.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use charts::format::format_currency;
use protocol::{AgentAction, AgentOutcome, ChartImage, Record, Reply, VisualizationReply, classify, status_error_message};

/// One transcript bubble.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageView {
    /// Query text typed by the user.
    User { text: String },
    /// Status, warning and error lines.
    System { text: String },
    /// Agent reply, optionally with an action summary.
    Agent { text: String, action: Option<ActionView> },
    /// Insights reply with optional chart, SQL and data sections.
    Visualization(VisualizationView),
}

/// Summary of an action the agent performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionView {
    MenuItemAdded {
        name: String,
        category: String,
        price: String,
        availability: String,
    },
    Completed { summary: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualizationView {
    pub insights: String,
    pub chart: Option<ChartView>,
    pub sql: Option<String>,
    pub data: Vec<Record>,
}

/// An inline chart image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartView {
    pub src: String,
    pub alt: String,
}

/// View for one `/agent` round trip that produced a body.
///
/// Non-2xx statuses become a system line built from the body's `error`;
/// 2xx bodies are classified and rendered.
#[must_use]
pub fn render_outcome(outcome: &AgentOutcome, currency_symbol: &str) -> MessageView {
    if outcome.ok {
        render_reply(&classify(&outcome.body), currency_symbol)
    } else {
        MessageView::System {
            text: status_error_message(&outcome.body),
        }
    }
}

#[must_use]
pub fn render_reply(reply: &Reply, currency_symbol: &str) -> MessageView {
    match reply {
        Reply::Error(message) => MessageView::System {
            text: format!("Error: {message}"),
        },
        Reply::Agent(agent) => MessageView::Agent {
            text: agent.message.clone(),
            action: agent.action.as_ref().map(|action| render_agent_action(action, currency_symbol)),
        },
        Reply::Visualization(vis) => MessageView::Visualization(render_visualization(vis)),
    }
}

/// Menu-item details for `add_menu_item`, a generic completion line for
/// anything else.
#[must_use]
pub fn render_agent_action(action: &AgentAction, currency_symbol: &str) -> ActionView {
    match action.added_menu_item() {
        Some(item) => ActionView::MenuItemAdded {
            name: item.name.clone(),
            category: item.category.clone(),
            price: format_currency(item.price, currency_symbol),
            availability: item.availability().to_owned(),
        },
        None => ActionView::Completed {
            summary: format!("Action completed: {}", action.name),
        },
    }
}

fn render_visualization(vis: &VisualizationReply) -> VisualizationView {
    VisualizationView {
        insights: vis.insights.clone(),
        chart: vis.chart.as_ref().map(chart_view),
        sql: vis.sql.clone(),
        data: vis.data.clone(),
    }
}

fn chart_view(image: &ChartImage) -> ChartView {
    ChartView {
        src: format!("data:image/png;base64,{}", image.base64_png),
        alt: image
            .chart_type
            .as_deref()
            .map_or_else(|| "Chart".to_owned(), |kind| format!("{kind} Chart")),
    }
}
