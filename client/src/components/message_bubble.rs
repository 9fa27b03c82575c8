//! Transcript bubble rendering one [`MessageView`].

use leptos::prelude::*;

use crate::components::chart_actions::{ChartActions, DataTableToggle};
use crate::state::view::{ActionView, MessageView, VisualizationView};

/// A single transcript entry.
#[component]
pub fn MessageBubble(message: MessageView) -> impl IntoView {
    match message {
        MessageView::User { text } => view! {
            <div class="message user">
                <div class="message-content">
                    <p>{text}</p>
                </div>
            </div>
        }
        .into_any(),
        MessageView::System { text } => view! {
            <div class="message system">
                <div class="message-content">
                    <p>{text}</p>
                </div>
            </div>
        }
        .into_any(),
        MessageView::Agent { text, action } => view! {
            <div class="message ai agent">
                <div class="message-content">
                    <p class="agent-response">{text}</p>
                    {action.map(|action| view! { <ActionResult action=action/> })}
                </div>
            </div>
        }
        .into_any(),
        MessageView::Visualization(vis) => view! { <VisualizationMessage vis=vis/> }.into_any(),
    }
}

#[component]
fn ActionResult(action: ActionView) -> impl IntoView {
    let details = match action {
        ActionView::MenuItemAdded {
            name,
            category,
            price,
            availability,
        } => view! {
            <p><strong>"Item: "</strong>{name}</p>
            <p><strong>"Category: "</strong>{category}</p>
            <p><strong>"Price: "</strong>{price}</p>
            <p><strong>"Availability: "</strong>{availability}</p>
        }
        .into_any(),
        ActionView::Completed { summary } => view! { <p>{summary}</p> }.into_any(),
    };

    view! {
        <div class="action-result">
            <div class="action-details">{details}</div>
        </div>
    }
}

#[component]
fn VisualizationMessage(vis: VisualizationView) -> impl IntoView {
    let VisualizationView {
        insights,
        chart,
        sql,
        data,
    } = vis;
    let table_data = (!data.is_empty()).then(|| data.clone());

    view! {
        <div class="message ai">
            <div class="message-content">
                <p class="insights">{insights}</p>
                {chart.map(|chart| {
                    let src = chart.src.clone();
                    view! {
                        <div class="visualization">
                            <img src=chart.src alt=chart.alt/>
                            <ChartActions src=src data=data/>
                        </div>
                    }
                })}
                {sql.map(|sql| {
                    view! {
                        <div class="sql-container">
                            <pre class="sql-query">{sql}</pre>
                        </div>
                    }
                })}
                {table_data.map(|rows| view! { <DataTableToggle data=rows/> })}
            </div>
        </div>
    }
}
