use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::sync::Arc;

use adminpanel_core::{FeedbackPanel, PanelView};
use adminpanel_types::Feedback;

use crate::commands::{report, Context};

fn panel(ctx: &Context) -> FeedbackPanel {
    FeedbackPanel::new(Arc::clone(&ctx.api), ctx.panel)
}

pub async fn list_feedback(ctx: &Context, json: bool) -> Result<()> {
    let mut panel = panel(ctx);
    let loaded = panel.load().await;
    if loaded.is_err() {
        return report(panel.status(), loaded);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(panel.items())?);
        return Ok(());
    }

    let PanelView::Rows(rows) = panel.view() else {
        println!("{}", "No feedback found.".yellow());
        return Ok(());
    };

    println!("{}", feedback_table(&rows));
    println!("\n{} entries total, {} pending", rows.len(), panel.pending().count());
    Ok(())
}

fn feedback_table(rows: &[&Feedback]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Rating", "Message", "Status"]);

    for fb in rows {
        let status = if fb.approved {
            Cell::new("Approved").fg(Color::Green)
        } else {
            Cell::new("Pending").fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(&fb.id),
            Cell::new(&fb.name),
            Cell::new(format!("{:.1}", fb.rating)),
            Cell::new(&fb.message),
            status,
        ]);
    }
    table
}

pub async fn approve_feedback(ctx: &Context, id: &str) -> Result<()> {
    let mut panel = panel(ctx);
    let result = panel.approve(id).await;
    report(panel.status(), result)
}

pub async fn delete_feedback(ctx: &Context, id: &str) -> Result<()> {
    let mut panel = panel(ctx);
    let result = panel.delete(id).await;
    report(panel.status(), result)
}
