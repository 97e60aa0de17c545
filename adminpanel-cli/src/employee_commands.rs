use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::sync::Arc;

use adminpanel_core::{EmployeeApprovalPanel, PanelView};
use adminpanel_types::Employee;

use crate::commands::{report, Context};

fn panel(ctx: &Context) -> EmployeeApprovalPanel {
    EmployeeApprovalPanel::new(Arc::clone(&ctx.api), ctx.panel)
}

pub async fn list_employees(ctx: &Context, filter: Option<String>, json: bool) -> Result<()> {
    let mut panel = panel(ctx);
    let loaded = panel.load().await;
    if loaded.is_err() {
        return report(panel.status(), loaded);
    }
    if let Some(filter) = filter {
        panel.set_filter(filter);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&panel.visible())?);
        return Ok(());
    }

    match panel.view() {
        PanelView::Rows(rows) => {
            println!("{}", employee_table(&rows));
            println!("\n{} of {} pending employees shown", rows.len(), panel.items().len());
        }
        PanelView::NoMatches => {
            println!("{}", format!("No employees match {:?}.", panel.filter()).yellow());
        }
        PanelView::Empty | PanelView::Loading => {
            println!("{}", "No employees awaiting approval.".yellow());
        }
    }
    Ok(())
}

fn employee_table(rows: &[&Employee]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "ID",
        "Name",
        "Employee ID",
        "Email",
        "Phone",
        "Department",
        "Position",
        "Joined",
    ]);

    for emp in rows {
        table.add_row(vec![
            Cell::new(&emp.id),
            Cell::new(&emp.name),
            Cell::new(&emp.employee_id),
            Cell::new(&emp.email),
            Cell::new(&emp.phone),
            Cell::new(&emp.department),
            Cell::new(&emp.position),
            Cell::new(&emp.join_date),
        ]);
    }
    table
}

pub async fn approve_employee(ctx: &Context, id: &str) -> Result<()> {
    let mut panel = panel(ctx);
    let result = panel.approve(id).await;
    report(panel.status(), result)
}

pub async fn reject_employee(ctx: &Context, id: &str) -> Result<()> {
    let mut panel = panel(ctx);
    let result = panel.reject(id).await;
    report(panel.status(), result)
}
