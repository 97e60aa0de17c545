use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::sync::Arc;

use adminpanel_core::ContactInfoEditor;
use adminpanel_types::ContactInfo;

use crate::commands::{report, Context};

pub async fn show_contact(ctx: &Context, json: bool) -> Result<()> {
    let mut editor = ContactInfoEditor::new(Arc::clone(&ctx.api));
    let loaded = editor.load().await;
    if loaded.is_err() {
        return report(editor.status(), loaded);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&editor.current())?);
        return Ok(());
    }

    match editor.displayed() {
        Some(info) => println!("{}", contact_table(info)),
        None => println!("{}", "No contact information has been set.".yellow()),
    }
    Ok(())
}

pub async fn set_contact(
    ctx: &Context,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
) -> Result<()> {
    let changes: Vec<(&str, String)> = [("phone", phone), ("email", email), ("address", address)]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect();
    if changes.is_empty() {
        anyhow::bail!("Specify at least one of --phone, --email or --address");
    }

    let mut editor = ContactInfoEditor::new(Arc::clone(&ctx.api));
    let loaded = editor.load().await;
    if loaded.is_err() {
        return report(editor.status(), loaded);
    }

    editor.edit()?;
    for (field, value) in changes {
        editor.set_field(field, value)?;
    }
    let result = editor.save().await;
    report(editor.status(), result)?;

    if let Some(info) = editor.displayed() {
        println!("{}", contact_table(info));
    }
    Ok(())
}

fn contact_table(info: &ContactInfo) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("Phone"), Cell::new(&info.phone)]);
    table.add_row(vec![Cell::new("Email"), Cell::new(&info.email)]);
    table.add_row(vec![Cell::new("Address"), Cell::new(&info.address)]);
    table
}
