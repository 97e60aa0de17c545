use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

use adminpanel_client::AdminApi;
use adminpanel_core::{PanelError, PanelSettings, StatusMessage};

use crate::cli::{ContactCommands, EmployeeCommands, FeedbackCommands, VendorCommands};
use crate::{contact_commands, employee_commands, feedback_commands, vendor_commands};

/// What every command needs to build its controller.
pub struct Context {
    pub api: Arc<dyn AdminApi>,
    pub panel: PanelSettings,
}

pub async fn handle_feedback_command(ctx: &Context, cmd: FeedbackCommands) -> Result<()> {
    match cmd {
        FeedbackCommands::List { json } => feedback_commands::list_feedback(ctx, json).await,
        FeedbackCommands::Approve { id } => feedback_commands::approve_feedback(ctx, &id).await,
        FeedbackCommands::Delete { id } => feedback_commands::delete_feedback(ctx, &id).await,
    }
}

pub async fn handle_vendor_command(ctx: &Context, cmd: VendorCommands) -> Result<()> {
    match cmd {
        VendorCommands::Create(args) => vendor_commands::create_vendor(ctx, args).await,
    }
}

pub async fn handle_employee_command(ctx: &Context, cmd: EmployeeCommands) -> Result<()> {
    match cmd {
        EmployeeCommands::List { filter, json } => {
            employee_commands::list_employees(ctx, filter, json).await
        }
        EmployeeCommands::Approve { id } => employee_commands::approve_employee(ctx, &id).await,
        EmployeeCommands::Reject { id } => employee_commands::reject_employee(ctx, &id).await,
    }
}

pub async fn handle_contact_command(ctx: &Context, cmd: ContactCommands) -> Result<()> {
    match cmd {
        ContactCommands::Show { json } => contact_commands::show_contact(ctx, json).await,
        ContactCommands::Set { phone, email, address } => {
            contact_commands::set_contact(ctx, phone, email, address).await
        }
    }
}

/// Print the controller's status line, or turn its failure into the exit error.
///
/// A change the server accepted is a success even when the list could not be
/// re-fetched afterwards; that case only prints a warning.
pub fn report(status: Option<&StatusMessage>, result: Result<(), PanelError>) -> Result<()> {
    match result {
        Ok(()) => {
            if let Some(message) = status {
                println!("{} {}", "✓".green(), message.text.green());
            }
            Ok(())
        }
        Err(err @ PanelError::RefreshFailed(_)) => {
            let text = status.map_or_else(|| err.to_string(), |m| m.text.clone());
            println!("{} {}", "!".yellow(), text.yellow());
            Ok(())
        }
        Err(err) => {
            let text = status.map_or_else(|| err.to_string(), |m| m.text.clone());
            anyhow::bail!(text)
        }
    }
}
