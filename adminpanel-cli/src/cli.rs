use adminpanel_core::RefreshStrategy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "adminpanel",
    about = "Admin Panel - moderate feedback, onboard vendors, approve employees",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Path to a TOML config file (default: ./adminpanel.toml)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Admin API base URL, overrides config")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds, overrides config")]
    pub timeout_secs: Option<u64>,

    #[arg(long, global = true, value_enum, help = "What a list does after a change")]
    pub refresh: Option<RefreshArg>,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RefreshArg {
    Reload,
    LocalPatch,
}

impl From<RefreshArg> for RefreshStrategy {
    fn from(arg: RefreshArg) -> Self {
        match arg {
            RefreshArg::Reload => Self::Reload,
            RefreshArg::LocalPatch => Self::LocalPatch,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand, about = "Moderate customer feedback")]
    Feedback(FeedbackCommands),

    #[command(subcommand, about = "Register vendors")]
    Vendor(VendorCommands),

    #[command(subcommand, about = "Review pending employee registrations")]
    Employees(EmployeeCommands),

    #[command(subcommand, about = "View and edit the public contact information")]
    Contact(ContactCommands),
}

#[derive(Subcommand)]
pub enum FeedbackCommands {
    #[command(about = "List all feedback")]
    List {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Approve a feedback entry for publication")]
    Approve {
        #[arg(help = "Feedback ID")]
        id: String,
    },

    #[command(about = "Delete a feedback entry")]
    Delete {
        #[arg(help = "Feedback ID")]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum VendorCommands {
    #[command(about = "Create a vendor account")]
    Create(VendorArgs),
}

/// Every field is optional on the command line so that missing ones are
/// reported by form validation, in form order.
#[derive(clap::Args)]
pub struct VendorArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long, env = "ADMINPANEL_VENDOR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    #[arg(long, help = "12-digit Aadhar number")]
    pub aadhar: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub area_name: Option<String>,
    #[arg(long)]
    pub gst_number: Option<String>,
    #[arg(long, help = "Business identifier, must be unique")]
    pub vendor_id: Option<String>,
}

impl VendorArgs {
    /// `(wire field name, value)` pairs for the flags that were given.
    pub fn fields(self) -> Vec<(&'static str, String)> {
        [
            ("name", self.name),
            ("phone", self.phone),
            ("password", self.password),
            ("aadhar", self.aadhar),
            ("email", self.email),
            ("address", self.address),
            ("areaName", self.area_name),
            ("gstNumber", self.gst_number),
            ("vendorId", self.vendor_id),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    #[command(about = "List employees waiting for approval")]
    List {
        #[arg(short, long, help = "Only show rows matching name, employee ID, email or department")]
        filter: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Approve a pending employee")]
    Approve {
        #[arg(help = "Employee record ID")]
        id: String,
    },

    #[command(about = "Reject a pending employee")]
    Reject {
        #[arg(help = "Employee record ID")]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ContactCommands {
    #[command(about = "Show the current contact information")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Update contact fields; omitted fields keep their value")]
    Set {
        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },
}
