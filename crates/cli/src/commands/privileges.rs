//! Privilege catalog browsing.
//!
//! Works offline: everything comes from the compiled-in catalog.

use anyhow::{Result, bail};
use clap::Args;
use tracing::info;
use vsphere_client::privileges;

use crate::formatters::{OutputFormat, get_formatter};

#[derive(Debug, Args)]
pub struct PrivilegesArgs {
    /// Only list privileges in this functional area (e.g., VirtualMachine.Config)
    #[arg(short, long, conflicts_with = "groups")]
    pub group: Option<String>,

    /// List the functional areas instead of privileges
    #[arg(long)]
    pub groups: bool,
}

pub fn run(args: PrivilegesArgs, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let output = if args.groups {
        info!("Listing privilege groups");
        formatter.format_groups(&privileges::groups())?
    } else if let Some(group) = args.group {
        info!("Listing privileges in group: {}", group);
        let selected = select_group(&group)?;
        formatter.format_privileges(&selected)?
    } else {
        info!("Listing privileges");
        formatter.format_privileges(privileges::all())?
    };

    print!("{}", output);
    Ok(())
}

/// Privileges in `group`; nested areas such as `VirtualMachine.Config` work.
fn select_group(group: &str) -> Result<Vec<&'static str>> {
    let selected: Vec<&'static str> = privileges::in_group(group).collect();

    if selected.is_empty() {
        bail!(
            "Unknown privilege group: {}. Run 'vsphere-roles privileges --groups' to list them.",
            group
        );
    }
    Ok(selected)
}
