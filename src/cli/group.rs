use std::path::Path;

use clap::{Parser, Subcommand};

use crate::{cli::selection::CompanyArgs, prelude::*, tables::build_groups_table};

#[derive(Parser)]
pub struct GroupArgs {
    #[clap(flatten)]
    company: CompanyArgs,

    #[command(subcommand)]
    command: GroupCommand,
}

#[derive(Subcommand)]
enum GroupCommand {
    /// List all groups.
    List,

    /// Show the meters of the group.
    Show { name: String },

    /// Create a new group, optionally with the initial meters.
    Create { name: String, meters: Vec<String> },

    /// Delete the group.
    Delete { name: String },

    /// Add the meters to the group.
    Add {
        name: String,

        #[clap(required = true)]
        meters: Vec<String>,
    },

    /// Remove the meters from the group.
    Remove {
        name: String,

        #[clap(required = true)]
        meters: Vec<String>,
    },
}

impl GroupArgs {
    #[instrument(skip_all, fields(company = %self.company.company))]
    pub fn run(self, root: &Path) -> Result {
        let settings = self.company.open(root);
        let mut groups = settings.groups()?;
        match self.command {
            GroupCommand::List => {
                if groups.is_empty() {
                    info!("no groups yet");
                }
                println!("{}", build_groups_table(&groups));
                return Ok(());
            }
            GroupCommand::Show { name } => {
                for meter in groups.get(&name)? {
                    println!("{meter}");
                }
                return Ok(());
            }
            GroupCommand::Create { name, meters } => {
                groups.create(&name, &meters)?;
                info!(group = %name, n_meters = meters.len(), "created");
            }
            GroupCommand::Delete { name } => {
                let meters = groups.delete(&name)?;
                info!(group = %name, n_meters = meters.len(), "deleted");
            }
            GroupCommand::Add { name, meters } => {
                groups.add(&name, &meters)?;
                info!(group = %name, n_meters = groups.get(&name)?.len(), "added");
            }
            GroupCommand::Remove { name, meters } => {
                let n_removed = groups.remove(&name, &meters)?;
                if n_removed < meters.len() {
                    warn!(
                        group = %name,
                        n_removed,
                        n_requested = meters.len(),
                        "some meters were not in the group"
                    );
                } else {
                    info!(group = %name, n_removed, "removed");
                }
            }
        }
        settings.save_groups(&groups)
    }
}
