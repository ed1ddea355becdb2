//! CLI argument definitions.
//!
//! The binary stands in for the app's screens: each subcommand is one
//! user action against the session.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ll_core::profile::{NotificationPrefsUpdate, ProfileRecord, ProfileUpdate};

/// Little Lemon - local session and profile.
#[derive(Debug, Parser)]
#[command(name = "littlelemon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the stored profile (overrides config and platform default)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep the profile in memory for this run only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the restored session (default if no command specified)
    Status,

    /// Complete onboarding with a name and email
    Onboard(OnboardArgs),

    /// Edit the stored profile
    Update(UpdateArgs),

    /// Sign out and clear the stored profile
    Logout,
}

/// Arguments for the `onboard` command.
#[derive(Debug, Clone, clap::Args)]
pub struct OnboardArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,
}

impl OnboardArgs {
    pub fn into_profile(self) -> ProfileRecord {
        ProfileRecord::onboarding(self.first_name, self.last_name, self.email)
    }
}

/// Arguments for the `update` command. Omitted flags keep their values.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Ten-digit phone number
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub order_statuses: Option<bool>,

    #[arg(long)]
    pub password_changes: Option<bool>,

    #[arg(long)]
    pub special_offers: Option<bool>,

    #[arg(long)]
    pub newsletter: Option<bool>,

    /// Avatar image URI
    #[arg(long, conflicts_with = "remove_avatar")]
    pub avatar: Option<String>,

    /// Remove the avatar
    #[arg(long)]
    pub remove_avatar: bool,
}

impl UpdateArgs {
    pub fn into_update(self) -> ProfileUpdate {
        let avatar_uri = if self.remove_avatar {
            Some(String::new())
        } else {
            self.avatar
        };

        ProfileUpdate {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone,
            notification_prefs: NotificationPrefsUpdate {
                order_statuses: self.order_statuses,
                password_changes: self.password_changes,
                special_offers: self.special_offers,
                newsletter: self.newsletter,
            },
            avatar_uri,
        }
    }
}
