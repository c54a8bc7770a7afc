// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 The SwiftLaunch contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

mod internal;
mod types;
mod utils;

use crate::internal::add_entry::add_entry;
use crate::internal::launch::launch;
use crate::internal::list_entries::list_entries;
use crate::internal::move_entry::move_entry;
use crate::internal::registry::Registry;
use crate::internal::settings::{set_dark_mode, show_settings};
use crate::types::local_settings::LauncherLocalSettings;
use crate::utils::logger::{init_logger, log_debug};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[derive(Debug, Subcommand)]
enum CliAction {
    /// List registered applications
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Register an executable
    Add {
        name: String,
        path: String,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Swap the application at INDEX with the one DELTA positions away
    Move {
        index: usize,
        #[arg(allow_negative_numbers = true)]
        delta: isize,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Move an application one position up
    Up {
        index: usize,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Move an application one position down
    Down {
        index: usize,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Launch a registered application by name
    #[command(alias = "l")]
    Launch {
        name: String,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Turn dark mode on or off
    DarkMode {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Show settings and file locations
    Settings,
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Registry file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: CliAction,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let settings = match &args.config {
        Some(file) => LauncherLocalSettings::with_registry_file(file),
        None => LauncherLocalSettings::from_env()?,
    };

    init_logger(settings.log_file.clone());
    log_debug(format!("Args: {args:?}"));

    let mut registry = Registry::load(settings).context("Failed to load the launcher registry")?;

    match args.action {
        CliAction::List { category } => list_entries(&registry, category.as_deref())?,
        CliAction::Add {
            name,
            path,
            category,
        } => add_entry(&mut registry, &name, &path, category.as_deref())?,
        CliAction::Move {
            index,
            delta,
            category,
        } => move_entry(&mut registry, index, delta, category.as_deref())?,
        CliAction::Up { index, category } => {
            move_entry(&mut registry, index, -1, category.as_deref())?
        }
        CliAction::Down { index, category } => {
            move_entry(&mut registry, index, 1, category.as_deref())?
        }
        CliAction::Launch { name, category } => launch(&registry, &name, category.as_deref())?,
        CliAction::DarkMode { state } => set_dark_mode(&mut registry, matches!(state, Toggle::On))?,
        CliAction::Settings => show_settings(&registry)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_move_accepts_negative_delta() {
        let cli = Cli::try_parse_from(["swiftlaunch", "move", "2", "-1"]).unwrap();
        match cli.action {
            CliAction::Move { index, delta, .. } => {
                assert_eq!(index, 2);
                assert_eq!(delta, -1);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_add_with_category() {
        let cli = Cli::try_parse_from([
            "swiftlaunch",
            "add",
            "Notepad",
            "/bin/notepad",
            "--category",
            "Tools",
            "--config",
            "/tmp/apps.yaml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/apps.yaml")));
        match cli.action {
            CliAction::Add {
                name,
                path,
                category,
            } => {
                assert_eq!(name, "Notepad");
                assert_eq!(path, "/bin/notepad");
                assert_eq!(category.as_deref(), Some("Tools"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
