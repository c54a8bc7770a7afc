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

use crate::internal::registry::Registry;
use anyhow::{Context, Result};

pub fn set_dark_mode(registry: &mut Registry, enabled: bool) -> Result<()> {
    registry
        .set_dark_mode(enabled)
        .context("Failed to save settings")?;

    println!("Dark mode {}.", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

pub fn show_settings(registry: &Registry) -> Result<()> {
    let local = registry.local_settings();
    println!("Home:          {}", local.home_dir.display());
    println!("Registry file: {}", local.registry_file.display());
    println!("Log file:      {}", local.log_file.display());
    println!("Dark mode:     {}", registry.settings().dark_mode);
    Ok(())
}
