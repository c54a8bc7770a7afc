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
use crate::types::category_or_default;
use anyhow::{Context, Result};

pub fn add_entry(
    registry: &mut Registry,
    name: &str,
    path: &str,
    category: Option<&str>,
) -> Result<()> {
    registry
        .add_entry(name, path, category)
        .context("Application was not added")?;

    println!(
        "Application added successfully to '{}'.",
        category_or_default(category)
    );
    Ok(())
}
