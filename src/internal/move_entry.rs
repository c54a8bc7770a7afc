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

pub fn move_entry(
    registry: &mut Registry,
    index: usize,
    delta: isize,
    category: Option<&str>,
) -> Result<()> {
    let moved = registry
        .move_entry(index, delta, category)
        .context("Failed to reorder applications")?;

    if !moved {
        println!("Nothing to move: position {index} by {delta} is out of range.");
        return Ok(());
    }

    println!("Application order updated:");
    for (i, entry) in registry.list_entries(category).iter().enumerate() {
        println!("  [{i}] {}", entry.name);
    }

    Ok(())
}
