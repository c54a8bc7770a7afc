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
use crate::types::{AppEntry, category_or_default};
use anyhow::Result;

fn print_entries(entries: &[AppEntry]) {
    if entries.is_empty() {
        println!("  (no applications)");
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("  [{i}] {} -> {}", entry.name, entry.path.display());
    }
}

/// Prints one category, or every category in stored order.
pub fn list_entries(registry: &Registry, category: Option<&str>) -> Result<()> {
    if category.is_some() {
        println!("Category: {}", category_or_default(category));
        print_entries(registry.list_entries(category));
        return Ok(());
    }

    if registry.categories().is_empty() {
        println!("No applications registered yet. Add one with `swiftlaunch add`.");
        return Ok(());
    }

    for category in registry.categories() {
        println!("Category: {}", category.name);
        print_entries(&category.entries);
    }

    Ok(())
}
