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

use crate::internal::errors::{PersistenceError, RegistryError, ValidationError};
use crate::internal::launch::Launcher;
use crate::types::local_settings::LauncherLocalSettings;
use crate::types::registry_file::RegistryFile;
use crate::types::{AppCategory, AppEntry, LauncherSettings, category_or_default};
use crate::utils::logger::log_debug;
use std::path::{Path, PathBuf};

/// The registered applications and launcher settings.
///
/// Every mutation is written to disk before it becomes visible here: the
/// change is made on a copy, the copy is saved, and only then adopted. A
/// failed save leaves the registry as it was.
#[derive(Debug)]
pub struct Registry {
    local_settings: LauncherLocalSettings,
    file: RegistryFile,
}

impl Registry {
    pub fn load(local_settings: LauncherLocalSettings) -> Result<Self, PersistenceError> {
        let file = local_settings.get_registry()?;
        log_debug(format!(
            "Loaded {} categories from {}",
            file.applications.len(),
            local_settings.registry_file.display()
        ));

        Ok(Self {
            local_settings,
            file,
        })
    }

    pub fn local_settings(&self) -> &LauncherLocalSettings {
        &self.local_settings
    }

    pub fn settings(&self) -> &LauncherSettings {
        &self.file.settings
    }

    pub fn categories(&self) -> &[AppCategory] {
        &self.file.applications
    }

    /// Entries of `category` (or the default one) in stored order.
    pub fn list_entries(&self, category: Option<&str>) -> &[AppEntry] {
        self.file
            .category(category_or_default(category))
            .map(|c| c.entries.as_slice())
            .unwrap_or_default()
    }

    pub fn find_entry(&self, name: &str, category: Option<&str>) -> Option<&AppEntry> {
        self.list_entries(category).iter().find(|e| e.name == name)
    }

    pub fn add_entry(
        &mut self,
        name: &str,
        path: &str,
        category: Option<&str>,
    ) -> Result<(), RegistryError> {
        let name = name.trim();
        let path = path.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if path.is_empty() {
            return Err(ValidationError::EmptyPath.into());
        }

        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(ValidationError::PathNotFound(path).into());
        }

        let category = category_or_default(category);
        let mut updated = self.file.clone();
        updated.push_entry(category, AppEntry::new(name, path));
        self.commit(updated)?;

        log_debug(format!("Added '{name}' to category '{category}'"));
        Ok(())
    }

    /// Swaps the entry at `index` with the one at `index + delta`.
    ///
    /// Returns `false` without touching the file when either position falls
    /// outside the category or `delta` is zero.
    pub fn move_entry(
        &mut self,
        index: usize,
        delta: isize,
        category: Option<&str>,
    ) -> Result<bool, RegistryError> {
        let category = category_or_default(category);
        let len = self.list_entries(Some(category)).len();

        let target = match index.checked_add_signed(delta) {
            Some(target) if delta != 0 && index < len && target < len => target,
            _ => return Ok(false),
        };

        let mut updated = self.file.clone();
        if let Some(entries) = updated.category_mut(category).map(|c| &mut c.entries) {
            entries.swap(index, target);
        }
        self.commit(updated)?;

        log_debug(format!("Moved entry {index} to {target} in '{category}'"));
        Ok(true)
    }

    /// The path is not re-validated here.
    pub fn launch(&self, launcher: &dyn Launcher, path: &Path) -> Result<(), RegistryError> {
        launcher.launch(path)?;
        Ok(())
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), RegistryError> {
        let mut updated = self.file.clone();
        updated.settings.dark_mode = enabled;
        self.commit(updated)?;
        Ok(())
    }

    fn commit(&mut self, updated: RegistryFile) -> Result<(), PersistenceError> {
        self.local_settings.save_registry(&updated)?;
        self.file = updated;
        Ok(())
    }
}
