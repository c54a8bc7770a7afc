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

use crate::internal::errors::PersistenceError;
use crate::types::{AppCategory, AppEntry, LauncherSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk layout of the launcher registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub applications: Vec<AppCategory>,
    #[serde(default)]
    pub settings: LauncherSettings,
}

impl RegistryFile {
    /// `path` is only used for error reporting.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, PersistenceError> {
        // An empty document is not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: Self =
            serde_yaml::from_str(content).map_err(|source| PersistenceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        for category in &file.applications {
            for (index, entry) in category.entries.iter().enumerate() {
                if entry.name.trim().is_empty() || entry.path.to_string_lossy().trim().is_empty() {
                    return Err(PersistenceError::InvalidEntry {
                        path: path.to_path_buf(),
                        category: category.name.clone(),
                        index,
                    });
                }
            }
        }

        Ok(file)
    }

    pub fn to_yaml(&self) -> Result<String, PersistenceError> {
        serde_yaml::to_string(self).map_err(PersistenceError::Serialize)
    }

    pub fn category(&self, name: &str) -> Option<&AppCategory> {
        self.applications.iter().find(|c| c.name == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut AppCategory> {
        self.applications.iter_mut().find(|c| c.name == name)
    }

    /// Appends `entry` to `category`, creating the category at the end if needed.
    pub fn push_entry(&mut self, category: &str, entry: AppEntry) {
        match self.category_mut(category) {
            Some(existing) => existing.entries.push(entry),
            None => {
                let mut created = AppCategory::new(category);
                created.entries.push(entry);
                self.applications.push(created);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_CATEGORY;

    #[test]
    fn test_empty_content_is_default() {
        let file = RegistryFile::from_yaml("", Path::new("launcher.yaml")).unwrap();
        assert_eq!(file, RegistryFile::default());
    }

    #[test]
    fn test_missing_sections_default() {
        let file = RegistryFile::from_yaml("applications: []\n", Path::new("launcher.yaml"))
            .unwrap();
        assert!(!file.settings.dark_mode);

        let file = RegistryFile::from_yaml("settings:\n  dark_mode: true\n", Path::new("x"))
            .unwrap();
        assert!(file.settings.dark_mode);
        assert!(file.applications.is_empty());
    }

    #[test]
    fn test_hand_written_file() {
        let content = "\
applications:
- name: Tools
  entries:
  - name: Notepad
    path: /bin/notepad
  - name: Calc
    path: /bin/calc
- name: Games
  entries: []
settings:
  dark_mode: true
";
        let file = RegistryFile::from_yaml(content, Path::new("launcher.yaml")).unwrap();
        let tools = file.category("Tools").unwrap();
        assert_eq!(tools.entries[0], AppEntry::new("Notepad", "/bin/notepad"));
        assert_eq!(tools.entries[1], AppEntry::new("Calc", "/bin/calc"));
        assert!(file.category("Games").unwrap().entries.is_empty());
        assert!(file.settings.dark_mode);
    }

    #[test]
    fn test_code_like_content_is_rejected() {
        let content = "[('Notepad', __import__('os').system('rm -rf /'))]";
        let err = RegistryFile::from_yaml(content, Path::new("launcher.yaml")).unwrap_err();
        assert!(matches!(err, PersistenceError::Parse { .. }));
    }

    #[test]
    fn test_empty_entry_name_is_rejected() {
        let content = "\
applications:
- name: General
  entries:
  - name: ''
    path: /bin/x
";
        let err = RegistryFile::from_yaml(content, Path::new("launcher.yaml")).unwrap_err();
        match err {
            PersistenceError::InvalidEntry {
                category, index, ..
            } => {
                assert_eq!(category, "General");
                assert_eq!(index, 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_entry_path_is_rejected() {
        let content = "\
applications:
- name: Tools
  entries:
  - name: Shell
    path: /bin/sh
  - name: Blank
    path: '   '
";
        let err = RegistryFile::from_yaml(content, Path::new("launcher.yaml")).unwrap_err();
        match err {
            PersistenceError::InvalidEntry {
                category, index, ..
            } => {
                assert_eq!(category, "Tools");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_push_entry_creates_category_once() {
        let mut file = RegistryFile::default();
        file.push_entry(DEFAULT_CATEGORY, AppEntry::new("A", "/a"));
        file.push_entry("Games", AppEntry::new("B", "/b"));
        file.push_entry(DEFAULT_CATEGORY, AppEntry::new("C", "/c"));

        assert_eq!(file.applications.len(), 2);
        assert_eq!(file.applications[0].name, DEFAULT_CATEGORY);
        assert_eq!(file.applications[0].entries.len(), 2);
        assert_eq!(file.applications[1].name, "Games");
    }

    #[test]
    fn test_yaml_preserves_order() {
        let mut file = RegistryFile::default();
        file.push_entry("Z", AppEntry::new("Zed", "/z"));
        file.push_entry("A", AppEntry::new("Ay", "/a"));
        file.push_entry("Z", AppEntry::new("Also zed", "/z2"));
        file.settings.dark_mode = true;

        let yaml = file.to_yaml().unwrap();
        let parsed = RegistryFile::from_yaml(&yaml, Path::new("launcher.yaml")).unwrap();
        assert_eq!(parsed, file);
    }
}
