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
use crate::types::registry_file::RegistryFile;
use anyhow::anyhow;
use std::path::{Path, PathBuf};

const HOME_DIR_NAME: &str = "SwiftLaunch";
const REGISTRY_FILE_NAME: &str = "launcher.yaml";
const LOG_FILE_NAME: &str = "swiftlaunch.log";
const HOME_ENV_VAR: &str = "SWIFTLAUNCH_HOME";

#[derive(Debug, Clone)]
pub struct LauncherLocalSettings {
    pub home_dir: PathBuf,
    pub registry_file: PathBuf,
    pub log_file: PathBuf,
}

impl LauncherLocalSettings {
    /// Settings rooted in `home_dir`, using the default file names.
    pub fn new(home_dir: impl Into<PathBuf>) -> Self {
        let home_dir = home_dir.into();
        Self {
            registry_file: home_dir.join(REGISTRY_FILE_NAME),
            log_file: home_dir.join(LOG_FILE_NAME),
            home_dir,
        }
    }

    /// Settings for an explicit registry file. Logs go next to it.
    pub fn with_registry_file(registry_file: impl Into<PathBuf>) -> Self {
        let registry_file = registry_file.into();
        let home_dir = registry_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            log_file: home_dir.join(LOG_FILE_NAME),
            home_dir,
            registry_file,
        }
    }

    /// `$SWIFTLAUNCH_HOME`, else `<Documents>/SwiftLaunch`.
    pub fn from_env() -> anyhow::Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::new(home));
        }

        let documents = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .ok_or_else(|| {
                anyhow!("Unable to locate a home directory")
                    .context(format!("Set {HOME_ENV_VAR} to choose where SwiftLaunch keeps its files"))
            })?;

        Ok(Self::new(documents.join(HOME_DIR_NAME)))
    }

    /// A missing file is an empty registry.
    pub fn get_registry(&self) -> Result<RegistryFile, PersistenceError> {
        let registry_filepath = &self.registry_file;

        if !registry_filepath.exists() {
            return Ok(RegistryFile::default());
        }

        let content =
            std::fs::read_to_string(registry_filepath).map_err(|source| PersistenceError::Read {
                path: registry_filepath.clone(),
                source,
            })?;

        RegistryFile::from_yaml(&content, registry_filepath)
    }

    pub fn save_registry(&self, registry: &RegistryFile) -> Result<(), PersistenceError> {
        let registry_filepath = &self.registry_file;

        if let Some(parent) = registry_filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| PersistenceError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = registry.to_yaml()?;
        std::fs::write(registry_filepath, content).map_err(|source| PersistenceError::Write {
            path: registry_filepath.clone(),
            source,
        })?;

        Ok(())
    }
}
