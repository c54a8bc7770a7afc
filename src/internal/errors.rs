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

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected input for a new entry. The registry is left unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Application name must not be empty")]
    EmptyName,
    #[error("Executable path must not be empty")]
    EmptyPath,
    #[error("Executable path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
}

#[derive(Debug, Error)]
#[error("Failed to launch application '{}'", .path.display())]
pub struct LaunchError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to read registry file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse registry file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Entry #{index} of category '{category}' in {} has an empty name or path", .path.display())]
    InvalidEntry {
        path: PathBuf,
        category: String,
        index: usize,
    },
    #[error("Failed to serialize registry")]
    Serialize(#[source] serde_yaml::Error),
    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write registry file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
