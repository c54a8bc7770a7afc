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

use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::OnceLock;

static LOG_FILE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets the file `log_debug` appends to. Only the first call has an effect.
pub fn init_logger(log_file: PathBuf) {
    let _ = LOG_FILE_PATH.set(log_file);
}

#[cfg(debug_assertions)]
pub fn log_debug<T: Debug>(message: T) {
    use std::fs::OpenOptions;
    use std::io::Write;

    let Some(log_path) = LOG_FILE_PATH.get() else {
        return;
    };

    let file = log_path
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(log_path));

    let mut file = match file {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Couldn't open log file {}: {}", log_path.display(), e);
            return;
        }
    };

    let formatted_message = format!("{:?}\n", message);
    if let Err(e) = file.write_all(formatted_message.as_bytes()) {
        eprintln!("Error writing to log file: {}", e);
    }
}

#[cfg(not(debug_assertions))]
pub fn log_debug<T: Debug>(_message: T) {
    // No logs in prod
}
