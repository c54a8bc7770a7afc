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

use crate::internal::errors::LaunchError;
use crate::internal::launch_button::{LAUNCH_FEEDBACK_DELAY, LaunchButton};
use crate::internal::registry::Registry;
use crate::utils::logger::log_debug;
use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::process::{Command, Stdio};

/// Starts an executable without waiting for it.
pub trait Launcher {
    fn launch(&self, path: &Path) -> Result<(), LaunchError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    #[cfg(target_os = "windows")]
    fn command(path: &Path) -> Command {
        // The empty string is the window title `start` expects first
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    }

    #[cfg(target_os = "macos")]
    fn command(path: &Path) -> Command {
        let mut command = Command::new("open");
        command.arg(path);
        command
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn command(path: &Path) -> Command {
        use std::os::unix::process::CommandExt;

        let mut command = Command::new(path);
        // New session, so closing the terminal does not take the app with it
        unsafe {
            command.pre_exec(|| {
                nix::unistd::setsid()?;
                Ok(())
            });
        }
        command
    }

    #[cfg(not(any(unix, target_os = "windows")))]
    fn command(path: &Path) -> Command {
        Command::new(path)
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> Result<(), LaunchError> {
        let mut command = Self::command(path);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        log_debug(format!("Spawning {command:?}"));

        command.spawn().map_err(|source| LaunchError {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

pub fn launch(registry: &Registry, name: &str, category: Option<&str>) -> Result<()> {
    let entry = registry
        .find_entry(name, category)
        .ok_or_else(|| anyhow!("No application named '{name}'"))
        .context("Run `swiftlaunch list` to see registered applications")?
        .clone();

    let mut button = LaunchButton::new(entry);
    let launched = button.press(|path| registry.launch(&SystemLauncher, path));

    if let Err(e) = launched {
        eprintln!("{}: failed to launch", button.entry().name);
        return Err(e).context(format!("Could not start '{}'", button.entry().name));
    }

    println!("{}: {}", button.entry().name, button.state().label);

    let notification = notify_rust::Notification::new()
        .summary(&format!("{} \"{}\"", button.state().label, button.entry().name))
        .body(&button.entry().path.display().to_string())
        .timeout(notify_rust::Timeout::Milliseconds(
            LAUNCH_FEEDBACK_DELAY.as_millis() as u32,
        ))
        .show();

    if let Err(e) = notification {
        log_debug(format!("Failed to show desktop notification: {e}"));
    }

    Ok(())
}
