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

use crate::types::AppEntry;
use crate::utils::reset_timer::ResetTimer;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

pub const LAUNCH_FEEDBACK_DELAY: Duration = Duration::from_secs(5);
pub const LAUNCHING_LABEL: &str = "Launching...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub enabled: bool,
}

/// A launch control for one entry.
///
/// Pressing it shows `Launching...` and disables it until a reset timer
/// restores the entry name. The timer belongs to the button: dropping the
/// button cancels a pending reset.
#[derive(Debug)]
pub struct LaunchButton {
    entry: AppEntry,
    state: Arc<Mutex<ButtonState>>,
    reset_delay: Duration,
    reset_timer: Option<ResetTimer>,
}

impl LaunchButton {
    pub fn new(entry: AppEntry) -> Self {
        let state = ButtonState {
            label: entry.name.clone(),
            enabled: true,
        };

        Self {
            entry,
            state: Arc::new(Mutex::new(state)),
            reset_delay: LAUNCH_FEEDBACK_DELAY,
            reset_timer: None,
        }
    }

    pub fn with_reset_delay(mut self, reset_delay: Duration) -> Self {
        self.reset_delay = reset_delay;
        self
    }

    pub fn entry(&self) -> &AppEntry {
        &self.entry
    }

    pub fn state(&self) -> ButtonState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Shows the launch feedback, schedules its reset and hands the entry
    /// path to `launch`.
    ///
    /// The reset is scheduled even when the launch fails.
    pub fn press<E>(&mut self, launch: impl FnOnce(&Path) -> Result<(), E>) -> Result<(), E> {
        // Replacing the timer cancels a reset from an earlier press
        self.reset_timer = None;

        set_state(&self.state, LAUNCHING_LABEL, false);

        let state = self.state.clone();
        let original_label = self.entry.name.clone();
        self.reset_timer = Some(ResetTimer::schedule(self.reset_delay, move || {
            set_state(&state, &original_label, true);
        }));

        launch(self.entry.path())
    }
}

fn set_state(state: &Mutex<ButtonState>, label: &str, enabled: bool) {
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    state.label = label.to_string();
    state.enabled = enabled;
}
