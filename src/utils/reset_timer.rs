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

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Runs a callback once after a delay, unless cancelled or dropped first.
///
/// Cancelling waits for a callback that is already running, so once
/// `cancel` (or `drop`) returns the callback can no longer fire.
#[derive(Debug)]
pub struct ResetTimer {
    cancel_tx: Option<Sender<()>>,
    pub(crate) handle: Option<JoinHandle<()>>,
}

impl ResetTimer {
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            // A message or a dropped sender both mean cancelled
            if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                callback();
            }
        });

        Self {
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            // ignore send error (timer thread might be done already)
            let _ = cancel_tx.send(());
        }

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                eprintln!("Reset timer callback panicked");
            }
        }
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn is_pending(timer: &ResetTimer) -> bool {
        timer.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn counting_timer(delay: Duration) -> (ResetTimer, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_for_timer = fired.clone();
        let timer = ResetTimer::schedule(delay, move || {
            fired_for_timer.fetch_add(1, Ordering::SeqCst);
        });
        (timer, fired)
    }

    #[test]
    fn test_fires_after_delay() {
        let (timer, fired) = counting_timer(Duration::from_millis(10));

        thread::sleep(Duration::from_millis(300));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!is_pending(&timer));
    }

    #[test]
    fn test_cancel_prevents_callback() {
        let (mut timer, fired) = counting_timer(Duration::from_millis(200));
        assert!(is_pending(&timer));

        timer.cancel();
        thread::sleep(Duration::from_millis(400));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!is_pending(&timer));
    }

    #[test]
    fn test_drop_prevents_callback() {
        let (timer, fired) = counting_timer(Duration::from_millis(200));

        drop(timer);
        thread::sleep(Duration::from_millis(400));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cancel_after_firing_is_harmless() {
        let (mut timer, fired) = counting_timer(Duration::from_millis(10));

        thread::sleep(Duration::from_millis(300));
        timer.cancel();
        timer.cancel();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
