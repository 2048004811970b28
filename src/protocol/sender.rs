//! Host-side status sender.
//!
//! The detection host pushes one status word per decision.  The link is
//! optional: if the port could not be opened the sender still accepts
//! messages and drops them.  Write failures are logged and swallowed;
//! there is no retry.

use log::{debug, warn};

use super::message::StatusMessage;
use super::transport::Transport;

/// Longest encoded status line (`VIOLATION\n`).
const MAX_ENCODED_LEN: usize = 10;

pub struct StatusSender<T: Transport> {
    link: Option<T>,
}

impl<T: Transport> StatusSender<T> {
    /// Wrap a link.  Pass `None` when the port failed to open.
    pub fn new(link: Option<T>) -> Self {
        if link.is_none() {
            warn!("status link unavailable, messages will be dropped");
        }
        Self { link }
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_some()
    }

    /// Send one status line.  Returns `true` if it was handed to the link.
    pub fn send(&mut self, status: StatusMessage) -> bool {
        let Some(link) = self.link.as_mut() else {
            debug!("status {} dropped: no link", status);
            return false;
        };

        let mut buf = [0u8; MAX_ENCODED_LEN];
        let Some(len) = status.encode_line(&mut buf) else {
            return false;
        };

        match link.write(&buf[..len]).and_then(|_| link.flush()) {
            Ok(()) => true,
            Err(e) => {
                warn!("status {} write failed: {:?}", status, e);
                false
            }
        }
    }

    /// Borrow the underlying link (tests, diagnostics).
    pub fn link(&self) -> Option<&T> {
        self.link.as_ref()
    }
}
