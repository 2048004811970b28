//! Task Watchdog Timer (TWDT) driver.
//!
//! Resets the board if the responder loop stops feeding it.  The loop
//! feeds once per cycle, so the longest cycle (a blocking alarm plus the
//! loop yield, see [`ResponderConfig::worst_cycle_ms`]) must stay under
//! the timeout.  `ResponderConfig::validate` enforces that.
//!
//! [`ResponderConfig::worst_cycle_ms`]: crate::config::ResponderConfig::worst_cycle_ms

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::{info, warn};

pub struct Watchdog {
    timeout_ms: u32,
    subscribed: bool,
    #[cfg(not(target_os = "espidf"))]
    feeds: u64,
}

impl Watchdog {
    /// Configure the TWDT and subscribe the calling task.
    ///
    /// Failure is logged, not fatal: an unsubscribed watchdog simply
    /// ignores [`feed`](Self::feed).
    #[cfg(target_os = "espidf")]
    pub fn subscribe(timeout_ms: u32) -> Self {
        let cfg = esp_task_wdt_config_t {
            timeout_ms,
            idle_core_mask: 0,
            trigger_panic: true,
        };
        // SAFETY: called once from main() before the responder loop.
        let ret = unsafe { esp_task_wdt_reconfigure(&cfg) };
        if ret != ESP_OK as i32 {
            warn!("watchdog: reconfigure returned {} (already configured?)", ret);
        }

        // SAFETY: a null handle subscribes the calling task.
        let ret = unsafe { esp_task_wdt_add(core::ptr::null_mut()) };
        let subscribed = ret == ESP_OK as i32;
        if subscribed {
            info!("watchdog: responder task subscribed ({} ms, panic on trigger)", timeout_ms);
        } else {
            warn!("watchdog: subscribe failed ({}), loop is unguarded", ret);
        }

        Self { timeout_ms, subscribed }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn subscribe(timeout_ms: u32) -> Self {
        info!("watchdog(sim): {} ms timeout not enforced", timeout_ms);
        Self {
            timeout_ms,
            subscribed: true,
            feeds: 0,
        }
    }

    /// Reset the countdown.  Call once per responder cycle.
    pub fn feed(&mut self) {
        if !self.subscribed {
            return;
        }
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: the calling task subscribed in `subscribe`.
            let ret = unsafe { esp_task_wdt_reset() };
            if ret != ESP_OK as i32 {
                warn!("watchdog: feed failed ({})", ret);
            }
        }
        #[cfg(not(target_os = "espidf"))]
        {
            self.feeds += 1;
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Number of feeds so far (simulation only).
    #[cfg(not(target_os = "espidf"))]
    pub fn feeds(&self) -> u64 {
        self.feeds
    }
}
