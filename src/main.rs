//! SafeVision Responder Firmware: Main Entry Point
//!
//! Reads `SAFE` / `VIOLATION` lines from the detection host and drives the
//! indicators and alarm.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  SerialTransport  HardwareAdapter  SystemDelay  LogEventSink │
//! │  (Transport)      (OutputPort)     (DelayNs)    (EventSink)  │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ────────────────────   │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │         StatusResponder (pure logic)               │      │
//! │  │  LineDecoder · StatusMessage · AlarmTimer          │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::{info, warn};

use safevision::adapters::delay::SystemDelay;
use safevision::adapters::hardware::HardwareAdapter;
use safevision::adapters::log_sink::LogEventSink;
use safevision::adapters::serial::SerialTransport;
use safevision::adapters::time::EspTimeAdapter;
use safevision::app::service::StatusResponder;
use safevision::config::{ResponderConfig, WATCHDOG_TIMEOUT_MS};
use safevision::drivers::buzzer::Buzzer;
use safevision::drivers::hw_init;
use safevision::drivers::indicator::IndicatorLed;
use safevision::drivers::watchdog::Watchdog;
use safevision::error::Error;
use safevision::pins;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("SafeVision responder v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (compiled in) ────────────────────────
    let config = ResponderConfig::default();
    config.validate()?;

    // ── 3. Initialise hardware peripherals ────────────────────
    hw_init::init_peripherals(&config).map_err(Error::from)?;
    let mut watchdog = Watchdog::subscribe(WATCHDOG_TIMEOUT_MS);

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        IndicatorLed::new(pins::GREEN_LED_GPIO),
        IndicatorLed::new(pins::RED_LED_GPIO),
        Buzzer::new(),
    );
    let mut link = SerialTransport::new(pins::UART_PORT);
    let mut delay = SystemDelay::new();
    let mut log_sink = LogEventSink::new();
    let clock = EspTimeAdapter::new();

    // ── 5. Responder ──────────────────────────────────────────
    let loop_yield_ms = config.loop_yield_ms;
    let mut responder = StatusResponder::new(config);
    responder.start(&mut hw, &mut log_sink);

    info!("System ready. Entering responder loop.");

    // ── 6. Responder loop ─────────────────────────────────────
    loop {
        let now_ms = clock.uptime_ms();
        if let Err(e) = responder.poll(&mut link, &mut hw, &mut delay, now_ms, &mut log_sink) {
            warn!("serial read failed: {}", e);
        }

        watchdog.feed();

        // Let the idle task run; the UART driver keeps buffering meanwhile.
        esp_idf_hal::delay::FreeRtos::delay_ms(loop_yield_ms);
    }
}
