//! GPIO / peripheral pin assignments for the SafeVision responder board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Indicators (discrete LEDs, active HIGH)
// ---------------------------------------------------------------------------

/// Green "all PPE present" indicator.
pub const GREEN_LED_GPIO: i32 = 6;
/// Red "PPE violation" indicator.
pub const RED_LED_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Alarm (passive piezo buzzer)
// ---------------------------------------------------------------------------

/// Buzzer pin.  Configured as a digital output, then routed to LEDC for
/// tone generation.
pub const BUZZER_GPIO: i32 = 3;

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const TONE_RESOLUTION_BITS: u32 = 8;
/// 50 % duty at 8-bit resolution: a square wave.
pub const TONE_DUTY_HALF: u32 = 1 << (TONE_RESOLUTION_BITS - 1);

// ---------------------------------------------------------------------------
// UART link to the detection host
// ---------------------------------------------------------------------------

/// UART peripheral number (UART0 is wired to the USB-serial bridge).
pub const UART_PORT: i32 = 0;
pub const UART_TX_GPIO: i32 = 43;
pub const UART_RX_GPIO: i32 = 44;
/// Driver RX ring size.  Bytes beyond this are dropped while a blocking
/// alarm holds the loop.
pub const UART_RX_BUF_SIZE: i32 = 256;
