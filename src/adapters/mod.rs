//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                    |
//! |------------|--------------|--------------------------------|
//! | `hardware` | OutputPort   | indicator GPIOs, buzzer LEDC   |
//! | `serial`   | Transport    | ESP32 UART / host loopback     |
//! | `delay`    | DelayNs      | FreeRTOS delay / thread sleep  |
//! | `time`     | -            | ESP32 system timer             |
//! | `log_sink` | EventSink    | Serial log output              |

pub mod delay;
pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
