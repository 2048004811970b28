//! One-shot hardware peripheral initialization.
//!
//! Configures GPIO directions, the LEDC tone timer and the UART driver
//! using raw ESP-IDF sys calls. Called once from `main()` before the
//! responder loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

use crate::config::ResponderConfig;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcInitFailed(i32),
    UartInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed(rc) => write!(f, "LEDC tone timer config failed (rc={})", rc),
            Self::UartInitFailed(rc) => write!(f, "UART driver install failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals(config: &ResponderConfig) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the responder loop; single-threaded.
    unsafe {
        init_gpio_outputs()?;
        init_ledc(config.tone_hz)?;
        init_uart(config.baud_rate)?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(config: &ResponderConfig) -> Result<(), HwInitError> {
    log::info!(
        "hw_init(sim): peripheral init skipped ({} baud, {} Hz tone)",
        config.baud_rate,
        config.tone_hz
    );
    Ok(())
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = [pins::GREEN_LED_GPIO, pins::RED_LED_GPIO, pins::BUZZER_GPIO];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: GPIO outputs configured (green, red, buzzer)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe { gpio_set_level(pin, if high { 1 } else { 0 }); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── LEDC tone generator ───────────────────────────────────────

#[cfg(target_os = "espidf")]
const TONE_SPEED_MODE: ledc_mode_t = ledc_mode_t_LEDC_LOW_SPEED_MODE;
#[cfg(target_os = "espidf")]
const TONE_TIMER: ledc_timer_t = ledc_timer_t_LEDC_TIMER_0;
#[cfg(target_os = "espidf")]
const TONE_CHANNEL: ledc_channel_t = ledc_channel_t_LEDC_CHANNEL_0;

#[cfg(target_os = "espidf")]
unsafe fn init_ledc(tone_hz: u32) -> Result<(), HwInitError> {
    // Timer 0: buzzer square wave, 8-bit
    let timer = ledc_timer_config_t {
        speed_mode: TONE_SPEED_MODE,
        timer_num: TONE_TIMER,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: tone_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 { return Err(HwInitError::LedcInitFailed(ret)); }

    // Channel 0: buzzer, silent until the first tone
    let ret = unsafe { ledc_channel_config(&ledc_channel_config_t {
        speed_mode: TONE_SPEED_MODE,
        channel: TONE_CHANNEL,
        timer_sel: TONE_TIMER,
        gpio_num: pins::BUZZER_GPIO,
        duty: 0,
        hpoint: 0,
        ..Default::default()
    }) };
    if ret != ESP_OK as i32 { return Err(HwInitError::LedcInitFailed(ret)); }

    info!("hw_init: LEDC tone timer configured ({} Hz on GPIO{})", tone_hz, pins::BUZZER_GPIO);
    Ok(())
}

/// Start a square wave at `hz` on the buzzer channel.
#[cfg(target_os = "espidf")]
pub fn tone_start(hz: u32) {
    // SAFETY: LEDC timer/channel were configured in init_ledc(); only the
    // main loop calls this.
    unsafe {
        ledc_set_freq(TONE_SPEED_MODE, TONE_TIMER, hz);
        ledc_set_duty(TONE_SPEED_MODE, TONE_CHANNEL, pins::TONE_DUTY_HALF);
        ledc_update_duty(TONE_SPEED_MODE, TONE_CHANNEL);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn tone_start(_hz: u32) {}

/// Drop the buzzer channel to duty 0 (output held LOW).
#[cfg(target_os = "espidf")]
pub fn tone_stop() {
    // SAFETY: see tone_start().
    unsafe {
        ledc_set_duty(TONE_SPEED_MODE, TONE_CHANNEL, 0);
        ledc_update_duty(TONE_SPEED_MODE, TONE_CHANNEL);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn tone_stop() {}

// ── UART ─────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_uart(baud_rate: u32) -> Result<(), HwInitError> {
    let cfg = uart_config_t {
        baud_rate: baud_rate as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };
    let ret = unsafe { uart_param_config(pins::UART_PORT, &cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

    let ret = unsafe {
        uart_set_pin(
            pins::UART_PORT,
            pins::UART_TX_GPIO,
            pins::UART_RX_GPIO,
            UART_PIN_NO_CHANGE,
            UART_PIN_NO_CHANGE,
        )
    };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

    // RX ring only; TX writes block until queued in the hardware FIFO.
    let ret = unsafe {
        uart_driver_install(pins::UART_PORT, pins::UART_RX_BUF_SIZE, 0, 0, core::ptr::null_mut(), 0)
    };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

    info!("hw_init: UART{} at {} baud", pins::UART_PORT, baud_rate);
    Ok(())
}
