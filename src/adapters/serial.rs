//! UART serial transport.
//!
//! - **`target_os = "espidf"`**: non-blocking reads and writes against the
//!   UART driver installed by `hw_init`.  Incoming bytes wait in the
//!   driver's RX ring until the responder polls.
//! - **`not(target_os = "espidf")`**: an in-memory loopback: tests and
//!   simulation [`inject`](SerialTransport::inject) inbound bytes and
//!   inspect what was [`written`](SerialTransport::written).

use crate::error::SerialError;
use crate::protocol::transport::Transport;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(not(target_os = "espidf"))]
use heapless::{Deque, Vec};

/// Host loopback RX capacity, matching the driver ring on target.
#[cfg(not(target_os = "espidf"))]
const SIM_RX_CAP: usize = 256;
#[cfg(not(target_os = "espidf"))]
const SIM_TX_CAP: usize = 256;

/// Ticks to wait for the TX FIFO to drain on flush.
#[cfg(target_os = "espidf")]
const FLUSH_TIMEOUT_TICKS: TickType_t = 100;

pub struct SerialTransport {
    #[cfg(target_os = "espidf")]
    port: uart_port_t,
    #[cfg(not(target_os = "espidf"))]
    rx: Deque<u8, SIM_RX_CAP>,
    #[cfg(not(target_os = "espidf"))]
    tx: Vec<u8, SIM_TX_CAP>,
}

// ── ESP-IDF UART ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
impl SerialTransport {
    /// Wrap a UART whose driver is already installed.
    pub fn new(port: i32) -> Self {
        Self { port }
    }
}

#[cfg(target_os = "espidf")]
impl Transport for SerialTransport {
    type Error = SerialError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        // SAFETY: buf is a valid writable slice of the given length; zero
        // ticks makes the call non-blocking.
        let n = unsafe { uart_read_bytes(self.port, buf.as_mut_ptr().cast(), buf.len() as u32, 0) };
        if n < 0 {
            return Err(SerialError::ReadFailed(n));
        }
        Ok(n as usize)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, SerialError> {
        // SAFETY: data is a valid readable slice of the given length.
        let n = unsafe { uart_write_bytes(self.port, data.as_ptr().cast(), data.len()) };
        if n < 0 {
            return Err(SerialError::WriteFailed(n));
        }
        if (n as usize) < data.len() {
            return Err(SerialError::ShortWrite);
        }
        Ok(n as usize)
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        // SAFETY: driver installed for self.port during hw_init.
        let ret = unsafe { uart_wait_tx_done(self.port, FLUSH_TIMEOUT_TICKS) };
        if ret != ESP_OK as i32 {
            return Err(SerialError::WriteFailed(ret));
        }
        Ok(())
    }

    fn available(&self) -> bool {
        let mut len: usize = 0;
        // SAFETY: len is a valid out-pointer; read-only driver query.
        let ret = unsafe { uart_get_buffered_data_len(self.port, &mut len) };
        ret == ESP_OK as i32 && len > 0
    }
}

// ── Host loopback ─────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl Default for SerialTransport {
    fn default() -> Self {
        Self::new(crate::pins::UART_PORT)
    }
}

#[cfg(not(target_os = "espidf"))]
impl SerialTransport {
    /// The port number is ignored in simulation.
    pub fn new(_port: i32) -> Self {
        Self {
            rx: Deque::new(),
            tx: Vec::new(),
        }
    }

    /// Queue inbound bytes as if they arrived on the wire.
    /// All-or-nothing: nothing is queued if the bytes do not fit.
    pub fn inject(&mut self, data: &[u8]) -> Result<(), SerialError> {
        if self.rx.capacity() - self.rx.len() < data.len() {
            return Err(SerialError::BufferFull);
        }
        for &b in data {
            self.rx.push_back(b).map_err(|_| SerialError::BufferFull)?;
        }
        Ok(())
    }

    /// Bytes still waiting to be read.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Everything written so far.
    pub fn written(&self) -> &[u8] {
        &self.tx
    }
}

#[cfg(not(target_os = "espidf"))]
impl Transport for SerialTransport {
    type Error = SerialError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        let mut n = 0;
        while n < buf.len() {
            match self.rx.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, SerialError> {
        self.tx
            .extend_from_slice(data)
            .map_err(|()| SerialError::BufferFull)?;
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        Ok(())
    }

    fn available(&self) -> bool {
        !self.rx.is_empty()
    }
}
