//! Core module: Growable Ring Buffer
//!
//! Prinsip desain:
//! - FIFO: Urutan keluar selalu sama dengan urutan masuk
//! - Never-Full: Push tidak pernah gagal, storage tumbuh `2n + 1`
//! - Two-Cursor: Kosong/penuh dibedakan dari posisi read dan write saja

mod error;
mod ring_buffer;

pub use error::QueueError;
pub use ring_buffer::{RingBuffer, DEFAULT_CAPACITY};
