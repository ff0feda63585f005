//! Error types untuk ring buffer
//!
//! Hanya ada satu kondisi yang bisa di-recover oleh caller: queue kosong.
//! Kapasitas nol ditolak saat konstruksi.

use thiserror::Error;

/// Error yang dikembalikan oleh operasi ring buffer
///
/// Operasi yang gagal tidak pernah mengubah state buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `peek`, `retrieve`, atau `pop` dipanggil pada buffer kosong
    #[error("ring buffer is empty")]
    EmptyQueue,

    /// Kapasitas awal harus lebih dari nol
    #[error("capacity must be greater than zero")]
    InvalidCapacity,
}
