//! Growable Single-Producer Single-Consumer (SPSC) Ring Buffer
//!
//! Circular queue dengan dua cursor (read dan write) di atas satu backing
//! array. Kosong vs penuh dibedakan hanya dari posisi kedua cursor, tanpa
//! field count terpisah. Buffer tidak pernah menolak push: saat penuh,
//! storage diganti dengan array baru berukuran `2n + 1`.
//!
//! Tidak thread-safe. Akses dari beberapa thread harus disinkronkan di luar.

use std::fmt;

use super::error::QueueError;

/// Kapasitas awal default
pub const DEFAULT_CAPACITY: usize = 32;

/// Growable SPSC Ring Buffer
///
/// Invariants:
/// - `read_pos == write_pos` berarti buffer kosong
/// - `write_pos == buffer.len()` hanya terjadi saat `read_pos == 0`
///   (penuh, wraparound tertunda sampai reader maju)
/// - Dalam kondisi wrapped, satu slot selalu dibiarkan kosong
pub struct RingBuffer<T> {
    // Backing storage - diganti (bukan di-resize) saat growth
    buffer: Box<[Option<T>]>,
    // Slot berikutnya yang akan dibaca
    read_pos: usize,
    // Slot berikutnya yang akan ditulis
    write_pos: usize,
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RingBuffer<T> {
    /// Membuat ring buffer dengan kapasitas default (32 slot)
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Membuat ring buffer dengan kapasitas awal tertentu
    ///
    /// # Errors
    /// `QueueError::InvalidCapacity` jika `capacity == 0`
    pub fn with_capacity(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity);
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        log::trace!("ring buffer created with capacity {}", capacity);
        Self {
            buffer: empty_slots(capacity),
            read_pos: 0,
            write_pos: 0,
        }
    }

    /// Cek apakah buffer kosong
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read_pos == self.write_pos
    }

    /// Jumlah elemen dalam buffer
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        if self.read_pos < self.write_pos {
            self.write_pos - self.read_pos
        } else {
            self.buffer.len() - self.read_pos + self.write_pos
        }
    }

    /// Cek apakah push berikutnya akan memicu growth
    #[inline]
    pub fn is_full(&self) -> bool {
        (self.read_pos == 0 && self.write_pos == self.buffer.len())
            || self.write_pos + 1 == self.read_pos
    }

    /// Panjang backing storage saat ini
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Push item ke belakang queue
    ///
    /// Tidak pernah gagal. Jika buffer penuh, storage diperbesar dulu.
    ///
    /// # Panics
    /// Panic jika kapasitas baru melebihi `usize::MAX` (fatal, sama seperti
    /// alokasi gagal).
    pub fn push(&mut self, item: T) {
        if self.is_full() {
            self.grow();
        }

        self.buffer[self.write_pos] = Some(item);

        self.write_pos += 1;
        // Wrap hanya kalau reader sudah meninggalkan slot 0
        if self.write_pos >= self.buffer.len() && self.read_pos > 0 {
            self.write_pos = 0;
        }
    }

    /// Lihat item terdepan tanpa mengubah state
    ///
    /// # Errors
    /// `QueueError::EmptyQueue` jika buffer kosong
    #[inline]
    pub fn peek(&self) -> Result<&T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        self.buffer[self.read_pos]
            .as_ref()
            .ok_or(QueueError::EmptyQueue)
    }

    /// Buang item terdepan
    ///
    /// Slot langsung dikosongkan sehingga item di-drop sekarang, bukan saat
    /// slot ditimpa oleh push berikutnya.
    ///
    /// # Errors
    /// `QueueError::EmptyQueue` jika buffer kosong (state tidak berubah)
    pub fn retrieve(&mut self) -> Result<(), QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        self.buffer[self.read_pos] = None;
        self.advance_read();
        Ok(())
    }

    /// Ambil dan keluarkan item terdepan
    ///
    /// # Errors
    /// `QueueError::EmptyQueue` jika buffer kosong (state tidak berubah)
    pub fn pop(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        let item = match self.buffer[self.read_pos].take() {
            Some(item) => item,
            None => return Err(QueueError::EmptyQueue),
        };
        self.advance_read();
        Ok(item)
    }

    /// Iterasi item dari yang paling lama ke yang paling baru
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (older, newer): (&[Option<T>], &[Option<T>]) = if self.is_empty() {
            (&[], &[])
        } else if self.read_pos < self.write_pos {
            (&self.buffer[self.read_pos..self.write_pos], &[])
        } else {
            (
                &self.buffer[self.read_pos..],
                &self.buffer[..self.write_pos],
            )
        };
        older.iter().chain(newer).filter_map(Option::as_ref)
    }

    #[inline]
    fn advance_read(&mut self) {
        self.read_pos += 1;
        // Reader sudah lewat slot 0, sentinel write boleh di-wrap
        if self.write_pos >= self.buffer.len() {
            self.write_pos = 0;
        }
        if self.read_pos >= self.buffer.len() {
            self.read_pos = 0;
        }
    }

    /// Ganti storage dengan array `2n + 1` dan susun ulang isi dari index 0
    fn grow(&mut self) {
        let old_capacity = self.buffer.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .and_then(|c| c.checked_add(1))
            .unwrap_or_else(|| panic!("ring buffer capacity overflow"));

        let mut next = empty_slots(new_capacity);

        let read = self.read_pos;
        let write = self.write_pos;
        let (front, back) = self.buffer.split_at_mut(read);
        let (older, newer): (&mut [Option<T>], &mut [Option<T>]) = if read < write {
            // Tidak wrapped: satu run kontigu
            (&mut back[..write - read], &mut [])
        } else if read > write {
            (back, &mut front[..write])
        } else {
            // Cursor sama saat penuh: salin satu siklus penuh mulai dari read
            (back, front)
        };

        let mut moved = 0;
        for (dst, src) in next.iter_mut().zip(older.iter_mut().chain(newer.iter_mut())) {
            *dst = src.take();
            moved += 1;
        }

        log::debug!(
            "ring buffer grew {} -> {} slots ({} items relocated)",
            old_capacity,
            new_capacity,
            moved
        );

        self.buffer = next;
        self.read_pos = 0;
        self.write_pos = moved;
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut buffer = Vec::with_capacity(capacity);
    for _ in 0..capacity {
        buffer.push(None);
    }
    buffer.into_boxed_slice()
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
