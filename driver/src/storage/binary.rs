use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::DriverError;

const SIGN_MASK: u32 = 0x8000_0000;
const SCALE_MASK: u32 = 0x00FF_0000;
const SCALE_SHIFT: u32 = 16;
const MAX_SCALE: u32 = 28;

/// Little-endian primitive writer. Strings carry a 7-bit encoded byte length.
pub(crate) struct BinaryWriter<W> {
    inner: W,
}

impl<W: Write> BinaryWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_i32(&mut self, value: i32) -> Result<(), DriverError> {
        self.inner.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<(), DriverError> {
        self.inner.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), DriverError> {
        self.inner.write_all(&[u8::from(value)])?;
        Ok(())
    }

    pub fn write_string(&mut self, value: &str) -> Result<(), DriverError> {
        let length = u32::try_from(value.len())
            .map_err(|_| DriverError::Corrupted(format!("string of {} bytes", value.len())))?;
        self.write_7bit_encoded(length)?;
        self.inner.write_all(value.as_bytes())?;
        Ok(())
    }

    /// lo, mid, hi words of the 96-bit magnitude followed by the flags word.
    pub fn write_decimal(&mut self, value: &Decimal) -> Result<(), DriverError> {
        let magnitude = value.mantissa().unsigned_abs();
        let lo = magnitude as u32;
        let mid = (magnitude >> 32) as u32;
        let hi = (magnitude >> 64) as u32;
        let mut flags = value.scale() << SCALE_SHIFT;
        if value.is_sign_negative() {
            flags |= SIGN_MASK;
        }
        for word in [lo, mid, hi, flags] {
            self.inner.write_all(&word.to_le_bytes())?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W, DriverError> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn write_7bit_encoded(&mut self, mut value: u32) -> Result<(), DriverError> {
        while value >= 0x80 {
            self.inner.write_all(&[(value as u8) | 0x80])?;
            value >>= 7;
        }
        self.inner.write_all(&[value as u8])?;
        Ok(())
    }
}

/// Counterpart of [`BinaryWriter`] that tracks its position against a known
/// stream length, so callers can stop exactly at the end of the data.
pub(crate) struct BinaryReader<R> {
    inner: R,
    position: u64,
    length: u64,
}

impl<R: Read> BinaryReader<R> {
    pub fn new(inner: R, length: u64) -> Self {
        Self {
            inner,
            position: 0,
            length,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.length
    }

    pub fn read_i32(&mut self) -> Result<i32, DriverError> {
        let mut buf = [0; 4];
        self.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    pub fn read_i64(&mut self) -> Result<i64, DriverError> {
        let mut buf = [0; 8];
        self.read_exact(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    pub fn read_bool(&mut self) -> Result<bool, DriverError> {
        let mut buf = [0; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0] != 0)
    }

    pub fn read_string(&mut self) -> Result<String, DriverError> {
        let length = u64::from(self.read_7bit_encoded()?);
        if length > self.length.saturating_sub(self.position) {
            return Err(DriverError::Corrupted(format!(
                "string of {length} bytes at position {} exceeds stream length {}",
                self.position, self.length
            )));
        }
        let mut buf = vec![0; length as usize];
        self.read_exact(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn read_decimal(&mut self) -> Result<Decimal, DriverError> {
        let mut words = [0u32; 4];
        for word in words.iter_mut() {
            let mut buf = [0; 4];
            self.read_exact(&mut buf)?;
            *word = u32::from_le_bytes(buf);
        }
        let [lo, mid, hi, flags] = words;

        let scale = (flags & SCALE_MASK) >> SCALE_SHIFT;
        if flags & !(SIGN_MASK | SCALE_MASK) != 0 || scale > MAX_SCALE {
            return Err(DriverError::Corrupted(format!(
                "invalid decimal flags {flags:#010x}"
            )));
        }
        Ok(Decimal::from_parts(lo, mid, hi, flags & SIGN_MASK != 0, scale))
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), DriverError> {
        self.inner.read_exact(buf)?;
        self.position += buf.len() as u64;
        Ok(())
    }

    fn read_7bit_encoded(&mut self) -> Result<u32, DriverError> {
        let mut value: u32 = 0;
        for shift in (0..35).step_by(7) {
            let mut buf = [0; 1];
            self.read_exact(&mut buf)?;
            let byte = buf[0];
            if shift == 28 && byte > 0x0F {
                break;
            }
            value |= u32::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DriverError::Corrupted(String::from(
            "7-bit encoded length is too long",
        )))
    }
}

/// Reads records until the end of the file. The handle is dropped on return.
pub(crate) fn read_records<T>(
    path: &Path,
    mut read: impl FnMut(&mut BinaryReader<BufReader<File>>) -> Result<T, DriverError>,
) -> Result<Vec<T>, DriverError> {
    let file = File::open(path)?;
    let length = file.metadata()?.len();
    let mut reader = BinaryReader::new(BufReader::new(file), length);

    let mut records = Vec::new();
    while !reader.is_at_end() {
        records.push(read(&mut reader)?);
    }
    Ok(records)
}

/// Creates or truncates `path` and writes every item.
pub(crate) fn write_records<T>(
    path: &Path,
    items: &[T],
    mut write: impl FnMut(&mut BinaryWriter<BufWriter<File>>, &T) -> Result<(), DriverError>,
) -> Result<(), DriverError> {
    let file = File::create(path)?;
    let mut writer = BinaryWriter::new(BufWriter::new(file));
    for item in items {
        write(&mut writer, item)?;
    }
    writer.finish()?;
    Ok(())
}
