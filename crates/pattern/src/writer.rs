//! Streaming writer for antenna pattern binaries

// standard library
use std::io::{Seek, SeekFrom, Write};

// crate modules
use crate::error::{Error, Result};
use crate::header::PatternHeader;

// external crates
use log::{trace, warn};

/// Streams `(angle, gain)` samples into an antenna pattern binary
///
/// The sample count is not known up front, so a placeholder of 0 is written
/// and patched with the real count once the stream ends. Call
/// [finish()](PatternWriter::finish) to patch and flush explicitly. A writer
/// dropped without finishing still patches the count of samples written so
/// far before the handle is released.
///
/// ```rust
/// # use echotools_pattern::PatternWriter;
/// # use std::io::Cursor;
/// let mut buffer = Cursor::new(Vec::new());
///
/// let mut writer = PatternWriter::new(&mut buffer).unwrap();
/// writer.push(-0.5, 0.1).unwrap();
/// writer.push(0.5, 0.9).unwrap();
/// assert_eq!(writer.finish().unwrap(), 2);
///
/// // version, count, then two pairs of floats
/// assert_eq!(buffer.get_ref().len(), 5 + 2 * 8);
/// assert_eq!(buffer.get_ref()[1..5], 2i32.to_le_bytes());
/// ```
#[derive(Debug)]
pub struct PatternWriter<W: Write + Seek> {
    inner: W,
    count: i32,
    patched: bool,
}

impl<W: Write + Seek> PatternWriter<W> {
    /// Start a new pattern by writing the placeholder header
    pub fn new(mut inner: W) -> Result<Self> {
        inner.write_all(&PatternHeader::default().to_bytes()?)?;
        Ok(Self {
            inner,
            count: 0,
            patched: false,
        })
    }

    /// Append one sample
    pub fn push(&mut self, angle: f32, gain: f32) -> Result<()> {
        let count = self.count.checked_add(1).ok_or(Error::TooManySamples)?;
        self.inner.write_all(&angle.to_le_bytes())?;
        self.inner.write_all(&gain.to_le_bytes())?;
        self.count = count;
        Ok(())
    }

    /// Number of samples written so far
    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Patch the sample count into the header and flush
    ///
    /// Returns the final number of samples.
    pub fn finish(mut self) -> Result<usize> {
        self.patch()?;
        Ok(self.count as usize)
    }

    fn patch(&mut self) -> Result<()> {
        // only ever attempted once, even if it fails
        self.patched = true;
        trace!("Patching sample count {}", self.count);

        self.inner.seek(SeekFrom::Start(PatternHeader::COUNT_OFFSET))?;
        self.inner.write_all(&self.count.to_le_bytes())?;
        self.inner.seek(SeekFrom::End(0))?;
        self.inner.flush()?;
        Ok(())
    }
}

impl<W: Write + Seek> Drop for PatternWriter<W> {
    fn drop(&mut self) {
        if !self.patched {
            if let Err(e) = self.patch() {
                warn!("Unable to patch sample count on drop: {e}");
            }
        }
    }
}
