use std::fs::File;
use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;

/// Byte sinks that can drop everything past `len`.
pub trait Truncate {
    fn truncate(&mut self, len: u64) -> std::io::Result<()>;
}

impl Truncate for File {
    fn truncate(&mut self, len: u64) -> std::io::Result<()> {
        self.set_len(len)
    }
}

impl Truncate for Cursor<Vec<u8>> {
    fn truncate(&mut self, len: u64) -> std::io::Result<()> {
        let len = usize::try_from(len).map_err(std::io::Error::other)?;
        self.get_mut().truncate(len);
        Ok(())
    }
}

/// Anything a league can live in.
pub trait Resource: Read + Write + Seek + Truncate {}

impl<T> Resource for T where T: Read + Write + Seek + Truncate {}

/// Holds a resource whose content is only ever replaced whole. Not
/// crash-atomic; a failure after the truncate leaves the resource empty or
/// partial.
#[derive(Debug)]
pub struct Tape<R>(R);

impl<R> From<R> for Tape<R> {
    fn from(resource: R) -> Self {
        Self(resource)
    }
}

impl<R> Tape<R> {
    pub fn inner(&self) -> &R {
        &self.0
    }
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.0
    }
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R> Tape<R>
where
    R: Resource,
{
    /// Truncates, rewinds, then writes all of `bytes` from offset zero.
    /// An empty `bytes` leaves the resource empty.
    pub fn overwrite(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.0.truncate(0)?;
        self.0.seek(SeekFrom::Start(0))?;
        self.0.write_all(bytes)?;
        self.0.flush()
    }
}
