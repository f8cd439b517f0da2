//! Output destination for generated lines

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SprayForgeError};

/// Where generated lines go: a file, or standard output
#[derive(Debug)]
pub enum Sink {
    File { writer: BufWriter<File>, path: PathBuf },
    Stdout(BufWriter<Stdout>),
}

impl Sink {
    /// Open `path` for writing (truncating it), or standard output if `None`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    SprayForgeError::from(e).with_path(path.display().to_string())
                })?;
                tracing::debug!(path = %path.display(), "Opened output file");
                Ok(Self::File {
                    writer: BufWriter::new(file),
                    path: path.to_path_buf(),
                })
            }
            None => Ok(Self::Stdout(BufWriter::new(io::stdout()))),
        }
    }

    /// Output path, if writing to a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            Sink::File { path, .. } => Some(path),
            Sink::Stdout(_) => None,
        }
    }

    /// Flush buffered lines and release the destination.
    pub fn finish(mut self) -> Result<()> {
        let path = self.path().map(|p| p.display().to_string());
        self.flush().map_err(|e| match path {
            Some(path) => SprayForgeError::from(e).with_path(path),
            None => SprayForgeError::from(e),
        })
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::File { writer, .. } => writer.write(buf),
            Sink::Stdout(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File { writer, .. } => writer.flush(),
            Sink::Stdout(writer) => writer.flush(),
        }
    }
}
