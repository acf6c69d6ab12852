//! File-to-file translation.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use bytebound_core::{BoundedByteReader, ByteSink, ByteWriter};
use log::info;

use crate::Translator;

/// How the input file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Bound reads at the input file's length.
    #[default]
    Bounded,
    /// Read until the file reports end of data.
    Unbounded,
}

/// Byte counts of a completed copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    /// Bytes consumed from the input.
    pub bytes_read: u64,
    /// Bytes accepted by the output.
    pub bytes_written: u64,
}

/// Error returned by [`copy_file`].
///
/// `E` is the translator's error type.
#[derive(Debug)]
pub enum CopyError<E> {
    /// The input could not be opened.
    Open {
        /// Input path.
        path: PathBuf,
        /// Underlying fault.
        source: std::io::Error,
    },
    /// The output could not be created.
    Create {
        /// Output path.
        path: PathBuf,
        /// Underlying fault.
        source: std::io::Error,
    },
    /// Decoding the input failed.
    Decode {
        /// Input path.
        path: PathBuf,
        /// Translator or stream error.
        source: E,
    },
    /// Encoding or flushing the output failed.
    Encode {
        /// Output path.
        path: PathBuf,
        /// Translator or stream error.
        source: E,
    },
    /// The output could not be synced to storage.
    Finish {
        /// Output path.
        path: PathBuf,
        /// Underlying fault.
        source: std::io::Error,
    },
}

impl<E> CopyError<E> {
    /// Path of the file involved in the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Create { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Finish { path, .. } => path,
        }
    }
}

impl<E> fmt::Display for CopyError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, .. } => write!(f, "failed to open {}", path.display()),
            Self::Create { path, .. } => write!(f, "failed to create {}", path.display()),
            Self::Decode { path, .. } => write!(f, "failed to decode {}", path.display()),
            Self::Encode { path, .. } => write!(f, "failed to encode {}", path.display()),
            Self::Finish { path, .. } => write!(f, "failed to finish {}", path.display()),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for CopyError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Create { source, .. } | Self::Finish { source, .. } => {
                Some(source)
            }
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
        }
    }
}

/// Decode `input` with `translator`, then encode the value into `output`.
///
/// The input is closed before the output is created, so a decoding failure
/// leaves no output file behind. The output is flushed and synced before
/// returning; a failure after encoding has started leaves whatever the sink
/// already accepted in place.
pub fn copy_file<T: Translator>(
    translator: &T,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    mode: ReadMode,
) -> Result<CopyReport, CopyError<T::Error>> {
    let input = input.as_ref();
    let output = output.as_ref();
    info!("copying {} -> {}", input.display(), output.display());

    let (value, bytes_read) = {
        let mut file = File::open(input).map_err(|source| CopyError::<T::Error>::Open {
            path: input.to_path_buf(),
            source,
        })?;
        let mut reader = match mode {
            ReadMode::Bounded => BoundedByteReader::from_file(&mut file).map_err(|err| {
                CopyError::<T::Error>::Decode {
                    path: input.to_path_buf(),
                    source: err.into(),
                }
            })?,
            ReadMode::Unbounded => BoundedByteReader::unbounded(&mut file),
        };
        let value = translator
            .decode(&mut reader)
            .map_err(|source| CopyError::<T::Error>::Decode {
                path: input.to_path_buf(),
                source,
            })?;
        (value, reader.position())
    };

    let mut file = File::create(output).map_err(|source| CopyError::<T::Error>::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = ByteWriter::new(&mut file);
    let encode_err = |source: T::Error| CopyError::<T::Error>::Encode {
        path: output.to_path_buf(),
        source,
    };
    translator.encode(&mut writer, &value).map_err(encode_err)?;
    writer.flush().map_err(|err| encode_err(err.into()))?;
    let bytes_written = writer.position();

    file.sync_all().map_err(|source| CopyError::<T::Error>::Finish {
        path: output.to_path_buf(),
        source,
    })?;

    info!("copied {bytes_read} bytes in, {bytes_written} bytes out");
    Ok(CopyReport {
        bytes_read,
        bytes_written,
    })
}
