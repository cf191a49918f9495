//! Shared utility routines for the engine.
//!
//! Everything in here is a stateless free function (or a small trait seam
//! over a driver API the host engine supplies): decompressing zlib/gzip
//! buffers into memory, loading and compiling shader sources, splitting
//! and parsing strings, and building 2D pivot rotations.
//!
//! There is no shared state between calls - each call owns its own buffers.

pub mod inflate;
pub mod shader;
pub mod strings;
pub mod transform;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommonError {
    /// The compressed input is invalid. A stream demanding a preset
    /// dictionary also lands here, since the DEFLATE backend reports it
    /// as a data error.
    #[error("corrupt compressed data: {0}")]
    CorruptData(String),
    /// The compressed input ran out before the stream ended.
    #[error("compressed stream ended unexpectedly")]
    TruncatedData,
    /// Growing the decompression buffer failed.
    #[error("couldn't grow decompression buffer to {wanted} bytes")]
    OutOfMemory { wanted: usize },
    /// The shader source file couldn't be read.
    #[error("couldn't read shader source {}: {source}", path.display())]
    ShaderSource {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The driver rejected the shader source.
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
}

pub type CommonResult<T> = Result<T, CommonError>;

pub use inflate::{decompress, decompress_with_hint};
pub use shader::{compile_shader_file, ShaderCompiler, ShaderHandle, ShaderStage};
pub use strings::{parse_float, parse_int, section_for_pos, split_delimited, xor_bytes};
pub use transform::{rotation_around_point, transform_point};
