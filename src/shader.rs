//! Load shader sources from disk and hand them to a compiler backend.
//!
//! The GPU driver is an externally supplied capability; this module only
//! owns the whole-file source read and the error reporting, and talks to
//! the driver through the [`ShaderCompiler`] seam.

use std::fs;
use std::path::Path;

use log::*;

use crate::{CommonError, CommonResult};

/// Pipeline stage a shader object is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Opaque driver-side id of a compiled shader object.
///
/// Handles are only ever produced by a successful compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Compiles shader source into a driver object.
///
/// Implemented over whatever GPU API the host engine links against;
/// tests use an in-memory fake.
pub trait ShaderCompiler {
    fn compile(&mut self, stage: ShaderStage, source: &str) -> CommonResult<ShaderHandle>;
}

/// Reads the shader source at `path` and compiles it for `stage`.
///
/// Both the file read and the compile are soft failures the caller is
/// expected to check; they're logged here so call sites don't have to.
pub fn compile_shader_file<C: ShaderCompiler>(
    compiler: &mut C,
    path: impl AsRef<Path>,
    stage: ShaderStage,
) -> CommonResult<ShaderHandle> {
    let path = path.as_ref();
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            warn!("shader: couldn't read {}: {e}", path.display());
            return Err(CommonError::ShaderSource {
                path: path.to_owned(),
                source: e,
            });
        }
    };

    debug!(
        "shader: compiling {} ({} bytes, {stage:?})",
        path.display(),
        source.len()
    );
    compiler.compile(stage, &source).inspect_err(|e| {
        warn!("shader: {} failed to compile: {e}", path.display());
    })
}
