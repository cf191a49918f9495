//! Decompress zlib- and gzip-wrapped buffers into memory.
//!
//! Compressed payloads (saved levels, downloaded assets) rarely announce
//! their decompressed size, so the output buffer starts at a caller-provided
//! hint and doubles whenever it fills before the stream ends. A bad hint
//! costs extra copies, never a failure.

use std::io::{self, Read};

use flate2::read::MultiGzDecoder;
use flate2::{Decompress, FlushDecompress, Status};
use log::*;

use crate::{CommonError, CommonResult};

/// Output-size hint used by [`decompress`] when the caller has no better
/// guess.
pub const DEFAULT_SIZE_HINT: usize = 256 * 1024;

const GROWTH_FACTOR: usize = 2;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decompresses `data` with the default size hint.
pub fn decompress(data: &[u8]) -> CommonResult<Vec<u8>> {
    decompress_with_hint(data, DEFAULT_SIZE_HINT)
}

/// Decompresses `data`, starting from an output buffer of `size_hint` bytes.
///
/// Accepts both zlib- and gzip-wrapped streams; the wrapper is picked by
/// sniffing the gzip magic bytes. The returned vector holds exactly the
/// decompressed bytes. First failure aborts the whole operation - there are
/// no partial results.
pub fn decompress_with_hint(data: &[u8], size_hint: usize) -> CommonResult<Vec<u8>> {
    if data.starts_with(&GZIP_MAGIC) {
        inflate_gzip(data, size_hint)
    } else {
        inflate_zlib(data, size_hint)
    }
}

fn inflate_zlib(data: &[u8], size_hint: usize) -> CommonResult<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut buf = Vec::new();
    reserve(&mut buf, size_hint.max(1))?;

    loop {
        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();

        // decompress_vec appends into the vector's spare capacity.
        let status = inflater
            .decompress_vec(&data[consumed..], &mut buf, FlushDecompress::None)
            .map_err(|e| {
                warn!("inflate: {e}");
                CommonError::CorruptData(e.to_string())
            })?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                if buf.len() == buf.capacity() {
                    // Output exhausted before end of stream - double and
                    // continue.
                    let wanted = buf.capacity() * GROWTH_FACTOR;
                    trace!("inflate: output full at {} bytes, growing to {wanted}", buf.len());
                    reserve(&mut buf, wanted)?;
                } else if inflater.total_out() == produced {
                    // Output space left but no progress: the input ran dry
                    // before the stream ended.
                    warn!("inflate: stream ended after {consumed} input bytes");
                    return Err(CommonError::TruncatedData);
                }
            }
        }
    }

    Ok(buf)
}

/// Same growth policy as [`inflate_zlib`], but through the gzip wrapper
/// (header, trailer, and possibly several concatenated members).
fn inflate_gzip(data: &[u8], size_hint: usize) -> CommonResult<Vec<u8>> {
    let mut decoder = MultiGzDecoder::new(data);

    let mut buf = Vec::new();
    reserve(&mut buf, size_hint.max(1))?;
    buf.resize(buf.capacity(), 0);

    let mut len = 0;
    loop {
        if len == buf.len() {
            let wanted = buf.capacity() * GROWTH_FACTOR;
            trace!("inflate: output full at {len} bytes, growing to {wanted}");
            reserve(&mut buf, wanted)?;
            buf.resize(buf.capacity(), 0);
        }

        match decoder.read(&mut buf[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) => {
                warn!("inflate: {e}");
                return Err(decode_error(e));
            }
        }
    }

    buf.truncate(len);
    Ok(buf)
}

/// Fallibly grows `buf`'s capacity to at least `total` bytes.
fn reserve(buf: &mut Vec<u8>, total: usize) -> CommonResult<()> {
    buf.try_reserve_exact(total - buf.len())
        .map_err(|_| CommonError::OutOfMemory { wanted: total })
}

fn decode_error(e: io::Error) -> CommonError {
    match e.kind() {
        io::ErrorKind::UnexpectedEof => CommonError::TruncatedData,
        _ => CommonError::CorruptData(e.to_string()),
    }
}
