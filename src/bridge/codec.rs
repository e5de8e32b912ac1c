//! Length-prefixed JSON framing (native-messaging style).
//!
//! Each frame is a 4-byte little-endian length followed by that many bytes of
//! UTF-8 JSON.

use crate::constants::MAX_FRAME_SIZE;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, Read, Write};

/// Read one frame body. `None` means the peer closed the stream at a frame boundary.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Option<Vec<u8>>, AppError> {
    let mut len_bytes = [0u8; 4];
    match reader.read_exact(&mut len_bytes) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    let len = usize::try_from(u32::from_le_bytes(len_bytes)).unwrap_or(usize::MAX);
    if len == 0 {
        return Ok(None);
    }
    if len > MAX_FRAME_SIZE {
        return Err(AppError::FrameTooLarge { len, max: MAX_FRAME_SIZE });
    }

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;
    Ok(Some(body))
}

/// Write one frame and flush.
pub fn write_frame<W: Write>(writer: &mut W, body: &[u8]) -> Result<(), AppError> {
    let too_large = || AppError::FrameTooLarge { len: body.len(), max: MAX_FRAME_SIZE };
    if body.len() > MAX_FRAME_SIZE {
        return Err(too_large());
    }
    let len = u32::try_from(body.len()).map_err(|_| too_large())?;

    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(body)?;
    writer.flush()?;
    Ok(())
}

pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    Ok(serde_json::from_slice(body)?)
}

pub fn write_message<W: Write, T: Serialize>(writer: &mut W, message: &T) -> Result<(), AppError> {
    let body = serde_json::to_vec(message)?;
    write_frame(writer, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn framed(body: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        write_frame(&mut buf, body).unwrap();
        buf
    }

    #[test]
    fn test_frame_layout_is_little_endian() {
        let buf = framed(b"{}");
        assert_eq!(buf, vec![2, 0, 0, 0, b'{', b'}']);
    }

    #[test]
    fn test_reads_consecutive_frames_then_eof() {
        let mut buf = framed(b"\"one\"");
        buf.extend(framed(b"\"two\""));
        let mut reader = Cursor::new(buf);

        assert_eq!(read_frame(&mut reader).unwrap().as_deref(), Some(&b"\"one\""[..]));
        assert_eq!(read_frame(&mut reader).unwrap().as_deref(), Some(&b"\"two\""[..]));
        assert_eq!(read_frame(&mut reader).unwrap(), None);
    }

    #[test]
    fn test_zero_length_ends_session() {
        let mut reader = Cursor::new(vec![0, 0, 0, 0]);
        assert_eq!(read_frame(&mut reader).unwrap(), None);
    }

    #[test]
    fn test_rejects_oversized_frame() {
        let len = u32::try_from(MAX_FRAME_SIZE + 1).unwrap();
        let mut reader = Cursor::new(len.to_le_bytes().to_vec());
        let err = read_frame(&mut reader).unwrap_err();
        assert!(matches!(err, AppError::FrameTooLarge { .. }));
    }

    #[test]
    fn test_truncated_body_is_disconnect() {
        let mut reader = Cursor::new(vec![10, 0, 0, 0, b'{']);
        let err = read_frame(&mut reader).unwrap_err();
        assert!(err.is_disconnect());
    }

    #[test]
    fn test_write_rejects_oversized_body() {
        let body = vec![b' '; MAX_FRAME_SIZE + 1];
        let mut sink = Vec::new();
        assert!(write_frame(&mut sink, &body).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_decode_reports_bad_json() {
        let err = decode::<serde_json::Value>(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
