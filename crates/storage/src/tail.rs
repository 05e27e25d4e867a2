// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backward scan for the last record of a partition file
//!
//! Reads fixed-size blocks from the end of the file towards the start,
//! collecting bytes until a newline is crossed with non-whitespace content
//! pending. Cost is bounded by the size of the final record (plus any
//! trailing blank lines), not by the size of the file.

use std::io::{self, Read, Seek, SeekFrom};

const TAIL_BLOCK_SIZE: usize = 4096;

/// Return the last line holding non-whitespace content, without its newline
pub(crate) fn last_non_empty_line<R: Read + Seek>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    scan_backward(reader, TAIL_BLOCK_SIZE)
}

fn scan_backward<R: Read + Seek>(
    reader: &mut R,
    block_size: usize,
) -> io::Result<Option<Vec<u8>>> {
    let mut position = reader.seek(SeekFrom::End(0))?;
    let mut block = vec![0u8; block_size.max(1)];
    // Bytes of the line being collected, last byte first
    let mut pending: Vec<u8> = Vec::new();

    while position > 0 {
        let step = position.min(block.len() as u64) as usize;
        position -= step as u64;
        reader.seek(SeekFrom::Start(position))?;
        reader.read_exact(&mut block[..step])?;

        for &byte in block[..step].iter().rev() {
            if byte != b'\n' {
                pending.push(byte);
                continue;
            }
            if has_content(&pending) {
                return Ok(Some(into_line(pending)));
            }
            pending.clear();
        }
    }

    // Reached the start of the file: the first line may be the only one
    Ok(has_content(&pending).then(|| into_line(pending)))
}

fn has_content(bytes: &[u8]) -> bool {
    bytes.iter().any(|byte| !byte.is_ascii_whitespace())
}

fn into_line(mut reversed: Vec<u8>) -> Vec<u8> {
    reversed.reverse();
    reversed
}

#[cfg(test)]
#[path = "tail_tests.rs"]
mod tests;
