//! File I/O for saving and loading a solved move sequence.
//!
//! Binary format for `solution.bin` (little endian):
//! - u32: move count
//! - repeat per move: 4 bytes `from_row, from_col, to_row, to_col`,
//!   each in range for the 2x3 board
//!
//! `solution.txt` holds the human-readable replay of the same moves.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::board::{COLS, ROWS};
use crate::geometry::Position;
use crate::state::{format_replay, Move};

const SOLUTION_BIN: &str = "solution.bin";
const SOLUTION_TXT: &str = "solution.txt";

/// Errors from reading or writing solution files.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("solution file ends in the middle of a record")]
    Truncated,

    #[error("saved move references square ({0}, {1}) outside the board")]
    OffBoardSquare(u8, u8),
}

/// Path of the binary solution file inside `dir`.
pub fn bin_path(dir: &Path) -> PathBuf {
    dir.join(SOLUTION_BIN)
}

/// Path of the text solution file inside `dir`.
pub fn txt_path(dir: &Path) -> PathBuf {
    dir.join(SOLUTION_TXT)
}

/// Saves the move sequence to both text and binary files in `dir`.
pub fn save(dir: &Path, moves: &[Move]) -> Result<(), PersistenceError> {
    save_text(dir, moves)?;
    save_binary(dir, moves)?;
    Ok(())
}

/// Saves the human-readable replay.
fn save_text(dir: &Path, moves: &[Move]) -> Result<(), PersistenceError> {
    let mut file = File::create(txt_path(dir))?;
    writeln!(file, "Solved in {} moves.\n", moves.len())?;
    write!(file, "{}", format_replay(moves))?;
    Ok(())
}

/// Saves the compact binary form for fast reloading.
fn save_binary(dir: &Path, moves: &[Move]) -> Result<(), PersistenceError> {
    let mut file = File::create(bin_path(dir))?;

    file.write_all(&(moves.len() as u32).to_le_bytes())?;
    for mv in moves {
        file.write_all(&[
            mv.from.row as u8,
            mv.from.col as u8,
            mv.to.row as u8,
            mv.to.col as u8,
        ])?;
    }

    Ok(())
}

/// Loads the move sequence from the binary file in `dir`.
pub fn load(dir: &Path) -> Result<Vec<Move>, PersistenceError> {
    let mut file = File::open(bin_path(dir))?;

    let header: [u8; 4] = read_array(&mut file)?;
    let move_count = u32::from_le_bytes(header) as usize;

    let mut moves = Vec::with_capacity(move_count);
    for _ in 0..move_count {
        let record: [u8; 4] = read_array(&mut file)?;
        moves.push(Move::new(
            decode_position(record[0], record[1])?,
            decode_position(record[2], record[3])?,
        ));
    }

    Ok(moves)
}

/// Returns the saved move count without reading the whole file.
pub fn count(dir: &Path) -> Result<usize, PersistenceError> {
    let mut file = File::open(bin_path(dir))?;
    let header: [u8; 4] = read_array(&mut file)?;
    Ok(u32::from_le_bytes(header) as usize)
}

fn read_array<const N: usize>(file: &mut File) -> Result<[u8; N], PersistenceError> {
    let mut buffer = [0u8; N];
    file.read_exact(&mut buffer).map_err(|error| {
        if error.kind() == ErrorKind::UnexpectedEof {
            PersistenceError::Truncated
        } else {
            PersistenceError::Io(error)
        }
    })?;
    Ok(buffer)
}

fn decode_position(row: u8, col: u8) -> Result<Position, PersistenceError> {
    let position = Position::new(i32::from(row), i32::from(col));
    if position.is_within(ROWS, COLS) {
        Ok(position)
    } else {
        Err(PersistenceError::OffBoardSquare(row, col))
    }
}
