//! Row instruction encoding.
//!
//! Converts a stitch grid into per-row, direction-tagged, run-length
//! encoded color blocks. Tapestry crochet alternates working direction per
//! row: odd physical rows are worked on the right side (RS, read right to
//! left), even rows on the wrong side (WS, read left to right).

use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which face of the work a row is stitched on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "RS")]
    Rs,
    #[serde(rename = "WS")]
    Ws,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Rs => write!(f, "RS"),
            Side::Ws => write!(f, "WS"),
        }
    }
}

/// A run of consecutive identical stitches in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowBlock {
    pub color_id: String,
    pub count: usize,
}

/// One grid row encoded for working: physical row number (1 = bottom),
/// side, and blocks in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowInstruction {
    pub row_num: usize,
    pub side: Side,
    pub blocks: Vec<RowBlock>,
}

/// Encode every grid row into a `RowInstruction`.
///
/// Output is in grid storage order (top row first). Storage index 0 is the
/// topmost row, so its physical row number is `rows - index`; row 1 is the
/// bottom row. Callers wanting bottom-up construction order must reorder
/// explicitly via [`working_order`].
pub fn encode_rows(grid: &Grid) -> Vec<RowInstruction> {
    let rows = grid.rows();
    (0..rows)
        .map(|index| {
            let row_num = rows - index;
            let side = if row_num % 2 == 1 { Side::Rs } else { Side::Ws };
            let cells = grid.row(index);
            let blocks = match side {
                Side::Rs => run_length_encode(cells.iter().rev()),
                Side::Ws => run_length_encode(cells.iter()),
            };
            RowInstruction {
                row_num,
                side,
                blocks,
            }
        })
        .collect()
}

/// Reorder instructions for bottom-up working: ascending physical row
/// number, row 1 first. This is the consumer-side reordering step; the
/// encoder itself always emits storage order.
pub fn working_order(mut instructions: Vec<RowInstruction>) -> Vec<RowInstruction> {
    instructions.sort_by_key(|instruction| instruction.row_num);
    instructions
}

fn run_length_encode<'a>(cells: impl Iterator<Item = &'a String>) -> Vec<RowBlock> {
    let mut blocks: Vec<RowBlock> = Vec::new();
    for id in cells {
        match blocks.last_mut() {
            Some(block) if block.color_id == *id => block.count += 1,
            _ => blocks.push(RowBlock {
                color_id: id.clone(),
                count: 1,
            }),
        }
    }
    blocks
}
