//! Table resolution: table and cell blocks → ordered grid sequence.

use crate::model::{Block, BlockType, ResolvedTable};

use super::index::BlockIndex;
use super::options::{BoundsPolicy, ResolveOptions};

/// Cursor over the table currently receiving cells.
///
/// `Open` holds the position of the most recent table in the output
/// sequence; cells are attributed to it until the next `Table` block.
#[derive(Debug, Clone, Copy)]
enum TableCursor {
    Idle,
    Open(usize),
}

/// Resolve tables from the block list.
///
/// Single pass in list order. A `Table` block starts a new table and makes
/// it current; a `Cell` block stores its child text at its 1-based
/// row/column position within the current table. Cells before any table,
/// and cells missing their indices, are dropped. Repeated positions keep
/// the last write.
pub fn resolve_tables(
    blocks: &[Block],
    index: &BlockIndex,
    options: &ResolveOptions,
) -> Vec<ResolvedTable> {
    let mut tables = Vec::new();
    let mut cursor = TableCursor::Idle;

    for block in blocks {
        match block.kind {
            BlockType::Table => {
                tables.push(ResolvedTable::new(
                    block.row_count.unwrap_or(0),
                    block.column_count.unwrap_or(0),
                ));
                cursor = TableCursor::Open(tables.len() - 1);
            }
            BlockType::Cell => {
                let TableCursor::Open(current) = cursor else {
                    log::debug!("cell {} before any table, dropped", block.id);
                    continue;
                };
                let (Some(row_index), Some(column_index)) = (block.row_index, block.column_index)
                else {
                    log::debug!("cell {} missing row/column index, dropped", block.id);
                    continue;
                };
                if row_index == 0 || column_index == 0 {
                    log::debug!("cell {} has zero index in 1-based data, dropped", block.id);
                    continue;
                }
                let row = (row_index - 1) as usize;
                let col = (column_index - 1) as usize;

                let table = &mut tables[current];
                if options.bounds == BoundsPolicy::Drop && !table.in_bounds(row, col) {
                    log::debug!(
                        "cell {} at ({}, {}) outside declared {}x{} grid, dropped",
                        block.id,
                        row_index,
                        column_index,
                        table.row_count,
                        table.column_count
                    );
                    continue;
                }
                table.place(row, col, index.child_text(block));
            }
            _ => {}
        }
    }

    tables
}
