//! 2D array (matrix) operations
//!
//! Matrices are dense grids of elements, bounded to 10×10 so the
//! visualization stays legible. Access and update illuminate the target's
//! full row and column with a `spotlight` step before narrowing to the cell.

use rustc_hash::FxHashMap;

use rand::Rng;

use crate::engine::constants::{MATRIX_RANDOM_MAX, MATRIX_RANDOM_MIN, MAX_MATRIX_DIM};
use crate::model::{Grid, GridHighlights, GridRecorder, GridStep, IdGen};

/// The four fixed traversal strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    RowMajor,
    ColumnMajor,
    Spiral,
    Diagonal,
}

impl Traversal {
    pub fn name(self) -> &'static str {
        match self {
            Traversal::RowMajor => "Row-Major Traversal",
            Traversal::ColumnMajor => "Column-Major Traversal",
            Traversal::Spiral => "Spiral Traversal",
            Traversal::Diagonal => "Diagonal Traversal",
        }
    }
}

/// Create a matrix from a flat literal, or randomly filled when none is given
///
/// The literal is split on commas and whitespace; its element count must
/// equal `rows * cols` exactly.
pub fn create(
    rows: usize,
    cols: usize,
    custom: Option<&str>,
    ids: &mut IdGen,
    rng: &mut impl Rng,
) -> Vec<GridStep> {
    let mut rec = GridRecorder::new();

    if rows == 0 || cols == 0 || rows > MAX_MATRIX_DIM || cols > MAX_MATRIX_DIM {
        rec.record(
            &Vec::new(),
            GridHighlights::none(),
            format!(
                "Error: Please provide valid dimensions (1-{} for rows/cols).",
                MAX_MATRIX_DIM
            ),
        );
        return rec.finish();
    }

    if let Some(literal) = custom.map(str::trim).filter(|s| !s.is_empty()) {
        let mut numbers = Vec::new();
        for token in literal.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            match token.parse::<i64>() {
                Ok(number) => numbers.push(number),
                Err(_) => {
                    rec.record(
                        &Vec::new(),
                        GridHighlights::none(),
                        format!("Error: Invalid number found: \"{}\"", token),
                    );
                    return rec.finish();
                }
            }
        }
        if numbers.len() != rows * cols {
            rec.record(
                &Vec::new(),
                GridHighlights::none(),
                format!(
                    "Error: Number of elements ({}) does not match dimensions {}x{}.",
                    numbers.len(),
                    rows,
                    cols
                ),
            );
            return rec.finish();
        }

        let grid: Grid = (0..rows)
            .map(|i| (0..cols).map(|j| ids.element(numbers[i * cols + j])).collect())
            .collect();
        rec.record(
            &grid,
            GridHighlights::none(),
            format!("Created a new {}x{} 2D array from custom input.", rows, cols),
        );
        return rec.finish();
    }

    let grid: Grid = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| ids.element(rng.gen_range(MATRIX_RANDOM_MIN..=MATRIX_RANDOM_MAX)))
                .collect()
        })
        .collect();
    rec.record(
        &grid,
        GridHighlights::none(),
        format!("Created a new {}x{} random 2D array.", rows, cols),
    );
    rec.finish()
}

/// Read the element at `[row][col]`
pub fn access(grid: &Grid, row: usize, col: usize) -> Vec<GridStep> {
    let mut rec = GridRecorder::new();
    if out_of_bounds(grid, row, col) {
        rec.record(
            grid,
            GridHighlights::none(),
            format!("Error: Index [{}][{}] is out of bounds.", row, col),
        );
        return rec.finish();
    }

    rec.record(
        grid,
        GridHighlights {
            spotlight: Some((row, col)),
            ..GridHighlights::default()
        },
        format!("Focusing on row {} and column {}.", row, col),
    );
    rec.record(
        grid,
        GridHighlights {
            primary: vec![(row, col)],
            ..GridHighlights::default()
        },
        format!(
            "Accessed element at [{}][{}]. Value is {}.",
            row, col, grid[row][col].value
        ),
    );
    rec.finish()
}

/// Overwrite the value at `[row][col]`, keeping the element's id
pub fn update(grid: &Grid, row: usize, col: usize, value: i64) -> Vec<GridStep> {
    let mut rec = GridRecorder::new();
    if out_of_bounds(grid, row, col) {
        rec.record(
            grid,
            GridHighlights::none(),
            format!("Error: Index [{}][{}] is out of bounds.", row, col),
        );
        return rec.finish();
    }

    rec.record(
        grid,
        GridHighlights {
            spotlight: Some((row, col)),
            ..GridHighlights::default()
        },
        format!("Preparing to update value at [{}][{}] to {}.", row, col, value),
    );

    let mut next = grid.clone();
    next[row][col].value = value;
    rec.record(
        &next,
        GridHighlights {
            success: vec![(row, col)],
            ..GridHighlights::default()
        },
        format!("Successfully updated index [{}][{}] to {}.", row, col, value),
    );
    rec.finish()
}

/// Row-major scan for `value`, with early exit on a match
pub fn search(grid: &Grid, value: i64) -> Vec<GridStep> {
    let mut rec = GridRecorder::new();
    rec.record(
        grid,
        GridHighlights::none(),
        format!("Searching for value {} in the 2D array.", value),
    );

    for (i, row) in grid.iter().enumerate() {
        for (j, element) in row.iter().enumerate() {
            rec.record(
                grid,
                GridHighlights {
                    secondary: vec![(i, j)],
                    ..GridHighlights::default()
                },
                format!("Checking cell [{}][{}]... Value is {}.", i, j, element.value),
            );
            if element.value == value {
                rec.record(
                    grid,
                    GridHighlights {
                        success: vec![(i, j)],
                        ..GridHighlights::default()
                    },
                    format!("Value {} found at index [{}][{}].", value, i, j),
                );
                return rec.finish();
            }
        }
    }

    rec.record(
        grid,
        GridHighlights::none(),
        format!("Value {} not found in the array.", value),
    );
    rec.finish()
}

/// Replay one of the four traversal strategies
///
/// Each visited cell becomes the `primary` cursor while the accumulated
/// visited set stays highlighted as `secondary`; the terminal step marks all
/// visited cells with `success`.
pub fn traverse(grid: &Grid, strategy: Traversal) -> Vec<GridStep> {
    let mut rec = GridRecorder::new();
    let rows = grid.len();
    if rows == 0 || grid[0].is_empty() {
        rec.record(
            grid,
            GridHighlights::none(),
            "Error: Cannot traverse an empty matrix.",
        );
        return rec.finish();
    }
    let cols = grid[0].len();

    rec.record(
        grid,
        GridHighlights::none(),
        format!("Starting {}.", strategy.name()),
    );

    let mut visited: Vec<(usize, usize)> = Vec::new();
    let visit = |r: usize, c: usize, rec: &mut GridRecorder, visited: &mut Vec<(usize, usize)>| {
        visited.push((r, c));
        rec.record(
            grid,
            GridHighlights {
                primary: vec![(r, c)],
                secondary: visited.clone(),
                ..GridHighlights::default()
            },
            format!("Visiting cell [{}][{}].", r, c),
        );
    };

    match strategy {
        Traversal::RowMajor => {
            for i in 0..rows {
                for j in 0..cols {
                    visit(i, j, &mut rec, &mut visited);
                }
            }
        }
        Traversal::ColumnMajor => {
            for j in 0..cols {
                for i in 0..rows {
                    visit(i, j, &mut rec, &mut visited);
                }
            }
        }
        Traversal::Spiral => {
            // Peel concentric rings, shrinking each bound after its sweep
            let mut top: i64 = 0;
            let mut bottom: i64 = rows as i64 - 1;
            let mut left: i64 = 0;
            let mut right: i64 = cols as i64 - 1;
            while top <= bottom && left <= right {
                for j in left..=right {
                    visit(top as usize, j as usize, &mut rec, &mut visited);
                }
                top += 1;
                for i in top..=bottom {
                    visit(i as usize, right as usize, &mut rec, &mut visited);
                }
                right -= 1;
                if top <= bottom {
                    for j in (left..=right).rev() {
                        visit(bottom as usize, j as usize, &mut rec, &mut visited);
                    }
                    bottom -= 1;
                }
                if left <= right {
                    for i in (top..=bottom).rev() {
                        visit(i as usize, left as usize, &mut rec, &mut visited);
                    }
                    left += 1;
                }
            }
        }
        Traversal::Diagonal => {
            // Group cells by row+col; even diagonals sweep bottom-to-top,
            // odd ones top-to-bottom
            let mut diagonals: FxHashMap<usize, Vec<(usize, usize)>> = FxHashMap::default();
            for i in 0..rows {
                for j in 0..cols {
                    diagonals.entry(i + j).or_default().push((i, j));
                }
            }
            for sum in 0..rows + cols - 1 {
                if let Some(cells) = diagonals.get(&sum) {
                    if sum % 2 == 0 {
                        for &(r, c) in cells.iter().rev() {
                            visit(r, c, &mut rec, &mut visited);
                        }
                    } else {
                        for &(r, c) in cells {
                            visit(r, c, &mut rec, &mut visited);
                        }
                    }
                }
            }
        }
    }

    rec.record(
        grid,
        GridHighlights {
            success: visited,
            ..GridHighlights::default()
        },
        format!("{} complete. All cells visited.", strategy.name()),
    );
    rec.finish()
}

fn out_of_bounds(grid: &Grid, row: usize, col: usize) -> bool {
    row >= grid.len() || !grid.first().is_some_and(|r| col < r.len())
}
