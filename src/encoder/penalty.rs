//! Mask evaluation: the four penalty rules of ISO/IEC 18004 section 7.8.3.
//!
//! Rules run over the whole symbol, function patterns included. Rule 3
//! looks for the 1:1:3:1:1 finder-like pattern flanked by four light
//! modules at every scale that fits, treating modules beyond the border
//! as light.

use crate::models::BitMatrix;

const RUN_THRESHOLD: usize = 5;
const RUN_BASE: u32 = 3;
const BLOCK_PENALTY: u32 = 3;
const FINDER_LIKE_PENALTY: u32 = 40;
const BALANCE_PENALTY: u32 = 10;

/// Light-dark sequence searched by rule 3 (true = dark)
const FINDER_LIKE: [bool; 15] = [
    false, false, false, false, true, false, true, true, true, false, true, false, false, false,
    false,
];

/// Penalty breakdown for one masked symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Penalty {
    /// Runs of five or more same-colored modules
    pub n1: u32,
    /// 2x2 single-color blocks
    pub n2: u32,
    /// Finder-like patterns
    pub n3: u32,
    /// Dark/light imbalance
    pub n4: u32,
}

impl Penalty {
    /// Sum of all four rules
    pub fn total(&self) -> u32 {
        self.n1 + self.n2 + self.n3 + self.n4
    }
}

/// Score a square module matrix.
pub fn evaluate(modules: &BitMatrix) -> Penalty {
    let size = modules.width();
    if size == 0 {
        return Penalty::default();
    }
    let grid = Grid {
        size,
        cells: modules.to_bools(),
    };
    Penalty {
        n1: run_penalty(&grid),
        n2: block_penalty(&grid),
        n3: finder_like_penalty(&grid),
        n4: balance_penalty(&grid),
    }
}

struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    fn get(&self, x: i32, y: i32) -> bool {
        let n = self.size as i32;
        if x < 0 || y < 0 || x >= n || y >= n {
            return false;
        }
        self.cells[y as usize * self.size + x as usize]
    }

    /// Module `along` positions into line `line`, rows or columns.
    fn line(&self, vertical: bool, line: i32, along: i32) -> bool {
        if vertical {
            self.get(line, along)
        } else {
            self.get(along, line)
        }
    }
}

fn run_penalty(grid: &Grid) -> u32 {
    let n = grid.size as i32;
    let mut penalty = 0;
    for vertical in [false, true] {
        for line in 0..n {
            let mut run = 1;
            let mut prev = grid.line(vertical, line, 0);
            for along in 1..n {
                let cur = grid.line(vertical, line, along);
                if cur == prev {
                    run += 1;
                } else {
                    penalty += run_score(run);
                    run = 1;
                    prev = cur;
                }
            }
            penalty += run_score(run);
        }
    }
    penalty
}

fn run_score(run: usize) -> u32 {
    if run >= RUN_THRESHOLD {
        RUN_BASE + (run - RUN_THRESHOLD) as u32
    } else {
        0
    }
}

fn block_penalty(grid: &Grid) -> u32 {
    let n = grid.size as i32;
    let mut penalty = 0;
    for y in 0..n - 1 {
        for x in 0..n - 1 {
            let c = grid.get(x, y);
            if grid.get(x + 1, y) == c && grid.get(x, y + 1) == c && grid.get(x + 1, y + 1) == c {
                penalty += BLOCK_PENALTY;
            }
        }
    }
    penalty
}

fn finder_like_penalty(grid: &Grid) -> u32 {
    let n = grid.size as i32;
    let mut penalty = 0;
    let mut scale = 1i32;
    while 15 * scale < n + 8 {
        let span = 15 * scale;
        for line in 0..n {
            for start in -4..=n + 4 - span {
                for vertical in [false, true] {
                    if matches_at(grid, vertical, line, start, scale) {
                        penalty += FINDER_LIKE_PENALTY;
                    }
                }
            }
        }
        scale += 1;
    }
    penalty
}

fn matches_at(grid: &Grid, vertical: bool, line: i32, start: i32, scale: i32) -> bool {
    FINDER_LIKE.iter().enumerate().all(|(e, &dark)| {
        let from = start + e as i32 * scale;
        (from..from + scale).all(|along| grid.line(vertical, line, along) == dark)
    })
}

fn balance_penalty(grid: &Grid) -> u32 {
    let total = grid.cells.len() as i64;
    let dark = grid.cells.iter().filter(|&&c| c).count() as i64;
    // Whole 5% steps away from 50% dark
    let steps = (20 * dark - 10 * total).abs() / total;
    steps as u32 * BALANCE_PENALTY
}
