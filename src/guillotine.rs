use serde::{Deserialize, Serialize};

use crate::config::EPS;
use crate::types::{Placement, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeRect {
    pub x: f64,
    pub y: f64,
    pub rect: Rect,
}

impl FreeRect {
    fn x_end(&self) -> f64 {
        self.x + self.rect.length
    }

    fn y_end(&self) -> f64 {
        self.y + self.rect.width
    }

    fn contains(&self, other: &FreeRect) -> bool {
        self.x <= other.x + EPS
            && self.y <= other.y + EPS
            && self.x_end() + EPS >= other.x_end()
            && self.y_end() + EPS >= other.y_end()
    }

    /// Overlapping or sharing an edge.
    fn touches(&self, other: &FreeRect) -> bool {
        other.x <= self.x_end() + EPS
            && self.x <= other.x_end() + EPS
            && other.y <= self.y_end() + EPS
            && self.y <= other.y_end() + EPS
    }

    /// Grows `self` to cover `other` when the union is itself a rectangle.
    fn absorb(&mut self, other: &FreeRect) -> bool {
        if self.contains(other) {
            return true;
        }
        if other.contains(self) {
            *self = *other;
            return true;
        }
        if !self.touches(other) {
            return false;
        }
        // Stacked vertically: same column
        if (self.x - other.x).abs() < EPS && (self.rect.length - other.rect.length).abs() < EPS {
            let y = self.y.min(other.y);
            let y_end = self.y_end().max(other.y_end());
            self.y = y;
            self.rect.width = y_end - y;
            return true;
        }
        // Side by side: same row
        if (self.y - other.y).abs() < EPS && (self.rect.width - other.rect.width).abs() < EPS {
            let x = self.x.min(other.x);
            let x_end = self.x_end().max(other.x_end());
            self.x = x;
            self.rect.length = x_end - x;
            return true;
        }
        false
    }
}

/// A single stock sheet tracked as a list of free guillotine sections.
#[derive(Debug, Clone)]
pub struct GuillotineBin {
    pub free_rects: Vec<FreeRect>,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(clippy::enum_variant_names)]
pub enum ScoreStrategy {
    #[serde(rename = "baf")]
    BestAreaFit,
    #[default]
    #[serde(rename = "bssf")]
    BestShortSideFit,
    #[serde(rename = "blsf")]
    BestLongSideFit,
}

impl ScoreStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            ScoreStrategy::BestAreaFit => "baf",
            ScoreStrategy::BestShortSideFit => "bssf",
            ScoreStrategy::BestLongSideFit => "blsf",
        }
    }
}

impl std::str::FromStr for ScoreStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baf" => Ok(ScoreStrategy::BestAreaFit),
            "bssf" => Ok(ScoreStrategy::BestShortSideFit),
            "blsf" => Ok(ScoreStrategy::BestLongSideFit),
            _ => Err(format!(
                "invalid strategy '{}', expected: bssf, baf, or blsf",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredPlacement {
    pub free_idx: usize,
    pub score: f64,
}

impl GuillotineBin {
    pub fn new(stock: Rect) -> Self {
        Self {
            free_rects: vec![FreeRect {
                x: 0.0,
                y: 0.0,
                rect: stock,
            }],
            placements: Vec::new(),
        }
    }

    pub fn used_area(&self) -> f64 {
        self.placements.iter().map(|p| p.rect.area()).sum()
    }

    /// Lowest-scoring free section the piece fits in. Ties keep the earliest
    /// section. Pieces are never rotated.
    pub fn find_best(&self, piece: Rect, score_strategy: ScoreStrategy) -> Option<ScoredPlacement> {
        if !piece.is_positive() {
            return None;
        }

        let mut best: Option<ScoredPlacement> = None;
        for (idx, free) in self.free_rects.iter().enumerate() {
            if !piece.fits_in(&free.rect) {
                continue;
            }
            let score = Self::score(piece, free.rect, score_strategy);
            if best.is_none_or(|b| score < b.score) {
                best = Some(ScoredPlacement {
                    free_idx: idx,
                    score,
                });
            }
        }

        best
    }

    fn score(piece: Rect, free: Rect, strategy: ScoreStrategy) -> f64 {
        let dl = free.length - piece.length;
        let dw = free.width - piece.width;
        match strategy {
            ScoreStrategy::BestAreaFit => free.area() - piece.area(),
            ScoreStrategy::BestShortSideFit => dl.min(dw),
            ScoreStrategy::BestLongSideFit => dl.max(dw),
        }
    }

    pub fn place(&mut self, scored: ScoredPlacement, id: usize, piece: Rect) -> Placement {
        let free = self.free_rects.remove(scored.free_idx);

        let placement = Placement {
            id,
            x: free.x,
            y: free.y,
            rect: piece,
        };

        self.split(free, piece);
        self.placements.push(placement);

        placement
    }

    /// Split along the shorter axis of the free section.
    fn split(&mut self, free: FreeRect, placed: Rect) {
        let has_right = placed.length + EPS < free.rect.length;
        let has_below = placed.width + EPS < free.rect.width;
        let right_l = free.rect.length - placed.length;
        let below_w = free.rect.width - placed.width;

        if free.rect.length < free.rect.width {
            // Horizontal cut: the strip below spans the full section
            if has_below {
                self.add_free(FreeRect {
                    x: free.x,
                    y: free.y + placed.width,
                    rect: Rect::new(free.rect.length, below_w),
                });
            }
            if has_right {
                self.add_free(FreeRect {
                    x: free.x + placed.length,
                    y: free.y,
                    rect: Rect::new(right_l, placed.width),
                });
            }
        } else {
            // Vertical cut: the strip to the right spans the full section
            if has_below {
                self.add_free(FreeRect {
                    x: free.x,
                    y: free.y + placed.width,
                    rect: Rect::new(placed.length, below_w),
                });
            }
            if has_right {
                self.add_free(FreeRect {
                    x: free.x + placed.length,
                    y: free.y,
                    rect: Rect::new(right_l, free.rect.width),
                });
            }
        }
    }

    /// Push a new section after letting it swallow every neighbour it can
    /// merge with, until nothing changes.
    fn add_free(&mut self, mut section: FreeRect) {
        let mut prev_len = usize::MAX;
        while !self.free_rects.is_empty() && prev_len != self.free_rects.len() {
            prev_len = self.free_rects.len();
            self.free_rects.retain(|other| !section.absorb(other));
        }
        self.free_rects.push(section);
    }
}
