//! Feasibility checks for a box build: beam length and panel packing.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::BoxConfig;
use crate::packer::RectPacker;
use crate::pieces::{beam_pieces, panel_pieces};
use crate::types::{BeamPiece, PackItem, PanelPiece, Placement, Rect};

pub fn total_beam_length(pieces: &[BeamPiece]) -> f64 {
    pieces.iter().map(|p| p.length).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamCheck {
    pub total: f64,
    pub stock: Option<f64>,
}

impl BeamCheck {
    pub fn new(pieces: &[BeamPiece], stock: Option<f64>) -> Self {
        Self {
            total: total_beam_length(pieces),
            stock,
        }
    }

    /// Stock left over (positive) or missing (negative). `None` without a
    /// configured stock length.
    pub fn balance(&self) -> Option<f64> {
        self.stock.map(|stock| stock - self.total)
    }
}

/// A panel piece resolved to its spot on the sheet. `rect` is the
/// margin-inclusive footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutPlacement {
    pub index: usize,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub rect: Rect,
}

impl CutPlacement {
    pub fn placement(&self) -> Placement {
        Placement {
            id: self.index,
            x: self.x,
            y: self.y,
            rect: self.rect,
        }
    }

    pub fn overlaps(&self, other: &CutPlacement) -> bool {
        self.placement().overlaps(&other.placement())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PackOutcome {
    Feasible { placements: Vec<CutPlacement> },
    /// Indices of the pieces that did not fit.
    Infeasible { unplaced: Vec<usize> },
}

impl PackOutcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, PackOutcome::Feasible { .. })
    }

    pub fn placements(&self) -> Option<&[CutPlacement]> {
        match self {
            PackOutcome::Feasible { placements } => Some(placements),
            PackOutcome::Infeasible { .. } => None,
        }
    }
}

/// Pack every piece, inflated by `margin`, into one `bin`. Anything short of
/// placing all of them is infeasible.
pub fn pack_panel(
    packer: &dyn RectPacker,
    pieces: &[PanelPiece],
    bin: Rect,
    margin: f64,
) -> PackOutcome {
    let items: Vec<PackItem> = pieces
        .iter()
        .enumerate()
        .map(|(id, piece)| PackItem {
            id,
            rect: piece.footprint(margin),
        })
        .collect();

    let placed = packer.pack(bin, &items);
    debug!(placed = placed.len(), requested = items.len(), "packed panel");

    let mut slots = vec![None; pieces.len()];
    for p in placed {
        if let Some(slot) = slots.get_mut(p.id) {
            *slot = Some(CutPlacement {
                index: p.id,
                name: pieces[p.id].name.clone(),
                x: p.x,
                y: p.y,
                rect: p.rect,
            });
        }
    }

    let unplaced: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_none())
        .map(|(i, _)| i)
        .collect();
    if !unplaced.is_empty() {
        return PackOutcome::Infeasible { unplaced };
    }

    let mut placements: Vec<CutPlacement> = slots.into_iter().flatten().collect();
    placements.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
    PackOutcome::Feasible { placements }
}

/// Everything the reporter needs: the derived pieces plus both checks.
#[derive(Debug, Clone, Serialize)]
pub struct CutPlan {
    pub bin: Rect,
    pub cut_margin: f64,
    pub panels: Vec<PanelPiece>,
    pub beams: Vec<BeamPiece>,
    pub beam_check: BeamCheck,
    pub outcome: PackOutcome,
}

impl CutPlan {
    pub fn build(cfg: &BoxConfig, packer: &dyn RectPacker) -> Self {
        let panels = panel_pieces(cfg);
        let beams = beam_pieces(cfg);
        let bin = cfg.panel();

        let beam_check = BeamCheck::new(&beams, cfg.beam_stock_length);
        if let Some(balance) = beam_check.balance()
            && balance < 0.0
        {
            warn!(missing = -balance, "beam stock too short");
        }

        let outcome = pack_panel(packer, &panels, bin, cfg.cut_margin);
        info!(
            panels = panels.len(),
            beams = beams.len(),
            beam_total = beam_check.total,
            feasible = outcome.is_feasible(),
            "cut plan built"
        );

        Self {
            bin,
            cut_margin: cfg.cut_margin,
            panels,
            beams,
            beam_check,
            outcome,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.outcome.is_feasible()
    }

    /// Names of the pieces that did not fit, in input order.
    pub fn unplaced_names(&self) -> Vec<&str> {
        match &self.outcome {
            PackOutcome::Feasible { .. } => Vec::new(),
            PackOutcome::Infeasible { unplaced } => unplaced
                .iter()
                .map(|&i| self.panels[i].name.as_str())
                .collect(),
        }
    }

    /// Share of the sheet covered by cut footprints, margin included.
    pub fn utilization_percent(&self) -> Option<f64> {
        let placements = self.outcome.placements()?;
        let bin_area = self.bin.area();
        if bin_area <= 0.0 {
            return Some(0.0);
        }
        let used: f64 = placements.iter().map(|p| p.rect.area()).sum();
        Some(used / bin_area * 100.0)
    }
}
