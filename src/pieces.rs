//! Derives every cut of the box from its [`BoxConfig`].

use crate::config::BoxConfig;
use crate::types::{BeamPiece, PanelPiece};

pub fn panel_pieces(cfg: &BoxConfig) -> Vec<PanelPiece> {
    let t = cfg.panel_thickness;
    let depth = cfg.piece_depth;
    let inner_depth = cfg.box_inner_depth;
    let piece = |name: &str, length: f64, width: f64| PanelPiece::new(name, length, width, t);

    let top = cfg.piece_width() / 2.0;
    let floor = (inner_depth + t, depth - cfg.baseboard_depth);
    let shelf = (inner_depth + t / 2.0, cfg.box_inner_width() + t);
    let back = cfg.piece_height() - 3.0 * t;
    let wall_side = cfg.piece_height() - 2.0 * t - cfg.baseboard_height;

    // Both floor boards share a label; they are still two separate cuts.
    vec![
        piece("Prancha", cfg.piece_width(), depth),
        piece("Topo 1", top, depth),
        piece("Topo 2", top, depth),
        piece("Chão 1", floor.0, floor.1),
        piece("Chão 1", floor.0, floor.1),
        piece("Prateleira 1", shelf.0, shelf.1),
        piece("Prateleira 2", shelf.0, shelf.1),
        piece("Fundo 1", back, depth),
        piece("Fundo 2", back, depth),
        piece("Laterais Sofá 1", back, inner_depth),
        piece("Laterais Sofá 2", back, inner_depth),
        piece("Laterais Parede 1", wall_side, inner_depth),
        piece("Laterais Parede 2", wall_side, inner_depth),
    ]
}

pub fn beam_pieces(cfg: &BoxConfig) -> Vec<BeamPiece> {
    let beam =
        |name: &str, length: f64| BeamPiece::new(name, length, cfg.beam_width, cfg.beam_height);

    let horizontal = cfg.piece_width() / 2.0 - cfg.box_inner_depth;
    let vertical = cfg.piece_height() - cfg.beam_height - cfg.panel_thickness;

    vec![
        beam("Barrote H 1", horizontal),
        beam("Barrote H 2", horizontal),
        beam("Barrote V 1", vertical),
        beam("Barrote V 2", vertical),
    ]
}
