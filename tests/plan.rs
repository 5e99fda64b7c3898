//! End-to-end checks on whole cut plans: default build, the single-piece and
//! oversize scenarios, and layout invariants across strategies.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use sofa_box_planner::guillotine::ScoreStrategy;
use sofa_box_planner::plan::{CutPlacement, pack_panel};
use sofa_box_planner::render::PanelRenderer;
use sofa_box_planner::svg::SvgRenderer;
use sofa_box_planner::types::{PanelPiece, Rect};
use sofa_box_planner::{BoxConfig, CutPlan, GuillotinePacker, PackOutcome, report};

const STRATEGIES: [ScoreStrategy; 3] = [
    ScoreStrategy::BestShortSideFit,
    ScoreStrategy::BestAreaFit,
    ScoreStrategy::BestLongSideFit,
];

fn assert_layout_valid(bin: Rect, pieces: &[PanelPiece], margin: f64, placements: &[CutPlacement]) {
    let indices: HashSet<usize> = placements.iter().map(|p| p.index).collect();
    assert_eq!(indices, (0..pieces.len()).collect::<HashSet<_>>());
    assert_eq!(placements.len(), pieces.len());

    for p in placements {
        assert_eq!(p.name, pieces[p.index].name);
        assert_eq!(p.rect, pieces[p.index].footprint(margin));
        assert!(p.x >= 0.0 && p.y >= 0.0);
        assert!(p.x + p.rect.length <= bin.length + 1e-6, "{} past sheet end", p.name);
        assert!(p.y + p.rect.width <= bin.width + 1e-6, "{} past sheet edge", p.name);
    }

    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            assert!(!a.overlaps(b), "{} overlaps {}", a.name, b.name);
        }
    }
}

#[test]
fn default_box_fits_one_sheet_with_every_strategy() {
    let cfg = BoxConfig::default();
    for strategy in STRATEGIES {
        let plan = CutPlan::build(&cfg, &GuillotinePacker::new(strategy));
        let placements = plan.outcome.placements().expect("default plan should pack");
        assert_layout_valid(plan.bin, &plan.panels, cfg.cut_margin, placements);
    }
}

#[test]
fn default_box_layout_with_short_side_fit() {
    let plan = CutPlan::build(&BoxConfig::default(), &GuillotinePacker::default());
    let placements = plan.outcome.placements().unwrap();
    let at = |name: &str| {
        let p = placements.iter().find(|p| p.name == name).unwrap();
        ((p.x * 10.0).round() / 10.0, (p.y * 10.0).round() / 10.0)
    };
    assert_eq!(at("Prancha"), (0.0, 0.0));
    assert_eq!(at("Topo 1"), (0.0, 15.0));
    assert_eq!(at("Topo 2"), (0.0, 30.0));
    assert_eq!(at("Laterais Sofá 1"), (165.0, 0.0));
    assert_eq!(at("Laterais Sofá 2"), (165.0, 17.0));
    assert_eq!(at("Fundo 1"), (0.0, 45.0));
    assert_eq!(at("Fundo 2"), (165.0, 34.0));
    assert_eq!(at("Laterais Parede 1"), (83.0, 15.0));
    assert_eq!(at("Laterais Parede 2"), (83.0, 32.0));
    assert_eq!(at("Prateleira 1"), (136.9, 28.5));
    assert_eq!(at("Prateleira 2"), (136.9, 41.7));
}

#[test]
fn packing_is_repeatable() {
    let cfg = BoxConfig::default();
    let packer = GuillotinePacker::default();
    let first = CutPlan::build(&cfg, &packer);
    let second = CutPlan::build(&cfg, &packer);
    assert_eq!(first.outcome, second.outcome);
}

#[test]
fn single_piece_scenario() {
    let pieces = [PanelPiece::new("A", 164.0, 14.0, 1.8)];
    let outcome = pack_panel(&GuillotinePacker::default(), &pieces, Rect::new(240.0, 60.0), 1.0);
    let placements = outcome.placements().unwrap();
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].name, "A");
    assert_eq!((placements[0].x, placements[0].y), (0.0, 0.0));
    assert_eq!(placements[0].rect, Rect::new(165.0, 15.0));
}

#[test]
fn oversize_scenario_is_infeasible() {
    let pieces = [
        PanelPiece::new("A", 239.0, 60.0, 1.8),
        PanelPiece::new("B", 2.0, 2.0, 1.8),
    ];
    for strategy in STRATEGIES {
        let outcome = pack_panel(
            &GuillotinePacker::new(strategy),
            &pieces,
            Rect::new(240.0, 60.0),
            1.0,
        );
        assert!(matches!(outcome, PackOutcome::Infeasible { .. }));
        assert!(outcome.placements().is_none());
    }
}

#[test]
fn oversize_piece_fails_regardless_of_others() {
    let mut pieces = vec![PanelPiece::new("wide", 240.0, 5.0, 1.8)];
    pieces.extend((0..5).map(|i| PanelPiece::new(format!("p{i}"), 10.0, 10.0, 1.8)));
    let outcome = pack_panel(&GuillotinePacker::default(), &pieces, Rect::new(240.0, 60.0), 1.0);
    assert_eq!(outcome, PackOutcome::Infeasible { unplaced: vec![0] });
}

#[test]
fn empty_piece_list_packs_trivially() {
    let outcome = pack_panel(&GuillotinePacker::default(), &[], Rect::new(240.0, 60.0), 1.0);
    assert_eq!(outcome, PackOutcome::Feasible { placements: vec![] });
}

#[test]
fn misconfigured_box_surfaces_as_infeasible() {
    // Floor boards end up with negative width
    let cfg = BoxConfig {
        baseboard_depth: 20.0,
        ..BoxConfig::default()
    };
    let plan = CutPlan::build(&cfg, &GuillotinePacker::default());
    assert!(!plan.is_feasible());
    let text = report::transcript(&plan);
    assert!(text.contains("NOT possible"));
    assert!(text.contains("Did not fit: Chão 1, Chão 1"));
}

#[test]
fn svg_has_one_label_per_piece() {
    let plan = CutPlan::build(&BoxConfig::default(), &GuillotinePacker::default());
    let svg = SvgRenderer::default().render(plan.bin, plan.outcome.placements().unwrap());
    assert_eq!(svg.matches("</text>").count(), plan.panels.len() + 1);
    assert_eq!(svg.matches(">Chão 1</text>").count(), 2);
}

#[test]
fn plan_serializes_with_status_tag() {
    let plan = CutPlan::build(&BoxConfig::default(), &GuillotinePacker::default());
    let json: serde_json::Value = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["outcome"]["status"], "feasible");
    assert_eq!(json["outcome"]["placements"].as_array().unwrap().len(), 13);
    assert_eq!(json["beams"].as_array().unwrap().len(), 4);
}
