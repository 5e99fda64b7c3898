use tracing::debug;

use crate::guillotine::{GuillotineBin, ScoreStrategy};
use crate::types::{PackItem, Placement, Rect};

/// Places rectangles into a single bin without rotation.
///
/// Items missing from the returned list did not fit. Implementations must be
/// deterministic: identical input yields identical placements.
pub trait RectPacker {
    fn pack(&self, bin: Rect, items: &[PackItem]) -> Vec<Placement>;
}

/// Offline guillotine packer: items go in longest side first, each into the
/// free section picked by `strategy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuillotinePacker {
    strategy: ScoreStrategy,
}

impl GuillotinePacker {
    pub fn new(strategy: ScoreStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> ScoreStrategy {
        self.strategy
    }

    /// Longer side descending, then shorter side descending. Stable, so
    /// equal pieces keep their input order.
    fn sorted(items: &[PackItem]) -> Vec<PackItem> {
        let side_key = |r: &Rect| (r.length.max(r.width), r.length.min(r.width));
        let mut sorted = items.to_vec();
        sorted.sort_by(|a, b| {
            let (ka, kb) = (side_key(&a.rect), side_key(&b.rect));
            kb.0.total_cmp(&ka.0).then(kb.1.total_cmp(&ka.1))
        });
        sorted
    }
}

impl RectPacker for GuillotinePacker {
    fn pack(&self, bin: Rect, items: &[PackItem]) -> Vec<Placement> {
        let mut sheet = GuillotineBin::new(bin);

        for item in Self::sorted(items) {
            match sheet.find_best(item.rect, self.strategy) {
                Some(scored) => {
                    sheet.place(scored, item.id, item.rect);
                }
                None => debug!(id = item.id, size = %item.rect, "no free section fits"),
            }
        }

        debug!(
            placed = sheet.placements.len(),
            used_area = sheet.used_area(),
            strategy = self.strategy.name(),
            "sheet packed"
        );
        sheet.placements
    }
}
