use crate::plan::CutPlacement;
use crate::types::Rect;

/// Draws a packed sheet. The coordinate origin is the sheet's top-left
/// corner with y growing downwards.
pub trait PanelRenderer {
    fn render(&self, bin: Rect, placements: &[CutPlacement]) -> String;
}

const MAX_WIDTH: f64 = 80.0;
const MAX_HEIGHT: f64 = 40.0;

/// Terminal layout drawn with `+`, `-` and `|`, scaled to fit 80x40 cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer;

impl PanelRenderer for AsciiRenderer {
    fn render(&self, bin: Rect, placements: &[CutPlacement]) -> String {
        render_sheet(bin, placements)
    }
}

pub fn render_sheet(stock: Rect, placements: &[CutPlacement]) -> String {
    if !stock.is_positive() {
        return String::new();
    }
    let scale = f64::min(MAX_WIDTH / stock.length, MAX_HEIGHT / stock.width);
    let grid_w = (stock.length * scale).round() as usize;
    let grid_h = (stock.width * scale).round() as usize;

    if grid_w == 0 || grid_h == 0 {
        return String::new();
    }

    let mut grid = vec![vec![' '; grid_w + 1]; grid_h + 1];

    // Draw stock border first
    draw_rect(&mut grid, 0, 0, grid_w, grid_h);

    for p in placements {
        let sx = (p.x * scale).round() as usize;
        let sy = (p.y * scale).round() as usize;
        let sw = (p.rect.length * scale).round() as usize;
        let sh = (p.rect.width * scale).round() as usize;

        if sw == 0 || sh == 0 {
            continue;
        }

        draw_rect(&mut grid, sx, sy, sw, sh);

        // Label only when there's an inner row to put it on
        if sw > 2 && sh > 1 {
            let label: Vec<char> = p.name.chars().take(sw - 1).collect();
            let cx = sx + sw / 2;
            let cy = sy + sh / 2;
            // Odd widths would otherwise start the label on the left border
            let start_x = cx.saturating_sub(label.len() / 2).max(sx + 1);

            for (i, &ch) in label.iter().enumerate() {
                let x = start_x + i;
                if x > sx && x < sx + sw && cy > sy && cy < sy + sh {
                    grid[cy][x] = ch;
                }
            }
        }
    }

    let mut result = String::new();
    for row in &grid {
        let line: String = row.iter().collect();
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}

#[allow(clippy::needless_range_loop)]
fn draw_rect(grid: &mut [Vec<char>], x: usize, y: usize, w: usize, h: usize) {
    let rows = grid.len();
    let cols = if rows > 0 { grid[0].len() } else { return };

    let horizontal = |c: char| if c == '|' || c == '+' { '+' } else { '-' };
    let vertical = |c: char| if c == '-' || c == '+' { '+' } else { '|' };

    for i in x..=x + w {
        if i < cols {
            if y < rows {
                grid[y][i] = horizontal(grid[y][i]);
            }
            if y + h < rows {
                grid[y + h][i] = horizontal(grid[y + h][i]);
            }
        }
    }

    for j in y..=y + h {
        if j < rows {
            if x < cols {
                grid[j][x] = vertical(grid[j][x]);
            }
            if x + w < cols {
                grid[j][x + w] = vertical(grid[j][x + w]);
            }
        }
    }

    for &cx in &[x, x + w] {
        for &cy in &[y, y + h] {
            if cy < rows && cx < cols {
                grid[cy][cx] = '+';
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(name: &str, x: f64, y: f64, length: f64, width: f64) -> CutPlacement {
        CutPlacement {
            index: 0,
            name: name.to_string(),
            x,
            y,
            rect: Rect::new(length, width),
        }
    }

    #[test]
    fn test_render_single_piece() {
        let stock = Rect::new(100.0, 50.0);
        let output = AsciiRenderer.render(stock, &[placed("Prancha", 0.0, 0.0, 100.0, 50.0)]);
        assert!(output.contains('+'));
        assert!(output.contains('-'));
        assert!(output.contains('|'));
        assert!(output.contains("Prancha"));
    }

    #[test]
    fn test_render_two_pieces() {
        let stock = Rect::new(100.0, 100.0);
        let placements = vec![
            placed("Left", 0.0, 0.0, 50.0, 100.0),
            placed("Right", 50.0, 0.0, 50.0, 100.0),
        ];
        let output = render_sheet(stock, &placements);
        assert!(output.contains("Left"));
        assert!(output.contains("Right"));
    }

    #[test]
    fn test_long_name_is_clipped_to_piece() {
        let stock = Rect::new(240.0, 60.0);
        let output = render_sheet(stock, &[placed("Laterais Parede 1", 0.0, 0.0, 18.0, 18.0)]);
        assert!(!output.contains("Laterais Parede 1"));
        assert!(output.contains("Lat"));
    }

    #[test]
    fn test_long_name_in_odd_width_piece_keeps_first_letter() {
        // 33 cm at 1/3 cell per cm is 11 cells wide
        let stock = Rect::new(240.0, 60.0);
        let output = render_sheet(stock, &[placed("Laterais Parede 1", 0.0, 0.0, 33.0, 18.0)]);
        assert!(output.contains("|Laterais P|"));
    }

    #[test]
    fn test_render_empty() {
        let stock = Rect::new(100.0, 100.0);
        let output = render_sheet(stock, &[]);
        // Should still draw the stock border
        assert!(output.contains('+'));
    }

    #[test]
    fn test_degenerate_stock() {
        assert_eq!(render_sheet(Rect::new(0.0, 60.0), &[]), "");
    }
}
