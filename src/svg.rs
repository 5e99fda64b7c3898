//! SVG cut sheet: bin outline, hatched pieces, centred labels.
//!
//! SVG is y-down, so the sheet origin lands in the top-left corner like on a
//! printed cut list. Hatch lines run along x to show the grain following the
//! panel's length.

use std::fmt::{self, Write};

use crate::plan::CutPlacement;
use crate::render::PanelRenderer;
use crate::types::Rect;

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    /// Pixels per centimetre.
    pub scale: f64,
    /// Blank border around the sheet, in pixels.
    pub padding: f64,
    pub title: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            scale: 5.0,
            padding: 20.0,
            title: "Panel Cut Plan (Grain shown)".to_string(),
        }
    }
}

impl SvgRenderer {
    pub fn write_svg<W: Write>(
        &self,
        out: &mut W,
        bin: Rect,
        placements: &[CutPlacement],
    ) -> fmt::Result {
        let s = self.scale;
        let pad = self.padding;
        let title_h = 30.0;
        let sheet_w = bin.length.max(0.0) * s;
        let sheet_h = bin.width.max(0.0) * s;
        let total_w = sheet_w + 2.0 * pad;
        let total_h = sheet_h + 2.0 * pad + title_h;
        let top = pad + title_h;
        let font = (2.4 * s).clamp(8.0, 16.0);

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_w:.1}" height="{total_h:.1}" viewBox="0 0 {total_w:.1} {total_h:.1}" font-family="sans-serif">"#
        )?;
        out.write_str(
            "<defs>\n\
             <pattern id=\"grain\" patternUnits=\"userSpaceOnUse\" width=\"8\" height=\"4\">\n\
             <line x1=\"0\" y1=\"2\" x2=\"8\" y2=\"2\" stroke=\"darkgoldenrod\" stroke-width=\"0.6\"/>\n\
             </pattern>\n\
             </defs>\n",
        )?;
        writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="16">{}</text>"#,
            total_w / 2.0,
            pad + 16.0,
            escape(&self.title)
        )?;

        for p in placements {
            let x = pad + p.x * s;
            let y = top + p.y * s;
            let w = p.rect.length * s;
            let h = p.rect.width * s;
            writeln!(
                out,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="burlywood" fill-opacity="0.4" stroke="darkgoldenrod"/>"#
            )?;
            writeln!(
                out,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="url(#grain)"/>"#
            )?;
            writeln!(
                out,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="central" font-size="{font:.1}">{}</text>"#,
                x + w / 2.0,
                y + h / 2.0,
                escape(&p.name)
            )?;
        }

        // Sheet border last so piece strokes don't cover it
        writeln!(
            out,
            r#"<rect x="{pad:.1}" y="{top:.1}" width="{sheet_w:.1}" height="{sheet_h:.1}" fill="none" stroke="black" stroke-width="2"/>"#
        )?;
        writeln!(out, "</svg>")
    }
}

impl PanelRenderer for SvgRenderer {
    fn render(&self, bin: Rect, placements: &[CutPlacement]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_svg(&mut out, bin, placements);
        out
    }
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
