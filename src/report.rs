//! Console transcript of a [`CutPlan`].

use std::fmt::{self, Write};

use crate::plan::{CutPlan, PackOutcome};

pub fn write_transcript<W: Write>(out: &mut W, plan: &CutPlan) -> fmt::Result {
    writeln!(out, "Panel pieces:")?;
    for p in &plan.panels {
        writeln!(out, "  {}: {:.1} × {:.1} cm", p.name, p.length, p.width)?;
    }

    writeln!(out)?;
    writeln!(out, "Beam pieces:")?;
    for b in &plan.beams {
        writeln!(out, "  {}: {:.1} cm", b.name, b.length)?;
    }

    writeln!(out)?;
    let check = &plan.beam_check;
    writeln!(out, "Total beam length required: {:.1} cm", check.total)?;
    if let (Some(stock), Some(balance)) = (check.stock, check.balance()) {
        let verdict = if balance >= 0.0 { "surplus" } else { "deficit" };
        writeln!(
            out,
            "Beam stock available: {:.1} cm ({} {:.1} cm)",
            stock,
            verdict,
            balance.abs()
        )?;
    }

    writeln!(out)?;
    match &plan.outcome {
        PackOutcome::Feasible { placements } => {
            writeln!(out, "Panel cut plan is possible.")?;
            for p in placements {
                writeln!(
                    out,
                    "  {} at ({:.1},{:.1}), size {:.1}×{:.1}",
                    p.name, p.x, p.y, p.rect.length, p.rect.width
                )?;
            }
            if let Some(used) = plan.utilization_percent() {
                writeln!(out, "Panel utilization: {:.1}%", used)?;
            }
        }
        PackOutcome::Infeasible { .. } => {
            writeln!(out, "Panel cut plan NOT possible with given dimensions.")?;
            writeln!(out, "  Did not fit: {}", plan.unplaced_names().join(", "))?;
        }
    }
    Ok(())
}

pub fn transcript(plan: &CutPlan) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_transcript(&mut out, plan);
    out
}
