//! Plain-text rendering of match results.

use std::fmt::{self, Write};

use teamtone_core::color::{delta_e_description, ColorComparison};
use teamtone_core::ranking::{
    ColorSuggestions, MatchKind, MatchResult, Pick, PickReason, TeamReport,
};
use teamtone_core::{Color, FilamentRecord, ManufacturerRanks, MatchConfig, TeamColorRecord};

const RULE_WIDTH: usize = 70;

/// Full report for one team: palette, then suggestions per color.
pub fn render_team(
    team: &TeamColorRecord,
    report: &TeamReport<'_>,
    config: &MatchConfig,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "  {} ({})", report.team, report.league)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    if team.hex.is_empty() {
        writeln!(out, "{} has no color data available", report.team)?;
        return Ok(out);
    }

    writeln!(out, "\nTeam Colors:")?;
    for (name, color) in team.palette() {
        writeln!(out, "  - {}: {}", name, color)?;
    }

    writeln!(out, "\n{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Matching Filaments:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for color in &report.colors {
        writeln!(out, "\n{} ({}):", color.name, color.suggestions.target)?;
        out.push_str(&render_suggestions(&color.suggestions, config)?);
    }
    Ok(out)
}

/// Suggestion block for one color.
pub fn render_suggestions(
    s: &ColorSuggestions<'_>,
    config: &MatchConfig,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let displayed: Vec<&Pick<'_>> = s.displayed().collect();

    match s.kind {
        MatchKind::Exact => {
            if s.exact_total > config.max_suggestions {
                writeln!(
                    out,
                    "  Found {} exact match(es), showing top {}:",
                    s.exact_total, config.max_suggestions
                )?;
            } else {
                writeln!(out, "  Found {} exact match(es):", s.exact_total)?;
            }
            for pick in &displayed {
                writeln!(out, "    - {}", exact_line(pick.filament))?;
            }
            if let Some(pick) = s.backfill(PickReason::PurchaseLink) {
                writeln!(out, "\n  First exact match with purchase link:")?;
                writeln!(out, "    - {}", exact_line(pick.filament))?;
            }
            if let Some(pick) = s.backfill(PickReason::TopManufacturer) {
                writeln!(out, "\n  Nearest exact match from top manufacturer:")?;
                writeln!(out, "    - {}", exact_line(pick.filament))?;
            }
        }
        MatchKind::Similar => {
            writeln!(out, "  No exact matches found")?;
            writeln!(
                out,
                "  Closest {} match(es) (weighted by manufacturer rank):",
                displayed.len()
            )?;
            for pick in &displayed {
                writeln!(out, "    - {}", similar_line(pick, pick.rank_bonus > 0.0)?)?;
            }
            if let Some(pick) = s.backfill(PickReason::PurchaseLink) {
                writeln!(out, "\n  Nearest match with purchase link:")?;
                writeln!(out, "    - {}", similar_line(pick, false)?)?;
            }
            if let Some(pick) = s.backfill(PickReason::TopManufacturer) {
                writeln!(out, "\n  Nearest match from top manufacturer:")?;
                writeln!(out, "    - {}", similar_line(pick, true)?)?;
            }
        }
        MatchKind::None => {
            writeln!(out, "  No exact matches found")?;
        }
    }
    Ok(out)
}

/// Ranked nearest matches, one per line.
pub fn render_nearest(
    target: Color,
    matches: &[MatchResult<'_>],
    ranks: &ManufacturerRanks,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if matches.is_empty() {
        writeln!(out, "No filaments to compare with {}", target)?;
        return Ok(out);
    }
    writeln!(out, "Closest {} filament(s) to {}:", matches.len(), target)?;
    for (i, m) in matches.iter().enumerate() {
        let manufacturer = &m.filament.manufacturer;
        let rank = if ranks.is_ranked(manufacturer) {
            format!(" #{}", ranks.lookup_rank(manufacturer))
        } else {
            String::new()
        };
        writeln!(
            out,
            "  {:>2}. {} - {} - {} - {} ({:.2}% similar){}",
            i + 1,
            m.filament.manufacturer,
            m.filament.material,
            m.filament.color_name,
            m.filament.hex,
            m.similarity,
            rank
        )?;
    }
    Ok(out)
}

/// Every metric for a pair of colors.
pub fn render_comparison(a: Color, b: Color, cmp: &ColorComparison) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Comparing {} and {}:", a, b)?;
    writeln!(out, "  RGB distance:          {:.2}", cmp.rgb_distance)?;
    writeln!(out, "  Weighted RGB distance: {:.2}", cmp.weighted_rgb_distance)?;
    writeln!(
        out,
        "  Delta E (CIE76):       {:.2} ({})",
        cmp.delta_e_cie76,
        delta_e_description(cmp.delta_e_cie76)
    )?;
    writeln!(out, "  Delta E (CIE94):       {:.2}", cmp.delta_e_cie94)?;
    writeln!(out, "  Similarity:            {:.2}%", cmp.similarity_percentage)?;
    Ok(out)
}

fn exact_line(f: &FilamentRecord) -> String {
    format!(
        "{} - {} - {}{}{}",
        f.manufacturer,
        f.material,
        f.color_name,
        temps(f),
        link(f)
    )
}

fn similar_line(pick: &Pick<'_>, with_bonus: bool) -> Result<String, fmt::Error> {
    let f = pick.filament;
    let mut score = format!("({:.1}% similar", pick.similarity);
    if with_bonus {
        write!(score, " + {:.1} rank bonus", pick.rank_bonus)?;
    }
    score.push(')');
    Ok(format!(
        "{} - {} - {} - {} {}{}{}",
        f.manufacturer,
        f.material,
        f.color_name,
        f.hex,
        score,
        temps(f),
        link(f)
    ))
}

fn temps(f: &FilamentRecord) -> String {
    f.temps()
        .map(|(hotend, bed)| format!(" (Hotend: {}C, Bed: {}C)", hotend, bed))
        .unwrap_or_default()
}

fn link(f: &FilamentRecord) -> String {
    f.link
        .as_deref()
        .filter(|l| !l.is_empty())
        .map(|l| format!(" [{}]", l))
        .unwrap_or_default()
}
