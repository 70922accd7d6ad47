use crate::models::{ExclusionRow, ExclusionType, PointExclusion, StateExclusion};

const DROP_POINT_MARKER: &str = "Drop Point";
const EXCLUDE_STATE_MARKER: &str = "Exclude State";
const EXCLUDE_STATE_DATA: &str = "Exclude State (Data)";
const EXCLUDE_STATE_MODEL: &str = "Exclude State (Model)";

/// Rows whose final decision contains "Drop Point", projected to the
/// point-exclusions schema and sorted by (report_date, state, disease,
/// reference_date). Undated rows sort first within a group.
pub fn point_exclusions(rows: &[ExclusionRow]) -> Vec<PointExclusion> {
    let mut points: Vec<PointExclusion> = rows
        .iter()
        .filter(|r| decision_contains(r, DROP_POINT_MARKER))
        .map(|r| PointExclusion {
            reference_date: r.reference_date,
            report_date: r.report_date,
            state: r.state_abb.clone(),
            disease: r.pathogen,
        })
        .collect();

    points.sort_by(|a, b| {
        (a.report_date, &a.state, a.disease, a.reference_date)
            .cmp(&(b.report_date, &b.state, b.disease, b.reference_date))
    });

    points
}

/// Rows whose final decision contains "Exclude State", projected to the
/// state-exclusions schema and sorted by (state_abb, pathogen, type). A
/// decision naming neither known subtype produces a null type.
pub fn state_exclusions(rows: &[ExclusionRow]) -> Vec<StateExclusion> {
    let mut states: Vec<StateExclusion> = rows
        .iter()
        .filter(|r| decision_contains(r, EXCLUDE_STATE_MARKER))
        .map(|r| StateExclusion {
            state_abb: r.state_abb.clone(),
            pathogen: r.pathogen,
            exclusion_type: classify_state_exclusion(r.final_decision.as_deref()),
        })
        .collect();

    states.sort_by(|a, b| {
        (&a.state_abb, a.pathogen, a.exclusion_type)
            .cmp(&(&b.state_abb, b.pathogen, b.exclusion_type))
    });

    states
}

fn decision_contains(row: &ExclusionRow, marker: &str) -> bool {
    row.final_decision
        .as_deref()
        .is_some_and(|d| d.contains(marker))
}

fn classify_state_exclusion(final_decision: Option<&str>) -> Option<ExclusionType> {
    match final_decision {
        Some(EXCLUDE_STATE_DATA) => Some(ExclusionType::Data),
        Some(EXCLUDE_STATE_MODEL) => Some(ExclusionType::Model),
        _ => None,
    }
}
