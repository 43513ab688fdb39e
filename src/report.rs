use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Culto, MemberStats};
use crate::state::ServiceRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CultoFilter {
    All,
    Only(Culto),
}

impl CultoFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            Some(Self::All)
        } else {
            Culto::parse(s).map(Self::Only)
        }
    }

    fn matches(self, culto: Culto) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == culto,
        }
    }
}

/// One matched activity, annotated with everything the consolidated view and
/// the PDF export need. `vocacionados` and `member_stats` repeat the owning
/// service's roster summary and attendance snapshot on every row; consumers
/// that show a single summary take the first row's.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRow {
    pub source: String,
    pub time: String,
    pub activity: String,
    pub name: String,
    pub vocacionados: String,
    pub member_stats: MemberStats,
}

/// Scans the in-memory records for activities dated on `date`, in the fixed
/// service order. No date selected means no matches, not an error. Results
/// are recomputed on every call and never cached.
pub fn activities_by_date(
    records: &[ServiceRecord],
    date: Option<NaiveDate>,
    filter: CultoFilter,
) -> Vec<ActivityRow> {
    let Some(date) = date else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for rec in records {
        if !filter.matches(rec.culto) {
            continue;
        }
        let summary = rec.vocacionados.summary();
        for item in &rec.schedule {
            if item.date != Some(date) {
                continue;
            }
            rows.push(ActivityRow {
                source: rec.culto.label().to_string(),
                time: item.time.clone(),
                activity: item.activity.clone(),
                name: item.name.clone(),
                vocacionados: summary.clone(),
                member_stats: rec.member_stats.clone(),
            });
        }
    }
    rows
}
