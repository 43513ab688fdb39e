use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shared passphrase gating the observation fields. Client-side gate only,
/// not an authentication boundary.
pub const OBSERVATION_PASSWORD: &str = "admin123";

/// The five recurring services. `ORDER` is the display and report order and
/// must stay stable: exports depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Culto {
    Thursday,
    SundayMorning,
    SundayEvening,
    ConexaoPre,
    Saturday,
}

impl Culto {
    pub const ORDER: [Culto; 5] = [
        Culto::Thursday,
        Culto::SundayMorning,
        Culto::SundayEvening,
        Culto::ConexaoPre,
        Culto::Saturday,
    ];

    /// Position within `ORDER`; `Services` stores its records in this order.
    pub fn index(self) -> usize {
        match self {
            Self::Thursday => 0,
            Self::SundayMorning => 1,
            Self::SundayEvening => 2,
            Self::ConexaoPre => 3,
            Self::Saturday => 4,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "thursday" => Some(Self::Thursday),
            "sunday-morning" => Some(Self::SundayMorning),
            "sunday-evening" => Some(Self::SundayEvening),
            "conexao-pre" => Some(Self::ConexaoPre),
            "saturday" => Some(Self::Saturday),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Thursday => "thursday",
            Self::SundayMorning => "sunday-morning",
            Self::SundayEvening => "sunday-evening",
            Self::ConexaoPre => "conexao-pre",
            Self::Saturday => "saturday",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Thursday => "Quinta-feira",
            Self::SundayMorning => "Domingo (Manhã)",
            Self::SundayEvening => "Domingo (Noite)",
            Self::ConexaoPre => "Conexão Pré",
            Self::Saturday => "Sábado",
        }
    }

    pub fn schedule_key(self) -> &'static str {
        match self {
            Self::Thursday => "thursdaySchedule",
            Self::SundayMorning => "sundayMorningSchedule",
            Self::SundayEvening => "sundayEveningSchedule",
            Self::ConexaoPre => "conexaoPreSchedule",
            Self::Saturday => "saturdaySchedule",
        }
    }

    pub fn vocacionados_key(self) -> &'static str {
        match self {
            Self::Thursday => "thursdayVocacionados",
            Self::SundayMorning => "sundayMorningVocacionados",
            Self::SundayEvening => "sundayEveningVocacionados",
            Self::ConexaoPre => "conexaoPreVocacionados",
            Self::Saturday => "saturdayVocacionados",
        }
    }

    pub fn member_stats_key(self) -> &'static str {
        match self {
            Self::Thursday => "thursdayMemberStats",
            Self::SundayMorning => "sundayMorningMemberStats",
            Self::SundayEvening => "sundayEveningMemberStats",
            Self::ConexaoPre => "conexaoPreMemberStats",
            Self::Saturday => "saturdayMemberStats",
        }
    }

    /// Schedules that ignore any persisted value and rehydrate to their
    /// hardcoded defaults on every workspace open. See db::open_db.
    pub fn schedule_resets_on_load(self) -> bool {
        matches!(self, Self::Thursday | Self::ConexaoPre)
    }
}

/// One timed row of a service schedule. Identity is the position within the
/// parent schedule; the row set is fixed at 7 per service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub activity: String,
    pub time: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl ScheduleItem {
    fn new(activity: &str, time: &str) -> Self {
        Self {
            activity: activity.to_string(),
            time: time.to_string(),
            name: String::new(),
            date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ministry {
    pub name: String,
    pub responsavel: String,
}

/// Volunteer assignments: either the fixed per-ministry responsibles or a
/// free-form name list. The two modes are mutually exclusive; which one a
/// roster uses is decided at initialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Roster {
    Ministries(Vec<Ministry>),
    FreeText(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "VocacionadosWire", into = "VocacionadosWire")]
pub struct Vocacionados {
    pub date: Option<NaiveDate>,
    pub roster: Roster,
}

impl Default for Vocacionados {
    fn default() -> Self {
        Self {
            date: None,
            roster: Roster::Ministries(fixed_ministries()),
        }
    }
}

impl Vocacionados {
    /// Flattened "Ministério: responsável" summary used by the report view
    /// and the PDF export. "-" stands in for a missing responsible and for
    /// rosters without ministries.
    pub fn summary(&self) -> String {
        let Roster::Ministries(ministries) = &self.roster else {
            return "-".to_string();
        };
        let joined = ministries
            .iter()
            .map(|m| {
                let who = if m.responsavel.is_empty() {
                    "-"
                } else {
                    m.responsavel.as_str()
                };
                format!("{}: {}", m.name, who)
            })
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            "-".to_string()
        } else {
            joined
        }
    }
}

/// Storage shape kept compatible with the historical payloads: `names` and
/// `ministries` coexist on the wire, and a payload without `ministries`
/// rehydrates to the fixed ministry defaults.
#[derive(Serialize, Deserialize)]
struct VocacionadosWire {
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    ministries: Option<Vec<Ministry>>,
}

impl From<VocacionadosWire> for Vocacionados {
    fn from(wire: VocacionadosWire) -> Self {
        let roster = match wire.ministries {
            Some(ministries) => Roster::Ministries(ministries),
            None => Roster::Ministries(fixed_ministries()),
        };
        Self {
            date: wire.date,
            roster,
        }
    }
}

impl From<Vocacionados> for VocacionadosWire {
    fn from(v: Vocacionados) -> Self {
        match v.roster {
            Roster::Ministries(ministries) => Self {
                names: Vec::new(),
                date: v.date,
                ministries: Some(ministries),
            },
            Roster::FreeText(names) => Self {
                names,
                date: v.date,
                ministries: None,
            },
        }
    }
}

/// Attendance figures are entered as free text and stored verbatim; the
/// numeric semantics live in the UI placeholder only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberStats {
    pub total_membros: String,
    pub visitantes: String,
    pub criancas: String,
    pub vocacionados: String,
    pub observacao: String,
}

pub fn fixed_ministries() -> Vec<Ministry> {
    [
        "Intercessão",
        "Junta Diaconal",
        "Mídia Social",
        "Mídia de Transmissão",
        "Dança",
        "Libras",
        "Ministério de Culto",
    ]
    .iter()
    .map(|name| Ministry {
        name: name.to_string(),
        responsavel: String::new(),
    })
    .collect()
}

pub fn default_schedule(culto: Culto) -> Vec<ScheduleItem> {
    match culto {
        Culto::Thursday => vec![
            ScheduleItem::new("Louvor", "19:30-19:45"),
            ScheduleItem::new("Oferta", "19:45-19:50"),
            ScheduleItem::new("Conexão", "19:50-19:55"),
            ScheduleItem::new("Testemunho", "19:55-20:05"),
            ScheduleItem::new("Pregação", "20:05-20:30"),
            ScheduleItem::new("Apelo+Ministração final", "20:30-20:40"),
            ScheduleItem::new("Benção Apostólica", "20:40"),
        ],
        Culto::SundayMorning => vec![
            ScheduleItem::new("Abertura", "09:15-09:20"),
            ScheduleItem::new("Louvor", "09:20-09:45"),
            ScheduleItem::new("Oferta", "09:45-09:50"),
            ScheduleItem::new("Conexão", "09:50-09:55"),
            ScheduleItem::new("Pregação", "09:55-10:30"),
            ScheduleItem::new("Apelo+Ministração final", "10:30-10:45"),
            ScheduleItem::new("Benção Apostólica", "10:45"),
        ],
        Culto::SundayEvening | Culto::ConexaoPre => vec![
            ScheduleItem::new("Abertura", "18:30-18:35"),
            ScheduleItem::new("Louvor", "18:35-19:05"),
            ScheduleItem::new("Oferta", "19:05-19:10"),
            ScheduleItem::new("Conexão", "19:10-19:15"),
            ScheduleItem::new("Pregação", "19:15-20:10"),
            ScheduleItem::new("Apelo+Ministração final", "20:10-20:30"),
            ScheduleItem::new("Benção Apostólica", "20:30"),
        ],
        Culto::Saturday => vec![
            ScheduleItem::new("Abertura", "19:30-19:35"),
            ScheduleItem::new("Louvor", "19:35-20:05"),
            ScheduleItem::new("Oferta", "20:05-20:10"),
            ScheduleItem::new("Conexão", "20:10-20:15"),
            ScheduleItem::new("Pregação", "20:15-21:10"),
            ScheduleItem::new("Apelo+Ministração final", "21:10-21:30"),
            ScheduleItem::new("Benção Apostólica", "21:30"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_without_ministries_rehydrates_to_fixed_defaults() {
        let v: Vocacionados =
            serde_json::from_str(r#"{"names":["Ana","Bia"],"date":null}"#).expect("parse");
        let Roster::Ministries(ministries) = &v.roster else {
            panic!("expected ministries mode");
        };
        assert_eq!(ministries.len(), 7);
        assert_eq!(ministries[0].name, "Intercessão");
        assert_eq!(ministries[0].responsavel, "");
    }

    #[test]
    fn ministry_summary_dashes_empty_responsibles() {
        let mut v = Vocacionados::default();
        if let Roster::Ministries(m) = &mut v.roster {
            m[0].responsavel = "Marcos".to_string();
        }
        let summary = v.summary();
        assert!(summary.starts_with("Intercessão: Marcos, Junta Diaconal: -"));
    }

    #[test]
    fn free_text_roster_summary_is_a_dash() {
        let v = Vocacionados {
            date: None,
            roster: Roster::FreeText(vec!["Ana".to_string()]),
        };
        assert_eq!(v.summary(), "-");
    }

    #[test]
    fn every_default_schedule_has_seven_rows() {
        for culto in Culto::ORDER {
            assert_eq!(default_schedule(culto).len(), 7, "{}", culto.id());
        }
    }

    #[test]
    fn schedule_item_round_trips_with_date() {
        let mut item = ScheduleItem::new("Louvor", "19:30-19:45");
        item.date = NaiveDate::from_ymd_opt(2026, 8, 5);
        let json = serde_json::to_string(&item).expect("serialize");
        let back: ScheduleItem = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, item);
    }
}
