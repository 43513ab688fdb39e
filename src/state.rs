use chrono::NaiveDate;
use rusqlite::Connection;
use serde::de::DeserializeOwned;

use crate::db;
use crate::model::{default_schedule, Culto, MemberStats, Roster, ScheduleItem, Vocacionados};

/// Everything the UI shows for one service: the timed schedule, the
/// volunteer roster, and the attendance figures. Each piece persists under
/// its own storage key and is always written whole.
pub struct ServiceRecord {
    pub culto: Culto,
    pub schedule: Vec<ScheduleItem>,
    pub vocacionados: Vocacionados,
    pub member_stats: MemberStats,
}

/// In-memory source of truth for all five services. Reports read from here,
/// never from storage; every accepted mutation mirrors the owning slot back
/// to storage before the handler responds.
pub struct Services {
    records: Vec<ServiceRecord>,
}

fn hydrate<T: DeserializeOwned>(conn: &Connection, key: &str) -> anyhow::Result<Option<T>> {
    Ok(db::storage_get_json(conn, key)?.and_then(|v| serde_json::from_value(v).ok()))
}

impl Services {
    pub fn load(conn: &Connection) -> anyhow::Result<Self> {
        let mut records = Vec::with_capacity(Culto::ORDER.len());
        for culto in Culto::ORDER {
            // The two seeded schedules never read back persisted state; their
            // keys were already cleared when the workspace opened.
            let schedule = if culto.schedule_resets_on_load() {
                default_schedule(culto)
            } else {
                hydrate(conn, culto.schedule_key())?.unwrap_or_else(|| default_schedule(culto))
            };
            let vocacionados =
                hydrate(conn, culto.vocacionados_key())?.unwrap_or_default();
            let member_stats =
                hydrate(conn, culto.member_stats_key())?.unwrap_or_default();
            records.push(ServiceRecord {
                culto,
                schedule,
                vocacionados,
                member_stats,
            });
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn record(&self, culto: Culto) -> &ServiceRecord {
        &self.records[culto.index()]
    }

    fn record_mut(&mut self, culto: Culto) -> &mut ServiceRecord {
        &mut self.records[culto.index()]
    }

    pub fn set_activity_responsible(
        &mut self,
        conn: &Connection,
        culto: Culto,
        index: usize,
        name: &str,
    ) -> anyhow::Result<()> {
        let rec = self.record_mut(culto);
        // Out-of-range rows are a silent no-op, never an error.
        let Some(item) = rec.schedule.get_mut(index) else {
            return Ok(());
        };
        item.name = name.to_string();
        persist_schedule(conn, rec)
    }

    pub fn set_activity_date(
        &mut self,
        conn: &Connection,
        culto: Culto,
        index: usize,
        date: Option<NaiveDate>,
    ) -> anyhow::Result<()> {
        let rec = self.record_mut(culto);
        let Some(item) = rec.schedule.get_mut(index) else {
            return Ok(());
        };
        item.date = date;
        persist_schedule(conn, rec)
    }

    pub fn set_vocacionados_date(
        &mut self,
        conn: &Connection,
        culto: Culto,
        date: Option<NaiveDate>,
    ) -> anyhow::Result<()> {
        let rec = self.record_mut(culto);
        rec.vocacionados.date = date;
        persist_vocacionados(conn, rec)
    }

    pub fn set_ministry_responsavel(
        &mut self,
        conn: &Connection,
        culto: Culto,
        index: usize,
        responsavel: &str,
    ) -> anyhow::Result<()> {
        let rec = self.record_mut(culto);
        let Roster::Ministries(ministries) = &mut rec.vocacionados.roster else {
            return Ok(());
        };
        let Some(ministry) = ministries.get_mut(index) else {
            return Ok(());
        };
        ministry.responsavel = responsavel.to_string();
        persist_vocacionados(conn, rec)
    }

    pub fn set_volunteer_name(
        &mut self,
        conn: &Connection,
        culto: Culto,
        index: usize,
        name: &str,
    ) -> anyhow::Result<()> {
        let rec = self.record_mut(culto);
        let Roster::FreeText(names) = &mut rec.vocacionados.roster else {
            return Ok(());
        };
        let Some(slot) = names.get_mut(index) else {
            return Ok(());
        };
        *slot = name.to_string();
        persist_vocacionados(conn, rec)
    }

    pub fn add_volunteer_name(&mut self, conn: &Connection, culto: Culto) -> anyhow::Result<()> {
        let rec = self.record_mut(culto);
        let Roster::FreeText(names) = &mut rec.vocacionados.roster else {
            return Ok(());
        };
        names.push(String::new());
        persist_vocacionados(conn, rec)
    }

    pub fn set_member_stats(
        &mut self,
        conn: &Connection,
        culto: Culto,
        stats: MemberStats,
    ) -> anyhow::Result<()> {
        let rec = self.record_mut(culto);
        rec.member_stats = stats;
        db::storage_set_json(
            conn,
            culto.member_stats_key(),
            &serde_json::to_value(&rec.member_stats)?,
        )
    }
}

fn persist_schedule(conn: &Connection, rec: &ServiceRecord) -> anyhow::Result<()> {
    db::storage_set_json(
        conn,
        rec.culto.schedule_key(),
        &serde_json::to_value(&rec.schedule)?,
    )
}

fn persist_vocacionados(conn: &Connection, rec: &ServiceRecord) -> anyhow::Result<()> {
    db::storage_set_json(
        conn,
        rec.culto.vocacionados_key(),
        &serde_json::to_value(&rec.vocacionados)?,
    )
}
