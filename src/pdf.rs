use chrono::{Datelike, NaiveDate};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::report::ActivityRow;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 14.0;
const TABLE_RIGHT: f32 = PAGE_W - MARGIN;
const ROW_H: f32 = 8.0;

// Column left edges of the schedule table: Culto, Horário, Programação,
// Responsável.
const COLS: [f32; 4] = [14.0, 64.0, 95.0, 152.0];

const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

pub fn pdf_file_name(date: NaiveDate) -> String {
    format!("programacao-{}.pdf", date.format("%Y-%m-%d"))
}

/// Long-form pt-BR date, e.g. "5 de agosto de 2026".
pub fn long_date_pt(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS_PT[date.month0() as usize],
        date.year()
    )
}

struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor {
    fn advance(&mut self, doc: &PdfDocumentReference, height: f32) {
        self.y -= height;
        if self.y < MARGIN {
            let (page, layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Camada");
            self.layer = doc.get_page(page).get_layer(layer);
            self.layer
                .set_outline_color(Color::Rgb(Rgb::new(0.545, 0.361, 0.965, None)));
            self.layer.set_outline_thickness(0.4);
            self.y = PAGE_H - MARGIN - ROW_H;
        }
    }

    fn text(&self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn rule(&self, x1: f32, x2: f32, y_offset: f32) {
        let line = Line {
            points: vec![
                (Point::new(Mm(x1), Mm(self.y + y_offset)), false),
                (Point::new(Mm(x2), Mm(self.y + y_offset)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }
}

fn dash_if_empty(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Splits the ministry summary into printable lines on entry boundaries.
fn wrap_summary(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for part in text.split(", ") {
        if !current.is_empty() && current.chars().count() + 2 + part.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(", ");
        }
        current.push_str(part);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Renders the filtered schedule to PDF bytes: title, localized date, the
/// activity table in report order, then the roster summary and attendance
/// snapshot of the FIRST matched row only. Callers check the non-empty
/// precondition; the first-row sourcing mirrors the report view.
pub fn render_schedule_pdf(date: NaiveDate, rows: &[ActivityRow]) -> anyhow::Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Programação dos Cultos",
        Mm(PAGE_W),
        Mm(PAGE_H),
        "Camada",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow::anyhow!("add builtin font: {e:?}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow::anyhow!("add builtin font: {e:?}"))?;

    let mut cur = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_H - 20.0,
    };
    cur.layer
        .set_outline_color(Color::Rgb(Rgb::new(0.545, 0.361, 0.965, None)));
    cur.layer.set_outline_thickness(0.4);

    cur.text("Programação dos Cultos", 18.0, MARGIN, &bold);
    cur.advance(&doc, 10.0);
    cur.text(&long_date_pt(date), 12.0, MARGIN, &regular);
    cur.advance(&doc, 12.0);

    let headers = ["Culto", "Horário", "Programação", "Responsável"];
    for (x, header) in COLS.iter().zip(headers) {
        cur.text(header, 11.0, *x, &bold);
    }
    cur.rule(MARGIN, TABLE_RIGHT, -2.0);
    cur.advance(&doc, ROW_H);

    for row in rows {
        cur.text(&row.source, 10.0, COLS[0], &regular);
        cur.text(&row.time, 10.0, COLS[1], &regular);
        cur.text(&row.activity, 10.0, COLS[2], &regular);
        cur.text(dash_if_empty(&row.name), 10.0, COLS[3], &regular);
        cur.rule(MARGIN, TABLE_RIGHT, -2.0);
        cur.advance(&doc, ROW_H);
    }

    let first = rows.first();

    cur.advance(&doc, 7.0);
    cur.text("Vocacionados", 14.0, MARGIN, &bold);
    cur.advance(&doc, 7.0);
    let summary = first
        .map(|r| r.vocacionados.as_str())
        .unwrap_or("Nenhum vocacionado registrado");
    for line in wrap_summary(summary, 95) {
        cur.text(&line, 10.0, MARGIN, &regular);
        cur.advance(&doc, 5.0);
    }

    if let Some(first) = first {
        cur.advance(&doc, 8.0);
        cur.text("Controle de Membros", 14.0, MARGIN, &bold);
        cur.advance(&doc, 8.0);

        let stats_cols = [14.0, 60.0, 96.0, 130.0];
        let stats_headers = ["Total de Membros", "Visitantes", "Crianças", "Vocacionados Presentes"];
        for (x, header) in stats_cols.iter().zip(stats_headers) {
            cur.text(header, 9.0, *x, &bold);
        }
        cur.rule(MARGIN, TABLE_RIGHT, -2.0);
        cur.advance(&doc, ROW_H);

        let stats = &first.member_stats;
        let values = [
            dash_if_empty(&stats.total_membros),
            dash_if_empty(&stats.visitantes),
            dash_if_empty(&stats.criancas),
            dash_if_empty(&stats.vocacionados),
        ];
        for (x, value) in stats_cols.iter().zip(values) {
            cur.text(value, 10.0, *x, &regular);
        }
        cur.rule(MARGIN, TABLE_RIGHT, -2.0);
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow::anyhow!("serialize pdf: {e:?}"))
}
