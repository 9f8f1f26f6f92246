//! # PDF Generation Module
//!
//! Generates the retrofit report PDF using Typst.
//!
//! ## Architecture
//!
//! - Typst templates are embedded as string constants
//! - Data is injected via string formatting before compilation
//! - Output is raw PDF bytes (`Vec<u8>`); writing a file is the caller's job
//!
//! ## Example
//!
//! ```rust,no_run
//! use retro_core::assessment::Assessment;
//! use retro_core::pdf::render_report_pdf;
//!
//! let assessment = Assessment::default();
//! let outcome = assessment.compute().unwrap();
//! let pdf_bytes = render_report_pdf(&assessment, &outcome).unwrap();
//! std::fs::write("retrofit_report.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::assessment::{Assessment, AssessmentOutcome};
use crate::calculations::category::CategoryResult;
use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();

        // Bundled fonts from typst-assets (Libertinus Serif and friends)
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }

        fonts
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for the retrofit report
const REPORT_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2.5cm, bottom: 2.5cm, left: 2.5cm, right: 2.5cm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[Retrofit Insulation Calculator]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr),
      align(left)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(size: 11pt)

// Title Block
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Insulation Retrofit Results]
    #v(4pt)
    #text(size: 12pt)[Estimated savings per envelope category]
  ]
]

#v(12pt)

#grid(
  columns: (1fr, 1fr),
  gutter: 20pt,
  [
    *Assumptions*
    #v(4pt)
    #table(
      columns: (auto, 1fr),
      stroke: none,
      row-gutter: 4pt,
      [Temperature delta:], [{{DELTA_T}} °C],
      [Exposure hours:], [{{HOURS}} h/year],
      [Energy price:], [€ {{ENERGY_COST}} /kWh],
      [Heating source:], [{{HEATING_TYPE}}],
    )
  ],
  [
    *Method*
    #v(4pt)
    Heat loss per element from RC-values (U = 1/RC), priced at the
    energy tariff; payback on subsidized cost.
  ]
)

#v(16pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

== Results per Category

#table(
  columns: (1fr, auto, auto, auto, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, right, right, right, right),
  table.header(
    [*Category*], [*Cost (€)*], [*Savings (kWh/yr)*],
    [*CO2 (kg/yr)*], [*Savings (€/yr)*], [*Payback (yr)*],
  ),
{{CATEGORY_ROWS}}
)

#v(16pt)

== Totals

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  [Total cost after subsidy], [€ {{TOTAL_COST}}],
  [Total energy saved per year], [{{TOTAL_ENERGY}} kWh],
  [Total CO2 reduction per year], [{{TOTAL_CO2}} kg],
  [Total energy cost savings per year], [€ {{TOTAL_SAVINGS}}],
  [Payback period (worst category)], [{{TOTAL_PAYBACK}}],
  [Energy intensity after retrofit], [{{INTENSITY}} kWh/m²/year],
)

#v(16pt)

#align(center)[
  #block(fill: rgb("{{LABEL_COLOR}}"), inset: 16pt, radius: 4pt)[
    #text(size: 16pt, weight: "bold")[Energy label: {{LABEL}}]
  ]
]

#v(12pt)

{{ADVICE}}

#v(24pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

#text(size: 9pt, fill: gray)[
  Generated by the Retrofit Insulation Calculator \
  Contact: info\@retrofit.example | www.retrofit.example \
  Estimates are indicative; have measures quoted by a certified installer.
]
"##;

// ============================================================================
// PDF Rendering Functions
// ============================================================================

/// Render a full assessment to PDF.
///
/// # Arguments
///
/// * `assessment` - The inputs (environment and categories)
/// * `outcome` - The computed results, from [`Assessment::compute`]
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError)` - If rendering fails
pub fn render_report_pdf(
    assessment: &Assessment,
    outcome: &AssessmentOutcome,
) -> CalcResult<Vec<u8>> {
    let source = build_report_source(assessment, outcome);

    // Compile the Typst document
    let world = PdfWorld::new(source);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("Typst compilation failed: {}", error_msgs.join("; ")),
        }
    })?;

    // Render to PDF
    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("PDF rendering failed: {}", error_msgs.join("; ")),
        }
    })?;

    Ok(pdf_bytes)
}

/// Fill the report template with assessment data.
fn build_report_source(assessment: &Assessment, outcome: &AssessmentOutcome) -> String {
    let env = &assessment.environment;
    let totals = &outcome.totals;

    let advice = match &outcome.recommendation {
        Some(rec) => format!("*Advice.* {}", escape_typst(&rec.message())),
        None => "*Advice.* None of the entered measures currently pays for \
                 itself; revisit the desired RC-values or the costs."
            .to_string(),
    };

    REPORT_TEMPLATE
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string())
        .replace("{{DELTA_T}}", &format!("{:.0}", env.delta_t_c))
        .replace("{{HOURS}}", &format!("{:.0}", env.hours_per_year))
        .replace("{{ENERGY_COST}}", &format!("{:.2}", env.energy_cost_per_kwh))
        .replace("{{HEATING_TYPE}}", env.heating_type.display_name())
        .replace("{{CATEGORY_ROWS}}", &build_category_rows(&outcome.category_results))
        .replace("{{TOTAL_COST}}", &format!("{:.2}", totals.total_cost_eur))
        .replace("{{TOTAL_ENERGY}}", &format!("{:.2}", totals.total_energy_saved_kwh))
        .replace("{{TOTAL_CO2}}", &format!("{:.2}", totals.total_co2_saved_kg))
        .replace("{{TOTAL_SAVINGS}}", &format!("{:.2}", totals.total_savings_eur_per_year))
        .replace("{{TOTAL_PAYBACK}}", &format_payback(totals.total_payback_years))
        .replace("{{INTENSITY}}", &format!("{:.1}", totals.intensity_kwh_per_m2_year))
        .replace("{{LABEL_COLOR}}", totals.label.color_hex())
        .replace("{{LABEL}}", totals.label.display_name())
        .replace("{{ADVICE}}", &advice)
}

/// Build the per-category table rows.
fn build_category_rows(results: &[CategoryResult]) -> String {
    results
        .iter()
        .map(|r| {
            format!(
                "  [{}], [{:.2}], [{:.2}], [{:.2}], [{:.2}], [{}],",
                r.category.display_name(),
                r.net_cost_eur,
                r.energy_saved_kwh,
                r.co2_saved_kg,
                r.savings_eur_per_year,
                format_payback(r.payback_years),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a payback period, spelling out the infinite sentinel.
fn format_payback(years: f64) -> String {
    if years.is_finite() {
        format!("{:.2} yr", years)
    } else {
        "never".to_string()
    }
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("50 m2 *walls*"), "50 m2 \\*walls\\*");
        assert_eq!(escape_typst("cost # $12"), "cost \\# \\$12");
        assert_eq!(escape_typst("plain"), "plain");
    }

    #[test]
    fn test_format_payback() {
        assert_eq!(format_payback(3.7037), "3.70 yr");
        assert_eq!(format_payback(f64::INFINITY), "never");
    }

    #[test]
    fn test_report_source_contains_results() {
        let assessment = Assessment::default();
        let outcome = assessment.compute().unwrap();
        let source = build_report_source(&assessment, &outcome);

        // No unfilled placeholders left behind
        assert!(!source.contains("{{"));
        // Per-category rows and the label badge are present
        assert!(source.contains("[Floor]"));
        assert!(source.contains("[Windows]"));
        assert!(source.contains(outcome.totals.label.display_name()));
        assert!(source.contains(outcome.totals.label.color_hex()));
    }

    #[test]
    fn test_pdf_generation() {
        let assessment = Assessment::default();
        let outcome = assessment.compute().unwrap();
        let pdf = render_report_pdf(&assessment, &outcome);

        // Should succeed
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        // PDF should start with %PDF
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        // Should be a reasonable size (at least 1KB)
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }
}
