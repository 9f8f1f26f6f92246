//! # Retrofit GUI Application
//!
//! Interactive form for the insulation retrofit calculator. Built with the
//! Iced framework.
//!
//! The application owns one [`Assessment`] worth of input fields as raw
//! strings (so the user can type freely), re-parses and recomputes the whole
//! pipeline on every edit, and renders the per-category results, portfolio
//! totals, energy label and charts live. A full PDF report can be exported
//! via a save dialog.

use iced::widget::{column, row};
use iced::{Element, Length, Theme};

use retro_core::assessment::{Assessment, AssessmentOutcome};
use retro_core::calculations::category::CategoryInput;
use retro_core::calculations::Category;
use retro_core::environment::HeatingType;

mod ui;

use ui::{input_panel, results_panel, status_bar, toolbar};

fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view)
        .title("Retrofit - Insulation Savings Calculator")
        .theme(App::theme)
        .run()
}

/// Which numeric field of a category editor changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Area,
    CurrentRc,
    DesiredRc,
    MaterialCost,
    InstallationCost,
    Subsidy,
}

/// Raw text state of one category editor.
///
/// Fields stay strings while the user types; parsing happens on every
/// recompute so a half-typed number shows an error instead of crashing.
#[derive(Debug, Clone)]
pub struct CategoryFields {
    pub category: Category,
    pub area: String,
    pub current_rc: String,
    pub desired_rc: String,
    pub material_cost: String,
    pub installation_cost: String,
    pub subsidy: String,
}

impl CategoryFields {
    fn from_input(input: &CategoryInput) -> Self {
        CategoryFields {
            category: input.category,
            area: trim_float(input.area_m2),
            current_rc: trim_float(input.current_rc),
            desired_rc: trim_float(input.desired_rc),
            material_cost: trim_float(input.material_cost_per_m2),
            installation_cost: trim_float(input.installation_cost_per_m2),
            subsidy: trim_float(input.subsidy_pct),
        }
    }

    fn set(&mut self, field: CategoryField, value: String) {
        match field {
            CategoryField::Area => self.area = value,
            CategoryField::CurrentRc => self.current_rc = value,
            CategoryField::DesiredRc => self.desired_rc = value,
            CategoryField::MaterialCost => self.material_cost = value,
            CategoryField::InstallationCost => self.installation_cost = value,
            CategoryField::Subsidy => self.subsidy = value,
        }
    }

    fn to_input(&self) -> Result<CategoryInput, String> {
        let name = self.category.display_name().to_lowercase();
        Ok(CategoryInput {
            category: self.category,
            area_m2: parse_field(&format!("{name} area"), &self.area)?,
            current_rc: parse_field(&format!("{name} current RC"), &self.current_rc)?,
            desired_rc: parse_field(&format!("{name} desired RC"), &self.desired_rc)?,
            material_cost_per_m2: parse_field(&format!("{name} material cost"), &self.material_cost)?,
            installation_cost_per_m2: parse_field(
                &format!("{name} installation cost"),
                &self.installation_cost,
            )?,
            subsidy_pct: parse_field(&format!("{name} subsidy"), &self.subsidy)?,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    DeltaTChanged(String),
    EnergyCostChanged(String),
    HoursPerYearChanged(String),
    HeatingTypeSelected(HeatingType),
    CategoryFieldChanged(Category, CategoryField, String),
    ExportPdf,
    ToggleDarkMode,
}

/// Application state.
pub struct App {
    // Environment fields (raw text)
    pub delta_t: String,
    pub hours_per_year: String,
    pub energy_cost: String,
    pub heating_type: HeatingType,

    // One editor per category, in Category::ALL order
    pub categories: Vec<CategoryFields>,

    // Last successfully parsed inputs and their computed outcome
    pub assessment: Option<Assessment>,
    pub outcome: Option<AssessmentOutcome>,
    pub error_message: Option<String>,

    pub status: String,
    pub dark_mode: bool,
}

impl Default for App {
    fn default() -> Self {
        let defaults = Assessment::default();
        let mut app = App {
            delta_t: trim_float(defaults.environment.delta_t_c),
            hours_per_year: trim_float(defaults.environment.hours_per_year),
            energy_cost: trim_float(defaults.environment.energy_cost_per_kwh),
            heating_type: defaults.environment.heating_type,
            categories: defaults
                .categories
                .iter()
                .map(CategoryFields::from_input)
                .collect(),
            assessment: None,
            outcome: None,
            error_message: None,
            status: "Ready".to_string(),
            dark_mode: false,
        };
        app.recompute();
        app
    }
}

impl App {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::DeltaTChanged(value) => {
                self.delta_t = value;
                self.recompute();
            }
            Message::HoursPerYearChanged(value) => {
                self.hours_per_year = value;
                self.recompute();
            }
            Message::EnergyCostChanged(value) => {
                self.energy_cost = value;
                self.recompute();
            }
            Message::HeatingTypeSelected(heating_type) => {
                self.heating_type = heating_type;
                self.recompute();
            }
            Message::CategoryFieldChanged(category, field, value) => {
                if let Some(fields) = self
                    .categories
                    .iter_mut()
                    .find(|f| f.category == category)
                {
                    fields.set(field, value);
                }
                self.recompute();
            }
            Message::ExportPdf => self.export_pdf(),
            Message::ToggleDarkMode => self.dark_mode = !self.dark_mode,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![
            toolbar::view_header(),
            toolbar::view_toolbar(self.outcome.is_some(), self.dark_mode),
            row![input_panel::view(self), results_panel::view(self)]
                .spacing(10)
                .height(Length::Fill),
            status_bar::view_status_bar(&self.status),
        ]
        .spacing(8)
        .padding(10)
        .into()
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Re-parse every field and rerun the whole pipeline.
    ///
    /// The computation is a pure function of the inputs, so rerunning it on
    /// every keystroke is cheap and keeps the results always in sync.
    fn recompute(&mut self) {
        self.assessment = None;
        self.outcome = None;

        let assessment = match self.parse_assessment() {
            Ok(assessment) => assessment,
            Err(message) => {
                self.error_message = Some(message);
                return;
            }
        };

        match assessment.compute() {
            Ok(outcome) => {
                self.assessment = Some(assessment);
                self.outcome = Some(outcome);
                self.error_message = None;
            }
            Err(error) => {
                self.error_message = Some(error.to_string());
            }
        }
    }

    fn parse_assessment(&self) -> Result<Assessment, String> {
        let mut environment = retro_core::environment::EnvironmentInput::default();
        environment.delta_t_c = parse_field("temperature delta", &self.delta_t)?;
        environment.hours_per_year = parse_field("exposure hours", &self.hours_per_year)?;
        environment.energy_cost_per_kwh = parse_field("energy price", &self.energy_cost)?;
        environment.heating_type = self.heating_type;

        let categories = self
            .categories
            .iter()
            .map(|fields| fields.to_input())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Assessment {
            environment,
            categories,
        })
    }

    fn export_pdf(&mut self) {
        let (Some(assessment), Some(outcome)) = (&self.assessment, &self.outcome) else {
            self.status = "Nothing to export - fix the inputs first".to_string();
            return;
        };

        let pdf_bytes = match retro_core::pdf::render_report_pdf(assessment, outcome) {
            Ok(bytes) => bytes,
            Err(error) => {
                self.status = format!("PDF rendering failed: {error}");
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name("retrofit_report.pdf")
            .add_filter("PDF document", &["pdf"])
            .save_file()
        else {
            self.status = "Export cancelled".to_string();
            return;
        };

        match std::fs::write(&path, pdf_bytes) {
            Ok(()) => self.status = format!("Report saved to {}", path.display()),
            Err(error) => self.status = format!("Could not write {}: {error}", path.display()),
        }
    }
}

/// Parse a numeric form field, naming the field in the error.
fn parse_field(label: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a valid number for the {}", value.trim(), label))
}

/// Format a float for a text field without trailing zeros noise.
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
