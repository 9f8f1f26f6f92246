//! Results Panel (Right Side)
//!
//! Shows:
//! - Per-category cost/savings/CO2/payback figures
//! - Portfolio totals
//! - Color-coded energy label badge
//! - Advisory text
//! - Bar charts (cost vs. savings, CO2)
//!
//! When the inputs fail to parse or validate, shows the error instead.

use iced::widget::{column, container, scrollable, text, Canvas, Column, Space};
use iced::{Color, Element, Length};

use retro_core::assessment::AssessmentOutcome;
use retro_core::calculations::category::CategoryResult;

use super::shared::charts::{ChartData, SavingsChart};
use crate::{App, Message};

/// Render the results panel based on the current calculation state
pub fn view(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error_message {
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error.as_str()).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let Some(ref outcome) = app.outcome {
        view_outcome(outcome)
    } else {
        column![text("Enter values to see results").size(12).color([0.5, 0.5, 0.5])]
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(60))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render a computed outcome
fn view_outcome(outcome: &AssessmentOutcome) -> Column<'_, Message> {
    let mut content: Column<'_, Message> = column![
        text("Results per Category").size(14),
        Space::new().height(8),
    ]
    .spacing(2);

    for result in &outcome.category_results {
        content = content.push(view_category_result(result));
    }

    let totals = &outcome.totals;
    content = content
        .push(Space::new().height(12))
        .push(text("Totals").size(14))
        .push(text(format!("Cost after subsidy: €{:.2}", totals.total_cost_eur)).size(11))
        .push(text(format!("Energy saved: {:.2} kWh/year", totals.total_energy_saved_kwh)).size(11))
        .push(text(format!("CO2 reduction: {:.2} kg/year", totals.total_co2_saved_kg)).size(11))
        .push(
            text(format!(
                "Energy cost savings: €{:.2}/year",
                totals.total_savings_eur_per_year
            ))
            .size(11),
        )
        .push(
            text(format!(
                "Payback (worst category): {}",
                format_payback(totals.total_payback_years)
            ))
            .size(11),
        )
        .push(
            text(format!(
                "Intensity: {:.1} kWh/m²/year",
                totals.intensity_kwh_per_m2_year
            ))
            .size(11),
        )
        .push(Space::new().height(10))
        .push(view_label_badge(outcome));

    let advice = match &outcome.recommendation {
        Some(rec) => rec.message(),
        None => "No measure currently pays for itself; revisit the desired \
                 RC-values or the costs."
            .to_string(),
    };
    content = content
        .push(Space::new().height(12))
        .push(text("Advice").size(14))
        .push(text(advice).size(11));

    let chart = SavingsChart::new(ChartData::from_results(&outcome.category_results));
    let canvas_widget: Element<'_, Message> = Canvas::new(chart)
        .width(Length::Fill)
        .height(Length::Fixed(360.0))
        .into();

    content
        .push(Space::new().height(15))
        .push(text("Charts").size(14))
        .push(Space::new().height(8))
        .push(canvas_widget)
}

/// One category's result lines
fn view_category_result(result: &CategoryResult) -> Column<'_, Message> {
    column![
        text(result.category.display_name()).size(12),
        text(format!(
            "  Cost €{:.2} | Saves {:.2} kWh/yr | CO2 {:.2} kg/yr",
            result.net_cost_eur, result.energy_saved_kwh, result.co2_saved_kg
        ))
        .size(11),
        text(format!(
            "  Savings €{:.2}/yr | Payback {}",
            result.savings_eur_per_year,
            format_payback(result.payback_years)
        ))
        .size(11),
        Space::new().height(4),
    ]
    .spacing(2)
}

/// The color-coded energy label badge
fn view_label_badge(outcome: &AssessmentOutcome) -> Element<'_, Message> {
    let label = outcome.totals.label;
    let (r, g, b) = label.color_rgb();
    let badge_color = Color::from_rgb8(r, g, b);

    container(
        text(format!("Energy label: {}", label.display_name()))
            .size(16)
            .color([0.1, 0.1, 0.1]),
    )
    .padding(10)
    .style(move |_theme| container::Style {
        background: Some(badge_color.into()),
        border: iced::border::rounded(4),
        ..container::Style::default()
    })
    .into()
}

/// Format a payback period, spelling out the infinite sentinel
fn format_payback(years: f64) -> String {
    if years.is_finite() {
        format!("{:.2} years", years)
    } else {
        "never".to_string()
    }
}
