//! Input view for one envelope category
//!
//! Displays:
//! - Surface area
//! - Current and desired RC-values
//! - Material and installation cost per m²
//! - Subsidy percentage

use iced::widget::{column, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::{CategoryField, CategoryFields, Message};

/// Render the editor for one category
pub fn view(fields: &CategoryFields) -> Column<'_, Message> {
    let category = fields.category;

    column![
        text(category.display_name()).size(13),
        labeled_input("Area (m²):", &fields.area, move |v| {
            Message::CategoryFieldChanged(category, CategoryField::Area, v)
        }),
        labeled_input("Current RC:", &fields.current_rc, move |v| {
            Message::CategoryFieldChanged(category, CategoryField::CurrentRc, v)
        }),
        labeled_input("Desired RC:", &fields.desired_rc, move |v| {
            Message::CategoryFieldChanged(category, CategoryField::DesiredRc, v)
        }),
        labeled_input("Material (€/m²):", &fields.material_cost, move |v| {
            Message::CategoryFieldChanged(category, CategoryField::MaterialCost, v)
        }),
        labeled_input("Install (€/m²):", &fields.installation_cost, move |v| {
            Message::CategoryFieldChanged(category, CategoryField::InstallationCost, v)
        }),
        labeled_input("Subsidy (%):", &fields.subsidy, move |v| {
            Message::CategoryFieldChanged(category, CategoryField::Subsidy, v)
        }),
    ]
    .spacing(6)
}

/// Helper to create a labeled text input
pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(110.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
