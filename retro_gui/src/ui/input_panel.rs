//! Input Panel (Left Side)
//!
//! Environment fields shared by all categories, followed by the four
//! category editors.

use iced::widget::{column, container, pick_list, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

use retro_core::environment::HeatingType;

use super::input_category::{self, labeled_input};
use crate::{App, Message};

/// Render the input panel
pub fn view(app: &App) -> Element<'_, Message> {
    let environment_section = column![
        text("Environment").size(14),
        Space::new().height(8),
        labeled_input("ΔT (°C):", &app.delta_t, Message::DeltaTChanged),
        labeled_input("Hours/year:", &app.hours_per_year, Message::HoursPerYearChanged),
        labeled_input("Energy (€/kWh):", &app.energy_cost, Message::EnergyCostChanged),
        row![
            text("Heating:").size(11).width(Length::Fixed(110.0)),
            pick_list(
                &HeatingType::ALL[..],
                Some(app.heating_type),
                Message::HeatingTypeSelected
            )
            .width(Length::Fill)
            .text_size(11),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(6);

    let mut panel: Column<'_, Message> = column![
        environment_section,
        Space::new().height(12),
        text("Categories").size(14),
    ]
    .spacing(6);

    for fields in &app.categories {
        panel = panel
            .push(Space::new().height(8))
            .push(input_category::view(fields));
    }

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(40))
        .style(container::bordered_box)
        .padding(5)
        .into()
}
