//! Toolbar component
//!
//! Contains the application header, the PDF export action and the theme toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header with title
pub fn view_header() -> Element<'static, Message> {
    row![
        text("Retrofit").size(28),
        Space::new().width(Length::Fill),
        text("Insulation savings calculator").size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar with the export action and settings
pub fn view_toolbar(can_export: bool, dark_mode: bool) -> Element<'static, Message> {
    let mut export_button = button(text("Export PDF").size(11))
        .padding(Padding::from([4, 8]))
        .style(button::primary);
    if can_export {
        export_button = export_button.on_press(Message::ExportPdf);
    }

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_button = button(text(theme_label).size(11))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        export_button,
        Space::new().width(Length::Fill),
        theme_button,
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
