//! Canvas drawing utilities for the result charts
//!
//! Renders two stacked bar charts: retrofit cost (€) next to annual energy
//! savings (kWh) per category on twin scales, and CO2 reduction (kg) per
//! category.

use iced::widget::canvas::{self, Frame, Geometry, Path, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use retro_core::calculations::category::CategoryResult;

use crate::Message;

/// Data needed to draw the charts
pub struct ChartData {
    pub categories: Vec<&'static str>,
    pub costs_eur: Vec<f64>,
    pub savings_kwh: Vec<f64>,
    pub co2_kg: Vec<f64>,
}

impl ChartData {
    pub fn from_results(results: &[CategoryResult]) -> Self {
        Self {
            categories: results.iter().map(|r| r.category.display_name()).collect(),
            costs_eur: results.iter().map(|r| r.net_cost_eur).collect(),
            savings_kwh: results.iter().map(|r| r.energy_saved_kwh).collect(),
            co2_kg: results.iter().map(|r| r.co2_saved_kg).collect(),
        }
    }
}

/// Canvas program for drawing the result charts
pub struct SavingsChart {
    data: ChartData,
}

impl SavingsChart {
    pub fn new(data: ChartData) -> Self {
        Self { data }
    }

    /// Grouped bars: cost and savings per category, each on its own scale
    fn draw_cost_savings(&self, frame: &mut Frame, x: f32, y: f32, width: f32, height: f32) {
        let cost_color = Color::from_rgb(0.53, 0.81, 0.92);
        let savings_color = Color::from_rgb(0.56, 0.93, 0.56);

        let title = Text {
            content: "Cost (€) and Savings (kWh) per Category".to_string(),
            position: Point::new(x, y + 2.0),
            color: Color::from_rgb(0.5, 0.5, 0.5),
            size: iced::Pixels(10.0),
            ..Text::default()
        };
        frame.fill_text(title);

        let max_cost = self.data.costs_eur.iter().fold(0.0f64, |a, &b| a.max(b));
        let max_savings = self.data.savings_kwh.iter().fold(0.0f64, |a, &b| a.max(b));

        let plot_top = y + 20.0;
        let plot_height = height - 50.0;
        let baseline = plot_top + plot_height;
        let slot_width = width / self.data.categories.len().max(1) as f32;
        let bar_width = slot_width * 0.28;

        for (i, name) in self.data.categories.iter().enumerate() {
            let slot_x = x + i as f32 * slot_width;
            let cost = self.data.costs_eur[i];
            let savings = self.data.savings_kwh[i];

            self.draw_bar(
                frame,
                slot_x + slot_width * 0.18,
                baseline,
                bar_width,
                plot_height,
                cost,
                max_cost,
                cost_color,
                &format!("{cost:.0}"),
            );
            self.draw_bar(
                frame,
                slot_x + slot_width * 0.54,
                baseline,
                bar_width,
                plot_height,
                savings,
                max_savings,
                savings_color,
                &format!("{savings:.0}"),
            );

            let category_label = Text {
                content: name.to_string(),
                position: Point::new(slot_x + slot_width / 2.0, baseline + 6.0),
                color: Color::from_rgb(0.5, 0.5, 0.5),
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            };
            frame.fill_text(category_label);
        }

        // Legend
        let legend_cost = Text {
            content: "■ Cost (€)".to_string(),
            position: Point::new(x, baseline + 18.0),
            color: cost_color,
            size: iced::Pixels(9.0),
            ..Text::default()
        };
        frame.fill_text(legend_cost);

        let legend_savings = Text {
            content: "■ Savings (kWh)".to_string(),
            position: Point::new(x + 70.0, baseline + 18.0),
            color: savings_color,
            size: iced::Pixels(9.0),
            ..Text::default()
        };
        frame.fill_text(legend_savings);
    }

    /// Single bars: CO2 reduction per category
    fn draw_co2(&self, frame: &mut Frame, x: f32, y: f32, width: f32, height: f32) {
        let co2_color = Color::from_rgb(0.94, 0.5, 0.5);

        let title = Text {
            content: "CO2 Reduction (kg) per Category".to_string(),
            position: Point::new(x, y + 2.0),
            color: Color::from_rgb(0.5, 0.5, 0.5),
            size: iced::Pixels(10.0),
            ..Text::default()
        };
        frame.fill_text(title);

        let max_co2 = self.data.co2_kg.iter().fold(0.0f64, |a, &b| a.max(b));

        let plot_top = y + 20.0;
        let plot_height = height - 40.0;
        let baseline = plot_top + plot_height;
        let slot_width = width / self.data.categories.len().max(1) as f32;
        let bar_width = slot_width * 0.4;

        for (i, name) in self.data.categories.iter().enumerate() {
            let slot_x = x + i as f32 * slot_width;
            let co2 = self.data.co2_kg[i];

            self.draw_bar(
                frame,
                slot_x + slot_width * 0.3,
                baseline,
                bar_width,
                plot_height,
                co2,
                max_co2,
                co2_color,
                &format!("{co2:.1}"),
            );

            let category_label = Text {
                content: name.to_string(),
                position: Point::new(slot_x + slot_width / 2.0, baseline + 6.0),
                color: Color::from_rgb(0.5, 0.5, 0.5),
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            };
            frame.fill_text(category_label);
        }
    }

    /// Draw one bar scaled against `max_value`, with its value printed above.
    ///
    /// Non-positive values draw no bar (a negative saving has no height),
    /// but the value label still appears so the user sees what happened.
    fn draw_bar(
        &self,
        frame: &mut Frame,
        bar_x: f32,
        baseline: f32,
        bar_width: f32,
        plot_height: f32,
        value: f64,
        max_value: f64,
        color: Color,
        label: &str,
    ) {
        let bar_height = if value > 0.0 && max_value > 0.0 {
            ((value / max_value) as f32 * plot_height).max(1.0)
        } else {
            0.0
        };

        if bar_height > 0.0 {
            let bar = Path::rectangle(
                Point::new(bar_x, baseline - bar_height),
                Size::new(bar_width, bar_height),
            );
            frame.fill(&bar, color);
        }

        let value_label = Text {
            content: label.to_string(),
            position: Point::new(bar_x + bar_width / 2.0, baseline - bar_height - 12.0),
            color,
            size: iced::Pixels(8.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        };
        frame.fill_text(value_label);
    }
}

impl canvas::Program<Message> for SavingsChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let margin = 20.0;
        let plot_width = bounds.width - 2.0 * margin;
        let section_height = bounds.height / 2.0;

        self.draw_cost_savings(&mut frame, margin, 0.0, plot_width, section_height);
        self.draw_co2(&mut frame, margin, section_height, plot_width, section_height);

        vec![frame.into_geometry()]
    }
}
