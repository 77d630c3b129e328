use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct GaugeWidget<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
    precision: usize,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
            precision: 0,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn color_for(&self, value: f64) -> Color {
        for (threshold, color) in self.thresholds.iter().rev() {
            if value >= *threshold {
                return *color;
            }
        }
        Theme::FG
    }

    /// Filled cells out of `width` for the current value
    fn filled_cells(&self, value: f64, width: u16) -> u16 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0;
        }
        let ratio = ((value - self.min) / span).clamp(0.0, 1.0);
        (width as f64 * ratio) as u16
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(value) = self.value else {
            Paragraph::new(Span::styled("N/A", Theme::dim())).render(inner, buf);
            return;
        };

        let color = self.color_for(value);
        let value_str = format!("{:.prec$}{}", value, self.unit, prec = self.precision);
        Paragraph::new(Line::from(Span::styled(value_str, Style::default().fg(color))))
            .render(inner, buf);

        if inner.height >= 2 {
            let y = inner.y + 1;
            let filled = self.filled_cells(value, inner.width);
            for x in inner.x..inner.x + inner.width {
                let ch = if x < inner.x + filled { '█' } else { '░' };
                buf[(x, y)].set_char(ch).set_fg(color);
            }
        }
    }
}

pub fn temperature_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "°C")
        .range(0.0, 50.0)
        .thresholds(vec![
            (f64::MIN, Theme::TEMP_COLD),
            (10.0, Theme::TEMP_COOL),
            (20.0, Theme::TEMP_WARM),
            (32.0, Theme::TEMP_HOT),
        ])
}

pub fn humidity_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .range(0.0, 100.0)
        .thresholds(vec![
            (0.0, Theme::SUCCESS),
            (80.0, Theme::WARNING),
            (90.0, Theme::ERROR),
        ])
}

pub fn rainfall_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, " mm")
        .range(0.0, 20.0)
        .precision(1)
        .thresholds(vec![
            (0.0, Theme::RAIN_NONE),
            (0.1, Theme::RAIN_LIGHT),
            (10.0, Theme::RAIN_HEAVY),
        ])
}

pub fn wind_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, " km/h")
        .range(0.0, 60.0)
        .thresholds(vec![
            (0.0, Theme::SUCCESS),
            (30.0, Theme::WARNING),
            (50.0, Theme::ERROR),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fill_is_clamped() {
        let gauge = humidity_gauge("Humidity", Some(50.0));
        assert_eq!(gauge.filled_cells(50.0, 10), 5);
        assert_eq!(gauge.filled_cells(150.0, 10), 10);
        assert_eq!(gauge.filled_cells(-5.0, 10), 0);
    }

    #[test]
    fn colour_follows_thresholds() {
        let gauge = temperature_gauge("Temp", None);
        assert_eq!(gauge.color_for(-3.0), Theme::TEMP_COLD);
        assert_eq!(gauge.color_for(25.0), Theme::TEMP_WARM);
        assert_eq!(gauge.color_for(38.0), Theme::TEMP_HOT);
    }

    #[test]
    fn renders_value_and_bar() {
        let area = Rect::new(0, 0, 14, 4);
        let mut buf = Buffer::empty(area);
        rainfall_gauge("Rain", Some(1.7)).render(area, &mut buf);

        let row: String = (1..13).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.starts_with("1.7 mm"));
    }
}
