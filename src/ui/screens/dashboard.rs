use crate::app::LoadState;
use crate::i18n::{tr, Language, Msg};
use crate::models::{CurrentWeather, DailySummary, Place, SoilProfile, WeatherIcon};
use crate::ui::components::{humidity_gauge, nav_bar, rainfall_gauge, temperature_gauge, wind_gauge};
use crate::ui::Theme;
use chrono::{DateTime, Local, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct DashboardScreen<'a> {
    pub lang: Language,
    pub place: Option<&'a Place>,
    pub weather: Option<&'a CurrentWeather>,
    pub soil: Option<&'a SoilProfile>,
    pub forecast: &'a [DailySummary],
    pub load_state: &'a LoadState,
    pub last_updated: Option<DateTime<Utc>>,
    pub status_message: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(lang: Language, load_state: &'a LoadState, forecast: &'a [DailySummary]) -> Self {
        Self {
            lang,
            place: None,
            weather: None,
            soil: None,
            forecast,
            load_state,
            last_updated: None,
            status_message: None,
        }
    }

    pub fn with_place(mut self, place: Option<&'a Place>, soil: Option<&'a SoilProfile>) -> Self {
        self.place = place;
        self.soil = soil;
        self
    }

    pub fn with_weather(
        mut self,
        weather: Option<&'a CurrentWeather>,
        last_updated: Option<DateTime<Utc>>,
    ) -> Self {
        self.weather = weather;
        self.last_updated = last_updated;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }

    fn t(&self, msg: Msg) -> &'static str {
        tr(self.lang, msg)
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);

        match self.load_state {
            LoadState::LocationError(reason) => self.render_error(chunks[1], buf, reason),
            LoadState::Loading if self.weather.is_none() => self.render_loading(chunks[1], buf),
            _ => self.render_body(chunks[1], buf),
        }

        self.render_status_message(chunks[2], buf);
        Paragraph::new(nav_bar(self.lang, &[])).render(chunks[3], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.place {
            Some(p) => format!("FarmGPT - {}", p.label()),
            None => "FarmGPT".to_string(),
        };

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let last_updated = self
            .last_updated
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| self.t(Msg::Never).to_string());

        let info = format!("{}: {}", self.t(Msg::LastUpdated), last_updated);
        Paragraph::new(Span::styled(info, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.t(Msg::DetectingLocation), Theme::highlight())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_error(&self, area: Rect, buf: &mut Buffer, reason: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::ERROR));
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.t(Msg::LocationDenied), Theme::error())),
            Line::from(Span::styled(reason.to_string(), Theme::dim())),
            Line::from(""),
            Line::from(vec![
                Span::styled("[r] ", Theme::nav_key()),
                Span::styled(self.t(Msg::Retry), Theme::normal()),
            ]),
        ];
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Current conditions
                Constraint::Length(5), // Gauges
                Constraint::Min(7),    // Soil + forecast
            ])
            .split(area);

        self.render_current(rows[0], buf);
        self.render_gauges(rows[1], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(rows[2]);

        self.render_soil(bottom[0], buf);
        self.render_forecast(bottom[1], buf);
    }

    fn render_current(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(self.t(Msg::Weather), Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(w) = self.weather else {
            Paragraph::new(Span::styled(self.t(Msg::NoData), Theme::dim())).render(inner, buf);
            return;
        };

        let icon = WeatherIcon::from_code(&w.icon);
        let lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", icon.symbol())),
                Span::styled(
                    format!("{:.0}°C", w.temp),
                    Style::default().fg(Theme::temp_color(w.temp)),
                ),
                Span::raw("  "),
                Span::styled(w.display_description(), Theme::normal()),
                Span::styled(
                    format!("  ({:.0}° / {:.0}°)", w.temp_min, w.temp_max),
                    Theme::dim(),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(Msg::FeelsLike)), Theme::dim()),
                Span::styled(format!("{:.0}°C", w.feels_like), Theme::normal()),
                Span::styled(format!("   {}: ", self.t(Msg::Pressure)), Theme::dim()),
                Span::styled(format!("{:.0} hPa", w.pressure), Theme::normal()),
                Span::styled(format!("   {}: ", self.t(Msg::Visibility)), Theme::dim()),
                Span::styled(format!("{:.0} km", w.visibility_km), Theme::normal()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let w = self.weather;
        temperature_gauge(self.t(Msg::Temperature), w.map(|w| w.temp)).render(cells[0], buf);
        humidity_gauge(self.t(Msg::Humidity), w.map(|w| w.humidity)).render(cells[1], buf);
        rainfall_gauge(self.t(Msg::Rainfall), w.map(|w| w.rainfall_mm)).render(cells[2], buf);
        wind_gauge(self.t(Msg::WindSpeed), w.map(|w| w.wind_speed_kmh)).render(cells[3], buf);
    }

    fn render_soil(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(self.t(Msg::SoilInfo), Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(soil) = self.soil else {
            Paragraph::new(Span::styled(self.t(Msg::NoData), Theme::dim())).render(inner, buf);
            return;
        };

        let lines = vec![
            Line::from(Span::styled(self.t(Msg::SoilType), Theme::dim())),
            Line::from(Span::styled(soil.soil_type.get(self.lang), Theme::highlight())),
            Line::from(Span::styled(self.t(Msg::CropsGrown), Theme::dim())),
            Line::from(Span::styled(soil.major_crops.get(self.lang), Theme::normal())),
            Line::from(Span::styled(self.t(Msg::IrrigationType), Theme::dim())),
            Line::from(Span::styled(soil.irrigation.get(self.lang), Theme::normal())),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_forecast(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(self.t(Msg::Forecast), Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.forecast.is_empty() {
            Paragraph::new(Span::styled(self.t(Msg::NoData), Theme::dim())).render(inner, buf);
            return;
        }

        let constraints: Vec<Constraint> = self
            .forecast
            .iter()
            .map(|_| Constraint::Ratio(1, self.forecast.len() as u32))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for (day, column) in self.forecast.iter().zip(columns.iter()) {
            let icon = WeatherIcon::from_code(&day.icon);
            let lines = vec![
                Line::from(Span::styled(day_label(self.lang, &day.day_name), Theme::header())),
                Line::from(Span::styled(icon.symbol(), icon_style(icon))),
                Line::from(Span::styled(
                    format!("{:.0}°", day.temp_max),
                    Style::default().fg(Theme::temp_color(day.temp_max)),
                )),
                Line::from(Span::styled(
                    format!("{:.0}°", day.temp_min),
                    Style::default().fg(Theme::temp_color(day.temp_min)),
                )),
                Line::from(Span::styled(
                    format!("{:.1}mm", day.rainfall_mm),
                    Style::default().fg(Theme::rain_color(day.rainfall_mm)),
                )),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(*column, buf);
        }
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("failed") {
                Theme::warning()
            } else {
                Theme::success()
            };
            Paragraph::new(Span::styled(msg, style)).render(area, buf);
        }
    }
}

fn icon_style(icon: WeatherIcon) -> Style {
    if icon.has_precipitation() {
        Style::default().fg(Theme::RAIN_HEAVY)
    } else {
        Theme::normal()
    }
}

/// Weekday abbreviation in the display language
fn day_label(lang: Language, day_name: &str) -> String {
    let hi = match day_name {
        "Sun" => "रवि",
        "Mon" => "सोम",
        "Tue" => "मंगल",
        "Wed" => "बुध",
        "Thu" => "गुरु",
        "Fri" => "शुक्र",
        "Sat" => "शनि",
        other => other,
    };
    match lang {
        Language::En => day_name.to_string(),
        Language::Hi => hi.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn day_label_translates() {
        assert_eq!(day_label(Language::En, "Sat"), "Sat");
        assert_eq!(day_label(Language::Hi, "Sat"), "शनि");
    }

    #[test]
    fn error_state_offers_retry() {
        let state = LoadState::LocationError("no latitude/longitude configured".into());
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        DashboardScreen::new(Language::En, &state, &[]).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Location or weather data is unavailable"));
        assert!(text.contains("Retry"));
    }

    #[test]
    fn loading_state_without_data() {
        let state = LoadState::Loading;
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        DashboardScreen::new(Language::En, &state, &[]).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Detecting your location..."));
    }
}
