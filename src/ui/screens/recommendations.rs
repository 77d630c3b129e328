use crate::i18n::{tr, Language, Msg};
use crate::logic::GrowingConditions;
use crate::models::CropRecord;
use crate::ui::components::nav_bar;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct RecommendationsScreen<'a> {
    pub lang: Language,
    pub crops: &'a [&'static CropRecord],
    pub conditions: &'a GrowingConditions,
    pub selected_index: usize,
}

impl<'a> RecommendationsScreen<'a> {
    pub fn new(
        lang: Language,
        crops: &'a [&'static CropRecord],
        conditions: &'a GrowingConditions,
    ) -> Self {
        Self {
            lang,
            crops,
            conditions,
            selected_index: 0,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    fn t(&self, msg: Msg) -> &'static str {
        tr(self.lang, msg)
    }
}

impl Widget for RecommendationsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Conditions
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(self.t(Msg::CropRecommendations), Theme::title()),
            Span::styled(format!(" ({})", self.crops.len()), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_conditions(chunks[1], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        self.render_list(content[0], buf);
        self.render_details(content[1], buf);

        let nav = nav_bar(self.lang, &[("↑↓", "")]);
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

impl RecommendationsScreen<'_> {
    fn render_conditions(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.t(Msg::BasedOnConditions))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let c = self.conditions;
        let line = Line::from(vec![
            Span::styled(format!("{}: ", self.t(Msg::Temperature)), Theme::dim()),
            Span::styled(
                format!("{:.0}°C", c.temperature),
                Style::default().fg(Theme::temp_color(c.temperature)),
            ),
            Span::styled(format!("   {}: ", self.t(Msg::Rainfall)), Theme::dim()),
            Span::styled(
                format!("{:.1} mm", c.rainfall),
                Style::default().fg(Theme::rain_color(c.rainfall)),
            ),
            Span::styled(format!("   {}: ", self.t(Msg::SoilType)), Theme::dim()),
            Span::styled(c.soil_type.clone(), Theme::highlight()),
        ]);
        Paragraph::new(line).block(block).render(area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.t(Msg::RecommendedCrops))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.crops.is_empty() {
            Paragraph::new(Span::styled(self.t(Msg::NoData), Theme::dim())).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .crops
            .iter()
            .enumerate()
            .map(|(i, crop)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };
                let line = Line::from(vec![
                    Span::raw(format!("{} ", crop.icon)),
                    Span::styled(crop.name.get(self.lang), Theme::normal()),
                    Span::styled(format!("  {}", crop.season.get(self.lang)), Theme::dim()),
                ]);
                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(crop) = self.crops.get(self.selected_index) else {
            return;
        };

        let lang = self.lang;
        let water_style = Style::default().fg(Theme::water_needs_color(crop.water_needs.en));
        let lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", crop.icon)),
                Span::styled(crop.name.get(lang), Theme::header()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(Msg::Season)), Theme::dim()),
                Span::styled(crop.season.get(lang), Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(Msg::WaterNeeds)), Theme::dim()),
                Span::styled(crop.water_needs.get(lang), water_style),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(Msg::ExpectedYield)), Theme::dim()),
                Span::styled(crop.expected_yield.get(lang), Theme::success()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(Msg::Temperature)), Theme::dim()),
                Span::styled(
                    format!(
                        "{:.0}-{:.0}°C",
                        crop.temp_range.start(),
                        crop.temp_range.end()
                    ),
                    Theme::normal(),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(Msg::Rainfall)), Theme::dim()),
                Span::styled(
                    format!(
                        "{:.0}-{:.0} mm",
                        crop.rainfall_range.start(),
                        crop.rainfall_range.end()
                    ),
                    Theme::normal(),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(Msg::SoilType)), Theme::dim()),
                Span::styled(crop.soils.join(", "), Theme::normal()),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
