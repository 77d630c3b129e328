use crate::i18n::{tr, Language, Msg};
use crate::models::CropSeason;
use crate::ui::components::nav_bar;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct CalendarScreen<'a> {
    pub lang: Language,
    pub seasons: &'a [CropSeason],
    pub selected_index: usize,
}

impl<'a> CalendarScreen<'a> {
    pub fn new(lang: Language, seasons: &'a [CropSeason]) -> Self {
        Self {
            lang,
            seasons,
            selected_index: 0,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }
}

impl Widget for CalendarScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Seasons + crops
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![Span::styled(
            tr(self.lang, Msg::CropCalendar),
            Theme::title(),
        )]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(chunks[1]);

        self.render_seasons(content[0], buf);
        self.render_crops(content[1], buf);

        Paragraph::new(nav_bar(self.lang, &[("↑↓", "")])).render(chunks[2], buf);
    }
}

impl CalendarScreen<'_> {
    fn render_seasons(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(tr(self.lang, Msg::Season))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .seasons
            .iter()
            .enumerate()
            .map(|(i, season)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };
                ListItem::new(vec![
                    Line::from(Span::styled(season.name.get(self.lang), Theme::header())),
                    Line::from(Span::styled(
                        format!("  {}", season.months.get(self.lang)),
                        Theme::dim(),
                    )),
                ])
                .style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_crops(&self, area: Rect, buf: &mut Buffer) {
        let Some(season) = self.seasons.get(self.selected_index) else {
            return;
        };

        let block = Block::default()
            .title(season.name.get(self.lang))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let sowing = tr(self.lang, Msg::SowingPeriod);
        let harvest = tr(self.lang, Msg::HarvestPeriod);
        let items: Vec<ListItem> = season
            .crops
            .iter()
            .map(|crop| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", crop.icon)),
                        Span::styled(crop.name.get(self.lang), Theme::header()),
                    ]),
                    Line::from(vec![
                        Span::styled(format!("  {}: ", sowing), Theme::dim()),
                        Span::styled(crop.sowing.get(self.lang), Theme::success()),
                    ]),
                    Line::from(vec![
                        Span::styled(format!("  {}: ", harvest), Theme::dim()),
                        Span::styled(crop.harvest.get(self.lang), Theme::warning()),
                    ]),
                ])
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
