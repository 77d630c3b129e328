use crate::i18n::{tr, Language, Msg};
use crate::models::GovernmentScheme;
use crate::ui::components::nav_bar;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct SchemesScreen<'a> {
    pub lang: Language,
    pub schemes: &'a [GovernmentScheme],
    pub selected_index: usize,
}

impl<'a> SchemesScreen<'a> {
    pub fn new(lang: Language, schemes: &'a [GovernmentScheme]) -> Self {
        Self {
            lang,
            schemes,
            selected_index: 0,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }
}

impl Widget for SchemesScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(Span::styled(tr(self.lang, Msg::GovSchemes), Theme::title()))
            .render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_list(content[0], buf);
        self.render_details(content[1], buf);

        Paragraph::new(nav_bar(self.lang, &[("↑↓", "")])).render(chunks[2], buf);
    }
}

impl SchemesScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .schemes
            .iter()
            .enumerate()
            .map(|(i, scheme)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(scheme.name.get(self.lang))).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let Some(scheme) = self.schemes.get(self.selected_index) else {
            return;
        };

        let block = Block::default()
            .title(Span::styled(scheme.name.get(self.lang), Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let lines = vec![
            Line::from(Span::styled(tr(self.lang, Msg::Benefits), Theme::dim())),
            Line::from(Span::styled(scheme.benefit.get(self.lang), Theme::success())),
            Line::from(""),
            Line::from(Span::styled(tr(self.lang, Msg::Eligibility), Theme::dim())),
            Line::from(Span::styled(scheme.eligibility.get(self.lang), Theme::normal())),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
