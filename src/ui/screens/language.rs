use crate::i18n::{tr, Language, Msg};
use crate::ui::components::nav_bar;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct LanguageScreen {
    pub current: Language,
    pub highlighted: usize,
}

impl LanguageScreen {
    pub fn new(current: Language) -> Self {
        Self {
            current,
            highlighted: 0,
        }
    }

    pub fn with_highlight(mut self, index: usize) -> Self {
        self.highlighted = index;
        self
    }
}

impl Widget for LanguageScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(Span::styled(
            tr(self.current, Msg::SelectLanguage),
            Theme::title(),
        ))
        .render(chunks[0], buf);

        let block = Block::default()
            .title(tr(self.current, Msg::Language))
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());
        let inner = block.inner(chunks[1]);
        block.render(chunks[1], buf);

        let items: Vec<ListItem> = Language::all()
            .iter()
            .enumerate()
            .map(|(i, lang)| {
                let marker = if *lang == self.current { "● " } else { "○ " };
                let style = if i == self.highlighted {
                    Theme::selected()
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Theme::highlight()),
                    Span::styled(lang.native_name(), Theme::normal()),
                    Span::styled(format!("  ({})", lang.code()), Theme::dim()),
                ]))
                .style(style)
            })
            .collect();
        List::new(items).render(inner, buf);

        Paragraph::new(nav_bar(self.current, &[("↑↓", ""), ("Enter", "")]))
            .render(chunks[2], buf);
    }
}
