use crate::i18n::{tr, Language, Msg};
use crate::models::CommunityMessage;
use crate::ui::components::{nav_bar, InputWidget};
use crate::ui::Theme;
use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct CommunityScreen<'a> {
    pub lang: Language,
    pub messages: &'a [CommunityMessage],
    pub now: DateTime<Utc>,
    pub selected_index: usize,
    pub composing: bool,
    pub input: &'a str,
}

impl<'a> CommunityScreen<'a> {
    pub fn new(lang: Language, messages: &'a [CommunityMessage], now: DateTime<Utc>) -> Self {
        Self {
            lang,
            messages,
            now,
            selected_index: 0,
            composing: false,
            input: "",
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn composing(mut self, composing: bool, input: &'a str) -> Self {
        self.composing = composing;
        self.input = input;
        self
    }
}

impl Widget for CommunityScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(6),    // Messages
                Constraint::Length(3), // Composer
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(tr(self.lang, Msg::Community), Theme::title()),
            Span::styled(format!(" ({})", self.messages.len()), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_messages(chunks[1], buf);

        InputWidget::new(tr(self.lang, Msg::Send), self.input)
            .placeholder(tr(self.lang, Msg::TypeMessage))
            .focused(self.composing)
            .render(chunks[2], buf);

        let hints: &[(&str, &str)] = if self.composing {
            &[("Enter", "Send"), ("Esc", "Cancel")]
        } else {
            &[("n", "New"), ("d", "Delete"), ("↑↓", "")]
        };
        Paragraph::new(nav_bar(self.lang, hints)).render(chunks[3], buf);
    }
}

impl CommunityScreen<'_> {
    fn render_messages(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.messages.is_empty() {
            Paragraph::new(Span::styled(tr(self.lang, Msg::NoMessages), Theme::dim()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .messages
            .iter()
            .enumerate()
            .map(|(i, msg)| {
                let style = if i == self.selected_index && !self.composing {
                    Theme::selected()
                } else {
                    Style::default()
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(msg.author.as_str(), Theme::highlight()),
                        Span::styled(format!("  {}", msg.time_ago(self.now)), Theme::dim()),
                    ]),
                    Line::from(Span::styled(format!("  {}", msg.text), Theme::normal())),
                ])
                .style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn text_of(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn empty_board_shows_placeholder() {
        let area = Rect::new(0, 0, 100, 12);
        let mut buf = Buffer::empty(area);
        CommunityScreen::new(Language::En, &[], Utc::now()).render(area, &mut buf);

        let text = text_of(&buf);
        assert!(text.contains("No messages yet"));
        assert!(text.contains("Type your message..."));
    }

    #[test]
    fn messages_show_author_and_age() {
        let now = Utc::now();
        let messages = vec![CommunityMessage {
            id: Some(1),
            author: "Farmer Ram".into(),
            text: "Good rain today".into(),
            created_at: now - Duration::minutes(5),
        }];
        let area = Rect::new(0, 0, 100, 12);
        let mut buf = Buffer::empty(area);
        CommunityScreen::new(Language::En, &messages, now).render(area, &mut buf);

        let text = text_of(&buf);
        assert!(text.contains("Farmer Ram  5m ago"));
        assert!(text.contains("Good rain today"));
    }
}
