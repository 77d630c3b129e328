use crate::i18n::{tr, Language, Msg};
use crate::ui::Theme;
use ratatui::text::{Line, Span};

/// Bottom bar shared by every screen. `extra` holds screen-specific key hints.
pub fn nav_bar(lang: Language, extra: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, label) in extra {
        spans.push(Span::styled(format!("[{}]", key), Theme::nav_key()));
        spans.push(Span::styled(format!("{} ", label), Theme::nav_label()));
    }

    let global = [
        ("1", Msg::Dashboard),
        ("2", Msg::RecommendedCrops),
        ("3", Msg::CropCalendar),
        ("4", Msg::GovSchemes),
        ("5", Msg::Community),
        ("l", Msg::Language),
        ("r", Msg::Refresh),
        ("q", Msg::Quit),
    ];
    for (key, msg) in global {
        spans.push(Span::styled(format!("[{}]", key), Theme::nav_key()));
        spans.push(Span::styled(format!("{} ", tr(lang, msg)), Theme::nav_label()));
    }

    Line::from(spans)
}
