use chrono::{Datelike, Local, NaiveDateTime};
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::i18n::Language;
use crate::Message;

/// Format the generator writes into `lastUpdated`
const INDEX_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Credits, the index's last-sync time and the latest save message
pub fn view<'a>(last_sync: Option<&str>, status: Option<&'a str>, language: Language) -> Element<'a, Message> {
    let t = language.strings();

    let mut content = column![
        text("Icons: Microsoft Fluent UI System Icons").size(13),
        text(format!("© {} Fluent Icons Online", Local::now().year())).size(12),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    if let Some(last_sync) = last_sync {
        content = content.push(text(format!("{}: {}", t.last_sync, format_last_sync(last_sync))).size(12));
    }

    if let Some(status) = status {
        content = content.push(text(status).size(12));
    }

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([40, 20])
        .into()
}

/// Shorten a well-formed index timestamp to the minute; anything else
/// is shown exactly as the index has it
pub fn format_last_sync(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, INDEX_TIMESTAMP) {
        Ok(timestamp) => timestamp.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
