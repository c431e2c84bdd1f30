use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use crate::i18n::Language;
use crate::Message;

/// Title bar with the search box and the language switch
pub fn view<'a>(search_term: &str, language: Language) -> Element<'a, Message> {
    let t = language.strings();

    let language_switch = row![
        Space::with_width(Length::Fill),
        button(text(language.toggle().to_string()))
            .on_press(Message::LanguageToggled)
            .style(button::text),
    ];

    let search = text_input(t.search_placeholder, search_term)
        .on_input(Message::SearchChanged)
        .padding(12)
        .size(18)
        .width(Length::Fixed(600.0));

    let content = column![
        language_switch,
        text(t.title).size(36),
        text(t.subtitle).size(16),
        Space::with_height(12),
        search,
    ]
    .spacing(8)
    .padding(20)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
