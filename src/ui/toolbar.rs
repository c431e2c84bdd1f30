use iced::widget::{button, row, text, vertical_rule};
use iced::{Alignment, Element, Theme};

use crate::i18n::Language;
use crate::state::data::StyleFilter;
use crate::Message;

/// Style filter buttons followed by the result count
pub fn view<'a>(selected: StyleFilter, icon_count: usize, language: Language) -> Element<'a, Message> {
    let t = language.strings();

    let mut toolbar = row![].spacing(12).padding([20, 0]).align_y(Alignment::Center);

    for style in StyleFilter::ALL {
        let label = match style {
            StyleFilter::All => t.all_styles,
            StyleFilter::Regular => t.regular,
            StyleFilter::Filled => t.filled,
        };

        let appearance: fn(&Theme, button::Status) -> button::Style = if style == selected {
            button::primary
        } else {
            button::text
        };

        let style_button = button(text(label))
            .on_press(Message::StyleFilterSelected(style))
            .style(appearance);

        toolbar = toolbar.push(style_button);
    }

    toolbar
        .push(vertical_rule(1))
        .push(text(format!("{} {}", icon_count, t.icons_found)).size(14))
        .height(72)
        .into()
}
