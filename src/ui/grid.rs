use iced::widget::{button, column, container, row, svg, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use crate::assets::cache::AssetCache;
use crate::assets::resolver;
use crate::i18n::Language;
use crate::state::browse::Browse;
use crate::state::data::IndexItem;
use crate::state::pager::GAP;
use crate::Message;

const CARD_HEIGHT: f32 = 128.0;
const THUMBNAIL_SIZE: f32 = 32.0;

/// The current page of icons plus the page controls
pub fn view<'a>(browse: &'a Browse, cache: &'a AssetCache, language: Language) -> Element<'a, Message> {
    let columns = browse.columns();

    let mut grid = Column::new().spacing(GAP).width(Length::Fill);
    for chunk in browse.current_items().chunks(columns) {
        let mut cards = Row::new().spacing(GAP).width(Length::Fill);
        for item in chunk {
            cards = cards.push(card(item, cache));
        }
        // Keep a short last row aligned with the rows above it
        for _ in chunk.len()..columns {
            cards = cards.push(Space::with_width(Length::Fill));
        }
        grid = grid.push(cards);
    }

    let mut content = column![grid].spacing(24).width(Length::Fill);

    if !browse.filtered().is_empty() {
        content = content.push(pagination(browse, language));
    }

    content.into()
}

fn card<'a>(item: &'a IndexItem, cache: &'a AssetCache) -> Element<'a, Message> {
    let path = resolver::thumbnail_path(item);

    // Missing or not-yet-loaded thumbnails leave an empty slot
    let thumbnail: Element<'a, Message> = match cache.get(&path) {
        Some(handle) => svg(handle.clone())
            .width(THUMBNAIL_SIZE)
            .height(THUMBNAIL_SIZE)
            .into(),
        None => Space::new(THUMBNAIL_SIZE, THUMBNAIL_SIZE).into(),
    };

    let label = container(text(item.name.as_str()).size(12)).center_x(Length::Fill);

    let body = column![thumbnail, label]
        .spacing(8)
        .align_x(Alignment::Center);

    button(container(body).center(Length::Fill))
        .on_press(Message::IconSelected(item.clone()))
        .width(Length::Fill)
        .height(CARD_HEIGHT)
        .padding(12)
        .style(button::secondary)
        .into()
}

fn pagination<'a>(browse: &Browse, language: Language) -> Element<'a, Message> {
    let t = language.strings();

    let previous = button(text(t.previous))
        .on_press_maybe(browse.has_previous().then_some(Message::PreviousPage));
    let next = button(text(t.next)).on_press_maybe(browse.has_next().then_some(Message::NextPage));

    let status = text(format!(
        "{} {} {} {}",
        t.page,
        browse.current_page(),
        t.of,
        browse.total_pages()
    ));

    container(
        row![previous, status, next]
            .spacing(16)
            .align_y(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding([16, 0])
    .into()
}
