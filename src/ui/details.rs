use iced::widget::{button, column, container, horizontal_rule, row, scrollable, svg, text, Space};
use iced::{font, Alignment, Element, Font, Length, Pixels, Theme};
use iced_aw::Wrap;

use crate::assets::cache::AssetCache;
use crate::assets::resolver::{self, AssetFormat};
use crate::i18n::{Language, Strings};
use crate::state::data::{IndexItem, MetadataData};
use crate::state::selection::Selection;
use crate::Message;

use super::DETAILS_WIDTH;

const PREVIEW_SIZE: f32 = 96.0;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Side panel for the selected icon. Shows a loading line until the
/// metadata for the current selection arrives.
pub fn view<'a>(selection: &'a Selection, cache: &'a AssetCache, language: Language) -> Element<'a, Message> {
    let t = language.strings();

    let title_bar = row![
        text(t.icon_details).size(20),
        Space::with_width(Length::Fill),
        button(text(t.close)).on_press(Message::DetailsClosed).style(button::text),
    ]
    .align_y(Alignment::Center);

    let mut body = column![title_bar].spacing(16).padding(24);

    if let Some(icon) = selection.icon() {
        body = body
            .push(text(icon.name.as_str()).size(28))
            .push(preview(icon, selection, cache));

        body = match selection.metadata() {
            Some(metadata) => body.push(metadata_section(metadata, selection, t)),
            None => body.push(text(t.loading_metadata)),
        };
    }

    container(scrollable(body))
        .width(DETAILS_WIDTH)
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn preview<'a>(icon: &IndexItem, selection: &Selection, cache: &'a AssetCache) -> Element<'a, Message> {
    let path = resolver::resolve_path(
        icon,
        selection.current_size(),
        selection.current_style(),
        AssetFormat::Svg,
    );

    // A missing asset hides the image rather than showing an error
    let image: Element<'a, Message> = match cache.get(&path) {
        Some(handle) => svg(handle.clone()).width(PREVIEW_SIZE).height(PREVIEW_SIZE).into(),
        None => Space::new(PREVIEW_SIZE, PREVIEW_SIZE).into(),
    };

    let caption = text(format!(
        "{}px / {}",
        selection.current_size(),
        selection.current_style()
    ))
    .size(13);

    container(
        column![image, caption]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding(32)
    .style(container::rounded_box)
    .into()
}

fn metadata_section<'a>(
    metadata: &'a MetadataData,
    selection: &Selection,
    t: &'static Strings,
) -> Element<'a, Message> {
    let sizes = Wrap::with_elements(
        metadata
            .size
            .iter()
            .map(|&size| {
                badge(
                    format!("{}px", size),
                    size == selection.current_size(),
                    Message::SizeSelected(size),
                )
            })
            .collect(),
    )
    .spacing(Pixels(8.0))
    .line_spacing(Pixels(8.0));

    let styles = Wrap::with_elements(
        metadata
            .style
            .iter()
            .map(|style| {
                badge(
                    style.clone(),
                    style == selection.current_style(),
                    Message::StyleSelected(style.clone()),
                )
            })
            .collect(),
    )
    .spacing(Pixels(8.0))
    .line_spacing(Pixels(8.0));

    let downloads = column![
        download_button(t.download_svg, AssetFormat::Svg, button::primary),
        row![
            download_button(t.download_png, AssetFormat::Png, button::secondary),
            download_button(t.download_pdf, AssetFormat::Pdf, button::secondary),
        ]
        .spacing(8),
    ]
    .spacing(12);

    column![
        text(metadata.description.as_str()),
        horizontal_rule(1),
        text(t.select_preview_size).font(BOLD),
        sizes,
        text(t.select_style).font(BOLD),
        styles,
        horizontal_rule(1),
        text(t.download_assets).font(BOLD),
        downloads,
        horizontal_rule(1),
        text(t.attributes).font(BOLD),
        text(format!("{}: {}", t.keywords, metadata.keyword)).size(13),
        text(format!("{}: {}", t.metaphors, metadata.metaphor.join(", "))).size(13),
    ]
    .spacing(12)
    .into()
}

fn badge<'a>(label: String, active: bool, on_press: Message) -> Element<'a, Message> {
    let appearance: fn(&Theme, button::Status) -> button::Style = if active {
        button::primary
    } else {
        button::secondary
    };

    button(text(label).size(13))
        .on_press(on_press)
        .padding([4, 10])
        .style(appearance)
        .into()
}

fn download_button<'a>(
    label: &'static str,
    format: AssetFormat,
    appearance: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(container(text(label)).center_x(Length::Fill))
        .on_press(Message::Export(format))
        .width(Length::Fill)
        .padding(10)
        .style(appearance)
        .into()
}
