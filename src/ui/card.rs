/// Idea card rendering
///
/// `RenderedCard` is the plain-data description of one card: every handle
/// already resolved, every proportion already derived from the card state.
/// `view` turns it into iced widgets.

use iced::widget::{column, container, image, mouse_area, row, text, Space};
use iced::{alignment, ContentFit, Element, Length, Size, Theme};
use std::path::PathBuf;
use std::time::Instant;

use crate::assets::AssetIndex;
use crate::state::card::{Card, Proportions};
use crate::state::data::{PresentationItem, TextRef};
use crate::state::strings;
use crate::Message;

/// Shown in place of a text resource that doesn't resolve
const MISSING_TEXT: &str = "…";

/// Flex units split between the image and info regions
const PORTION_SCALE: f32 = 1000.0;

/// What goes in the image region
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    File(PathBuf),
    Placeholder,
}

/// Everything needed to draw one card
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub position: usize,
    /// "Day 7"
    pub day: String,
    pub title: &'static str,
    pub image: ImageSource,
    pub expanded: bool,
    /// Present while expanded, and while fading out after a collapse
    pub description: Option<&'static str>,
    pub reference: &'static str,
    pub image_share: f32,
    pub info_share: f32,
    pub description_opacity: f32,
}

impl RenderedCard {
    pub fn build(
        item: &PresentationItem,
        card: &Card,
        proportions: &Proportions,
        assets: Option<&AssetIndex>,
        now: Instant,
    ) -> Self {
        let expansion = card.expansion(now);
        let expanded = card.is_expanded();

        let image = match assets.map(|index| index.resolve(item.idea.image)) {
            Some(Ok(path)) => ImageSource::File(path.to_path_buf()),
            // Missing images are logged once by the asset scan
            Some(Err(_)) | None => ImageSource::Placeholder,
        };

        let description = (expanded || expansion > 0.0).then(|| resolve_text(item.idea.description));

        RenderedCard {
            position: item.position,
            day: strings::day_label(item.position),
            title: resolve_text(item.idea.title),
            image,
            expanded,
            description,
            reference: resolve_text(item.idea.reference),
            image_share: proportions.image_share(expansion),
            info_share: proportions.info_share(expansion),
            description_opacity: expansion,
        }
    }
}

fn resolve_text(handle: TextRef) -> &'static str {
    strings::resolve(handle).unwrap_or_else(|err| {
        tracing::warn!("{}", err);
        MISSING_TEXT
    })
}

/// Split the card height into two flex portions, neither of them zero
fn portions(image_share: f32) -> (u16, u16) {
    let image = (image_share * PORTION_SCALE).round().clamp(1.0, PORTION_SCALE - 1.0) as u16;
    (image, PORTION_SCALE as u16 - image)
}

/// Build the card widget; a click anywhere on it toggles the card
pub fn view(card: RenderedCard, size: Size) -> Element<'static, Message> {
    let (image_portion, info_portion) = portions(card.image_share);

    let picture: Element<'static, Message> = match card.image {
        ImageSource::File(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ImageSource::Placeholder => container(text(card.title).size(32))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(container::bordered_box)
            .into(),
    };

    let headline = row![text(card.day).size(24), text(card.title).size(24)].spacing(10);

    let mut info = column![headline].spacing(10);

    if let Some(description) = card.description {
        let opacity = card.description_opacity;
        info = info.push(text(description).size(16).style(move |theme: &Theme| {
            let mut color = theme.palette().text;
            color.a *= opacity;
            text::Style { color: Some(color) }
        }));
    }

    info = info
        .push(Space::with_height(Length::Fill))
        .push(
            container(text(card.reference).size(12))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    let body = column![
        container(picture)
            .width(Length::Fill)
            .height(Length::FillPortion(image_portion))
            .clip(true),
        container(info)
            .padding(20)
            .width(Length::Fill)
            .height(Length::FillPortion(info_portion))
            .clip(true),
    ];

    mouse_area(
        container(body)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .style(container::rounded_box),
    )
    .on_press(Message::CardPressed(card.position))
    .into()
}
