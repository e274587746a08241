use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::time::Instant;

mod assets;
mod config;
mod error;
mod state;
mod ui;

use assets::AssetIndex;
use config::AppConfig;
use state::catalog::Catalog;
use state::session::Session;
use state::strings;
use ui::card::RenderedCard;

/// Main application state
struct ThirtyDays {
    config: AppConfig,
    /// The shuffled ideas for the current visit to the screen
    session: Session,
    /// `None` until the background scan reports back
    assets: Option<AssetIndex>,
    /// Clock used to sample card animations
    now: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the card at this display position
    CardPressed(usize),
    /// User asked for a fresh order (same as re-entering the screen)
    Shuffle,
    /// Animation frame
    Tick(Instant),
    /// Background asset scan finished
    AssetsScanned(AssetIndex),
}

impl ThirtyDays {
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load_or_default();
        let catalog = Catalog::builtin();
        let session = Session::new(&catalog, config.animation());

        let images = catalog.items().iter().map(|idea| idea.image).collect();
        let scan = Task::perform(
            assets::scan(config.assets_dir.clone(), images),
            Message::AssetsScanned,
        );

        (
            ThirtyDays {
                config,
                session,
                assets: None,
                now: Instant::now(),
            },
            scan,
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CardPressed(position) => {
                self.now = Instant::now();
                self.session.toggle(position, self.now);
            }
            Message::Shuffle => {
                self.now = Instant::now();
                self.session = Session::new(&Catalog::builtin(), self.config.animation());
            }
            Message::Tick(now) => {
                self.now = now;
                self.session.tick(now);
            }
            Message::AssetsScanned(index) => {
                tracing::info!(
                    "Asset scan complete: {} found, {} missing",
                    index.found_count(),
                    index.missing().len()
                );
                self.assets = Some(index);
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<Message> {
        let expanded = self.session.expanded_count();
        let top_bar = row![
            text(strings::APP_TITLE).size(32),
            Space::with_width(Length::Fill),
            text(format!("{} of {} open", expanded, self.session.len())).size(14),
            button("Shuffle").on_press(Message::Shuffle).padding(10),
        ]
        .spacing(16)
        .padding(16)
        .align_y(Alignment::Center);

        if self.session.is_empty() {
            return column![
                top_bar,
                container(text("No ideas today.").size(16))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            ]
            .into();
        }

        let proportions = self.config.proportions();
        let size = Size::new(self.config.card_width, self.config.card_height);

        let cards = self.session.entries().map(|(item, card)| {
            let rendered =
                RenderedCard::build(item, card, &proportions, self.assets.as_ref(), self.now);
            ui::card::view(rendered, size)
        });

        let list: Column<Message> = Column::with_children(cards)
            .spacing(10)
            .padding(10)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        column![top_bar, scrollable(list).height(Length::Fill)].into()
    }

    /// Frame ticks only while a card is mid-animation
    fn subscription(&self) -> Subscription<Message> {
        if self.session.is_animating(self.now) {
            window::frames().map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `info` level
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();
    tracing::info!("Starting {}", strings::APP_TITLE);

    iced::application(strings::APP_TITLE, ThirtyDays::update, ThirtyDays::view)
        .subscription(ThirtyDays::subscription)
        .theme(ThirtyDays::theme)
        .window_size(Size::new(560.0, 820.0))
        .centered()
        .run_with(ThirtyDays::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> ThirtyDays {
        ThirtyDays {
            config: AppConfig::default(),
            session: Session::new(&Catalog::builtin(), AppConfig::default().animation()),
            assets: None,
            now: Instant::now(),
        }
    }

    #[test]
    fn test_card_press_keeps_order() {
        let mut app = app();
        let before = app.session.items().to_vec();

        let _ = app.update(Message::CardPressed(2));
        let _ = app.update(Message::Tick(Instant::now()));

        assert_eq!(app.session.items(), before.as_slice());
        assert_eq!(app.session.expanded_count(), 1);
        assert!(app.session.card(2).unwrap().is_expanded());
    }

    #[test]
    fn test_shuffle_starts_a_fresh_session() {
        let mut app = app();
        let _ = app.update(Message::CardPressed(1));
        let _ = app.update(Message::Shuffle);

        assert_eq!(app.session.len(), 30);
        assert_eq!(app.session.expanded_count(), 0);
    }

    #[test]
    fn test_assets_scanned_is_stored() {
        let mut app = app();
        let _ = app.update(Message::AssetsScanned(AssetIndex::default()));
        assert!(app.assets.is_some());
    }
}
