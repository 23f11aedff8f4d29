use std::path::PathBuf;

use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Text},
    Element, Length, Task,
};
use rfd::{AsyncMessageDialog, MessageLevel};
use search::{Message as SearchMessage, SearchScreen};

use crate::lookup::LookupService;

mod search;

const STORE_FILE: &str = "kaikki_dictionary.db";

pub fn run() -> iced::Result {
    iced::application(App::title, App::update, App::view).run_with(App::new)
}

enum App {
    Loading,
    Ready(SearchScreen),
}

#[derive(Debug, Clone)]
enum Message {
    ServiceLoaded(Result<LookupService, String>),
    Search(SearchMessage),
}

impl App {
    fn new() -> (App, Task<Message>) {
        (
            App::Loading,
            Task::perform(
                async {
                    LookupService::connect(store_path())
                        .await
                        .map_err(|error| error.to_string())
                },
                Message::ServiceLoaded,
            ),
        )
    }

    fn title(&self) -> String {
        String::from("Cosnary - Offline Dictionary")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ServiceLoaded(Ok(service)) => {
                *self = App::Ready(SearchScreen::new(service));
                Task::none()
            }
            Message::ServiceLoaded(Err(error)) => {
                tracing::error!("failed to open dictionary store: {error}");
                Task::future(async move {
                    AsyncMessageDialog::new()
                        .set_level(MessageLevel::Error)
                        .set_title("Database Error")
                        .set_description(format!("Failed to connect to database:\n{error}"))
                        .show()
                        .await;
                })
                .then(|_| iced::exit())
            }
            Message::Search(message) => match self {
                App::Ready(screen) => screen.update(message).map(Message::Search),
                App::Loading => Task::none(),
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self {
            App::Loading => Container::new(Text::new("Opening the dictionary..."))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into(),
            App::Ready(screen) => screen.view().map(Message::Search),
        }
    }
}

/// The store ships next to the executable; fall back to the working
/// directory for development runs.
fn store_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(STORE_FILE)))
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from(STORE_FILE))
}
