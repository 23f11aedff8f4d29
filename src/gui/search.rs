use iced::{
    alignment::Horizontal,
    widget::{text::Shaping, Button, Column, Container, PickList, Row, Scrollable, Text, TextInput},
    Alignment, Color, Element, Length, Task,
};

use crate::lookup::{LookupService, RankedEntry, SearchOutcome};

const ALL_LANGUAGES: &str = "All languages";

const STAR_BLUE: Color = Color::from_rgb(0x4d as f32 / 255.0, 0x79 as f32 / 255.0, 0xff as f32 / 255.0);
const COSMIC_PINK: Color = Color::from_rgb(0xff as f32 / 255.0, 0x4d as f32 / 255.0, 0xa6 as f32 / 255.0);

pub struct SearchScreen {
    service: LookupService,
    word: String,
    languages: Vec<String>,
    selected: String,
    outcome: Option<SearchOutcome>,
}

#[derive(Debug, Clone)]
pub enum Message {
    WordChanged(String),
    LanguageSelected(String),
    Search,
    SearchDone(SearchOutcome),
}

impl SearchScreen {
    pub fn new(service: LookupService) -> SearchScreen {
        let mut languages = vec![String::from(ALL_LANGUAGES)];
        languages.extend(service.language_labels().iter().cloned());

        let selected = service.default_label().unwrap_or(ALL_LANGUAGES).to_owned();

        SearchScreen {
            service,
            word: String::new(),
            languages,
            selected,
            outcome: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WordChanged(value) => {
                self.word = value;
                Task::none()
            }
            Message::LanguageSelected(label) => {
                self.selected = label;
                Task::none()
            }
            Message::Search => {
                let service = self.service.clone();
                let word = self.word.clone();
                let label = self.selected.clone();

                Task::perform(
                    async move { service.search(&word, Some(&label)).await },
                    Message::SearchDone,
                )
            }
            Message::SearchDone(outcome) => {
                self.outcome = Some(outcome);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut column = Column::new()
            .align_x(Alignment::Center)
            .max_width(700)
            .padding(20)
            .spacing(16)
            .push(
                TextInput::new("Word", &self.word)
                    .on_input(Message::WordChanged)
                    .on_submit(Message::Search)
                    .padding(10)
                    .size(24),
            )
            .push(
                Row::new()
                    .spacing(16)
                    .push(
                        PickList::new(
                            self.languages.clone(),
                            Some(self.selected.clone()),
                            Message::LanguageSelected,
                        )
                        .padding(10),
                    )
                    .push(Button::new(Text::new("Search")).on_press(Message::Search)),
            );

        column = match &self.outcome {
            None => column.push(note(
                String::from("Welcome to Cosnary\n\nEnter a word to look up its definitions"),
                STAR_BLUE,
            )),
            Some(SearchOutcome::EmptyQuery) => {
                column.push(note(String::from("Please enter a word to search"), COSMIC_PINK))
            }
            Some(SearchOutcome::Failed(message)) => {
                column.push(note(format!("Database error: {message}"), COSMIC_PINK))
            }
            Some(SearchOutcome::NoMatch(word)) => column.push(note(
                format!("No definitions found for '{word}'"),
                COSMIC_PINK,
            )),
            Some(SearchOutcome::Found { word, entries }) => {
                column = column.push(
                    Text::new(capitalized(word))
                        .size(28)
                        .color(STAR_BLUE)
                        .shaping(Shaping::Advanced),
                );

                for ranked in entries {
                    column = column.push(definition_block(ranked));
                }

                column
            }
        };

        Container::new(Scrollable::new(column).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }
}

fn definition_block(ranked: &RankedEntry) -> Element<'_, Message> {
    let entry = &ranked.entry;

    let pronunciation = entry.ipa.as_ref().map(|ipa| {
        Text::new(format!("Pronunciation: /{ipa}/"))
            .color(STAR_BLUE)
            .shaping(Shaping::Advanced)
    });

    Column::new()
        .spacing(4)
        .push(Text::new(format!("Definition #{}", ranked.rank)).color(COSMIC_PINK))
        .push(Text::new(format!("Language: {}", entry.language)).color(STAR_BLUE))
        .push(Text::new(entry.part_of_speech.as_str()).size(14))
        .push_maybe(pronunciation)
        .push(Text::new(entry.definition.as_str()).shaping(Shaping::Advanced))
        .into()
}

fn note<'a>(message: String, color: Color) -> Text<'a> {
    Text::new(message)
        .size(18)
        .color(color)
        .shaping(Shaping::Advanced)
}

/// Matches how the original presents the headword: first letter upper-cased,
/// the rest lowered. Display only, the lookup itself stays case-sensitive.
fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
