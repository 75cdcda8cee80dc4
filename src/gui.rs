use iced::{
    Element, Length, Task, Color, Alignment, Border,
};
use iced::widget::{
    Column, Row, Container, Text, Button, PickList, TextInput, Scrollable, Space, Checkbox,
    Image, image, rule,
};

use crate::catalog::Catalog;
use crate::covers::{CoverStore, COVER_FOLDER};
use crate::export;
use crate::models::{Book, BookFields, RATINGS, MIN_YEAR, MAX_YEAR, valid_year};
use crate::storage;
use std::path::PathBuf;
use rfd::FileDialog;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    AddBook,
    Library,
    Search,
    Statistics,
    Recommendations,
    Export,
}

impl Page {
    pub fn all() -> [Page; 6] {
        [
            Page::AddBook,
            Page::Library,
            Page::Search,
            Page::Statistics,
            Page::Recommendations,
            Page::Export,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::AddBook => "➕ Add Book",
            Page::Library => "📚 Library",
            Page::Search => "🔍 Search",
            Page::Statistics => "📊 Statistics",
            Page::Recommendations => "🎯 Recommendations",
            Page::Export => "📤 Export",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

/// State of the inline edit form opened from the library list.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
    pub rating: u8,
}

impl EditDraft {
    fn from_book(book: &Book) -> Self {
        EditDraft {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            genre: book.genre.clone(),
            read: book.read,
            rating: book.rating,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PageSelected(Page),
    ToggleTheme,

    // add form
    TitleChanged(String),
    AuthorChanged(String),
    YearChanged(String),
    GenreChanged(String),
    ReadToggled(bool),
    RatingSelected(u8),
    ChooseCover,
    CoverChosen(Option<PathBuf>),
    SubmitAdd,

    // library list
    StartEdit(String),
    CancelEdit,
    EditTitleChanged(String),
    EditAuthorChanged(String),
    EditYearChanged(String),
    EditGenreChanged(String),
    EditReadToggled(bool),
    EditRatingSelected(u8),
    SubmitEdit,
    DeleteBook(String),

    // search
    QueryChanged(String),

    // export
    ChooseExportPath,
    ExportPathChosen(Option<PathBuf>),
}

pub struct ShelfmarkApp {
    // UI state
    page: Page,
    theme: Theme,
    status_message: String,

    // add form
    title: String,
    author: String,
    year: String,
    genre: String,
    read: bool,
    rating: u8,
    pending_cover: Option<PathBuf>,

    // library list
    editing: Option<EditDraft>,

    // search
    query: String,

    // the catalog; None when the store failed to load, with the reason
    // kept in load_error
    catalog: Option<Catalog>,
    covers: Option<CoverStore>,
    load_error: Option<String>,
}

impl ShelfmarkApp {
    pub fn new() -> (Self, Task<Message>) {
        let mut load_error = None;
        let catalog = match Catalog::open(PathBuf::from(storage::DB_FILE)) {
            Ok(cat) => Some(cat),
            Err(e) => {
                load_error = Some(format!("{e:#}"));
                None
            }
        };
        let covers = match CoverStore::new(PathBuf::from(COVER_FOLDER)) {
            Ok(store) => Some(store),
            Err(e) => {
                load_error.get_or_insert(format!("{e:#}"));
                None
            }
        };
        (
            ShelfmarkApp {
                page: Page::AddBook,
                theme: Theme::Light,
                status_message: String::new(),
                title: String::new(),
                author: String::new(),
                year: String::new(),
                genre: String::new(),
                read: false,
                rating: 3,
                pending_cover: None,
                editing: None,
                query: String::new(),
                catalog,
                covers,
                load_error,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageSelected(page) => {
                self.page = page;
                self.status_message.clear();
                self.editing = None;
            }
            Message::ToggleTheme => {
                self.theme = match self.theme {
                    Theme::Light => Theme::Dark,
                    Theme::Dark => Theme::Light,
                };
            }

            Message::TitleChanged(s) => self.title = s,
            Message::AuthorChanged(s) => self.author = s,
            Message::YearChanged(s) => self.year = s,
            Message::GenreChanged(s) => self.genre = s,
            Message::ReadToggled(v) => self.read = v,
            Message::RatingSelected(r) => self.rating = r,
            Message::ChooseCover => {
                return Task::perform(async {
                    FileDialog::new()
                        .set_directory(".")
                        .add_filter("image", &["jpg", "jpeg", "png"])
                        .pick_file()
                }, Message::CoverChosen);
            }
            Message::CoverChosen(Some(path)) => {
                self.pending_cover = Some(path);
            }
            Message::CoverChosen(None) => { /* cancelled */ }
            Message::SubmitAdd => self.submit_add(),

            Message::StartEdit(id) => {
                if let Some(cat) = &self.catalog {
                    self.editing = cat.books().iter()
                        .find(|b| b.id == id)
                        .map(EditDraft::from_book);
                }
            }
            Message::CancelEdit => {
                self.editing = None;
            }
            Message::EditTitleChanged(s) => {
                if let Some(d) = &mut self.editing { d.title = s; }
            }
            Message::EditAuthorChanged(s) => {
                if let Some(d) = &mut self.editing { d.author = s; }
            }
            Message::EditYearChanged(s) => {
                if let Some(d) = &mut self.editing { d.year = s; }
            }
            Message::EditGenreChanged(s) => {
                if let Some(d) = &mut self.editing { d.genre = s; }
            }
            Message::EditReadToggled(v) => {
                if let Some(d) = &mut self.editing { d.read = v; }
            }
            Message::EditRatingSelected(r) => {
                if let Some(d) = &mut self.editing { d.rating = r; }
            }
            Message::SubmitEdit => self.submit_edit(),
            Message::DeleteBook(id) => {
                if let Some(cat) = &mut self.catalog {
                    match cat.remove(&id) {
                        Ok(book) => {
                            println!("Deleted book: {}", book.title);
                            self.status_message = "🗑️ Book deleted".to_string();
                        }
                        Err(e) => self.status_message = format!("Error: {e:#}"),
                    }
                }
            }

            Message::QueryChanged(s) => self.query = s,

            Message::ChooseExportPath => {
                return Task::perform(async {
                    FileDialog::new()
                        .set_directory(".")
                        .set_file_name("library.csv")
                        .add_filter("csv", &["csv"])
                        .save_file()
                }, Message::ExportPathChosen);
            }
            Message::ExportPathChosen(Some(path)) => {
                if let Some(cat) = &self.catalog {
                    match export::write_csv(&path, cat.books()) {
                        Ok(()) => {
                            println!("Exported library to {}", path.display());
                            self.status_message = format!("Exported to {}", path.display());
                        }
                        Err(e) => self.status_message = format!("Error: {e:#}"),
                    }
                }
            }
            Message::ExportPathChosen(None) => { /* cancelled */ }
        }
        Task::none()
    }

    fn submit_add(&mut self) {
        if self.title.trim().is_empty()
            || self.author.trim().is_empty()
            || self.genre.trim().is_empty()
        {
            self.status_message = "Please fill in title, author and genre".to_string();
            return;
        }
        let Ok(year) = self.year.trim().parse::<i32>() else {
            self.status_message = "Publication year must be a number".to_string();
            return;
        };
        if !valid_year(year) {
            self.status_message =
                format!("Publication year must be between {MIN_YEAR} and {MAX_YEAR}");
            return;
        }
        let (Some(cat), Some(covers)) = (&mut self.catalog, &self.covers) else {
            return;
        };

        let mut book = Book::new(
            self.title.trim().to_string(),
            self.author.trim().to_string(),
            year,
            self.genre.trim().to_string(),
            self.read,
            self.rating,
        );
        if let Some(src) = &self.pending_cover {
            match covers.store(src) {
                Ok(dest) => book.cover = Some(dest),
                Err(e) => {
                    self.status_message = format!("Error: {e:#}");
                    return;
                }
            }
        }

        println!("Adding book: {} by {}", book.title, book.author);
        match cat.add(book) {
            Ok(()) => {
                self.status_message = "📗 Book added!".to_string();
                self.title.clear();
                self.author.clear();
                self.year.clear();
                self.genre.clear();
                self.read = false;
                self.rating = 3;
                self.pending_cover = None;
            }
            Err(e) => self.status_message = format!("Error: {e:#}"),
        }
    }

    fn submit_edit(&mut self) {
        let Some(draft) = self.editing.clone() else { return };
        if draft.title.trim().is_empty()
            || draft.author.trim().is_empty()
            || draft.genre.trim().is_empty()
        {
            self.status_message = "Please fill in title, author and genre".to_string();
            return;
        }
        let Ok(year) = draft.year.trim().parse::<i32>() else {
            self.status_message = "Publication year must be a number".to_string();
            return;
        };
        if !valid_year(year) {
            self.status_message =
                format!("Publication year must be between {MIN_YEAR} and {MAX_YEAR}");
            return;
        }
        let Some(cat) = &mut self.catalog else { return };

        let fields = BookFields {
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            year,
            genre: draft.genre.trim().to_string(),
            read: draft.read,
            rating: draft.rating,
        };
        match cat.update(&draft.id, fields) {
            Ok(()) => {
                println!("Updated book {}", draft.id);
                self.status_message = "✅ Updated!".to_string();
                self.editing = None;
            }
            Err(e) => self.status_message = format!("Error: {e:#}"),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if let Some(err) = &self.load_error {
            return self.view_fatal(err);
        }

        let sidebar = self.view_sidebar();

        let main_content = match self.page {
            Page::AddBook => self.view_add_book(),
            Page::Library => self.view_library(),
            Page::Search => self.view_search(),
            Page::Statistics => self.view_statistics(),
            Page::Recommendations => self.view_recommendations(),
            Page::Export => self.view_export(),
        };

        let layout = Row::new()
            .push(sidebar)
            .push(rule::Rule::vertical(1))
            .push(main_content);

        let bg_color = self.bg_color();
        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(bg_color)),
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .into()
    }

    fn view_fatal(&self, err: &str) -> Element<'_, Message> {
        let content = Column::new()
            .padding(40)
            .spacing(20)
            .align_x(Alignment::Center)
            .push(self.colored_text("✗", 64, Color::from_rgb(0.9, 0.2, 0.2)))
            .push(self.colored_text("Could not open the library store", 28, self.text_color()))
            .push(self.colored_text(err, 16, self.secondary_text_color()));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn view_sidebar(&self) -> Element<'_, Message> {
        let accent = self.accent_color();
        let secondary_text = self.secondary_text_color();

        let title = self.colored_text("Shelfmark", 28, accent);
        let subtitle = self.colored_text("Personal Library", 14, secondary_text);

        let mut menu = Column::new().spacing(8).width(Length::Fill);
        for page in Page::all() {
            let selected = page == self.page;
            let label = Text::new(page.label()).size(14);
            let mut btn = Button::new(label).padding(10).width(Length::Fill);
            if !selected {
                btn = btn.on_press(Message::PageSelected(page));
            }
            menu = menu.push(btn);
        }

        let theme_btn = Button::new(
            Text::new(match self.theme {
                Theme::Light => "🌙 Dark Mode",
                Theme::Dark => "☀️ Light Mode",
            })
            .size(14),
        )
        .on_press(Message::ToggleTheme)
        .padding(10)
        .width(Length::Fill);

        let sidebar_content = Column::new()
            .padding(20)
            .spacing(20)
            .width(Length::Fixed(240.0))
            .push(title)
            .push(subtitle)
            .push(Space::with_height(10))
            .push(rule::Rule::horizontal(1))
            .push(Space::with_height(10))
            .push(menu)
            .push(Space::with_height(20))
            .push(theme_btn);

        let sidebar_bg = self.sidebar_bg_color();
        Container::new(sidebar_content)
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(sidebar_bg)),
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .into()
    }

    fn view_add_book(&self) -> Element<'_, Message> {
        let title = self.colored_text("Add New Book", 32, self.text_color());

        let title_input = TextInput::new("Book Title", &self.title)
            .on_input(Message::TitleChanged)
            .padding(12)
            .width(Length::Fill);
        let author_input = TextInput::new("Author", &self.author)
            .on_input(Message::AuthorChanged)
            .padding(12)
            .width(Length::Fill);
        let year_input = TextInput::new("Publication Year", &self.year)
            .on_input(Message::YearChanged)
            .padding(12)
            .width(Length::Fill);
        let genre_input = TextInput::new("Genre", &self.genre)
            .on_input(Message::GenreChanged)
            .padding(12)
            .width(Length::Fill);

        let read_toggle = Checkbox::new("I have read this book", self.read)
            .on_toggle(Message::ReadToggled);

        let rating_row = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(self.colored_text("Rating", 14, self.secondary_text_color()))
            .push(PickList::new(RATINGS, Some(self.rating), Message::RatingSelected).padding(8));

        let cover_label = match &self.pending_cover {
            Some(path) => format!("Cover: {}", path.display()),
            None => "No cover selected (optional)".to_string(),
        };
        let cover_row = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                Button::new(Text::new("📁 Choose Cover").size(14))
                    .on_press(Message::ChooseCover)
                    .padding(10),
            )
            .push(self.colored_text(&cover_label, 12, self.tertiary_text_color()));

        let add_btn = Button::new(Text::new("Add Book").size(16))
            .on_press(Message::SubmitAdd)
            .padding(15)
            .width(Length::Fixed(200.0));

        let status = self.colored_text(&self.status_message, 14, self.accent_color());

        let content = Column::new()
            .padding(40)
            .spacing(16)
            .width(Length::Fill)
            .push(title)
            .push(Space::with_height(10))
            .push(title_input)
            .push(author_input)
            .push(year_input)
            .push(genre_input)
            .push(read_toggle)
            .push(rating_row)
            .push(cover_row)
            .push(Space::with_height(10))
            .push(add_btn)
            .push(status);

        Scrollable::new(content).width(Length::Fill).into()
    }

    fn view_library(&self) -> Element<'_, Message> {
        let title = self.colored_text("Your Library", 32, self.text_color());

        let books = self.catalog.as_ref().map(Catalog::books).unwrap_or(&[]);

        let mut list = Column::new().spacing(12).width(Length::Fill);
        if books.is_empty() {
            list = list.push(self.colored_text(
                "No books yet. Add some!",
                16,
                self.secondary_text_color(),
            ));
        }
        for book in books {
            let card = match &self.editing {
                Some(draft) if draft.id == book.id => self.book_edit_form(draft),
                _ => self.book_card(book),
            };
            list = list.push(card);
        }

        let status = self.colored_text(&self.status_message, 14, self.accent_color());

        let content = Column::new()
            .padding(40)
            .spacing(20)
            .width(Length::Fill)
            .push(title)
            .push(status)
            .push(list);

        Scrollable::new(content).width(Length::Fill).into()
    }

    fn book_card<'a>(&'a self, book: &'a Book) -> Element<'a, Message> {
        let text_color = self.text_color();
        let secondary_text = self.secondary_text_color();

        let cover: Element<'_, Message> = match &book.cover {
            Some(path) if path.exists() => {
                Image::new(image::Handle::from_path(path))
                    .width(Length::Fixed(80.0))
                    .into()
            }
            _ => self.colored_text("📕", 40, secondary_text),
        };

        let details = Column::new()
            .spacing(4)
            .push(self.colored_text(&book.title, 18, text_color))
            .push(self.colored_text(
                &format!("{} · {} · {}", book.author, book.year, book.genre),
                14,
                secondary_text,
            ))
            .push(self.colored_text(
                &format!(
                    "{}  {}",
                    if book.read { "✅ Read" } else { "❌ Unread" },
                    book.stars()
                ),
                14,
                secondary_text,
            ));

        let edit_btn = Button::new(Text::new("✏️ Edit").size(12))
            .on_press(Message::StartEdit(book.id.clone()))
            .padding(8);
        let delete_btn = Button::new(Text::new("🗑️ Delete").size(12))
            .on_press(Message::DeleteBook(book.id.clone()))
            .padding(8);
        let actions = Column::new().spacing(6).push(edit_btn).push(delete_btn);

        let row = Row::new()
            .spacing(16)
            .align_y(Alignment::Center)
            .push(cover)
            .push(Container::new(details).width(Length::Fill))
            .push(actions);

        self.card_container(row.into())
    }

    fn book_edit_form<'a>(&'a self, draft: &'a EditDraft) -> Element<'a, Message> {
        let title_input = TextInput::new("Title", &draft.title)
            .on_input(Message::EditTitleChanged)
            .padding(10);
        let author_input = TextInput::new("Author", &draft.author)
            .on_input(Message::EditAuthorChanged)
            .padding(10);
        let year_input = TextInput::new("Year", &draft.year)
            .on_input(Message::EditYearChanged)
            .padding(10);
        let genre_input = TextInput::new("Genre", &draft.genre)
            .on_input(Message::EditGenreChanged)
            .padding(10);
        let read_toggle = Checkbox::new("Read", draft.read).on_toggle(Message::EditReadToggled);
        let rating_pick =
            PickList::new(RATINGS, Some(draft.rating), Message::EditRatingSelected).padding(8);

        let save_btn = Button::new(Text::new("Save Changes").size(14))
            .on_press(Message::SubmitEdit)
            .padding(10);
        let cancel_btn = Button::new(Text::new("Cancel").size(14))
            .on_press(Message::CancelEdit)
            .padding(10);

        let form = Column::new()
            .spacing(8)
            .push(title_input)
            .push(author_input)
            .push(year_input)
            .push(genre_input)
            .push(
                Row::new()
                    .spacing(16)
                    .align_y(Alignment::Center)
                    .push(read_toggle)
                    .push(rating_pick),
            )
            .push(Row::new().spacing(10).push(save_btn).push(cancel_btn));

        self.card_container(form.into())
    }

    fn view_search(&self) -> Element<'_, Message> {
        let title = self.colored_text("Search Your Library", 32, self.text_color());

        let query_input = TextInput::new("Search by title or author", &self.query)
            .on_input(Message::QueryChanged)
            .padding(12)
            .width(Length::Fill);

        let mut results = Column::new().spacing(10).width(Length::Fill);
        if self.query.trim().is_empty() {
            results = results.push(self.colored_text(
                "Type a title or author to search",
                14,
                self.tertiary_text_color(),
            ));
        } else if let Some(cat) = &self.catalog {
            let hits = cat.search(&self.query);
            if hits.is_empty() {
                results = results.push(self.colored_text(
                    "No matches found",
                    14,
                    self.secondary_text_color(),
                ));
            }
            for book in hits {
                let line = format!(
                    "📘 {} by {} — {}",
                    book.title,
                    book.author,
                    if book.read { "✅ Read" } else { "❌ Unread" }
                );
                results = results.push(self.colored_text(&line, 16, self.text_color()));
            }
        }

        let content = Column::new()
            .padding(40)
            .spacing(20)
            .width(Length::Fill)
            .push(title)
            .push(query_input)
            .push(results);

        Scrollable::new(content).width(Length::Fill).into()
    }

    fn view_statistics(&self) -> Element<'_, Message> {
        let title = self.colored_text("Library Statistics", 32, self.text_color());

        let stats = match &self.catalog {
            Some(cat) => cat.statistics(),
            None => return Space::with_height(0).into(),
        };

        let metrics = Row::new()
            .spacing(30)
            .push(self.metric("Total Books", stats.total))
            .push(self.metric("Books Read", stats.read))
            .push(self.metric("Unread", stats.unread));

        let read_unread = Column::new()
            .spacing(8)
            .push(self.colored_text("Read vs Unread", 20, self.text_color()))
            .push(self.bar("Read", stats.read, stats.total, Color::from_rgb(0.2, 0.7, 0.2)))
            .push(self.bar("Unread", stats.unread, stats.total, Color::from_rgb(0.9, 0.2, 0.2)));

        let mut genre_bars = Column::new()
            .spacing(8)
            .push(self.colored_text("Genre Distribution", 20, self.text_color()));
        let max_genre = stats.genres.first().map(|(_, n)| *n).unwrap_or(0);
        for (genre, count) in &stats.genres {
            genre_bars = genre_bars.push(self.bar(genre, *count, max_genre, self.accent_color()));
        }
        if stats.genres.is_empty() {
            genre_bars = genre_bars.push(self.colored_text(
                "No books yet",
                14,
                self.tertiary_text_color(),
            ));
        }

        let content = Column::new()
            .padding(40)
            .spacing(30)
            .width(Length::Fill)
            .push(title)
            .push(metrics)
            .push(read_unread)
            .push(genre_bars);

        Scrollable::new(content).width(Length::Fill).into()
    }

    fn metric(&self, label: &str, value: usize) -> Element<'_, Message> {
        let col = Column::new()
            .spacing(4)
            .align_x(Alignment::Center)
            .push(self.colored_text(&value.to_string(), 36, self.accent_color()))
            .push(self.colored_text(label, 14, self.secondary_text_color()));
        self.card_container(col.into())
    }

    /// A labelled horizontal bar scaled against the largest value.
    fn bar(&self, label: &str, value: usize, max: usize, color: Color) -> Element<'_, Message> {
        const FULL_WIDTH: f32 = 320.0;
        let width = if max == 0 {
            0.0
        } else {
            FULL_WIDTH * value as f32 / max as f32
        };

        let fill = Container::new(Space::with_width(0))
            .width(Length::Fixed(width.max(2.0)))
            .height(Length::Fixed(18.0))
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(color)),
                    border: Border {
                        radius: 3.0.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                }
            });

        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                Container::new(self.colored_text(label, 14, self.text_color()))
                    .width(Length::Fixed(120.0)),
            )
            .push(fill)
            .push(self.colored_text(&value.to_string(), 14, self.secondary_text_color()))
            .into()
    }

    fn view_recommendations(&self) -> Element<'_, Message> {
        let title = self.colored_text("Smart Recommendations", 32, self.text_color());

        let rec = match &self.catalog {
            Some(cat) => cat.recommendations(),
            None => return Space::with_height(0).into(),
        };

        let mut genre_section = Column::new().spacing(8);
        match &rec.favorite_genre {
            Some(genre) => {
                genre_section = genre_section.push(self.colored_text(
                    &format!("📘 Based on your favorite genre: {genre}"),
                    20,
                    self.text_color(),
                ));
                for book in &rec.in_favorite_genre {
                    genre_section = genre_section.push(self.colored_text(
                        &format!("{} by {}", book.title, book.author),
                        16,
                        self.secondary_text_color(),
                    ));
                }
            }
            None => {
                genre_section = genre_section.push(self.colored_text(
                    "Mark some books as read to get genre recommendations",
                    16,
                    self.tertiary_text_color(),
                ));
            }
        }

        let mut top_section = Column::new()
            .spacing(8)
            .push(self.colored_text("⭐ Top Rated Books", 20, self.text_color()));
        if rec.top_rated.is_empty() {
            top_section = top_section.push(self.colored_text(
                "No books rated 4 stars or higher yet",
                16,
                self.tertiary_text_color(),
            ));
        }
        for book in &rec.top_rated {
            top_section = top_section.push(self.colored_text(
                &format!("{} {} by {}", book.stars(), book.title, book.author),
                16,
                self.secondary_text_color(),
            ));
        }

        let content = Column::new()
            .padding(40)
            .spacing(30)
            .width(Length::Fill)
            .push(title)
            .push(genre_section)
            .push(top_section);

        Scrollable::new(content).width(Length::Fill).into()
    }

    fn view_export(&self) -> Element<'_, Message> {
        let title = self.colored_text("Export Your Library", 32, self.text_color());

        let count = self.catalog.as_ref().map(|c| c.books().len()).unwrap_or(0);
        let description = self.colored_text(
            &format!("Write all {count} books to a CSV file"),
            16,
            self.secondary_text_color(),
        );

        let export_btn = Button::new(Text::new("Download as CSV").size(16))
            .on_press(Message::ChooseExportPath)
            .padding(15)
            .width(Length::Fixed(220.0));

        let status = self.colored_text(&self.status_message, 14, self.accent_color());

        let body: Element<'_, Message> = if count == 0 {
            self.colored_text("Nothing to export", 16, self.tertiary_text_color())
        } else {
            Column::new().spacing(20).push(export_btn).push(status).into()
        };

        let content = Column::new()
            .padding(40)
            .spacing(20)
            .width(Length::Fill)
            .push(title)
            .push(description)
            .push(body);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn colored_text(&self, s: &str, size: u16, color: Color) -> Element<'_, Message> {
        Text::new(s.to_string())
            .size(size)
            .style(move |_theme| iced::widget::text::Style { color: Some(color) })
            .into()
    }

    fn card_container<'a>(&self, content: Element<'a, Message>) -> Element<'a, Message> {
        let container_bg = self.container_bg_color();
        let border_color = self.border_color();
        Container::new(content)
            .padding(15)
            .width(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(container_bg)),
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    ..Default::default()
                }
            })
            .into()
    }

    // Theme color helpers
    fn bg_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(1.0, 1.0, 1.0),
            Theme::Dark => Color::from_rgb(0.11, 0.11, 0.13),
        }
    }

    fn sidebar_bg_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.95, 0.95, 0.97),
            Theme::Dark => Color::from_rgb(0.15, 0.15, 0.17),
        }
    }

    fn text_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.1, 0.1, 0.1),
            Theme::Dark => Color::from_rgb(0.9, 0.9, 0.9),
        }
    }

    fn secondary_text_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.4, 0.4, 0.4),
            Theme::Dark => Color::from_rgb(0.6, 0.6, 0.6),
        }
    }

    fn tertiary_text_color(&self) -> Color {
        Color::from_rgb(0.5, 0.5, 0.5)
    }

    fn container_bg_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.95, 0.95, 0.95),
            Theme::Dark => Color::from_rgb(0.2, 0.2, 0.22),
        }
    }

    fn border_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.8, 0.8, 0.8),
            Theme::Dark => Color::from_rgb(0.3, 0.3, 0.32),
        }
    }

    fn accent_color(&self) -> Color {
        Color::from_rgb(0.2, 0.5, 0.8)
    }
}
