mod gui;
mod models;
mod catalog;
mod covers;
mod export;
mod storage;

use iced::{window, Size};

fn main() -> iced::Result {
    iced::application(
        "Shelfmark - Personal Library",
        gui::ShelfmarkApp::update,
        gui::ShelfmarkApp::view,
    )
    .window(window::Settings {
        size: Size::new(1200.0, 760.0),
        resizable: true,
        ..window::Settings::default()
    })
    .run_with(gui::ShelfmarkApp::new)
}
