mod api;
mod app;
mod application;
mod domain;
mod ui;
mod utils;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(app::UploadApp::default, app::update, app::view)
        .title("Sheet Courier")
        .run()
}
