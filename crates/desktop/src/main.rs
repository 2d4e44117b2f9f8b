mod app;
mod settings;
mod theme;
mod view;
mod workers;

use app::App;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title("VidScribe")
        .theme(App::theme)
        .subscription(App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(620.0, 560.0),
            ..Default::default()
        })
        .run()
}
