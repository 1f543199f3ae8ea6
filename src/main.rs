use log::info;
use macroquad::prelude::*;
use life_backdrop::{
    LifeConfig, Presenter, DisplayList,
    input, rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 1000,
        window_height: 700,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional argument: preset name or path to a JSON config
    let arg = std::env::args().nth(1);
    let config = LifeConfig::resolve_or_default(arg.as_deref());
    info!(
        "cell size {}px, {}ms per generation, seed {}",
        config.cell_size,
        config.frame_interval_ms,
        config.seed_pattern.name()
    );

    let mut presenter = Presenter::new(&config);
    let mut surface = DisplayList::new();
    presenter.handle_resize(input::current_viewport(), &mut surface);
    presenter.start();

    while presenter.is_scheduled() {
        if let Some(viewport) = input::poll_resize(presenter.viewport()) {
            presenter.handle_resize(viewport, &mut surface);
        }

        let buttons = ui::create_controls(screen_width(), screen_height(), presenter.engine().is_running());
        input::process_pointer(&mut presenter, &buttons, &mut surface);
        input::process_keyboard(&mut presenter, &mut surface);

        presenter.on_frame(get_time() * 1000.0, &mut surface);

        rendering::screen::present(&surface);
        let mouse_pos = mouse_position();
        buttons.iter().for_each(|button| button.draw(mouse_pos));

        next_frame().await;
    }

    info!("stopped after {} generations", presenter.engine().generation());
}
