use std::path::Path;

use glint::{
    camera::Camera,
    config::RenderConfig,
    expect,
    film::{self, Film},
    integrators::Whitted,
    renderer,
    scene::Scene,
};

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("glint.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let config = expect!(
        RenderConfig::load(Path::new("glint.yaml")),
        "Failed to load config"
    );

    let (scene, camera_params, mut film_settings) = Scene::demo();
    film_settings.res = config.film_settings().res;
    log::info!(
        "Rendering '{}' at {}x{}",
        scene.name,
        film_settings.res.x,
        film_settings.res.y
    );

    let camera = Camera::new(camera_params, film_settings);
    let integrator = Whitted::new(config.whitted_params());
    let mut film = Film::new(film_settings);

    let stats = renderer::render(
        &scene,
        &camera,
        &integrator,
        &mut film,
        config.render_settings(),
    );
    log::info!(
        "Render finished in {:.2}s, {} rays",
        stats.secs,
        stats.ray_count
    );

    expect!(film::write_png(&film, &config.output), "Failed to write PNG");
}
