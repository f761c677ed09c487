use facet::{
    engine::{Engine, FlightSettings, Motion},
    gfx::{Camera, Canvas, Mesh, RenderSettings},
    util::{boxed_err, BoxedError},
};

use log::LevelFilter;
use std::{
    env,
    fs::File,
    io::{BufWriter, Write},
    time::{Duration, Instant},
};

const DEFAULT_FRAMES: u32 = 600;

fn main() -> Result<(), BoxedError> {
    env_logger::builder()
        .filter_level(LevelFilter::Error)
        .filter_module("facet", LevelFilter::Debug)
        .parse_default_env()
        .init();

    let mut args = env::args().skip(1);
    let frames = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_FRAMES,
    };
    if frames == 0 {
        return boxed_err("Frame count must be positive");
    }
    let output = args.next();

    let settings = RenderSettings::default();
    let mut canvas = Canvas::new(settings.viewport);
    let mut engine = Engine::new(
        Mesh::unit_cube(),
        Camera::new((0.5, 0.5, -3.0).into()),
        settings,
    )?;

    // Strafe right while turning left so the camera circles the cube at a radius of
    // speed / turn_rate.
    engine.set_flight(FlightSettings {
        speed: 7.0,
        ..FlightSettings::default()
    });
    engine
        .input_mut()
        .set_motion(Motion::RIGHT | Motion::TURN_LEFT);

    let delta_time = 1.0 / 60.0;
    let mut frame_rate_timer = Instant::now();
    let mut frame_rate = 0;
    let mut rendered = 0;
    let mut drawn = 0;

    while engine.running() {
        engine.update(delta_time);

        canvas.clear(255);
        let stats = engine.render(&mut canvas);
        drawn += stats.drawn;

        rendered += 1;
        if rendered >= frames {
            engine.input_mut().set_quit(true);
        }

        frame_rate += 1;
        if frame_rate_timer.elapsed() >= Duration::from_secs(1) {
            log::info!("fps: {}", frame_rate);
            frame_rate = 0;
            frame_rate_timer = Instant::now();
        }
    }
    log::info!("Rendered {} frames, {} triangles", rendered, drawn);

    if let Some(path) = output {
        let mut writer = BufWriter::new(File::create(&path)?);
        canvas.write_pgm(&mut writer)?;
        writer.flush()?;
        log::info!("Wrote last frame to {}", path);
    }
    Ok(())
}
