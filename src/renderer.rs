use std::{
    sync::{mpsc::channel, Mutex},
    thread,
    time::Instant,
};

use serde::{Deserialize, Serialize};

use crate::{camera::Camera, film::Film, integrators::Integrator, scene::Scene};

/// Rows per unit of render work
const TILE_ROWS: u16 = 16;

#[derive(Debug, Default, Copy, Clone, Deserialize, Serialize)]
pub struct RenderSettings {
    /// Worker count, 0 picks the machine's logical core count
    pub threads: usize,
    pub use_single_render_thread: bool,
}

pub struct RenderStats {
    /// Wall clock spent rendering
    pub secs: f32,
    /// Rays intersected with the scene over the whole frame
    pub ray_count: usize,
}

/// Renders one frame of `scene` into `film`.
///
/// The film is split into row-band tiles that workers pull from a shared
/// queue; every pixel is independent and the scene is only read, so the
/// workers need no synchronization beyond the queue and the finished-tile
/// channel. Blocks until the frame is complete.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    integrator: &dyn Integrator,
    film: &mut Film,
    settings: RenderSettings,
) -> RenderStats {
    let start = Instant::now();

    let tiles = film.tiles(TILE_ROWS);
    let tile_count = tiles.len();

    let thread_count = if settings.use_single_render_thread {
        1
    } else if settings.threads == 0 {
        num_cpus::get()
    } else {
        settings.threads
    };

    let mut ray_count = 0;
    if thread_count <= 1 {
        let mut tiles = tiles;
        while let Some(mut tile) = tiles.pop_front() {
            ray_count += integrator.render_tile(scene, camera, &mut tile);
            film.update_tile(&tile);
        }
    } else {
        let queue = Mutex::new(tiles);
        let (to_parent, from_workers) = channel();

        thread::scope(|s| {
            for thread_id in 0..thread_count {
                let tx = to_parent.clone();
                let queue = &queue;
                s.spawn(move || {
                    log::debug!("Render thread {}: Begin", thread_id);
                    loop {
                        let tile = queue.lock().unwrap().pop_front();
                        let Some(mut tile) = tile else {
                            break;
                        };

                        let rays = integrator.render_tile(scene, camera, &mut tile);
                        if tx.send((tile, rays)).is_err() {
                            break;
                        }
                    }
                    log::debug!("Render thread {}: Done", thread_id);
                });
            }
            // Hang up the parent's sender so the tile loop below ends when the
            // workers do
            drop(to_parent);

            for (tile, rays) in from_workers {
                film.update_tile(&tile);
                ray_count += rays;
            }
        });
    }

    let secs = start.elapsed().as_secs_f32();
    log::info!(
        "Rendered {} tiles on {} thread(s) in {:.2}s",
        tile_count,
        thread_count,
        secs
    );

    RenderStats { secs, ray_count }
}
