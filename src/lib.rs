pub mod camera;
pub mod config;
pub mod film;
pub mod hit;
pub mod integrators;
pub mod lights;
pub mod materials;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod shapes;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {:?}", $msg, why);
            }
        }
    };
}
