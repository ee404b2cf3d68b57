pub mod grid_builder;
pub mod models {
    pub mod driver;
    pub mod grid;
    pub mod wave;
}

pub mod helpers {
    pub mod class;
    pub mod driver;
    pub mod merge;
    pub mod tie_break;
    pub mod ties;
    pub mod time;
    pub mod validation;

    pub mod config;
    pub mod general;
    pub mod logging;
    pub mod math;
}
