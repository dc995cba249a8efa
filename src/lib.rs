pub mod cipher;
pub mod cli;
pub mod formats;
pub mod generator;
pub mod noise;
pub mod placement;
