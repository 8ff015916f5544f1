#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Decorative backgrounds grown from Conway's Game of Life, plus a
//! relative-time helper for post metadata.
//!
//! A background is built in two steps. [`evolve`] seeds a wrapping grid and
//! runs it for a fixed number of generations; [`ShapeRenderer`] then draws a
//! small cluster of glyphs for every cell still alive. Randomness always comes
//! from an injected [`Random`], so a seed reproduces the same picture.

pub mod config;
pub mod conway;
pub mod error;
pub mod render;
pub mod shapes;
pub mod surface;
pub mod time_ago;

pub use config::BackgroundConfig;
pub use conway::{evolve, ConwayWorld};
pub use error::{Error, Result};
pub use render::ShapeRenderer;
pub use shapes::Shape;
pub use surface::{PathElement, ShapeGroup, Style, SvgDocument, SvgSurface, VectorSurface, ViewBox};
pub use time_ago::{time_ago, time_ago_since};
pub use world_grid::{Random, World};

use log::debug;

/// Evolves a `width` x `height` world and renders it onto `surface`.
pub fn generate_background<'s, S>(
    width: u32,
    height: u32,
    surface: &'s mut S,
    config: &BackgroundConfig,
    rand: &mut Random,
) -> Result<&'s mut S>
where
    S: VectorSurface,
{
    let renderer = ShapeRenderer::from_config(config)?;
    let world = conway::evolve_with_density(
        width,
        height,
        config.generations,
        config.initial_density,
        rand,
    )?;
    Ok(renderer.render(&world, surface, rand))
}

/// Like [`generate_background`], but draws onto the surface registered under `id`.
pub fn generate_background_in<'d>(
    document: &'d mut SvgDocument,
    id: &str,
    width: u32,
    height: u32,
    config: &BackgroundConfig,
    rand: &mut Random,
) -> Result<&'d mut SvgSurface> {
    conway::validate_dimensions(width, height)?;
    let surface = document.surface_mut(id)?;
    debug!("Generating {}x{} background into {:?}", width, height, id);
    generate_background(width, height, surface, config, rand)
}
