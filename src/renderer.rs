use log::trace;

use crate::picture::{Color, Picture};

/// Something cells can be painted onto: a texture, a terminal, a test log.
pub trait Surface {
    /// Resize the backing store to `width` x `height` cells.
    fn resize(&mut self, width: usize, height: usize);

    /// Paint one cell.
    fn paint_cell(&mut self, x: usize, y: usize, color: Color);
}

/// Keeps a [`Surface`] in sync with successive pictures while painting only
/// the cells that changed.
#[derive(Debug, Default)]
pub struct IncrementalRenderer {
    previous: Option<Picture>,
}

impl IncrementalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The picture the surface currently shows.
    pub fn previous(&self) -> Option<&Picture> {
        self.previous.as_ref()
    }

    /// Forget what was drawn, so the next render repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Brings `surface` up to date with `picture`.
    ///
    /// Returns the number of cells painted.
    pub fn render(&mut self, picture: &Picture, surface: &mut impl Surface) -> usize {
        let painted = match &self.previous {
            Some(previous) if previous.dimensions() == picture.dimensions() => {
                render_changes(previous, picture, surface)
            }
            _ => render_full(picture, surface),
        };
        self.previous = Some(picture.clone());
        painted
    }
}

/// Resizes `surface` and paints every cell.
pub fn render_full(picture: &Picture, surface: &mut impl Surface) -> usize {
    let (width, height) = picture.dimensions();
    trace!("Full repaint of {width}x{height} picture");
    surface.resize(width, height);
    for (index, &color) in picture.pixels().iter().enumerate() {
        surface.paint_cell(index % width, index / width, color);
    }
    width * height
}

/// Paints only the cells that differ between two same-sized pictures.
pub fn render_changes(previous: &Picture, picture: &Picture, surface: &mut impl Surface) -> usize {
    debug_assert_eq!(previous.dimensions(), picture.dimensions());
    if previous.same_as(picture) {
        return 0;
    }
    let width = picture.width();
    let mut painted = 0;
    for (index, (old, &new)) in previous.pixels().iter().zip(picture.pixels()).enumerate() {
        if *old != new {
            surface.paint_cell(index % width, index / width, new);
            painted += 1;
        }
    }
    trace!("Repainted {painted} changed cells");
    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::Edit;

    #[derive(Default)]
    struct CountingSurface {
        resizes: usize,
        painted: usize,
    }

    impl Surface for CountingSurface {
        fn resize(&mut self, _width: usize, _height: usize) {
            self.resizes += 1;
        }

        fn paint_cell(&mut self, _x: usize, _y: usize, _color: Color) {
            self.painted += 1;
        }
    }

    #[test]
    fn test_first_render_is_full() {
        let picture = Picture::empty(4, 3, Color::WHITE).unwrap();
        let mut surface = CountingSurface::default();
        let mut renderer = IncrementalRenderer::new();
        assert_eq!(renderer.render(&picture, &mut surface), 12);
        assert_eq!(surface.resizes, 1);
    }

    #[test]
    fn test_identical_clone_paints_nothing() {
        let picture = Picture::empty(4, 3, Color::WHITE).unwrap();
        let mut surface = CountingSurface::default();
        assert_eq!(render_changes(&picture, &picture.clone(), &mut surface), 0);
        assert_eq!(surface.painted, 0);
    }

    #[test]
    fn test_invalidate_forces_full_repaint() {
        let picture = Picture::empty(2, 2, Color::WHITE).unwrap();
        let mut surface = CountingSurface::default();
        let mut renderer = IncrementalRenderer::new();
        renderer.render(&picture, &mut surface);
        renderer.invalidate();
        assert_eq!(renderer.render(&picture, &mut surface), 4);
        assert_eq!(surface.resizes, 2);
    }

    #[test]
    fn test_changed_cells_only() {
        let picture = Picture::empty(4, 4, Color::WHITE).unwrap();
        let edited = picture.with_edits(&[Edit::new(1, 1, Color::BLACK), Edit::new(3, 0, Color::BLACK)]);
        let mut surface = CountingSurface::default();
        assert_eq!(render_changes(&picture, &edited, &mut surface), 2);
        assert_eq!(surface.resizes, 0);
    }
}
