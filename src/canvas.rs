//! egui side of the renderer: a [`Surface`] backed by a [`ColorImage`] that
//! uploads only the region that changed since the last frame.

use egui::{Color32, ColorImage, TextureHandle, TextureId, TextureOptions};

use crate::event::StateObserver;
use crate::picture::Color;
use crate::renderer::{IncrementalRenderer, Surface};
use crate::state::EditorState;

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}

impl From<Color32> for Color {
    fn from(color: Color32) -> Self {
        Color::rgb(color.r(), color.g(), color.b())
    }
}

/// Inclusive cell bounds touched since the last upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DirtyRect {
    min: [usize; 2],
    max: [usize; 2],
}

impl DirtyRect {
    fn cell(x: usize, y: usize) -> Self {
        Self {
            min: [x, y],
            max: [x, y],
        }
    }

    fn include(&mut self, x: usize, y: usize) {
        self.min = [self.min[0].min(x), self.min[1].min(y)];
        self.max = [self.max[0].max(x), self.max[1].max(y)];
    }

    fn size(&self) -> [usize; 2] {
        [self.max[0] - self.min[0] + 1, self.max[1] - self.min[1] + 1]
    }
}

/// Pending texture update.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureUpload {
    /// The texture must be (re)created at this size.
    Full(ColorImage),
    /// Only this region changed.
    Region { pos: [usize; 2], image: ColorImage },
}

/// One texture pixel per picture cell.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    image: ColorImage,
    resized: bool,
    dirty: Option<DirtyRect>,
}

impl Default for PixelSurface {
    fn default() -> Self {
        Self {
            image: ColorImage::new([0, 0], Color32::TRANSPARENT),
            resized: false,
            dirty: None,
        }
    }
}

impl PixelSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color32 {
        self.image[(x, y)]
    }

    /// Takes whatever changed since the last call.
    pub fn take_upload(&mut self) -> Option<TextureUpload> {
        if std::mem::take(&mut self.resized) {
            self.dirty = None;
            return Some(TextureUpload::Full(self.image.clone()));
        }
        let dirty = self.dirty.take()?;
        let [width, height] = dirty.size();
        let mut region = ColorImage::new([width, height], Color32::TRANSPARENT);
        for y in 0..height {
            for x in 0..width {
                region[(x, y)] = self.image[(dirty.min[0] + x, dirty.min[1] + y)];
            }
        }
        Some(TextureUpload::Region {
            pos: dirty.min,
            image: region,
        })
    }
}

impl Surface for PixelSurface {
    fn resize(&mut self, width: usize, height: usize) {
        self.image = ColorImage::new([width, height], Color32::TRANSPARENT);
        self.resized = true;
        self.dirty = None;
    }

    fn paint_cell(&mut self, x: usize, y: usize, color: Color) {
        self.image[(x, y)] = color.into();
        if self.resized {
            return;
        }
        match &mut self.dirty {
            Some(dirty) => dirty.include(x, y),
            None => self.dirty = Some(DirtyRect::cell(x, y)),
        }
    }
}

/// The on-screen picture: renders every new state into a [`PixelSurface`]
/// and pushes the changes to a GPU texture once per frame.
#[derive(Default)]
pub struct CanvasView {
    renderer: IncrementalRenderer,
    surface: PixelSurface,
    texture: Option<TextureHandle>,
}

impl CanvasView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    /// Uploads pending changes. Returns the texture to draw, if any.
    pub fn upload(&mut self, ctx: &egui::Context) -> Option<TextureId> {
        if let Some(upload) = self.surface.take_upload() {
            match self.texture.as_mut() {
                Some(texture) => match upload {
                    TextureUpload::Region { pos, image } => {
                        texture.set_partial(pos, image, TextureOptions::NEAREST);
                    }
                    TextureUpload::Full(image) => texture.set(image, TextureOptions::NEAREST),
                },
                None => {
                    self.texture = Some(ctx.load_texture(
                        "pixel_canvas",
                        self.surface.image.clone(),
                        TextureOptions::NEAREST,
                    ));
                }
            }
        }
        self.texture.as_ref().map(TextureHandle::id)
    }
}

impl StateObserver for CanvasView {
    fn state_changed(&mut self, state: &EditorState) {
        self.renderer.render(&state.picture, &mut self.surface);
    }
}
