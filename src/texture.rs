use std::rc::Rc;

use log::info;

use glium::texture::{MipmapsOption, RawImage2d, Texture2d};
use glium::uniforms::{MagnifySamplerFilter, MinifySamplerFilter, Sampler, SamplerWrapFunction};

use crate::CreationError;

/// Where a quad's texture comes from.
///
/// `Image` uploads the decoded image to a fresh texture owned by the quad.
/// `Shared` reuses an already-uploaded texture; the quad performs no texture
/// I/O and co-owns the texture via reference counting.
pub enum TextureSource {
    Image(image::RgbaImage),
    Shared(Rc<Texture2d>),
}

impl TextureSource {
    pub(crate) fn into_texture<F: glium::backend::Facade>(
        self,
        facade: &F,
    ) -> Result<Rc<Texture2d>, CreationError> {
        match self {
            TextureSource::Image(image) => Ok(Rc::new(load_texture(facade, image)?)),
            TextureSource::Shared(texture) => Ok(texture),
        }
    }
}

/// Uploads a decoded RGBA image to mip level 0 of a fresh 2D texture.
///
/// The image's pixel buffer is consumed by the upload. Allocation or upload
/// failure is fatal for the caller's construction sequence; there is no
/// retry path, since it indicates a broken rendering context.
pub fn load_texture<F: glium::backend::Facade>(
    facade: &F,
    image: image::RgbaImage,
) -> Result<Texture2d, CreationError> {
    let dimensions = image.dimensions();

    info!("Loading {}x{} texture", dimensions.0, dimensions.1);

    // Row 0 of the image must land at v = 0, so that tex coord (0, 0)
    // samples the image's top left pixel.
    let raw_image = RawImage2d::from_raw_rgba(image.into_raw(), dimensions);
    let texture = Texture2d::with_mipmaps(facade, raw_image, MipmapsOption::NoMipmap)?;

    Ok(texture)
}

/// Sampling state for quad textures: repeat wrap on both axes, linear
/// minification/magnification filtering.
pub fn sampler(texture: &Texture2d) -> Sampler<'_, Texture2d> {
    Sampler::new(texture)
        .wrap_function(SamplerWrapFunction::Repeat)
        .minify_filter(MinifySamplerFilter::Linear)
        .magnify_filter(MagnifySamplerFilter::Linear)
}
