/// An error type for the image containers and the operations built on them.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the number of channels has no matching pixel layout.
    #[error("Unsupported number of channels: {0}")]
    UnsupportedChannels(usize),

    /// Error when the image dimensions do not fit the resampler.
    #[error("Image dimension {0} does not fit in u32")]
    DimensionOverflow(usize),

    /// Error when the element count of an image does not fit in memory.
    #[error("Image size {0}x{1} with {2} channels overflows")]
    SizeOverflow(usize, usize, usize),

    /// Error reported by the resampling backend.
    #[error("Failed to resize image: {0}")]
    Resize(String),
}
