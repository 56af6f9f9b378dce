use serde::Serialize;

/// Sizes of the input image and of the worksheet the search ran on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub worksheet_width: usize,
    pub worksheet_height: usize,
    /// Multiply worksheet coordinates by this to get input coordinates.
    pub scale: f32,
}
