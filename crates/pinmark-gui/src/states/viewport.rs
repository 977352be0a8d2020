/// The uploaded background image.
#[derive(Default)]
pub struct TextureState {
    pub texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
    pub label: String,
}
