// Grayscale tint of an elevation: (height / max_height) * 255, clamped.
// Alpha is always opaque.
pub fn height_to_gray(height: f32, max_height: f32) -> [u8; 4] {
    let ratio = if max_height > 0.0 {
        height / max_height
    } else {
        0.0
    };
    let value = (ratio * 255.0).clamp(0.0, 255.0) as u8;
    [value, value, value, 255]
}
