//! Scaling an image into an available area

/// Fit an image with the given aspect ratio (width / height) into a box.
///
/// The image first takes the full width; if that makes it too tall it is
/// scaled down to the full height instead. The aspect ratio is preserved.
pub fn fit_within(aspect: f32, max_width: f32, max_height: f32) -> (f32, f32) {
    let (width, height) = fit_width(aspect, max_width);
    if height > max_height {
        (max_height * aspect, max_height)
    } else {
        (width, height)
    }
}

/// Scale an image to exactly `width`, letting the height follow the aspect
/// ratio.
pub fn fit_width(aspect: f32, width: f32) -> (f32, f32) {
    (width, width / aspect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_limited() {
        // 2:1 image into 200x200: width wins
        let (w, h) = fit_within(2.0, 200.0, 200.0);
        assert!((w - 200.0).abs() < 0.001);
        assert!((h - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_height_limited() {
        // 1:2 image into 200x200: height wins
        let (w, h) = fit_within(0.5, 200.0, 200.0);
        assert!((w - 100.0).abs() < 0.001);
        assert!((h - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_width_ignores_height() {
        let (w, h) = fit_width(0.25, 100.0);
        assert_eq!(w, 100.0);
        assert_eq!(h, 400.0);
    }
}
