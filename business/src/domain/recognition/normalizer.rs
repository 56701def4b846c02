use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use imageproc::contrast::otsu_level;
use imageproc::geometry::min_area_rect;
use imageproc::point::Point;

use super::errors::RecognitionError;
use super::image::{Image, NormalizedImage};

/// Text pixels after binarization.
pub const FOREGROUND: u8 = 0;
pub const BACKGROUND: u8 = 255;

/// Bicubic kernel coefficient, the same value OpenCV uses for `INTER_CUBIC`.
const CUBIC_A: f64 = -0.75;

/// Prepares product photographs for text extraction.
///
/// Pipeline: grayscale → Otsu binarization → deskew. Every step is a pure
/// transform; blank or uniform images pass through without error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageNormalizer;

impl ImageNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Runs the full pipeline. Width and height are preserved.
    pub fn normalize(&self, image: &Image) -> NormalizedImage {
        let gray = to_grayscale(image.as_dynamic());
        let binary = binarize(&gray);
        let skew = estimate_skew(&binary);
        let pixels = rotate(&binary, -skew);
        NormalizedImage::new(pixels, skew)
    }

    /// Decodes raw bytes then normalizes them.
    pub fn normalize_bytes(&self, bytes: &[u8]) -> Result<NormalizedImage, RecognitionError> {
        let image = Image::decode(bytes)?;
        Ok(self.normalize(&image))
    }
}

/// Collapses color channels to luminance.
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Applies a global Otsu threshold: pixels above the level become white,
/// everything else black.
pub fn binarize(gray: &GrayImage) -> GrayImage {
    let level = otsu_level(gray);

    ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] > level {
            Luma([BACKGROUND])
        } else {
            Luma([FOREGROUND])
        }
    })
}

/// Estimates the dominant text rotation of a binarized image, in degrees
/// within (-45, 45].
///
/// Uses the minimum-area rectangle enclosing all foreground pixels. Images
/// without enough foreground to define a rectangle report 0.
pub fn estimate_skew(binary: &GrayImage) -> f32 {
    let points: Vec<Point<i32>> = binary
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel[0] == FOREGROUND)
        .map(|(x, y, _)| Point::new(x as i32, y as i32))
        .collect();

    min_area_rect_angle(&points)
        .map(fold_angle)
        .unwrap_or(0.0)
}

/// Folds any angle into (-45, 45] by steps of 90 degrees.
pub fn fold_angle(degrees: f32) -> f32 {
    let mut angle = degrees;
    while angle > 45.0 {
        angle -= 90.0;
    }
    while angle <= -45.0 {
        angle += 90.0;
    }
    angle
}

/// Rotates the image content by `degrees` about its center (positive turns
/// clockwise on screen). Bicubic interpolation, edge-replicating border,
/// output keeps the input dimensions.
pub fn rotate(image: &GrayImage, degrees: f32) -> GrayImage {
    if degrees == 0.0 {
        return image.clone();
    }

    let (width, height) = image.dimensions();
    let center_x = (width / 2) as f64;
    let center_y = (height / 2) as f64;
    let (sin, cos) = (degrees as f64).to_radians().sin_cos();

    ImageBuffer::from_fn(width, height, |x, y| {
        let dx = x as f64 - center_x;
        let dy = y as f64 - center_y;
        let source_x = center_x + cos * dx + sin * dy;
        let source_y = center_y - sin * dx + cos * dy;
        Luma([sample_bicubic(image, source_x, source_y)])
    })
}

fn min_area_rect_angle(points: &[Point<i32>]) -> Option<f32> {
    if points.len() < 2 {
        return None;
    }

    // Corners come back in order, so two consecutive edges span both sides.
    let [first, second, third, _] = min_area_rect(points);
    let long_side = if squared_length(first, second) >= squared_length(second, third) {
        (first, second)
    } else {
        (second, third)
    };

    if squared_length(long_side.0, long_side.1) == 0 {
        return None;
    }
    Some(segment_angle(long_side.0, long_side.1))
}

fn squared_length(start: Point<i32>, end: Point<i32>) -> i64 {
    let dx = (end.x - start.x) as i64;
    let dy = (end.y - start.y) as i64;
    dx * dx + dy * dy
}

fn segment_angle(start: Point<i32>, end: Point<i32>) -> f32 {
    let dx = (end.x - start.x) as f64;
    let dy = (end.y - start.y) as f64;
    dy.atan2(dx).to_degrees() as f32
}

fn cubic_weight(distance: f64) -> f64 {
    let t = distance.abs();
    if t <= 1.0 {
        ((CUBIC_A + 2.0) * t - (CUBIC_A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        ((CUBIC_A * t - 5.0 * CUBIC_A) * t + 8.0 * CUBIC_A) * t - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

fn sample_bicubic(image: &GrayImage, x: f64, y: f64) -> u8 {
    let max_x = image.width() as i64 - 1;
    let max_y = image.height() as i64 - 1;
    let base_x = x.floor();
    let base_y = y.floor();
    let frac_x = x - base_x;
    let frac_y = y - base_y;

    let mut acc = 0.0;
    for j in -1..=2i64 {
        let weight_y = cubic_weight(frac_y - j as f64);
        let row = (base_y as i64 + j).clamp(0, max_y) as u32;
        for i in -1..=2i64 {
            let weight_x = cubic_weight(frac_x - i as f64);
            let column = (base_x as i64 + i).clamp(0, max_x) as u32;
            acc += weight_x * weight_y * image.get_pixel(column, row)[0] as f64;
        }
    }

    acc.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use proptest::prelude::*;

    /// White canvas with a filled black rectangle whose long axis is tilted
    /// by `degrees` (clockwise on screen).
    fn tilted_bar(width: u32, height: u32, degrees: f64) -> GrayImage {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let center_x = width as f64 / 2.0;
        let center_y = height as f64 / 2.0;

        ImageBuffer::from_fn(width, height, |x, y| {
            let dx = x as f64 - center_x;
            let dy = y as f64 - center_y;
            let along = dx * cos + dy * sin;
            let across = dy * cos - dx * sin;
            if along.abs() <= 60.0 && across.abs() <= 15.0 {
                Luma([FOREGROUND])
            } else {
                Luma([BACKGROUND])
            }
        })
    }

    fn as_image(gray: GrayImage) -> Image {
        Image::new(DynamicImage::ImageLuma8(gray)).unwrap()
    }

    #[test]
    fn should_preserve_dimensions_when_normalizing_color_image() {
        let photo = RgbImage::from_fn(64, 40, |x, y| {
            if (10..50).contains(&x) && (15..22).contains(&y) {
                Rgb([20, 20, 90])
            } else {
                Rgb([240, 230, 210])
            }
        });
        let image = Image::new(DynamicImage::ImageRgb8(photo)).unwrap();

        let normalized = ImageNormalizer::new().normalize(&image);

        assert_eq!(normalized.width(), 64);
        assert_eq!(normalized.height(), 40);
    }

    #[test]
    fn should_produce_only_black_and_white_pixels_when_binarizing() {
        let gradient = ImageBuffer::from_fn(50, 20, |x, _| Luma([(x * 5) as u8]));

        let binary = binarize(&gradient);

        assert!(
            binary
                .pixels()
                .all(|p| p[0] == FOREGROUND || p[0] == BACKGROUND)
        );
    }

    #[test]
    fn should_be_idempotent_when_binarizing_twice() {
        let gradient = ImageBuffer::from_fn(50, 20, |x, y| Luma([((x * 5 + y * 3) % 256) as u8]));

        let once = binarize(&gradient);
        let twice = binarize(&once);

        assert_eq!(once, twice);
    }

    fn arbitrary_gray_image() -> impl Strategy<Value = GrayImage> {
        (1u32..24, 1u32..24).prop_flat_map(|(width, height)| {
            proptest::collection::vec(any::<u8>(), (width * height) as usize).prop_map(
                move |raw| GrayImage::from_raw(width, height, raw).unwrap(),
            )
        })
    }

    proptest! {
        #[test]
        fn should_be_idempotent_when_binarizing_any_image(gray in arbitrary_gray_image()) {
            let once = binarize(&gray);
            let twice = binarize(&once);

            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn should_pass_blank_image_through_without_rotation() {
        let blank = as_image(GrayImage::from_pixel(30, 20, Luma([BACKGROUND])));

        let normalized = ImageNormalizer::new().normalize(&blank);

        assert_eq!(normalized.skew_degrees(), 0.0);
        assert!(normalized.pixels().pixels().all(|p| p[0] == BACKGROUND));
    }

    #[test]
    fn should_report_zero_skew_when_image_is_fully_dark() {
        let dark = GrayImage::from_pixel(30, 20, Luma([FOREGROUND]));

        assert_eq!(estimate_skew(&dark), 0.0);
    }

    #[test]
    fn should_report_zero_skew_when_single_foreground_pixel() {
        let mut image = GrayImage::from_pixel(30, 20, Luma([BACKGROUND]));
        image.put_pixel(4, 7, Luma([FOREGROUND]));

        assert_eq!(estimate_skew(&image), 0.0);
    }

    #[test]
    fn should_report_segment_angle_when_foreground_is_collinear() {
        let mut image = GrayImage::from_pixel(30, 30, Luma([BACKGROUND]));
        for i in 0..10 {
            image.put_pixel(5 + i, 5 + i, Luma([FOREGROUND]));
        }

        assert!((estimate_skew(&image) - 45.0).abs() < 1e-3);
    }

    #[test]
    fn should_fold_angles_into_half_open_range() {
        assert_eq!(fold_angle(0.0), 0.0);
        assert_eq!(fold_angle(90.0), 0.0);
        assert_eq!(fold_angle(-90.0), 0.0);
        assert_eq!(fold_angle(45.0), 45.0);
        assert_eq!(fold_angle(-45.0), 45.0);
        assert_eq!(fold_angle(135.0), 45.0);
        assert_eq!(fold_angle(-100.0), -10.0);
        assert_eq!(fold_angle(46.0), -44.0);
        assert_eq!(fold_angle(180.0), 0.0);
    }

    #[test]
    fn should_estimate_tilt_of_rotated_bar() {
        let clockwise = estimate_skew(&tilted_bar(200, 140, 10.0));
        let counter_clockwise = estimate_skew(&tilted_bar(200, 140, -8.0));

        assert!((clockwise - 10.0).abs() < 1.5, "got {clockwise}");
        assert!((counter_clockwise + 8.0).abs() < 1.5, "got {counter_clockwise}");
    }

    #[test]
    fn should_keep_skew_within_range_for_steep_tilts() {
        for degrees in [-80.0, -44.0, 30.0, 60.0, 85.0] {
            let skew = estimate_skew(&tilted_bar(220, 220, degrees));
            assert!(skew > -45.0 && skew <= 45.0, "{degrees} gave {skew}");
        }
    }

    #[test]
    fn should_leave_near_zero_skew_when_deskewing_twice() {
        let normalizer = ImageNormalizer::new();

        let first = normalizer.normalize(&as_image(tilted_bar(200, 140, 10.0)));
        let second = normalizer.normalize(&as_image(first.pixels().clone()));

        assert!((first.skew_degrees() - 10.0).abs() < 1.5);
        assert!(second.skew_degrees().abs() < 2.0, "got {}", second.skew_degrees());
        assert_eq!(second.width(), 200);
        assert_eq!(second.height(), 140);
    }

    #[test]
    fn should_return_identical_image_when_rotating_by_zero() {
        let gradient = ImageBuffer::from_fn(16, 9, |x, y| Luma([(x * 10 + y) as u8]));

        assert_eq!(rotate(&gradient, 0.0), gradient);
    }

    #[test]
    fn should_replicate_edges_instead_of_filling_black_corners() {
        let white = GrayImage::from_pixel(40, 24, Luma([BACKGROUND]));

        let rotated = rotate(&white, 30.0);

        assert_eq!(rotated.dimensions(), (40, 24));
        assert!(rotated.pixels().all(|p| p[0] == BACKGROUND));
    }

    #[test]
    fn should_return_decode_error_when_normalizing_malformed_bytes() {
        let result = ImageNormalizer::new().normalize_bytes(&[0x89, 0x50, 0x4e, 0x47, 0x00]);

        assert!(matches!(result, Err(RecognitionError::Decode(_))));
    }
}
