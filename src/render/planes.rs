use image::{Rgb, RgbImage};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// True when a pixel reads as red ink: the red channel strictly dominates
/// both green and blue. Pure gray (R == G == B) is not red.
pub fn is_red(pixel: Rgb<u8>) -> bool {
    let Rgb([r, g, b]) = pixel;
    r > g && r > b
}

/// Split one RGB screenshot into a black plane and a red plane.
///
/// Both outputs start as independent copies of the source, so nothing
/// aliases: red pixels are cleared to white in the black plane, everything
/// else is cleared to white in the red plane. Overlaying the two planes
/// reconstructs every ink pixel of the source.
pub fn separate(source: &RgbImage) -> (RgbImage, RgbImage) {
    let mut black = source.clone();
    let mut red = source.clone();

    for pixel in black.pixels_mut() {
        if is_red(*pixel) {
            *pixel = WHITE;
        }
    }
    for pixel in red.pixels_mut() {
        if !is_red(*pixel) {
            *pixel = WHITE;
        }
    }

    (black, red)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const RED: Rgb<u8> = Rgb([200, 30, 30]);
    const GRAY: Rgb<u8> = Rgb([120, 120, 120]);

    #[test]
    fn red_requires_strict_dominance() {
        assert!(is_red(RED));
        assert!(is_red(Rgb([1, 0, 0])));
        assert!(!is_red(BLACK));
        assert!(!is_red(WHITE));
        assert!(!is_red(GRAY));
        assert!(!is_red(Rgb([100, 100, 0])));
    }

    #[test]
    fn monochrome_input_passes_through_the_black_plane() {
        let source = RgbImage::from_fn(4, 4, |x, y| if (x + y) % 2 == 0 { BLACK } else { WHITE });
        let (black, red) = separate(&source);
        assert_eq!(black, source);
        assert!(red.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn red_ink_moves_to_the_red_plane_only() {
        let mut source = RgbImage::from_pixel(3, 1, WHITE);
        source.put_pixel(0, 0, RED);
        source.put_pixel(1, 0, BLACK);

        let (black, red) = separate(&source);
        assert_eq!(*black.get_pixel(0, 0), WHITE);
        assert_eq!(*black.get_pixel(1, 0), BLACK);
        assert_eq!(*red.get_pixel(0, 0), RED);
        assert_eq!(*red.get_pixel(1, 0), WHITE);
    }

    #[test]
    fn gray_pixels_survive_in_the_black_plane() {
        let source = RgbImage::from_pixel(2, 2, GRAY);
        let (black, red) = separate(&source);
        assert!(black.pixels().all(|p| *p == GRAY));
        assert!(red.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn every_ink_pixel_lands_in_exactly_one_plane() {
        let source = RgbImage::from_fn(8, 8, |x, y| match (x + 3 * y) % 4 {
            0 => RED,
            1 => BLACK,
            2 => GRAY,
            _ => WHITE,
        });
        let (black, red) = separate(&source);
        for (x, y, pixel) in source.enumerate_pixels() {
            let in_black = black.get_pixel(x, y) == pixel && *pixel != WHITE;
            let in_red = red.get_pixel(x, y) == pixel && *pixel != WHITE;
            if *pixel == WHITE {
                assert_eq!(*black.get_pixel(x, y), WHITE);
                assert_eq!(*red.get_pixel(x, y), WHITE);
            } else {
                assert!(in_black ^ in_red, "ink lost or duplicated at {x},{y}");
            }
        }
    }
}
