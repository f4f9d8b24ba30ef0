use pgm_processor::GrayImage;

/// High-contrast checkerboard with `cell`-pixel squares.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> GrayImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let parity = (x / cell + y / cell) & 1;
            data[y * width + x] = if parity == 0 { 32 } else { 220 };
        }
    }
    GrayImage::from_raw(width, height, data).expect("buffer matches dimensions")
}

/// Deterministic pseudo-random texture (LCG), values in `0..=255`.
pub fn noise(width: usize, height: usize, seed: u32) -> GrayImage {
    let mut state = seed;
    let data = (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect();
    GrayImage::from_raw(width, height, data).expect("buffer matches dimensions")
}

/// Every sample on the outermost ring, row-major.
pub fn border_ring(img: &GrayImage) -> Vec<u8> {
    let mut ring = Vec::new();
    for y in 0..img.h {
        for x in 0..img.w {
            if x == 0 || y == 0 || x + 1 == img.w || y + 1 == img.h {
                ring.push(img.data[y * img.w + x]);
            }
        }
    }
    ring
}
