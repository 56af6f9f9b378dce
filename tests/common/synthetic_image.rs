/// All-zero edge map.
pub fn blank_edges(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![0u8; width * height]
}

/// Edge map with a horizontal run on `row` covering columns `x0..x1`.
pub fn horizontal_edge(width: usize, height: usize, row: usize, x0: usize, x1: usize) -> Vec<u8> {
    let mut img = blank_edges(width, height);
    for x in x0..x1 {
        img[row * width + x] = 255;
    }
    img
}

/// Edge map with a vertical run on `col` covering rows `y0..y1`.
pub fn vertical_edge(width: usize, height: usize, col: usize, y0: usize, y1: usize) -> Vec<u8> {
    let mut img = blank_edges(width, height);
    set_column(&mut img, width, col, y0, y1);
    img
}

pub fn set_column(img: &mut [u8], width: usize, col: usize, y0: usize, y1: usize) {
    for y in y0..y1 {
        img[y * width + col] = 255;
    }
}

/// Bright grayscale image crossed by a dark horizontal and a dark vertical bar.
pub fn cross_u8(width: usize, height: usize, bar: usize) -> Vec<u8> {
    assert!(bar > 0 && bar < width.min(height), "bar must fit in the image");
    let (cx, cy) = (width / 2, height / 2);
    let mut img = vec![220u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let in_row = y >= cy - bar / 2 && y < cy - bar / 2 + bar;
            let in_col = x >= cx - bar / 2 && x < cx - bar / 2 + bar;
            if in_row || in_col {
                img[y * width + x] = 32;
            }
        }
    }
    img
}
