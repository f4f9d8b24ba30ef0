/// Read access to a row-major single-channel grid.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    /// Backing storage, `height` rows of `stride` samples.
    fn data(&self) -> &[Self::Pixel];

    #[inline]
    fn row(&self, y: usize) -> &[Self::Pixel] {
        let start = y * self.stride();
        &self.data()[start..start + self.width()]
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Self::Pixel {
        self.data()[y * self.stride() + x]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// True when the grid has at least one pixel outside the 1-pixel border.
    fn has_interior(&self) -> bool {
        self.width() >= 3 && self.height() >= 3
    }
}

pub trait ImageViewMut: ImageView {
    fn data_mut(&mut self) -> &mut [Self::Pixel];

    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel] {
        let start = y * self.stride();
        let end = start + self.width();
        &mut self.data_mut()[start..end]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: Self::Pixel) {
        let i = y * self.stride() + x;
        self.data_mut()[i] = value;
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.y);
        (left, Some(left))
    }
}
