/// Rows shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Lazy iterator over consecutive fixed-size pages of a result list.
///
/// Created by [`paginate`]. Every page except possibly the last has exactly
/// `page_size` rows; an empty list yields no pages at all.
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    rest: &'a [T],
    page_size: usize,
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let split = self.page_size.min(self.rest.len());
        let (page, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.len().div_ceil(self.page_size);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Pages<'_, T> {}

/// Split `results` into pages of `page_size` rows.
///
/// Borrowing only; calling it again restarts from the first page. A
/// `page_size` of zero is treated as one.
pub fn paginate<T>(results: &[T], page_size: usize) -> Pages<'_, T> {
    Pages {
        rest: results,
        page_size: page_size.max(1),
    }
}

#[cfg(test)]
#[path = "tests/paginate_tests.rs"]
mod tests;
