//! Offset/limit pagination shared by the store contract and the service.

use crate::constants::MAX_PAGE_SIZE;
use crate::{NoteError, NoteResult};

/// A zero-based page number plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a validated page request.
    ///
    /// # Arguments
    ///
    /// * `page` - Zero-based page number; pages past the end are allowed and come back empty
    /// * `size` - Maximum number of items per page
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidInput` if `size` is zero or above [`MAX_PAGE_SIZE`].
    pub fn new(page: u32, size: u32) -> NoteResult<Self> {
        if size == 0 {
            return Err(NoteError::InvalidInput(
                "page size must be at least 1".into(),
            ));
        }
        if size > MAX_PAGE_SIZE {
            return Err(NoteError::InvalidInput(format!(
                "page size must not exceed {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(Self { page, size })
    }

    /// Zero-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Index of the first element on this page.
    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}

/// One slice of a query result plus totals for the whole result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Cuts the requested page out of an already ordered result set.
    ///
    /// # Arguments
    ///
    /// * `items` - The complete result, already in display order
    /// * `request` - Which slice to keep
    ///
    /// # Returns
    ///
    /// The slice plus `total_elements` and `total_pages` computed over all of `items`.
    pub fn from_ordered(items: Vec<T>, request: PageRequest) -> Self {
        let total_elements = items.len() as u64;
        let content = items
            .into_iter()
            .skip(request.offset())
            .take(request.size() as usize)
            .collect();

        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
            total_pages: total_elements.div_ceil(u64::from(request.size())) as u32,
        }
    }

    /// Converts every item on the page, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
