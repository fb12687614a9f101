use serde::Serialize;
use thiserror::Error;

use crate::window::{self, Window};

pub const DEFAULT_PER_PAGE: i64 = 15;
pub const MAX_PER_PAGE: i64 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginateError {
    #[error("invalid per-page limits (default {default}, max {max}), expected 1 <= default <= max")]
    InvalidPerPageLimits { default: i64, max: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerPageLimits {
    default: i64,
    max: i64,
}

impl PerPageLimits {
    pub fn new(default: i64, max: i64) -> Result<Self, PaginateError> {
        if default < 1 || default > max {
            return Err(PaginateError::InvalidPerPageLimits { default, max });
        }
        Ok(Self { default, max })
    }

    pub fn default_per_page(&self) -> i64 {
        self.default
    }

    pub fn max_per_page(&self) -> i64 {
        self.max
    }
}

impl Default for PerPageLimits {
    fn default() -> Self {
        Self {
            default: DEFAULT_PER_PAGE,
            max: MAX_PER_PAGE,
        }
    }
}

/// Page and page size taken from a list-page query, after normalisation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageParams {
    pub page: i64,
    pub per_page: i64,
}

impl PageParams {
    /// Missing or non-positive pages become page 1; the page size falls back
    /// to the default and is capped at the maximum.
    pub fn prepare(page: Option<i64>, per_page: Option<i64>, limits: PerPageLimits) -> Self {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page
            .unwrap_or(limits.default)
            .min(limits.max)
            .max(1);
        Self { page, per_page }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationSummary {
    pub page: i64,
    pub per_page: i64,
    pub total_records: i64,
    pub total_pages: i64,
}

impl PaginationSummary {
    pub fn new(page: i64, per_page: i64, total_records: i64) -> Self {
        let per_page = per_page.max(1);
        let total_records = total_records.max(0);
        let total_pages = total_records / per_page + i64::from(total_records % per_page != 0);
        Self {
            page,
            per_page,
            total_records,
            total_pages,
        }
    }

    pub fn from_params(params: PageParams, total_records: i64) -> Self {
        Self::new(params.page, params.per_page, total_records)
    }

    /// Index of the first record on the current page.
    pub fn record_offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Page count shown to the user; an empty listing still has one page.
    pub fn display_total_pages(&self) -> i64 {
        self.total_pages.max(1)
    }

    pub fn window(&self, neighbor_offset: u32) -> Window {
        window::generate(self.page, self.display_total_pages(), neighbor_offset)
    }
}
