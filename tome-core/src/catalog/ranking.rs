//! Aggregate queries over the catalog
//!
//! Every ranking is a total order: counts descending, then the catalog key
//! (title or name) ascending, so results are reproducible run to run.

use super::Catalog;
use crate::error::Result;
use crate::types::{Book, Reader};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// An entry in a ranking together with the count it was ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ranked<T> {
    pub item: T,
    pub count: usize,
}

/// A named entry and its count, detached from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub name: String,
    pub count: usize,
}

/// A title and its average rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedTitle {
    pub title: String,
    pub average: f64,
}

/// Snapshot of every ranking query, for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub books: usize,
    pub readers: usize,
    pub most_read: Vec<String>,
    pub highest_rated: Option<RatedTitle>,
    pub top_books: Vec<Standing>,
    pub top_readers: Vec<Standing>,
}

impl Catalog {
    /// Number of distinct readers who have read each book, keyed by title
    fn read_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> =
            self.books.keys().map(|title| (title.as_str(), 0)).collect();

        for reader in self.readers.values() {
            for (title, _) in reader.readings() {
                if let Some(count) = counts.get_mut(title) {
                    *count += 1;
                }
            }
        }

        counts
    }

    /// Number of distinct readers who have read a book
    pub fn read_count(&self, title: &str) -> Result<usize> {
        let book = self.book(title)?;
        Ok(self
            .readers
            .values()
            .filter(|reader| reader.has_read(book.title()))
            .count())
    }

    /// Every book read by the greatest number of distinct readers
    ///
    /// Ties are all returned, ordered by title. Empty when nothing has been
    /// read yet.
    pub fn most_read_book(&self) -> Vec<&Book> {
        let counts = self.read_counts();
        let max = counts.values().copied().max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }

        counts
            .into_iter()
            .filter(|(_, count)| *count == max)
            .filter_map(|(title, _)| self.books.get(title))
            .collect()
    }

    /// The book with the greatest average rating
    ///
    /// Books without ratings are skipped rather than treated as zero. Ties go
    /// to the earliest title. `None` when no book has been rated.
    pub fn highest_rated_book(&self) -> Option<&Book> {
        self.rated_books()
            .fold(None, |best: Option<(&Book, f64)>, (book, average)| match best {
                Some((_, top)) if average.partial_cmp(&top) != Some(Ordering::Greater) => best,
                _ => Some((book, average)),
            })
            .map(|(book, _)| book)
    }

    /// Books with at least one rating, with their averages, ordered by title
    fn rated_books(&self) -> impl Iterator<Item = (&Book, f64)> + '_ {
        self.books
            .values()
            .filter_map(|book| book.average_rating().ok().map(|avg| (book, avg)))
    }

    /// The `n` most read books, by distinct readers
    pub fn top_n_books(&self, n: usize) -> Vec<Ranked<&Book>> {
        let mut ranked: Vec<_> = self
            .read_counts()
            .into_iter()
            .filter_map(|(title, count)| {
                self.books.get(title).map(|item| Ranked { item, count })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.item.title().cmp(b.item.title()))
        });
        ranked.truncate(n);
        ranked
    }

    /// The `n` readers who have read the most distinct books
    pub fn top_n_readers(&self, n: usize) -> Vec<Ranked<&Reader>> {
        let mut ranked: Vec<_> = self
            .readers
            .values()
            .map(|item| Ranked {
                item,
                count: item.books_read(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.item.name().cmp(b.item.name()))
        });
        ranked.truncate(n);
        ranked
    }

    /// Run every ranking query, keeping `top` entries in the top-N lists
    pub fn summary(&self, top: usize) -> CatalogSummary {
        CatalogSummary {
            books: self.books.len(),
            readers: self.readers.len(),
            most_read: self
                .most_read_book()
                .into_iter()
                .map(|book| book.title().to_string())
                .collect(),
            highest_rated: self.highest_rated_book().and_then(|book| {
                book.average_rating().ok().map(|average| RatedTitle {
                    title: book.title().to_string(),
                    average,
                })
            }),
            top_books: self
                .top_n_books(top)
                .into_iter()
                .map(|r| Standing {
                    name: r.item.title().to_string(),
                    count: r.count,
                })
                .collect(),
            top_readers: self
                .top_n_readers(top)
                .into_iter()
                .map(|r| Standing {
                    name: r.item.name().to_string(),
                    count: r.count,
                })
                .collect(),
        }
    }
}
