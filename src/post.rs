use crate::month::Month;
use chrono::NaiveDate;
use gtmpl::Value;

/// A dated content item supplied by the host's content repository. The
/// archive only ever reads the date; `data` is the rendering payload the
/// host's layouts see for the post, and it passes through this crate
/// untouched.
pub struct Post {
    /// The publication date. Grouping reads only the year and month.
    pub date: NaiveDate,

    /// The opaque rendering payload handed to layouts.
    pub data: Value,
}

impl Post {
    /// Constructs a post from its publication date and rendering payload.
    pub fn new(date: NaiveDate, data: Value) -> Post {
        Post { date, data }
    }

    /// The archive key for the post: its publication year and month.
    pub fn month(&self) -> Month {
        Month::from(self.date)
    }
}
