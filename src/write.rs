use crate::archive::{ArchivePage, Error as RenderError};
use gtmpl::{Template, Value};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;

/// Responsible for rendering [`ArchivePage`]s and writing them to disk.
/// This is the host engine's generic page-writing mechanism in miniature:
/// it consumes only the page's [`ArchivePage::destination`] and
/// [`ArchivePage::render`] contract, so a host with its own writer can
/// ignore this module entirely.
pub struct Writer<'a> {
    /// The host's layout registry, keyed by layout name.
    pub layouts: &'a HashMap<String, Template>,

    /// The site-wide payload every page's own payload is merged onto.
    pub site: &'a Value,

    /// The directory under which all archive pages are written.
    pub output_root: &'a Path,
}

impl Writer<'_> {
    /// Renders a single page and writes it to its destination, creating
    /// parent directories as needed.
    fn write_page(&self, page: &ArchivePage) -> Result<()> {
        let path = page.destination(self.output_root);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        // Pagination internals belong to the host; the bundled writer
        // always renders unpaged.
        let rendered = page.render(self.layouts, self.site, None)?;
        std::fs::write(&path, rendered)?;
        Ok(())
    }

    /// Renders and writes every page in `pages`.
    pub fn write_pages(&self, pages: &[ArchivePage]) -> Result<()> {
        pages.iter().map(|page| self.write_page(page)).collect()
    }
}

/// The result of a fallible page-writing operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// An error rendering a page through its layout.
    Render(RenderError),

    /// An error writing the output files.
    Io(io::Error),
}

impl From<RenderError> for Error {
    /// Converts a [`RenderError`] into an [`Error`]. This allows us to use
    /// the `?` operator for fallible rendering operations.
    fn from(err: RenderError) -> Error {
        Error::Render(err)
    }
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Render(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Render(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}
