//! Builds the monthly archive: groups posts by publication month and
//! derives one [`ArchivePage`] per month. The page set is what the host
//! engine adds to its output collection; each page knows where it lives on
//! disk ([`ArchivePage::destination`]), where it lives on the site
//! ([`ArchivePage::url`]), and how to render itself against the host's
//! layout templates ([`ArchivePage::render`]).

use crate::config::ArchiveConfig;
use crate::month::Month;
use crate::post::Post;
use chrono::NaiveDate;
use gtmpl::{Template, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.html";

/// Groups `posts` by publication month. Months order chronologically in
/// the returned map; within a month, posts keep the order in which they
/// appeared in `posts`.
pub fn group_by_month(posts: &[Post]) -> BTreeMap<Month, Vec<&Post>> {
    let mut groups: BTreeMap<Month, Vec<&Post>> = BTreeMap::new();
    for post in posts {
        match groups.get_mut(&post.month()) {
            None => {
                groups.insert(post.month(), vec![post]);
            }
            Some(group) => group.push(post),
        }
    }
    groups
}

/// Derives one [`ArchivePage`] per month present in `posts`, newest month
/// first. An empty `posts` slice yields an empty page set; it is not an
/// error.
pub fn generate<'a>(posts: &'a [Post], config: &'a ArchiveConfig) -> Vec<ArchivePage<'a>> {
    group_by_month(posts)
        .into_iter()
        .rev()
        .map(|(month, group)| ArchivePage::new(config, month, group))
        .collect()
}

/// A synthetic page listing every post published in one calendar month.
/// Pages are recomputed fresh on every generation pass and never mutated
/// after construction.
pub struct ArchivePage<'a> {
    /// The month the page archives.
    pub month: Month,

    /// The page's synthesized date: the first day of its month.
    pub date: NaiveDate,

    /// The base path under which all archive pages nest, e.g. `/blog`.
    pub base: &'a str,

    /// The name of the layout template that renders the page.
    pub layout: &'a str,

    /// The posts published in the page's month, in input order.
    pub posts: Vec<&'a Post>,
}

impl<'a> ArchivePage<'a> {
    /// Constructs the page for `month` from the resolved archive settings
    /// and the month's posts.
    pub fn new(config: &'a ArchiveConfig, month: Month, posts: Vec<&'a Post>) -> ArchivePage<'a> {
        ArchivePage {
            month,
            date: month.first_day(),
            base: &config.base_path,
            layout: &config.layout,
            posts,
        }
    }

    /// The output file for the page:
    /// `{output_root}/{base}/{year:04}/{month:02}/index.html`. The base
    /// path's surrounding slashes are normalized away before joining, so a
    /// configured `/blog` and `blog` land in the same place. Distinct
    /// months yield distinct paths because the month is embedded in the
    /// path.
    pub fn destination(&self, output_root: &Path) -> PathBuf {
        output_root
            .join(self.base.trim_matches('/'))
            .join(self.month.dir_name())
            .join(INDEX_FILE)
    }

    /// The site-relative URL for the page. Resolves to the same directory
    /// and file name as [`ArchivePage::destination`], under the site root
    /// instead of the output root.
    pub fn url(&self) -> String {
        format!(
            "/{}/{}/{}",
            self.base.trim_matches('/'),
            self.month.dir_name(),
            INDEX_FILE
        )
    }

    /// Converts the page into the [`Value`] the layout sees as `page`: an
    /// object with the layout name, a `type` of `"archive"`, the derived
    /// title, the posts' payloads, the page URL, an empty body, the
    /// synthesized date, and the month and year as numbers. The body is
    /// always empty; everything visible comes from the layout applied to
    /// this metadata.
    pub fn to_value(&self) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("layout".to_owned(), Value::String(self.layout.to_owned()));
        m.insert("type".to_owned(), Value::String("archive".to_owned()));
        m.insert("title".to_owned(), Value::String(self.title()));
        m.insert(
            "posts".to_owned(),
            Value::Array(self.posts.iter().map(|post| post.data.clone()).collect()),
        );
        m.insert("url".to_owned(), Value::String(self.url()));
        m.insert("content".to_owned(), Value::String(String::new()));
        m.insert("date".to_owned(), Value::String(self.date.to_string()));
        m.insert("month".to_owned(), Value::from(self.month.month as u64));
        m.insert("year".to_owned(), Value::from(self.month.year as i64));
        Value::Object(m)
    }

    // The derived page title. The month is unpadded here; paths and labels
    // use the zero-padded form.
    fn title(&self) -> String {
        format!(
            "Monthly archive for {}/{}",
            self.month.year, self.month.month
        )
    }

    /// Renders the page by applying the layout named by
    /// [`ArchivePage::layout`] to the merged payload: the host's site-wide
    /// payload with `page` ([`ArchivePage::to_value`]) and `paginator` set
    /// on top. An absent paginator renders as [`Value::Nil`]. The rendered
    /// bytes are returned to the caller; no file is written here.
    pub fn render(
        &self,
        layouts: &HashMap<String, Template>,
        site: &Value,
        paginator: Option<&Value>,
    ) -> Result<Vec<u8>> {
        let template = match layouts.get(self.layout) {
            None => return Err(Error::MissingLayout(self.layout.to_owned())),
            Some(template) => template,
        };

        let mut payload = site.clone();
        if let Value::Object(obj) = &mut payload {
            obj.insert("page".to_owned(), self.to_value());
            obj.insert(
                "paginator".to_owned(),
                match paginator {
                    Some(paginator) => paginator.clone(),
                    None => Value::Nil,
                },
            );
        }

        let mut rendered = Vec::new();
        let context = gtmpl::Context::from(payload)?;
        template.execute(&mut rendered, &context)?;
        Ok(rendered)
    }
}

/// The result of a fallible page-rendering operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error applying a layout to an [`ArchivePage`].
#[derive(Debug)]
pub enum Error {
    /// The configured layout name is missing from the host's layout
    /// registry. This is a configuration error, fatal to the build; it is
    /// surfaced to the caller rather than recovered here.
    MissingLayout(String),

    /// An error during templating.
    Template(String),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingLayout(name) => write!(f, "No such layout: `{}`", name),
            Error::Template(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingLayout(_) => None,
            Error::Template(_) => None,
        }
    }
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`].
    /// This allows us to use the `?` operator for fallible template
    /// operations.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}
