//! Errors shared by the parser, the evaluator and the grader.
//!
//! Each concrete error is a small struct implementing [`ErrorKind`], usually through
//! `#[derive(ErrorKind)]`. [`Error`] pairs one with the spans of the expression it concerns, so
//! it can be rendered as a report underlining those spans.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// Highlight color for expressions and spans in reports.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// A kind of error: what went wrong, independent of where.
///
/// This trait is usually implemented with `#[derive(ErrorKind)]` from the `algebra-attrs` crate.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the error as [`Any`], so that callers can check which kind of error occurred.
    fn as_any(&self) -> &dyn Any;

    /// The name of the error kind, such as `MismatchedBrackets`.
    fn name(&self) -> &'static str;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds an `ariadne` report labelling each span.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error kind together with the parts of the source it concerns.
#[derive(Debug)]
pub struct Error {
    /// Byte ranges into the source. The first one determines [`Error::offset`].
    pub spans: Vec<Range<usize>>,

    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the source offset of the error, which is the start of its first span.
    pub fn offset(&self) -> usize {
        self.spans.first().map_or(0, |span| span.start)
    }

    /// Returns true if the error is of the given kind.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the error kind as the given type, if it is of that kind.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Builds the report, naming the source `src_id`.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error against the given source into a string, with colors.
    pub fn render(&self, src_id: &str, input: &str) -> String {
        let mut buf = Vec::new();
        // writing into a `Vec` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(input)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        let _ = self.build_report(src_id).eprint((src_id, Source::from(input)));
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind.message(), self.offset())
    }
}

impl std::error::Error for Error {}
