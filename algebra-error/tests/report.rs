use algebra_attrs::ErrorKind;
use algebra_error::Error;

/// A test error with a field used in its message.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("operator '{}' is broken", op),
    labels = ["this operator"],
    help = "try another operator",
)]
pub struct BrokenOperator {
    pub op: char,
}

/// A test error without fields.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "something went wrong")]
pub struct Unlabelled;

#[test]
fn derive_name_and_message() {
    let err = Error::new(vec![2..3], BrokenOperator { op: '^' });
    assert_eq!(err.kind.name(), "BrokenOperator");
    assert_eq!(err.kind.message(), "operator '^' is broken");
    assert_eq!(err.offset(), 2);
    assert_eq!(err.to_string(), "operator '^' is broken at offset 2");
}

#[test]
fn downcast_to_kind() {
    let err = Error::new(vec![0..1], BrokenOperator { op: '*' });
    assert!(err.is::<BrokenOperator>());
    assert!(!err.is::<Unlabelled>());
    assert_eq!(err.downcast_ref::<BrokenOperator>(), Some(&BrokenOperator { op: '*' }));
}

#[test]
fn render_report() {
    let err = Error::new(vec![2..3], BrokenOperator { op: '^' });
    let rendered = strip_ansi_escapes::strip(err.render("input", "x ^ 2"));
    let rendered = String::from_utf8(rendered).unwrap();

    assert!(rendered.contains("operator '^' is broken"));
    assert!(rendered.contains("this operator"));
    assert!(rendered.contains("try another operator"));
}

#[test]
fn render_report_without_labels() {
    let err = Error::new(vec![0..1], Unlabelled);
    let rendered = strip_ansi_escapes::strip(err.render("input", "x"));
    let rendered = String::from_utf8(rendered).unwrap();

    assert!(rendered.contains("something went wrong"));
}
