use super::error::{BodyCheck, ScenarioError};
use super::target::first_line;

/// Compare two trimmed bodies.
///
/// `same_first_line` states whether the content-date lines must match or
/// must differ; `identical` does the same for the whole body.
pub fn compare_bodies(
    during: &str,
    a: &str,
    b: &str,
    same_first_line: bool,
    identical: bool,
) -> Result<(), ScenarioError> {
    let lines_equal = first_line(a) == first_line(b);
    let check = if same_first_line && !lines_equal {
        Some(BodyCheck::FirstLineDiffers)
    } else if !same_first_line && lines_equal {
        Some(BodyCheck::FirstLineSame)
    } else if identical && a != b {
        Some(BodyCheck::BodiesDiffer)
    } else if !identical && a == b {
        Some(BodyCheck::BodiesIdentical)
    } else {
        None
    };
    match check {
        Some(check) => Err(ScenarioError::BodyMismatch {
            during: during.to_string(),
            check,
        }),
        None => Ok(()),
    }
}
