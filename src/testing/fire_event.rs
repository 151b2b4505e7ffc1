//! Simulated user interaction.

use crate::testing::error::QueryError;
use crate::testing::screen::Element;

/// Activate `element` as a user click would.
///
/// Runs the element's click handler synchronously; any re-render it causes
/// has completed when this returns.
pub fn click(element: &Element) -> Result<(), QueryError> {
    let handler = element
        .click_handler()?
        .ok_or_else(|| QueryError::NotClickable {
            selector: element.selector().clone(),
        })?;
    tracing::debug!(target_element = %element.selector(), "click");
    handler()?;
    Ok(())
}
