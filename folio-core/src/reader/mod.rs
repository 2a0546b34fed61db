//! Interactive reader views and the session loop that drives them

mod paged;
mod session;
mod text;

pub use paged::PagedView;
pub use session::{Command, InputSource, Session, SessionState};
pub use text::TextView;

use std::borrow::Cow;

/// A document being read, positioned at one display unit
///
/// The session only talks to views through this trait; each view owns its
/// position and decides what a bookmark means for its format.
pub trait View {
    /// File name shown in the header
    fn title(&self) -> &str;

    /// Word used for a unit in the header ("Page" or "Chapter")
    fn unit_label(&self) -> &'static str;

    /// Zero-based index of the unit on screen
    fn position(&self) -> usize;

    /// Number of units in the document
    fn total(&self) -> usize;

    /// Text of the unit on screen
    fn body(&self) -> Cow<'_, str>;

    /// Command hint printed under the body
    fn hint(&self) -> &'static str;

    /// Move forward one unit; returns false when already at the end
    fn next(&mut self) -> bool;

    /// Move back one unit; returns false when already at the start
    fn prev(&mut self) -> bool;

    /// Whether the `s` command is available
    fn supports_search(&self) -> bool {
        false
    }

    /// Jump to the first match of `keyword`, returning the number of matches
    fn search(&mut self, _keyword: &str) -> usize {
        0
    }

    /// Value stored in the bookmark file when the session ends
    fn bookmark(&self) -> u64;
}
