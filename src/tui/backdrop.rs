//! # Page Backdrop
//!
//! The screen-wide background colour. While the comparison view is mounted it
//! paints the whole frame dark; when it unmounts, whatever was there before
//! comes back (usually the terminal's own default, i.e. no colour at all).
//!
//! ```rust,ignore
//! let mounted = tui.page.mount();
//! // ... event loop ...
//! mounted.unmount(&mut tui.page);
//! ```

use log::debug;
use ratatui::style::Color;

/// Dark backdrop applied while the view is mounted (`#1a1a1a`).
pub const PAGE_BACKGROUND: Color = Color::Rgb(0x1a, 0x1a, 0x1a);

/// Page-level visual properties shared by everything drawn on screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// `None` leaves the terminal's default background alone.
    pub background: Option<Color>,
}

impl Page {
    /// Applies the dark backdrop and remembers what it replaced.
    #[must_use = "keep the token to restore the previous background on unmount"]
    pub fn mount(&mut self) -> Mounted {
        let previous = self.background.replace(PAGE_BACKGROUND);
        debug!("Page mounted: background {:?} -> {:?}", previous, self.background);
        Mounted { previous }
    }
}

/// Proof that the backdrop was applied. Consumed by `unmount`.
#[derive(Debug)]
pub struct Mounted {
    previous: Option<Color>,
}

impl Mounted {
    /// Restores the background that was in place before `mount`.
    pub fn unmount(self, page: &mut Page) {
        debug!("Page unmounted: background restored to {:?}", self.previous);
        page.background = self.previous;
    }
}
