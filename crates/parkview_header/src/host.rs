//! Navigation chrome capability

/// The screen-stack chrome hosting a screen's header
///
/// Controllers never render the header; they only tell the host what the
/// title should read.
pub trait NavigationHost {
    fn set_header_title(&mut self, title: &str);
}

impl<F> NavigationHost for F
where
    F: FnMut(&str),
{
    fn set_header_title(&mut self, title: &str) {
        self(title)
    }
}
