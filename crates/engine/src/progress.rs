use std::path::Path;

/// Something the walker observed while descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    /// A subdirectory was found and is about to be listed.
    DirectoryEntered(&'a Path),
    FileFound(&'a Path),
    /// A directory was listed and had no children.
    EmptyDirectory(&'a Path),
}

/// Receiver for [`WalkEvent`]s. Rendering is entirely up to the implementor.
pub trait TraversalSink {
    fn on_event(&mut self, event: WalkEvent<'_>);
}

impl<F> TraversalSink for F
where
    F: FnMut(WalkEvent<'_>),
{
    fn on_event(&mut self, event: WalkEvent<'_>) {
        self(event);
    }
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraversalSink for NullSink {
    fn on_event(&mut self, _event: WalkEvent<'_>) {}
}
